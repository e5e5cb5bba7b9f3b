// ═══════════════════════════════════════════════════════════════════════
// Board — row scoring, play resolution, triggered effects
//
// Architecture:
//   Pure state machine. Never does I/O and never talks to agents.
//   `play_card` dispatches on the card's abilities, mutates the board and
//   returns a PlayEvents record; the round layer settles the follow-up
//   obligations (spy draws, decoy hand return).
//
// Modifier order in a row is fixed: weather → bond → morale → horn.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::EngineError;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

// ── Row scoring core ───────────────────────────────────────────────────

/// Score an arbitrary set of cards under the given weather/horn flags.
/// Shared by the live score, the with-card preview and the without-card
/// preview so that none of them has to mutate a row.
fn score_cards(cards: &[&Card], weather: bool, horn: bool) -> i32 {
    if cards.is_empty() {
        return 0;
    }
    let mut bond_counts: HashMap<&str, i32> = HashMap::new();
    for c in cards {
        if c.has(Ability::TightBond) {
            *bond_counts.entry(c.name.as_str()).or_insert(0) += 1;
        }
    }
    let morale = cards.iter().filter(|c| c.has(Ability::MoraleBoost)).count() as i32;

    let mut total = 0;
    for c in cards {
        // Weather clamps non-hero units to 1 before any multiplier.
        let mut value = if weather && !c.is_hero() {
            i32::from(c.is_unit())
        } else {
            c.base_power
        };
        if c.has(Ability::TightBond) {
            value *= bond_counts.get(c.name.as_str()).copied().unwrap_or(1);
        }
        if morale > 0 && c.is_unit() && !c.has(Ability::MoraleBoost) {
            value += morale;
        }
        if horn && c.is_unit() && !c.is_hero() {
            value *= 2;
        }
        total += value;
    }
    total
}

// ── Row state ──────────────────────────────────────────────────────────

/// One combat row for a single player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowState {
    pub row: Row,
    /// Placement order; not semantically significant.
    pub cards: Vec<Card>,
    /// Mirrored from the board's global weather map.
    pub weather_active: bool,
    /// Set by a Horn special or a Horn-carrying unit; cleared at round end.
    pub horn_active: bool,
}

impl RowState {
    pub fn new(row: Row) -> RowState {
        RowState {
            row,
            cards: Vec::new(),
            weather_active: false,
            horn_active: false,
        }
    }

    /// Units that carry the Horn ability switch the row horn on as they land.
    pub fn add(&mut self, card: Card) {
        if card.has(Ability::Horn) {
            self.horn_active = true;
        }
        self.cards.push(card);
    }

    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let idx = self.cards.iter().position(|c| &c.id == id)?;
        Some(self.cards.remove(idx))
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| &c.id == id)
    }

    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn effective_strength(&self) -> i32 {
        let refs: Vec<&Card> = self.cards.iter().collect();
        score_cards(&refs, self.weather_active, self.horn_active)
    }

    /// Row score as if `extra` were already placed here.
    pub fn strength_with(&self, extra: &Card) -> i32 {
        let refs: Vec<&Card> = self.cards.iter().chain(std::iter::once(extra)).collect();
        score_cards(&refs, self.weather_active, self.horn_active)
    }

    /// Row score as if the card with `skip` were gone.
    pub fn strength_without(&self, skip: &CardId) -> i32 {
        let refs: Vec<&Card> = self.cards.iter().filter(|c| &c.id != skip).collect();
        score_cards(&refs, self.weather_active, self.horn_active)
    }

    pub fn preview_gain(&self, card: &Card) -> i32 {
        self.strength_with(card) - self.effective_strength()
    }
}

/// The three rows of one player's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSet {
    pub melee: RowState,
    pub ranged: RowState,
    pub siege: RowState,
}

impl RowSet {
    pub fn new() -> RowSet {
        RowSet {
            melee: RowState::new(Row::Melee),
            ranged: RowState::new(Row::Ranged),
            siege: RowState::new(Row::Siege),
        }
    }

    pub fn get(&self, row: Row) -> &RowState {
        match row {
            Row::Melee => &self.melee,
            Row::Ranged => &self.ranged,
            Row::Siege => &self.siege,
        }
    }

    pub fn get_mut(&mut self, row: Row) -> &mut RowState {
        match row {
            Row::Melee => &mut self.melee,
            Row::Ranged => &mut self.ranged,
            Row::Siege => &mut self.siege,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowState> {
        [&self.melee, &self.ranged, &self.siege].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RowState> {
        [&mut self.melee, &mut self.ranged, &mut self.siege].into_iter()
    }
}

impl Default for RowSet {
    fn default() -> Self {
        RowSet::new()
    }
}

// ── Global weather ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherMap {
    pub melee: bool,
    pub ranged: bool,
    pub siege: bool,
}

impl WeatherMap {
    pub fn get(&self, row: Row) -> bool {
        match row {
            Row::Melee => self.melee,
            Row::Ranged => self.ranged,
            Row::Siege => self.siege,
        }
    }

    pub fn set(&mut self, row: Row, active: bool) {
        match row {
            Row::Melee => self.melee = active,
            Row::Ranged => self.ranged = active,
            Row::Siege => self.siege = active,
        }
    }

    pub fn clear(&mut self) {
        *self = WeatherMap::default();
    }

    pub fn any(&self) -> bool {
        self.melee || self.ranged || self.siege
    }
}

// ── Per-card mutable flags ─────────────────────────────────────────────
// Kept out of Card so card values stay copy-safe.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFlags {
    pub avenged: bool,
    pub transformed: bool,
}

// ── Play events ────────────────────────────────────────────────────────

/// What a single play did, for the round layer to settle.
#[derive(Debug, Default)]
pub struct PlayEvents {
    /// The unit a Decoy pulled off the board; belongs in the owner's hand.
    pub decoy_returned: Option<Card>,
    pub resurrected: Option<CardId>,
    pub spy_played: Option<CardId>,
    pub transformed: Option<CardId>,
}

// ── Board ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub players: [PlayerId; 2],
    pub rows: HashMap<PlayerId, RowSet>,
    /// Authoritative weather; every row's `weather_active` mirrors it.
    pub active_weather: WeatherMap,
    /// Deck top = index 0.
    pub decks: HashMap<PlayerId, Vec<Card>>,
    pub graveyards: HashMap<PlayerId, Vec<Card>>,
    pub flags: HashMap<CardId, CardFlags>,
}

impl Board {
    pub fn new(players: [PlayerId; 2]) -> Board {
        let mut rows = HashMap::new();
        let mut decks = HashMap::new();
        let mut graveyards = HashMap::new();
        for p in &players {
            rows.insert(p.clone(), RowSet::new());
            decks.insert(p.clone(), Vec::new());
            graveyards.insert(p.clone(), Vec::new());
        }
        Board {
            players,
            rows,
            active_weather: WeatherMap::default(),
            decks,
            graveyards,
            flags: HashMap::new(),
        }
    }

    pub fn opponent<'a>(&'a self, player: &'a PlayerId) -> &'a PlayerId {
        self.players.iter().find(|p| *p != player).unwrap_or(player)
    }

    pub fn rows_of(&self, player: &PlayerId) -> &RowSet {
        self.rows.get(player).expect("unknown player")
    }

    fn rows_mut(&mut self, player: &PlayerId) -> &mut RowSet {
        self.rows.get_mut(player).expect("unknown player")
    }

    pub fn deck(&self, player: &PlayerId) -> &[Card] {
        self.decks.get(player).expect("unknown player")
    }

    pub fn graveyard(&self, player: &PlayerId) -> &[Card] {
        self.graveyards.get(player).expect("unknown player")
    }

    fn graveyard_mut(&mut self, player: &PlayerId) -> &mut Vec<Card> {
        self.graveyards.get_mut(player).expect("unknown player")
    }

    pub fn add_to_deck(&mut self, player: &PlayerId, cards: Vec<Card>) {
        self.decks.get_mut(player).expect("unknown player").extend(cards);
    }

    pub fn draw_from_deck(&mut self, player: &PlayerId) -> Option<Card> {
        let deck = self.decks.get_mut(player).expect("unknown player");
        if deck.is_empty() {
            None
        } else {
            Some(deck.remove(0))
        }
    }

    pub fn card_flags(&self, id: &CardId) -> CardFlags {
        self.flags.get(id).copied().unwrap_or_default()
    }

    // ── Strength queries ───────────────────────────────────────────

    pub fn row_strength(&self, player: &PlayerId, row: Row) -> i32 {
        self.rows_of(player).get(row).effective_strength()
    }

    pub fn total_strength(&self, player: &PlayerId) -> i32 {
        Row::ALL.iter().map(|&r| self.row_strength(player, r)).sum()
    }

    pub fn snapshot(&self) -> HashMap<PlayerId, HashMap<String, i32>> {
        self.players
            .iter()
            .map(|p| {
                let per_row = Row::ALL
                    .iter()
                    .map(|&r| (r.to_string(), self.row_strength(p, r)))
                    .collect();
                (p.clone(), per_row)
            })
            .collect()
    }

    // ── Play resolution ────────────────────────────────────────────

    pub fn play_card(
        &mut self,
        player: &PlayerId,
        card: Card,
        target_row: Option<Row>,
        target_unit: Option<&CardId>,
    ) -> Result<PlayEvents, EngineError> {
        self.resolve_play(player, card, target_row, target_unit, false)
    }

    /// Dispatch order is load-bearing: first match wins, the rest of the
    /// ladder is skipped.
    fn resolve_play(
        &mut self,
        player: &PlayerId,
        card: Card,
        target_row: Option<Row>,
        target_unit: Option<&CardId>,
        suppress_muster: bool,
    ) -> Result<PlayEvents, EngineError> {
        let mut events = PlayEvents::default();

        // 1. Weather specials ignore row targeting entirely.
        if card.has(Ability::Weather) {
            if let Some(kind) = WeatherKind::from_name(&card.name) {
                self.apply_weather(kind);
            }
            debug!(card = %card.name, player = %player, "weather played");
            self.graveyard_mut(player).push(card);
            return Ok(events);
        }

        // 2. Scorch special: burn the strongest non-hero units anywhere.
        if card.has(Ability::Scorch) && !card.is_unit() {
            self.apply_scorch();
            self.graveyard_mut(player).push(card);
            return Ok(events);
        }

        // 3. Decoy: swap a placeholder for a friendly unit on the board.
        if card.has(Ability::Decoy) && !card.is_unit() {
            let target = target_unit.ok_or(EngineError::MissingTarget)?;
            let row = self
                .find_on_rows(player, target)
                .ok_or_else(|| EngineError::TargetNotOnBoard(target.clone()))?;
            let unit = self.rows_mut(player).get_mut(row).remove(target).unwrap();
            let place_row = target_row.unwrap_or(row);
            self.rows_mut(player).get_mut(place_row).add(card);
            events.decoy_returned = Some(unit);
            return Ok(events);
        }

        // 4. Mardroeme: transform a Berserker in place.
        if card.has(Ability::Mardroeme) && !card.is_unit() {
            let target = target_unit.ok_or(EngineError::MissingTarget)?;
            let row = self
                .find_on_rows(player, target)
                .ok_or_else(|| EngineError::TargetNotOnBoard(target.clone()))?;
            let is_berserker = self
                .rows_of(player)
                .get(row)
                .find(target)
                .map(|c| c.has(Ability::Berserker))
                .unwrap_or(false);
            if is_berserker {
                let old = self.rows_mut(player).get_mut(row).remove(target).unwrap();
                let transformed = transform_berserker(&old, row);
                let new_id = transformed.id.clone();
                debug!(card = %old.name, player = %player, "berserker transformed");
                self.flags.entry(new_id.clone()).or_default().transformed = true;
                self.rows_mut(player).get_mut(row).add(transformed);
                events.transformed = Some(new_id);
            }
            self.graveyard_mut(player).push(card);
            self.sync_weather_flags();
            return Ok(events);
        }

        // 5. Spy: lands on the opponent's side; the round layer pays out
        //    the two drawn cards.
        if card.has(Ability::Spy) && card.is_unit() {
            let opp = self.opponent(player).clone();
            let row = match target_row {
                Some(r) => r,
                None if card.is_agile() => self.best_row_for(&opp, &card),
                None => card.home_row.ok_or(EngineError::InvalidRow)?,
            };
            debug!(card = %card.name, player = %player, row = %row, "spy played");
            events.spy_played = Some(card.id.clone());
            self.rows_mut(&opp).get_mut(row).add(card);
            self.sync_weather_flags();
            return Ok(events);
        }

        // 6. Commander's Horn special on a row of the playing player.
        if card.has(Ability::Horn) && !card.is_unit() {
            let row = target_row.ok_or(EngineError::InvalidRow)?;
            self.rows_mut(player).get_mut(row).horn_active = true;
            self.sync_weather_flags();
            self.graveyard_mut(player).push(card);
            return Ok(events);
        }

        // 7. Unit placement, agile row selection included.
        let row = match target_row {
            Some(r) => r,
            None if card.is_agile() => self.best_row_for(player, &card),
            None => card.home_row.ok_or(EngineError::InvalidRow)?,
        };
        let fires_medic = card.has(Ability::Medic) && card.is_unit();
        let fires_muster = card.has(Ability::Muster) && !suppress_muster;
        let muster_group = card.muster_group().to_string();
        debug!(card = %card.name, player = %player, row = %row, "unit placed");
        self.rows_mut(player).get_mut(row).add(card);
        self.sync_weather_flags();

        // Medic: one resurrection, never chained into another medic.
        if fires_medic {
            if let Some(res) = self.take_best_resurrect(player) {
                let res_row = if res.is_agile() {
                    self.best_row_for(player, &res)
                } else {
                    res.home_row.unwrap_or(row)
                };
                debug!(card = %res.name, player = %player, row = %res_row, "resurrected");
                events.resurrected = Some(res.id.clone());
                self.rows_mut(player).get_mut(res_row).add(res);
                self.sync_weather_flags();
            }
        }

        // Muster: pull every same-group unit out of the deck. Nested plays
        // run with suppression so the chain stops after one level.
        if fires_muster {
            let deck = self.decks.get_mut(player).expect("unknown player");
            let mut pulled = Vec::new();
            let mut i = 0;
            while i < deck.len() {
                if deck[i].is_unit() && deck[i].group.as_deref() == Some(muster_group.as_str()) {
                    pulled.push(deck.remove(i));
                } else {
                    i += 1;
                }
            }
            for c in pulled {
                self.resolve_play(player, c, None, None, true)?;
            }
        }

        Ok(events)
    }

    // ── Weather ────────────────────────────────────────────────────

    pub fn apply_weather(&mut self, kind: WeatherKind) {
        match kind {
            WeatherKind::ClearWeather => self.active_weather.clear(),
            other => {
                for &r in other.rows() {
                    self.active_weather.set(r, true);
                }
            }
        }
        self.sync_weather_flags();
    }

    pub fn clear_weather(&mut self) {
        self.active_weather.clear();
        self.sync_weather_flags();
    }

    pub fn sync_weather_flags(&mut self) {
        let weather = self.active_weather;
        for set in self.rows.values_mut() {
            for rs in set.iter_mut() {
                rs.weather_active = weather.get(rs.row);
            }
        }
    }

    /// Leader-granted horn on one of the player's rows.
    pub fn set_row_horn(&mut self, player: &PlayerId, row: Row) {
        self.rows_mut(player).get_mut(row).horn_active = true;
    }

    // ── Scorch ─────────────────────────────────────────────────────

    /// Destroy the non-hero unit(s) of highest incremental value across
    /// both sides. A candidate's value is the row score drop its removal
    /// would cause, computed without touching the row.
    fn apply_scorch(&mut self) {
        let mut highest = 0;
        let mut victims: Vec<(PlayerId, Row, CardId)> = Vec::new();
        for p in self.players.clone() {
            for r in Row::ALL {
                let rs = self.rows_of(&p).get(r);
                let full = rs.effective_strength();
                for c in &rs.cards {
                    if !c.is_unit() || c.is_hero() {
                        continue;
                    }
                    let value = full - rs.strength_without(&c.id);
                    if value > highest {
                        highest = value;
                        victims.clear();
                        victims.push((p.clone(), r, c.id.clone()));
                    } else if value == highest && value > 0 {
                        victims.push((p.clone(), r, c.id.clone()));
                    }
                }
            }
        }
        for (p, r, id) in victims {
            if let Some(card) = self.rows_mut(&p).get_mut(r).remove(&id) {
                debug!(card = %card.name, player = %p, "scorched");
                self.on_unit_removed(&p, card, r);
            }
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn find_on_rows(&self, player: &PlayerId, id: &CardId) -> Option<Row> {
        let set = self.rows_of(player);
        Row::ALL.iter().copied().find(|&r| set.get(r).contains(id))
    }

    /// Row maximizing the incremental strength of placing `card`; ties
    /// break toward the first listed combat row.
    fn best_row_for(&self, player: &PlayerId, card: &Card) -> Row {
        let choices: Vec<Row> = if card.combat_rows.is_empty() {
            card.home_row.into_iter().collect()
        } else {
            card.combat_rows.clone()
        };
        let set = self.rows_of(player);
        let mut best_row = choices.first().copied().unwrap_or(Row::Melee);
        let mut best_gain = i32::MIN;
        for &r in &choices {
            let gain = set.get(r).preview_gain(card);
            if gain > best_gain {
                best_gain = gain;
                best_row = r;
            }
        }
        best_row
    }

    /// Highest-base-power non-hero unit in the graveyard; first of equals
    /// wins. Zero-power units are eligible.
    fn take_best_resurrect(&mut self, player: &PlayerId) -> Option<Card> {
        let gy = self.graveyards.get_mut(player).expect("unknown player");
        let mut best = -1;
        let mut best_idx = None;
        for (i, c) in gy.iter().enumerate() {
            if c.is_unit() && !c.is_hero() && c.base_power > best {
                best = c.base_power;
                best_idx = Some(i);
            }
        }
        best_idx.map(|i| gy.remove(i))
    }

    /// A unit leaving a row other than by Decoy. Avenger units come
    /// straight back once per physical card; everything else is buried.
    fn on_unit_removed(&mut self, player: &PlayerId, card: Card, row: Row) {
        let already_avenged = self.flags.get(&card.id).map_or(false, |f| f.avenged);
        if card.has(Ability::Avenger) && !already_avenged {
            self.flags.entry(card.id.clone()).or_default().avenged = true;
            debug!(card = %card.name, player = %player, "avenger returns");
            self.rows_mut(player).get_mut(row).add(card);
            self.sync_weather_flags();
        } else {
            self.graveyard_mut(player).push(card);
        }
    }

    // ── Round boundary ─────────────────────────────────────────────

    /// Sweep every row into its owner's graveyard and drop the per-row
    /// flags. Graveyards persist across rounds.
    pub fn cleanup_after_round(&mut self) {
        let players = self.players.clone();
        for p in &players {
            let set = self.rows.get_mut(p).expect("unknown player");
            let mut swept = Vec::new();
            for rs in set.iter_mut() {
                swept.append(&mut rs.cards);
                rs.horn_active = false;
                rs.weather_active = false;
            }
            self.graveyards.get_mut(p).expect("unknown player").extend(swept);
        }
    }
}

/// Mardroeme's replacement card: stronger, grounded, no longer a berserker.
fn transform_berserker(old: &Card, row: Row) -> Card {
    Card {
        id: CardId(format!("{}:t", old.id)),
        name: format!("{} (Transformed)", old.name),
        faction: old.faction,
        kind: old.kind,
        home_row: Some(row),
        combat_rows: Vec::new(),
        base_power: old.base_power.max(8),
        hero: old.hero,
        abilities: old
            .abilities
            .iter()
            .copied()
            .filter(|&a| a != Ability::Berserker && a != Ability::Agile)
            .collect(),
        group: old.group.clone(),
        leader_text: None,
    }
}
