// ═══════════════════════════════════════════════════════════════════════
// Core types — players, rows, abilities, the card record
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Identifiers ────────────────────────────────────────────────────────
// Opaque string ids. Two physical copies of the same named card carry
// distinct CardIds.

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        PlayerId(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId(s.to_string())
    }
}

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Melee,
    Ranged,
    Siege,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Melee, Row::Ranged, Row::Siege];
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Row::Melee => write!(f, "Melee"),
            Row::Ranged => write!(f, "Ranged"),
            Row::Siege => write!(f, "Siege"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    NorthernRealms,
    Nilfgaard,
    Scoiatael,
    Monsters,
    Skellige,
    Neutral,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::NorthernRealms => write!(f, "Northern Realms"),
            Faction::Nilfgaard => write!(f, "Nilfgaardian Empire"),
            Faction::Scoiatael => write!(f, "Scoia'tael"),
            Faction::Monsters => write!(f, "Monsters"),
            Faction::Skellige => write!(f, "Skellige"),
            Faction::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Unit,
    Weather,
    Special,
    Leader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    TightBond,
    MoraleBoost,
    Medic,
    Spy,
    Decoy,
    Scorch,
    Horn,
    Weather,
    Hero,
    Muster,
    Agile,
    Avenger,
    Berserker,
    Mardroeme,
}

// ── Weather ────────────────────────────────────────────────────────────
// The five weather cards, keyed by their printed names.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    BitingFrost,
    ImpenetrableFog,
    TorrentialRain,
    SkelligeStorm,
    ClearWeather,
}

impl WeatherKind {
    pub fn from_name(name: &str) -> Option<WeatherKind> {
        match name.to_lowercase().as_str() {
            "biting frost" => Some(WeatherKind::BitingFrost),
            "impenetrable fog" => Some(WeatherKind::ImpenetrableFog),
            "torrential rain" => Some(WeatherKind::TorrentialRain),
            "skellige storm" => Some(WeatherKind::SkelligeStorm),
            "clear weather" => Some(WeatherKind::ClearWeather),
            _ => None,
        }
    }

    /// Rows this weather strikes. Empty for Clear Weather, which lifts all.
    pub fn rows(self) -> &'static [Row] {
        match self {
            WeatherKind::BitingFrost => &[Row::Melee],
            WeatherKind::ImpenetrableFog => &[Row::Ranged],
            WeatherKind::TorrentialRain => &[Row::Siege],
            WeatherKind::SkelligeStorm => &[Row::Melee, Row::Ranged, Row::Siege],
            WeatherKind::ClearWeather => &[],
        }
    }
}

// ── Card ───────────────────────────────────────────────────────────────
// A single immutable record covers every card variety; dispatch looks at
// `kind`, the ability set and `is_unit()`. Mutable per-card flags
// (avenged/transformed) live in the board's side table, keyed by id.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub faction: Faction,
    pub kind: CardKind,
    /// Preferred row when the play names none. `None` for row-less cards
    /// (weather, specials, leaders).
    pub home_row: Option<Row>,
    /// Non-empty for agile units: every row the unit may be placed on.
    pub combat_rows: Vec<Row>,
    pub base_power: i32,
    pub hero: bool,
    pub abilities: Vec<Ability>,
    /// Muster/Avenger sibling tag. Falls back to `name` for muster.
    pub group: Option<String>,
    /// Leader ability text, matched by `effects::LeaderEffect::parse`.
    pub leader_text: Option<String>,
}

impl Card {
    pub fn unit(id: &str, name: &str, faction: Faction, row: Row, power: i32) -> Card {
        Card {
            id: CardId::from(id),
            name: name.to_string(),
            faction,
            kind: CardKind::Unit,
            home_row: Some(row),
            combat_rows: Vec::new(),
            base_power: power,
            hero: false,
            abilities: Vec::new(),
            group: None,
            leader_text: None,
        }
    }

    pub fn special(id: &str, name: &str, ability: Ability) -> Card {
        Card {
            id: CardId::from(id),
            name: name.to_string(),
            faction: Faction::Neutral,
            kind: CardKind::Special,
            home_row: None,
            combat_rows: Vec::new(),
            base_power: 0,
            hero: false,
            abilities: vec![ability],
            group: None,
            leader_text: None,
        }
    }

    pub fn weather(id: &str, name: &str) -> Card {
        Card {
            id: CardId::from(id),
            name: name.to_string(),
            faction: Faction::Neutral,
            kind: CardKind::Weather,
            home_row: None,
            combat_rows: Vec::new(),
            base_power: 0,
            hero: false,
            abilities: vec![Ability::Weather],
            group: None,
            leader_text: None,
        }
    }

    pub fn leader(id: &str, name: &str, faction: Faction, ability_text: &str) -> Card {
        Card {
            id: CardId::from(id),
            name: name.to_string(),
            faction,
            kind: CardKind::Leader,
            home_row: None,
            combat_rows: Vec::new(),
            base_power: 0,
            hero: true,
            abilities: vec![Ability::Hero],
            group: None,
            leader_text: Some(ability_text.to_string()),
        }
    }

    // ── Builder helpers ────────────────────────────────────────────

    pub fn with_ability(mut self, ability: Ability) -> Card {
        self.abilities.push(ability);
        self
    }

    pub fn as_hero(mut self) -> Card {
        self.hero = true;
        self
    }

    /// Mark the unit agile across the given rows. The first row doubles
    /// as the home row.
    pub fn agile(mut self, rows: &[Row]) -> Card {
        self.combat_rows = rows.to_vec();
        self.home_row = rows.first().copied().or(self.home_row);
        if !self.abilities.contains(&Ability::Agile) {
            self.abilities.push(Ability::Agile);
        }
        self
    }

    pub fn in_group(mut self, group: &str) -> Card {
        self.group = Some(group.to_string());
        self
    }

    // ── Queries ────────────────────────────────────────────────────

    pub fn has(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn is_unit(&self) -> bool {
        self.kind == CardKind::Unit
    }

    /// The hero flag and the Hero ability are interchangeable.
    pub fn is_hero(&self) -> bool {
        self.hero || self.has(Ability::Hero)
    }

    pub fn is_agile(&self) -> bool {
        !self.combat_rows.is_empty()
    }

    /// Group tag for muster matching; a card with no tag musters by name.
    pub fn muster_group(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.name)
    }
}

// ── Player ─────────────────────────────────────────────────────────────
// Hand and per-match flags only. The deck and graveyard are owned by the
// board so that every card has exactly one home at any instant.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    pub leader: Option<Card>,
    pub passed: bool,
    /// Persists across rounds within a match.
    pub leader_used: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, hand: Vec<Card>) -> Player {
        Player {
            id: id.into(),
            hand,
            leader: None,
            passed: false,
            leader_used: false,
        }
    }

    pub fn with_leader(mut self, leader: Card) -> Player {
        self.leader = Some(leader);
        self
    }

    pub fn hand_position(&self, card: &CardId) -> Option<usize> {
        self.hand.iter().position(|c| &c.id == card)
    }

    pub fn reset_for_new_round(&mut self) {
        self.passed = false;
    }
}
