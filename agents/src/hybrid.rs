// ═══════════════════════════════════════════════════════════════════════
// Hybrid Agent — rule-guided candidate set + shallow evaluation.
// Significantly stronger than RandomAgent.
//
// Does a 1-ply lookahead over a filtered set of actions and scores each
// resulting state with a weighted heuristic. Fully deterministic: the
// same match state always yields the same action.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Action, Agent};
use gwent_engine::types::*;
use gwent_engine::Match;

/// Lead at which passing becomes attractive.
const SAFE_LEAD: i32 = 10;

/// Tactical abilities that are always worth considering from the hand.
const TACTICAL: [Ability; 6] = [
    Ability::Spy,
    Ability::Scorch,
    Ability::Medic,
    Ability::Horn,
    Ability::Weather,
    Ability::Decoy,
];

pub struct HybridAgent {
    player: PlayerId,
}

impl HybridAgent {
    pub fn new(player: impl Into<PlayerId>) -> Self {
        HybridAgent {
            player: player.into(),
        }
    }

    // ── Candidate generation ───────────────────────────────────────

    /// Every tactical special, plus at most three representative units
    /// (weakest, median, strongest). Ordering is stable.
    fn generate_candidates(&self, game: &Match) -> Vec<Action> {
        let hand = &game.player(&self.player).hand;
        if hand.is_empty() {
            return Vec::new();
        }

        let (specials, units): (Vec<&Card>, Vec<&Card>) = hand
            .iter()
            .partition(|c| TACTICAL.iter().any(|&a| c.has(a)));

        let mut units_sorted = units;
        units_sorted.sort_by_key(|c| c.base_power);
        let mut representatives: Vec<&Card> = Vec::new();
        if !units_sorted.is_empty() {
            representatives.push(units_sorted[0]);
            if units_sorted.len() > 2 {
                representatives.push(units_sorted[units_sorted.len() / 2]);
            }
            if units_sorted.len() > 1 {
                representatives.push(units_sorted[units_sorted.len() - 1]);
            }
        }

        let mut considered: Vec<&Card> = specials;
        for u in representatives {
            if !considered.iter().any(|c| c.id == u.id) {
                considered.push(u);
            }
        }

        let mut actions = Vec::new();
        for card in considered {
            actions.extend(self.card_actions(game, card));
        }
        actions
    }

    fn card_actions(&self, game: &Match, card: &Card) -> Vec<Action> {
        let board = &game.board;

        // Decoy / Mardroeme: aim at the highest-power unit on our rows.
        if card.has(Ability::Decoy) || card.has(Ability::Mardroeme) {
            let rows = board.rows_of(&self.player);
            let mut best: Option<&Card> = None;
            for r in Row::ALL {
                for c in &rows.get(r).cards {
                    if best.map_or(true, |b| c.base_power > b.base_power) {
                        best = Some(c);
                    }
                }
            }
            return match best {
                Some(target) => vec![Action::play_at(card, &target.id)],
                None => Vec::new(),
            };
        }

        // Spy: the resolver places it on the opponent's side.
        if card.has(Ability::Spy) {
            return vec![Action::play(card)];
        }

        // Weather and standalone Scorch need no targeting.
        if card.has(Ability::Weather) || (card.has(Ability::Scorch) && !card.is_unit()) {
            return vec![Action::play(card)];
        }

        // Horn special: the row where doubling buys the most.
        if card.has(Ability::Horn) && !card.is_unit() {
            let rows = board.rows_of(&self.player);
            let mut best_row = None;
            let mut best_gain = 0;
            for r in Row::ALL {
                let gain: i32 = rows
                    .get(r)
                    .cards
                    .iter()
                    .filter(|c| !c.is_hero())
                    .map(|c| c.base_power)
                    .sum();
                if gain > best_gain {
                    best_gain = gain;
                    best_row = Some(r);
                }
            }
            return match best_row {
                Some(r) => vec![Action::play_on(card, r)],
                None => Vec::new(),
            };
        }

        // Units, agile included: the row maximizing immediate strength.
        let rows_to_try: Vec<Row> = if card.is_agile() {
            card.combat_rows.clone()
        } else {
            card.home_row.into_iter().collect()
        };
        let mut best_row = None;
        let mut best_score = i32::MIN;
        for &r in &rows_to_try {
            let approx = board.row_strength(&self.player, r) + card.base_power;
            if approx > best_score {
                best_score = approx;
                best_row = Some(r);
            }
        }
        match best_row {
            Some(r) => vec![Action::play_on(card, r)],
            None => Vec::new(),
        }
    }

    // ── Heuristics ─────────────────────────────────────────────────

    /// Pass outright on a safe lead, unless we are down on lives in a
    /// decisive round and cannot afford to coast.
    fn should_pass_immediately(&self, game: &Match) -> bool {
        let opp = game.board.opponent(&self.player).clone();
        let lead = game.board.total_strength(&self.player) - game.board.total_strength(&opp);
        if lead < SAFE_LEAD {
            return false;
        }
        let my_lives = game.lives_of(&self.player);
        let opp_lives = game.lives_of(&opp);
        if my_lives < opp_lives && game.round_number >= 2 {
            return false;
        }
        true
    }

    /// Score the state the action would lead to, from a derived numeric
    /// snapshot. The real board is never touched.
    fn evaluate(&self, game: &Match, action: &Action) -> f64 {
        let board = &game.board;
        let me = &self.player;
        let opp = board.opponent(me);

        let mut my_total = board.total_strength(me);
        let mut opp_total = board.total_strength(opp);
        let mut my_cards = (game.player(me).hand.len() + board.deck(me).len()) as i32;
        let opp_cards = (game.player(opp).hand.len() + board.deck(opp).len()) as i32;

        let mut ability_bonus = 0;
        if let Action::Play {
            card,
            target_row,
            target_unit,
        } = action
        {
            if let Some(c) = game.player(me).hand.iter().find(|c| &c.id == card) {
                my_cards -= 1;
                if c.has(Ability::Spy) {
                    ability_bonus += 8;
                }
                if c.has(Ability::Scorch) {
                    ability_bonus += 6;
                }
                if c.has(Ability::Medic) {
                    ability_bonus += 5;
                }
                if c.has(Ability::Horn) {
                    ability_bonus += 4;
                }
                if c.has(Ability::Weather) {
                    ability_bonus += 3;
                }

                if c.is_unit() && c.has(Ability::Spy) {
                    // Lands on their side, draws us two.
                    opp_total += c.base_power;
                    my_cards += 2;
                } else if c.is_unit() {
                    let rows = board.rows_of(me);
                    let gain = match target_row {
                        Some(r) => rows.get(*r).preview_gain(c),
                        None => {
                            let candidates: Vec<Row> = if c.is_agile() {
                                c.combat_rows.clone()
                            } else {
                                c.home_row.into_iter().collect()
                            };
                            candidates
                                .iter()
                                .map(|&r| rows.get(r).preview_gain(c))
                                .max()
                                .unwrap_or(0)
                        }
                    };
                    my_total += gain;
                } else if c.has(Ability::Horn) {
                    if let Some(r) = target_row {
                        let gain: i32 = rows_gain_for_horn(board, me, *r);
                        my_total += gain;
                    }
                } else if c.has(Ability::Decoy) {
                    // The decoy leaves the hand but the unit comes back:
                    // card count is a wash.
                    my_cards += 1;
                } else if c.has(Ability::Mardroeme) {
                    if let Some(t) = target_unit.as_ref() {
                        let rows = board.rows_of(me);
                        for r in Row::ALL {
                            if let Some(unit) = rows.get(r).find(t) {
                                if unit.has(Ability::Berserker) {
                                    my_total += unit.base_power.max(8) - unit.base_power;
                                }
                                break;
                            }
                        }
                    }
                }
            }
        }

        let life_adv = game.lives_of(me) as i32 - game.lives_of(opp) as i32;
        let my_wins = game.wins_of(me);
        let opp_wins = game.wins_of(opp);
        let round_bonus = if my_wins > opp_wins {
            3
        } else if my_wins < opp_wins {
            -3
        } else {
            0
        };

        1.0 * f64::from(my_total - opp_total)
            + 0.7 * f64::from(my_cards - opp_cards)
            + 1.5 * f64::from(life_adv)
            + 1.0 * f64::from(round_bonus)
            + 0.5 * f64::from(ability_bonus)
    }
}

/// Horn gain approximation: the sum of non-hero powers on the row.
fn rows_gain_for_horn(board: &gwent_engine::Board, player: &PlayerId, row: Row) -> i32 {
    board
        .rows_of(player)
        .get(row)
        .cards
        .iter()
        .filter(|c| !c.is_hero())
        .map(|c| c.base_power)
        .sum()
}

impl Agent for HybridAgent {
    fn name(&self) -> &str {
        "Hybrid"
    }

    fn player(&self) -> &PlayerId {
        &self.player
    }

    fn choose_action(&mut self, game: &Match) -> Action {
        let mut candidates = self.generate_candidates(game);
        if candidates.is_empty() {
            return Action::Pass;
        }
        candidates.push(Action::Pass);

        if self.should_pass_immediately(game) {
            return Action::Pass;
        }

        // Strict comparison: the first candidate scored keeps ties.
        let mut best_score = f64::NEG_INFINITY;
        let mut best_action = candidates[0].clone();
        for action in &candidates {
            let score = self.evaluate(game, action);
            if score > best_score {
                best_score = score;
                best_action = action.clone();
            }
        }
        best_action
    }
}
