// ═══════════════════════════════════════════════════════════════════════
// Random Agent — plays any legal card at random.
// Serves as baseline and for testing game engine stability.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Action, Agent};
use gwent_engine::types::*;
use gwent_engine::Match;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct RandomAgent {
    player: PlayerId,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(player: impl Into<PlayerId>, seed: u64) -> Self {
        RandomAgent {
            player: player.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build one legal action for a card, or None if it has no target.
    fn action_for(&mut self, game: &Match, card: &Card) -> Option<Action> {
        // Decoy and Mardroeme need a friendly unit on the board.
        if !card.is_unit() && (card.has(Ability::Decoy) || card.has(Ability::Mardroeme)) {
            let rows = game.board.rows_of(&self.player);
            let targets: Vec<CardId> = Row::ALL
                .iter()
                .flat_map(|&r| rows.get(r).cards.iter())
                .filter(|c| c.is_unit())
                .map(|c| c.id.clone())
                .collect();
            let target = targets.choose(&mut self.rng)?;
            return Some(Action::play_at(card, target));
        }
        // Horn specials need a row.
        if !card.is_unit() && card.has(Ability::Horn) {
            let row = *Row::ALL.as_slice().choose(&mut self.rng).unwrap();
            return Some(Action::play_on(card, row));
        }
        // Weather, scorch, spies and units all resolve without extra
        // targeting; the engine picks rows for agile units.
        Some(Action::play(card))
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn player(&self) -> &PlayerId {
        &self.player
    }

    fn choose_action(&mut self, game: &Match) -> Action {
        let hand = game.player(&self.player).hand.clone();
        if hand.is_empty() {
            return Action::Pass;
        }
        // Occasionally pass with cards in hand, to exercise pass flows.
        if self.rng.gen_bool(0.1) {
            return Action::Pass;
        }
        let mut order: Vec<&Card> = hand.iter().collect();
        order.shuffle(&mut self.rng);
        for card in order {
            if let Some(action) = self.action_for(game, card) {
                return action;
            }
        }
        Action::Pass
    }
}
