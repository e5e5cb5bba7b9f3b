// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface that all AI agents must implement
//
// Agents observe the match and return one Action per turn. They never
// mutate game state; the driver applies the chosen action through the
// match controller.
// ═══════════════════════════════════════════════════════════════════════

use gwent_engine::types::*;
use gwent_engine::Match;

/// One decision: pass, or play a card with optional targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pass,
    Play {
        card: CardId,
        target_row: Option<Row>,
        target_unit: Option<CardId>,
    },
}

impl Action {
    pub fn play(card: &Card) -> Action {
        Action::Play {
            card: card.id.clone(),
            target_row: None,
            target_unit: None,
        }
    }

    pub fn play_on(card: &Card, row: Row) -> Action {
        Action::Play {
            card: card.id.clone(),
            target_row: Some(row),
            target_unit: None,
        }
    }

    pub fn play_at(card: &Card, target: &CardId) -> Action {
        Action::Play {
            card: card.id.clone(),
            target_row: None,
            target_unit: Some(target.clone()),
        }
    }
}

pub trait Agent: Send + Sync {
    /// Human-readable name for this agent (e.g. "Hybrid", "Random").
    fn name(&self) -> &str;

    /// The player this agent is controlling.
    fn player(&self) -> &PlayerId;

    /// Decide the next action from the agent's perspective of the match.
    fn choose_action(&mut self, game: &Match) -> Action;
}
