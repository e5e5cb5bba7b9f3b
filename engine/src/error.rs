// ═══════════════════════════════════════════════════════════════════════
// Engine errors — every rejected operation maps to one variant
// ═══════════════════════════════════════════════════════════════════════

use crate::types::CardId;
use thiserror::Error;

/// Failures surfaced to the driver. Operations that return an error leave
/// the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no active round")]
    NoActiveRound,

    #[error("card {0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("a target row is required and none was given")]
    InvalidRow,

    #[error("this card requires a target unit")]
    MissingTarget,

    #[error("target unit {0} is not on the acting player's rows")]
    TargetNotOnBoard(CardId),
}
