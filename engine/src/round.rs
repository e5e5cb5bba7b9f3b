// ═══════════════════════════════════════════════════════════════════════
// Round — turn alternation, passing, winner determination
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::error::EngineError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// A single scoring pass. The players and board live on the match; the
/// round only tracks whose turn it is and whether play has stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub turn_index: usize,
    pub finished: bool,
}

impl Round {
    pub fn new() -> Round {
        Round {
            turn_index: 0,
            finished: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.turn_index
    }

    /// Play a card out of the acting player's hand. The hand is only
    /// touched once the board has accepted the play, so a rejected play
    /// leaves everything as it was.
    pub fn play_card(
        &mut self,
        players: &mut [Player; 2],
        board: &mut Board,
        player: &PlayerId,
        card: &CardId,
        target_row: Option<Row>,
        target_unit: Option<&CardId>,
    ) -> Result<(), EngineError> {
        let idx = players
            .iter()
            .position(|p| &p.id == player)
            .ok_or_else(|| EngineError::CardNotInHand(card.clone()))?;
        let hand_pos = players[idx]
            .hand_position(card)
            .ok_or_else(|| EngineError::CardNotInHand(card.clone()))?;

        let played = players[idx].hand[hand_pos].clone();
        let mut events = board.play_card(player, played, target_row, target_unit)?;
        players[idx].hand.remove(hand_pos);

        // Spy: the playing player draws two.
        if events.spy_played.is_some() {
            for _ in 0..2 {
                if let Some(drawn) = board.draw_from_deck(player) {
                    players[idx].hand.push(drawn);
                }
            }
        }
        // Decoy: the pulled unit goes back to the playing player's hand.
        if let Some(unit) = events.decoy_returned.take() {
            players[idx].hand.push(unit);
        }

        self.check_auto_end(players);
        self.advance_turn(players);
        Ok(())
    }

    pub fn pass_turn(&mut self, players: &mut [Player; 2], player: &PlayerId) {
        let p = players
            .iter_mut()
            .find(|p| &p.id == player)
            .expect("unknown player");
        p.passed = true;
        self.check_auto_end(players);
        if !self.finished {
            self.advance_turn(players);
        }
    }

    /// The round stops once every player has passed or emptied their hand.
    fn check_auto_end(&mut self, players: &[Player; 2]) {
        if players.iter().all(|p| p.passed || p.hand.is_empty()) {
            self.finished = true;
        }
    }

    /// Rotate to the next player still able to act. A full circle means
    /// the round is over and auto-end already caught it.
    fn advance_turn(&mut self, players: &[Player; 2]) {
        if self.finished {
            return;
        }
        let start = self.turn_index;
        loop {
            self.turn_index = (self.turn_index + 1) % players.len();
            if self.turn_index == start {
                break;
            }
            let candidate = &players[self.turn_index];
            if !candidate.passed && !candidate.hand.is_empty() {
                break;
            }
        }
    }

    /// Defined only once finished. Equal totals are a draw (`None`).
    pub fn winner(&self, players: &[Player; 2], board: &Board) -> Option<PlayerId> {
        if !self.finished {
            return None;
        }
        let first = board.total_strength(&players[0].id);
        let second = board.total_strength(&players[1].id);
        if first == second {
            None
        } else if first > second {
            Some(players[0].id.clone())
        } else {
            Some(players[1].id.clone())
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Round::new()
    }
}
