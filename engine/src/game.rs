// ═══════════════════════════════════════════════════════════════════════
// Match — round sequencing, win/life bookkeeping, leader activation
//
// Best-of-three: first player to two round wins, hard stop after round 3.
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::error::EngineError;
use crate::round::Round;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub players: [Player; 2],
    pub board: Board,
    /// 1-based once the first round starts.
    pub round_number: u8,
    pub wins: HashMap<PlayerId, u8>,
    pub lives: HashMap<PlayerId, u8>,
    /// `None` before the first round and after the match ends.
    pub current_round: Option<Round>,
}

impl Match {
    pub fn new(players: [Player; 2]) -> Match {
        let ids = [players[0].id.clone(), players[1].id.clone()];
        let wins = ids.iter().map(|id| (id.clone(), 0)).collect();
        let lives = ids.iter().map(|id| (id.clone(), 2)).collect();
        Match {
            board: Board::new(ids),
            players,
            round_number: 0,
            wins,
            lives,
            current_round: None,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn player(&self, id: &PlayerId) -> &Player {
        self.players.iter().find(|p| &p.id == id).expect("unknown player")
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> &mut Player {
        self.players.iter_mut().find(|p| &p.id == id).expect("unknown player")
    }

    pub fn wins_of(&self, id: &PlayerId) -> u8 {
        self.wins.get(id).copied().unwrap_or(0)
    }

    pub fn lives_of(&self, id: &PlayerId) -> u8 {
        self.lives.get(id).copied().unwrap_or(0)
    }

    /// Whose turn it is, while a round is running.
    pub fn active_player(&self) -> Option<&PlayerId> {
        let round = self.current_round.as_ref()?;
        if round.finished {
            return None;
        }
        Some(&self.players[round.active_index()].id)
    }

    /// True once two wins are banked or three rounds have been played.
    pub fn is_over(&self) -> bool {
        self.round_number > 0 && self.current_round.is_none()
    }

    pub fn match_winner(&self) -> Option<&PlayerId> {
        self.players.iter().map(|p| &p.id).find(|id| self.wins_of(id) >= 2)
    }

    // ── Round lifecycle ────────────────────────────────────────────

    pub fn start_round(&mut self) {
        for p in &mut self.players {
            p.reset_for_new_round();
        }
        self.board.clear_weather();
        self.round_number += 1;
        debug!(round = self.round_number, "round started");
        self.current_round = Some(Round::new());
    }

    pub fn play_card(
        &mut self,
        player: &PlayerId,
        card: &CardId,
        target_row: Option<Row>,
        target_unit: Option<&CardId>,
    ) -> Result<(), EngineError> {
        let round = self.current_round.as_mut().ok_or(EngineError::NoActiveRound)?;
        round.play_card(&mut self.players, &mut self.board, player, card, target_row, target_unit)?;
        self.check_round_end();
        Ok(())
    }

    pub fn pass_turn(&mut self, player: &PlayerId) -> Result<(), EngineError> {
        let round = self.current_round.as_mut().ok_or(EngineError::NoActiveRound)?;
        round.pass_turn(&mut self.players, player);
        self.check_round_end();
        Ok(())
    }

    /// Activate the player's leader ability, at most once per match.
    /// Returns whether an effect was actually applied.
    pub fn use_leader(&mut self, player: &PlayerId) -> bool {
        let p = self.player(player);
        if p.leader_used {
            return false;
        }
        let text = match p.leader.as_ref().and_then(|l| l.leader_text.clone()) {
            Some(t) => t,
            None => return false,
        };
        let applied = crate::effects::activate_leader(&mut self.board, player, &text);
        if applied {
            debug!(player = %player, "leader ability used");
            self.player_mut(player).leader_used = true;
        }
        applied
    }

    fn check_round_end(&mut self) {
        let finished = self.current_round.as_ref().map_or(false, |r| r.finished);
        if !finished {
            return;
        }
        let round = self.current_round.as_ref().unwrap();
        let winner = round.winner(&self.players, &self.board);

        if let Some(w) = &winner {
            *self.wins.entry(w.clone()).or_insert(0) += 1;
        }
        // Everyone who did not win the round loses a life; a drawn round
        // costs both players one.
        for p in &self.players {
            if Some(&p.id) != winner.as_ref() {
                let lives = self.lives.entry(p.id.clone()).or_insert(0);
                *lives = lives.saturating_sub(1);
            }
        }
        debug!(round = self.round_number, winner = ?winner, "round finished");

        if self.wins.values().any(|&w| w >= 2) || self.round_number >= 3 {
            self.current_round = None;
            return;
        }

        // Each player draws one, the board is swept, and play continues.
        for i in 0..self.players.len() {
            let id = self.players[i].id.clone();
            if let Some(card) = self.board.draw_from_deck(&id) {
                self.players[i].hand.push(card);
            }
        }
        self.board.cleanup_after_round();
        self.start_round();
    }
}
