// ═══════════════════════════════════════════════════════════════════════
// Match Runner — runs a complete headless match with agents
// ═══════════════════════════════════════════════════════════════════════

use gwent_agents::{Action, Agent};
use gwent_engine::types::*;
use gwent_engine::Match;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashMap;

pub const OPENING_HAND: usize = 10;

/// Result of a completed match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub seed: u64,
    /// `None` when the match ended without either player banking two wins.
    pub winner: Option<PlayerId>,
    pub rounds_played: u8,
    pub player_results: Vec<PlayerResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub agent_name: String,
    pub round_wins: u8,
    pub lives_left: u8,
    pub final_strength: i32,
    pub cards_left: usize,
}

/// Shuffle a deck with a seeded RNG and split off the opening hand.
pub fn deal(mut deck: Vec<Card>, seed: u64) -> (Vec<Card>, Vec<Card>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    let rest = deck.split_off(OPENING_HAND.min(deck.len()));
    (deck, rest)
}

/// Run a complete match with the given agents, one per player.
/// `max_actions` is a safety limit against runaway agents.
pub fn run_match(
    agents: &mut HashMap<PlayerId, Box<dyn Agent>>,
    decks: [(PlayerId, Vec<Card>); 2],
    seed: u64,
    max_actions: usize,
) -> Result<MatchResult, String> {
    let mut players = Vec::new();
    let mut reserves = Vec::new();
    for (i, (id, deck)) in decks.into_iter().enumerate() {
        let (hand, rest) = deal(deck, seed.wrapping_add(i as u64));
        players.push(Player::new(id.clone(), hand));
        reserves.push((id, rest));
    }
    let players: [Player; 2] = players.try_into().expect("two players");

    let mut game = Match::new(players);
    for (id, rest) in reserves {
        game.board.add_to_deck(&id, rest);
    }
    game.start_round();

    let mut actions_taken = 0usize;
    while !game.is_over() {
        let active = match game.active_player() {
            Some(p) => p.clone(),
            None => return Err("open round without an active player".to_string()),
        };
        let agent = agents
            .get_mut(&active)
            .ok_or_else(|| format!("no agent for player {active}"))?;
        let action = agent.choose_action(&game);
        match action {
            Action::Pass => game.pass_turn(&active).map_err(|e| e.to_string())?,
            Action::Play {
                card,
                target_row,
                target_unit,
            } => game
                .play_card(&active, &card, target_row, target_unit.as_ref())
                .map_err(|e| format!("agent {} made an illegal play: {e}", active))?,
        }
        actions_taken += 1;
        if actions_taken > max_actions {
            return Err(format!(
                "match exceeded {} actions without finishing (round {})",
                max_actions, game.round_number
            ));
        }
    }

    Ok(build_result(&game, seed, agents))
}

fn build_result(
    game: &Match,
    seed: u64,
    agents: &HashMap<PlayerId, Box<dyn Agent>>,
) -> MatchResult {
    let player_results = game
        .players
        .iter()
        .map(|p| PlayerResult {
            player: p.id.clone(),
            agent_name: agents
                .get(&p.id)
                .map(|a| a.name().to_string())
                .unwrap_or_default(),
            round_wins: game.wins_of(&p.id),
            lives_left: game.lives_of(&p.id),
            final_strength: game.board.total_strength(&p.id),
            cards_left: p.hand.len() + game.board.deck(&p.id).len(),
        })
        .collect();

    MatchResult {
        seed,
        winner: game.match_winner().cloned(),
        rounds_played: game.round_number,
        player_results,
    }
}
