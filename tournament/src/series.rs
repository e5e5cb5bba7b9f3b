// ═══════════════════════════════════════════════════════════════════════
// Series — many seeded matches in parallel, aggregated in memory
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{run_match, MatchResult};
use gwent_agents::Agent;
use gwent_engine::types::*;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Everything one match needs: agents keyed by player, and the two decks
/// in seating order.
pub type MatchSetup = (HashMap<PlayerId, Box<dyn Agent>>, [(PlayerId, Vec<Card>); 2]);

#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub matches: usize,
    pub base_seed: u64,
    /// Match wins keyed by agent name.
    pub wins: BTreeMap<String, usize>,
    pub drawn_matches: usize,
    pub failed_matches: usize,
    pub average_rounds: f64,
}

/// Run `matches` seeded matches in parallel. `make_setup` builds fresh
/// agents and decks per seed, so agent state never leaks across matches.
pub fn run_series<F>(make_setup: F, matches: usize, base_seed: u64) -> SeriesReport
where
    F: Fn(u64) -> MatchSetup + Sync,
{
    let results: Vec<Result<MatchResult, String>> = (0..matches as u64)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i.wrapping_mul(7919));
            let (mut agents, decks) = make_setup(seed);
            run_match(&mut agents, decks, seed, 10_000)
        })
        .collect();

    let mut wins: BTreeMap<String, usize> = BTreeMap::new();
    let mut drawn_matches = 0;
    let mut failed_matches = 0;
    let mut completed = 0usize;
    let mut total_rounds = 0u64;

    for result in &results {
        match result {
            Ok(r) => {
                completed += 1;
                total_rounds += u64::from(r.rounds_played);
                match &r.winner {
                    Some(w) => {
                        let name = r
                            .player_results
                            .iter()
                            .find(|pr| &pr.player == w)
                            .map(|pr| pr.agent_name.clone())
                            .unwrap_or_else(|| w.to_string());
                        *wins.entry(name).or_insert(0) += 1;
                    }
                    None => drawn_matches += 1,
                }
            }
            Err(_) => failed_matches += 1,
        }
    }

    SeriesReport {
        matches,
        base_seed,
        wins,
        drawn_matches,
        failed_matches,
        average_rounds: if completed > 0 {
            total_rounds as f64 / completed as f64
        } else {
            0.0
        },
    }
}
