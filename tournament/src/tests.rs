// ═══════════════════════════════════════════════════════════════════════
// Tournament tests — dealing, full matches, series aggregation
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{deal, run_match, OPENING_HAND};
use crate::series::{run_series, MatchSetup};
use gwent_agents::{Agent, HybridAgent, RandomAgent};
use gwent_engine::catalog;
use gwent_engine::types::*;
use std::collections::HashMap;

fn pid(s: &str) -> PlayerId {
    PlayerId::from(s)
}

fn hybrid_vs_random(seed: u64) -> MatchSetup {
    let p1 = pid("P1");
    let p2 = pid("P2");
    let mut agents: HashMap<PlayerId, Box<dyn Agent>> = HashMap::new();
    agents.insert(p1.clone(), Box::new(HybridAgent::new(p1.clone())));
    agents.insert(p2.clone(), Box::new(RandomAgent::new(p2.clone(), seed)));
    let decks = [
        (p1, catalog::northern_realms_deck()),
        (p2, catalog::skellige_deck()),
    ];
    (agents, decks)
}

// ═════════════════════════════════════════════════════════════════════
// DEALING
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_deal_splits_opening_hand() {
    let deck = catalog::northern_realms_deck();
    let total = deck.len();
    let (hand, rest) = deal(deck, 5);
    assert_eq!(hand.len(), OPENING_HAND);
    assert_eq!(rest.len(), total - OPENING_HAND);
}

#[test]
fn test_deal_is_seed_deterministic() {
    let (h1, r1) = deal(catalog::skellige_deck(), 11);
    let (h2, r2) = deal(catalog::skellige_deck(), 11);
    let ids = |cards: &[Card]| cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&h1), ids(&h2));
    assert_eq!(ids(&r1), ids(&r2));
}

#[test]
fn test_deal_different_seeds_differ() {
    let (h1, _) = deal(catalog::skellige_deck(), 1);
    let (h2, _) = deal(catalog::skellige_deck(), 2);
    let ids = |cards: &[Card]| cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    assert_ne!(ids(&h1), ids(&h2));
}

// ═════════════════════════════════════════════════════════════════════
// FULL MATCHES
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_match_completes() {
    let (mut agents, decks) = hybrid_vs_random(42);
    let result = run_match(&mut agents, decks, 42, 10_000).expect("match should finish");
    assert!(
        (2..=3).contains(&result.rounds_played),
        "best-of-three runs two or three rounds, got {}",
        result.rounds_played
    );
    assert_eq!(result.player_results.len(), 2);
}

#[test]
fn test_match_is_deterministic() {
    let (mut a1, d1) = hybrid_vs_random(7);
    let (mut a2, d2) = hybrid_vs_random(7);
    let r1 = run_match(&mut a1, d1, 7, 10_000).unwrap();
    let r2 = run_match(&mut a2, d2, 7, 10_000).unwrap();
    assert_eq!(r1.winner, r2.winner);
    assert_eq!(r1.rounds_played, r2.rounds_played);
}

#[test]
fn test_matches_complete_across_seeds() {
    for seed in 0..10u64 {
        let (mut agents, decks) = hybrid_vs_random(seed * 7919);
        let result = run_match(&mut agents, decks, seed * 7919, 10_000);
        assert!(result.is_ok(), "seed {seed} failed: {result:?}");
    }
}

#[test]
fn test_match_result_serializes() {
    let (mut agents, decks) = hybrid_vs_random(3);
    let result = run_match(&mut agents, decks, 3, 10_000).unwrap();
    let json = serde_json::to_string(&result).expect("result serializes");
    assert!(json.contains("rounds_played"));
}

// ═════════════════════════════════════════════════════════════════════
// SERIES
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_series_accounts_for_every_match() {
    let report = run_series(hybrid_vs_random, 6, 42);
    let decided: usize = report.wins.values().sum();
    assert_eq!(
        decided + report.drawn_matches + report.failed_matches,
        report.matches
    );
    assert_eq!(report.matches, 6);
    assert_eq!(report.failed_matches, 0);
    assert!(report.average_rounds >= 2.0);
}
