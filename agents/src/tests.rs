// ═══════════════════════════════════════════════════════════════════════
// Agent tests — determinism, candidate shaping, legality
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Action, Agent};
use crate::hybrid::HybridAgent;
use crate::random::RandomAgent;
use gwent_engine::types::*;
use gwent_engine::Match;

fn pid(s: &str) -> PlayerId {
    PlayerId::from(s)
}

fn cid(s: &str) -> CardId {
    CardId::from(s)
}

fn unit(id: &str, name: &str, power: i32) -> Card {
    Card::unit(id, name, Faction::Neutral, Row::Melee, power)
}

fn started_match(p1_hand: Vec<Card>, p2_hand: Vec<Card>) -> Match {
    let mut game = Match::new([Player::new("P1", p1_hand), Player::new("P2", p2_hand)]);
    game.start_round();
    game
}

fn apply(game: &mut Match, player: &PlayerId, action: Action) {
    match action {
        Action::Pass => game.pass_turn(player).expect("pass is legal"),
        Action::Play {
            card,
            target_row,
            target_unit,
        } => game
            .play_card(player, &card, target_row, target_unit.as_ref())
            .expect("agent actions must be legal"),
    }
}

// ═════════════════════════════════════════════════════════════════════
// HYBRID AGENT
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_hybrid_is_deterministic() {
    let game = started_match(
        vec![
            unit("a", "A", 3),
            unit("b", "B", 7),
            unit("spy", "Spy", 2).with_ability(Ability::Spy),
        ],
        vec![unit("c", "C", 4)],
    );
    let first = HybridAgent::new("P1").choose_action(&game);
    let second = HybridAgent::new("P1").choose_action(&game);
    assert_eq!(first, second);
}

#[test]
fn test_hybrid_passes_with_empty_hand() {
    let game = started_match(vec![], vec![unit("c", "C", 4)]);
    let action = HybridAgent::new("P1").choose_action(&game);
    assert_eq!(action, Action::Pass);
}

#[test]
fn test_hybrid_passes_on_safe_lead() {
    let mut game = started_match(
        vec![unit("x", "X", 5)],
        vec![unit("c", "C", 1), unit("d", "D", 1)],
    );
    game.board
        .rows
        .get_mut(&pid("P1"))
        .unwrap()
        .get_mut(Row::Melee)
        .add(unit("board", "Board", 20));
    // P1 leads 20 to 0 on even lives: pass and bank the round.
    let action = HybridAgent::new("P1").choose_action(&game);
    assert_eq!(action, Action::Pass);
}

#[test]
fn test_hybrid_keeps_playing_when_behind_on_lives() {
    let mut game = started_match(
        vec![unit("x", "X", 5)],
        vec![unit("c", "C", 1), unit("d", "D", 1)],
    );
    // A big lead, but P1 is down a life in a decisive round.
    game.board
        .rows
        .get_mut(&pid("P1"))
        .unwrap()
        .get_mut(Row::Melee)
        .add(unit("board", "Board", 20));
    game.lives.insert(pid("P1"), 1);
    game.round_number = 2;
    let action = HybridAgent::new("P1").choose_action(&game);
    assert_ne!(action, Action::Pass);
}

#[test]
fn test_hybrid_prefers_spy_over_small_unit() {
    let game = started_match(
        vec![
            unit("spy", "Thaler", 2).with_ability(Ability::Spy),
            unit("grunt", "Grunt", 1),
        ],
        vec![unit("c", "C", 4)],
    );
    let action = HybridAgent::new("P1").choose_action(&game);
    match action {
        Action::Play { card, .. } => assert_eq!(card, cid("spy")),
        other => panic!("expected spy play, got {other:?}"),
    }
}

#[test]
fn test_hybrid_decoy_targets_strongest_own_unit() {
    let mut game = started_match(
        vec![Card::special("decoy", "Decoy", Ability::Decoy)],
        vec![unit("c", "C", 4)],
    );
    game.board
        .rows
        .get_mut(&pid("P1"))
        .unwrap()
        .get_mut(Row::Melee)
        .add(unit("small", "Small", 3));
    game.board
        .rows
        .get_mut(&pid("P1"))
        .unwrap()
        .get_mut(Row::Ranged)
        .add(unit("large", "Large", 9));
    let action = HybridAgent::new("P1").choose_action(&game);
    match action {
        Action::Play {
            card, target_unit, ..
        } => {
            assert_eq!(card, cid("decoy"));
            assert_eq!(target_unit, Some(cid("large")));
        }
        other => panic!("expected decoy play, got {other:?}"),
    }
}

#[test]
fn test_hybrid_horn_picks_heaviest_row() {
    let mut game = started_match(
        vec![Card::special("horn", "Commander's Horn", Ability::Horn)],
        vec![unit("c", "C", 4)],
    );
    let rows = game.board.rows.get_mut(&pid("P1")).unwrap();
    rows.get_mut(Row::Melee).add(unit("m1", "M1", 5));
    rows.get_mut(Row::Melee).add(unit("m2", "M2", 3));
    rows.get_mut(Row::Siege).add(unit("s1", "S1", 2));
    let action = HybridAgent::new("P1").choose_action(&game);
    match action {
        Action::Play {
            card, target_row, ..
        } => {
            assert_eq!(card, cid("horn"));
            assert_eq!(target_row, Some(Row::Melee));
        }
        other => panic!("expected horn play, got {other:?}"),
    }
}

#[test]
fn test_hybrid_horn_skipped_on_empty_rows() {
    let game = started_match(
        vec![Card::special("horn", "Commander's Horn", Ability::Horn)],
        vec![unit("c", "C", 4)],
    );
    // Nothing to double anywhere: the only sensible action is to pass.
    let action = HybridAgent::new("P1").choose_action(&game);
    assert_eq!(action, Action::Pass);
}

#[test]
fn test_hybrid_plays_strongest_representative_unit() {
    let game = started_match(
        vec![
            unit("u1", "U1", 1),
            unit("u2", "U2", 3),
            unit("u3", "U3", 5),
            unit("u4", "U4", 7),
            unit("u5", "U5", 9),
        ],
        vec![unit("c", "C", 4)],
    );
    let action = HybridAgent::new("P1").choose_action(&game);
    match action {
        Action::Play { card, .. } => assert_eq!(card, cid("u5")),
        other => panic!("expected unit play, got {other:?}"),
    }
}

#[test]
fn test_hybrid_unit_goes_to_richest_row() {
    let mut game = started_match(
        vec![unit("ag", "Rider", 4).agile(&[Row::Melee, Row::Ranged])],
        vec![unit("c", "C", 4)],
    );
    game.board
        .rows
        .get_mut(&pid("P1"))
        .unwrap()
        .get_mut(Row::Ranged)
        .add(unit("anchor", "Anchor", 6));
    let action = HybridAgent::new("P1").choose_action(&game);
    match action {
        Action::Play { target_row, .. } => assert_eq!(target_row, Some(Row::Ranged)),
        other => panic!("expected unit play, got {other:?}"),
    }
}

#[test]
fn test_hybrid_actions_are_legal() {
    let mut game = started_match(
        vec![
            unit("a", "A", 3),
            unit("spy", "Spy", 2).with_ability(Ability::Spy),
            Card::special("sc", "Scorch", Ability::Scorch),
            Card::weather("wx", "Biting Frost"),
        ],
        vec![unit("c", "C", 4), unit("d", "D", 2)],
    );
    let mut agent = HybridAgent::new("P1");
    for _ in 0..4 {
        if game.is_over() || game.player(&pid("P1")).hand.is_empty() {
            break;
        }
        let action = agent.choose_action(&game);
        apply(&mut game, &pid("P1"), action);
        if game.current_round.is_some() {
            // Keep the opponent alive so the round stays open.
            let _ = game.pass_turn(&pid("P2"));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// RANDOM AGENT
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_random_agent_passes_with_empty_hand() {
    let game = started_match(vec![], vec![unit("c", "C", 4)]);
    let action = RandomAgent::new("P1", 7).choose_action(&game);
    assert_eq!(action, Action::Pass);
}

#[test]
fn test_random_agent_is_seed_deterministic() {
    let game = started_match(
        vec![unit("a", "A", 3), unit("b", "B", 7), unit("c", "C", 1)],
        vec![unit("d", "D", 4)],
    );
    let first = RandomAgent::new("P1", 99).choose_action(&game);
    let second = RandomAgent::new("P1", 99).choose_action(&game);
    assert_eq!(first, second);
}

#[test]
fn test_random_agent_actions_are_legal_across_seeds() {
    for seed in 0..20u64 {
        let mut game = started_match(
            vec![
                unit("a", "A", 3),
                Card::special("decoy", "Decoy", Ability::Decoy),
                Card::special("horn", "Commander's Horn", Ability::Horn),
                Card::weather("wx", "Torrential Rain"),
            ],
            vec![unit("c", "C", 4), unit("d", "D", 2)],
        );
        let mut agent = RandomAgent::new("P1", seed);
        let action = agent.choose_action(&game);
        apply(&mut game, &pid("P1"), action);
    }
}
