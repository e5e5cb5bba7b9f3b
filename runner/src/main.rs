// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for running matches and tournaments
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, ValueEnum};
use gwent_agents::{Agent, HybridAgent, RandomAgent};
use gwent_engine::catalog;
use gwent_engine::types::{Card, PlayerId};
use gwent_tournament::{run_series, MatchSetup};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Hybrid,
    Random,
}

impl AgentKind {
    fn build(self, player: &PlayerId, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Hybrid => Box::new(HybridAgent::new(player.clone())),
            AgentKind::Random => Box::new(RandomAgent::new(player.clone(), seed)),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Hybrid => write!(f, "hybrid"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gwent-runner", about = "Run Gwent matches between AI agents")]
struct Cli {
    /// Base seed for deck shuffling and random agents.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of matches to play.
    #[arg(long, default_value_t = 20)]
    matches: usize,

    /// Agent for player one (Northern Realms deck).
    #[arg(long, value_enum, default_value_t = AgentKind::Hybrid)]
    p1: AgentKind,

    /// Agent for player two (Skellige deck).
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    p2: AgentKind,

    /// Emit the series report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let p1 = PlayerId::from("P1");
    let p2 = PlayerId::from("P2");

    let make_setup = |seed: u64| -> MatchSetup {
        let mut agents: HashMap<PlayerId, Box<dyn Agent>> = HashMap::new();
        agents.insert(p1.clone(), cli.p1.build(&p1, seed));
        agents.insert(p2.clone(), cli.p2.build(&p2, seed.wrapping_add(1)));
        let decks: [(PlayerId, Vec<Card>); 2] = [
            (p1.clone(), catalog::northern_realms_deck()),
            (p2.clone(), catalog::skellige_deck()),
        ];
        (agents, decks)
    };

    println!("=== Gwent Strategy Lab ===\n");
    println!(
        "Running {} match(es): {} (P1) vs {} (P2), seed {}\n",
        cli.matches, cli.p1, cli.p2, cli.seed
    );

    let report = run_series(make_setup, cli.matches, cli.seed);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
        return;
    }

    println!("Series finished!");
    println!("  Matches:        {}", report.matches);
    println!("  Drawn matches:  {}", report.drawn_matches);
    println!("  Failed matches: {}", report.failed_matches);
    println!("  Average rounds: {:.2}", report.average_rounds);
    println!();
    println!("  Standings:");
    for (agent, wins) in &report.wins {
        println!("    {agent:10} — {wins} win(s)");
    }
}
