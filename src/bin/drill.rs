//! Batch drill.
//!
//! Plays many seeded sessions in parallel with the human seat following one
//! archetype's chart, and reports how often each archetype agrees with the
//! optimal chart, zone by zone.

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use preflop_trainer::trainer::SessionStats;
use preflop_trainer::{Archetype, Choice, StatsReport, Trainer, TrainerConfig};

#[derive(Parser)]
#[command(name = "preflop-drill")]
#[command(about = "Score each archetype against the optimal chart over many hands")]
struct Cli {
    /// Sessions per archetype
    #[arg(long, default_value_t = 64)]
    sessions: u64,
    /// Hands per session
    #[arg(long, default_value_t = 500)]
    hands: u32,
    /// Players per table
    #[arg(short, long, default_value_t = 9)]
    players: usize,
    /// Base seed; session `i` uses `seed + i`
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the summary as JSON here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ArchetypeResult {
    archetype: Archetype,
    sessions: u64,
    hands_per_session: u32,
    stats: StatsReport,
}

#[derive(Serialize)]
struct DrillSummary {
    players: usize,
    elapsed_secs: f64,
    results: Vec<ArchetypeResult>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => TrainerConfig::from_json_file(path)?,
        None => TrainerConfig::default(),
    };
    base.check_player_count(cli.players)?;

    println!("=== Pre-flop Drill ===");
    println!(
        "{} sessions x {} hands per archetype, {} players\n",
        cli.sessions, cli.hands, cli.players
    );

    let start = Instant::now();
    let total = cli.sessions * Archetype::ALL.len() as u64;
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut results = Vec::new();
    for archetype in Archetype::ALL {
        bar.set_message(archetype.to_string());

        let sessions: Vec<SessionStats> = (0..cli.sessions)
            .into_par_iter()
            .map(|i| {
                let config = base.clone().with_seed(cli.seed.wrapping_add(i));
                let stats = play_session(config, cli.players, cli.hands, archetype);
                bar.inc(1);
                stats
            })
            .collect::<preflop_trainer::Result<Vec<_>>>()?;

        let mut merged = SessionStats::new();
        for stats in &sessions {
            merged.merge(stats);
        }
        results.push(ArchetypeResult {
            archetype,
            sessions: cli.sessions,
            hands_per_session: cli.hands,
            stats: merged.report(),
        });
    }
    bar.finish_with_message("done");

    let summary = DrillSummary {
        players: cli.players,
        elapsed_secs: start.elapsed().as_secs_f64(),
        results,
    };

    for result in &summary.results {
        println!("\n--- {} ---", result.archetype);
        result.stats.print_summary();
    }
    println!("\nTotal time: {:.2}s", summary.elapsed_secs);

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&summary)?;
        File::create(path)?.write_all(json.as_bytes())?;
        println!("Saved JSON: {}", path.display());
    }

    Ok(())
}

/// Play one session with the human seat following `archetype`.
fn play_session(
    config: TrainerConfig,
    players: usize,
    hands: u32,
    archetype: Archetype,
) -> preflop_trainer::Result<SessionStats> {
    let mut trainer = Trainer::new(config)?;
    trainer.setup(players)?;

    for hand in 0..hands {
        let action = trainer.advise(archetype)?;
        trainer.submit_action(Choice::from(action))?;
        if hand + 1 < hands {
            trainer.next_hand()?;
        }
    }

    Ok(trainer.state().map(|s| s.stats.clone()).unwrap_or_default())
}
