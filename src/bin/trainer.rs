//! Interactive pre-flop trainer.
//!
//! Deals hands in the terminal and grades each fold/call/raise against the
//! optimal chart for the seat's zone.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use preflop_trainer::trainer::HERO;
use preflop_trainer::{Archetype, Choice, Phase, Trainer, TrainerConfig, Zone};

#[derive(Parser)]
#[command(name = "preflop-trainer")]
#[command(about = "Practice pre-flop decisions against range charts")]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 6)]
    players: usize,
    /// Random seed for reproducible deals
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  f | c | r           fold, call or raise
  report              pot odds and EV for your hand
  show                everyone's cards
  flop                show the flop (after acting)
  next                deal the next hand
  stats               session statistics
  save <path>         write statistics as JSON
  chart <arch> <zone> print a range chart
  restart <players>   new table
  reset               clear everything
  q                   quit";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TrainerConfig::from_json_file(path)?,
        None => TrainerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut trainer = Trainer::new(config)?;
    trainer.setup(cli.players)?;

    println!("=== Pre-flop Trainer ===");
    println!("{}\n", HELP);
    print_table(&trainer);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = words.first() else {
            continue;
        };

        let result = match command {
            "q" | "quit" => break,
            "h" | "help" => {
                println!("{}", HELP);
                Ok(())
            }
            "report" => trainer.report().map(|r| {
                println!(
                    "{} ({}) in {}: strength {}, pot {}, to call {}, pot odds {}, EV {}, effective stack {}",
                    r.hand,
                    r.token,
                    r.zone,
                    r.strength,
                    r.pot,
                    r.to_call,
                    r.pot_odds,
                    r.expected_value,
                    r.effective_stack.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
                );
            }),
            "show" => trainer.show_hands().map(|seats| {
                for seat in seats {
                    let hand = seat.hand.map(|h| h.to_string()).unwrap_or_default();
                    println!("  seat {:>2} ({:<7}) {}", seat.index, seat.archetype, hand);
                }
            }),
            "flop" => trainer.show_flop().map(|flop| println!("Flop: {}", flop)),
            "next" => trainer.next_hand().map(|_| print_table(&trainer)),
            "stats" => {
                trainer.stats().print_summary();
                Ok(())
            }
            "save" => match words.get(1) {
                Some(path) => trainer.stats().save_json(path).map(|_| println!("Saved {}", path)),
                None => {
                    println!("usage: save <path>");
                    Ok(())
                }
            },
            "chart" => print_chart(&trainer, &words[1..]),
            "reset" => {
                trainer.reset();
                println!("Table cleared. Use 'restart <players>' to play again.");
                Ok(())
            }
            "restart" => match words.get(1).and_then(|w| w.parse().ok()) {
                Some(players) => trainer.restart(players).map(|_| print_table(&trainer)),
                None => {
                    println!("usage: restart <players>");
                    Ok(())
                }
            },
            other => match other.parse::<Choice>() {
                Ok(choice) => trainer.submit_action(choice).map(|outcome| {
                    println!("{} (optimal: {})", outcome.feedback, outcome.optimal);
                }),
                Err(_) => {
                    println!("unknown command {:?}, try 'help'", other);
                    Ok(())
                }
            },
        };

        if let Err(e) = result {
            println!("error: {}", e);
        }
    }

    println!();
    trainer.stats().print_summary();
    Ok(())
}

fn print_table(trainer: &Trainer) {
    let Some(state) = trainer.state() else {
        return;
    };
    println!(
        "\n--- Hand {} | {} players | button: seat {} ---",
        state.hands_dealt,
        state.seat_count(),
        state.button
    );

    for seat in &state.seats {
        let zone = seat.zone.map(|z| z.to_string()).unwrap_or_default();
        let status = if seat.index == HERO {
            seat.hand.map(|h| h.to_string()).unwrap_or_default()
        } else {
            match seat.action {
                Some(action) => action.to_string(),
                None => "-".to_string(),
            }
        };
        println!(
            "  seat {:>2} {:<6} stack {:>3}  {}{}",
            seat.index,
            zone,
            seat.stack,
            status,
            if seat.index == HERO { "  <- you" } else { "" }
        );
    }

    if trainer.phase() == Phase::AwaitingHumanAction {
        println!("Your move: f / c / r");
    }
}

fn print_chart(trainer: &Trainer, args: &[&str]) -> preflop_trainer::Result<()> {
    let archetype: Archetype = args.first().copied().unwrap_or("optimal").parse()?;
    let zone: Zone = args.get(1).copied().unwrap_or("early").parse()?;
    trainer.charts().grid(archetype, zone).print_grid();
    Ok(())
}
