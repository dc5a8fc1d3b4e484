//! Training session: table state, grading and statistics.
//!
//! ## Modules
//!
//! - `config`: JSON-loadable trainer configuration
//! - `seat`: Seats and table creation
//! - `state`: Deck, seats, button, betting round and audit log
//! - `stats`: Per-zone counters and reports
//! - `feedback`: Grading of the human's choice
//! - `session`: The `Trainer` state machine

pub mod config;
pub mod seat;
pub mod state;
pub mod stats;
pub mod feedback;
pub mod session;

pub use config::{TrainerConfig, MAX_RAISE_MULTIPLIER, MAX_SEATS, MAX_STACK, MIN_SEATS};
pub use seat::{Seat, HERO};
pub use state::{acting_before_hero, AuditEntry, BettingRound, GameState};
pub use stats::{SessionStats, StatsReport, ZoneReport, ZoneStats};
pub use feedback::Feedback;
pub use session::{HandReport, Outcome, Phase, Trainer};
