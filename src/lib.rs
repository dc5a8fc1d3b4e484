//! # Preflop Trainer
//!
//! A trainer for pre-flop poker decisions. Hands are dealt to a human in seat
//! 0 and to computer opponents; the human's fold/call/raise is graded against
//! the optimal range chart for their table position.
//!
//! ## Features
//!
//! - **Range Charts**: Optimal, loose and tight charts per table zone
//! - **Range Notation**: "TT+", "A5s-A2s", "JTs-76s" expanded at load time
//! - **Decision Policy**: Pure function from hand, zone and archetype to action
//! - **Session State Machine**: Explicit phases with typed errors
//! - **Statistics**: Per-zone played and correct rates, exportable as JSON
//!
//! ## Quick Start
//!
//! ```
//! use preflop_trainer::{Archetype, Choice, Trainer, TrainerConfig};
//!
//! let mut trainer = Trainer::new(TrainerConfig::default().with_seed(1)).unwrap();
//! trainer.setup(6).unwrap();
//!
//! let advice = trainer.advise(Archetype::Optimal).unwrap();
//! let outcome = trainer.submit_action(Choice::from(advice)).unwrap();
//! assert!(outcome.is_correct());
//!
//! trainer.next_hand().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`preflop`]: Cards, hand tokens, ranges, zones and the decision policy
//! - [`trainer`]: Table state, the session state machine and statistics
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Trainer (session)                        │
//! │  - Phase checks           - Dealing and button movement         │
//! │  - Opponent actions       - Grading and statistics              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ decide(hand, zone, archetype)
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌───────────┐         ┌───────────┐
//!    │  Hand   │         │  Zone     │         │  Range    │
//!    │  Tokens │         │  Resolver │         │  Charts   │
//!    └─────────┘         └───────────┘         └───────────┘
//! ```

#![warn(missing_docs)]

/// Error types.
pub mod error;

/// Pre-flop hand model and decision policy.
///
/// Everything here is pure: no randomness except through an injected RNG.
pub mod preflop;

/// Training session module.
///
/// Contains the `Trainer` state machine and the state it owns.
pub mod trainer;

// Re-export commonly used types at crate root for convenience
pub use error::{ParseError, Result, TrainerError};
pub use preflop::{
    decide, Action, Archetype, Card, Charts, Choice, HoleCards, Quote, RangeToken, Zone,
    ZoneStrategy,
};
pub use trainer::{Feedback, HandReport, Outcome, Phase, StatsReport, Trainer, TrainerConfig};
