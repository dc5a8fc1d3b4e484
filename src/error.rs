//! Error types for the trainer.
//!
//! Errors fall into a few groups:
//! - validation of user input (player count),
//! - policy lookup (unknown archetype or zone, chart missing a zone),
//! - orchestrator misuse (operation called in the wrong phase),
//! - parsing of cards, range tokens and range notation,
//! - configuration loading.

use thiserror::Error;

use crate::preflop::{Archetype, Zone};
use crate::trainer::Phase;

/// Error raised while parsing cards, range tokens or range notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a two-character card code.
    #[error("invalid card: {0:?}")]
    InvalidCard(String),
    /// The same card appears twice in a hand.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(String),
    /// Unknown rank character.
    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),
    /// Unknown shape suffix.
    #[error("invalid suffix: {0:?} (expected 's' or 'o')")]
    InvalidSuffix(char),
    /// Malformed hand or token.
    #[error("invalid hand format: {0:?}")]
    InvalidFormat(String),
    /// Malformed range notation.
    #[error("invalid range notation: {0:?}")]
    InvalidRange(String),
    /// Unknown fold/call/raise choice.
    #[error("unknown choice: {0:?} (expected fold, call or raise)")]
    InvalidChoice(String),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// Player count outside the supported inclusive range.
    #[error("invalid number of players: {count} (supported range is {min}-{max})")]
    InvalidPlayerCount {
        /// Requested count.
        count: usize,
        /// Smallest supported count.
        min: usize,
        /// Largest supported count.
        max: usize,
    },

    /// Archetype name not recognised.
    #[error("unknown player archetype: {0:?}")]
    UnknownArchetype(String),

    /// Zone name not recognised.
    #[error("unknown table zone: {0:?}")]
    UnknownZone(String),

    /// A range chart has no entry for a zone.
    #[error("range chart for {archetype} players has no {zone} entry")]
    MissingZone {
        /// Archetype whose chart is incomplete.
        archetype: Archetype,
        /// Zone with no ranges.
        zone: Zone,
    },

    /// Operation not permitted in the current phase.
    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        /// Operation that was attempted.
        operation: &'static str,
        /// Phase the trainer was in.
        phase: Phase,
    },

    /// No cards left to deal.
    #[error("deck exhausted")]
    DeckExhausted,

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Parsing failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO failure while reading or writing files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = TrainerError> = std::result::Result<T, E>;
