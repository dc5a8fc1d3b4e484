//! Pre-flop hand model and decision policy.
//!
//! ## Modules
//!
//! - `card`: Card, hole cards, board, and deck representations
//! - `hand`: Canonical hand tokens and heuristic strength
//! - `range`: Token sets and range notation
//! - `position`: Table zones and seat-to-zone resolution
//! - `action`: Actions, human choices and archetypes
//! - `charts`: Built-in range charts and overrides
//! - `policy`: Decision policy and pot arithmetic

pub mod card;
pub mod hand;
pub mod range;
pub mod position;
pub mod action;
pub mod charts;
pub mod policy;

// Re-export commonly used types
pub use card::{Card, HoleCards, Board, Deck};
pub use hand::{RangeToken, Shape, heuristic_strength};
pub use range::TokenSet;
pub use position::{Zone, ZoneStrategy, resolve_zone};
pub use action::{Action, Archetype, Choice};
pub use charts::{ArchetypeChart, ChartGrid, ChartOverrides, Charts, GridCell, ZoneNotation, ZoneRanges};
pub use policy::{decide, effective_stack_size, expected_value, pot_odds, Quote};
