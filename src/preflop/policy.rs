//! Pre-flop decision policy and pot arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::{Action, Archetype};
use super::card::HoleCards;
use super::charts::Charts;
use super::hand::RangeToken;
use super::position::Zone;

/// Decide a seat's action.
///
/// Pure: the same hand, zone, archetype and charts always give the same
/// action. `facing_raise` is true when an earlier seat already raised.
pub fn decide(
    hand: &HoleCards,
    zone: Zone,
    archetype: Archetype,
    charts: &Charts,
    facing_raise: bool,
) -> Action {
    let token = RangeToken::from_hand(hand);
    charts.lookup(archetype, zone).action(&token, facing_raise)
}

/// A pot-odds or EV figure, or the marker that nothing has to be paid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    /// Amount to call is zero.
    NoActionRequired,
    /// Computed value.
    Value(f64),
}

impl Quote {
    /// The value, if there is one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Quote::NoActionRequired => None,
            Quote::Value(v) => Some(*v),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::NoActionRequired => write!(f, "No action required"),
            Quote::Value(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Share of the final pot the caller puts in: `to_call / (pot + to_call)`.
pub fn pot_odds(pot: u32, to_call: u32) -> Quote {
    if to_call == 0 {
        return Quote::NoActionRequired;
    }
    Quote::Value(to_call as f64 / (pot as f64 + to_call as f64))
}

/// Heuristic EV: `strength * (pot + to_call) - to_call`.
///
/// Uses the raw strength score, not a probability, so the figure is only good
/// for comparing hands.
pub fn expected_value(strength: i32, pot: u32, to_call: u32) -> Quote {
    match pot_odds(pot, to_call) {
        Quote::NoActionRequired => Quote::NoActionRequired,
        Quote::Value(_) => {
            let pot = pot as f64;
            let to_call = to_call as f64;
            Quote::Value(strength as f64 * (pot + to_call) - to_call)
        }
    }
}

/// Smallest stack among the seats other than `me`.
pub fn effective_stack_size(stacks: &[u32], me: usize) -> Option<u32> {
    stacks
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != me)
        .map(|(_, &stack)| stack)
        .min()
}
