//! Pre-flop actions and player archetypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, TrainerError};

/// Pre-flop action chosen by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Match the current bet.
    Call,
    /// Open or raise the pot.
    Raise,
    /// Raise again over an earlier raise.
    Reraise,
}

impl Action {
    /// Get action name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::Reraise => "reraise",
        }
    }

    /// Check if this is an aggressive action.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Raise | Action::Reraise)
    }

    /// Check if the seat put money in voluntarily.
    pub fn is_voluntary(&self) -> bool {
        !matches!(self, Action::Fold)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the human player can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Fold the hand.
    Fold,
    /// Call.
    Call,
    /// Raise (or reraise when facing a raise).
    Raise,
}

impl Choice {
    /// All choices.
    pub const ALL: [Choice; 3] = [Choice::Fold, Choice::Call, Choice::Raise];

    /// Action recorded for the seat when this choice is made.
    pub fn action(&self, facing_raise: bool) -> Action {
        match self {
            Choice::Fold => Action::Fold,
            Choice::Call => Action::Call,
            Choice::Raise if facing_raise => Action::Reraise,
            Choice::Raise => Action::Raise,
        }
    }

    /// Check if this choice agrees with the policy's action.
    ///
    /// A raise matches both `Raise` and `Reraise`.
    pub fn matches(&self, optimal: Action) -> bool {
        matches!(
            (self, optimal),
            (Choice::Fold, Action::Fold)
                | (Choice::Call, Action::Call)
                | (Choice::Raise, Action::Raise | Action::Reraise)
        )
    }
}

impl From<Action> for Choice {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => Choice::Fold,
            Action::Call => Choice::Call,
            Action::Raise | Action::Reraise => Choice::Raise,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Fold => write!(f, "fold"),
            Choice::Call => write!(f, "call"),
            Choice::Raise => write!(f, "raise"),
        }
    }
}

impl FromStr for Choice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fold" => Ok(Choice::Fold),
            "c" | "call" => Ok(Choice::Call),
            "r" | "raise" => Ok(Choice::Raise),
            _ => Err(ParseError::InvalidChoice(s.to_string())),
        }
    }
}

/// Strategic profile selecting which range chart a seat plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Plays the reference chart.
    Optimal,
    /// Plays too many hands.
    Loose,
    /// Plays too few hands.
    Tight,
}

impl Archetype {
    /// All archetypes.
    pub const ALL: [Archetype; 3] = [Archetype::Optimal, Archetype::Loose, Archetype::Tight];

    /// Get archetype index (0-2).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get archetype name.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Optimal => "optimal",
            Archetype::Loose => "loose",
            Archetype::Tight => "tight",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Archetype {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownArchetype(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggressive_actions() {
        assert!(!Action::Fold.is_aggressive());
        assert!(!Action::Call.is_aggressive());
        assert!(Action::Raise.is_aggressive());
        assert!(Action::Reraise.is_aggressive());
        assert!(!Action::Fold.is_voluntary());
        assert!(Action::Call.is_voluntary());
    }

    #[test]
    fn test_choice_matching() {
        assert!(Choice::Raise.matches(Action::Reraise));
        assert!(Choice::Raise.matches(Action::Raise));
        assert!(!Choice::Call.matches(Action::Raise));
        assert!(Choice::Fold.matches(Action::Fold));
        assert_eq!(Choice::Raise.action(true), Action::Reraise);
        assert_eq!(Choice::Raise.action(false), Action::Raise);
        assert_eq!(Choice::from(Action::Reraise), Choice::Raise);
        for action in [Action::Fold, Action::Call, Action::Raise, Action::Reraise] {
            assert!(Choice::from(action).matches(action));
        }
    }

    #[test]
    fn test_parsing() {
        assert_eq!("R".parse::<Choice>().unwrap(), Choice::Raise);
        assert_eq!("fold".parse::<Choice>().unwrap(), Choice::Fold);
        assert!(matches!(
            "check".parse::<Choice>(),
            Err(ParseError::InvalidChoice(s)) if s == "check"
        ));

        assert_eq!("LOOSE".parse::<Archetype>().unwrap(), Archetype::Loose);
        assert!(matches!(
            "maniac".parse::<Archetype>(),
            Err(TrainerError::UnknownArchetype(name)) if name == "maniac"
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Action::Reraise).unwrap(), "\"reraise\"");
        assert_eq!(serde_json::to_string(&Archetype::Tight).unwrap(), "\"tight\"");
    }
}
