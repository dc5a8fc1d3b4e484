//! Grading of the human's choice.

use std::fmt;

use serde::Serialize;

use crate::preflop::{Action, Choice};

/// Result of comparing the human's choice with the policy's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Choice agreed with the policy.
    Correct,
    /// Folded a calling hand.
    FoldedShouldCall,
    /// Folded a raising hand.
    FoldedShouldRaise,
    /// Folded a reraising hand.
    FoldedShouldReraise,
    /// Called a folding hand.
    CalledShouldFold,
    /// Called a raising hand.
    CalledShouldRaise,
    /// Called a reraising hand.
    CalledShouldReraise,
    /// Raised a folding hand.
    RaisedShouldFold,
    /// Raised a calling hand.
    RaisedShouldCall,
}

impl Feedback {
    /// Grade a choice against the optimal action.
    pub fn grade(choice: Choice, optimal: Action) -> Self {
        match (choice, optimal) {
            (Choice::Fold, Action::Fold) | (Choice::Call, Action::Call) => Feedback::Correct,
            (Choice::Raise, Action::Raise | Action::Reraise) => Feedback::Correct,
            (Choice::Fold, Action::Call) => Feedback::FoldedShouldCall,
            (Choice::Fold, Action::Raise) => Feedback::FoldedShouldRaise,
            (Choice::Fold, Action::Reraise) => Feedback::FoldedShouldReraise,
            (Choice::Call, Action::Fold) => Feedback::CalledShouldFold,
            (Choice::Call, Action::Raise) => Feedback::CalledShouldRaise,
            (Choice::Call, Action::Reraise) => Feedback::CalledShouldReraise,
            (Choice::Raise, Action::Fold) => Feedback::RaisedShouldFold,
            (Choice::Raise, Action::Call) => Feedback::RaisedShouldCall,
        }
    }

    /// Check if the choice was graded correct.
    pub fn is_correct(&self) -> bool {
        *self == Feedback::Correct
    }

    /// Message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Correct => "Correct move!",
            Feedback::FoldedShouldCall => "Incorrect - Folded when you should have called",
            Feedback::FoldedShouldRaise => "Incorrect - Folded when you should have raised",
            Feedback::FoldedShouldReraise => "Incorrect - Folded when you should have reraised",
            Feedback::CalledShouldFold => "Incorrect - Called when you should have folded",
            Feedback::CalledShouldRaise => "Incorrect - Called when you should have raised",
            Feedback::CalledShouldReraise => "Incorrect - Called when you should have reraised",
            Feedback::RaisedShouldFold => "Incorrect - Raised when you should have folded",
            Feedback::RaisedShouldCall => "Incorrect - Raised when you should have called",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
