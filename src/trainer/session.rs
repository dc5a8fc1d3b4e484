//! The training session state machine.
//!
//! ```text
//! Idle -> Dealing -> AwaitingOpponentActions -> AwaitingHumanAction -> Resolved
//!   ^                                                                   |
//!   +------------------------------ reset ------------------------------+
//! ```
//!
//! `Dealing` and `AwaitingOpponentActions` are passed through inside a single
//! call; callers only ever observe `Idle`, `AwaitingHumanAction` or `Resolved`.

use std::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::config::TrainerConfig;
use super::feedback::Feedback;
use super::seat::{Seat, HERO};
use super::state::{acting_before_hero, AuditEntry, GameState};
use super::stats::{SessionStats, StatsReport};
use crate::error::{Result, TrainerError};
use crate::preflop::{
    decide, effective_stack_size, expected_value, heuristic_strength, pot_odds, Action, Archetype,
    Board, Charts, Choice, HoleCards, Quote, RangeToken, Zone,
};

/// Where the session is in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No table.
    Idle,
    /// Cards going out.
    Dealing,
    /// Opponents before the human are deciding.
    AwaitingOpponentActions,
    /// Waiting for the human's choice.
    AwaitingHumanAction,
    /// Choice graded.
    Resolved,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Phase::Idle => "idle",
            Phase::Dealing => "dealing",
            Phase::AwaitingOpponentActions => "awaiting opponent actions",
            Phase::AwaitingHumanAction => "awaiting the player's action",
            Phase::Resolved => "the hand is resolved",
        };
        write!(f, "{}", text)
    }
}

/// Result of grading the human's choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// What the human picked.
    pub choice: Choice,
    /// What the optimal chart says.
    pub optimal: Action,
    /// Hand shape graded.
    pub token: RangeToken,
    /// Zone the human was in.
    pub zone: Zone,
    /// Grading.
    pub feedback: Feedback,
}

impl Outcome {
    /// Check if the choice was correct.
    pub fn is_correct(&self) -> bool {
        self.feedback.is_correct()
    }
}

/// Pre-flop figures for the human's current hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandReport {
    /// Hole cards, e.g. "AhKd".
    pub hand: String,
    /// Hand shape.
    pub token: RangeToken,
    /// Zone.
    pub zone: Zone,
    /// Heuristic strength score.
    pub strength: i32,
    /// Chips in the pot.
    pub pot: u32,
    /// Chips needed to call.
    pub to_call: u32,
    /// Whether an opponent raised before the human.
    pub facing_raise: bool,
    /// Pot odds.
    pub pot_odds: Quote,
    /// Heuristic expected value.
    pub expected_value: Quote,
    /// Smallest opponent stack.
    pub effective_stack: Option<u32>,
}

/// A pre-flop training session.
///
/// Owns the table, the charts and the random number generator. Every
/// operation checks the current phase and fails with
/// [`TrainerError::InvalidPhase`] when called out of turn.
#[derive(Debug)]
pub struct Trainer {
    config: TrainerConfig,
    charts: Charts,
    rng: StdRng,
    phase: Phase,
    state: Option<GameState>,
}

impl Trainer {
    /// Create an idle trainer.
    ///
    /// Validates the config and loads the charts, applying any overrides.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        let charts = Charts::with_overrides(&config.charts)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            charts,
            rng,
            phase: Phase::Idle,
            state: None,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Configuration in use.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Charts in use.
    pub fn charts(&self) -> &Charts {
        &self.charts
    }

    /// Table state, if a table is set up.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Opponent actions recorded this session.
    pub fn audit(&self) -> &[AuditEntry] {
        self.state.as_ref().map(|s| s.audit.as_slice()).unwrap_or(&[])
    }

    /// Statistics snapshot. All zeros when no table is set up.
    pub fn stats(&self) -> StatsReport {
        match &self.state {
            Some(state) => state.stats.report(),
            None => SessionStats::new().report(),
        }
    }

    /// Seat a table and deal the first hand.
    ///
    /// An out-of-range count leaves the trainer untouched.
    pub fn setup(&mut self, player_count: usize) -> Result<()> {
        self.expect_phase("set up a table", &[Phase::Idle])?;
        if let Err(e) = self.config.check_player_count(player_count) {
            warn!("rejected setup: {}", e);
            return Err(e);
        }

        let seats = Seat::table(
            player_count,
            self.config.min_stack,
            self.config.max_stack,
            &mut self.rng,
        );
        info!(
            "seated {} players: {}",
            player_count,
            seats
                .iter()
                .map(|s| format!("{}:{}/{}", s.index, s.archetype, s.stack))
                .collect::<Vec<_>>()
                .join(" ")
        );

        self.state = Some(GameState::new(seats, self.config.raise_multiplier));
        self.deal_hand()
    }

    /// Grade the human's choice for the current hand.
    pub fn submit_action(&mut self, choice: Choice) -> Result<Outcome> {
        self.expect_phase("submit an action", &[Phase::AwaitingHumanAction])?;
        let (hand, zone) = self.hero_hand()?;
        let facing_raise = self.state_ref()?.facing_raise;
        let optimal = decide(&hand, zone, Archetype::Optimal, &self.charts, facing_raise);
        let feedback = Feedback::grade(choice, optimal);
        let correct = feedback.is_correct();

        let state = self.state_mut()?;
        let action = choice.action(facing_raise);
        let stack = state.seats[HERO].stack;
        state.seats[HERO].action = Some(action);
        state.betting.apply(HERO, action, stack);
        state.stats.record(zone, choice, correct);

        let token = RangeToken::from_hand(&hand);
        debug!(
            "hand {}: {} in {} chose {}, optimal {} ({})",
            state.hands_dealt, token, zone, choice, optimal, feedback
        );

        self.phase = Phase::Resolved;
        Ok(Outcome {
            choice,
            optimal,
            token,
            zone,
            feedback,
        })
    }

    /// Burn a card and turn the flop. Repeated calls return the same flop.
    pub fn show_flop(&mut self) -> Result<Board> {
        self.expect_phase("show the flop", &[Phase::Resolved])?;
        let flop = self.state_mut()?.deal_flop()?;
        debug!("flop: {}", flop);
        Ok(flop)
    }

    /// Every seat, with its hole cards.
    pub fn show_hands(&self) -> Result<&[Seat]> {
        self.expect_phase("show hands", &[Phase::AwaitingHumanAction, Phase::Resolved])?;
        Ok(&self.state_ref()?.seats)
    }

    /// Deal the next hand to the same table.
    pub fn next_hand(&mut self) -> Result<()> {
        self.expect_phase("deal the next hand", &[Phase::Resolved])?;
        self.deal_hand()
    }

    /// Throw away the table and statistics.
    pub fn reset(&mut self) {
        if let Some(state) = &self.state {
            info!(
                "reset after {} hands ({} graded)",
                state.hands_dealt,
                state.stats.total_seen()
            );
        }
        self.state = None;
        self.phase = Phase::Idle;
    }

    /// Reset, then set up a new table.
    pub fn restart(&mut self, player_count: usize) -> Result<()> {
        self.reset();
        self.setup(player_count)
    }

    /// Pot figures for the human's current hand, as they stood when the
    /// human came to act.
    pub fn report(&self) -> Result<HandReport> {
        self.expect_phase("report", &[Phase::AwaitingHumanAction, Phase::Resolved])?;
        let (hand, zone) = self.hero_hand()?;
        let state = self.state_ref()?;

        let strength = heuristic_strength(&hand);
        let pot = state.hero_pot;
        let to_call = state.hero_to_call;

        Ok(HandReport {
            hand: hand.to_string(),
            token: RangeToken::from_hand(&hand),
            zone,
            strength,
            pot,
            to_call,
            facing_raise: state.facing_raise,
            pot_odds: pot_odds(pot, to_call),
            expected_value: expected_value(strength, pot, to_call),
            effective_stack: effective_stack_size(&state.stacks(), HERO),
        })
    }

    /// What a seat of the given archetype would do with the human's hand.
    pub fn advise(&self, archetype: Archetype) -> Result<Action> {
        self.expect_phase("advise", &[Phase::AwaitingHumanAction, Phase::Resolved])?;
        let (hand, zone) = self.hero_hand()?;
        let facing_raise = self.state_ref()?.facing_raise;
        Ok(decide(&hand, zone, archetype, &self.charts, facing_raise))
    }

    fn deal_hand(&mut self) -> Result<()> {
        let state = self.state.as_mut().ok_or(TrainerError::InvalidPhase {
            operation: "deal",
            phase: self.phase,
        })?;
        self.phase = Phase::Dealing;

        state.deal(&mut self.rng, self.config.raise_multiplier)?;

        let count = state.seat_count();
        let button = state.button;
        for seat in &mut state.seats {
            seat.zone = Some(self.config.zone_strategy.resolve(seat.index, button, count));
        }
        state.post_blinds(self.config.small_blind, self.config.big_blind);
        debug!(
            "hand {}: button {}, hero {} in {:?}",
            state.hands_dealt,
            button,
            state.seats[HERO].hand.map(|h| h.to_string()).unwrap_or_default(),
            state.seats[HERO].zone
        );

        self.phase = Phase::AwaitingOpponentActions;
        for index in acting_before_hero(button, count) {
            let seat = &state.seats[index];
            let (Some(hand), Some(zone)) = (seat.hand, seat.zone) else {
                continue;
            };

            let facing_raise = state.betting.has_raise();
            let action = decide(&hand, zone, seat.archetype, &self.charts, facing_raise);
            let entry = AuditEntry {
                hand_number: state.hands_dealt,
                seat: index,
                archetype: seat.archetype,
                zone,
                token: RangeToken::from_hand(&hand),
                facing_raise,
                action,
            };
            debug!("seat {} ({}, {}) {} -> {}", index, entry.archetype, zone, entry.token, action);

            let stack = seat.stack;
            state.betting.apply(index, action, stack);
            state.seats[index].action = Some(action);
            state.audit.push(entry);
        }
        state.facing_raise = state.betting.has_raise();
        state.hero_pot = state.betting.pot();
        state.hero_to_call = state.betting.to_call(HERO, state.seats[HERO].stack);

        self.phase = Phase::AwaitingHumanAction;
        Ok(())
    }

    fn expect_phase(&self, operation: &'static str, allowed: &[Phase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(TrainerError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn state_ref(&self) -> Result<&GameState> {
        let phase = self.phase;
        self.state.as_ref().ok_or(TrainerError::InvalidPhase {
            operation: "read the table",
            phase,
        })
    }

    fn state_mut(&mut self) -> Result<&mut GameState> {
        let phase = self.phase;
        self.state.as_mut().ok_or(TrainerError::InvalidPhase {
            operation: "update the table",
            phase,
        })
    }

    fn hero_hand(&self) -> Result<(HoleCards, Zone)> {
        let hero = self.state_ref()?.hero();
        match (hero.hand, hero.zone) {
            (Some(hand), Some(zone)) => Ok((hand, zone)),
            _ => Err(TrainerError::InvalidPhase {
                operation: "read the player's hand",
                phase: self.phase,
            }),
        }
    }
}
