//! Table state for one session.
//!
//! Holds the deck, seats, button, flop, betting round, statistics and the
//! audit log of opponent actions. A reset throws the whole thing away.

use rand::Rng;
use serde::Serialize;

use super::seat::{Seat, HERO};
use super::stats::SessionStats;
use crate::error::{Result, TrainerError};
use crate::preflop::{Action, Archetype, Board, Deck, HoleCards, RangeToken, Zone};

/// One opponent decision, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    /// Hand number within the session, from 1.
    pub hand_number: u32,
    /// Seat that acted.
    pub seat: usize,
    /// Archetype the seat plays.
    pub archetype: Archetype,
    /// Zone the seat was in.
    pub zone: Zone,
    /// Hand shape held.
    pub token: RangeToken,
    /// Whether an earlier seat had raised.
    pub facing_raise: bool,
    /// Action taken.
    pub action: Action,
}

/// Chips committed during the pre-flop round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingRound {
    contributions: Vec<u32>,
    current_bet: u32,
    raises: u32,
    raise_multiplier: u32,
}

impl BettingRound {
    /// Create an empty round.
    pub fn new(seat_count: usize, raise_multiplier: u32) -> Self {
        Self {
            contributions: vec![0; seat_count],
            current_bet: 0,
            raises: 0,
            raise_multiplier,
        }
    }

    /// Post a forced bet, capped at the stack.
    pub fn post_blind(&mut self, seat: usize, amount: u32, stack: u32) {
        let posted = amount.min(stack);
        self.contributions[seat] = posted;
        self.current_bet = self.current_bet.max(posted);
    }

    /// Apply a seat's action.
    ///
    /// A call brings the seat up to the current bet, a raise or reraise
    /// multiplies the current bet. Contributions never exceed the stack.
    pub fn apply(&mut self, seat: usize, action: Action, stack: u32) {
        let target = match action {
            Action::Fold => return,
            Action::Call => self.current_bet,
            Action::Raise | Action::Reraise => {
                self.raises += 1;
                self.current_bet.max(1).saturating_mul(self.raise_multiplier)
            }
        };

        let committed = target.min(stack).max(self.contributions[seat]);
        self.contributions[seat] = committed;
        self.current_bet = self.current_bet.max(committed);
    }

    /// Total chips in the pot.
    pub fn pot(&self) -> u32 {
        self.contributions.iter().fold(0, |pot, &c| pot.saturating_add(c))
    }

    /// Highest contribution so far.
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Chips a seat has put in.
    pub fn contribution(&self, seat: usize) -> u32 {
        self.contributions[seat]
    }

    /// Chips a seat needs to add to match the current bet, capped at its stack.
    pub fn to_call(&self, seat: usize, stack: u32) -> u32 {
        let owed = self.current_bet - self.contributions[seat];
        owed.min(stack.saturating_sub(self.contributions[seat]))
    }

    /// Check if anyone raised voluntarily.
    pub fn has_raise(&self) -> bool {
        self.raises > 0
    }
}

/// Seats that act before the human, in order.
///
/// Action starts with the seat after the big blind and runs round the table
/// until it reaches seat 0.
pub fn acting_before_hero(button: usize, seat_count: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut seat = (button + 3) % seat_count;
    while seat != HERO {
        order.push(seat);
        seat = (seat + 1) % seat_count;
    }
    order
}

/// Everything the trainer knows about the table.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Deck for the current hand.
    pub deck: Deck,
    /// Seats, index 0 is the human.
    pub seats: Vec<Seat>,
    /// Button seat.
    pub button: usize,
    /// Flop, once shown.
    pub flop: Option<Board>,
    /// Pre-flop betting.
    pub betting: BettingRound,
    /// Session statistics.
    pub stats: SessionStats,
    /// Opponent actions across the session.
    pub audit: Vec<AuditEntry>,
    /// Whether an opponent raised before the human this hand.
    pub facing_raise: bool,
    /// Pot when the human came to act.
    pub hero_pot: u32,
    /// Chips the human needed to call when they came to act.
    pub hero_to_call: u32,
    /// Hands dealt so far.
    pub hands_dealt: u32,
}

impl GameState {
    /// Create a table with no hand dealt.
    pub fn new(seats: Vec<Seat>, raise_multiplier: u32) -> Self {
        let count = seats.len();
        Self {
            deck: Deck::new(),
            seats,
            button: 0,
            flop: None,
            betting: BettingRound::new(count, raise_multiplier),
            stats: SessionStats::new(),
            audit: Vec::new(),
            facing_raise: false,
            hero_pot: 0,
            hero_to_call: 0,
            hands_dealt: 0,
        }
    }

    /// Number of seats.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// The human's seat.
    pub fn hero(&self) -> &Seat {
        &self.seats[HERO]
    }

    /// Small blind seat.
    pub fn small_blind_seat(&self) -> usize {
        (self.button + 1) % self.seat_count()
    }

    /// Big blind seat.
    pub fn big_blind_seat(&self) -> usize {
        (self.button + 2) % self.seat_count()
    }

    /// Shuffle a fresh deck, move the button and deal two cards to everyone.
    ///
    /// The button is random on the first hand and moves one seat after that.
    /// One card is burned, then cards go out one per seat in two passes.
    pub fn deal<R: Rng>(&mut self, rng: &mut R, raise_multiplier: u32) -> Result<()> {
        let count = self.seat_count();
        self.button = if self.hands_dealt == 0 {
            rng.gen_range(0..count)
        } else {
            (self.button + 1) % count
        };
        self.hands_dealt += 1;

        self.deck = Deck::shuffled(rng);
        self.flop = None;
        self.facing_raise = false;
        self.hero_pot = 0;
        self.hero_to_call = 0;
        self.betting = BettingRound::new(count, raise_multiplier);
        for seat in &mut self.seats {
            seat.clear_hand();
        }

        self.deck.burn().ok_or(TrainerError::DeckExhausted)?;
        let mut first = Vec::with_capacity(count);
        for _ in 0..count {
            first.push(self.deck.deal().ok_or(TrainerError::DeckExhausted)?);
        }
        for (seat, card1) in self.seats.iter_mut().zip(first) {
            let card2 = self.deck.deal().ok_or(TrainerError::DeckExhausted)?;
            seat.hand = Some(HoleCards::new(card1, card2));
        }

        Ok(())
    }

    /// Post both blinds for the current hand.
    pub fn post_blinds(&mut self, small: u32, big: u32) {
        let sb = self.small_blind_seat();
        let bb = self.big_blind_seat();
        self.betting.post_blind(sb, small, self.seats[sb].stack);
        self.betting.post_blind(bb, big, self.seats[bb].stack);
    }

    /// Burn one card and turn the flop. Returns the existing flop if already shown.
    pub fn deal_flop(&mut self) -> Result<Board> {
        if let Some(flop) = &self.flop {
            return Ok(flop.clone());
        }

        self.deck.burn().ok_or(TrainerError::DeckExhausted)?;
        let mut board = Board::new();
        for _ in 0..3 {
            board.add(self.deck.deal().ok_or(TrainerError::DeckExhausted)?);
        }
        self.flop = Some(board.clone());
        Ok(board)
    }

    /// Stacks in seat order.
    pub fn stacks(&self) -> Vec<u32> {
        self.seats.iter().map(|s| s.stack).collect()
    }
}
