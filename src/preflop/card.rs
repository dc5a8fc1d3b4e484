//! Card representation.
//!
//! - `Card`: a single playing card with rank and suit
//! - `HoleCards`: a seat's two private cards
//! - `Board`: community cards shown after the pre-flop decision
//! - `Deck`: a deck of 52 cards dealt front-to-back after a shuffle

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ParseError;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3).
pub const SUIT_CLUBS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_HEARTS: u8 = 2;
pub const SUIT_SPADES: u8 = 3;

/// Rank characters for display.
pub(crate) const RANK_CHARS: [char; 13] =
    ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Parse a rank character into a rank index (0-12).
pub(crate) fn parse_rank(c: char) -> Result<u8, ParseError> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c.to_ascii_uppercase())
        .map(|idx| idx as u8)
        .ok_or(ParseError::InvalidRank(c))
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Rank on the 2-14 scale used by the strength heuristic (T=10 ... A=14).
    #[inline]
    pub fn rank_value(&self) -> u8 {
        self.rank() + 2
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parse a card from a code like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::InvalidCard(s.to_string()));
        }

        let rank = parse_rank(chars[0]).map_err(|_| ParseError::InvalidCard(s.to_string()))?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == chars[1].to_ascii_lowercase())
            .ok_or_else(|| ParseError::InvalidCard(s.to_string()))?;

        Ok(Self::new(rank, suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A seat's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Self {
        debug_assert!(card1 != card2, "hole cards must be distinct");
        if card1.rank() >= card2.rank() {
            Self { card1, card2 }
        } else {
            Self {
                card1: card2,
                card2: card1,
            }
        }
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// The higher-ranked card.
    pub fn high(&self) -> Card {
        self.card1
    }

    /// The lower-ranked card.
    pub fn low(&self) -> Card {
        self.card2
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }

    /// Check if a card is one of these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.card1 == card || self.card2 == card
    }
}

impl FromStr for HoleCards {
    type Err = ParseError;

    /// Parse hole cards from a string like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(' ', "");
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseError::InvalidFormat(s));
        }
        let c1: Card = s[0..2].parse()?;
        let c2: Card = s[2..4].parse()?;
        if c1 == c2 {
            return Err(ParseError::DuplicateCard(c1.to_string()));
        }
        Ok(Self::new(c1, c2))
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Community cards on the board.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    /// Get the number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add a card to the board.
    pub fn add(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 5);
        self.cards.push(card);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// A deck of 52 playing cards.
#[derive(Clone)]
pub struct Deck {
    /// All 52 cards in current order.
    cards: [Card; 52],
    /// Index of next card to deal.
    index: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        let mut cards = [Card::from_id(0); 52];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::from_id(i as u8);
        }
        Self { cards, index: 0 }
    }

    /// Create a fresh deck and shuffle it.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the remaining cards in the deck (Fisher-Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        let card = *self.cards.get(self.index)?;
        self.index += 1;
        Some(card)
    }

    /// Discard the next card. Returns `None` when the deck is empty.
    pub fn burn(&mut self) -> Option<Card> {
        self.deal()
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    /// Get remaining cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.index..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, SUIT_SPADES);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), SUIT_SPADES);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(RANK_2, SUIT_CLUBS);
        assert_eq!(two_clubs.rank(), RANK_2);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_rank_values() {
        assert_eq!("2c".parse::<Card>().unwrap().rank_value(), 2);
        assert_eq!("9d".parse::<Card>().unwrap().rank_value(), 9);
        assert_eq!("Th".parse::<Card>().unwrap().rank_value(), 10);
        assert_eq!("Js".parse::<Card>().unwrap().rank_value(), 11);
        assert_eq!("Qc".parse::<Card>().unwrap().rank_value(), 12);
        assert_eq!("Kd".parse::<Card>().unwrap().rank_value(), 13);
        assert_eq!("Ah".parse::<Card>().unwrap().rank_value(), 14);
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!("As".parse::<Card>().unwrap().to_string(), "As");
        assert_eq!("td".parse::<Card>().unwrap().to_string(), "Td");
        assert!("XX".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("Ahh".parse::<Card>().is_err());
    }

    #[test]
    fn test_hole_cards() {
        let hc: HoleCards = "KdAh".parse().unwrap();
        assert_eq!(hc.high().rank(), RANK_A);
        assert_eq!(hc.low().rank(), RANK_K);
        assert!(!hc.is_suited());
        assert!(!hc.is_pair());

        let suited: HoleCards = "AsKs".parse().unwrap();
        assert!(suited.is_suited());

        let pair: HoleCards = "Ah As".parse().unwrap();
        assert!(pair.is_pair());

        assert_eq!(
            "AhAh".parse::<HoleCards>(),
            Err(ParseError::DuplicateCard("Ah".to_string()))
        );
    }

    #[test]
    fn test_board() {
        let mut board = Board::new();
        assert!(board.is_empty());
        board.add("Jc".parse().unwrap());
        board.add("Tc".parse().unwrap());
        board.add("2h".parse().unwrap());
        assert_eq!(board.len(), 3);
        assert_eq!(board.to_string(), "Jc Tc 2h");
    }

    #[test]
    fn test_deck() {
        let mut deck = Deck::new();
        assert_eq!(deck.remaining(), 52);

        let card = deck.deal().unwrap();
        assert_eq!(deck.remaining(), 51);
        assert!(!deck.remaining_cards().contains(&card));

        deck.burn().unwrap();
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn test_shuffled_deck_deals_every_card_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);

        let mut seen = HashSet::new();
        while let Some(card) = deck.deal() {
            assert!(seen.insert(card), "{} dealt twice", card);
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal().is_none());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.remaining_cards(), b.remaining_cards());
    }
}
