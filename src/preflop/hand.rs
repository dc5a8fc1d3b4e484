//! Hand classification.
//!
//! Turns a pair of hole cards into its canonical starting-hand shape
//! (`RangeToken`, e.g. "AKs", "77", "T9o") and scores it with a simple
//! heuristic used for pot-odds and EV reporting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::card::{parse_rank, HoleCards, RANK_A, RANK_CHARS};
use crate::error::ParseError;

/// Shape of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    /// Both cards share a rank.
    Pair,
    /// Different ranks, same suit.
    Suited,
    /// Different ranks, different suits.
    Offsuit,
}

impl Shape {
    /// Number of concrete card combinations with this shape.
    pub fn num_combos(&self) -> u8 {
        match self {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }
}

/// Canonical starting-hand token ("AKs", "77", "T9o").
///
/// Ranks are stored high first (0-12: 2-A), so the token is the same
/// whichever order the two cards were dealt in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RangeToken {
    high: u8,
    low: u8,
    shape: Shape,
}

impl RangeToken {
    /// Build a token from two ranks (any order). Equal ranks always give a pair.
    pub fn new(rank1: u8, rank2: u8, suited: bool) -> Self {
        debug_assert!(rank1 < 13 && rank2 < 13);
        let (high, low) = if rank1 >= rank2 { (rank1, rank2) } else { (rank2, rank1) };
        let shape = if high == low {
            Shape::Pair
        } else if suited {
            Shape::Suited
        } else {
            Shape::Offsuit
        };
        Self { high, low, shape }
    }

    /// Pocket pair of the given rank.
    pub fn pair(rank: u8) -> Self {
        Self::new(rank, rank, false)
    }

    /// Classify a dealt hand.
    pub fn from_hand(hand: &HoleCards) -> Self {
        Self::new(hand.card1.rank(), hand.card2.rank(), hand.is_suited())
    }

    /// Higher rank (0-12).
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Lower rank (0-12).
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Shape of the hand.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Check if this token is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.shape == Shape::Pair
    }

    /// Position in the 13x13 chart grid as (row, col).
    ///
    /// Rows and columns run A..2. Pairs sit on the diagonal, suited hands
    /// above it and offsuit hands below it.
    pub fn grid_position(&self) -> (usize, usize) {
        let high = (RANK_A - self.high) as usize;
        let low = (RANK_A - self.low) as usize;
        match self.shape {
            Shape::Pair | Shape::Suited => (high, low),
            Shape::Offsuit => (low, high),
        }
    }

    /// Token at a grid cell.
    pub fn at_grid(row: usize, col: usize) -> Self {
        debug_assert!(row < 13 && col < 13);
        let r1 = RANK_A - row as u8;
        let r2 = RANK_A - col as u8;
        // Above the diagonal is suited, below offsuit.
        Self::new(r1, r2, row < col)
    }

    /// All 169 starting-hand tokens in grid order (AA, AKs, ..., 22).
    pub fn all() -> impl Iterator<Item = RangeToken> {
        (0..13).flat_map(|row| (0..13).map(move |col| RangeToken::at_grid(row, col)))
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = RANK_CHARS[self.high as usize];
        let low = RANK_CHARS[self.low as usize];
        match self.shape {
            Shape::Pair => write!(f, "{}{}", high, low),
            Shape::Suited => write!(f, "{}{}s", high, low),
            Shape::Offsuit => write!(f, "{}{}o", high, low),
        }
    }
}

impl fmt::Debug for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for RangeToken {
    type Err = ParseError;

    /// Parse a single canonical token: "AA", "AKs" or "AKo".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        let r1 = parse_rank(chars[0])?;
        let r2 = parse_rank(chars[1])?;

        match (r1 == r2, chars.get(2).copied()) {
            (true, None) => Ok(Self::pair(r1)),
            (false, Some('s' | 'S')) => Ok(Self::new(r1, r2, true)),
            (false, Some('o' | 'O')) => Ok(Self::new(r1, r2, false)),
            (false, Some(c)) => Err(ParseError::InvalidSuffix(c)),
            _ => Err(ParseError::InvalidFormat(s.to_string())),
        }
    }
}

impl From<RangeToken> for String {
    fn from(token: RangeToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for RangeToken {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Heuristic pre-flop strength of a hand.
///
/// Starts from the high card's rank value (2-14), doubles pocket pairs, adds 2
/// for suited cards, then subtracts a gap penalty. Hands spanning a gap of
/// exactly four with the high card below an ace and the low card above a deuce
/// lose one more point. Only the ordering is meaningful.
pub fn heuristic_strength(hand: &HoleCards) -> i32 {
    let high = hand.high().rank_value() as i32;
    let low = hand.low().rank_value() as i32;

    let mut score = high;
    if high == low {
        score *= 2;
    } else if hand.is_suited() {
        score += 2;
    }

    let gap = high - low - 1;
    score -= match gap {
        g if g < 1 => 0,
        g if g < 3 => 1,
        g if g < 5 => 2,
        _ => 4,
    };

    if gap == 4 && high < 14 && low > 2 {
        score -= 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflop::card::{Card, RANK_K, RANK_T};

    fn hand(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    fn token(s: &str) -> String {
        RangeToken::from_hand(&hand(s)).to_string()
    }

    #[test]
    fn test_tokens() {
        assert_eq!(token("AhKh"), "AKs");
        assert_eq!(token("AhKd"), "AKo");
        assert_eq!(token("7c7d"), "77");
        assert_eq!(token("9sTs"), "T9s");
        assert_eq!(token("2d7c"), "72o");
    }

    #[test]
    fn test_token_order_invariant() {
        let cards: Vec<Card> = (0..52).map(Card::from_id).collect();
        for &a in &cards {
            for &b in &cards {
                if a == b {
                    continue;
                }
                let ab = RangeToken::from_hand(&HoleCards::new(a, b));
                let ba = RangeToken::from_hand(&HoleCards::new(b, a));
                assert_eq!(ab, ba);
                if a.rank() == b.rank() {
                    assert_eq!(ab.to_string().len(), 2);
                }
            }
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("AKs".parse::<RangeToken>().unwrap(), RangeToken::new(RANK_A, RANK_K, true));
        assert_eq!("KAo".parse::<RangeToken>().unwrap().to_string(), "AKo");
        assert_eq!("TT".parse::<RangeToken>().unwrap(), RangeToken::pair(RANK_T));
        assert_eq!("AKx".parse::<RangeToken>(), Err(ParseError::InvalidSuffix('x')));
        assert!("AK".parse::<RangeToken>().is_err());
        assert!("TTs".parse::<RangeToken>().is_err());
        assert_eq!("1A".parse::<RangeToken>(), Err(ParseError::InvalidRank('1')));
    }

    #[test]
    fn test_grid_roundtrip() {
        let all: Vec<RangeToken> = RangeToken::all().collect();
        assert_eq!(all.len(), 169);
        assert_eq!(all[0].to_string(), "AA");
        assert_eq!(all[1].to_string(), "AKs");
        assert_eq!(all[13].to_string(), "AKo");
        assert_eq!(all[168].to_string(), "22");

        let combos: u32 = all.iter().map(|t| t.shape().num_combos() as u32).sum();
        assert_eq!(combos, 1326);

        for t in all {
            let (row, col) = t.grid_position();
            assert_eq!(RangeToken::at_grid(row, col), t);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let t: RangeToken = "QJs".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"QJs\"");
        let back: RangeToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_heuristic_strength() {
        // Pairs doubled, no gap penalty.
        assert_eq!(heuristic_strength(&hand("AhAs")), 28);
        assert_eq!(heuristic_strength(&hand("2c2d")), 4);
        // Suited connectors.
        assert_eq!(heuristic_strength(&hand("AhKh")), 16);
        assert_eq!(heuristic_strength(&hand("AhKd")), 14);
        // One-gapper.
        assert_eq!(heuristic_strength(&hand("Qh Ts")), 11);
        // Gap of four with the near-straight adjustment.
        assert_eq!(heuristic_strength(&hand("Kh8d")), 10);
        // Gap of four, ace high: no adjustment.
        assert_eq!(heuristic_strength(&hand("Ah9d")), 12);
        // Gap of four down to a deuce: no adjustment.
        assert_eq!(heuristic_strength(&hand("7h2d")), 5);
        // Big gap.
        assert_eq!(heuristic_strength(&hand("Kh2d")), 9);
    }

    #[test]
    fn test_strength_monotone_in_high_card() {
        for gap in 0..12u8 {
            for &suited in &[true, false] {
                let mut previous = i32::MIN;
                for high in (gap + 1)..13 {
                    let low = high - gap - 1;
                    let c1 = Card::new(high, 0);
                    let c2 = Card::new(low, if suited { 0 } else { 1 });
                    let score = heuristic_strength(&HoleCards::new(c1, c2));
                    assert!(score >= previous, "gap {} high {}", gap, high);
                    previous = score;
                }
            }
        }
        let mut previous = i32::MIN;
        for rank in 0..13 {
            let score = heuristic_strength(&HoleCards::new(Card::new(rank, 0), Card::new(rank, 1)));
            assert!(score >= previous);
            previous = score;
        }
    }
}
