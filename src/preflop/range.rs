//! Range token sets.
//!
//! A `TokenSet` is an explicit set of starting-hand tokens. Sets are built
//! either from literal token lists or from range notation, which is expanded
//! once at load time so that membership tests are plain hash lookups.

use rustc_hash::FxHashSet;

use super::card::{parse_rank, HoleCards};
use super::hand::RangeToken;
use crate::error::ParseError;

/// A set of starting-hand tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: FxHashSet<RangeToken>,
}

impl TokenSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set with all 169 tokens.
    pub fn all() -> Self {
        RangeToken::all().collect()
    }

    /// Build a set from literal tokens like `["AA", "AKs", "T9o"]`.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        tokens.iter().map(|t| t.parse::<RangeToken>()).collect()
    }

    /// Add a token to the set.
    pub fn insert(&mut self, token: RangeToken) {
        self.tokens.insert(token);
    }

    /// Check if a token is in the set.
    pub fn contains(&self, token: &RangeToken) -> bool {
        self.tokens.contains(token)
    }

    /// Check if a dealt hand falls in the set.
    pub fn contains_hand(&self, hand: &HoleCards) -> bool {
        self.contains(&RangeToken::from_hand(hand))
    }

    /// Number of tokens in the set.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Count the concrete card combinations the set covers.
    pub fn num_combos(&self) -> usize {
        self.tokens.iter().map(|t| t.shape().num_combos() as usize).sum()
    }

    /// Tokens in grid order.
    pub fn sorted(&self) -> Vec<RangeToken> {
        let mut tokens: Vec<RangeToken> = self.tokens.iter().copied().collect();
        tokens.sort_by_key(|t| t.grid_position());
        tokens
    }

    /// Parse a range from notation.
    ///
    /// Parts are separated by commas and/or whitespace. Supported forms:
    /// - single hands: "AA", "AKs", "AKo", "AK" (both suited and offsuit)
    /// - plus: "TT+", "AQs+", "K9o+"
    /// - dash with a fixed high card: "A5s-A2s", "AKo-AQo"
    /// - pair ranges: "QQ-22"
    /// - connector runs stepping both ranks: "JTs-76s"
    pub fn from_notation(notation: &str) -> Result<Self, ParseError> {
        let mut set = Self::empty();

        for part in notation.split(|c: char| c == ',' || c.is_whitespace()) {
            if part.is_empty() {
                continue;
            }
            set.parse_part(part)?;
        }

        Ok(set)
    }

    fn parse_part(&mut self, part: &str) -> Result<(), ParseError> {
        if let Some((start, end)) = part.split_once('-') {
            return self.parse_dash(start, end);
        }

        if let Some(hand) = part.strip_suffix('+') {
            return self.parse_plus(hand);
        }

        self.parse_single(part)
    }

    /// Single hand like "AA", "AKs", "AKo", "AK".
    fn parse_single(&mut self, hand: &str) -> Result<(), ParseError> {
        let pat = HandPattern::parse(hand)?;
        for suited in pat.shapes() {
            self.insert(RangeToken::new(pat.high, pat.low, suited));
        }
        Ok(())
    }

    /// Plus notation like "TT+" or "AQs+".
    fn parse_plus(&mut self, hand: &str) -> Result<(), ParseError> {
        let pat = HandPattern::parse(hand)?;

        if pat.high == pat.low {
            // TT+ means TT, JJ, QQ, KK, AA
            for rank in pat.high..13 {
                self.insert(RangeToken::pair(rank));
            }
        } else {
            // AQs+ means AQs, AKs
            for kicker in pat.low..pat.high {
                for suited in pat.shapes() {
                    self.insert(RangeToken::new(pat.high, kicker, suited));
                }
            }
        }

        Ok(())
    }

    /// Dash notation: "QQ-22", "A5s-A2s", "JTs-76s".
    fn parse_dash(&mut self, start: &str, end: &str) -> Result<(), ParseError> {
        let invalid = || ParseError::InvalidRange(format!("{}-{}", start, end));
        let a = HandPattern::parse(start)?;
        let b = HandPattern::parse(end)?;

        if a.suffix != b.suffix {
            return Err(invalid());
        }

        let a_pair = a.high == a.low;
        let b_pair = b.high == b.low;

        if a_pair && b_pair {
            let (lo, hi) = (a.high.min(b.high), a.high.max(b.high));
            for rank in lo..=hi {
                self.insert(RangeToken::pair(rank));
            }
            return Ok(());
        }
        if a_pair || b_pair {
            return Err(invalid());
        }

        let shapes = a.shapes();
        if a.high == b.high {
            // Same high card, walk the kicker.
            let (lo, hi) = (a.low.min(b.low), a.low.max(b.low));
            for kicker in lo..=hi {
                for &suited in &shapes {
                    self.insert(RangeToken::new(a.high, kicker, suited));
                }
            }
            return Ok(());
        }

        // Same gap, walk both ranks together.
        if a.high - a.low != b.high - b.low {
            return Err(invalid());
        }
        let gap = a.high - a.low;
        let (lo, hi) = (a.high.min(b.high), a.high.max(b.high));
        for high in lo..=hi {
            for &suited in &shapes {
                self.insert(RangeToken::new(high, high - gap, suited));
            }
        }
        Ok(())
    }
}

impl FromIterator<RangeToken> for TokenSet {
    fn from_iter<I: IntoIterator<Item = RangeToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// A hand as written in notation, before expansion.
struct HandPattern {
    high: u8,
    low: u8,
    /// `Some(true)` for 's', `Some(false)` for 'o', `None` for both.
    suffix: Option<bool>,
}

impl HandPattern {
    fn parse(hand: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = hand.chars().collect();

        if chars.len() < 2 || chars.len() > 3 {
            return Err(ParseError::InvalidFormat(hand.to_string()));
        }

        let r1 = parse_rank(chars[0])?;
        let r2 = parse_rank(chars[1])?;
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

        let suffix = match chars.get(2).copied() {
            None => None,
            Some('s' | 'S') => Some(true),
            Some('o' | 'O') => Some(false),
            Some(c) => return Err(ParseError::InvalidSuffix(c)),
        };

        if high == low && suffix.is_some() {
            return Err(ParseError::InvalidFormat(hand.to_string()));
        }

        Ok(Self { high, low, suffix })
    }

    /// Suitedness values this pattern expands to.
    fn shapes(&self) -> Vec<bool> {
        match self.suffix {
            Some(suited) => vec![suited],
            None => vec![true, false],
        }
    }
}
