//! Seats at the training table.

use rand::Rng;
use serde::Serialize;

use crate::preflop::{Action, Archetype, HoleCards, Zone};

/// Index of the human player's seat.
pub const HERO: usize = 0;

/// One seat at the table.
///
/// Archetype and stack persist across hands; hand, zone and action are reset
/// for every deal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seat {
    /// Seat index, 0 is the human.
    pub index: usize,
    /// Range chart this seat plays.
    pub archetype: Archetype,
    /// Stack in chips.
    pub stack: u32,
    /// Hole cards for the current hand.
    #[serde(serialize_with = "serialize_hand")]
    pub hand: Option<HoleCards>,
    /// Zone for the current hand.
    pub zone: Option<Zone>,
    /// Last action taken this hand.
    pub action: Option<Action>,
}

fn serialize_hand<S: serde::Serializer>(hand: &Option<HoleCards>, s: S) -> Result<S::Ok, S::Error> {
    match hand {
        Some(h) => s.serialize_some(&h.to_string()),
        None => s.serialize_none(),
    }
}

impl Seat {
    /// Create a seat with no hand.
    pub fn new(index: usize, archetype: Archetype, stack: u32) -> Self {
        Self {
            index,
            archetype,
            stack,
            hand: None,
            zone: None,
            action: None,
        }
    }

    /// Create a table: the human plays the optimal chart, opponents get a
    /// random archetype, everyone a random stack in `min_stack..=max_stack`.
    pub fn table<R: Rng>(count: usize, min_stack: u32, max_stack: u32, rng: &mut R) -> Vec<Seat> {
        (0..count)
            .map(|index| {
                let archetype = if index == HERO {
                    Archetype::Optimal
                } else {
                    Archetype::ALL[rng.gen_range(0..Archetype::ALL.len())]
                };
                Seat::new(index, archetype, rng.gen_range(min_stack..=max_stack))
            })
            .collect()
    }

    /// Check if this is the human's seat.
    pub fn is_hero(&self) -> bool {
        self.index == HERO
    }

    /// Check if the seat folded this hand.
    pub fn has_folded(&self) -> bool {
        self.action == Some(Action::Fold)
    }

    /// Clear per-hand state.
    pub fn clear_hand(&mut self) {
        self.hand = None;
        self.zone = None;
        self.action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_table_creation() {
        let mut rng = StdRng::seed_from_u64(3);
        let seats = Seat::table(8, 50, 250, &mut rng);
        assert_eq!(seats.len(), 8);
        assert!(seats[0].is_hero());
        assert_eq!(seats[0].archetype, Archetype::Optimal);
        for (i, seat) in seats.iter().enumerate() {
            assert_eq!(seat.index, i);
            assert!((50..=250).contains(&seat.stack));
            assert!(seat.hand.is_none());
        }
    }

    #[test]
    fn test_opponent_archetypes_vary() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = Vec::new();
        for _ in 0..20 {
            for seat in Seat::table(10, 50, 250, &mut rng).iter().skip(1) {
                if !seen.contains(&seat.archetype) {
                    seen.push(seat.archetype);
                }
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_clear_hand() {
        let mut seat = Seat::new(2, Archetype::Loose, 100);
        seat.hand = Some("AhKd".parse().unwrap());
        seat.zone = Some(Zone::Early);
        seat.action = Some(Action::Fold);
        assert!(seat.has_folded());
        seat.clear_hand();
        assert!(seat.hand.is_none() && seat.zone.is_none() && seat.action.is_none());
        assert_eq!(seat.stack, 100);
    }
}
