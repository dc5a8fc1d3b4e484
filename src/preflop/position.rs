//! Table zones and seat-to-zone resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Coarse table-position bucket used to pick a range chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// First to act after the blinds.
    Early,
    /// Seat just before the button.
    Cutoff,
    /// Dealer button.
    Button,
    /// Small and big blind.
    Blinds,
}

impl Zone {
    /// All zones in table order.
    pub const ALL: [Zone; 4] = [Zone::Early, Zone::Cutoff, Zone::Button, Zone::Blinds];

    /// Get zone index (0-3).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get zone name.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::Early => "early",
            Zone::Cutoff => "cutoff",
            Zone::Button => "button",
            Zone::Blinds => "blinds",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Zone {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .iter()
            .copied()
            .find(|z| z.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownZone(s.to_string()))
    }
}

/// Rule used to map a seat to a zone.
///
/// Two rules have been used historically and they disagree, so both are kept
/// and the trainer config picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStrategy {
    /// Bucket by distance from the button: 0 is the button, the seat just
    /// before it (`floor(0.9 * seats)` away) is the cutoff, the next two seats
    /// after the button are the blinds, everything else is early.
    #[default]
    ButtonDistance,
    /// Bucket by absolute seat index as a fraction of the table: up to 40% is
    /// early, up to 70% cutoff, up to 90% button, the rest blinds. Ignores the
    /// button.
    SeatFraction,
}

impl ZoneStrategy {
    /// Resolve the zone for a seat.
    pub fn resolve(&self, seat: usize, button: usize, seat_count: usize) -> Zone {
        match self {
            ZoneStrategy::ButtonDistance => by_button_distance(seat, button, seat_count),
            ZoneStrategy::SeatFraction => by_seat_fraction(seat, seat_count),
        }
    }
}

/// Resolve a seat's zone with the canonical (button-distance) rule.
pub fn resolve_zone(seat: usize, button: usize, seat_count: usize) -> Zone {
    ZoneStrategy::ButtonDistance.resolve(seat, button, seat_count)
}

fn by_button_distance(seat: usize, button: usize, seat_count: usize) -> Zone {
    debug_assert!(seat < seat_count && button < seat_count);
    let distance = (seat + seat_count - button) % seat_count;
    let cutoff = seat_count * 9 / 10;

    if distance == 0 {
        Zone::Button
    } else if distance == cutoff {
        Zone::Cutoff
    } else if distance == 1 || distance == 2 {
        Zone::Blinds
    } else {
        Zone::Early
    }
}

fn by_seat_fraction(seat: usize, seat_count: usize) -> Zone {
    // seat <= count * 0.4, in integers
    let scaled = seat * 10;
    if scaled <= seat_count * 4 {
        Zone::Early
    } else if scaled <= seat_count * 7 {
        Zone::Cutoff
    } else if scaled <= seat_count * 9 {
        Zone::Button
    } else {
        Zone::Blinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_seat_is_button() {
        assert_eq!(resolve_zone(0, 0, 10), Zone::Button);
        assert_eq!(resolve_zone(4, 4, 6), Zone::Button);
    }

    #[test]
    fn test_ten_handed_layout() {
        let zones: Vec<Zone> = (0..10).map(|s| resolve_zone(s, 0, 10)).collect();
        assert_eq!(
            zones,
            vec![
                Zone::Button,
                Zone::Blinds,
                Zone::Blinds,
                Zone::Early,
                Zone::Early,
                Zone::Early,
                Zone::Early,
                Zone::Early,
                Zone::Early,
                Zone::Cutoff,
            ]
        );
    }

    #[test]
    fn test_wraps_around_button() {
        // Button on seat 3 of 5: seat 2 is the cutoff, seats 4 and 0 the blinds.
        assert_eq!(resolve_zone(2, 3, 5), Zone::Cutoff);
        assert_eq!(resolve_zone(4, 3, 5), Zone::Blinds);
        assert_eq!(resolve_zone(0, 3, 5), Zone::Blinds);
        assert_eq!(resolve_zone(1, 3, 5), Zone::Early);
    }

    #[test]
    fn test_heads_up_prefers_cutoff() {
        // With two seats the only other seat is one away, which is also the cutoff.
        assert_eq!(resolve_zone(1, 0, 2), Zone::Cutoff);
    }

    #[test]
    fn test_seat_fraction() {
        let s = ZoneStrategy::SeatFraction;
        assert_eq!(s.resolve(0, 7, 10), Zone::Early);
        assert_eq!(s.resolve(4, 0, 10), Zone::Early);
        assert_eq!(s.resolve(5, 0, 10), Zone::Cutoff);
        assert_eq!(s.resolve(7, 0, 10), Zone::Cutoff);
        assert_eq!(s.resolve(8, 0, 10), Zone::Button);
        assert_eq!(s.resolve(9, 0, 10), Zone::Button);
        assert_eq!(s.resolve(4, 0, 5), Zone::Button);
        // Only tables larger than ten seats reach the blinds bucket.
        assert_eq!(s.resolve(11, 0, 12), Zone::Blinds);
    }

    #[test]
    fn test_resolution_is_total() {
        for strategy in [ZoneStrategy::ButtonDistance, ZoneStrategy::SeatFraction] {
            for count in 2..=10 {
                for button in 0..count {
                    for seat in 0..count {
                        let zone = strategy.resolve(seat, button, count);
                        assert!(Zone::ALL.contains(&zone));
                    }
                }
                let buttons = (0..count)
                    .filter(|&s| ZoneStrategy::ButtonDistance.resolve(s, 0, count) == Zone::Button)
                    .count();
                assert_eq!(buttons, 1);
            }
        }
    }

    #[test]
    fn test_zone_parsing() {
        assert_eq!("Cutoff".parse::<Zone>().unwrap(), Zone::Cutoff);
        assert!(matches!("middle".parse::<Zone>(), Err(TrainerError::UnknownZone(_))));
    }
}
