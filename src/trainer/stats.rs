//! Session statistics.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preflop::{Choice, Zone};

/// Counters for one zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStats {
    /// Hands the human was dealt in this zone.
    pub seen: u32,
    /// Hands the human called or raised.
    pub played: u32,
    /// Hands graded correct.
    pub correct: u32,
}

impl ZoneStats {
    /// Share of hands played voluntarily, in percent. 0 with no hands.
    pub fn played_pct(&self) -> f64 {
        percent(self.played, self.seen)
    }

    /// Share of hands graded correct, in percent. 0 with no hands.
    pub fn correct_pct(&self) -> f64 {
        percent(self.correct, self.seen)
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Running statistics for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    zones: [ZoneStats; 4],
    correct: u32,
}

impl SessionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one graded decision.
    pub fn record(&mut self, zone: Zone, choice: Choice, correct: bool) {
        let stats = &mut self.zones[zone.index()];
        stats.seen += 1;
        if choice != Choice::Fold {
            stats.played += 1;
        }
        if correct {
            stats.correct += 1;
            self.correct += 1;
        }
    }

    /// Counters for a zone.
    pub fn zone(&self, zone: Zone) -> ZoneStats {
        self.zones[zone.index()]
    }

    /// Hands graded across all zones.
    pub fn total_seen(&self) -> u32 {
        self.zones.iter().map(|z| z.seen).sum()
    }

    /// Hands graded correct across all zones.
    pub fn total_correct(&self) -> u32 {
        self.correct
    }

    /// Overall accuracy in percent. 0 with no hands.
    pub fn correct_pct(&self) -> f64 {
        percent(self.correct, self.total_seen())
    }

    /// Add another session's counters into this one.
    pub fn merge(&mut self, other: &SessionStats) {
        for (mine, theirs) in self.zones.iter_mut().zip(other.zones.iter()) {
            mine.seen += theirs.seen;
            mine.played += theirs.played;
            mine.correct += theirs.correct;
        }
        self.correct += other.correct;
    }

    /// Snapshot for display or export.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            zones: Zone::ALL
                .iter()
                .map(|&zone| {
                    let stats = self.zone(zone);
                    ZoneReport {
                        zone,
                        seen: stats.seen,
                        played: stats.played,
                        correct: stats.correct,
                        played_pct: stats.played_pct(),
                        correct_pct: stats.correct_pct(),
                    }
                })
                .collect(),
            total_seen: self.total_seen(),
            total_correct: self.correct,
            correct_pct: self.correct_pct(),
        }
    }
}

/// Per-zone line of a [`StatsReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    /// Zone.
    pub zone: Zone,
    /// Hands seen.
    pub seen: u32,
    /// Hands called or raised.
    pub played: u32,
    /// Hands graded correct.
    pub correct: u32,
    /// Played share in percent.
    pub played_pct: f64,
    /// Correct share in percent.
    pub correct_pct: f64,
}

/// Serializable statistics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// One entry per zone, in table order.
    pub zones: Vec<ZoneReport>,
    /// Hands seen.
    pub total_seen: u32,
    /// Hands graded correct.
    pub total_correct: u32,
    /// Overall accuracy in percent.
    pub correct_pct: f64,
}

impl StatsReport {
    /// Write the report as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Print as a text table.
    pub fn print_summary(&self) {
        println!("{:<8} {:>6} {:>8} {:>9}", "zone", "hands", "played", "correct");
        for z in &self.zones {
            println!(
                "{:<8} {:>6} {:>7.0}% {:>8.0}%",
                z.zone.name(),
                z.seen,
                z.played_pct,
                z.correct_pct
            );
        }
        println!(
            "Total hands: {} | Correctly played: {} ({:.0}%)",
            self.total_seen, self.total_correct, self.correct_pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = SessionStats::new();
        assert_eq!(stats.total_seen(), 0);
        assert_eq!(stats.correct_pct(), 0.0);
        for zone in Zone::ALL {
            assert_eq!(stats.zone(zone).played_pct(), 0.0);
            assert_eq!(stats.zone(zone).correct_pct(), 0.0);
        }
    }

    #[test]
    fn test_record() {
        let mut stats = SessionStats::new();
        stats.record(Zone::Early, Choice::Fold, true);
        stats.record(Zone::Early, Choice::Raise, false);
        stats.record(Zone::Early, Choice::Call, true);
        stats.record(Zone::Button, Choice::Raise, true);

        let early = stats.zone(Zone::Early);
        assert_eq!(early, ZoneStats { seen: 3, played: 2, correct: 2 });
        assert!((early.played_pct() - 66.666).abs() < 0.01);
        assert_eq!(stats.total_seen(), 4);
        assert_eq!(stats.total_correct(), 3);
        assert_eq!(stats.correct_pct(), 75.0);
        assert_eq!(stats.zone(Zone::Blinds), ZoneStats::default());
    }

    #[test]
    fn test_merge() {
        let mut a = SessionStats::new();
        a.record(Zone::Cutoff, Choice::Call, true);
        let mut b = SessionStats::new();
        b.record(Zone::Cutoff, Choice::Fold, false);
        b.record(Zone::Blinds, Choice::Raise, true);
        a.merge(&b);
        assert_eq!(a.zone(Zone::Cutoff), ZoneStats { seen: 2, played: 1, correct: 1 });
        assert_eq!(a.total_correct(), 2);
    }

    #[test]
    fn test_report_json() {
        let mut stats = SessionStats::new();
        stats.record(Zone::Blinds, Choice::Call, true);
        let report = stats.report();
        assert_eq!(report.zones.len(), 4);
        assert_eq!(report.zones[3].zone, Zone::Blinds);
        assert_eq!(report.zones[3].played_pct, 100.0);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"zone\":\"blinds\""));
        let back: StatsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
