//! Static range charts for the three archetypes.
//!
//! Each archetype maps every zone to three token sets: hands to open-raise,
//! hands to reraise with when facing a raise, and hands to call. The built-in
//! charts are literal token lists; overrides are written in range notation
//! and expanded at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::action::{Action, Archetype};
use super::hand::RangeToken;
use super::position::Zone;
use super::range::TokenSet;
use crate::error::{ParseError, Result, TrainerError};

// Optimal: Ed Miller's recommendations.

const OPTIMAL_EARLY_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AJs", "ATs", "KQs",
];
const OPTIMAL_EARLY_RERAISE: &[&str] = &["AA", "KK", "QQ", "JJ", "AKs", "AKo"];

const OPTIMAL_LATE_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "QJs", "QTs", "Q9s", "JTs", "T9s", "98s", "87s", "76s", "65s",
];
const OPTIMAL_LATE_RERAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AJs", "ATs", "KQs", "AKo", "AQo", "AJo",
    "ATo", "KQo",
];
const OPTIMAL_BUTTON_CALL: &[&str] = &[
    "66", "55", "44", "33", "22", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "K9s",
    "K8s", "K7s", "Q9s", "J9s", "T8s", "97s", "86s", "75s", "64s", "53s", "43s",
];

const OPTIMAL_BLINDS_RAISE: &[&str] = OPTIMAL_LATE_RERAISE;
const OPTIMAL_BLINDS_CALL: &[&str] = &[
    "88", "77", "66", "55", "44", "33", "22", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s",
    "A2s", "K9s", "K8s", "K7s", "Q9s", "J9s", "T9s", "98s", "87s", "76s", "65s", "54s",
];

// Loose

const LOOSE_EARLY_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "AKo", "AQo", "AJo",
    "ATo", "A9o", "A8o", "A7o",
];
const LOOSE_EARLY_RERAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AJs", "ATs", "A5s", "AKo", "AQo",
];
const LOOSE_EARLY_CALL: &[&str] = &[
    "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "A9s", "A8s", "A7s", "A6s",
    "KQs", "KJs", "KTs", "QJs", "QTs", "JTs", "T9s", "98s", "87s", "76s", "65s", "54s", "43s",
    "A9o", "A8o", "A7o", "A6o", "KQo", "KJo", "KTo", "QJo", "QTo", "JTo",
];

const LOOSE_CUTOFF_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "AKo", "AQo", "AJo", "ATo", "A9o",
    "A8o", "A7o", "A6o", "A5o", "A4o", "A3o", "A2o", "KQo", "KJo", "KTo", "K9o", "K8o", "K7o",
    "K6o",
];
const LOOSE_CUTOFF_RERAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AQs", "AJs", "ATs", "A5s", "A4s", "A3s",
    "A2s", "KQs", "KJs", "AKo", "AQo",
];
const LOOSE_LATE_CALL: &[&str] = &[
    "88", "77", "66", "55", "44", "33", "22", "A9s", "A8s", "A7s", "A6s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "QJs", "QTs", "Q9s", "Q8s", "Q7s", "JTs", "J9s",
    "J8s", "J7s", "T9s", "T8s", "T7s", "98s", "97s", "96s", "87s", "86s", "76s", "75s", "65s",
    "AJo", "ATo", "A9o", "A8o", "A7o", "A6o", "KQo", "KJo", "KTo", "K9o", "K8o", "K7o", "QJo",
    "QTo", "Q9o", "Q8o", "JTo", "J9o", "J8o", "T9o", "T8o", "98o", "97o", "87o",
];

const LOOSE_BUTTON_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AKs", "AQs",
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs",
    "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "QJs", "QTs", "Q9s", "Q8s", "Q7s",
    "Q6s", "Q5s", "Q4s", "JTs", "J9s", "J8s", "J7s", "J6s", "J5s", "T9s", "T8s", "T7s", "T6s",
    "98s", "97s", "96s", "95s", "87s", "86s", "85s", "76s", "75s", "74s", "65s", "64s", "63s",
    "54s", "53s", "AKo", "AQo", "AJo", "ATo", "A9o", "A8o", "A7o", "A6o", "A5o", "A4o", "A3o",
    "A2o", "KQo", "KJo", "KTo", "K9o", "K8o", "K7o", "K6o", "K5o", "QJo", "QTo", "Q9o", "Q8o",
    "Q7o", "JTo", "J9o", "J8o", "J7o", "T9o", "T8o", "T7o",
];
const LOOSE_BUTTON_RERAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s",
    "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs", "KTs", "K9s", "QJs", "QTs", "JTs", "T9s",
    "98s", "87s", "76s", "AKo", "AQo", "AJo", "ATo",
];

const LOOSE_BLINDS_RERAISE: &[&str] = LOOSE_EARLY_RERAISE;
const LOOSE_BLINDS_CALL: &[&str] = &[
    "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", "A9s", "A8s", "A7s", "A6s",
    "KQs", "KJs", "KTs", "K9s", "QJs", "QTs", "JTs", "T9s", "98s", "87s", "76s", "65s", "54s",
    "43s", "A9o", "A8o", "A7o", "A6o", "KQo", "KJo", "KTo", "QJo", "QTo", "JTo",
];

// Tight

const TIGHT_EARLY_RAISE: &[&str] = &["AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AKo", "AQo"];
const TIGHT_EARLY_RERAISE: &[&str] = &["AA", "KK", "QQ", "AKs", "AKo"];
const TIGHT_EARLY_CALL: &[&str] = &["JJ", "TT", "99", "AQs", "AJs", "ATs", "KQs", "KJs", "QJs", "JTs"];

const TIGHT_CUTOFF_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "AKs", "AQs", "AJs", "ATs", "KQs", "KJs",
    "QJs", "AKo", "AQo", "AJo",
];
const TIGHT_CUTOFF_RERAISE: &[&str] = &["AA", "KK", "QQ", "JJ", "TT", "AKs", "AQs", "AKo", "AQo"];
const TIGHT_CUTOFF_CALL: &[&str] = &[
    "88", "77", "66", "A9s", "A8s", "A7s", "KQs", "KJs", "KTs", "QJs", "QTs", "JTs",
];

const TIGHT_BUTTON_RAISE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "AKs", "AQs", "AJs", "ATs", "A9s",
    "KQs", "KJs", "KTs", "QJs", "QTs", "JTs", "AKo", "AQo", "AJo", "ATo",
];
const TIGHT_BUTTON_RERAISE: &[&str] = &["AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AKo", "AQo"];
const TIGHT_BUTTON_CALL: &[&str] = &[
    "77", "66", "55", "A8s", "A7s", "A6s", "KQs", "KJs", "KTs", "K9s", "QJs", "QTs", "Q9s", "JTs",
    "J9s",
];

const TIGHT_BLINDS_RERAISE: &[&str] = TIGHT_CUTOFF_RERAISE;
const TIGHT_BLINDS_CALL: &[&str] = &[
    "TT", "99", "88", "77", "66", "55", "44", "33", "22", "AJs", "ATs", "A9s", "A8s", "KQs", "KJs",
    "KTs", "QJs", "QTs", "JTs",
];

/// Raise, reraise and call sets for one archetype in one zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRanges {
    /// Hands to open-raise with.
    pub raise: TokenSet,
    /// Hands to reraise with when an earlier seat raised.
    pub reraise: TokenSet,
    /// Hands to call with.
    pub call: TokenSet,
}

impl ZoneRanges {
    fn from_lists(raise: &[&str], reraise: &[&str], call: &[&str]) -> std::result::Result<Self, ParseError> {
        Ok(Self {
            raise: TokenSet::from_tokens(raise)?,
            reraise: TokenSet::from_tokens(reraise)?,
            call: TokenSet::from_tokens(call)?,
        })
    }

    /// Expand notation strings into a zone table.
    pub fn from_notation(notation: &ZoneNotation) -> std::result::Result<Self, ParseError> {
        Ok(Self {
            raise: TokenSet::from_notation(&notation.raise)?,
            reraise: TokenSet::from_notation(&notation.reraise)?,
            call: TokenSet::from_notation(&notation.call)?,
        })
    }

    /// Action this table prescribes for a token.
    ///
    /// Raise and reraise sets both lead to a raise; the raise only becomes a
    /// reraise when an earlier seat raised and the token is in the reraise set.
    pub fn action(&self, token: &RangeToken, facing_raise: bool) -> Action {
        let in_reraise = self.reraise.contains(token);
        if self.raise.contains(token) || in_reraise {
            if facing_raise && in_reraise {
                Action::Reraise
            } else {
                Action::Raise
            }
        } else if self.call.contains(token) {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

/// Zone tables for one archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeChart {
    zones: [ZoneRanges; 4],
}

impl ArchetypeChart {
    /// Build a chart from tables in `Zone::ALL` order.
    pub fn new(early: ZoneRanges, cutoff: ZoneRanges, button: ZoneRanges, blinds: ZoneRanges) -> Self {
        Self {
            zones: [early, cutoff, button, blinds],
        }
    }

    /// Table for a zone.
    pub fn zone(&self, zone: Zone) -> &ZoneRanges {
        &self.zones[zone.index()]
    }

    fn optimal() -> std::result::Result<Self, ParseError> {
        Ok(Self::new(
            ZoneRanges::from_lists(OPTIMAL_EARLY_RAISE, OPTIMAL_EARLY_RERAISE, &[])?,
            ZoneRanges::from_lists(OPTIMAL_LATE_RAISE, OPTIMAL_LATE_RERAISE, &[])?,
            ZoneRanges::from_lists(OPTIMAL_LATE_RAISE, OPTIMAL_LATE_RERAISE, OPTIMAL_BUTTON_CALL)?,
            ZoneRanges::from_lists(OPTIMAL_BLINDS_RAISE, OPTIMAL_LATE_RERAISE, OPTIMAL_BLINDS_CALL)?,
        ))
    }

    fn loose() -> std::result::Result<Self, ParseError> {
        Ok(Self::new(
            ZoneRanges::from_lists(LOOSE_EARLY_RAISE, LOOSE_EARLY_RERAISE, LOOSE_EARLY_CALL)?,
            ZoneRanges::from_lists(LOOSE_CUTOFF_RAISE, LOOSE_CUTOFF_RERAISE, LOOSE_LATE_CALL)?,
            ZoneRanges::from_lists(LOOSE_BUTTON_RAISE, LOOSE_BUTTON_RERAISE, LOOSE_LATE_CALL)?,
            ZoneRanges::from_lists(&[], LOOSE_BLINDS_RERAISE, LOOSE_BLINDS_CALL)?,
        ))
    }

    fn tight() -> std::result::Result<Self, ParseError> {
        Ok(Self::new(
            ZoneRanges::from_lists(TIGHT_EARLY_RAISE, TIGHT_EARLY_RERAISE, TIGHT_EARLY_CALL)?,
            ZoneRanges::from_lists(TIGHT_CUTOFF_RAISE, TIGHT_CUTOFF_RERAISE, TIGHT_CUTOFF_CALL)?,
            ZoneRanges::from_lists(TIGHT_BUTTON_RAISE, TIGHT_BUTTON_RERAISE, TIGHT_BUTTON_CALL)?,
            ZoneRanges::from_lists(&[], TIGHT_BLINDS_RERAISE, TIGHT_BLINDS_CALL)?,
        ))
    }
}

/// Notation strings for one zone of a chart override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneNotation {
    /// Open-raise range, e.g. `"TT+, AQs+"`.
    pub raise: String,
    /// Reraise range.
    pub reraise: String,
    /// Call range.
    pub call: String,
}

/// Chart overrides keyed by archetype name, then zone name.
pub type ChartOverrides = BTreeMap<String, BTreeMap<String, ZoneNotation>>;

/// Range charts for every archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charts {
    charts: [ArchetypeChart; 3],
}

impl Charts {
    /// The built-in charts.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            charts: [ArchetypeChart::optimal()?, ArchetypeChart::loose()?, ArchetypeChart::tight()?],
        })
    }

    /// The built-in charts with some archetypes replaced.
    ///
    /// Every override must cover all four zones.
    pub fn with_overrides(overrides: &ChartOverrides) -> Result<Self> {
        let mut charts = Self::standard()?;
        for (name, zones) in overrides {
            let archetype: Archetype = name.parse()?;
            charts.set(archetype, Self::parse_override(archetype, zones)?);
            log::debug!("loaded chart override for {}", archetype);
        }
        Ok(charts)
    }

    fn parse_override(archetype: Archetype, zones: &BTreeMap<String, ZoneNotation>) -> Result<ArchetypeChart> {
        let mut tables: [Option<ZoneRanges>; 4] = Default::default();
        for (name, notation) in zones {
            let zone: Zone = name.parse()?;
            tables[zone.index()] = Some(ZoneRanges::from_notation(notation)?);
        }

        let mut take = |zone: Zone| {
            tables[zone.index()]
                .take()
                .ok_or(TrainerError::MissingZone { archetype, zone })
        };
        Ok(ArchetypeChart::new(
            take(Zone::Early)?,
            take(Zone::Cutoff)?,
            take(Zone::Button)?,
            take(Zone::Blinds)?,
        ))
    }

    /// Replace one archetype's chart.
    pub fn set(&mut self, archetype: Archetype, chart: ArchetypeChart) {
        self.charts[archetype.index()] = chart;
    }

    /// Chart for an archetype.
    pub fn chart(&self, archetype: Archetype) -> &ArchetypeChart {
        &self.charts[archetype.index()]
    }

    /// Table for an archetype in a zone.
    pub fn lookup(&self, archetype: Archetype, zone: Zone) -> &ZoneRanges {
        self.chart(archetype).zone(zone)
    }

    /// Lay out one table as a 13x13 grid.
    pub fn grid(&self, archetype: Archetype, zone: Zone) -> ChartGrid {
        let table = self.lookup(archetype, zone);
        let cells = (0..13)
            .map(|row| {
                (0..13)
                    .map(|col| {
                        let token = RangeToken::at_grid(row, col);
                        GridCell {
                            token,
                            unopened: table.action(&token, false),
                            facing_raise: table.action(&token, true),
                        }
                    })
                    .collect()
            })
            .collect();

        ChartGrid {
            archetype,
            zone,
            cells,
        }
    }
}

/// One cell of a chart grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Hand in this cell.
    pub token: RangeToken,
    /// Action when nobody has raised yet.
    pub unopened: Action,
    /// Action when an earlier seat raised.
    pub facing_raise: Action,
}

/// 13x13 view of a zone table. Pairs on the diagonal, suited hands above it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartGrid {
    /// Archetype shown.
    pub archetype: Archetype,
    /// Zone shown.
    pub zone: Zone,
    /// Rows of cells, A..2.
    pub cells: Vec<Vec<GridCell>>,
}

const GRID_LABELS: [&str; 13] = ["A", "K", "Q", "J", "T", "9", "8", "7", "6", "5", "4", "3", "2"];

impl ChartGrid {
    /// Share of all 1326 combos whose unopened action is in `actions`.
    pub fn frequency(&self, actions: &[Action]) -> f64 {
        let combos: u32 = self
            .cells
            .iter()
            .flatten()
            .filter(|c| actions.contains(&c.unopened))
            .map(|c| c.token.shape().num_combos() as u32)
            .sum();
        combos as f64 / 1326.0
    }

    /// Render as text. Each cell shows the unopened action, then the action
    /// when facing a raise (`R` raise, `3` reraise, `C` call, `.` fold).
    pub fn render(&self) -> String {
        fn letter(action: Action) -> char {
            match action {
                Action::Fold => '.',
                Action::Call => 'C',
                Action::Raise => 'R',
                Action::Reraise => '3',
            }
        }

        let mut out = format!(
            "=== {} / {} ===\nRaise: {:.1}% | Call: {:.1}% | Fold: {:.1}%\n\n",
            self.archetype,
            self.zone,
            self.frequency(&[Action::Raise, Action::Reraise]) * 100.0,
            self.frequency(&[Action::Call]) * 100.0,
            self.frequency(&[Action::Fold]) * 100.0,
        );

        out.push_str("   ");
        for label in GRID_LABELS {
            out.push_str(&format!("{:>4}", label));
        }
        out.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{:>2} ", GRID_LABELS[row]));
            for cell in cells {
                out.push_str(&format!("  {}{}", letter(cell.unopened), letter(cell.facing_raise)));
            }
            out.push('\n');
        }
        out
    }

    /// Print as text grid.
    pub fn print_grid(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> RangeToken {
        s.parse().unwrap()
    }

    fn notation(raise: &str, reraise: &str, call: &str) -> ZoneNotation {
        ZoneNotation {
            raise: raise.to_string(),
            reraise: reraise.to_string(),
            call: call.to_string(),
        }
    }

    #[test]
    fn test_standard_chart_sizes() {
        let charts = Charts::standard().unwrap();

        let early = charts.lookup(Archetype::Optimal, Zone::Early);
        assert_eq!(early.raise.len(), 11);
        assert_eq!(early.reraise.len(), 6);
        assert!(early.call.is_empty());

        assert!(charts.lookup(Archetype::Optimal, Zone::Cutoff).call.is_empty());
        assert_eq!(charts.lookup(Archetype::Optimal, Zone::Button).call.len(), 25);
        assert_eq!(charts.lookup(Archetype::Optimal, Zone::Blinds).raise.len(), 16);

        assert!(charts.lookup(Archetype::Loose, Zone::Blinds).raise.is_empty());
        assert!(charts.lookup(Archetype::Tight, Zone::Blinds).raise.is_empty());
        assert_eq!(
            charts.lookup(Archetype::Loose, Zone::Cutoff).call,
            charts.lookup(Archetype::Loose, Zone::Button).call
        );
    }

    #[test]
    fn test_loose_plays_more_than_tight() {
        let charts = Charts::standard().unwrap();
        for zone in Zone::ALL {
            let played = |a: Archetype| {
                let grid = charts.grid(a, zone);
                grid.frequency(&[Action::Call, Action::Raise, Action::Reraise])
            };
            assert!(played(Archetype::Loose) > played(Archetype::Tight), "{}", zone);
        }
    }

    #[test]
    fn test_table_action() {
        let charts = Charts::standard().unwrap();
        let early = charts.lookup(Archetype::Optimal, Zone::Early);

        assert_eq!(early.action(&token("AKs"), false), Action::Raise);
        assert_eq!(early.action(&token("AKs"), true), Action::Reraise);
        // Raise set only: stays a raise when facing a raise.
        assert_eq!(early.action(&token("TT"), true), Action::Raise);
        // Reraise set only still opens.
        assert_eq!(early.action(&token("AKo"), false), Action::Raise);
        assert_eq!(early.action(&token("72o"), false), Action::Fold);

        let button = charts.lookup(Archetype::Optimal, Zone::Button);
        assert_eq!(button.action(&token("J9s"), false), Action::Call);
        // Raise wins over call when a token is in both.
        assert_eq!(button.action(&token("A9s"), false), Action::Raise);
    }

    #[test]
    fn test_override_replaces_archetype() {
        let mut zones = BTreeMap::new();
        for zone in Zone::ALL {
            zones.insert(zone.name().to_string(), notation("QQ+", "AA", "22+"));
        }
        let mut overrides = ChartOverrides::new();
        overrides.insert("tight".to_string(), zones);

        let charts = Charts::with_overrides(&overrides).unwrap();
        let blinds = charts.lookup(Archetype::Tight, Zone::Blinds);
        assert_eq!(blinds.raise.len(), 3);
        assert_eq!(blinds.call.len(), 13);
        // Others untouched.
        assert_eq!(charts.chart(Archetype::Loose), Charts::standard().unwrap().chart(Archetype::Loose));
    }

    #[test]
    fn test_override_missing_zone_fails() {
        let mut zones = BTreeMap::new();
        zones.insert("early".to_string(), notation("AA", "", ""));
        zones.insert("cutoff".to_string(), notation("AA", "", ""));
        zones.insert("button".to_string(), notation("AA", "", ""));
        let mut overrides = ChartOverrides::new();
        overrides.insert("loose".to_string(), zones);

        let err = Charts::with_overrides(&overrides).unwrap_err();
        assert!(matches!(
            err,
            TrainerError::MissingZone { archetype: Archetype::Loose, zone: Zone::Blinds }
        ));
    }

    #[test]
    fn test_override_unknown_keys() {
        let mut overrides = ChartOverrides::new();
        overrides.insert("maniac".to_string(), BTreeMap::new());
        assert!(matches!(
            Charts::with_overrides(&overrides),
            Err(TrainerError::UnknownArchetype(_))
        ));

        let mut zones = BTreeMap::new();
        zones.insert("middle".to_string(), ZoneNotation::default());
        let mut overrides = ChartOverrides::new();
        overrides.insert("optimal".to_string(), zones);
        assert!(matches!(
            Charts::with_overrides(&overrides),
            Err(TrainerError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_override_bad_notation() {
        let mut zones = BTreeMap::new();
        for zone in Zone::ALL {
            zones.insert(zone.name().to_string(), notation("AXs", "", ""));
        }
        let mut overrides = ChartOverrides::new();
        overrides.insert("optimal".to_string(), zones);
        assert!(matches!(
            Charts::with_overrides(&overrides),
            Err(TrainerError::Parse(ParseError::InvalidRank('X')))
        ));
    }

    #[test]
    fn test_grid_layout() {
        let charts = Charts::standard().unwrap();
        let grid = charts.grid(Archetype::Optimal, Zone::Early);
        assert_eq!(grid.cells.len(), 13);
        assert!(grid.cells.iter().all(|row| row.len() == 13));
        assert_eq!(grid.cells[0][0].token, token("AA"));
        assert_eq!(grid.cells[0][1].token, token("AKs"));
        assert_eq!(grid.cells[1][0].token, token("AKo"));
        assert_eq!(grid.cells[0][1].facing_raise, Action::Reraise);
        assert_eq!(grid.cells[12][12].unopened, Action::Fold);

        let text = grid.render();
        assert!(text.starts_with("=== optimal / early ==="));
        // Header, blank line, column labels and 13 rows.
        assert_eq!(text.lines().count(), 3 + 1 + 13);
    }
}
