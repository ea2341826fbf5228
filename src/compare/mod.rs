pub mod parse;
mod render;

pub use self::parse::parse_report;

use crate::config::ReportSettings;
use crate::error::{CmpResult, CompareError};
use crate::groups::SizeGroup;
use crate::method::TiePolicy;
use crate::table::MetricTable;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Winner {
    A,
    B,
    /// Only produced under `TiePolicy::Separate`.
    Tie,
}

impl Winner {
    /// Lower value wins.
    pub fn decide(value_a: f64, value_b: f64, policy: TiePolicy) -> Self {
        if value_a < value_b {
            Self::A
        } else if value_a > value_b {
            Self::B
        } else {
            match policy {
                TiePolicy::FavorA => Self::A,
                TiePolicy::Separate => Self::Tie,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub id: String,
    pub value_a: f64,
    pub value_b: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
}

/// An identifier present in only one of the two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub id: String,
    pub missing_from: Side,
}

/// Win counts of a `Comparison`; only built from a non-empty record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Summary {
    pub total: usize,
    pub a_better: usize,
    pub b_better: usize,
    pub ties: usize,
}

impl Summary {
    pub(crate) fn from_records(records: &[MetricRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            a_better: 0,
            b_better: 0,
            ties: 0,
        };
        for r in records {
            match r.winner {
                Winner::A => summary.a_better += 1,
                Winner::B => summary.b_better += 1,
                Winner::Tie => summary.ties += 1,
            }
        }
        summary
    }

    /// Share of `count` in percent; `total > 0` holds for every `Summary`.
    pub fn percentage(&self, count: usize) -> f64 {
        // Same operation order as the published result files.
        count as f64 / self.total as f64 * 100.0
    }
}

/// Result of comparing two metric tables, sorted by identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub settings: ReportSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<SizeGroup>,
    pub records: Vec<MetricRecord>,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    /// Builds a comparison from already-decided records. Fails when empty.
    pub fn from_records(
        settings: ReportSettings,
        group: Option<SizeGroup>,
        records: Vec<MetricRecord>,
    ) -> CmpResult<Self> {
        if records.is_empty() {
            return Err(CompareError::EmptyInput {
                method_a: settings.method_a.to_string(),
                method_b: settings.method_b.to_string(),
            });
        }
        let summary = Summary::from_records(&records);
        Ok(Self {
            settings,
            group,
            records,
            summary,
            mismatches: Vec::new(),
        })
    }

    pub fn winner_label(&self, winner: Winner) -> String {
        match winner {
            Winner::A => self.settings.method_a.to_string(),
            Winner::B => self.settings.method_b.to_string(),
            Winner::Tie => "tie".to_string(),
        }
    }

    /// Deterministic text report; identical input yields identical bytes.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Stateless comparison of two methods under one set of report settings.
#[derive(Debug, Clone)]
pub struct Reporter {
    settings: ReportSettings,
}

impl Reporter {
    pub fn new(settings: ReportSettings) -> CmpResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    pub fn compare(&self, a: &MetricTable, b: &MetricTable) -> CmpResult<Comparison> {
        let policy = self.settings.tie_policy;

        let mut records: Vec<MetricRecord> = a
            .iter()
            .filter_map(|(id, value_a)| {
                b.get(id).map(|value_b| MetricRecord {
                    id: id.to_string(),
                    value_a,
                    value_b,
                    winner: Winner::decide(value_a, value_b, policy),
                })
            })
            .collect();
        records.sort_by(|x, y| x.id.cmp(&y.id));

        let mut mismatches: Vec<Mismatch> = a
            .ids()
            .filter(|id| !b.contains(id))
            .map(|id| Mismatch {
                id: id.to_string(),
                missing_from: Side::B,
            })
            .chain(b.ids().filter(|id| !a.contains(id)).map(|id| Mismatch {
                id: id.to_string(),
                missing_from: Side::A,
            }))
            .collect();
        mismatches.sort_by(|x, y| x.id.cmp(&y.id));

        for m in &mismatches {
            let (present, missing) = match m.missing_from {
                Side::A => (self.settings.method_b, self.settings.method_a),
                Side::B => (self.settings.method_a, self.settings.method_b),
            };
            warn!(
                "Skipping '{}': present for {} but missing for {}",
                m.id, present, missing
            );
        }

        let mut comparison = Comparison::from_records(self.settings.clone(), None, records)?;
        comparison.mismatches = mismatches;

        debug!(
            "Compared {} structures ({} better: {}, {} better: {}, ties: {})",
            comparison.summary.total,
            self.settings.method_a,
            comparison.summary.a_better,
            self.settings.method_b,
            comparison.summary.b_better,
            comparison.summary.ties
        );

        Ok(comparison)
    }
}
