use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Prediction technique whose per-structure metric is being ranked.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Quantum,
    Af2,
    Af3,
}

/// The scalar being compared. Lower is better for every kind.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Rmsd,
    Affinity,
}

impl MetricKind {
    /// Noun used in the report header line.
    pub fn header_noun(&self) -> &'static str {
        match self {
            Self::Rmsd => "RMSD",
            Self::Affinity => "affinity",
        }
    }

    /// File name used for written comparison reports.
    pub fn report_file_name(&self) -> String {
        format!("{}_compare.txt", self)
    }
}

/// What happens when both methods report the same value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Equal values count as a win for method A.
    #[default]
    FavorA,
    /// Equal values are reported as `better=tie` and counted separately.
    Separate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_method_names_round_trip() {
        for m in Method::iter() {
            assert_eq!(Method::from_str(&m.to_string()).unwrap(), m);
        }
        assert_eq!(Method::Af3.to_string(), "af3");
        assert_eq!(Method::from_str("AF2").unwrap(), Method::Af2);
    }

    #[test]
    fn test_tie_policy_names() {
        assert_eq!(TiePolicy::FavorA.to_string(), "favor-a");
        assert_eq!(TiePolicy::from_str("separate").unwrap(), TiePolicy::Separate);
    }

    #[test]
    fn test_metric_file_names() {
        assert_eq!(MetricKind::Rmsd.report_file_name(), "rmsd_compare.txt");
        assert_eq!(MetricKind::Affinity.header_noun(), "affinity");
    }
}
