use crate::error::{CmpResult, CompareError};
use crate::method::{Method, MetricKind, TiePolicy};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Method whose values come from the first table
    #[arg(long, default_value = "quantum")]
    pub method_a: Method,

    /// Baseline method whose values come from the second table
    #[arg(long, default_value = "af2")]
    pub method_b: Method,

    #[arg(long, default_value = "rmsd")]
    pub metric: MetricKind,

    #[arg(long, default_value = "favor-a")]
    pub tie_policy: TiePolicy,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            method_a: Method::Quantum,
            method_b: Method::Af2,
            metric: MetricKind::Rmsd,
            tie_policy: TiePolicy::FavorA,
        }
    }
}

impl ReportSettings {
    /// Reads a possibly partial settings file. Call `validate` after
    /// `merge_from_cli`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CmpResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields that were explicitly given on the command line.
    pub fn merge_from_cli(&mut self, cli: &ReportSettings, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(method_a, "method_a");
        update_if_present!(method_b, "method_b");
        update_if_present!(metric, "metric");
        update_if_present!(tie_policy, "tie_policy");
    }

    pub fn validate(&self) -> CmpResult<()> {
        if self.method_a == self.method_b {
            return Err(CompareError::Config(format!(
                "method_a and method_b must differ (both are '{}')",
                self.method_a
            )));
        }
        Ok(())
    }
}
