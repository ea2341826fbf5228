pub mod loader;

pub use self::loader::{load_table, load_table_from_reader};

use crate::error::{CmpResult, CompareError};
use std::collections::HashMap;

/// Per-structure metric values for a single method.
///
/// Identifiers are unique; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, rejecting non-finite values and identifiers that are
    /// already present. `line` is only used for the error message.
    pub fn insert_at(&mut self, id: impl Into<String>, value: f64, line: u64) -> CmpResult<()> {
        let id = id.into();
        if !value.is_finite() {
            return Err(CompareError::parse(
                line,
                format!("non-finite metric value '{}' for '{}'", value, id),
            ));
        }
        if self.index.contains_key(&id) {
            return Err(CompareError::DuplicateIdentifier { id, line });
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, value));
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> CmpResult<()> {
        let line = self.entries.len() as u64 + 1;
        self.insert_at(id, value, line)
    }

    pub fn try_from_pairs<I, S>(pairs: I) -> CmpResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (id, value) in pairs {
            table.insert(id, value)?;
        }
        Ok(table)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), *v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let t = MetricTable::try_from_pairs([("1yc4", 4.095), ("1e2k", 2.322)]).unwrap();
        let ids: Vec<_> = t.ids().collect();
        assert_eq!(ids, vec!["1yc4", "1e2k"]);
        assert_eq!(t.get("1e2k"), Some(2.322));
        assert!(!t.contains("9xyz"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut t = MetricTable::new();
        assert!(t.insert("1e2k", f64::NAN).is_err());
        assert!(t.insert("1e2k", f64::INFINITY).is_err());
        assert!(t.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = MetricTable::try_from_pairs([("1e2k", 1.0), ("1e2k", 2.0)]).unwrap_err();
        match err {
            CompareError::DuplicateIdentifier { id, line } => {
                assert_eq!(id, "1e2k");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
