use crate::compare::{Comparison, MetricRecord};
use crate::error::{CmpResult, CompareError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

/// Structure size bucket from the group index (small, medium, large).
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
)]
pub enum SizeGroup {
    S,
    M,
    L,
}

/// Membership of structure identifiers in size groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    groups: BTreeMap<SizeGroup, BTreeSet<String>>,
}

impl GroupIndex {
    pub fn load<P: AsRef<Path>>(path: P) -> CmpResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let index = Self::from_str(&content)?;
        info!(
            "Loaded group index from {} ({} identifiers)",
            path.display(),
            index.len()
        );
        Ok(index)
    }

    pub fn insert(&mut self, group: SizeGroup, id: impl Into<String>) {
        self.groups.entry(group).or_default().insert(id.into());
    }

    /// First group (in S, M, L order) that lists `id`.
    pub fn group_of(&self, id: &str) -> Option<SizeGroup> {
        SizeGroup::iter().find(|g| self.groups.get(g).is_some_and(|ids| ids.contains(id)))
    }

    pub fn members(&self, group: SizeGroup) -> impl Iterator<Item = &str> {
        self.groups
            .get(&group)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for GroupIndex {
    type Err = CompareError;

    /// ```text
    /// [Group S]
    /// length_10:
    /// 1e2k   10
    /// [Group M]
    /// ...
    /// ```
    fn from_str(s: &str) -> CmpResult<Self> {
        let mut index = Self::default();
        let mut current = None;

        for (idx, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("[Group") {
                let name = rest
                    .trim_start()
                    .split(']')
                    .next()
                    .unwrap_or_default()
                    .trim();
                let group = SizeGroup::from_str(name).map_err(|_| {
                    CompareError::parse(idx as u64 + 1, format!("unknown size group '{}'", name))
                })?;
                current = Some(group);
                continue;
            }

            if line.starts_with("length_") {
                continue;
            }

            match (current, line.split_whitespace().next()) {
                (Some(group), Some(id)) => index.insert(group, id),
                (None, Some(id)) => debug!("Ignoring '{}' listed before any group header", id),
                _ => {}
            }
        }

        Ok(index)
    }
}

impl Comparison {
    /// Splits the records by size group. Each group keeps the record order
    /// and gets its own recounted summary; empty groups are left out.
    pub fn split_by_group(&self, index: &GroupIndex) -> BTreeMap<SizeGroup, Comparison> {
        let mut buckets: BTreeMap<SizeGroup, Vec<MetricRecord>> = BTreeMap::new();

        for record in &self.records {
            match index.group_of(&record.id) {
                Some(group) => buckets.entry(group).or_default().push(record.clone()),
                None => debug!("'{}' is not in any size group", record.id),
            }
        }

        buckets
            .into_iter()
            .filter_map(|(group, records)| {
                Comparison::from_records(self.settings.clone(), Some(group), records)
                    .ok()
                    .map(|c| (group, c))
            })
            .collect()
    }
}
