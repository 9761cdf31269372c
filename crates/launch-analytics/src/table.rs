//! Immutable base table of launch records.

use launch_domain::{FilterField, FilterSelection, LaunchRecord, SelectorOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// The full dataset, loaded once and shared read-only.
///
/// Cloning is cheap: clones share the same records.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Arc<[LaunchRecord]>,
}

/// Summary of the loaded base table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Total records
    pub row_count: usize,
    /// Records whose date could not be parsed
    pub undated_rows: usize,
    /// Records without a payload mass
    pub missing_payload_rows: usize,
}

impl LaunchTable {
    /// Wrap parsed records as a base table
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching every set field of the selection.
    ///
    /// The view borrows from the table and preserves file order.
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&LaunchRecord> {
        self.records
            .iter()
            .filter(|record| selection.matches(record))
            .collect()
    }

    /// Distinct values for each selector, in order of first appearance
    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            booster_versions: self.distinct(FilterField::BoosterVersion),
            launch_sites: self.distinct(FilterField::LaunchSite),
            orbits: self.distinct(FilterField::Orbit),
        }
    }

    fn distinct(&self, field: FilterField) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| field.value_of(record))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    /// Row counts describing the loaded data
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            row_count: self.len(),
            undated_rows: self.records.iter().filter(|r| r.date.is_none()).count(),
            missing_payload_rows: self
                .records
                .iter()
                .filter(|r| r.payload_mass_kg.is_none())
                .count(),
        }
    }
}
