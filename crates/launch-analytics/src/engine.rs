//! Filter-aggregate engine: one full recompute per selection.

use launch_domain::{DashboardSnapshot, FilterSelection, SelectorOptions};

use crate::error::Result;
use crate::queries;
use crate::table::{DatasetInfo, LaunchTable};

/// Default number of payload histogram buckets.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Recomputes every dashboard artifact from the immutable base table.
#[derive(Debug, Clone)]
pub struct DashboardEngine {
    table: LaunchTable,
    histogram_bins: usize,
}

impl DashboardEngine {
    /// Create an engine using the default histogram bucket count.
    pub fn new(table: LaunchTable) -> Self {
        Self {
            table,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }

    /// Override the default histogram bucket count.
    #[must_use]
    pub const fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// The base table.
    pub const fn table(&self) -> &LaunchTable {
        &self.table
    }

    /// Bucket count used when a request does not name one.
    pub const fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    /// Values each selector offers besides "all".
    pub fn selector_options(&self) -> SelectorOptions {
        self.table.selector_options()
    }

    /// Row counts of the base table.
    pub fn dataset_info(&self) -> DatasetInfo {
        self.table.info()
    }

    /// Filter the base table and derive every KPI and chart from the result.
    ///
    /// All artifacts come from the same filtered view and are returned
    /// together. An empty view is not an error; a zero bucket count is.
    pub fn recompute(
        &self,
        selection: &FilterSelection,
        bins: Option<usize>,
    ) -> Result<DashboardSnapshot> {
        let view = self.table.filter(selection);

        tracing::debug!(
            booster_version = ?selection.booster_version,
            launch_site = ?selection.launch_site,
            orbit = ?selection.orbit,
            matched = view.len(),
            total = self.table.len(),
            "Recomputing dashboard"
        );

        let payload_histogram =
            queries::payload_histogram(&view, bins.unwrap_or(self.histogram_bins))?;

        Ok(DashboardSnapshot {
            selection: selection.clone(),
            kpis: queries::kpis(&view),
            outcome_chart: queries::outcome_distribution(&view),
            payload_scatter: queries::payload_scatter(&view),
            site_scatter: queries::site_scatter(&view),
            launch_trend: queries::launch_trend(&view),
            payload_histogram,
        })
    }
}
