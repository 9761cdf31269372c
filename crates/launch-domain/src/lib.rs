//! # Launch Dashboard - Domain Model
//!
//! Core records, filter selections and derived dashboard artifacts for the
//! launch dashboard. These types are the single source of truth across
//! all layers: analytics, API, and the rendering page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORDS
// =============================================================================

/// One launch event from the base table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: i64,
    /// `None` when the source date could not be parsed
    pub date: Option<NaiveDate>,
    pub booster_version: String,
    pub payload_mass_kg: Option<f64>,
    pub orbit: String,
    pub launch_site: String,
    pub outcome: String,
    /// 1 = success, anything else = failure
    pub class: i64,
}

impl LaunchRecord {
    #[must_use]
    pub fn landing_outcome(&self) -> LandingOutcome {
        LandingOutcome::from_class(self.class)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.class == 1
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Success/failure tag used to color scatter points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingOutcome {
    Success,
    Failure,
}

impl LandingOutcome {
    /// Numeric check against 1; a class of 10 or 21 is a failure.
    #[must_use]
    pub const fn from_class(class: i64) -> Self {
        if class == 1 {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Kind of chart a rendering surface should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    Pie,
    Scatter,
    Line,
    Histogram,
}

/// Categorical attribute a selector filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterField {
    BoosterVersion,
    LaunchSite,
    Orbit,
}

impl FilterField {
    #[must_use]
    pub fn value_of<'a>(&self, record: &'a LaunchRecord) -> &'a str {
        match self {
            Self::BoosterVersion => &record.booster_version,
            Self::LaunchSite => &record.launch_site,
            Self::Orbit => &record.orbit,
        }
    }
}

// =============================================================================
// FILTER TYPES
// =============================================================================

/// Up to three equality predicates, applied conjunctively.
///
/// An unset field matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub booster_version: Option<String>,
    pub launch_site: Option<String>,
    pub orbit: Option<String>,
}

impl FilterSelection {
    /// Selection with every field unset
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selection, treating blank values as unset.
    #[must_use]
    pub fn new(
        booster_version: Option<String>,
        launch_site: Option<String>,
        orbit: Option<String>,
    ) -> Self {
        Self {
            booster_version: normalize(booster_version),
            launch_site: normalize(launch_site),
            orbit: normalize(orbit),
        }
    }

    #[must_use]
    pub fn with_booster_version(mut self, value: impl Into<String>) -> Self {
        self.booster_version = normalize(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_launch_site(mut self, value: impl Into<String>) -> Self {
        self.launch_site = normalize(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_orbit(mut self, value: impl Into<String>) -> Self {
        self.orbit = normalize(Some(value.into()));
        self
    }

    /// Value selected for a field, if any
    #[must_use]
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::BoosterVersion => self.booster_version.as_deref(),
            FilterField::LaunchSite => self.launch_site.as_deref(),
            FilterField::Orbit => self.orbit.as_deref(),
        }
    }

    /// True when no field is set (the initial dashboard state)
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.booster_version.is_none() && self.launch_site.is_none() && self.orbit.is_none()
    }

    /// Whether a record satisfies every set field
    #[must_use]
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        [
            FilterField::BoosterVersion,
            FilterField::LaunchSite,
            FilterField::Orbit,
        ]
        .into_iter()
        .all(|field| {
            self.get(field)
                .is_none_or(|wanted| field.value_of(record) == wanted)
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Distinct category values offered by each selector, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOptions {
    pub booster_versions: Vec<String>,
    pub launch_sites: Vec<String>,
    pub orbits: Vec<String>,
}

// =============================================================================
// KPI TYPES
// =============================================================================

/// Scalar summaries of a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_launches: usize,
    pub successful_launches: usize,
    /// 0-100, defined as 0 for an empty view
    pub success_rate_pct: f64,
    /// `None` when no record in the view has a payload mass
    pub avg_payload_kg: Option<f64>,
}

impl Kpis {
    #[must_use]
    pub fn total_launches_label(&self) -> String {
        format!("Total Launches: {}", self.total_launches)
    }

    #[must_use]
    pub fn success_rate_label(&self) -> String {
        format!("Success Rate: {:.1}%", self.success_rate_pct)
    }

    #[must_use]
    pub fn avg_payload_label(&self) -> String {
        self.avg_payload_kg
            .map_or_else(|| "N/A".to_string(), |p| format!("Avg Payload: {p:.1} kg"))
    }
}

// =============================================================================
// CHART ARTIFACTS
// =============================================================================

/// Chart type plus the labels a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartMeta {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

/// Number of launches sharing one outcome string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSlice {
    pub outcome: String,
    pub count: usize,
}

/// Outcome pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeChart {
    pub meta: ChartMeta,
    pub slices: Vec<OutcomeSlice>,
}

/// Payload mass plotted against flight number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadPoint {
    pub flight_number: i64,
    pub payload_mass_kg: Option<f64>,
    pub booster_version: String,
    pub landing_outcome: LandingOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadScatterChart {
    pub meta: ChartMeta,
    pub points: Vec<PayloadPoint>,
}

/// Launch site plotted against flight number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePoint {
    pub flight_number: i64,
    pub launch_site: String,
    pub landing_outcome: LandingOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteScatterChart {
    pub meta: ChartMeta,
    pub points: Vec<SitePoint>,
}

/// Launch count for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub launches: usize,
}

/// Launches-per-year line chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTrendChart {
    pub meta: ChartMeta,
    pub points: Vec<YearCount>,
}

/// One equal-width payload bucket; `upper` is exclusive except for the last bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadHistogramChart {
    pub meta: ChartMeta,
    pub bin_count: usize,
    pub buckets: Vec<HistogramBucket>,
}

/// Everything the dashboard renders for one selection.
///
/// Produced in a single pass so the page never shows a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selection: FilterSelection,
    pub kpis: Kpis,
    pub outcome_chart: OutcomeChart,
    pub payload_scatter: PayloadScatterChart,
    pub site_scatter: SiteScatterChart,
    pub launch_trend: LaunchTrendChart,
    pub payload_histogram: PayloadHistogramChart,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid histogram bin count: {0} (must be at least 1)")]
    InvalidBinCount(usize),
}
