//! # GraphQL Output Types
//!
//! Object type definitions for GraphQL responses. Each mirrors a domain
//! artifact and is built from it with `From`.

use async_graphql::{Object, SimpleObject};

use super::enums::*;
use launch_analytics::DatasetInfo as AnalyticsDatasetInfo;
use launch_domain as domain;

// =============================================================================
// SELECTORS
// =============================================================================

/// Values each selector offers in addition to "all"
#[derive(Debug, Clone, SimpleObject)]
pub struct SelectorOptions {
    /// Distinct booster versions, first-seen order
    pub booster_versions: Vec<String>,
    /// Distinct launch sites, first-seen order
    pub launch_sites: Vec<String>,
    /// Distinct orbits, first-seen order
    pub orbits: Vec<String>,
}

impl From<domain::SelectorOptions> for SelectorOptions {
    fn from(o: domain::SelectorOptions) -> Self {
        Self {
            booster_versions: o.booster_versions,
            launch_sites: o.launch_sites,
            orbits: o.orbits,
        }
    }
}

/// The selection a dashboard was computed for
#[derive(Debug, Clone, SimpleObject)]
pub struct AppliedSelection {
    pub booster_version: Option<String>,
    pub launch_site: Option<String>,
    pub orbit: Option<String>,
    /// True when no selector is set
    pub unfiltered: bool,
}

impl From<domain::FilterSelection> for AppliedSelection {
    fn from(s: domain::FilterSelection) -> Self {
        let unfiltered = s.is_unfiltered();
        Self {
            booster_version: s.booster_version,
            launch_site: s.launch_site,
            orbit: s.orbit,
            unfiltered,
        }
    }
}

/// Base table summary
#[derive(Debug, Clone, SimpleObject)]
pub struct DatasetInfo {
    /// Records loaded at startup
    pub row_count: usize,
    /// Records excluded from the yearly trend
    pub undated_rows: usize,
    /// Records excluded from payload average and histogram
    pub missing_payload_rows: usize,
    /// Histogram bucket count used when a query names none
    pub default_histogram_bins: usize,
}

impl DatasetInfo {
    pub fn new(info: AnalyticsDatasetInfo, default_histogram_bins: usize) -> Self {
        Self {
            row_count: info.row_count,
            undated_rows: info.undated_rows,
            missing_payload_rows: info.missing_payload_rows,
            default_histogram_bins,
        }
    }
}

// =============================================================================
// KPI TYPES
// =============================================================================

/// Scalar summaries of the filtered view
#[derive(Debug, Clone)]
pub struct Kpis(domain::Kpis);

#[Object]
impl Kpis {
    /// Launches in the filtered view
    async fn total_launches(&self) -> usize {
        self.0.total_launches
    }

    /// Launches with class 1
    async fn successful_launches(&self) -> usize {
        self.0.successful_launches
    }

    /// Success percentage (0-100), 0 for an empty view
    async fn success_rate_pct(&self) -> f64 {
        self.0.success_rate_pct
    }

    /// Mean payload mass in kg; null when no launch has a payload
    async fn avg_payload_kg(&self) -> Option<f64> {
        self.0.avg_payload_kg
    }

    /// "Total Launches: N"
    async fn total_launches_label(&self) -> String {
        self.0.total_launches_label()
    }

    /// "Success Rate: X.X%"
    async fn success_rate_label(&self) -> String {
        self.0.success_rate_label()
    }

    /// "Avg Payload: X.X kg" or "N/A"
    async fn avg_payload_label(&self) -> String {
        self.0.avg_payload_label()
    }
}

impl From<domain::Kpis> for Kpis {
    fn from(k: domain::Kpis) -> Self {
        Self(k)
    }
}

// =============================================================================
// CHART TYPES
// =============================================================================

/// Chart type and labels
#[derive(Debug, Clone, SimpleObject)]
pub struct ChartMeta {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl From<domain::ChartMeta> for ChartMeta {
    fn from(m: domain::ChartMeta) -> Self {
        Self {
            kind: m.kind.into(),
            title: m.title,
            x_label: m.x_label,
            y_label: m.y_label,
        }
    }
}

/// Launches sharing one outcome
#[derive(Debug, Clone, SimpleObject)]
pub struct OutcomeSlice {
    pub outcome: String,
    pub count: usize,
}

/// Outcome pie chart
#[derive(Debug, Clone, SimpleObject)]
pub struct OutcomeChart {
    pub meta: ChartMeta,
    pub slices: Vec<OutcomeSlice>,
}

impl From<domain::OutcomeChart> for OutcomeChart {
    fn from(c: domain::OutcomeChart) -> Self {
        Self {
            meta: c.meta.into(),
            slices: c
                .slices
                .into_iter()
                .map(|s| OutcomeSlice {
                    outcome: s.outcome,
                    count: s.count,
                })
                .collect(),
        }
    }
}

/// One launch on the payload scatter
#[derive(Debug, Clone, SimpleObject)]
pub struct PayloadPoint {
    pub flight_number: i64,
    /// Null when the launch has no recorded payload
    pub payload_mass_kg: Option<f64>,
    pub booster_version: String,
    pub landing_outcome: LandingOutcome,
}

/// Payload mass vs flight number
#[derive(Debug, Clone, SimpleObject)]
pub struct PayloadScatterChart {
    pub meta: ChartMeta,
    pub points: Vec<PayloadPoint>,
}

impl From<domain::PayloadScatterChart> for PayloadScatterChart {
    fn from(c: domain::PayloadScatterChart) -> Self {
        Self {
            meta: c.meta.into(),
            points: c
                .points
                .into_iter()
                .map(|p| PayloadPoint {
                    flight_number: p.flight_number,
                    payload_mass_kg: p.payload_mass_kg,
                    booster_version: p.booster_version,
                    landing_outcome: p.landing_outcome.into(),
                })
                .collect(),
        }
    }
}

/// One launch on the site scatter
#[derive(Debug, Clone, SimpleObject)]
pub struct SitePoint {
    pub flight_number: i64,
    pub launch_site: String,
    pub landing_outcome: LandingOutcome,
}

/// Launch site vs flight number
#[derive(Debug, Clone, SimpleObject)]
pub struct SiteScatterChart {
    pub meta: ChartMeta,
    pub points: Vec<SitePoint>,
}

impl From<domain::SiteScatterChart> for SiteScatterChart {
    fn from(c: domain::SiteScatterChart) -> Self {
        Self {
            meta: c.meta.into(),
            points: c
                .points
                .into_iter()
                .map(|p| SitePoint {
                    flight_number: p.flight_number,
                    launch_site: p.launch_site,
                    landing_outcome: p.landing_outcome.into(),
                })
                .collect(),
        }
    }
}

/// Launches in one calendar year
#[derive(Debug, Clone, SimpleObject)]
pub struct YearCount {
    pub year: i32,
    pub launches: usize,
}

/// Launches per year
#[derive(Debug, Clone, SimpleObject)]
pub struct LaunchTrendChart {
    pub meta: ChartMeta,
    pub points: Vec<YearCount>,
}

impl From<domain::LaunchTrendChart> for LaunchTrendChart {
    fn from(c: domain::LaunchTrendChart) -> Self {
        Self {
            meta: c.meta.into(),
            points: c
                .points
                .into_iter()
                .map(|p| YearCount {
                    year: p.year,
                    launches: p.launches,
                })
                .collect(),
        }
    }
}

/// Payload bucket `[lower, upper)`; the last bucket also includes `upper`
#[derive(Debug, Clone, SimpleObject)]
pub struct HistogramBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Payload mass distribution
#[derive(Debug, Clone, SimpleObject)]
pub struct PayloadHistogramChart {
    pub meta: ChartMeta,
    pub bin_count: usize,
    pub buckets: Vec<HistogramBucket>,
}

impl From<domain::PayloadHistogramChart> for PayloadHistogramChart {
    fn from(c: domain::PayloadHistogramChart) -> Self {
        Self {
            meta: c.meta.into(),
            bin_count: c.bin_count,
            buckets: c
                .buckets
                .into_iter()
                .map(|b| HistogramBucket {
                    lower: b.lower,
                    upper: b.upper,
                    count: b.count,
                })
                .collect(),
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Every KPI and chart for one selection, computed together
#[derive(Debug, Clone, SimpleObject)]
pub struct Dashboard {
    pub selection: AppliedSelection,
    pub kpis: Kpis,
    pub outcome_chart: OutcomeChart,
    pub payload_scatter: PayloadScatterChart,
    pub site_scatter: SiteScatterChart,
    pub launch_trend: LaunchTrendChart,
    pub payload_histogram: PayloadHistogramChart,
}

impl From<domain::DashboardSnapshot> for Dashboard {
    fn from(s: domain::DashboardSnapshot) -> Self {
        Self {
            selection: s.selection.into(),
            kpis: s.kpis.into(),
            outcome_chart: s.outcome_chart.into(),
            payload_scatter: s.payload_scatter.into(),
            site_scatter: s.site_scatter.into(),
            launch_trend: s.launch_trend.into(),
            payload_histogram: s.payload_histogram.into(),
        }
    }
}
