//! # GraphQL Enum Types
//!
//! Enum definitions for the GraphQL schema.

use async_graphql::Enum;
use launch_domain as domain;

/// Success/failure tag derived from a launch's class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[graphql(rename_items = "SCREAMING_SNAKE_CASE")]
pub enum LandingOutcome {
    /// Class equal to 1
    Success,
    /// Any other class
    Failure,
}

impl From<domain::LandingOutcome> for LandingOutcome {
    fn from(o: domain::LandingOutcome) -> Self {
        match o {
            domain::LandingOutcome::Success => Self::Success,
            domain::LandingOutcome::Failure => Self::Failure,
        }
    }
}

/// Chart type the page should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
#[graphql(rename_items = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    /// Share of a whole per category
    Pie,
    /// One marker per launch
    Scatter,
    /// Connected points over an ordered axis
    Line,
    /// Counts per equal-width bucket
    Histogram,
}

impl From<domain::ChartKind> for ChartKind {
    fn from(k: domain::ChartKind) -> Self {
        match k {
            domain::ChartKind::Pie => Self::Pie,
            domain::ChartKind::Scatter => Self::Scatter,
            domain::ChartKind::Line => Self::Line,
            domain::ChartKind::Histogram => Self::Histogram,
        }
    }
}
