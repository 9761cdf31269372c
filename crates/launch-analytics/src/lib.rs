//! # Launch Analytics
//!
//! Dataset loading and the filter-aggregate engine behind the launch dashboard.
//! The base table is loaded once and shared read-only; every dashboard
//! request filters it and recomputes all artifacts from scratch.
//!
//! ## Features
//!
//! - CSV dataset sources over HTTP or from a local file
//! - Conjunctive equality filtering on booster version, launch site and orbit
//! - Launch count, success rate and average payload KPIs
//! - Outcome, scatter, yearly trend and payload histogram chart artifacts

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod engine;
pub mod error;
pub mod queries;
pub mod source;
pub mod table;

pub use engine::{DashboardEngine, DEFAULT_HISTOGRAM_BINS};
pub use error::AnalyticsError;
pub use source::{DatasetSource, FileCsvSource, HttpCsvSource, parse_launch_csv};
pub use table::{DatasetInfo, LaunchTable};

#[cfg(test)]
pub(crate) mod fixtures;
