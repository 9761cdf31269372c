//! # API Configuration
//!
//! Environment-based configuration for the dashboard server. Every variable
//! is optional; the defaults serve the public dataset on localhost.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use launch_analytics::DEFAULT_HISTOGRAM_BINS;

/// Published SpaceX launch dataset
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/dataset_part_2.csv";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub server_addr: SocketAddr,

    /// Where the launch CSV comes from
    pub dataset: DatasetLocation,

    /// Histogram bucket count when a query names none
    pub histogram_bins: usize,

    /// Logging level
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

/// Launch CSV location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    Url(String),
    Path(PathBuf),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => bail!("Unknown LOG_FORMAT '{other}' (expected json or pretty)"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_addr = var("SERVER_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8050".to_string())
            .parse::<SocketAddr>()
            .context("Invalid SERVER_ADDR")?;

        let dataset = match var("DATASET_PATH") {
            Some(path) => DatasetLocation::Path(PathBuf::from(path)),
            None => DatasetLocation::Url(
                var("DATASET_URL").unwrap_or_else(|| DEFAULT_DATASET_URL.to_string()),
            ),
        };

        let histogram_bins = match var("HISTOGRAM_BINS") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid HISTOGRAM_BINS '{v}'"))?,
            None => DEFAULT_HISTOGRAM_BINS,
        };
        if histogram_bins == 0 {
            bail!("HISTOGRAM_BINS must be at least 1");
        }

        let log_format = var("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            server_addr,
            dataset,
            histogram_bins,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format,
        })
    }
}
