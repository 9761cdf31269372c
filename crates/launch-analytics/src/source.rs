//! Dataset sources and CSV parsing for the launch base table.
//!
//! Sources are loaded exactly once at startup; any failure here is fatal
//! to the dashboard process.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use launch_domain::LaunchRecord;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AnalyticsError, Result};
use crate::table::LaunchTable;

const DATE_FORMATS: [&str; 1] = ["%Y-%m-%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// Whole-request limit for the dataset download
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Where the base table comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Fetch and parse the full dataset
    async fn load(&self) -> Result<LaunchTable>;
}

/// CSV dataset fetched with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCsvSource {
    /// Create a source for the given URL with the default fetch timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a source whose download fails once `timeout` elapses
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl DatasetSource for HttpCsvSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<LaunchTable> {
        tracing::debug!(url = %self.url, "Fetching dataset");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::FetchStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records = parse_launch_csv(body.as_ref())?;
        Ok(LaunchTable::new(records))
    }
}

/// CSV dataset read from the local filesystem
#[derive(Debug, Clone)]
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileCsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<LaunchTable> {
        let body = tokio::fs::read(&self.path).await?;
        let records = parse_launch_csv(body.as_slice())?;
        Ok(LaunchTable::new(records))
    }
}

// =============================================================================
// CSV PARSING
// =============================================================================

/// Positions of the required columns in the header row
struct ColumnIndex {
    booster_version: usize,
    launch_site: usize,
    orbit: usize,
    flight_number: usize,
    payload_mass: usize,
    outcome: usize,
    class: usize,
    date: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| AnalyticsError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            booster_version: find("BoosterVersion")?,
            launch_site: find("LaunchSite")?,
            orbit: find("Orbit")?,
            flight_number: find("FlightNumber")?,
            payload_mass: find("PayloadMass")?,
            outcome: find("Outcome")?,
            class: find("Class")?,
            date: find("Date")?,
        })
    }

    fn record(&self, row: &StringRecord, row_number: usize) -> Result<LaunchRecord> {
        let field = |idx: usize| row.get(idx).unwrap_or_default();
        let required_int = |idx: usize, column: &str| {
            parse_integer(field(idx)).ok_or_else(|| AnalyticsError::InvalidValue {
                row: row_number,
                column: column.to_string(),
                value: field(idx).to_string(),
            })
        };

        Ok(LaunchRecord {
            flight_number: required_int(self.flight_number, "FlightNumber")?,
            date: parse_date(field(self.date)),
            booster_version: field(self.booster_version).to_string(),
            payload_mass_kg: parse_payload(field(self.payload_mass)),
            orbit: field(self.orbit).to_string(),
            launch_site: field(self.launch_site).to_string(),
            outcome: field(self.outcome).to_string(),
            class: required_int(self.class, "Class")?,
        })
    }
}

/// Parse a launch CSV with a header row into records.
///
/// Missing required columns and unparseable `FlightNumber`/`Class` values
/// are errors. Missing payloads and dates are kept as `None`, including
/// fields cut off by a short row.
pub fn parse_launch_csv<R: Read>(reader: R) -> Result<Vec<LaunchRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        records.push(columns.record(&row?, i + 1)?);
    }

    tracing::debug!(rows = records.len(), "Parsed launch CSV");
    Ok(records)
}

/// Accepts `"1"` as well as whole floats such as `"1.0"`.
#[allow(clippy::cast_possible_truncation)]
fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_payload(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, US_DATE_FORMAT).ok())
}
