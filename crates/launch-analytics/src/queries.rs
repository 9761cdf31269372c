//! Aggregations over a filtered view.
//!
//! Every function here is pure: it reads the borrowed records and builds a
//! fresh artifact. Nothing is cached between selections.

use chrono::Datelike;
use launch_domain::{
    ChartKind, ChartMeta, DomainError, HistogramBucket, Kpis, LaunchRecord, LaunchTrendChart,
    OutcomeChart, OutcomeSlice, PayloadHistogramChart, PayloadPoint, PayloadScatterChart,
    SiteScatterChart, SitePoint, YearCount,
};
use statrs::statistics::Statistics;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Launch count, success rate and average payload.
#[allow(clippy::cast_precision_loss)]
pub fn kpis(view: &[&LaunchRecord]) -> Kpis {
    let total_launches = view.len();
    let successful_launches = view.iter().filter(|r| r.is_success()).count();
    let success_rate_pct = if total_launches > 0 {
        successful_launches as f64 / total_launches as f64 * 100.0
    } else {
        0.0
    };

    let payloads = present_payloads(view);
    let avg_payload_kg = if payloads.is_empty() {
        None
    } else {
        Some(Statistics::mean(payloads.iter()))
    };

    Kpis {
        total_launches,
        successful_launches,
        success_rate_pct,
        avg_payload_kg,
    }
}

/// Launches per outcome string, most frequent first.
///
/// Ties keep the order in which outcomes first appear.
pub fn outcome_distribution(view: &[&LaunchRecord]) -> OutcomeChart {
    let mut slices: Vec<OutcomeSlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in view {
        match index.entry(record.outcome.as_str()) {
            Entry::Occupied(slot) => slices[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(slices.len());
                slices.push(OutcomeSlice {
                    outcome: record.outcome.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    OutcomeChart {
        meta: ChartMeta::new(ChartKind::Pie, "Launch Outcomes", "Outcome", "Launches"),
        slices,
    }
}

/// Payload mass against flight number, one point per launch.
pub fn payload_scatter(view: &[&LaunchRecord]) -> PayloadScatterChart {
    let points = view
        .iter()
        .map(|r| PayloadPoint {
            flight_number: r.flight_number,
            payload_mass_kg: r.payload_mass_kg,
            booster_version: r.booster_version.clone(),
            landing_outcome: r.landing_outcome(),
        })
        .collect();

    PayloadScatterChart {
        meta: ChartMeta::new(
            ChartKind::Scatter,
            "Payload Mass vs Flight Number",
            "FlightNumber",
            "PayloadMass",
        ),
        points,
    }
}

/// Launch site against flight number, one point per launch.
pub fn site_scatter(view: &[&LaunchRecord]) -> SiteScatterChart {
    let points = view
        .iter()
        .map(|r| SitePoint {
            flight_number: r.flight_number,
            launch_site: r.launch_site.clone(),
            landing_outcome: r.landing_outcome(),
        })
        .collect();

    SiteScatterChart {
        meta: ChartMeta::new(
            ChartKind::Scatter,
            "Launch Site vs Flight Number",
            "FlightNumber",
            "LaunchSite",
        ),
        points,
    }
}

/// Launches per calendar year, ascending. Undated launches are skipped.
pub fn launch_trend(view: &[&LaunchRecord]) -> LaunchTrendChart {
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for date in view.iter().filter_map(|r| r.date) {
        *per_year.entry(date.year()).or_default() += 1;
    }

    LaunchTrendChart {
        meta: ChartMeta::new(ChartKind::Line, "Launches Over Time", "Year", "Launches"),
        points: per_year
            .into_iter()
            .map(|(year, launches)| YearCount { year, launches })
            .collect(),
    }
}

/// Equal-width payload histogram over the view's payload range.
///
/// The last bucket includes the maximum. A single distinct payload widens
/// the range by 1 kg so the bucket width stays positive.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn payload_histogram(
    view: &[&LaunchRecord],
    bin_count: usize,
) -> Result<PayloadHistogramChart, DomainError> {
    if bin_count == 0 {
        return Err(DomainError::InvalidBinCount(bin_count));
    }

    let meta = ChartMeta::new(
        ChartKind::Histogram,
        "Payload Mass Distribution",
        "PayloadMass",
        "count",
    );

    let payloads = present_payloads(view);
    if payloads.is_empty() {
        return Ok(PayloadHistogramChart {
            meta,
            bin_count,
            buckets: Vec::new(),
        });
    }

    let min = Statistics::min(payloads.iter());
    let mut max = Statistics::max(payloads.iter());
    if min == max {
        max = min + 1.0;
    }
    let width = (max - min) / bin_count as f64;

    let mut buckets: Vec<HistogramBucket> = (0..bin_count)
        .map(|i| HistogramBucket {
            lower: min + i as f64 * width,
            upper: if i == bin_count - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for payload in payloads {
        let idx = if payload >= max {
            bin_count - 1
        } else {
            (((payload - min) / width).floor() as usize).min(bin_count - 1)
        };
        buckets[idx].count += 1;
    }

    Ok(PayloadHistogramChart {
        meta,
        bin_count,
        buckets,
    })
}

fn present_payloads(view: &[&LaunchRecord]) -> Vec<f64> {
    view.iter().filter_map(|r| r.payload_mass_kg).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{hundred_launches, record};
    use launch_domain::LandingOutcome;

    fn view(records: &[LaunchRecord]) -> Vec<&LaunchRecord> {
        records.iter().collect()
    }

    #[test]
    fn test_success_rate_seven_of_ten() {
        let records: Vec<_> = (1..=10)
            .map(|n| record(n, "F9", "S", "LEO", Some(1000.0), Some(2015), "x", i64::from(n <= 7)))
            .collect();

        let k = kpis(&view(&records));
        assert_eq!(k.total_launches, 10);
        assert_eq!(k.successful_launches, 7);
        assert!((k.success_rate_pct - 70.0).abs() < 1e-9);
        assert_eq!(k.success_rate_label(), "Success Rate: 70.0%");
    }

    #[test]
    fn test_empty_view_kpis() {
        let k = kpis(&[]);
        assert_eq!(k.total_launches, 0);
        assert_eq!(k.success_rate_pct, 0.0);
        assert_eq!(k.avg_payload_kg, None);
    }

    #[test]
    fn test_average_ignores_missing_payloads() {
        let records = vec![
            record(1, "F9", "S", "LEO", Some(1000.0), None, "x", 1),
            record(2, "F9", "S", "LEO", None, None, "x", 1),
            record(3, "F9", "S", "LEO", Some(3000.0), None, "x", 0),
        ];
        assert_eq!(kpis(&view(&records)).avg_payload_kg, Some(2000.0));
    }

    #[test]
    fn test_average_not_available_when_all_missing() {
        let records = vec![
            record(1, "F9", "S", "LEO", None, None, "x", 1),
            record(2, "F9", "S", "LEO", None, None, "x", 0),
        ];
        let k = kpis(&view(&records));
        assert_eq!(k.avg_payload_kg, None);
        assert_eq!(k.avg_payload_label(), "N/A");
    }

    #[test]
    fn test_class_ten_is_not_success() {
        let records = vec![record(1, "F9", "S", "LEO", None, None, "x", 10)];
        let k = kpis(&view(&records));
        assert_eq!(k.successful_launches, 0);
        assert_eq!(records[0].landing_outcome(), LandingOutcome::Failure);
    }

    #[test]
    fn test_outcome_distribution_sums_to_total() {
        let records = hundred_launches();
        let chart = outcome_distribution(&view(&records));
        let sum: usize = chart.slices.iter().map(|s| s.count).sum();
        assert_eq!(sum, 100);
        assert_eq!(chart.meta.kind, ChartKind::Pie);
    }

    #[test]
    fn test_outcome_distribution_order() {
        let records = vec![
            record(1, "F9", "S", "LEO", None, None, "None None", 0),
            record(2, "F9", "S", "LEO", None, None, "True ASDS", 1),
            record(3, "F9", "S", "LEO", None, None, "True ASDS", 1),
            record(4, "F9", "S", "LEO", None, None, "False Ocean", 0),
        ];
        let chart = outcome_distribution(&view(&records));
        let names: Vec<_> = chart.slices.iter().map(|s| s.outcome.as_str()).collect();
        assert_eq!(names, vec!["True ASDS", "None None", "False Ocean"]);
    }

    #[test]
    fn test_scatter_keeps_records_without_payload() {
        let records = vec![
            record(1, "F9 v1.0", "S", "LEO", None, None, "x", 1),
            record(2, "F9 v1.0", "S", "LEO", Some(500.0), None, "x", 0),
        ];
        let chart = payload_scatter(&view(&records));
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].payload_mass_kg, None);
        assert_eq!(chart.points[0].landing_outcome, LandingOutcome::Success);
        assert_eq!(chart.points[1].landing_outcome, LandingOutcome::Failure);
        assert_eq!(chart.points[1].booster_version, "F9 v1.0");

        let sites = site_scatter(&view(&records));
        assert_eq!(sites.points.len(), 2);
    }

    #[test]
    fn test_trend_excludes_undated_launches() {
        let records = hundred_launches();
        let undated = records.iter().filter(|r| r.date.is_none()).count();
        let chart = launch_trend(&view(&records));

        let sum: usize = chart.points.iter().map(|p| p.launches).sum();
        assert_eq!(sum, records.len() - undated);
        assert!(chart.points.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_histogram_buckets() {
        let records: Vec<_> = [0.0, 10.0, 25.0, 50.0, 99.0, 100.0]
            .into_iter()
            .enumerate()
            .map(|(i, p)| record(i as i64, "F9", "S", "LEO", Some(p), None, "x", 0))
            .chain(std::iter::once(record(9, "F9", "S", "LEO", None, None, "x", 0)))
            .collect();

        let chart = payload_histogram(&view(&records), 4).unwrap();
        assert_eq!(chart.buckets.len(), 4);
        assert_eq!(chart.buckets[0].lower, 0.0);
        assert_eq!(chart.buckets[3].upper, 100.0);

        let counts: Vec<_> = chart.buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 2]);
    }

    #[test]
    fn test_histogram_single_value() {
        let records = vec![
            record(1, "F9", "S", "LEO", Some(500.0), None, "x", 0),
            record(2, "F9", "S", "LEO", Some(500.0), None, "x", 0),
        ];
        let chart = payload_histogram(&view(&records), 20).unwrap();
        assert_eq!(chart.buckets.len(), 20);
        assert_eq!(chart.buckets[0].count, 2);
        assert_eq!(chart.buckets[19].upper, 501.0);
    }

    #[test]
    fn test_histogram_empty_and_invalid() {
        let chart = payload_histogram(&[], 20).unwrap();
        assert!(chart.buckets.is_empty());
        assert_eq!(chart.bin_count, 20);

        assert!(matches!(
            payload_histogram(&[], 0),
            Err(DomainError::InvalidBinCount(0))
        ));
    }
}
