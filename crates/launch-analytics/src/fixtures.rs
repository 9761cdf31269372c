//! Shared test data.

use chrono::NaiveDate;
use launch_domain::LaunchRecord;

/// Six rows in the dataset's column layout; row 5 has no payload and a bad
/// date, row 6 writes its class as a float and its date as a datetime.
pub const SAMPLE_CSV: &str = "\
FlightNumber,Date,BoosterVersion,PayloadMass,Orbit,LaunchSite,Outcome,Flights,Class
1,2010-06-04,Falcon 9,6104.959412,LEO,CCAFS SLC 40,None None,1,0
2,2012-05-22,Falcon 9,525,LEO,CCAFS SLC 40,None None,1,0
3,2013-03-01,Falcon 9,677,ISS,CCAFS SLC 40,None None,1,0
4,2013-09-29,Falcon 9,500,PO,VAFB SLC 4E,False Ocean,1,0
5,not-a-date,Falcon 9,,GTO,CCAFS SLC 40,None None,1,0
6,2017-02-19 00:00:00,Falcon 9,2490,ISS,KSC LC 39A,True RTLS,1,1.0
";

/// Build a record with the fields the dashboard filters and aggregates on
pub fn record(
    flight_number: i64,
    booster: &str,
    site: &str,
    orbit: &str,
    payload: Option<f64>,
    year: Option<i32>,
    outcome: &str,
    class: i64,
) -> LaunchRecord {
    LaunchRecord {
        flight_number,
        date: year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 15)),
        booster_version: booster.to_string(),
        payload_mass_kg: payload,
        orbit: orbit.to_string(),
        launch_site: site.to_string(),
        outcome: outcome.to_string(),
        class,
    }
}

/// 100 launches: 60 on "F9 v1.0", 40 on "F9 v1.1".
///
/// Every 5th launch lacks a payload, every 7th lacks a date, every other
/// launch succeeds.
pub fn hundred_launches() -> Vec<LaunchRecord> {
    (1..=100)
        .map(|n| {
            let booster = if n <= 60 { "F9 v1.0" } else { "F9 v1.1" };
            let site = match n % 3 {
                0 => "CCAFS SLC 40",
                1 => "KSC LC 39A",
                _ => "VAFB SLC 4E",
            };
            let orbit = if n % 4 == 0 { "GTO" } else { "LEO" };
            let payload = (n % 5 != 0).then(|| f64::from(u8::try_from(n).unwrap_or(0)) * 100.0);
            let year = (n % 7 != 0).then(|| 2010 + i32::try_from(n % 10).unwrap_or(0));
            let outcome = if n % 2 == 0 { "True ASDS" } else { "False Ocean" };
            let class = if n % 2 == 0 { 1 } else { 0 };
            record(n, booster, site, orbit, payload, year, outcome, class)
        })
        .collect()
}
