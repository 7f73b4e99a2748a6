//! Route demand dataset (CSV)
//!
//! One row per route:
//!
//! ```text
//! Route Number,First Shift,Second Shift,Third Shift,Fourth Shift,Trips of first shift,Trips of Second shift,Trips of Third shift,Trips of Fourth shift
//! 1,120,340,210,90,2,3,2,1
//! ```
//!
//! The snake_case headers `route`, `demand_1`..`demand_4` and
//! `trips_1`..`trips_4` are accepted as well.

use busplan_core::{BusplanError, BusplanResult, Route};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RouteRecord {
    #[serde(rename = "Route Number", alias = "route")]
    route: String,
    #[serde(rename = "First Shift", alias = "demand_1")]
    demand_1: f64,
    #[serde(rename = "Second Shift", alias = "demand_2")]
    demand_2: f64,
    #[serde(rename = "Third Shift", alias = "demand_3")]
    demand_3: f64,
    #[serde(rename = "Fourth Shift", alias = "demand_4")]
    demand_4: f64,
    #[serde(rename = "Trips of first shift", alias = "trips_1")]
    trips_1: f64,
    #[serde(rename = "Trips of Second shift", alias = "trips_2")]
    trips_2: f64,
    #[serde(rename = "Trips of Third shift", alias = "trips_3")]
    trips_3: f64,
    #[serde(rename = "Trips of Fourth shift", alias = "trips_4")]
    trips_4: f64,
}

impl From<RouteRecord> for Route {
    fn from(r: RouteRecord) -> Self {
        Route::new(
            r.route,
            [r.demand_1, r.demand_2, r.demand_3, r.demand_4],
            [r.trips_1, r.trips_2, r.trips_3, r.trips_4],
        )
    }
}

/// Load routes from a CSV file, keeping at most `limit` rows in file order.
pub fn load_routes(path: impl AsRef<Path>, limit: Option<usize>) -> BusplanResult<Vec<Route>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_routes(file, limit)
        .map_err(|e| BusplanError::Parse(format!("{}: {}", path.display(), e)))
}

/// Read routes from any CSV source, keeping at most `limit` rows.
pub fn read_routes<R: Read>(reader: R, limit: Option<usize>) -> BusplanResult<Vec<Route>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut routes = Vec::new();
    for (idx, record) in csv_reader.deserialize::<RouteRecord>().enumerate() {
        if limit.is_some_and(|max| routes.len() >= max) {
            break;
        }
        // header is line 1
        let record =
            record.map_err(|e| BusplanError::Parse(format!("line {}: {}", idx + 2, e)))?;
        routes.push(Route::from(record));
    }

    Ok(routes)
}
