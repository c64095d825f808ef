//! Location store and resolver
//!
//! Loads the city/state/coordinate dataset once at startup and serves
//! state→city listings and case-insensitive coordinate lookups. The store is
//! immutable after loading and safe to share across handlers.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use shared::{GpsCoordinates, LocationRecord};

use crate::error::{AppError, AppResult};

pub const CITY_COLUMN: &str = "name_of_city";
pub const STATE_COLUMN: &str = "state_name";
pub const LOCATION_COLUMN: &str = "location";

/// In-memory table of location records.
///
/// Records are deduplicated on (city, state) and sorted by (state, city) at
/// load time, which makes first-match-wins lookups and state/city listings
/// deterministic.
#[derive(Debug, Clone)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
}

impl LocationStore {
    /// Load the store from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the store from any CSV source.
    ///
    /// Requires the `name_of_city`, `state_name`, and `location` columns;
    /// a missing column is a data-contract violation and fails the load.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for required in [CITY_COLUMN, STATE_COLUMN, LOCATION_COLUMN] {
            if !headers.iter().any(|header| header == required) {
                return Err(AppError::MissingColumn(required.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<LocationRecord>() {
            records.push(row?);
        }
        Ok(Self::from_records(records))
    }

    /// Build the store from already-parsed records.
    pub fn from_records(mut records: Vec<LocationRecord>) -> Self {
        records.sort_by(|a, b| {
            (a.state.as_str(), a.city.as_str()).cmp(&(b.state.as_str(), b.city.as_str()))
        });
        records.dedup_by(|a, b| a.city == b.city && a.state == b.state);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// States in alphabetical order.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = Vec::new();
        for record in &self.records {
            if states.last() != Some(&record.state) {
                states.push(record.state.clone());
            }
        }
        states
    }

    /// Unique cities under a state, or `None` for an unknown state.
    pub fn cities_in_state(&self, state_name: &str) -> Option<Vec<String>> {
        let cities: Vec<String> = self
            .records
            .iter()
            .filter(|record| record.state == state_name)
            .map(|record| record.city.clone())
            .collect();
        if cities.is_empty() {
            None
        } else {
            Some(cities)
        }
    }

    /// Mapping from state name to the unique cities under it.
    ///
    /// Each city appears exactly once per state regardless of duplicates in
    /// the source data.
    pub fn state_city_index(&self) -> BTreeMap<String, Vec<String>> {
        let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in &self.records {
            index
                .entry(record.state.clone())
                .or_default()
                .push(record.city.clone());
        }
        index
    }

    /// Resolve a city name to coordinates.
    ///
    /// The match is case-insensitive and exact; with the load-time sort, a
    /// city name that exists in several states resolves to the record of the
    /// alphabetically first state. A record whose coordinate string does not
    /// parse as two floats logs a warning and resolves to `None` — absence is
    /// an expected result here, never an error.
    pub fn resolve_coordinates(&self, city_name: &str) -> Option<GpsCoordinates> {
        let query = city_name.to_lowercase();
        let record = self
            .records
            .iter()
            .find(|record| record.city.to_lowercase() == query)?;

        match parse_coordinates(&record.location) {
            Some(coordinates) => Some(coordinates),
            None => {
                tracing::warn!(
                    city = %record.city,
                    location = %record.location,
                    "could not parse latitude/longitude from location string"
                );
                None
            }
        }
    }
}

/// Parse a `"<lat>, <lon>"` string into coordinates.
fn parse_coordinates(raw: &str) -> Option<GpsCoordinates> {
    let (latitude, longitude) = raw.split_once(',')?;
    let latitude: f64 = latitude.trim().parse().ok()?;
    let longitude: f64 = longitude.trim().parse().ok()?;
    Some(GpsCoordinates::new(latitude, longitude))
}
