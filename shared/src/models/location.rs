//! Location data models

use serde::{Deserialize, Serialize};

/// One row of the location dataset.
///
/// The `location` field keeps the raw `"<lat>, <lon>"` string from the source
/// file; it is parsed lazily at lookup time so a malformed coordinate degrades
/// that one lookup instead of failing the whole load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationRecord {
    #[serde(rename = "name_of_city")]
    pub city: String,
    #[serde(rename = "state_name")]
    pub state: String,
    pub location: String,
}

impl LocationRecord {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            location: location.into(),
        }
    }
}
