//! Field observation records as read from the observation store.
//!
//! A record is a single data point collected in the field: who recorded it,
//! when, which kind of value it holds, and which plot (observation unit) it
//! belongs to. Records are read-only inputs to the season statistics.

use serde::{Deserialize, Serialize};

/// Format tag marking observations whose value is a photo.
pub const PHOTO_FORMAT: &str = "photo";

/// One field-collected observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Person who recorded the observation. May be absent or blank.
    pub collector: Option<String>,

    /// Collection time in `yyyy-MM-dd HH:mm:ss.SSS±HH:MM` form.
    ///
    /// Stored verbatim; parsing happens when statistics are computed so that
    /// a malformed value fails the whole season rather than a single row.
    pub timestamp: String,

    /// Value type tag (e.g. `numeric`, `categorical`, `photo`).
    pub variable_format: String,

    /// Identifier of the plot the observation belongs to.
    pub observation_unit_id: String,

    /// Trait (observation variable) name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,

    /// Raw recorded value, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ObservationRecord {
    pub fn new(collector: Option<&str>, timestamp: &str, variable_format: &str, observation_unit_id: &str) -> Self {
        ObservationRecord {
            collector: collector.map(str::to_string),
            timestamp: timestamp.to_string(),
            variable_format: variable_format.to_string(),
            observation_unit_id: observation_unit_id.to_string(),
            variable_name: None,
            value: None,
        }
    }

    /// Attaches the trait name and recorded value.
    pub fn with_variable(mut self, name: &str, value: &str) -> Self {
        self.variable_name = Some(name.to_string());
        self.value = Some(value.to_string());
        self
    }

    /// Collector identifier if present and not blank.
    pub fn named_collector(&self) -> Option<&str> {
        self.collector.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn is_photo(&self, photo_format: &str) -> bool {
        self.variable_format == photo_format
    }
}
