//! CSV import of field observations.
//!
//! Expected header: `study,plot_id,trait,format,value,timestamp,person`.
//! `trait`, `value`, and `person` may be left empty. Timestamps are stored
//! verbatim; a malformed one only triggers a warning here and fails the
//! season when it is summarized.

use crate::db::observations::Observations;
use crate::libs::{formatter::parse_timestamp, messages::Message, observation::ObservationRecord};
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use serde::Deserialize;
use std::io::Read;

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["study", "plot_id", "format", "timestamp"];

/// Source tag stored on studies created by an import.
pub const IMPORT_SOURCE: &str = "csv";

#[derive(Debug, Deserialize)]
struct ImportRow {
    study: String,
    plot_id: String,
    #[serde(rename = "trait", default)]
    trait_name: Option<String>,
    format: String,
    #[serde(default)]
    value: Option<String>,
    timestamp: String,
    #[serde(default)]
    person: Option<String>,
}

impl ImportRow {
    fn into_record(self) -> (String, ObservationRecord) {
        let record = ObservationRecord {
            collector: self.person,
            timestamp: self.timestamp,
            variable_format: self.format,
            observation_unit_id: self.plot_id,
            variable_name: self.trait_name,
            value: self.value,
        };
        (self.study, record)
    }
}

/// Reads `(study, record)` pairs from CSV.
///
/// # Errors
///
/// Fails if a required column is missing or any row cannot be decoded.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<(String, ObservationRecord)>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            msg_bail_anyhow!(Message::ImportMissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for (index, result) in rdr.deserialize::<ImportRow>().enumerate() {
        let (study, record) = result?.into_record();
        if parse_timestamp(&record.timestamp).is_err() {
            // Header is line 1.
            msg_warning!(Message::ImportMalformedTimestamp(index + 2, record.timestamp.clone()));
        }
        rows.push((study, record));
    }

    Ok(rows)
}

/// Imports every row of `reader` into `store` in one transaction.
pub fn import_observations<R: Read>(store: &mut Observations, reader: R) -> Result<usize> {
    let rows = read_observations(reader)?;
    let imported = store.insert_all(Some(IMPORT_SOURCE), rows.iter().map(|(study, record)| (study.as_str(), record)))?;
    tracing::debug!(imported, "imported observations");
    Ok(imported)
}
