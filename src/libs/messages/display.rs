//! Display implementation for fieldstat messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent across commands and parameters are interpolated with their
//! types checked at compile time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStatistics => "Season statistics settings".to_string(),
            Message::PromptPhotoFormat => "Format tag of photo observations".to_string(),
            Message::PromptActivityWindow => "Longest gap counted as active work (minutes)".to_string(),
            Message::PromptSkipNegativeGaps => "Ignore out-of-order timestamps when adding up active time?".to_string(),
            Message::PromptUtcOffset => "Calendar offset from UTC in minutes (empty for local time)".to_string(),
            Message::InvalidActivityWindow(minutes) => format!("Activity window of {} minutes is out of range", minutes),
            Message::InvalidUtcOffset(minutes) => format!("UTC offset of {} minutes is out of range", minutes),

            // === SEASON MESSAGES ===
            Message::SeasonsHeader => "Seasons with observations:".to_string(),
            Message::NoSeasonsFound => "No observations recorded yet".to_string(),

            // === STATISTICS MESSAGES ===
            Message::SeasonStatisticsHeader(season) => format!("Statistics for season {}", season),
            Message::AllSeasonsStatisticsHeader => "Statistics for all seasons".to_string(),
            Message::SeasonSummaryFailed(season) => format!("Failed to summarize season {}", season),
            Message::SummaryTaskPanicked(season) => format!("Summary task for season {} panicked", season),
            Message::SeasonsFailed(failed, total) => format!("{} of {} seasons could not be summarized", failed, total),

            // === TRAIT MESSAGES ===
            Message::TraitCountsHeader(Some(season)) => format!("Observations per trait in season {}", season),
            Message::TraitCountsHeader(None) => "Observations per trait".to_string(),
            Message::NoTraitsFound => "No trait observations found".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportingObservations(path) => format!("Importing observations from {}", path),
            Message::ImportCompleted(count, path) => format!("Imported {} observations from {}", count, path),
            Message::ImportMalformedTimestamp(row, value) => {
                format!("Row {} has a malformed timestamp '{}'; its season will fail to summarize", row, value)
            }
            Message::ImportMissingColumn(column) => format!("CSV header is missing the '{}' column", column),

            // === EXPORT MESSAGES ===
            Message::ExportingSummaries(count, format) => format!("Exporting {} season summaries as {}", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport => "No season summaries to export".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened observation database {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", text)
    }
}
