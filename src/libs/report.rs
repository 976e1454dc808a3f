//! Season summary report assembly.

use crate::libs::{
    error::SummaryError,
    formatter::format_duration,
    observation::ObservationRecord,
    summary::{aggregate, SeasonAggregate, SummaryOptions},
};
use serde::{Deserialize, Serialize};

/// Immutable statistics for one season, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season: String,
    /// Known fields, independent of the season.
    pub field_count: usize,
    /// Known plots, independent of the season.
    pub plot_count: usize,
    pub observation_count: usize,
    /// Active collection time as "HH:MM:SS".
    pub active_duration: String,
    pub collector_count: usize,
    pub image_observation_count: usize,
    /// Month-day-year of the day with most observations.
    pub busiest_day: Option<String>,
    /// Observation unit with most observations.
    pub busiest_unit: Option<String>,
}

impl SeasonSummary {
    /// Pairs the caller-supplied counts with the derived metrics.
    pub fn assemble(season: &str, field_count: usize, plot_count: usize, observation_count: usize, aggregate: SeasonAggregate) -> Self {
        SeasonSummary {
            season: season.to_string(),
            field_count,
            plot_count,
            observation_count,
            active_duration: format_duration(aggregate.active_seconds),
            collector_count: aggregate.collector_count,
            image_observation_count: aggregate.image_observation_count,
            busiest_day: aggregate.busiest_day,
            busiest_unit: aggregate.busiest_unit,
        }
    }
}

/// Computes the summary report for one season of records.
///
/// # Errors
///
/// Fails with [`SummaryError::TimestampParse`] if any record's timestamp is
/// malformed; no report is produced in that case.
pub fn compute_season_summary(
    season: &str,
    field_count: usize,
    plot_count: usize,
    records: &[ObservationRecord],
    options: &SummaryOptions,
) -> Result<SeasonSummary, SummaryError> {
    let aggregate = aggregate(records, options)?;
    Ok(SeasonSummary::assemble(season, field_count, plot_count, records.len(), aggregate))
}
