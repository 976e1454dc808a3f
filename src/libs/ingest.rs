//! Observation source boundary and per-season report generation.
//!
//! The statistics core never talks to storage directly. It reads through an
//! [`ObservationSource`], taking one snapshot per report: the two
//! season-independent counts and the season's records. Nothing is cached or
//! retried between calls.

use crate::libs::{
    observation::ObservationRecord,
    report::{compute_season_summary, SeasonSummary},
    summary::SummaryOptions,
};
use anyhow::Result;

/// Read-only access to fields, plots, and observations.
pub trait ObservationSource {
    /// Number of known fields (studies).
    fn field_count(&self) -> Result<usize>;

    /// Number of known plots (observation units).
    fn plot_count(&self) -> Result<usize>;

    /// Observations recorded in `season`, in storage order.
    fn observations_for_season(&self, season: &str) -> Result<Vec<ObservationRecord>>;

    /// Seasons that have observations, newest first.
    fn seasons(&self) -> Result<Vec<String>>;
}

/// Builds the summary report for one season.
///
/// Source errors are returned unchanged. A malformed timestamp surfaces as a
/// [`crate::libs::error::SummaryError`] inside the returned error.
pub fn generate_report<S: ObservationSource + ?Sized>(source: &S, season: &str, options: &SummaryOptions) -> Result<SeasonSummary> {
    let field_count = source.field_count()?;
    let plot_count = source.plot_count()?;
    let records = source.observations_for_season(season)?;
    tracing::debug!(season, records = records.len(), "generating season summary");

    Ok(compute_season_summary(season, field_count, plot_count, &records, options)?)
}

/// Builds one report per season known to the source.
///
/// Stops at the first season that fails.
pub fn generate_reports<S: ObservationSource + ?Sized>(source: &S, options: &SummaryOptions) -> Result<Vec<SeasonSummary>> {
    source
        .seasons()?
        .iter()
        .map(|season| generate_report(source, season, options))
        .collect()
}
