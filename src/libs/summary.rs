//! Season statistics aggregation engine.
//!
//! Turns the observation records of one season into the derived metrics of
//! a season report: distinct collectors, photo observations, accumulated
//! active collection time, and the busiest calendar day and plot.
//!
//! ## Algorithm
//!
//! 1. Every timestamp is parsed in record order. The first malformed value
//!    aborts the computation; there is no per-record recovery.
//! 2. One forward pass tallies collectors, photo observations, observations
//!    per calendar day, and observations per plot.
//! 3. Consecutive instants, in record order, are compared pairwise. A gap no
//!    longer than the activity window counts as active time, truncated to
//!    whole seconds.
//! 4. The busiest day and plot are the tally entries with the strictly
//!    greatest count. Tallies iterate in first-insertion order, so ties go to
//!    the entry seen first.
//!
//! ## Usage
//!
//! ```rust
//! use fieldstat::libs::observation::ObservationRecord;
//! use fieldstat::libs::summary::{aggregate, SummaryOptions};
//!
//! let records = vec![
//!     ObservationRecord::new(Some("ana"), "2023-06-01 09:00:00.000+00:00", "numeric", "plot-1"),
//!     ObservationRecord::new(Some("ben"), "2023-06-01 09:10:00.000+00:00", "photo", "plot-1"),
//! ];
//! let aggregate = aggregate(&records, &SummaryOptions::default()).unwrap();
//! assert_eq!(aggregate.active_seconds, 600);
//! assert_eq!(aggregate.collector_count, 2);
//! assert_eq!(aggregate.busiest_unit.as_deref(), Some("plot-1"));
//! ```

use crate::libs::{
    error::SummaryError,
    formatter::{parse_timestamp, DAY_FORMAT_PATTERN},
    observation::{ObservationRecord, PHOTO_FORMAT},
};
use chrono::{DateTime, Duration, FixedOffset, Local};
use std::collections::{HashMap, HashSet};

/// Calendar used to bucket observations into days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCalendar {
    /// The machine's local time zone.
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl DayCalendar {
    /// Month-day-year label of `instant` in this calendar.
    pub fn day_label(&self, instant: &DateTime<FixedOffset>) -> String {
        match self {
            DayCalendar::Local => instant.with_timezone(&Local).format(DAY_FORMAT_PATTERN).to_string(),
            DayCalendar::Fixed(offset) => instant.with_timezone(offset).format(DAY_FORMAT_PATTERN).to_string(),
        }
    }
}

/// How gaps between out-of-order timestamps are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeGapPolicy {
    /// Negative gaps pass the `gap <= window` test and are added as negative seconds.
    #[default]
    Accumulate,
    /// Only gaps in `0..=window` count as activity.
    Skip,
}

/// Tunables for the aggregation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Format tag that marks photo observations.
    pub photo_format: String,
    /// Longest gap between consecutive observations still counted as active work.
    pub activity_window: Duration,
    pub calendar: DayCalendar,
    pub negative_gaps: NegativeGapPolicy,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            photo_format: PHOTO_FORMAT.to_string(),
            activity_window: Duration::minutes(30),
            calendar: DayCalendar::Local,
            negative_gaps: NegativeGapPolicy::default(),
        }
    }
}

/// Metrics derived from one season of observations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeasonAggregate {
    pub collector_count: usize,
    pub image_observation_count: usize,
    pub active_seconds: i64,
    pub busiest_day: Option<String>,
    pub busiest_unit: Option<String>,
}

/// Counter that remembers the order in which keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct OrderedTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl OrderedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&position| self.entries[position].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The first entry whose count is strictly greater than every earlier one.
    pub fn busiest(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (key, count) in self.iter() {
            if count > best.map(|(_, max)| max).unwrap_or(0) {
                best = Some((key, count));
            }
        }
        best
    }
}

/// Parses every record's timestamp in record order.
///
/// # Errors
///
/// Fails on the first malformed timestamp, reporting its position.
pub fn parse_instants(records: &[ObservationRecord]) -> Result<Vec<DateTime<FixedOffset>>, SummaryError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse_timestamp(&record.timestamp).map_err(|source| {
                tracing::warn!(index, timestamp = %record.timestamp, "malformed observation timestamp");
                SummaryError::TimestampParse {
                    index,
                    value: record.timestamp.clone(),
                    source,
                }
            })
        })
        .collect()
}

/// Sums the gaps between consecutive instants that fall inside the activity window.
///
/// Instants are walked in the order given; they are not sorted first.
pub fn active_seconds(instants: &[DateTime<FixedOffset>], options: &SummaryOptions) -> i64 {
    instants
        .windows(2)
        .map(|pair| pair[1].signed_duration_since(pair[0]))
        .filter(|gap| *gap <= options.activity_window)
        .filter(|gap| options.negative_gaps == NegativeGapPolicy::Accumulate || *gap >= Duration::zero())
        .map(|gap| gap.num_seconds())
        .sum()
}

/// Computes the derived metrics for one season of records.
///
/// # Errors
///
/// Returns [`SummaryError::TimestampParse`] if any record carries a malformed
/// timestamp. No partial result is produced.
pub fn aggregate(records: &[ObservationRecord], options: &SummaryOptions) -> Result<SeasonAggregate, SummaryError> {
    let instants = parse_instants(records)?;

    let mut collectors: HashSet<&str> = HashSet::new();
    let mut image_observation_count = 0;
    let mut days = OrderedTally::new();
    let mut units = OrderedTally::new();

    for (record, instant) in records.iter().zip(&instants) {
        if let Some(collector) = record.named_collector() {
            collectors.insert(collector);
        }
        if record.is_photo(&options.photo_format) {
            image_observation_count += 1;
        }
        days.increment(&options.calendar.day_label(instant));
        units.increment(&record.observation_unit_id);
    }

    let aggregate = SeasonAggregate {
        collector_count: collectors.len(),
        image_observation_count,
        active_seconds: active_seconds(&instants, options),
        busiest_day: days.busiest().map(|(day, _)| day.to_string()),
        busiest_unit: units.busiest().map(|(unit, _)| unit.to_string()),
    };
    tracing::debug!(records = records.len(), days = days.len(), units = units.len(), "aggregated observations");

    Ok(aggregate)
}

/// Observation count for one trait.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TraitCount {
    pub name: String,
    pub count: usize,
}

/// Counts observations per trait name in first-seen order.
///
/// Records without a trait name are left out.
pub fn trait_counts(records: &[ObservationRecord]) -> Vec<TraitCount> {
    let mut tally = OrderedTally::new();
    for name in records.iter().filter_map(|record| record.variable_name.as_deref()) {
        tally.increment(name);
    }
    tally
        .iter()
        .map(|(name, count)| TraitCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keeps_insertion_order() {
        let mut tally = OrderedTally::new();
        for key in ["b", "a", "b", "c", "a"] {
            tally.increment(key);
        }
        let keys: Vec<&str> = tally.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(tally.get("a"), 2);
        assert_eq!(tally.get("missing"), 0);
    }

    #[test]
    fn test_busiest_prefers_first_seen_on_tie() {
        let mut tally = OrderedTally::new();
        for key in ["x", "y", "y", "x"] {
            tally.increment(key);
        }
        assert_eq!(tally.busiest(), Some(("x", 2)));
    }

    #[test]
    fn test_busiest_of_empty_tally() {
        assert_eq!(OrderedTally::new().busiest(), None);
    }
}
