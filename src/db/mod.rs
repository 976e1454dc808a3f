//! SQLite persistence for fields, plots, and observations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldstat::db::observations::Observations;
//! use fieldstat::libs::ingest::{generate_report, ObservationSource};
//! use fieldstat::libs::summary::SummaryOptions;
//!
//! let store = Observations::new()?;
//! for season in store.seasons()? {
//!     let summary = generate_report(&store, &season, &SummaryOptions::default())?;
//!     println!("{}: {} observations", summary.season, summary.observation_count);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and schema initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Plots (observation units) per field.
pub mod observation_units;

/// Observation records and the season queries the statistics read from.
pub mod observations;

/// Fields (studies).
pub mod studies;
