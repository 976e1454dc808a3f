//! Core library modules for fieldstat.
//!
//! ## Features
//!
//! - **Statistics Engine**: per-season aggregation of observation records
//! - **Reports**: immutable season summaries assembled from the engine output
//! - **Ingestion**: the read-only observation source boundary
//! - **Infrastructure**: configuration, data storage, messaging, logging
//! - **User Interface**: console tables, CSV import, and data export
//!
//! ## Usage
//!
//! ```rust
//! use fieldstat::libs::observation::ObservationRecord;
//! use fieldstat::libs::report::compute_season_summary;
//! use fieldstat::libs::summary::SummaryOptions;
//!
//! let records = vec![ObservationRecord::new(Some("ana"), "2023-06-01 09:00:00.000+00:00", "photo", "plot-7")];
//! let summary = compute_season_summary("2023", 1, 40, &records, &SummaryOptions::default()).unwrap();
//! assert_eq!(summary.image_observation_count, 1);
//! assert_eq!(summary.active_duration, "00:00:00");
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod import;
pub mod ingest;
pub mod logging;
pub mod messages;
pub mod observation;
pub mod report;
pub mod summary;
pub mod view;
