//! # Fieldstat - Field observation season statistics
//!
//! A command-line utility and library that summarizes field-collected
//! observation records season by season.
//!
//! ## Features
//!
//! - **Season Statistics**: distinct collectors, photo observations, busiest
//!   day and plot, and accumulated active collection time
//! - **Observation Store**: SQLite database of fields, plots, and observations
//! - **Trait Breakdown**: observation counts per trait
//! - **Data Import/Export**: CSV import; CSV, JSON, and Excel export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldstat::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
