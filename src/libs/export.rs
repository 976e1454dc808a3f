//! Export of season summaries for external analysis.
//!
//! ## Features
//!
//! - **Export Formats**: CSV (one row per season), pretty JSON, and Excel
//! - **File Naming**: timestamped default names so repeated exports never collide
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldstat::libs::export::{ExportFormat, Exporter};
//!
//! # let summaries = vec![];
//! let exporter = Exporter::new(ExportFormat::Json, None);
//! exporter.export(&summaries)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::{messages::Message, report::SeasonSummary};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers shared by the CSV and Excel outputs.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "Season",
    "Fields",
    "Plots",
    "Observations",
    "Active time",
    "Collectors",
    "Photos",
    "Busiest day",
    "Busiest plot",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("fieldstat_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `summaries` in the configured format.
    ///
    /// # Errors
    ///
    /// Fails when there is nothing to export or the file cannot be written.
    pub fn export(&self, summaries: &[SeasonSummary]) -> Result<()> {
        if summaries.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }

        match self.format {
            ExportFormat::Csv => self.export_csv(summaries)?,
            ExportFormat::Json => self.export_json(summaries)?,
            ExportFormat::Excel => self.export_excel(summaries)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, summaries: &[SeasonSummary]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(EXPORT_COLUMNS)?;
        for summary in summaries {
            wtr.write_record(&summary_cells(summary))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, summaries: &[SeasonSummary]) -> Result<()> {
        let json = serde_json::to_string_pretty(summaries)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, summaries: &[SeasonSummary]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, title) in EXPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (index, summary) in summaries.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &summary.season)?;
            worksheet.write_number(row, 1, summary.field_count as f64)?;
            worksheet.write_number(row, 2, summary.plot_count as f64)?;
            worksheet.write_number(row, 3, summary.observation_count as f64)?;
            worksheet.write_string(row, 4, &summary.active_duration)?;
            worksheet.write_number(row, 5, summary.collector_count as f64)?;
            worksheet.write_number(row, 6, summary.image_observation_count as f64)?;
            worksheet.write_string(row, 7, summary.busiest_day.as_deref().unwrap_or(""))?;
            worksheet.write_string(row, 8, summary.busiest_unit.as_deref().unwrap_or(""))?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn summary_cells(summary: &SeasonSummary) -> [String; 9] {
    [
        summary.season.clone(),
        summary.field_count.to_string(),
        summary.plot_count.to_string(),
        summary.observation_count.to_string(),
        summary.active_duration.clone(),
        summary.collector_count.to_string(),
        summary.image_observation_count.to_string(),
        summary.busiest_day.clone().unwrap_or_default(),
        summary.busiest_unit.clone().unwrap_or_default(),
    ]
}
