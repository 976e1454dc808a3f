//! Configuration management for fieldstat.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file is not an error: the defaults apply.
//!
//! ## Configuration Structure
//!
//! - **Statistics**: photo tag, activity window, negative-gap handling, and the
//!   calendar used for day buckets
//! - **Database**: optional explicit path of the observation database
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use fieldstat::libs::config::Config;
//!
//! let config = Config::read()?;
//! let options = config.summary_options()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::{
    messages::Message,
    summary::{DayCalendar, NegativeGapPolicy, SummaryOptions},
};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Duration, FixedOffset};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Parameters of the season statistics engine.
///
/// ## Timing Configuration
///
/// Consecutive observations closer together than `activity_window_minutes`
/// count as continuous collection work. Larger gaps are treated as breaks.
///
/// ## Calendar
///
/// `utc_offset_minutes` pins the calendar used to find the busiest day. When
/// absent, the machine's local time zone is used.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatisticsConfig {
    /// Format tag that marks photo observations.
    pub photo_format: String,

    /// Longest gap, in minutes, still counted as active work.
    pub activity_window_minutes: i64,

    /// Ignore negative gaps (out-of-order timestamps) instead of adding them.
    pub skip_negative_gaps: bool,

    /// Fixed calendar offset from UTC in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        StatisticsConfig {
            photo_format: crate::libs::observation::PHOTO_FORMAT.to_string(),
            activity_window_minutes: 30,
            skip_negative_gaps: false,
            utc_offset_minutes: None,
        }
    }
}

impl StatisticsConfig {
    /// Converts the stored settings into engine options.
    ///
    /// # Errors
    ///
    /// Fails if the configured offset is outside ±24 hours or the window is
    /// negative or too large to represent.
    pub fn summary_options(&self) -> Result<SummaryOptions> {
        let activity_window = match Duration::try_minutes(self.activity_window_minutes) {
            Some(window) if self.activity_window_minutes >= 0 => window,
            _ => msg_bail_anyhow!(Message::InvalidActivityWindow(self.activity_window_minutes)),
        };

        let calendar = match self.utc_offset_minutes {
            None => DayCalendar::Local,
            Some(minutes) => match FixedOffset::east_opt(minutes * 60) {
                Some(offset) => DayCalendar::Fixed(offset),
                None => msg_bail_anyhow!(Message::InvalidUtcOffset(minutes)),
            },
        };

        Ok(SummaryOptions {
            photo_format: self.photo_format.clone(),
            activity_window,
            calendar,
            negative_gaps: if self.skip_negative_gaps {
                NegativeGapPolicy::Skip
            } else {
                NegativeGapPolicy::Accumulate
            },
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub statistics: StatisticsConfig,

    /// Explicit observation database; the data directory is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn summary_options(&self) -> Result<SummaryOptions> {
        self.statistics.summary_options()
    }

    /// Runs the interactive setup wizard, starting from the saved settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.statistics.clone();

        msg_print!(Message::ConfigModuleStatistics);
        let theme = ColorfulTheme::default();

        let photo_format: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptPhotoFormat.to_string())
            .default(default.photo_format)
            .interact_text()?;

        let activity_window_minutes: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptActivityWindow.to_string())
            .default(default.activity_window_minutes)
            .interact_text()?;

        let skip_negative_gaps = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptSkipNegativeGaps.to_string())
            .default(default.skip_negative_gaps)
            .interact()?;

        let offset: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptUtcOffset.to_string())
            .default(default.utc_offset_minutes.map(|m| m.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let utc_offset_minutes = match offset.trim() {
            "" => None,
            value => Some(value.parse::<i32>()?),
        };

        config.statistics = StatisticsConfig {
            photo_format,
            activity_window_minutes,
            skip_negative_gaps,
            utc_offset_minutes,
        };
        config.statistics.summary_options()?;

        Ok(config)
    }
}
