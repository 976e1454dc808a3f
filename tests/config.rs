#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};
    use fieldstat::libs::config::{Config, StatisticsConfig};
    use fieldstat::libs::summary::{DayCalendar, NegativeGapPolicy};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Temporary directory holding the config file under test.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_default_statistics_config() {
        let config = Config::default();
        assert_eq!(config.statistics.photo_format, "photo");
        assert_eq!(config.statistics.activity_window_minutes, 30);
        assert!(!config.statistics.skip_negative_gaps);
        assert_eq!(config.statistics.utc_offset_minutes, None);
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_default_options_match_engine_defaults() {
        let options = Config::default().summary_options().unwrap();
        assert_eq!(options.photo_format, "photo");
        assert_eq!(options.activity_window, Duration::minutes(30));
        assert_eq!(options.calendar, DayCalendar::Local);
        assert_eq!(options.negative_gaps, NegativeGapPolicy::Accumulate);
    }

    #[test]
    fn test_options_from_custom_settings() {
        let statistics = StatisticsConfig {
            photo_format: "image".to_string(),
            activity_window_minutes: 15,
            skip_negative_gaps: true,
            utc_offset_minutes: Some(-300),
        };

        let options = statistics.summary_options().unwrap();
        assert_eq!(options.photo_format, "image");
        assert_eq!(options.activity_window, Duration::minutes(15));
        assert_eq!(options.calendar, DayCalendar::Fixed(FixedOffset::west_opt(5 * 3600).unwrap()));
        assert_eq!(options.negative_gaps, NegativeGapPolicy::Skip);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let negative_window = StatisticsConfig {
            activity_window_minutes: -1,
            ..StatisticsConfig::default()
        };
        assert!(negative_window.summary_options().is_err());

        let huge_window = StatisticsConfig {
            activity_window_minutes: i64::MAX / 10,
            ..StatisticsConfig::default()
        };
        assert!(huge_window.summary_options().is_err());

        let offset_out_of_range = StatisticsConfig {
            utc_offset_minutes: Some(24 * 60),
            ..StatisticsConfig::default()
        };
        assert!(offset_out_of_range.summary_options().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            statistics: StatisticsConfig {
                photo_format: "photo".to_string(),
                activity_window_minutes: 45,
                skip_negative_gaps: true,
                utc_offset_minutes: Some(120),
            },
            database: Some(PathBuf::from("/data/field.db")),
        };

        config.save_to(&ctx.path()).unwrap();
        assert_eq!(Config::read_from(&ctx.path()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.path(), r#"{ "database": "/tmp/obs.db" }"#).unwrap();

        let config = Config::read_from(&ctx.path()).unwrap();
        assert_eq!(config.statistics, StatisticsConfig::default());
        assert_eq!(config.database, Some(PathBuf::from("/tmp/obs.db")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_file_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.path()).is_err());
    }
}
