#[cfg(test)]
mod tests {
    use anyhow::Result;
    use fieldstat::libs::error::SummaryError;
    use fieldstat::libs::ingest::{generate_report, generate_reports, ObservationSource};
    use fieldstat::libs::observation::ObservationRecord;
    use fieldstat::libs::summary::SummaryOptions;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("observation store unavailable during {0}")]
    struct StoreUnavailable(&'static str);

    /// Source that fails at one chosen query.
    #[derive(Default)]
    struct FailingSource {
        fail_field_count: bool,
        fail_plot_count: bool,
        fail_observations: bool,
        fail_seasons: bool,
    }

    impl ObservationSource for FailingSource {
        fn field_count(&self) -> Result<usize> {
            if self.fail_field_count {
                return Err(StoreUnavailable("field count").into());
            }
            Ok(3)
        }

        fn plot_count(&self) -> Result<usize> {
            if self.fail_plot_count {
                return Err(StoreUnavailable("plot count").into());
            }
            Ok(12)
        }

        fn observations_for_season(&self, _season: &str) -> Result<Vec<ObservationRecord>> {
            if self.fail_observations {
                return Err(StoreUnavailable("season query").into());
            }
            Ok(vec![ObservationRecord::new(Some("ana"), "2023-06-01 09:00:00.000+00:00", "numeric", "p1")])
        }

        fn seasons(&self) -> Result<Vec<String>> {
            if self.fail_seasons {
                return Err(StoreUnavailable("season listing").into());
            }
            Ok(vec!["2023".to_string()])
        }
    }

    fn assert_passed_through(err: anyhow::Error, stage: &'static str) {
        assert!(err.downcast_ref::<SummaryError>().is_none());
        assert_eq!(err.downcast_ref::<StoreUnavailable>(), Some(&StoreUnavailable(stage)));
        assert_eq!(err.to_string(), format!("observation store unavailable during {}", stage));
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn test_healthy_source_produces_report() {
        let summary = generate_report(&FailingSource::default(), "2023", &SummaryOptions::default()).unwrap();
        assert_eq!(summary.field_count, 3);
        assert_eq!(summary.plot_count, 12);
        assert_eq!(summary.observation_count, 1);
    }

    #[test]
    fn test_season_query_error_is_returned_unchanged() {
        let source = FailingSource {
            fail_observations: true,
            ..FailingSource::default()
        };

        let err = generate_report(&source, "2023", &SummaryOptions::default()).unwrap_err();
        assert_passed_through(err, "season query");
    }

    #[test]
    fn test_field_count_error_is_returned_unchanged() {
        let source = FailingSource {
            fail_field_count: true,
            ..FailingSource::default()
        };

        let err = generate_report(&source, "2023", &SummaryOptions::default()).unwrap_err();
        assert_passed_through(err, "field count");
    }

    #[test]
    fn test_plot_count_error_is_returned_unchanged() {
        let source = FailingSource {
            fail_plot_count: true,
            ..FailingSource::default()
        };

        let err = generate_report(&source, "2023", &SummaryOptions::default()).unwrap_err();
        assert_passed_through(err, "plot count");
    }

    #[test]
    fn test_season_listing_error_is_returned_unchanged() {
        let source = FailingSource {
            fail_seasons: true,
            ..FailingSource::default()
        };

        let err = generate_reports(&source, &SummaryOptions::default()).unwrap_err();
        assert_passed_through(err, "season listing");
    }
}
