#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use fieldstat::db::observations::Observations;
    use fieldstat::libs::ingest::{generate_report, generate_reports, ObservationSource};
    use fieldstat::libs::error::SummaryError;
    use fieldstat::libs::observation::ObservationRecord;
    use fieldstat::libs::summary::{DayCalendar, SummaryOptions};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Scratch database in a temporary directory.
    struct StoreTestContext {
        _temp_dir: TempDir,
        store: Observations,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Observations::open(&temp_dir.path().join("fieldstat.db")).unwrap();
            StoreTestContext { _temp_dir: temp_dir, store }
        }
    }

    fn utc_options() -> SummaryOptions {
        SummaryOptions {
            calendar: DayCalendar::Fixed(FixedOffset::east_opt(0).unwrap()),
            ..SummaryOptions::default()
        }
    }

    fn seed(store: &mut Observations) {
        let rows = [
            ("Yield trial", ObservationRecord::new(Some("ana"), "2022-07-01 10:00:00.000+00:00", "numeric", "YT-1")),
            ("Yield trial", ObservationRecord::new(Some("ana"), "2023-06-01 09:00:00.000+00:00", "numeric", "YT-1")),
            ("Yield trial", ObservationRecord::new(Some("ben"), "2023-06-01 09:10:00.000+00:00", "photo", "YT-2")),
            ("Disease screen", ObservationRecord::new(None, "2023-06-01 09:20:00.000+00:00", "categorical", "DS-1")),
            ("Disease screen", ObservationRecord::new(Some("ben"), "2023-06-02 15:00:00.000+00:00", "numeric", "DS-1")),
        ];
        store
            .insert_all(None, rows.iter().map(|(study, record)| (*study, record)))
            .unwrap();
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_counts_are_season_independent(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        assert_eq!(ctx.store.field_count().unwrap(), 2);
        assert_eq!(ctx.store.plot_count().unwrap(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_same_plot_name_in_two_fields_is_two_plots(ctx: &mut StoreTestContext) {
        ctx.store
            .insert("North", &ObservationRecord::new(None, "2023-06-01 09:00:00.000+00:00", "numeric", "1"))
            .unwrap();
        ctx.store
            .insert("South", &ObservationRecord::new(None, "2023-06-01 09:00:00.000+00:00", "numeric", "1"))
            .unwrap();

        assert_eq!(ctx.store.plot_count().unwrap(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_observations_for_season_keep_insertion_order(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        let records = ctx.store.observations_for_season("2023").unwrap();
        let units: Vec<&str> = records.iter().map(|r| r.observation_unit_id.as_str()).collect();
        assert_eq!(units, vec!["YT-1", "YT-2", "DS-1", "DS-1"]);
        assert_eq!(records[2].collector, None);

        assert!(ctx.store.observations_for_season("2021").unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_seasons_newest_first(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        assert_eq!(ctx.store.seasons().unwrap(), vec!["2023".to_string(), "2022".to_string()]);
        assert_eq!(
            ctx.store.season_counts().unwrap(),
            vec![("2023".to_string(), 4), ("2022".to_string(), 1)]
        );
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_generate_report_from_store(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        let summary = generate_report(&ctx.store, "2023", &utc_options()).unwrap();
        assert_eq!(summary.field_count, 2);
        assert_eq!(summary.plot_count, 3);
        assert_eq!(summary.observation_count, 4);
        assert_eq!(summary.active_duration, "00:20:00");
        assert_eq!(summary.collector_count, 2);
        assert_eq!(summary.image_observation_count, 1);
        assert_eq!(summary.busiest_day.as_deref(), Some("06-01-2023"));
        assert_eq!(summary.busiest_unit.as_deref(), Some("DS-1"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unknown_season_yields_empty_report(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        let summary = generate_report(&ctx.store, "1999", &utc_options()).unwrap();
        assert_eq!(summary.observation_count, 0);
        assert_eq!(summary.field_count, 2);
        assert_eq!(summary.active_duration, "00:00:00");
        assert_eq!(summary.busiest_day, None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_generate_reports_for_every_season(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        let reports = generate_reports(&ctx.store, &utc_options()).unwrap();
        let seasons: Vec<&str> = reports.iter().map(|r| r.season.as_str()).collect();
        assert_eq!(seasons, vec!["2023", "2022"]);
        assert_eq!(reports[1].observation_count, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_malformed_stored_timestamp_fails_report(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);
        ctx.store
            .insert("Yield trial", &ObservationRecord::new(Some("ana"), "2023-06-03 noon", "numeric", "YT-1"))
            .unwrap();

        let err = generate_report(&ctx.store, "2023", &utc_options()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SummaryError>(),
            Some(SummaryError::TimestampParse { index: 4, .. })
        ));

        // Other seasons are unaffected.
        assert!(generate_report(&ctx.store, "2022", &utc_options()).is_ok());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fetch_for_study(ctx: &mut StoreTestContext) {
        seed(&mut ctx.store);

        let records = ctx.store.fetch_for_study("Disease screen").unwrap();
        assert_eq!(records.len(), 2);
        assert!(ctx.store.fetch_for_study("Missing").unwrap().is_empty());

        let studies = ctx.store.studies().unwrap();
        let names: Vec<&str> = studies.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Yield trial", "Disease screen"]);
    }
}
