/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStatistics,
    PromptPhotoFormat,
    PromptActivityWindow,
    PromptSkipNegativeGaps,
    PromptUtcOffset,
    InvalidActivityWindow(i64), // minutes
    InvalidUtcOffset(i32),      // minutes

    // === SEASON MESSAGES ===
    SeasonsHeader,
    NoSeasonsFound,

    // === STATISTICS MESSAGES ===
    SeasonStatisticsHeader(String), // season
    AllSeasonsStatisticsHeader,
    SeasonSummaryFailed(String),         // season
    SummaryTaskPanicked(String),         // season
    SeasonsFailed(usize, usize),         // failed, total

    // === TRAIT MESSAGES ===
    TraitCountsHeader(Option<String>), // season
    NoTraitsFound,

    // === IMPORT MESSAGES ===
    ImportingObservations(String),         // path
    ImportCompleted(usize, String),        // count, path
    ImportMalformedTimestamp(usize, String), // row, value
    ImportMissingColumn(String),           // column

    // === EXPORT MESSAGES ===
    ExportingSummaries(usize, String), // count, format
    ExportCompleted(String),           // path
    NothingToExport,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
