use crate::{
    db::{db::Db, observations::Observations},
    libs::{
        config::Config,
        ingest::{generate_report, ObservationSource},
        messages::Message,
        report::SeasonSummary,
        summary::SummaryOptions,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(help = "Season to summarize; every season when omitted")]
    season: Option<String>,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let options = Config::read()?.summary_options()?;

    match &args.season {
        Some(season) => msg_print!(Message::SeasonStatisticsHeader(season.clone()), true),
        None => msg_print!(Message::AllSeasonsStatisticsHeader, true),
    }

    let results = season_summaries(args.season, options).await?;
    if results.is_empty() {
        msg_info!(Message::NoSeasonsFound);
        return Ok(());
    }

    let mut summaries = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (season, result) in results {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                msg_error!(format!("{:#}", e));
                tracing::error!(season = %season, error = %e, "season summary failed");
                failed += 1;
            }
        }
    }

    if !summaries.is_empty() {
        View::summaries(&summaries);
    }
    if failed > 0 {
        return Err(msg_error_anyhow!(Message::SeasonsFailed(failed, failed + summaries.len())));
    }
    Ok(())
}

/// Summarizes `season`, or every known season, one blocking task per season.
///
/// Each task opens its own connection, so no store or accumulator is shared
/// between seasons. Results keep the season order (newest first).
pub async fn season_summaries(season: Option<String>, options: SummaryOptions) -> Result<Vec<(String, Result<SeasonSummary>)>> {
    let path = Db::path()?;
    let seasons = match season {
        Some(season) => vec![season],
        None => Observations::open(&path)?.seasons()?,
    };

    let handles: Vec<_> = seasons
        .into_iter()
        .map(|season| {
            let path = path.clone();
            let options = options.clone();
            let task_season = season.clone();
            (season, tokio::task::spawn_blocking(move || summarize(&path, &task_season, &options)))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (season, handle) in handles {
        match handle.await {
            Ok(result) => {
                let result = result.with_context(|| Message::SeasonSummaryFailed(season.clone()));
                results.push((season, result));
            }
            Err(_) => msg_bail_anyhow!(Message::SummaryTaskPanicked(season)),
        }
    }
    Ok(results)
}

fn summarize(path: &Path, season: &str, options: &SummaryOptions) -> Result<SeasonSummary> {
    let store = Observations::open(path)?;
    generate_report(&store, season, options)
}
