use crate::{
    commands::stats::season_summaries,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(help = "Season to export; every season when omitted")]
    season: Option<String>,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let options = Config::read()?.summary_options()?;

    let summaries = season_summaries(args.season, options)
        .await?
        .into_iter()
        .map(|(_, result)| result)
        .collect::<Result<Vec<_>>>()?;

    msg_info!(Message::ExportingSummaries(summaries.len(), format!("{:?}", args.format)));
    Exporter::new(args.format, args.output).export(&summaries)?;
    Ok(())
}
