use crate::{
    db::observations::Observations,
    libs::{ingest::ObservationSource, messages::Message, summary::trait_counts, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TraitsArgs {
    #[arg(short, long, help = "Season to count (defaults to every observation)")]
    season: Option<String>,

    #[arg(short, long, help = "Restrict to one field (study name)")]
    field: Option<String>,
}

pub fn cmd(args: TraitsArgs) -> Result<()> {
    let store = Observations::new()?;

    let records = match (&args.field, &args.season) {
        (Some(field), season) => {
            let mut records = store.fetch_for_study(field)?;
            if let Some(season) = season {
                records.retain(|record| record.timestamp.starts_with(season.as_str()));
            }
            records
        }
        (None, Some(season)) => store.observations_for_season(season)?,
        (None, None) => {
            let mut all = Vec::new();
            for season in store.seasons()? {
                all.extend(store.observations_for_season(&season)?);
            }
            all
        }
    };

    let counts = trait_counts(&records);
    if counts.is_empty() {
        msg_info!(Message::NoTraitsFound);
        return Ok(());
    }

    msg_print!(Message::TraitCountsHeader(args.season.clone()), true);
    View::trait_counts(&counts);
    Ok(())
}
