use crate::{
    db::observations::Observations,
    libs::{import::import_observations, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::{fs::File, path::PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(help = "CSV file with columns study,plot_id,trait,format,value,timestamp,person")]
    path: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let path_text = args.path.display().to_string();
    msg_info!(Message::ImportingObservations(path_text.clone()));

    let mut store = Observations::new()?;
    let imported = import_observations(&mut store, File::open(&args.path)?)?;

    msg_success!(Message::ImportCompleted(imported, path_text));
    Ok(())
}
