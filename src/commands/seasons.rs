use crate::{
    db::observations::Observations,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let seasons = Observations::new()?.season_counts()?;
    if seasons.is_empty() {
        msg_info!(Message::NoSeasonsFound);
        return Ok(());
    }

    msg_print!(Message::SeasonsHeader, true);
    View::seasons(&seasons);
    Ok(())
}
