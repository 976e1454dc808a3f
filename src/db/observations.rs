use super::{db::Db, observation_units, studies};
use crate::libs::{ingest::ObservationSource, observation::ObservationRecord};
use anyhow::Result;
use rusqlite::{params, Connection, Row};
use std::path::Path;

const INSERT_OBSERVATION: &str = "INSERT INTO observations (
    study_id, observation_unit_id, observation_variable_name,
    observation_variable_field_book_format, value, observation_time_stamp, collector
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_BY_SEASON: &str = "SELECT collector, observation_time_stamp, observation_variable_field_book_format,
    observation_unit_id, observation_variable_name, value
    FROM observations WHERE substr(observation_time_stamp, 1, 4) = ?1 ORDER BY id";
const SELECT_BY_STUDY: &str = "SELECT o.collector, o.observation_time_stamp, o.observation_variable_field_book_format,
    o.observation_unit_id, o.observation_variable_name, o.value
    FROM observations o JOIN studies s ON s.id = o.study_id WHERE s.study_name = ?1 ORDER BY o.id";
const SELECT_SEASONS: &str = "SELECT substr(observation_time_stamp, 1, 4) AS season, COUNT(*)
    FROM observations GROUP BY season ORDER BY season DESC";

/// Observation store backed by SQLite.
///
/// The season of an observation is the year its timestamp starts with.
/// Records come back in insertion order.
pub struct Observations {
    pub conn: Connection,
}

impl Observations {
    pub fn new() -> Result<Self> {
        Ok(Observations { conn: Db::new()?.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Observations { conn: Db::open(path)?.conn })
    }

    /// Stores one observation under `study`, registering the study and plot if new.
    pub fn insert(&mut self, study: &str, record: &ObservationRecord) -> Result<()> {
        let tx = self.conn.transaction()?;
        insert_with(&tx, study, None, record)?;
        tx.commit()?;
        Ok(())
    }

    /// Stores a batch of `(study, record)` pairs in one transaction.
    pub fn insert_all<'a, I>(&mut self, source: Option<&str>, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'a str, &'a ObservationRecord)>,
    {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for (study, record) in rows {
            insert_with(&tx, study, source, record)?;
            inserted += 1;
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Every observation of the study named `study`.
    pub fn fetch_for_study(&self, study: &str) -> Result<Vec<ObservationRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_STUDY)?;
        let records = stmt.query_map([study], map_record)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Seasons with their observation counts, newest first.
    pub fn season_counts(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(SELECT_SEASONS)?;
        let seasons = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(seasons)
    }

    pub fn studies(&self) -> Result<Vec<studies::Study>> {
        Ok(studies::fetch_all(&self.conn)?)
    }
}

impl ObservationSource for Observations {
    fn field_count(&self) -> Result<usize> {
        Ok(studies::count(&self.conn)?)
    }

    fn plot_count(&self) -> Result<usize> {
        Ok(observation_units::count(&self.conn)?)
    }

    fn observations_for_season(&self, season: &str) -> Result<Vec<ObservationRecord>> {
        let mut stmt = self.conn.prepare(SELECT_BY_SEASON)?;
        let records = stmt.query_map([season], map_record)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn seasons(&self) -> Result<Vec<String>> {
        Ok(self.season_counts()?.into_iter().map(|(season, _)| season).collect())
    }
}

fn insert_with(conn: &Connection, study: &str, source: Option<&str>, record: &ObservationRecord) -> Result<()> {
    let study_id = studies::get_or_create(conn, study, source)?;
    observation_units::get_or_create(conn, study_id, &record.observation_unit_id)?;
    conn.execute(
        INSERT_OBSERVATION,
        params![
            study_id,
            record.observation_unit_id,
            record.variable_name,
            record.variable_format,
            record.value,
            record.timestamp,
            record.collector,
        ],
    )?;
    Ok(())
}

fn map_record(row: &Row) -> rusqlite::Result<ObservationRecord> {
    Ok(ObservationRecord {
        collector: row.get(0)?,
        timestamp: row.get(1)?,
        variable_format: row.get(2)?,
        observation_unit_id: row.get(3)?,
        variable_name: row.get(4)?,
        value: row.get(5)?,
    })
}
