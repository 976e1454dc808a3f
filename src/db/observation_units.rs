use rusqlite::{params, Connection, OptionalExtension, Result};

const COUNT_UNITS: &str = "SELECT COUNT(*) FROM observation_units";
const SELECT_UNIT_ID: &str = "SELECT id FROM observation_units WHERE study_id = ?1 AND observation_unit_db_id = ?2";
const INSERT_UNIT: &str = "INSERT INTO observation_units (study_id, observation_unit_db_id) VALUES (?1, ?2)";

/// Number of plots across all studies.
pub fn count(conn: &Connection) -> Result<usize> {
    conn.query_row(COUNT_UNITS, [], |row| row.get::<_, i64>(0)).map(|n| n as usize)
}

/// Row id of plot `unit` in study `study_id`, inserting it first if needed.
pub fn get_or_create(conn: &Connection, study_id: i64, unit: &str) -> Result<i64> {
    if let Some(id) = conn.query_row(SELECT_UNIT_ID, params![study_id, unit], |row| row.get(0)).optional()? {
        return Ok(id);
    }
    conn.execute(INSERT_UNIT, params![study_id, unit])?;
    Ok(conn.last_insert_rowid())
}
