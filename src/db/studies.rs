use rusqlite::{params, Connection, OptionalExtension, Result};

const COUNT_STUDIES: &str = "SELECT COUNT(*) FROM studies";
const SELECT_STUDY_ID: &str = "SELECT id FROM studies WHERE study_name = ?1";
const INSERT_STUDY: &str = "INSERT INTO studies (study_name, source) VALUES (?1, ?2)";
const SELECT_STUDIES: &str = "SELECT id, study_name, source, date_import FROM studies ORDER BY id";

/// A field (study) known to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Study {
    pub id: i64,
    pub name: String,
    pub source: Option<String>,
    pub date_import: String,
}

pub fn count(conn: &Connection) -> Result<usize> {
    conn.query_row(COUNT_STUDIES, [], |row| row.get::<_, i64>(0)).map(|n| n as usize)
}

/// Id of the study named `name`, inserting it first if needed.
pub fn get_or_create(conn: &Connection, name: &str, source: Option<&str>) -> Result<i64> {
    if let Some(id) = conn.query_row(SELECT_STUDY_ID, [name], |row| row.get(0)).optional()? {
        return Ok(id);
    }
    conn.execute(INSERT_STUDY, params![name, source])?;
    Ok(conn.last_insert_rowid())
}

pub fn fetch_all(conn: &Connection) -> Result<Vec<Study>> {
    let mut stmt = conn.prepare(SELECT_STUDIES)?;
    let studies = stmt
        .query_map([], |row| {
            Ok(Study {
                id: row.get(0)?,
                name: row.get(1)?,
                source: row.get(2)?,
                date_import: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(studies)
}
