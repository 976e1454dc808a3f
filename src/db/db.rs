use crate::db::migrations::init_with_migrations;
use crate::libs::{config::Config, data_storage::DataStorage, messages::Message};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "fieldstat.db";

/// Open observation database with an up-to-date schema.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured in [`Config`], or the one in the data directory.
    pub fn new() -> Result<Db> {
        Self::open(&Self::path()?)
    }

    /// Location of the default database.
    pub fn path() -> Result<PathBuf> {
        match Config::read()?.database {
            Some(path) => Ok(path),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Opens (creating if needed) the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }

    /// Opens the default database without touching its schema.
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::path()?)?)
    }
}
