use rusqlite::{Connection, Result};
use std::path::Path;

pub const DB_FILE_NAME: &str = "clockin.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
