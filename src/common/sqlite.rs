use rusqlite::{Connection, Result};
use log;

/// sqlite file holding the key value table
pub struct SqliteConnection {
    // sqlite file path
    file_name: String,
}

impl SqliteConnection {
    pub fn new(file_name: &str) -> Result<Self> {
        let ret = SqliteConnection {
            file_name: file_name.to_string(),
        };
        ret.init_tables()?;
        Ok(ret)
    }

    pub fn open(&self) -> Result<Connection> {
        Connection::open(&self.file_name)
    }

    /// create tables when missing
    fn init_tables(&self) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL
            )",
            (),
        )?;
        log::debug!("sqlite table kv ready in {}", self.file_name);
        Ok(())
    }
}
