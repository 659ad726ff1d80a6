//! limit and level store
//! keeps the last calibrated limits and the last used level in the sqlite kv table
use rusqlite::{params, OptionalExtension};

use crate::common::error::FixtureError;
use crate::common::sqlite::SqliteConnection;
use crate::entity::channel::{BrightnessLevel, LimitSet};
use crate::{debug, warn};

const LOG_TAG: &str = "LimitDao";

const LIMITS_KEY: &str = "LIMITS";
const LEVEL_KEY: &str = "LEVEL";

pub struct LimitDao {
    sqlite: SqliteConnection,
}

impl LimitDao {
    pub fn new(file_name: &str) -> Result<Self, FixtureError> {
        Ok(LimitDao {
            sqlite: SqliteConnection::new(file_name)?,
        })
    }

    /// last calibrated limits, a malformed record is treated as missing
    pub fn load_limits(&self) -> Result<Option<LimitSet>, FixtureError> {
        let raw = match self.get_value(LIMITS_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str::<LimitSet>(&raw) {
            Ok(limits) => Ok(Some(limits)),
            Err(e) => {
                warn!(LOG_TAG, "stored limits {} are malformed: {}", raw, e);
                Ok(None)
            }
        }
    }

    pub fn save_limits(&self, limits: &LimitSet) -> Result<(), FixtureError> {
        let raw = serde_json::to_string(limits)?;
        self.set_value(LIMITS_KEY, &raw)
    }

    /// last used level, a malformed record is treated as missing
    pub fn load_level(&self) -> Result<Option<BrightnessLevel>, FixtureError> {
        let raw = match self.get_value(LEVEL_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str::<BrightnessLevel>(&raw) {
            Ok(level) => Ok(Some(level)),
            Err(e) => {
                warn!(LOG_TAG, "stored level {} is malformed: {}", raw, e);
                Ok(None)
            }
        }
    }

    pub fn save_level(&self, level: BrightnessLevel) -> Result<(), FixtureError> {
        let raw = serde_json::to_string(&level)?;
        self.set_value(LEVEL_KEY, &raw)
    }

    fn get_value(&self, key: &str) -> Result<Option<String>, FixtureError> {
        let conn = self.sqlite.open()?;
        let value: Option<String> = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set_value(&self, key: &str, value: &str) -> Result<(), FixtureError> {
        let conn = self.sqlite.open()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        debug!(LOG_TAG, "stored {} = {}", key, value);
        Ok(())
    }
}
