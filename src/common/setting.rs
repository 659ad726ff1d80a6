//! setting config file
//! loaded from `config_<ENV>.toml`, falls back to built-in defaults when the file is absent

use std::{fs::File, io::Read, path::Path};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::env;

use super::error::FixtureError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Env {
    pub env: String,
    pub log_level: String,
}

impl Default for Env {
    fn default() -> Self {
        Env {
            env: String::from("dev"),
            log_level: String::from("info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    Http,
    Dummy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Device {
    pub mode: DeviceMode,
    pub base_url: String,
    /// wait after every successful write before the next call
    pub settle_ms: u64,
    /// limit status field of each channel, in channel order
    pub limit_pins: [String; 4],
    /// trip thresholds used by the dummy fixture
    pub dummy_thresholds: [u8; 4],
}

impl Default for Device {
    fn default() -> Self {
        Device {
            mode: DeviceMode::Http,
            base_url: String::from("http://192.168.1.50"),
            settle_ms: 5,
            limit_pins: [
                String::from("D5"),
                String::from("D6"),
                String::from("D7"),
                String::from("D8"),
            ],
            dummy_thresholds: [228, 214, 185, 184],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Store {
    pub path: String,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            path: String::from("fixture_calib.db"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// runs used by `calib` and by the colour fallback
    pub quick_runs: usize,
    /// runs used by `long`
    pub long_runs: usize,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            quick_runs: 5,
            long_runs: 100,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub env: Env,
    pub device: Device,
    pub store: Store,
    pub calibration: Calibration,
    /// file the settings came from, `None` when running on defaults
    #[serde(skip)]
    pub config_file: Option<String>,
}

/// `config_<ENV>.toml`, ENV defaults to `dev`
pub fn config_file_path() -> String {
    let env = env::var("ENV").unwrap_or_else(|_| String::from("dev"));
    format!("config_{}.toml", env)
}

impl Settings {
    pub fn get<'a>() -> Result<&'a Self, FixtureError> {
        // lazily loaded once per process, a load failure is kept as its message
        lazy_static! {
            static ref CACHE: Result<Settings, String> = Settings::load(&config_file_path()).map_err(|e| match e {
                FixtureError::Config(msg) => msg,
                other => other.to_string(),
            });
        }
        CACHE.as_ref().map_err(|msg| FixtureError::Config(msg.clone()))
    }

    /// read `file_path`, defaults only when the file does not exist
    pub fn load(file_path: &str) -> Result<Self, FixtureError> {
        Ok(Settings::from_file(file_path)?.unwrap_or_default())
    }

    /// returns `Ok(None)` when the file does not exist
    pub fn from_file(file_path: &str) -> Result<Option<Self>, FixtureError> {
        if !Path::new(file_path).exists() {
            return Ok(None);
        }

        let mut file = File::open(file_path)
            .map_err(|e| FixtureError::Config(format!("cannot open {}: {}", file_path, e)))?;
        let mut str_val = String::new();
        file.read_to_string(&mut str_val)
            .map_err(|e| FixtureError::Config(format!("cannot read {}: {}", file_path, e)))?;

        let mut settings: Settings = toml::from_str(&str_val)
            .map_err(|e| FixtureError::Config(format!("{} format invalid: {}", file_path, e)))?;
        settings.config_file = Some(file_path.to_string());
        Ok(Some(settings))
    }

    pub fn from_toml(str_val: &str) -> Result<Self, FixtureError> {
        toml::from_str(str_val)
            .map_err(|e| FixtureError::Config(format!("config file format invalid: {}", e)))
    }
}
