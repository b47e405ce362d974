//! Configuration management

use crate::{Result, VocalizeError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser user agent sent with article downloads and speech requests
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

/// Application configuration
///
/// Holds the speech service settings, network limits and the directory
/// where audio and text outputs are written.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.vocalize.cfg unless overridden)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| VocalizeError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_ini();
            default
                .write_to_file(&path)
                .map_err(|e| VocalizeError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| VocalizeError::Config(format!("Failed to save config: {}", e)))
    }

    /// Default config file path (~/.vocalize.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vocalize.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_ini() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("tld", "com")
            .set("slow", "false");

        ini.with_section(Some("network"))
            .set("timeout", "30")
            .set("user_agent", DEFAULT_USER_AGENT);

        ini.with_section(Some("output")).set("directory", ".");

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Top-level domain of the translate host used for speech
    pub fn tld(&self) -> String {
        let tld = self.get_string("speech", "tld", "com");
        let tld = tld.trim().trim_start_matches('.');
        if tld.is_empty() {
            "com".to_string()
        } else {
            tld.to_string()
        }
    }

    /// Should speech be requested at the slow rate?
    pub fn slow(&self) -> bool {
        self.get_bool("speech", "slow", false)
    }

    /// Network timeout for article downloads and speech requests
    pub fn timeout(&self) -> Duration {
        let secs = self.get_int("network", "timeout", 30);
        Duration::from_secs(if secs > 0 { secs as u64 } else { 30 })
    }

    pub fn user_agent(&self) -> String {
        self.get_string("network", "user_agent", DEFAULT_USER_AGENT)
    }

    /// Directory receiving `<name>.mp3` and `<name>.txt`
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.get_string("output", "directory", "."))
    }
}

impl Default for Config {
    /// In-memory defaults, never written to disk unless saved
    fn default() -> Self {
        Self {
            ini: Self::default_ini(),
            path: Self::config_path(),
        }
    }
}
