// Import necessary libraries and modules for file I/O and serialization.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    app_state::Tab,
    catalog::DecodePolicy,
    error::Result,
    resources::{SharedResources, resources_for},
};

pub const SETTINGS_FILE: &str = "settings.json";

// Root of everything the tracker writes: settings and the log file.
pub fn get_data_dir() -> PathBuf {
    match dir::home_dir() {
        Some(home) => home.join("dbd_tracker").join("data"),
        None => PathBuf::from("./data"),
    }
}

// Define a structure to hold application settings with serialization and deserialization capabilities.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub data_dir: Option<PathBuf>, // Directory whose files shadow the bundled content.
    pub skip_invalid_records: bool, // Keep the valid records of a partially broken catalog.
    pub debug_mode: bool,          // Debug level logging.
    pub start_tab: Tab,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        get_data_dir().join(SETTINGS_FILE)
    }

    // Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_settings_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Using default settings, {} unavailable: {e}", path.display());
                Self::default()
            }
        }
    }

    // Save current settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::default_path())
    }

    pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        fs::write(path, data)?;
        Ok(())
    }

    pub fn decode_policy(&self) -> DecodePolicy {
        if self.skip_invalid_records {
            DecodePolicy::SkipInvalid
        } else {
            DecodePolicy::Strict
        }
    }

    pub fn resources(&self) -> SharedResources {
        resources_for(self.data_dir.as_deref())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug_mode {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_a_file() {
        let dir = tempfile::tempdir().expect("Expected a temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            data_dir: Some(PathBuf::from("/tmp/mods")),
            skip_invalid_records: true,
            debug_mode: true,
            start_tab: Tab::Items,
        };

        settings.save_to_file(&path).expect("Expected settings to save");
        let loaded = Settings::load_settings_from_file(&path).expect("Expected settings to load");
        assert_eq!(loaded, settings);
        assert_eq!(loaded.decode_policy(), DecodePolicy::SkipInvalid);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"debug_mode": true}"#).expect("Expected partial settings");
        assert!(settings.debug_mode);
        assert_eq!(settings.start_tab, Tab::Shop);
        assert_eq!(settings.decode_policy(), DecodePolicy::Strict);
        assert_eq!(settings.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Expected a temp dir");
        assert!(Settings::load_settings_from_file(dir.path().join("absent.json")).is_err());
    }
}
