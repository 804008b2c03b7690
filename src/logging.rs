use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

pub const LOG_FILE: &str = "log.txt";

#[derive(Debug)]
struct FileLogger {
    log_file: PathBuf,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "{} {} - {}\n",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_file)
            {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Installs the file logger. Only the first call in a process succeeds.
pub fn init(log_dir: &Path, level: LevelFilter) -> Result<()> {
    create_dir_all(log_dir)?;

    LOGGER
        .set(FileLogger {
            log_file: log_dir.join(LOG_FILE),
        })
        .map_err(|_| AppError::LoggerAlreadySet)?;

    let logger = LOGGER.get().ok_or(AppError::LoggerAlreadySet)?;
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::fs;

    // The only test in this binary that installs the global logger.
    #[test]
    fn logger_records_settings_fallback_and_level_changes() {
        let dir = tempfile::tempdir().expect("Expected a temp dir");
        init(dir.path(), LevelFilter::Info).expect("Expected the logger to install");
        assert!(matches!(
            init(dir.path(), LevelFilter::Info),
            Err(AppError::LoggerAlreadySet)
        ));

        let settings = Settings::load_from(dir.path().join("absent.json"));
        assert_eq!(settings, Settings::default());

        log::debug!("hidden below info");
        set_level(LevelFilter::Debug);
        log::debug!("shown at debug");

        let log = fs::read_to_string(dir.path().join(LOG_FILE)).expect("Expected a log file");
        assert!(log.contains("INFO - Using default settings"));
        assert!(!log.contains("hidden below info"));
        assert!(log.contains("DEBUG - shown at debug"));
    }
}
