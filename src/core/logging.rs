//! Logging initialization (console + timestamped file)

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Builds the path of a fresh log file inside `log_dir`.
///
/// One file per process start, named after the startup timestamp, the
/// same way the rest of the deployment tooling expects (`logs/<ts>.log`).
pub fn log_file_path(log_dir: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    Path::new(log_dir).join(format!("{stamp}.log"))
}

/// Initialize logger for both console and file output
///
/// Creates `log_dir` if needed and opens a timestamped log file in it.
/// Dispatcher event-loop noise is filtered out of both sinks; errors
/// from the update listener are still surfaced by the error handler.
///
/// # Errors
/// Fails if the log directory or file cannot be created, or if a global
/// logger is already installed.
pub fn init_logger(log_dir: &str) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let path = log_file_path(log_dir);
    let log_file = File::create(&path)?;

    let config = ConfigBuilder::new()
        .add_filter_ignore_str("teloxide::dispatching")
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, config, log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_is_inside_dir_with_log_extension() {
        let path = log_file_path("logs");
        assert!(path.starts_with("logs"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
    }

    #[test]
    fn test_init_logger_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        // A global logger may already be installed by another test; the
        // directory must exist either way.
        let result = init_logger(log_dir.to_str().unwrap());
        assert!(log_dir.is_dir());
        if let Ok(path) = result {
            assert!(path.is_file());
        }
    }
}
