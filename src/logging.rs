use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger from `RUST_LOG`, falling back to "info".
///
/// Without a directory logs go to stderr in color. With one they go to rotated
/// files: 10 MB each, numbered, the last 7 kept. Keep the returned handle alive.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str("info")?;

    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let handle = setup_logging(Some(dir.path())).unwrap();

        log::info!("logging test line");
        handle.flush();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(!files.is_empty(), "a log file should be created");
        handle.shutdown();
    }
}
