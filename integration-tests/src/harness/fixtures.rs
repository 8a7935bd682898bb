use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A log file (and optional config) in a throwaway directory.
pub struct LogFixture {
    dir: TempDir,
    log: PathBuf,
}

impl LogFixture {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log = dir.path().join("debug.log");
        fs::write(&log, contents).expect("failed to write log fixture");

        Self { dir, log }
    }

    /// Builds a log from `(unit, level, charm, message)` rows, one line each.
    pub fn from_rows(rows: &[(&str, &str, &str, &str)]) -> Self {
        let contents: String = rows
            .iter()
            .enumerate()
            .map(|(i, (unit, level, charm, message))| {
                format!("{unit}: 01:00:{:02} {level} {charm} {message}\n", i % 60)
            })
            .collect();

        Self::new(&contents)
    }

    pub fn log_path(&self) -> &Path {
        &self.log
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("charmstat.toml");
        fs::write(&path, contents).expect("failed to write config fixture");
        path
    }
}
