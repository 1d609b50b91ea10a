use std::fs;
use std::path::PathBuf;

use roster_common::config::Config;
use roster_core::roster::Roster;
use tempfile::TempDir;

/// A data directory that is removed when dropped.
pub struct Workspace {
    dir: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = Config::new(dir.path());
        Self { dir, config }
    }

    pub fn seed(&self, file: &str, content: &str) {
        fs::write(self.path(file), content).expect("failed to seed store");
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.path(file)).unwrap_or_default()
    }

    pub fn open(&self) -> anyhow::Result<Roster> {
        Ok(Roster::open(&self.config)?)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
