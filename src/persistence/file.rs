//! JSON file backend for native builds

use std::path::{Path, PathBuf};

use super::{BestRecord, BestScoreStore};

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn read_best(&self) -> u32 {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                return 0;
            }
        };
        match serde_json::from_str::<BestRecord>(&json) {
            Ok(record) => {
                log::info!("Loaded best score {}", record.best);
                record.best
            }
            Err(e) => {
                log::warn!("Ignoring corrupt best score file: {}", e);
                0
            }
        }
    }

    fn write_best(&mut self, best: u32) {
        let record = BestRecord { best };
        let result = serde_json::to_string(&record)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        match result {
            Ok(()) => log::info!("Best score saved ({})", best),
            Err(e) => log::warn!("Failed to save best score: {}", e),
        }
    }

    fn clear_best(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::info!("Best score cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to clear best score: {}", e),
        }
    }
}
