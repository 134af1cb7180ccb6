//! Best-score persistence
//!
//! Backends:
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `FileStore`: JSON file on native targets
//! - `LocalStorageStore`: browser LocalStorage on wasm
//!
//! Backends swallow their own I/O failures: a missing or corrupt record
//! reads as 0 and a failed write is logged.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};

/// Stored record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best: u32,
}

/// Where the best score lives between sessions
pub trait BestScoreStore {
    /// Persisted best, or 0 if absent or unreadable
    fn read_best(&self) -> u32;

    fn write_best(&mut self, best: u32);

    /// Forget the persisted best
    fn clear_best(&mut self) {
        self.write_best(0);
    }
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
    /// Number of writes so far
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl BestScoreStore for MemoryStore {
    fn read_best(&self) -> u32 {
        self.best
    }

    fn write_best(&mut self, best: u32) {
        self.best = best;
        self.writes += 1;
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn read_best(&self) -> u32 {
        (**self).read_best()
    }

    fn write_best(&mut self, best: u32) {
        (**self).write_best(best)
    }

    fn clear_best(&mut self) {
        (**self).clear_best()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read_best(), 0);
        store.write_best(12);
        assert_eq!(store.read_best(), 12);
        store.clear_best();
        assert_eq!(store.read_best(), 0);
        assert_eq!(store.writes, 2);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn BestScoreStore> = Box::new(MemoryStore::with_best(4));
        assert_eq!(store.read_best(), 4);
        store.write_best(9);
        assert_eq!(store.read_best(), 9);
    }
}
