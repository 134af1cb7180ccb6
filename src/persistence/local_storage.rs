//! Browser LocalStorage backend

use super::{BestRecord, BestScoreStore};

/// Best score persisted to LocalStorage
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "flap_gates.best.v1";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl BestScoreStore for LocalStorageStore {
    fn read_best(&self) -> u32 {
        let Some(storage) = Self::storage() else {
            return 0;
        };
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<BestRecord>(&json) {
                Ok(record) => {
                    log::info!("Loaded best score {}", record.best);
                    record.best
                }
                Err(_) => {
                    log::warn!("Ignoring corrupt best score");
                    0
                }
            },
            _ => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn write_best(&mut self, best: u32) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(&BestRecord { best }) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save best score");
                } else {
                    log::info!("Best score saved ({})", best);
                }
            }
        }
    }

    fn clear_best(&mut self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(Self::STORAGE_KEY);
            log::info!("Best score cleared");
        }
    }
}
