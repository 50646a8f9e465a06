//! Browser LocalStorage backend (wasm32)
//!
//! Stores the score as a plain decimal string under `maxScore`.

use super::{HighScoreStore, StorageError};

/// High score kept in `window.localStorage`
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "maxScore";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("localStorage".into()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn get_high_score(&self) -> Result<Option<u32>, StorageError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(Self::STORAGE_KEY)
            .map_err(|e| StorageError::Io(format!("{:?}", e)))?;
        match value {
            Some(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| StorageError::Serde(format!("{}: {:?}", e, text))),
            None => Ok(None),
        }
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .set_item(Self::STORAGE_KEY, &score.to_string())
            .map_err(|e| StorageError::Io(format!("{:?}", e)))?;
        log::info!("High score {} saved", score);
        Ok(())
    }
}
