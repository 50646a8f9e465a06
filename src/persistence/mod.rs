//! High score persistence
//!
//! The game persists a single integer: the best score ever reached. A store
//! that has never been written reads back as `Ok(None)`, which callers treat
//! the same as an unavailable store.
//!
//! Backends:
//! - [`MemoryStore`]: process-local, for tests and headless runs
//! - [`JsonFileStore`]: JSON file on disk (native)
//! - [`LocalStorageStore`]: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::fmt;

/// Storage error types
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// File or key not found
    NotFound(String),
    /// I/O error
    Io(String),
    /// Serialization/deserialization error
    Serde(String),
    /// Backend not available in this environment
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(what) => write!(f, "not found: {}", what),
            StorageError::Io(msg) => write!(f, "I/O error: {}", msg),
            StorageError::Serde(msg) => write!(f, "serialization error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            _ => StorageError::Io(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serde(e.to_string())
    }
}

/// Where the best score lives between runs
pub trait HighScoreStore {
    /// Stored high score, `None` if nothing was ever saved
    fn get_high_score(&self) -> Result<Option<u32>, StorageError>;

    /// Overwrite the stored high score
    fn set_high_score(&mut self, score: u32) -> Result<(), StorageError>;
}

/// In-memory store (lost when the process exits)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: Option<u32>,
    /// Number of writes, for tests
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(score: u32) -> Self {
        Self {
            high_score: Some(score),
            writes: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn get_high_score(&self) -> Result<Option<u32>, StorageError> {
        Ok(self.high_score)
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), StorageError> {
        self.high_score = Some(score);
        self.writes += 1;
        Ok(())
    }
}

/// Read the stored high score, treating any failure as "none stored"
pub fn load_high_score(store: &dyn HighScoreStore) -> u32 {
    match store.get_high_score() {
        Ok(Some(score)) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("High score unavailable ({}), starting fresh", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn get_high_score(&self) -> Result<Option<u32>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set_high_score(&mut self, _score: u32) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_high_score(), Ok(None));
        store.set_high_score(17).unwrap();
        assert_eq!(store.get_high_score(), Ok(Some(17)));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_load_falls_back_to_zero() {
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
        assert_eq!(load_high_score(&MemoryStore::with_high_score(9)), 9);
        assert_eq!(load_high_score(&BrokenStore), 0);
    }

    #[test]
    fn test_io_error_conversion() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(StorageError::from(e), StorageError::NotFound(_)));

        let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(StorageError::from(e), StorageError::Io(_)));
    }

    #[test]
    fn test_display() {
        let e = StorageError::Serde("bad json".into());
        assert_eq!(e.to_string(), "serialization error: bad json");
    }
}
