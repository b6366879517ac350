//! Application state management.

use std::sync::Arc;

use crate::kv::{FjallStore, KeyValueStore, KvError};
use crate::puzzle::PuzzleService;
use crate::share::ShareService;

use super::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Share lookup and write path.
    pub shares: ShareService,
    /// Daily puzzle delivery.
    pub puzzles: PuzzleService,
}

impl AppState {
    /// Create state from configuration, opening the store if one is set.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let store = match &config.store {
            Some(store_config) => {
                let path = std::path::Path::new(&store_config.path);
                let store =
                    FjallStore::open_or_init(path).map_err(|e| StateError::OpenStore {
                        path: store_config.path.clone(),
                        source: e,
                    })?;
                Some(Arc::new(store) as Arc<dyn KeyValueStore>)
            }
            None => None,
        };

        Ok(Self::with_store(store))
    }

    /// Create state over an already-built store capability (or none).
    pub fn with_store(store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self {
            shares: ShareService::new(store.clone()),
            puzzles: PuzzleService::new(store),
        }
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open or initialize the store.
    OpenStore { path: String, source: KvError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenStore { path, source } => {
                write!(f, "Failed to open store at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}
