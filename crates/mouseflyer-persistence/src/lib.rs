use std::path::PathBuf;

use thiserror::Error;

pub mod codec;
pub mod store;

pub use codec::{
    load_global_settings, load_key_bindings, load_profile, load_profile_manager, profile_key,
    store_global_settings, store_key_bindings, store_profile, store_profile_manager,
};
pub use store::ConfigStore;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
