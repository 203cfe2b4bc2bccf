//! Durable client storage for the storefront session.
//!
//! This crate provides:
//! - [`ClientStorage`], the get/set/remove abstraction the session store
//!   persists through
//! - [`FileStorage`], a JSON-file implementation under the data directory
//! - [`MemoryStorage`], a process-local implementation for tests and for
//!   contexts where durable storage is unavailable
//! - [`TokenVault`], the typed view over the two token keys

mod file;
mod keys;
mod memory;
mod tokens;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use tokens::{StoredTokens, TokenVault};
pub use traits::ClientStorage;

use butchery_config_and_utils::Paths;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing store could not be used at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default durable storage at `paths.storage_file()`.
pub fn create_storage(paths: &Paths) -> StorageResult<Box<dyn ClientStorage>> {
    Ok(Box::new(FileStorage::new(paths.storage_file())))
}

/// Create a TokenVault over the default durable storage.
pub fn create_token_vault(paths: &Paths) -> StorageResult<TokenVault> {
    let storage = create_storage(paths)?;
    Ok(TokenVault::new(storage))
}
