//! Typed access to the persisted session tokens.

use crate::{ClientStorage, StorageKeys, StorageResult};

/// Tokens as read back from durable storage. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl StoredTokens {
    /// A stored session counts only if the access token is present and
    /// non-empty. A lone refresh token never does.
    pub fn has_session(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// High-level API for persisting the access/refresh token pair.
pub struct TokenVault {
    storage: Box<dyn ClientStorage>,
}

impl TokenVault {
    /// Create a new vault over the given storage backend
    pub fn new(storage: Box<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// Read both tokens.
    pub fn load(&self) -> StorageResult<StoredTokens> {
        Ok(StoredTokens {
            access_token: self.storage.get(StorageKeys::ACCESS_TOKEN)?,
            refresh_token: self.storage.get(StorageKeys::REFRESH_TOKEN)?,
        })
    }

    /// Persist both tokens in one write. On error neither token changes.
    pub fn store(&self, access_token: &str, refresh_token: &str) -> StorageResult<()> {
        self.storage.set_many(&[
            (StorageKeys::ACCESS_TOKEN, access_token),
            (StorageKeys::REFRESH_TOKEN, refresh_token),
        ])
    }

    /// Persist a new access token, leaving the refresh token as is.
    pub fn store_access_token(&self, access_token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::ACCESS_TOKEN, access_token)
    }

    /// Remove both tokens. Attempts both removals even if the first fails
    /// and reports the first error.
    pub fn clear(&self) -> StorageResult<()> {
        let access = self.storage.remove(StorageKeys::ACCESS_TOKEN);
        let refresh = self.storage.remove(StorageKeys::REFRESH_TOKEN);
        access?;
        refresh?;
        Ok(())
    }
}
