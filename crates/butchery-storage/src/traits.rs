//! Storage trait definitions.

use crate::StorageResult;
use std::sync::Arc;
use tracing::warn;

/// Durable client-side key/value storage.
///
/// Plain get/set/remove semantics over string values: no encryption and
/// no expiry metadata.
pub trait ClientStorage: Send + Sync {
    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Remove a value. Returns whether the key existed.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Store several values as one unit. On error no entry is left
    /// half-updated: keys already written get their previous value back.
    ///
    /// Backends that can write everything at once override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let previous = entries
            .iter()
            .map(|(key, _)| self.get(key))
            .collect::<StorageResult<Vec<_>>>()?;

        for (written, (key, value)) in entries.iter().enumerate() {
            if let Err(e) = self.set(key, value) {
                for ((key, _), before) in entries.iter().zip(&previous).take(written + 1) {
                    let restored = match before {
                        Some(value) => self.set(key, value),
                        None => self.remove(key).map(|_| ()),
                    };
                    if let Err(restore_err) = restored {
                        warn!(key = %key, error = %restore_err, "Failed to roll back partial write");
                    }
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Lets a caller keep a handle on the storage it hands to a vault.
impl<T: ClientStorage + ?Sized> ClientStorage for Arc<T> {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        (**self).remove(key)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        (**self).set_many(entries)
    }
}
