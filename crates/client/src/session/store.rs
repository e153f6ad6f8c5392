//! File-backed key-value session store.
//!
//! The persistence surface the mobile runtime provided (a two-key string
//! store for `token` and `isLoggedIn`, plus a `userDetails` key cleared on
//! logout) mapped onto a single flat JSON file. No schema versioning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Keys the session store uses.
pub mod keys {
    /// Opaque login token from the auth endpoint.
    pub const TOKEN: &str = "token";

    /// Credentialed-login flag, stored as the strings `"true"`/`"false"`.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Cleared on logout; otherwise unused by this client.
    pub const USER_DETAILS: &str = "userDetails";
}

/// Async string key-value store persisted as one JSON object on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A store persisting to `session.json` under `state_dir`.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join("session.json"),
        }
    }

    /// Read one key. A missing file reads as a missing key.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or a corrupt store file.
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    /// Write one key, keeping all others.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or a corrupt store file.
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }

    /// Remove one key; removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or a corrupt store file.
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all().await?;
        if entries.remove(key).is_some() {
            self.write_all(&entries).await?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StoreError::Parse),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::Persistence(e)),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn temp_store() -> (SessionStore, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = SessionStore::new(dir.path());
        (store, dir)
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_missing_key() {
        let (store, _dir) = temp_store();
        let value = store.get_item(keys::TOKEN).await.expect("readable");
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_set_get_remove_roundtrip() {
        let (store, _dir) = temp_store();

        store.set_item(keys::TOKEN, "abc123").await.expect("write");
        store.set_item(keys::IS_LOGGED_IN, "true").await.expect("write");

        assert_eq!(
            store.get_item(keys::TOKEN).await.expect("read"),
            Some("abc123".to_string())
        );
        assert_eq!(
            store.get_item(keys::IS_LOGGED_IN).await.expect("read"),
            Some("true".to_string())
        );

        store.remove_item(keys::TOKEN).await.expect("remove");
        assert_eq!(store.get_item(keys::TOKEN).await.expect("read"), None);
        // Other keys survive a removal.
        assert_eq!(
            store.get_item(keys::IS_LOGGED_IN).await.expect("read"),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let (store, _dir) = temp_store();
        store.remove_item("nonexistent").await.expect("no-op");
    }

    #[tokio::test]
    async fn test_corrupt_store_surfaces_parse_error() {
        let (store, dir) = temp_store();
        tokio::fs::write(dir.path().join("session.json"), b"not json")
            .await
            .expect("write");

        let err = store.get_item(keys::TOKEN).await.expect_err("must fail");
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
