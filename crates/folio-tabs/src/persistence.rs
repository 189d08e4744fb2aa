//! Tab state persistence
//!
//! The whole `{tabs, activeTabId}` record is written as one JSON blob under
//! a namespace key and read back once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use folio_storage::KeyValueStore;

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

/// Persisted record. `active_tab_id` is empty when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub active_tab_id: String,
}

impl TabSnapshot {
    pub fn new(tabs: Vec<Tab>, active_tab_id: Option<&str>) -> Self {
        Self {
            tabs,
            active_tab_id: active_tab_id.unwrap_or_default().to_string(),
        }
    }

    /// Reject records whose ids repeat.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(TabError::DuplicateId(tab.id.clone()));
            }
        }
        Ok(())
    }

    /// The active id if it names a tab in the record.
    pub fn active_tab_id(&self) -> Option<&str> {
        let id = self.active_tab_id.as_str();
        self.tabs.iter().any(|t| t.id == id).then_some(id)
    }
}

/// Reads and writes [`TabSnapshot`]s through a key-value store.
#[derive(Clone)]
pub struct TabPersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl TabPersistence {
    pub const DEFAULT_KEY: &'static str = "tab-storage";

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, Self::DEFAULT_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn try_load(&self) -> Result<Option<TabSnapshot>> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let snapshot: TabSnapshot = serde_json::from_str(&json)?;
        snapshot.validate()?;
        Ok(Some(snapshot))
    }

    /// Load the stored record. Absent and corrupt records both yield `None`.
    pub fn load(&self) -> Option<TabSnapshot> {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding unreadable tab state");
                None
            }
        }
    }

    pub fn try_save(&self, snapshot: &TabSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }

    /// Best-effort write; failures are logged and otherwise ignored.
    pub fn save(&self, snapshot: &TabSnapshot) {
        if let Err(e) = self.try_save(snapshot) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist tab state");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "Failed to clear tab state");
        }
    }
}

/// Store whose every call fails.
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> folio_storage::Result<Option<String>> {
        Err(folio_storage::StorageError::Io(std::io::Error::other("read failed")))
    }

    fn set(&self, _key: &str, _value: &str) -> folio_storage::Result<()> {
        Err(folio_storage::StorageError::Io(std::io::Error::other("write failed")))
    }

    fn remove(&self, _key: &str) -> folio_storage::Result<()> {
        Err(folio_storage::StorageError::Io(std::io::Error::other("remove failed")))
    }
}
