//! Per-cube local-storage helpers.
//!
//! UI state (hidden columns, filter text, and the like) is keyed by a
//! feature prefix plus the application and cube the user is looking at.
//! Values are stored as JSON; storing an empty object is treated as a
//! delete so stale keys don't accumulate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Compute the storage key for a feature prefix and the selected app/cube.
///
/// App and cube names are case-insensitive throughout the editor, so both
/// are lowercased to keep the keyspace canonical.
#[must_use]
pub fn storage_key(prefix: &str, app: &str, cube: &str) -> String {
    format!("{}:{}:{}", prefix, app.to_lowercase(), cube.to_lowercase())
}

/// Coordinates of an application snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppId {
    pub app: String,
    pub version: String,
    pub status: String,
    pub branch: String,
}

impl AppId {
    #[must_use]
    pub fn new(app: &str, version: &str, status: &str, branch: &str) -> Self {
        AppId {
            app: app.to_string(),
            version: version.to_string(),
            status: status.to_string(),
            branch: branch.to_string(),
        }
    }
}

/// String key-value persistence seam.
///
/// Backed by `localStorage` in the browser and by [`MemoryStore`] in tests
/// and on native targets.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Store a value as JSON under `key`, or delete the key.
///
/// `None` and values that serialize to an empty JSON object both remove the
/// key; anything else is stored serialized.
///
/// # Errors
/// Returns an error if the value fails to serialize.
pub fn save_or_delete<S, T>(store: &mut S, key: &str, value: Option<&T>) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let Some(value) = value else {
        store.remove(key);
        return Ok(());
    };

    let json = serde_json::to_value(value)?;
    let empty = match &json {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };

    if empty {
        store.remove(key);
    } else {
        store.set(key, &json.to_string());
    }
    Ok(())
}

/// In-memory [`KeyValueStore`] for tests and native targets.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let _ = self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        let _ = self.entries.remove(key);
    }
}

/// `localStorage`-backed [`KeyValueStore`] (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub struct DomStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl DomStorage {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    /// Returns an error when no window is available or the browser denies
    /// storage access (e.g. certain private-browsing modes).
    pub fn local() -> Result<Self> {
        use crate::error::GridclipError;

        let window =
            web_sys::window().ok_or_else(|| GridclipError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| GridclipError::Storage("localStorage unavailable".to_string()))?;
        Ok(DomStorage { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for DomStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
