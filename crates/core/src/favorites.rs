//! Client-side favorites list and theme preference.
//!
//! Both live in a string key-value store with the shape of browser local
//! storage. Callers own the store and pass it to whatever needs it.

use std::collections::HashMap;

const FAVORITES_KEY: &str = "favorites";
const DARK_MODE_KEY: &str = "darkMode";

/// String key-value storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str) -> bool;
}

/// In-memory storage, mostly for tests and single-process use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

/// Ordered list of favorite movie ids, stored as a JSON array.
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current favorites in insertion order. Unreadable data reads as empty.
    pub fn get(&self) -> Vec<String> {
        let Some(raw) = self.storage.get_item(FAVORITES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable favorites list");
                Vec::new()
            }
        }
    }

    /// Add a movie id. Returns false if it was already a favorite.
    pub fn add(&mut self, id: &str) -> bool {
        let mut ids = self.get();
        if ids.iter().any(|existing| existing == id) {
            return false;
        }
        ids.push(id.to_string());
        self.save(&ids);
        true
    }

    /// Remove a movie id. Returns false if it was not a favorite.
    pub fn remove(&mut self, id: &str) -> bool {
        let mut ids = self.get();
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return false;
        }
        self.save(&ids);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get().iter().any(|existing| existing == id)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn save(&mut self, ids: &[String]) {
        // A Vec<String> always serializes.
        let raw = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
        self.storage.set_item(FAVORITES_KEY, &raw);
    }
}

/// Dark-mode flag stored as `"true"` / `"false"`.
pub struct ThemePreference<S> {
    storage: S,
}

impl<S: KeyValueStorage> ThemePreference<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn dark_mode(&self) -> bool {
        self.storage.get_item(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.storage
            .set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        let enabled = !self.dark_mode();
        self.set_dark_mode(enabled);
        enabled
    }
}
