//! Per-session widget state store.
//!
//! Keyed JSON values round-tripped through serde. Widget state (for example
//! chart selections) is stored under the widget key and survives across
//! script runs within the same session.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiResult;

/// Session-scoped key/value store.
#[derive(Clone, Default)]
pub struct SessionState {
    values: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value deserialized into the requested type.
    /// Returns `None` when the key is missing or the value does not fit.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        let value = values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(typed) => Some(typed),
            Err(e) => {
                tracing::warn!("Session state value for '{}' has unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Get the raw JSON value for a key.
    pub fn get_raw(&self, key: &str) -> Option<serde_json::Value> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    /// Store a value under a key, serialized to JSON.
    pub fn set<T: Serialize>(&self, key: impl Into<String>, value: &T) -> ApiResult<()> {
        let json = serde_json::to_value(value)?;
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.into(), json);
        Ok(())
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.contains_key(key)
    }

    /// Remove a key, returning its raw value if present.
    pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Marker {
        count: u32,
        label: String,
    }

    #[test]
    fn test_set_and_get_typed() {
        let state = SessionState::new();
        let marker = Marker {
            count: 3,
            label: "selected".to_string(),
        };
        state.set("chart_1", &marker).unwrap();

        assert_eq!(state.get::<Marker>("chart_1"), Some(marker));
        assert!(state.contains("chart_1"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_missing_key_returns_none() {
        let state = SessionState::new();
        assert_eq!(state.get::<Marker>("missing"), None);
        assert_eq!(state.get_raw("missing"), None);
        assert!(!state.contains("missing"));
    }

    #[test]
    fn test_shape_mismatch_returns_none() {
        let state = SessionState::new();
        state.set("key", &serde_json::json!("just a string")).unwrap();
        assert_eq!(state.get::<Marker>("key"), None);
        // The raw value is still there
        assert!(state.get_raw("key").is_some());
    }

    #[test]
    fn test_remove() {
        let state = SessionState::new();
        state.set("key", &serde_json::json!(42)).unwrap();
        assert_eq!(state.remove("key"), Some(serde_json::json!(42)));
        assert!(state.is_empty());
    }
}
