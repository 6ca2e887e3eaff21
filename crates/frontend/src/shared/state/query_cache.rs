use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use serde_json::Value;

/// Кэш результатов запросов, разделяемый списками и формами
///
/// Ключи не пишутся литералами по коду: каждый справочник порождает свои
/// ключи из дескриптора, иначе опечатка в строке оставляет кэш навсегда
/// актуальным.
#[derive(Debug, Clone, Default)]
struct QueryCacheState {
    entries: HashMap<String, Value>,
    stale: HashSet<String>,
}

#[derive(Clone, Copy)]
pub struct QueryCacheService {
    state: RwSignal<QueryCacheState>,
}

impl QueryCacheService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(QueryCacheState::default()),
        }
    }

    /// Get the cached value for a key
    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.with(|s| s.entries.get(key).cloned())
    }

    /// Store a fresh value; clears the stale mark
    pub fn set(&self, key: &str, value: Value) {
        self.state.update(|s| {
            s.stale.remove(key);
            s.entries.insert(key.to_string(), value);
        });
    }

    /// Пометить ключ устаревшим: значение остаётся, но потребитель обязан
    /// перечитать его с сервера при следующем обращении
    pub fn invalidate(&self, key: &str) {
        self.state.update(|s| {
            s.stale.insert(key.to_string());
        });
    }

    /// Удалить значение из кэша полностью
    pub fn remove(&self, key: &str) {
        self.state.update(|s| {
            s.entries.remove(key);
            s.stale.remove(key);
        });
    }

    /// Ключ устарел или ещё не загружался
    pub fn is_stale(&self, key: &str) -> bool {
        self.state
            .with(|s| s.stale.contains(key) || !s.entries.contains_key(key))
    }
}

impl Default for QueryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_key_is_stale_until_set() {
        let cache = QueryCacheService::new();
        assert!(cache.is_stale("city-actions"));

        cache.set("city-actions", json!({"page": 0}));
        assert!(!cache.is_stale("city-actions"));
    }

    #[test]
    fn test_invalidate_keeps_value_but_marks_stale() {
        let cache = QueryCacheService::new();
        cache.set("country-actions", json!(1));

        cache.invalidate("country-actions");
        assert!(cache.is_stale("country-actions"));
        assert_eq!(cache.get("country-actions"), Some(json!(1)));
    }

    #[test]
    fn test_remove_drops_entry() {
        let cache = QueryCacheService::new();
        cache.set("city-translation", json!({"id": 5}));

        cache.remove("city-translation");
        assert_eq!(cache.get("city-translation"), None);
        assert!(cache.is_stale("city-translation"));
    }
}
