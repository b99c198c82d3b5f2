// KeyValueStore — the narrow interface the game server needs from the
// embedding host's Redis-like store. The in-memory implementation backs
// standalone deployments and every test: no network, no database.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Atomic conditional write: store `value` under `key` only if the
    /// current value equals `expected` (`None` means the key is absent).
    /// Returns whether the write happened.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool>;

    /// Upsert a member's score in a sorted set.
    async fn sorted_set_add(&self, set: &str, member: &str, score: i64) -> Result<()>;

    /// Members of a sorted set by rank, inclusive on both ends. Ascending
    /// score order; `reverse` returns highest scores first. Ties keep
    /// insertion order.
    async fn sorted_set_range(
        &self,
        set: &str,
        start: usize,
        end: usize,
        reverse: bool,
    ) -> Result<Vec<(String, i64)>>;
}

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    sorted_sets: Mutex<HashMap<String, Vec<(String, i64)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool> {
        let mut values = self.values.lock().await;
        if values.get(key).map(String::as_str) != expected {
            return Ok(false);
        }
        values.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn sorted_set_add(&self, set: &str, member: &str, score: i64) -> Result<()> {
        let mut sets = self.sorted_sets.lock().await;
        let entries = sets.entry(set.to_string()).or_default();
        match entries.iter_mut().find(|(m, _)| m == member) {
            Some(entry) => entry.1 = score,
            None => entries.push((member.to_string(), score)),
        }
        Ok(())
    }

    async fn sorted_set_range(
        &self,
        set: &str,
        start: usize,
        end: usize,
        reverse: bool,
    ) -> Result<Vec<(String, i64)>> {
        let sets = self.sorted_sets.lock().await;
        let mut entries = sets.get(set).cloned().unwrap_or_default();

        // Stable sort, so equal scores keep insertion order either way.
        if reverse {
            entries.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            entries.sort_by(|a, b| a.1.cmp(&b.1));
        }

        if start >= entries.len() {
            return Ok(Vec::new());
        }
        let end = end.min(entries.len() - 1);
        Ok(entries[start..=end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_set_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn cas_succeeds_only_on_expected_value() {
        let store = MemoryStore::new();

        // Absent key: only a None expectation wins.
        assert!(!store.compare_and_swap("k", Some("x"), "v").await.unwrap());
        assert!(store.compare_and_swap("k", None, "v1").await.unwrap());

        // Present key: expectation must match the stored value exactly.
        assert!(!store.compare_and_swap("k", None, "v2").await.unwrap());
        assert!(!store.compare_and_swap("k", Some("other"), "v2").await.unwrap());
        assert!(store.compare_and_swap("k", Some("v1"), "v2").await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), Some("v2".to_string()));
    }

    #[tokio::test]
    async fn sorted_set_add_is_upsert() {
        let store = MemoryStore::new();
        store.sorted_set_add("scores", "alice", 50).await.unwrap();
        store.sorted_set_add("scores", "alice", 80).await.unwrap();

        let entries = store.sorted_set_range("scores", 0, 9, true).await.unwrap();
        assert_eq!(entries, vec![("alice".to_string(), 80)]);
    }

    #[tokio::test]
    async fn sorted_set_range_orders_and_clamps() {
        let store = MemoryStore::new();
        store.sorted_set_add("scores", "alice", 80).await.unwrap();
        store.sorted_set_add("scores", "bob", 60).await.unwrap();
        store.sorted_set_add("scores", "carol", 90).await.unwrap();

        let top_two = store.sorted_set_range("scores", 0, 1, true).await.unwrap();
        assert_eq!(
            top_two,
            vec![("carol".to_string(), 90), ("alice".to_string(), 80)]
        );

        let ascending = store.sorted_set_range("scores", 0, 99, false).await.unwrap();
        assert_eq!(ascending.first().unwrap().0, "bob");

        let past_end = store.sorted_set_range("scores", 10, 20, true).await.unwrap();
        assert!(past_end.is_empty());
    }
}
