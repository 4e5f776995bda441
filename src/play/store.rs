use dashmap::DashMap;

/// Composite counter key: one entry per (content, user) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayKey {
    pub content: String,
    pub user: String,
}

impl PlayKey {
    pub fn new(content: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user: user.into(),
        }
    }
}

/// Backing store for play attempt counters.
///
/// `increment` must be atomic per key: the returned value reflects every
/// increment for that key that completed before it.
pub trait PlayCounterStore: Send + Sync {
    /// Increment the counter for `key` and return the new value
    fn increment(&self, key: &PlayKey) -> u64;

    /// Current counter value, 0 when the pair has never played
    fn get(&self, key: &PlayKey) -> u64;
}

/// Process-local counter store.
///
/// DashMap locks only the shard holding the key, so unrelated pairs rarely
/// contend and the entry guard makes increment-and-read a single step.
#[derive(Debug, Default)]
pub struct InMemoryPlayCounterStore {
    counters: DashMap<PlayKey, u64>,
}

impl InMemoryPlayCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl PlayCounterStore for InMemoryPlayCounterStore {
    fn increment(&self, key: &PlayKey) -> u64 {
        let mut count = self.counters.entry(key.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    fn get(&self, key: &PlayKey) -> u64 {
        self.counters.get(key).map(|count| *count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_created_lazily() {
        let store = InMemoryPlayCounterStore::new();
        let key = PlayKey::new("content-a", "user-x");

        assert!(store.is_empty());
        assert_eq!(store.get(&key), 0);
        assert!(store.is_empty(), "reads must not create entries");

        assert_eq!(store.increment(&key), 1);
        assert_eq!(store.increment(&key), 2);
        assert_eq!(store.get(&key), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_are_independent() {
        let store = InMemoryPlayCounterStore::new();
        store.increment(&PlayKey::new("a", "x"));
        store.increment(&PlayKey::new("a", "x"));
        store.increment(&PlayKey::new("a", "y"));

        assert_eq!(store.get(&PlayKey::new("a", "x")), 2);
        assert_eq!(store.get(&PlayKey::new("a", "y")), 1);
        assert_eq!(store.get(&PlayKey::new("b", "x")), 0);
    }
}
