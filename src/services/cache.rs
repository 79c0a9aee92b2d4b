//! Generic TTL cache helpers wrapping the common pattern of
//! `(Instant, Value)` entries stored in a `HashMap` behind an `RwLock`.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Attempts to fetch a cloned value from a TTL cache. Returns `None` if
/// the key is absent or the entry expired; expired entries are eagerly
/// removed.
pub async fn get_with_ttl<K, V>(
    map: &RwLock<HashMap<K, (Instant, V)>>,
    key: &K,
    ttl: Duration,
) -> Option<V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // Fast path: read lock only.
    if let Some((ts, val)) = map.read().await.get(key).cloned() {
        if ts.elapsed() < ttl {
            return Some(val);
        }
    } else {
        return None;
    }

    // Entry expired: take the write lock only to evict it.
    let mut write = map.write().await;
    if let Some((ts, _)) = write.get(key)
        && ts.elapsed() >= ttl
    {
        write.remove(key);
    }
    None
}

/// Inserts or overwrites a value with the current timestamp.
pub async fn insert<K, V>(map: &RwLock<HashMap<K, (Instant, V)>>, key: K, value: V)
where
    K: Eq + Hash,
{
    map.write().await.insert(key, (Instant::now(), value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn expired_entries_are_evicted() {
        let map = RwLock::new(HashMap::new());
        insert(&map, "k", 7_u32).await;

        assert_eq!(get_with_ttl(&map, &"k", Duration::from_secs(60)).await, Some(7));
        // A zero TTL makes the entry stale immediately.
        assert_eq!(get_with_ttl(&map, &"k", Duration::ZERO).await, None);
        assert!(map.read().await.is_empty(), "stale entry should be removed");
    }

    #[tokio::test]
    async fn missing_key_is_a_miss() {
        let map: RwLock<HashMap<&str, (Instant, u32)>> = RwLock::new(HashMap::new());
        assert_eq!(get_with_ttl(&map, &"absent", Duration::from_secs(1)).await, None);
    }
}
