use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::{collections::HashMap, fmt::Display, sync::Arc};
use tokio::sync::RwLock;

/// Cache key: request path plus query parameters sorted by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: String,
    params: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(path: &str, params: &[(String, String)]) -> Self {
        let mut params = params.to_vec();
        params.sort();

        Self {
            path: path.to_string(),
            params,
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

/// A cached payload and the moment it stops being fresh
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// In-memory cache of upstream JSON responses with time-based expiry
///
/// Cloning is cheap and clones share the same entries, so one cache can be
/// handed to every client that should see the same responses.
#[derive(Clone, Default)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a fresh value from the cache by key
    ///
    /// Returns `None` on a miss or when the stored entry has expired.
    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        self.get_at(key, Utc::now()).await
    }

    /// Same as [`get`](Self::get), evaluated at `now`
    pub async fn get_at(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if now < entry.expires_at => {
                    tracing::debug!(key = %key, "Cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => {
                    tracing::debug!(key = %key, "Cache miss");
                    return None;
                }
            }
        }

        // Expired: evict unless another writer refreshed it meanwhile
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| now >= entry.expires_at) {
            entries.remove(key);
            tracing::debug!(key = %key, "Cache entry expired");
        }
        None
    }

    /// Stores a value that stays fresh for `ttl`
    pub async fn insert(&self, key: CacheKey, value: Value, ttl: Duration) {
        self.insert_at(key, value, ttl, Utc::now()).await
    }

    /// Same as [`insert`](Self::insert), with the freshness window starting at `now`
    pub async fn insert_at(&self, key: CacheKey, value: Value, ttl: Duration, now: DateTime<Utc>) {
        let entry = CacheEntry {
            value,
            expires_at: now + ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// Drops every entry that has expired at `now`, returning how many were removed
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
