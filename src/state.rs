//! # Per-User State Store Module
//!
//! Maps a phone number to the user's current menu state. The backing store is
//! an external key-value cache with TTL semantics, reached through the
//! [`StateCache`] trait; an in-memory implementation is provided for the dev
//! runner and tests.
//!
//! Last-write-wins is acceptable here: a given user's WhatsApp messages are
//! processed one at a time, so no per-user locking is attempted.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::constants::ESTADO_MENU_PRINCIPAL;

/// How long an idle user keeps their menu position.
pub const STATE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Contract of the external key-value cache collaborator.
#[async_trait]
pub trait StateCache: Send + Sync {
    /// Fetch a value; `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store a value, resetting its expiry window.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}

/// Process-local cache with lazy expiry on read.
pub struct InMemoryStateCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryStateCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of live (possibly expired) entries, for tests.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateCache for InMemoryStateCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((value, expires_at)) if Instant::now() < *expires_at => {
                Ok(Some(value.clone()))
            }
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }
}

/// Outcome of resolving a user's state at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedState {
    /// Current menu state name.
    pub state: String,
    /// Whether the cache already knew this user before the call.
    pub known_user: bool,
}

/// Per-user conversation state store backed by a [`StateCache`].
pub struct UserStateStore<C: StateCache> {
    cache: C,
    ttl: Duration,
}

impl<C: StateCache> UserStateStore<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            ttl: STATE_TTL,
        }
    }

    pub fn with_ttl(cache: C, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Current state for a user, initializing first-time users to the main
    /// menu. The initial value is written back so the expiry window starts
    /// with the first contact.
    pub async fn get_state(&self, user_id: &str) -> Result<ResolvedState> {
        if let Some(state) = self.cache.get(user_id).await? {
            debug!("user {user_id} is at state '{state}'");
            return Ok(ResolvedState {
                state,
                known_user: true,
            });
        }

        info!("first contact from {user_id}, starting at '{ESTADO_MENU_PRINCIPAL}'");
        self.cache
            .set(user_id, ESTADO_MENU_PRINCIPAL, self.ttl)
            .await?;
        Ok(ResolvedState {
            state: ESTADO_MENU_PRINCIPAL.to_string(),
            known_user: false,
        })
    }

    /// Overwrite the user's state and refresh the expiry window.
    pub async fn set_state(&self, user_id: &str, state: &str) -> Result<()> {
        debug!("user {user_id} moves to state '{state}'");
        self.cache.set(user_id, state, self.ttl).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_contact_initializes_root_state() {
        let store = UserStateStore::new(InMemoryStateCache::new());
        let resolved = store.get_state("+5491112345678").await.unwrap();

        assert_eq!(resolved.state, ESTADO_MENU_PRINCIPAL);
        assert!(!resolved.known_user);
    }

    #[tokio::test]
    async fn test_second_read_sees_known_user() {
        let store = UserStateStore::new(InMemoryStateCache::new());
        store.get_state("+549111").await.unwrap();

        let resolved = store.get_state("+549111").await.unwrap();
        assert!(resolved.known_user);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let store = UserStateStore::new(InMemoryStateCache::new());
        store.set_state("+549111", "menu_productos").await.unwrap();

        let resolved = store.get_state("+549111").await.unwrap();
        assert_eq!(resolved.state, "menu_productos");
        assert!(resolved.known_user);
    }

    #[tokio::test]
    async fn test_expired_entry_reinitializes() {
        let store = UserStateStore::with_ttl(InMemoryStateCache::new(), Duration::from_millis(10));
        store.set_state("+549111", "menu_envios").await.unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        let resolved = store.get_state("+549111").await.unwrap();
        assert_eq!(resolved.state, ESTADO_MENU_PRINCIPAL);
        assert!(!resolved.known_user);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = InMemoryStateCache::new();
        cache.set("k", "a", STATE_TTL).await.unwrap();
        cache.set("k", "b", STATE_TTL).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("b"));
        assert_eq!(cache.len(), 1);
    }
}
