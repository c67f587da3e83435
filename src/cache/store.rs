//! Process-wide key/value store with per-key subscriber notification.
//!
//! The store lives outside any single page's lifecycle: entries survive
//! navigation and are shared by every view and the background prefetcher.
//! A `set` synchronously notifies every subscriber registered for that key,
//! which is how a prefetcher landing data updates an already-mounted view
//! without a second fetch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Listener<V> = Arc<dyn Fn(&V) + Send + Sync>;

/// Shared cache mapping string keys to values, with pub/sub per key.
///
/// Keys are opaque strings; the `"<kind>:<season>"` convention is owned by
/// callers (see the key helpers in [`crate::cache`]). Entries have no TTL
/// and live until explicitly invalidated. All operations are total: lookups
/// on unknown keys simply report absence.
pub struct DataCache<V> {
    inner: Mutex<Inner<V>>,
}

struct Inner<V> {
    entries: HashMap<String, V>,
    listeners: HashMap<String, HashMap<u64, Listener<V>>>,
    next_listener_id: u64,
}

impl<V: Clone> Default for DataCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> DataCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                listeners: HashMap::new(),
                next_listener_id: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        // A poisoned lock means a listener panicked while we were notifying;
        // the map itself is still coherent, so keep going.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Read the cached value for `key`. Pure lookup; never triggers a fetch.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().entries.get(key).cloned()
    }

    /// Returns true if `key` is currently cached. Agrees with [`get`](Self::get).
    pub fn has(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Store a value and synchronously notify every subscriber of `key`.
    ///
    /// Overwrites any previous entry (last write wins). Listeners run after
    /// the internal lock is released, so a listener may re-enter the store.
    pub fn set(&self, key: &str, value: V) {
        let to_notify: Vec<Listener<V>> = {
            let mut inner = self.lock();
            inner.entries.insert(key.to_string(), value.clone());
            inner
                .listeners
                .get(key)
                .map(|subs| subs.values().cloned().collect())
                .unwrap_or_default()
        };
        for listener in to_notify {
            listener(&value);
        }
    }

    /// Remove the entry for `key`, forcing a refetch on next access.
    ///
    /// Subscribers stay registered and will fire on the next `set`.
    pub fn invalidate(&self, key: &str) {
        self.lock().entries.remove(key);
    }

    /// Register `listener` for future `set` calls on `key`.
    ///
    /// A pre-existing value does not fire the listener; callers that need
    /// the current value must [`get`](Self::get) it before subscribing.
    /// The returned [`Subscription`] removes exactly this listener.
    pub fn subscribe(
        self: &Arc<Self>,
        key: &str,
        listener: impl Fn(&V) + Send + Sync + 'static,
    ) -> Subscription<V> {
        let id = {
            let mut inner = self.lock();
            inner.next_listener_id += 1;
            let id = inner.next_listener_id;
            inner
                .listeners
                .entry(key.to_string())
                .or_default()
                .insert(id, Arc::new(listener));
            id
        };
        Subscription {
            cache: Arc::downgrade(self),
            key: key.to_string(),
            id,
            active: AtomicBool::new(true),
        }
    }

    fn remove_listener(&self, key: &str, id: u64) {
        let mut inner = self.lock();
        if let Some(subs) = inner.listeners.get_mut(key) {
            subs.remove(&id);
            if subs.is_empty() {
                inner.listeners.remove(key);
            }
        }
    }
}

/// Capability to remove one registered listener.
///
/// `unsubscribe` is idempotent: the second and later calls are no-ops.
/// Dropping a `Subscription` without calling it leaves the listener
/// registered for the cache's lifetime, so consumers unsubscribe on
/// teardown.
pub struct Subscription<V> {
    cache: Weak<DataCache<V>>,
    key: String,
    id: u64,
    active: AtomicBool,
}

impl<V: Clone> Subscription<V> {
    /// Remove the listener this subscription was created for.
    pub fn unsubscribe(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            if let Some(cache) = self.cache.upgrade() {
                cache.remove_listener(&self.key, self.id);
            }
        }
    }
}
