//! Read-through resource views over the shared data cache.
//!
//! A view gives a page a single always-current picture of one season-keyed
//! resource:
//! - If cached: exposes the data instantly with `loading = false`
//! - If not cached: spawns a fetch, subscribes for the update, and exposes
//!   a loading state in the meantime
//! - Whenever any actor (the prefetcher, a sibling view, the view's own
//!   fetch) lands the key via `set`, the view updates through its
//!   subscription without a second fetch.
//!
//! Failures surface as an error message next to `data`/`loading` and are
//! never retried automatically: the failed key stays unset, so the next
//! view of that key fetches again.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::cache::{calendar_key, standings_key, CacheValue, SharedCache, Subscription};
use crate::models::{CalendarResponse, StandingsResponse};

/// Snapshot of a view's observable state.
#[derive(Debug)]
pub struct ResourceState<T> {
    pub data: Option<Arc<T>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

// Manual impl: Arc makes the state cloneable regardless of T.
impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

/// A season-keyed resource that can live in the shared cache.
pub trait CachedResource: Send + Sync + Sized + 'static {
    /// Cache key for this resource kind and season.
    fn cache_key(season: i32) -> String;

    /// Extract this resource from a cache value, if the kinds match.
    fn from_cache(value: &CacheValue) -> Option<Arc<Self>>;

    /// Wrap this resource for cache storage.
    fn into_cache(this: Arc<Self>) -> CacheValue;

    /// Fetch this resource from the API.
    fn fetch(api: ApiClient, season: i32) -> impl Future<Output = Result<Self, ApiError>> + Send;
}

impl CachedResource for StandingsResponse {
    fn cache_key(season: i32) -> String {
        standings_key(season)
    }

    fn from_cache(value: &CacheValue) -> Option<Arc<Self>> {
        value.as_standings().map(Arc::clone)
    }

    fn into_cache(this: Arc<Self>) -> CacheValue {
        CacheValue::Standings(this)
    }

    fn fetch(api: ApiClient, season: i32) -> impl Future<Output = Result<Self, ApiError>> + Send {
        async move { api.fetch_standings(season).await }
    }
}

impl CachedResource for CalendarResponse {
    fn cache_key(season: i32) -> String {
        calendar_key(season)
    }

    fn from_cache(value: &CacheValue) -> Option<Arc<Self>> {
        value.as_calendar().map(Arc::clone)
    }

    fn into_cache(this: Arc<Self>) -> CacheValue {
        CacheValue::Calendar(this)
    }

    fn fetch(api: ApiClient, season: i32) -> impl Future<Output = Result<Self, ApiError>> + Send {
        async move { api.fetch_calendar(season).await }
    }
}

/// Read-through view of one cached resource for one season.
///
/// Construct with [`ResourceView::new`] inside a tokio runtime (a cache
/// miss spawns the fetch as a task). UI code polls [`state`](Self::state)
/// or awaits changes on [`watch`](Self::watch).
pub struct ResourceView<T: CachedResource> {
    cache: SharedCache,
    api: ApiClient,
    season: i32,
    // Bumped per observation unit; stale fetch completions compare against
    // it before touching the exposed state.
    generation: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<ResourceState<T>>>,
    state_rx: watch::Receiver<ResourceState<T>>,
    subscription: Option<Subscription<CacheValue>>,
}

/// Championship standings view.
pub type StandingsView = ResourceView<StandingsResponse>;

/// Race calendar view.
pub type CalendarView = ResourceView<CalendarResponse>;

impl<T: CachedResource> ResourceView<T> {
    /// Create a view for `season` and begin observing it.
    pub fn new(cache: SharedCache, api: ApiClient, season: i32) -> Self {
        let (tx, rx) = watch::channel(ResourceState::default());
        let mut view = Self {
            cache,
            api,
            season,
            generation: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(tx),
            state_rx: rx,
            subscription: None,
        };
        view.observe();
        view
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    /// Current state snapshot.
    pub fn state(&self) -> ResourceState<T> {
        self.state_rx.borrow().clone()
    }

    /// Receiver that wakes whenever the exposed state changes.
    pub fn watch(&self) -> watch::Receiver<ResourceState<T>> {
        self.state_rx.clone()
    }

    /// Switch the view to a different season. No-op when unchanged.
    ///
    /// Any fetch still in flight for the old season will complete and land
    /// in the cache for other consumers, but no longer updates this view.
    pub fn set_season(&mut self, season: i32) {
        if season == self.season {
            return;
        }
        self.season = season;
        self.observe();
    }

    /// One observation unit: read the cache, fetch on miss, subscribe.
    fn observe(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
        let unit = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let key = T::cache_key(self.season);

        match self.cache.get(&key).as_ref().and_then(T::from_cache) {
            Some(data) => {
                self.state_tx.send_replace(ResourceState {
                    data: Some(data),
                    loading: false,
                    error: None,
                });
            }
            None => {
                self.state_tx.send_replace(ResourceState {
                    data: None,
                    loading: true,
                    error: None,
                });

                let api = self.api.clone();
                let cache = Arc::clone(&self.cache);
                let tx = Arc::clone(&self.state_tx);
                let generation = Arc::clone(&self.generation);
                let season = self.season;
                let fetch_key = key.clone();
                tokio::spawn(async move {
                    match T::fetch(api, season).await {
                        Ok(data) => {
                            let data = Arc::new(data);
                            // The set always lands: other views of this key
                            // want it even if this view has moved on. Our
                            // own subscription fires here too - a harmless
                            // redundant update.
                            cache.set(&fetch_key, T::into_cache(Arc::clone(&data)));
                            if generation.load(Ordering::SeqCst) == unit {
                                tx.send_replace(ResourceState {
                                    data: Some(data),
                                    loading: false,
                                    error: None,
                                });
                            }
                        }
                        Err(e) => {
                            debug!(key = %fetch_key, error = %e, "resource fetch failed");
                            // Key stays unset: the next view of it retries.
                            if generation.load(Ordering::SeqCst) == unit {
                                tx.send_modify(|s| {
                                    s.loading = false;
                                    s.error = Some(e.to_string());
                                });
                            }
                        }
                    }
                });
            }
        }

        // Subscribe after the initial read; a pre-existing value never
        // fires the listener, so there is no double-apply on the hit path.
        let tx = Arc::clone(&self.state_tx);
        let generation = Arc::clone(&self.generation);
        self.subscription = Some(self.cache.subscribe(&key, move |value| {
            if generation.load(Ordering::SeqCst) != unit {
                return;
            }
            if let Some(data) = T::from_cache(value) {
                tx.send_replace(ResourceState {
                    data: Some(data),
                    loading: false,
                    error: None,
                });
            }
        }));
    }
}

impl<T: CachedResource> Drop for ResourceView<T> {
    fn drop(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }
}
