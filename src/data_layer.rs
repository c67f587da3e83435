//! Composition root for the data layer.
//!
//! [`DataLayer`] owns the process-wide cache and API client, hands out
//! resource views, and starts the background prefetcher. The embedding
//! application builds one at startup and keeps it for the process
//! lifetime; views come and go with pages, the cache does not.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError};
use crate::cache::{DataCache, SharedCache};
use crate::config::Config;
use crate::prefetch::{PrefetchConfig, Prefetcher};
use crate::views::{CalendarView, ResourceView, StandingsView};

pub struct DataLayer {
    cache: SharedCache,
    api: ApiClient,
}

impl DataLayer {
    /// Build the data layer from loaded configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            cache: Arc::new(DataCache::new()),
            api: ApiClient::new(config.api_base_url.clone())?,
        })
    }

    /// The shared cache, for callers that need direct `set`/`invalidate`
    /// access (e.g. a manual refresh action).
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// The API client, for resources that bypass the shared cache
    /// (event detail, analytics, telemetry).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// A live standings view for `season`.
    pub fn standings(&self, season: i32) -> StandingsView {
        ResourceView::new(Arc::clone(&self.cache), self.api.clone(), season)
    }

    /// A live calendar view for `season`.
    pub fn calendar(&self, season: i32) -> CalendarView {
        ResourceView::new(Arc::clone(&self.cache), self.api.clone(), season)
    }

    /// Start background warming of all supported seasons, `active_season`
    /// first. Call once at startup, after the first page began loading.
    pub fn start_prefetch(&self, active_season: i32) -> JoinHandle<()> {
        Prefetcher::new(Arc::clone(&self.cache), self.api.clone()).spawn(active_season)
    }

    /// Like [`start_prefetch`](Self::start_prefetch) with custom timing or
    /// season list.
    pub fn start_prefetch_with(
        &self,
        config: PrefetchConfig,
        active_season: i32,
    ) -> JoinHandle<()> {
        Prefetcher::with_config(Arc::clone(&self.cache), self.api.clone(), config)
            .spawn(active_season)
    }
}
