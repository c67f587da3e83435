//! Background cache warmer.
//!
//! Runs once at application start. Requests are issued strictly
//! sequentially with delays between them, so the active page's own fetch
//! always reaches the network first and the backend never sees a burst.
//! Already-cached keys are skipped outright, and failures are swallowed:
//! an unwarmed key is simply fetched by whichever view asks for it next.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::cache::{calendar_key, standings_key, CacheValue, SharedCache};
use crate::config::SUPPORTED_SEASONS;

/// Quiet period before the first background request, long enough that the
/// active page's own request has already reached the network.
const INITIAL_DELAY_MS: u64 = 1000;

/// Gap between the standings and calendar requests within one season.
const RESOURCE_GAP_MS: u64 = 600;

/// Gap after finishing one season before starting the next.
const SEASON_GAP_MS: u64 = 300;

/// Tunable prefetch timing and season list.
///
/// The delays are a soft-priority scheme, not a correctness requirement:
/// shrinking them to zero only trades foreground responsiveness for
/// prefetch latency.
#[derive(Debug, Clone)]
pub struct PrefetchConfig {
    /// Seasons to warm, in fallback order. The active season always moves
    /// to the front of the run regardless of its position here.
    pub seasons: Vec<i32>,
    pub initial_delay: Duration,
    pub resource_gap: Duration,
    pub season_gap: Duration,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            seasons: SUPPORTED_SEASONS.to_vec(),
            initial_delay: Duration::from_millis(INITIAL_DELAY_MS),
            resource_gap: Duration::from_millis(RESOURCE_GAP_MS),
            season_gap: Duration::from_millis(SEASON_GAP_MS),
        }
    }
}

/// Staggered background loader for standings and calendar data.
pub struct Prefetcher {
    cache: SharedCache,
    api: ApiClient,
    config: PrefetchConfig,
}

impl Prefetcher {
    pub fn new(cache: SharedCache, api: ApiClient) -> Self {
        Self::with_config(cache, api, PrefetchConfig::default())
    }

    pub fn with_config(cache: SharedCache, api: ApiClient, config: PrefetchConfig) -> Self {
        Self { cache, api, config }
    }

    /// Season order for one run: the active season first, then the rest of
    /// the configured list in its original order, each season once.
    fn plan(&self, active_season: i32) -> Vec<i32> {
        let mut ordered = Vec::with_capacity(self.config.seasons.len() + 1);
        ordered.push(active_season);
        ordered.extend(
            self.config
                .seasons
                .iter()
                .copied()
                .filter(|s| *s != active_season),
        );
        ordered
    }

    /// Warm all configured seasons, starting with `active_season`.
    ///
    /// Within a season the standings request always precedes the calendar
    /// request; seasons are processed strictly sequentially.
    pub async fn run(&self, active_season: i32) {
        info!(active_season, "prefetch starting");
        sleep(self.config.initial_delay).await;

        for season in self.plan(active_season) {
            self.warm_standings(season).await;
            sleep(self.config.resource_gap).await;
            self.warm_calendar(season).await;
            sleep(self.config.season_gap).await;
        }

        info!("prefetch complete");
    }

    /// Run as a detached background task.
    pub fn spawn(self, active_season: i32) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(active_season).await })
    }

    async fn warm_standings(&self, season: i32) {
        let key = standings_key(season);
        if self.cache.has(&key) {
            debug!(%key, "already cached, skipping");
            return;
        }
        match self.api.fetch_standings(season).await {
            Ok(data) => self.cache.set(&key, CacheValue::Standings(Arc::new(data))),
            // silent: the key stays unset, a view will retry on navigation
            Err(e) => debug!(%key, error = %e, "prefetch failed"),
        }
    }

    async fn warm_calendar(&self, season: i32) {
        let key = calendar_key(season);
        if self.cache.has(&key) {
            debug!(%key, "already cached, skipping");
            return;
        }
        match self.api.fetch_calendar(season).await {
            Ok(data) => self.cache.set(&key, CacheValue::Calendar(Arc::new(data))),
            Err(e) => debug!(%key, error = %e, "prefetch failed"),
        }
    }
}
