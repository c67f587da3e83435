//! pitwall-core - client data layer for the pitwall F1 dashboard.
//!
//! This crate provides everything between the rendering layer and the
//! analytics backend:
//!
//! - [`DataCache`]: process-wide key/value cache with per-key subscribers
//! - [`ApiClient`]: typed HTTP access to the backend endpoints
//! - [`ResourceView`]: read-through accessors with live cache updates
//! - [`Prefetcher`]: staggered background cache warming across seasons
//! - [`DataLayer`]: composition root wiring the above together
//!
//! # Example
//!
//! ```rust,no_run
//! use pitwall_core::{config::DEFAULT_SEASON, Config, DataLayer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let data = DataLayer::new(&config)?;
//!
//!     // The active page's own request goes out first...
//!     let standings = data.standings(DEFAULT_SEASON);
//!
//!     // ...then the prefetcher warms the remaining seasons behind it.
//!     data.start_prefetch(DEFAULT_SEASON);
//!
//!     let mut changes = standings.watch();
//!     changes.changed().await?;
//!     if let Some(table) = standings.state().data {
//!         println!("{} drivers classified", table.drivers.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
mod data_layer;
pub mod models;
pub mod prefetch;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use cache::{CacheValue, DataCache, SharedCache, Subscription};
pub use config::Config;
pub use data_layer::DataLayer;
pub use prefetch::{PrefetchConfig, Prefetcher};
pub use views::{CachedResource, CalendarView, ResourceState, ResourceView, StandingsView};
