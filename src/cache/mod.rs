//! Shared data cache for season-keyed resources.
//!
//! This module provides the process-wide [`DataCache`] plus the domain
//! value type and key helpers used by the views and the prefetcher.
//!
//! Only standings and calendar data go through the shared cache today;
//! event, analytics and telemetry responses are fetched directly by the
//! pages that show them. The key scheme extends to those kinds if they
//! are ever unified.

pub mod store;

use std::sync::Arc;

pub use store::{DataCache, Subscription};

use crate::models::{CalendarResponse, StandingsResponse};

/// A value stored in the shared cache.
///
/// Values are immutable once stored; a new `set` always installs a wholly
/// new value. `Arc` keeps clones cheap for the store's notify path.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Standings(Arc<StandingsResponse>),
    Calendar(Arc<CalendarResponse>),
}

impl CacheValue {
    pub fn as_standings(&self) -> Option<&Arc<StandingsResponse>> {
        match self {
            CacheValue::Standings(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_calendar(&self) -> Option<&Arc<CalendarResponse>> {
        match self {
            CacheValue::Calendar(c) => Some(c),
            _ => None,
        }
    }
}

/// The cache instance shared by views and the prefetcher.
pub type SharedCache = Arc<DataCache<CacheValue>>;

/// Cache key for a season's championship standings.
pub fn standings_key(season: i32) -> String {
    format!("standings:{season}")
}

/// Cache key for a season's race calendar.
pub fn calendar_key(season: i32) -> String {
    format!("calendar:{season}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(standings_key(2025), "standings:2025");
        assert_eq!(calendar_key(2023), "calendar:2023");
    }
}
