//! Prefetcher behavior against a mock backend: request ordering, skip of
//! already-cached keys, and silent failure handling.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pitwall_core::cache::{calendar_key, standings_key, CacheValue, DataCache, SharedCache};
use pitwall_core::models::StandingsResponse;
use pitwall_core::{ApiClient, PrefetchConfig, Prefetcher};

fn standings_body(season: i32) -> serde_json::Value {
    json!({"season": season, "round": 1, "drivers": [], "constructors": []})
}

fn calendar_body(season: i32) -> serde_json::Value {
    json!({"season": season, "events": []})
}

/// Config with delays collapsed so tests run instantly; the sequencing
/// itself is unchanged.
fn fast_config(seasons: Vec<i32>) -> PrefetchConfig {
    PrefetchConfig {
        seasons,
        initial_delay: Duration::ZERO,
        resource_gap: Duration::ZERO,
        season_gap: Duration::ZERO,
    }
}

fn empty_cache() -> SharedCache {
    Arc::new(DataCache::new())
}

async fn mock_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(0)))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_warm_order_active_season_first_standings_before_calendar() {
    let server = mock_backend().await;
    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();

    let prefetcher =
        Prefetcher::with_config(Arc::clone(&cache), api, fast_config(vec![2025, 2024, 2023]));
    prefetcher.run(2024).await;

    let requests: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| format!("{}?{}", r.url.path(), r.url.query().unwrap_or("")))
        .collect();

    assert_eq!(
        requests,
        vec![
            "/standings?season=2024",
            "/calendar?season=2024",
            "/standings?season=2025",
            "/calendar?season=2025",
            "/standings?season=2023",
            "/calendar?season=2023",
        ]
    );

    for season in [2023, 2024, 2025] {
        assert!(cache.has(&standings_key(season)));
        assert!(cache.has(&calendar_key(season)));
    }
}

#[tokio::test]
async fn test_already_cached_key_is_not_fetched() {
    let server = mock_backend().await;
    let cache = empty_cache();
    cache.set(
        &standings_key(2025),
        CacheValue::Standings(Arc::new(StandingsResponse {
            season: 2025,
            round: 7,
            drivers: vec![],
            constructors: vec![],
        })),
    );

    let api = ApiClient::new(server.uri()).unwrap();
    Prefetcher::with_config(Arc::clone(&cache), api, fast_config(vec![2025]))
        .run(2025)
        .await;

    let standings_requests = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/standings")
        .count();
    assert_eq!(standings_requests, 0, "cached standings must not be refetched");

    // The cached value survives untouched; the calendar was still warmed.
    let cached = cache.get(&standings_key(2025)).unwrap();
    assert_eq!(cached.as_standings().unwrap().round, 7);
    assert!(cache.has(&calendar_key(2025)));
}

#[tokio::test]
async fn test_failed_warm_leaves_key_unset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(2023)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream connector failed"))
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    Prefetcher::with_config(Arc::clone(&cache), api, fast_config(vec![2023]))
        .run(2023)
        .await;

    // Failure is swallowed; the key simply stays unset so a later view
    // retries naturally.
    assert!(!cache.has(&calendar_key(2023)));
    assert!(cache.has(&standings_key(2023)));
}
