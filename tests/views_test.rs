//! Resource view behavior: cache-hit and cache-miss paths, cross-actor
//! updates through the subscription, the stale-response guard on season
//! changes, and error surfacing.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::{sleep, timeout};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pitwall_core::cache::{standings_key, CacheValue, DataCache, SharedCache};
use pitwall_core::models::StandingsResponse;
use pitwall_core::views::StandingsView;
use pitwall_core::ApiClient;

fn standings_body(season: i32, round: i32) -> serde_json::Value {
    json!({"season": season, "round": round, "drivers": [], "constructors": []})
}

fn standings(season: i32, round: i32) -> Arc<StandingsResponse> {
    Arc::new(StandingsResponse {
        season,
        round,
        drivers: vec![],
        constructors: vec![],
    })
}

fn empty_cache() -> SharedCache {
    Arc::new(DataCache::new())
}

/// Wait until the view's state satisfies `pred`, or fail after 2s.
async fn wait_for<F>(view: &StandingsView, pred: F)
where
    F: Fn(&pitwall_core::ResourceState<StandingsResponse>) -> bool,
{
    let mut rx = view.watch();
    timeout(Duration::from_secs(2), async {
        loop {
            let state = rx.borrow_and_update().clone();
            if pred(&state) {
                return;
            }
            rx.changed().await.expect("view dropped");
        }
    })
    .await
    .expect("view never reached expected state");
}

#[tokio::test]
async fn test_cache_hit_exposes_data_without_fetching() {
    let server = MockServer::start().await;
    // The whole point of the hit path: zero network traffic.
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(2025, 1)))
        .expect(0)
        .mount(&server)
        .await;

    let cache = empty_cache();
    cache.set(
        &standings_key(2025),
        CacheValue::Standings(standings(2025, 9)),
    );

    let api = ApiClient::new(server.uri()).unwrap();
    let view = StandingsView::new(Arc::clone(&cache), api, 2025);

    let state = view.state();
    assert_eq!(state.data.unwrap().round, 9);
    assert!(!state.loading);
    assert!(state.error.is_none());

    server.verify().await;
}

#[tokio::test]
async fn test_cache_miss_fetches_and_populates_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2025"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(2025, 4)))
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    let view = StandingsView::new(Arc::clone(&cache), api, 2025);

    let initial = view.state();
    assert!(initial.data.is_none());
    assert!(initial.loading);

    wait_for(&view, |s| s.data.is_some()).await;
    let state = view.state();
    assert_eq!(state.data.unwrap().round, 4);
    assert!(!state.loading);
    assert!(state.error.is_none());

    // The fetch landed in the shared cache for other consumers.
    assert!(cache.has(&standings_key(2025)));
}

#[tokio::test]
async fn test_foreign_set_updates_view_before_own_fetch_resolves() {
    let server = MockServer::start().await;
    // The view's own fetch is slow; another actor lands the key first.
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(standings_body(2025, 1))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    let view = StandingsView::new(Arc::clone(&cache), api, 2025);
    assert!(view.state().loading);

    cache.set(
        &standings_key(2025),
        CacheValue::Standings(standings(2025, 99)),
    );

    // The subscription applied the foreign value synchronously; no need to
    // wait for the stalled fetch.
    let state = view.state();
    assert_eq!(state.data.unwrap().round, 99);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_season_change_ignores_stale_fetch_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2025"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(standings_body(2025, 1))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(2024, 2)))
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    let mut view = StandingsView::new(Arc::clone(&cache), api, 2025);

    // Move on before the 2025 fetch resolves.
    view.set_season(2024);
    wait_for(&view, |s| s.data.is_some()).await;
    assert_eq!(view.state().data.unwrap().season, 2024);

    // Let the stale 2025 response arrive.
    sleep(Duration::from_millis(600)).await;

    // It still landed in the cache for other consumers...
    assert!(cache.has(&standings_key(2025)));
    // ...but did not overwrite this view's exposed state.
    let state = view.state();
    assert_eq!(state.data.unwrap().season, 2024);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_fetch_failure_surfaces_error_and_leaves_key_unset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream connector failed"))
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    let view = StandingsView::new(Arc::clone(&cache), api, 2025);

    wait_for(&view, |s| s.error.is_some()).await;
    let state = view.state();
    assert!(state.data.is_none());
    assert!(!state.loading);
    assert!(state.error.unwrap().contains("502"));

    // No negative caching: the next consumer of this key fetches again.
    assert!(!cache.has(&standings_key(2025)));
}

#[tokio::test]
async fn test_later_set_clears_previous_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let cache = empty_cache();
    let api = ApiClient::new(server.uri()).unwrap();
    let view = StandingsView::new(Arc::clone(&cache), api, 2025);
    wait_for(&view, |s| s.error.is_some()).await;

    // A sibling view (or retry elsewhere) succeeds and lands the key.
    cache.set(
        &standings_key(2025),
        CacheValue::Standings(standings(2025, 3)),
    );

    let state = view.state();
    assert_eq!(state.data.unwrap().round, 3);
    assert!(state.error.is_none());
    assert!(!state.loading);
}
