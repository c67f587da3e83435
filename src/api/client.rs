//! API client for the pitwall analytics backend.
//!
//! This module provides the `ApiClient` struct for fetching standings,
//! calendar, event, analytics, and telemetry data. This layer is purely
//! transport: no retries and no caching, each method issues exactly one
//! request and returns the decoded body or an [`ApiError`].

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{
    CalendarResponse, EventDetail, SessionAnalytics, StandingsResponse, TelemetryResponse,
};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow analytics responses (upstream session loads can take
/// a while on first request) while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the analytics backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Championship standings for a season.
    pub async fn fetch_standings(&self, season: i32) -> Result<StandingsResponse, ApiError> {
        self.get_json(&format!("/standings?season={season}")).await
    }

    /// Race calendar for a season.
    pub async fn fetch_calendar(&self, season: i32) -> Result<CalendarResponse, ApiError> {
        self.get_json(&format!("/calendar?season={season}")).await
    }

    /// Full detail for one race weekend.
    pub async fn fetch_event(&self, season: i32, round: u32) -> Result<EventDetail, ApiError> {
        self.get_json(&format!("/event/{round}?season={season}"))
            .await
    }

    /// Computed analytics for one session (FP1, FP2, FP3, Q, R, S, SQ).
    pub async fn fetch_analytics(
        &self,
        season: i32,
        round: u32,
        session_type: &str,
    ) -> Result<SessionAnalytics, ApiError> {
        self.get_json(&format!("/analytics/{season}/{round}/{session_type}"))
            .await
    }

    /// Lap telemetry for one driver; `lap_number` of `None` means the
    /// fastest lap.
    pub async fn fetch_telemetry(
        &self,
        season: i32,
        round: u32,
        session_type: &str,
        driver_code: &str,
        lap_number: Option<u32>,
    ) -> Result<TelemetryResponse, ApiError> {
        let mut path = format!("/telemetry/{season}/{round}/{session_type}/{driver_code}");
        if let Some(lap) = lap_number {
            path.push_str(&format!("?lap_number={lap}"));
        }
        self.get_json(&path).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    /// Check if response is successful, returning an error with status and
    /// body text if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }
}
