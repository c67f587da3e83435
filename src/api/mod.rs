//! REST API client module for the analytics backend.
//!
//! This module provides the `ApiClient` for fetching standings, calendar,
//! event results, session analytics, and lap telemetry as typed models.
//! The backend is unauthenticated; the base URL comes from
//! [`crate::config::Config`].

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
