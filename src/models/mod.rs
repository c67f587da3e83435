//! Data models for analytics API responses.
//!
//! This module contains the typed response bodies served by the backend:
//!
//! - `StandingsResponse`: driver and constructor championship standings
//! - `CalendarResponse`, `RaceEvent`: the season race calendar
//! - `EventDetail` and friends: full results for one race weekend
//! - `SessionAnalytics`: computed pace/consistency/degradation analytics
//! - `TelemetryResponse`, `TelemetryPoint`: per-lap car telemetry

pub mod analytics;
pub mod calendar;
pub mod event;
pub mod standings;
pub mod telemetry;

pub use analytics::{SectorBest, SessionAnalytics, StintDegradation, TrackEvolutionPoint};
pub use calendar::{CalendarResponse, RaceEvent};
pub use event::{
    ConstructorSummary, DriverSummary, EventDetail, PitStop, QualifyingResult, RaceInfo,
    RaceResult, SprintResult,
};
pub use standings::{ConstructorStanding, DriverStanding, StandingsResponse};
pub use telemetry::{TelemetryPoint, TelemetryResponse};
