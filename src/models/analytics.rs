use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Computed session analytics for one session of a race weekend.
///
/// Maps are keyed by driver id except `sector_dominance`, which is keyed
/// by sector name (`sector1`..`sector3`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAnalytics {
    pub season: i32,
    pub round: u32,
    /// FP1, FP2, FP3, Q, R, S, SQ
    pub session_type: String,
    /// 0-100 lap time consistency score per driver.
    #[serde(default)]
    pub consistency_per_driver: HashMap<String, f64>,
    /// Per-driver tyre degradation regressions, one entry per stint.
    #[serde(default)]
    pub degradation_slopes: HashMap<String, Vec<StintDegradation>>,
    pub clean_air_baseline_ms: Option<f64>,
    pub traffic_loss_ms: Option<f64>,
    #[serde(default)]
    pub sector_dominance: HashMap<String, SectorBest>,
    #[serde(default)]
    pub track_evolution: Vec<TrackEvolutionPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StintDegradation {
    pub stint: u32,
    #[serde(default)]
    pub compound: String,
    /// Linear regression slope in ms/lap; `None` when the stint had too
    /// few clean laps to fit.
    pub slope_ms_per_lap: Option<f64>,
    #[serde(default)]
    pub lap_count: u32,
    #[serde(default)]
    pub median_time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorBest {
    pub driver_id: String,
    pub time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEvolutionPoint {
    pub session_time_s: f64,
    pub best_lap_time_ms: f64,
}
