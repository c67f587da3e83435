use serde::{Deserialize, Serialize};

/// Lap telemetry for one driver in one session.
///
/// `lap_number` echoes the request; `None` means the fastest lap was used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryResponse {
    pub season: i32,
    pub round: u32,
    pub session_type: String,
    pub driver_code: String,
    pub lap_number: Option<u32>,
    #[serde(default)]
    pub telemetry: Vec<TelemetryPoint>,
}

/// One telemetry sample along the lap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryPoint {
    /// Distance around the lap in metres.
    pub distance: f64,
    pub speed: f64,
    pub throttle: f64,
    pub brake: f64,
    pub gear: i32,
    pub rpm: i32,
    pub drs: i32,
    pub x: f64,
    pub y: f64,
}
