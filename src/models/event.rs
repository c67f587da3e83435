use serde::{Deserialize, Serialize};

/// Full event detail: race info, results, qualifying, sprint, pit stops.
///
/// Sections the upstream has no data for (e.g. sprint results at a normal
/// weekend, pit stops before the race) arrive as empty lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetail {
    pub season: i32,
    pub round: u32,
    #[serde(default)]
    pub race_info: RaceInfo,
    #[serde(default)]
    pub race_results: Vec<RaceResult>,
    #[serde(default)]
    pub qualifying: Vec<QualifyingResult>,
    #[serde(default)]
    pub sprint_results: Vec<SprintResult>,
    #[serde(default)]
    pub pit_stops: Vec<PitStop>,
}

/// Header data for the event page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceInfo {
    #[serde(default)]
    pub race_name: String,
    #[serde(default)]
    pub circuit_name: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSummary {
    pub id: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub full_name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub position: u32,
    pub driver: DriverSummary,
    pub constructor: ConstructorSummary,
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub grid: u32,
    #[serde(default)]
    pub laps: u32,
    pub status: Option<String>,
    /// Gap or total time as displayed, winner only has a total.
    pub time: Option<String>,
    #[serde(default)]
    pub points: f64,
    pub fastest_lap: Option<String>,
    pub fastest_lap_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintResult {
    pub position: u32,
    pub driver: DriverSummary,
    pub constructor: ConstructorSummary,
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub grid: u32,
    #[serde(default)]
    pub laps: u32,
    pub status: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifyingResult {
    pub position: u32,
    pub driver: DriverSummary,
    pub constructor: ConstructorSummary,
    #[serde(default)]
    pub car_number: String,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    /// Session the driver was knocked out in ("Q1"/"Q2"), `None` if they
    /// reached Q3.
    pub eliminated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitStop {
    pub driver_id: String,
    /// Ordinal of this stop for the driver, starting at 1.
    pub stop: u32,
    pub lap: u32,
    pub duration: String,
    pub time: String,
}
