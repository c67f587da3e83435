use serde::{Deserialize, Serialize};

/// Driver and constructor championship standings for one season.
///
/// `round` is the latest completed round the standings reflect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub season: i32,
    #[serde(default)]
    pub round: i32,
    #[serde(default)]
    pub drivers: Vec<DriverStanding>,
    #[serde(default)]
    pub constructors: Vec<ConstructorStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub round: i32,
    pub position: u32,
    pub points: f64,
    #[serde(default)]
    pub wins: u32,
    /// Points behind the championship leader. Zero for the leader,
    /// negative for everyone else.
    #[serde(default)]
    pub gap_to_leader: f64,
    #[serde(default)]
    pub driver_id: String,
    /// Three-letter code, e.g. "VER".
    #[serde(default)]
    pub driver_code: String,
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub driver_nationality: String,
    #[serde(default)]
    pub driver_dob: String,
    #[serde(default)]
    pub constructor_id: String,
    #[serde(default)]
    pub constructor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub round: i32,
    pub position: u32,
    pub points: f64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub gap_to_leader: f64,
    #[serde(default)]
    pub constructor_id: String,
    #[serde(default)]
    pub constructor_name: String,
    #[serde(default)]
    pub constructor_nationality: String,
}
