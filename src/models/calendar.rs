use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Race calendar for one season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub season: i32,
    #[serde(default)]
    pub events: Vec<RaceEvent>,
}

impl CalendarResponse {
    /// The next race on or after `today`, used for the countdown screen.
    pub fn next_event(&self, today: NaiveDate) -> Option<&RaceEvent> {
        self.events
            .iter()
            .filter(|e| e.race_date().is_some_and(|d| d >= today))
            .min_by_key(|e| e.race_date())
    }
}

/// One race weekend on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceEvent {
    pub round: u32,
    #[serde(default)]
    pub season: i32,
    pub name: String,
    #[serde(default)]
    pub circuit_id: String,
    #[serde(default)]
    pub circuit_name: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
    // Coordinates arrive as strings from the upstream Ergast schema
    pub lat: Option<String>,
    pub long: Option<String>,
    /// Race date, `YYYY-MM-DD`.
    pub date: String,
    /// Race start time, `HH:MM:SSZ`, when the upstream provides one.
    pub time: Option<String>,
    #[serde(default)]
    pub is_sprint: bool,
    pub sprint_date: Option<String>,
}

impl RaceEvent {
    /// Parsed race date. `None` if the upstream sent something malformed.
    pub fn race_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
