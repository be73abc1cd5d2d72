use serde::Serialize;

/// What the user asked for: a city and the output verbosity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub verbose: bool,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, verbose: bool) -> Self {
        Self { city: city.into(), verbose }
    }
}

/// Current conditions for one city, decoded from a weather response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    /// Lowercased, e.g. "clear" or "rain".
    pub condition: String,
    pub temperature_c: i64,
    pub humidity_pct: i64,
    pub pressure_hpa: i64,
    /// Local clock time, `HH:MM`.
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherRecord {
    /// The response does not name the city the way the user typed it, so the
    /// caller stamps it in after extraction.
    pub fn with_city(self, city: impl Into<String>) -> Self {
        Self { city: city.into(), ..self }
    }
}
