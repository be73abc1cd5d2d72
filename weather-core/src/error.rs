use thiserror::Error;

/// Errors produced while fetching, decoding or rendering weather data.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A converter received a value of the wrong JSON type.
    #[error("Incorrect argument type: expected {expected}, got {found} instead")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Incorrect kelvin value {kelvin}: temperature cannot be lower than 0 K")]
    OutOfRange { kelvin: f64 },

    #[error("Timestamp {0} is outside the representable date range")]
    InvalidTimestamp(i64),

    /// Any HTTP status other than 200, 401 and 404.
    #[error("Invalid response code: {status}")]
    InvalidResponse { status: u16 },

    /// Holds the JSON pointer of the absent key, e.g. `/main/temp`.
    #[error("Weather response is missing field `{0}`")]
    MissingField(String),

    #[error("Failed to reach the weather service")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse weather response JSON")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write weather output")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

/// Human-readable name of a JSON value's type, used in `InvalidType`.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
