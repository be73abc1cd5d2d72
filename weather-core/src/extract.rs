use serde_json::Value;

use crate::{
    convert::{celsius_from_value, time_from_value},
    error::{Result, WeatherError, json_type_name},
    model::WeatherRecord,
};

/// Map a current-weather JSON payload onto a [`WeatherRecord`].
///
/// The returned record has an empty `city`; see [`WeatherRecord::with_city`].
/// Any absent key fails with [`WeatherError::MissingField`].
pub fn extract(json: &Value) -> Result<WeatherRecord> {
    let temperature_c = celsius_from_value(field(json, "/main/temp")?)?;
    let condition = string_field(json, "/weather/0/main")?.to_lowercase();
    let humidity_pct = int_field(json, "/main/humidity")?;
    let pressure_hpa = int_field(json, "/main/pressure")?;
    let sunrise = time_from_value(field(json, "/sys/sunrise")?)?;
    let sunset = time_from_value(field(json, "/sys/sunset")?)?;
    let country = string_field(json, "/sys/country")?.to_owned();

    Ok(WeatherRecord {
        city: String::new(),
        country,
        condition,
        temperature_c,
        humidity_pct,
        pressure_hpa,
        sunrise,
        sunset,
    })
}

fn field<'a>(json: &'a Value, pointer: &str) -> Result<&'a Value> {
    json.pointer(pointer)
        .ok_or_else(|| WeatherError::MissingField(pointer.to_owned()))
}

fn string_field<'a>(json: &'a Value, pointer: &str) -> Result<&'a str> {
    let value = field(json, pointer)?;
    value.as_str().ok_or(WeatherError::InvalidType {
        expected: "string",
        found: json_type_name(value),
    })
}

fn int_field(json: &Value, pointer: &str) -> Result<i64> {
    let value = field(json, pointer)?;
    value.as_i64().ok_or(WeatherError::InvalidType {
        expected: "int",
        found: json_type_name(value),
    })
}
