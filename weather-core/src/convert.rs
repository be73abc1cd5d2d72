//! Temperature and timestamp conversions used when decoding a weather response.

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

use crate::error::{Result, WeatherError, json_type_name};

const MIN_TEMP_KELVIN: f64 = 0.0;
const KELVIN_CELSIUS_OFFSET: f64 = 273.15;
const CLOCK_FORMAT: &str = "%H:%M";

/// Convert kelvins to whole degrees celsius, discarding the fractional part
/// toward zero (`283.15 -> 10`, `0 -> -273`).
pub fn kelvin_to_celsius(kelvin: f64) -> Result<i64> {
    // NaN fails the comparison below, so reject it explicitly.
    if !kelvin.is_finite() || kelvin < MIN_TEMP_KELVIN {
        return Err(WeatherError::OutOfRange { kelvin });
    }

    Ok((kelvin - KELVIN_CELSIUS_OFFSET).trunc() as i64)
}

/// Same as [`kelvin_to_celsius`], but accepts any JSON number.
pub fn celsius_from_value(value: &Value) -> Result<i64> {
    let kelvin = value.as_f64().ok_or(WeatherError::InvalidType {
        expected: "int or float",
        found: json_type_name(value),
    })?;

    kelvin_to_celsius(kelvin)
}

/// Render epoch seconds as `HH:MM` in the system's local timezone.
pub fn timestamp_to_time(epoch_seconds: i64) -> Result<String> {
    timestamp_to_time_in(epoch_seconds, &Local)
}

/// Render epoch seconds as `HH:MM` in an explicit timezone.
pub fn timestamp_to_time_in<Tz>(epoch_seconds: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::from_timestamp(epoch_seconds, 0)
        .ok_or(WeatherError::InvalidTimestamp(epoch_seconds))?;

    Ok(utc.with_timezone(tz).format(CLOCK_FORMAT).to_string())
}

/// Same as [`timestamp_to_time`], but only accepts integral JSON numbers.
pub fn time_from_value(value: &Value) -> Result<String> {
    let epoch_seconds = value.as_i64().ok_or(WeatherError::InvalidType {
        expected: "int",
        found: json_type_name(value),
    })?;

    timestamp_to_time(epoch_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    #[test]
    fn zero_kelvin_is_minus_273() {
        assert_eq!(kelvin_to_celsius(0.0).unwrap(), -273);
    }

    #[test]
    fn freezing_point_is_zero_celsius() {
        assert_eq!(kelvin_to_celsius(273.15).unwrap(), 0);
    }

    #[test]
    fn ten_celsius() {
        assert_eq!(kelvin_to_celsius(283.15).unwrap(), 10);
    }

    #[test]
    fn fraction_is_truncated_not_rounded() {
        assert_eq!(kelvin_to_celsius(283.99).unwrap(), 10);
        assert_eq!(kelvin_to_celsius(272.5).unwrap(), 0);
        assert_eq!(kelvin_to_celsius(271.0).unwrap(), -2);
    }

    #[test]
    fn negative_kelvin_is_out_of_range() {
        let err = kelvin_to_celsius(-1.0).unwrap_err();
        assert!(matches!(err, WeatherError::OutOfRange { kelvin } if kelvin == -1.0));
        assert!(err.to_string().contains("cannot be lower than 0"));
    }

    #[test]
    fn nan_kelvin_is_out_of_range() {
        let err = kelvin_to_celsius(f64::NAN).unwrap_err();
        assert!(matches!(err, WeatherError::OutOfRange { .. }));
    }

    #[test]
    fn celsius_from_json_int_and_float() {
        assert_eq!(celsius_from_value(&json!(0)).unwrap(), -273);
        assert_eq!(celsius_from_value(&json!(283.15)).unwrap(), 10);
    }

    #[test]
    fn celsius_from_string_is_invalid_type() {
        let err = celsius_from_value(&json!("x")).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::InvalidType { found: "string", .. }
        ));
    }

    #[test]
    fn timestamp_in_pinned_timezone() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(timestamp_to_time_in(1625342136, &cest).unwrap(), "21:55");
        assert_eq!(timestamp_to_time_in(1625342136, &Utc).unwrap(), "19:55");
        assert_eq!(timestamp_to_time_in(0, &Utc).unwrap(), "00:00");
    }

    #[test]
    fn timestamp_is_deterministic_for_local_timezone() {
        let first = timestamp_to_time(1625342136).unwrap();
        let second = timestamp_to_time(1625342136).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        assert_eq!(&first[2..3], ":");
    }

    #[test]
    fn unrepresentable_timestamp() {
        let err = timestamp_to_time_in(i64::MAX, &Utc).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidTimestamp(i64::MAX)));
    }

    #[test]
    fn time_from_string_is_invalid_type() {
        let err = time_from_value(&json!("x")).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::InvalidType { expected: "int", found: "string" }
        ));
    }

    #[test]
    fn time_from_float_is_invalid_type() {
        let err = time_from_value(&json!(1.5)).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidType { found: "float", .. }));
    }
}
