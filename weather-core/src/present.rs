use crate::model::WeatherRecord;

const DEGREE_SIGN: char = '\u{00b0}';
const SUNRISE_ICON: char = '\u{1F305}';
const MOON_ICON: char = '\u{1F315}';

/// Render a record as the one-line summary or, when `verbose`, the long block.
pub fn render(record: &WeatherRecord, verbose: bool) -> String {
    if verbose { render_long(record) } else { render_short(record) }
}

fn render_short(r: &WeatherRecord) -> String {
    format!(
        "{}({}) | {} | {}{DEGREE_SIGN}C",
        r.city, r.country, r.condition, r.temperature_c
    )
}

fn render_long(r: &WeatherRecord) -> String {
    format!(
        "{}({}) | {}\n\
         \n\
         Temperature: {}{DEGREE_SIGN}C\n\
         Humidity: {}%\n\
         Pressure: {}hPa\n\
         \n\
         {SUNRISE_ICON} {} | {MOON_ICON} {}",
        r.city,
        r.country,
        r.condition,
        r.temperature_c,
        r.humidity_pct,
        r.pressure_hpa,
        r.sunrise,
        r.sunset,
    )
}
