use std::io::Write;

use crate::{
    client::{Fetched, WeatherClient},
    error::Result,
    extract::extract,
    model::{WeatherQuery, WeatherRecord},
    present::render,
};

/// Fetch weather for `query` and write either the rendered record or the
/// service's notice to `out`, each framed by blank lines.
///
/// Returns the record when one was built.
pub async fn report<W: Write>(
    client: &WeatherClient,
    query: &WeatherQuery,
    out: &mut W,
) -> Result<Option<WeatherRecord>> {
    let json = match client.fetch_city(&query.city).await? {
        Fetched::Weather(json) => json,
        unavailable => {
            if let Some(notice) = unavailable.notice() {
                writeln!(out, "\n{notice}\n")?;
            }
            return Ok(None);
        }
    };

    let record = extract(&json)?.with_city(query.city.as_str());
    writeln!(out, "\n{}\n", render(&record, query.verbose))?;

    Ok(Some(record))
}
