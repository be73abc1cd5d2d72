use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    error::{Result, WeatherError},
    request_url::build_request_url,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Result of a weather request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// HTTP 200 with its decoded body.
    Weather(Value),
    /// HTTP 404: the service does not know the city.
    NotFound,
    /// HTTP 401: the configured API key was rejected.
    Unauthorized,
}

impl Fetched {
    /// User-facing notice for outcomes that carry no weather data.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Fetched::Weather(_) => None,
            Fetched::NotFound => Some("Weather information not found."),
            Fetched::Unauthorized => Some("Invalid API key. Please contact the developer."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Full request URL for `city`, including the API key.
    pub fn request_url(&self, city: &str) -> String {
        build_request_url(&self.base_url, &[("q", city), ("appid", self.api_key.as_str())])
    }

    /// Fetch current weather for `city`.
    pub async fn fetch_city(&self, city: &str) -> Result<Fetched> {
        tracing::debug!(base_url = %self.base_url, city, "requesting current weather");
        self.fetch(&self.request_url(city)).await
    }

    /// Issue a single GET to `url` and classify the response by status.
    ///
    /// Transport failures surface as [`WeatherError::Http`]; only a real 404
    /// becomes [`Fetched::NotFound`].
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        let res = self.http.get(url).send().await?;
        let status = res.status();
        tracing::debug!(%status, "weather service responded");

        match status {
            StatusCode::OK => {
                let body = res.text().await?;
                Ok(Fetched::Weather(serde_json::from_str(&body)?))
            }
            StatusCode::NOT_FOUND => {
                tracing::warn!("weather service has no data for the requested city");
                Ok(Fetched::NotFound)
            }
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("weather service rejected the API key");
                Ok(Fetched::Unauthorized)
            }
            other => Err(WeatherError::InvalidResponse { status: other.as_u16() }),
        }
    }
}
