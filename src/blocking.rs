//! A synchronous client for callers without an async runtime.
//!
//! [`blocking::TimeAndDate`](TimeAndDate) mirrors [`crate::TimeAndDate`] but performs
//! the download with `reqwest::blocking`. It must not be used from within an async
//! runtime; use the async client there instead.
//!
//! ```no_run
//! use timeanddate::blocking::TimeAndDate;
//! use timeanddate::{Location, TimeAndDateError};
//!
//! # fn main() -> Result<(), TimeAndDateError> {
//! let client = TimeAndDate::new()?;
//! let record = client.weather_at(&Location::new("uk", "london"))?;
//! println!("{record}");
//! # Ok(())
//! # }
//! ```

use crate::error::TimeAndDateError;
use crate::extraction::extractor::WeatherExtractor;
use crate::timeanddate::DEFAULT_BASE_URL;
use crate::types::location::Location;
use crate::types::page_layout::PageLayout;
use crate::types::weather_record::WeatherRecord;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::page_loader::DEFAULT_USER_AGENT;
use bon::bon;
use log::{error, info, warn};
use reqwest::blocking::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TimeAndDate {
    download_client: Client,
    extractor: WeatherExtractor,
    base_url: String,
}

#[bon]
impl TimeAndDate {
    /// Creates a blocking client. Takes the same settings as [`crate::TimeAndDate::builder()`].
    ///
    /// `reqwest::blocking` applies a 30 second timeout unless one is given, so a
    /// missing `timeout` is passed on explicitly as "no limit".
    #[builder(start_fn = builder, finish_fn = build, builder_type = BlockingTimeAndDateBuilder)]
    #[doc(hidden)]
    pub fn from_settings(
        timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
        #[builder(into)] base_url: Option<String>,
        layout: Option<PageLayout>,
    ) -> Result<Self, TimeAndDateError> {
        let download_client = Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .timeout(timeout)
            .build()
            .map_err(WeatherDataError::ClientBuild)?;
        Ok(Self {
            download_client,
            extractor: WeatherExtractor::new(layout.unwrap_or_default())?,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub fn new() -> Result<Self, TimeAndDateError> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn location_url(&self, location: &Location) -> String {
        location.url(&self.base_url)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, WeatherDataError> {
        info!("Downloading weather page from {}", url);
        let response = self
            .download_client
            .get(url)
            .send()
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(WeatherDataError::from_status_error(url, e));
            }
        };

        let body = response
            .bytes()
            .map_err(|e| WeatherDataError::BodyRead(url.to_string(), e))?;
        info!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }

    pub fn weather(&self, url: &str) -> Result<WeatherRecord, TimeAndDateError> {
        let page = self.download(url)?;
        Ok(self.extractor.extract(&page))
    }

    pub fn weather_at(&self, location: &Location) -> Result<WeatherRecord, TimeAndDateError> {
        self.weather(&self.location_url(location))
    }

    /// Logs a failed lookup and returns `None`.
    pub fn try_weather(&self, url: &str) -> Option<WeatherRecord> {
        self.weather(url)
            .map_err(|e| error!("Error fetching weather from {}: {}", url, e))
            .ok()
    }
}
