//! This module provides the main entry point for scraping timeanddate.com weather pages.
//! A [`TimeAndDate`] client downloads a page either by absolute URL or by [`Location`]
//! and extracts the current conditions into a [`WeatherRecord`].

use crate::error::TimeAndDateError;
use crate::extraction::extractor::WeatherExtractor;
use crate::types::location::Location;
use crate::types::page_layout::PageLayout;
use crate::types::weather_record::WeatherRecord;
use crate::weather_data::page_loader::{PageLoader, DEFAULT_USER_AGENT};
use bon::bon;
use log::error;
use std::time::Duration;

/// Site the client fetches from when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.timeanddate.com";

/// The main client for scraping current weather from timeanddate.com.
///
/// The client keeps one HTTP connection pool and one compiled [`WeatherExtractor`],
/// so it is cheap to reuse for many lookups. It keeps no other state between calls.
///
/// Create an instance with [`TimeAndDate::new()`] for the defaults, or with
/// [`TimeAndDate::builder()`] to set a timeout, User-Agent, base URL or [`PageLayout`].
///
/// # Examples
///
/// ```no_run
/// # use timeanddate::{Location, TimeAndDate, TimeAndDateError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), TimeAndDateError> {
/// let client = TimeAndDate::new()?;
/// let record = client.weather_at(&Location::new("uk", "london")).await?;
/// println!("{}", record.temperature);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TimeAndDate {
    loader: PageLoader,
    extractor: WeatherExtractor,
    base_url: String,
}

#[bon]
impl TimeAndDate {
    /// Creates a client from explicit settings.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for a whole request. Defaults to no limit.
    /// * `user_agent` - Defaults to `timeanddate/<version>`.
    /// * `base_url` - Used by [`TimeAndDate::weather_at`]. Defaults to [`DEFAULT_BASE_URL`].
    /// * `layout` - Markup description used for extraction. Defaults to [`PageLayout::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeAndDateError::WeatherData`] if the HTTP client cannot be built and
    /// [`TimeAndDateError::Extract`] if a selector in `layout` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// # use timeanddate::{TimeAndDate, TimeAndDateError};
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), TimeAndDateError> {
    /// let client = TimeAndDate::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .user_agent("my-weather-app/1.0")
    ///     .build()?;
    /// assert_eq!(client.base_url(), "https://www.timeanddate.com");
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = builder, finish_fn = build, builder_type = TimeAndDateBuilder)]
    #[doc(hidden)]
    pub fn from_settings(
        timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
        #[builder(into)] base_url: Option<String>,
        layout: Option<PageLayout>,
    ) -> Result<Self, TimeAndDateError> {
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        Ok(Self {
            loader: PageLoader::new(timeout, &user_agent)?,
            extractor: WeatherExtractor::new(layout.unwrap_or_default())?,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Creates a client with no timeout, the default User-Agent and the timeanddate.com layout.
    pub fn new() -> Result<Self, TimeAndDateError> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The absolute URL of the weather page for `location`.
    pub fn location_url(&self, location: &Location) -> String {
        location.url(&self.base_url)
    }

    /// Downloads the page at `url` and extracts its current conditions.
    ///
    /// # Errors
    ///
    /// Returns [`TimeAndDateError::WeatherData`] if the request fails or the server
    /// answers with a non-2xx status. Readings missing from the page are not errors,
    /// they are reported as [`UNAVAILABLE`](crate::UNAVAILABLE).
    pub async fn weather(&self, url: &str) -> Result<WeatherRecord, TimeAndDateError> {
        let page = self.loader.download(url).await?;
        Ok(self.extractor.extract(&page))
    }

    /// Fetches the weather page for `location` under the configured base URL.
    pub async fn weather_at(&self, location: &Location) -> Result<WeatherRecord, TimeAndDateError> {
        self.weather(&self.location_url(location)).await
    }

    /// Like [`TimeAndDate::weather`], but logs a failure and returns `None` instead.
    pub async fn try_weather(&self, url: &str) -> Option<WeatherRecord> {
        match self.weather(url).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Error fetching weather from {}: {}", url, e);
                None
            }
        }
    }

    /// Extracts a record from an already downloaded page, using this client's layout.
    pub fn extract(&self, html_content: &[u8]) -> WeatherRecord {
        self.extractor.extract(html_content)
    }
}
