use crate::weather_data::error::WeatherDataError;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("timeanddate/", env!("CARGO_PKG_VERSION"));

/// Downloads weather pages over one reused HTTP client.
#[derive(Debug, Clone)]
pub struct PageLoader {
    download_client: Client,
}

impl PageLoader {
    /// Builds the HTTP client. Without a `timeout` requests may wait indefinitely.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<PageLoader, WeatherDataError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let download_client = builder.build().map_err(WeatherDataError::ClientBuild)?;
        Ok(PageLoader { download_client })
    }

    /// Performs a single GET and returns the raw body of a 2xx response.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, WeatherDataError> {
        info!("Downloading weather page from {}", url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
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
            .await
            .map_err(|e| WeatherDataError::BodyRead(url.to_string(), e))?;
        info!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
