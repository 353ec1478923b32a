use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),
}

impl WeatherDataError {
    /// Classifies a failed `error_for_status` call, keeping the status code when there is one.
    pub(crate) fn from_status_error(url: &str, e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => WeatherDataError::HttpStatus {
                url: url.to_string(),
                status,
                source: e,
            },
            None => WeatherDataError::NetworkRequest(url.to_string(), e),
        }
    }
}
