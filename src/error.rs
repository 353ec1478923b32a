use crate::extraction::error::ExtractError;
use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeAndDateError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
