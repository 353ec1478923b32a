pub mod blocking;
mod error;
mod extraction;
mod timeanddate;
mod types;
mod utils;
mod weather_data;

pub use error::TimeAndDateError;
pub use timeanddate::*;

pub use extraction::error::ExtractError;
pub use extraction::extractor::{extract_weather, WeatherExtractor};

pub use types::location::Location;
pub use types::page_layout::PageLayout;
pub use types::weather_record::{WeatherRecord, UNAVAILABLE};

pub use utils::{clean_summary, clean_text};
pub use weather_data::error::WeatherDataError;
pub use weather_data::page_loader::DEFAULT_USER_AGENT;
