use serde::{Deserialize, Serialize};
use std::fmt;

/// Value stored in a [`WeatherRecord`] field when it could not be located on the page.
pub const UNAVAILABLE: &str = "N/A";

/// Current conditions scraped from a single weather page.
///
/// All values are kept as the text shown on the page (e.g. `"15 °C"`, `"1005 mbar"`),
/// because units and number formatting depend on the site's locale settings.
/// A field that could not be found holds [`UNAVAILABLE`], so every field is always set.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: String,
    pub visibility: String,
    pub pressure: String,
    pub humidity: String,
    pub dew_point: String,
    pub feels_like: String,
    pub forecast: String,
    pub wind: String,
}

/// Field values as located on the page, before the unavailable sentinel is applied.
#[derive(Debug, Default, Clone)]
pub(crate) struct RawWeatherRecord {
    pub temperature: Option<String>,
    pub visibility: Option<String>,
    pub pressure: Option<String>,
    pub humidity: Option<String>,
    pub dew_point: Option<String>,
    pub feels_like: Option<String>,
    pub forecast: Option<String>,
    pub wind: Option<String>,
}

fn or_unavailable(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNAVAILABLE.to_string())
}

impl From<RawWeatherRecord> for WeatherRecord {
    fn from(raw: RawWeatherRecord) -> Self {
        Self {
            temperature: or_unavailable(raw.temperature),
            visibility: or_unavailable(raw.visibility),
            pressure: or_unavailable(raw.pressure),
            humidity: or_unavailable(raw.humidity),
            dew_point: or_unavailable(raw.dew_point),
            feels_like: or_unavailable(raw.feels_like),
            forecast: or_unavailable(raw.forecast),
            wind: or_unavailable(raw.wind),
        }
    }
}

impl WeatherRecord {
    /// A record where every field is [`UNAVAILABLE`].
    pub fn unavailable() -> Self {
        RawWeatherRecord::default().into()
    }

    /// Returns `false` if `value` is the [`UNAVAILABLE`] sentinel.
    pub fn is_available(value: &str) -> bool {
        value != UNAVAILABLE
    }

    /// All fields as `(name, value)` pairs, in page order.
    ///
    /// The names match the serialized field names.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("temperature", self.temperature.as_str()),
            ("visibility", self.visibility.as_str()),
            ("pressure", self.pressure.as_str()),
            ("humidity", self.humidity.as_str()),
            ("dew_point", self.dew_point.as_str()),
            ("feels_like", self.feels_like.as_str()),
            ("forecast", self.forecast.as_str()),
            ("wind", self.wind.as_str()),
        ]
    }

    /// Number of fields holding an extracted value.
    pub fn available_count(&self) -> usize {
        self.fields()
            .into_iter()
            .filter(|(_, value)| Self::is_available(value))
            .count()
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.fields() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
