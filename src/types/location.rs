use std::fmt;

/// A place addressed the way timeanddate.com builds its weather URLs:
/// `/weather/<country>/<city>`.
///
/// # Examples
///
/// ```
/// use timeanddate::Location;
///
/// let london = Location::new("uk", "london");
/// assert_eq!(london.path(), "/weather/uk/london");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub country: String,
    pub city: String,
}

impl Location {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }

    /// The site-relative path of this location's weather page.
    pub fn path(&self) -> String {
        format!(
            "/weather/{}/{}",
            self.country.trim_matches('/'),
            self.city.trim_matches('/')
        )
    }

    /// The absolute URL of the weather page under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.country.trim_matches('/'),
            self.city.trim_matches('/')
        )
    }
}
