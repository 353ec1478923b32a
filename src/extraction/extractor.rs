//! Turns the HTML of a weather page into a [`WeatherRecord`].
//!
//! The extractor never fails on page content: every reading that cannot be
//! located is reported as [`UNAVAILABLE`](crate::UNAVAILABLE). The only
//! errors come from compiling the selectors of a [`PageLayout`].

use crate::extraction::error::ExtractError;
use crate::types::page_layout::PageLayout;
use crate::types::weather_record::{RawWeatherRecord, WeatherRecord};
use crate::utils::{clean_summary, clean_text};
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const FEELS_LIKE_LABEL: &str = "Feels Like:";
const FORECAST_LABEL: &str = "Forecast:";
const WIND_LABEL: &str = "Wind:";

fn compile_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Matches `label` and captures everything after it up to the next comma.
fn label_pattern(label: &str) -> Result<Regex, ExtractError> {
    Ok(Regex::new(&format!(r"{}\s*([^,]*)", regex::escape(label)))?)
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Extracts weather readings from pages that follow a [`PageLayout`].
///
/// Selectors and label patterns are compiled once in [`WeatherExtractor::new`],
/// so one extractor can be reused for any number of pages.
///
/// # Examples
///
/// ```
/// use timeanddate::{PageLayout, WeatherExtractor, UNAVAILABLE};
///
/// let extractor = WeatherExtractor::new(PageLayout::default()).unwrap();
/// let record = extractor.extract(b"<div class=\"h2\">15&nbsp;\xc2\xb0C</div>");
/// assert_eq!(record.temperature, "15 °C");
/// assert_eq!(record.wind, UNAVAILABLE);
/// ```
#[derive(Debug, Clone)]
pub struct WeatherExtractor {
    layout: PageLayout,
    temperature: Selector,
    summary: Selector,
    table: Selector,
    row: Selector,
    cell: Selector,
    feels_like: Regex,
    forecast: Regex,
    wind: Regex,
}

impl WeatherExtractor {
    pub fn new(layout: PageLayout) -> Result<Self, ExtractError> {
        Ok(Self {
            temperature: compile_selector(&layout.temperature_selector)?,
            summary: compile_selector(&layout.summary_selector)?,
            table: compile_selector(&layout.table_selector)?,
            row: compile_selector(&layout.row_selector)?,
            cell: compile_selector(&layout.cell_selector)?,
            feels_like: label_pattern(FEELS_LIKE_LABEL)?,
            forecast: label_pattern(FORECAST_LABEL)?,
            wind: label_pattern(WIND_LABEL)?,
            layout,
        })
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Extracts a record from raw page content.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, the same way
    /// the HTML parser recovers from malformed markup.
    pub fn extract(&self, html_content: &[u8]) -> WeatherRecord {
        let html = String::from_utf8_lossy(html_content);
        let document = Html::parse_document(&html);

        let mut raw = RawWeatherRecord {
            temperature: self.temperature(&document),
            ..Default::default()
        };

        if let Some(summary) = self.summary_line(&document) {
            raw.feels_like = labelled_reading(&self.feels_like, &summary);
            raw.forecast = labelled_reading(&self.forecast, &summary);
            raw.wind = labelled_reading(&self.wind, &summary);
        } else {
            debug!("No summary line found");
        }

        let rows = self.table_rows(&document);
        raw.visibility = self.cell_text(&rows, self.layout.visibility_row);
        raw.pressure = self.cell_text(&rows, self.layout.pressure_row);
        raw.humidity = self.cell_text(&rows, self.layout.humidity_row);
        raw.dew_point = self.cell_text(&rows, self.layout.dew_point_row);

        let record = WeatherRecord::from(raw);
        for (name, value) in record.fields() {
            if !WeatherRecord::is_available(value) {
                debug!("Field '{}' not found on page", name);
            }
        }
        record
    }

    fn temperature(&self, document: &Html) -> Option<String> {
        document
            .select(&self.temperature)
            .next()
            .map(|element| clean_text(&element_text(&element)))
    }

    /// The sibling matching the summary selector that follows the first match in the document.
    fn summary_line(&self, document: &Html) -> Option<String> {
        let first = document.select(&self.summary).next()?;
        let line = first
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| self.summary.matches(sibling))?;
        Some(clean_summary(&element_text(&line)))
    }

    fn table_rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match document.select(&self.table).next() {
            Some(table) => table.select(&self.row).collect(),
            None => {
                debug!("Info table '{}' not found", self.layout.table_selector);
                Vec::new()
            }
        }
    }

    fn cell_text(&self, rows: &[ElementRef<'_>], index: usize) -> Option<String> {
        let cell = rows.get(index)?.select(&self.cell).next()?;
        Some(clean_text(&element_text(&cell)))
    }
}

fn labelled_reading(pattern: &Regex, summary: &str) -> Option<String> {
    pattern
        .captures(summary)
        .and_then(|captures| captures.get(1))
        .map(|reading| clean_text(reading.as_str()))
}

/// Extracts a record from page content using the timeanddate.com [`PageLayout`].
///
/// Missing readings are reported as [`UNAVAILABLE`](crate::UNAVAILABLE); an error
/// is only returned if the extractor itself cannot be built.
pub fn extract_weather(html_content: &[u8]) -> Result<WeatherRecord, ExtractError> {
    Ok(WeatherExtractor::new(PageLayout::default())?.extract(html_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_record::UNAVAILABLE;

    const SUMMARY: &str =
        "19°CF:14°C / Feels Like: 14 °C, Forecast: 19 °C to 13 °C, Wind: 17 km/h from West";

    fn info_table(rows: &[(&str, &str)]) -> String {
        let rows: String = rows
            .iter()
            .map(|(header, value)| format!("<tr><th>{}</th><td>{}</td></tr>", header, value))
            .collect();
        format!(r#"<table class="table table--left"><tbody>{}</tbody></table>"#, rows)
    }

    fn london_page() -> String {
        let table = info_table(&[
            ("Location:", "London City Airport"),
            ("Current Time:", "19 Oct 2026, 14:20:11"),
            ("Latest Report:", "19 Oct 2026, 13:50"),
            ("Visibility:", "10\u{a0}km"),
            ("Pressure:", "1005 mbar"),
            ("Humidity:", "82%"),
            ("Dew Point:", "12 °C"),
        ]);
        format!(
            r#"<!DOCTYPE html>
<html><head><title>Weather for London</title></head>
<body>
<div id="qlook" class="bk-focus__qlook">
  <div class="h2">15{nbsp}°C</div>
  <p>Passing clouds.</p>
  <p>{summary}</p>
</div>
<div class="bk-focus__info">{table}</div>
</body></html>"#,
            nbsp = '\u{a0}',
            summary = SUMMARY,
            table = table,
        )
    }

    #[test]
    fn test_extract_full_page() -> Result<(), ExtractError> {
        let record = extract_weather(london_page().as_bytes())?;
        assert_eq!(
            record,
            WeatherRecord {
                temperature: "15 °C".to_string(),
                visibility: "10 km".to_string(),
                pressure: "1005 mbar".to_string(),
                humidity: "82%".to_string(),
                dew_point: "12 °C".to_string(),
                feels_like: "14 °C".to_string(),
                forecast: "19 °C to 13 °C".to_string(),
                wind: "17 km/h from West".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_extract_is_repeatable() -> Result<(), ExtractError> {
        let extractor = WeatherExtractor::new(PageLayout::default())?;
        let page = london_page();
        let first = extractor.extract(page.as_bytes());
        let second = extractor.extract(page.as_bytes());
        assert_eq!(first, second);
        assert_eq!(first, extract_weather(page.as_bytes())?);
        Ok(())
    }

    #[test]
    fn test_missing_temperature() -> Result<(), ExtractError> {
        let page = london_page().replace(r#"class="h2""#, r#"class="h3""#);
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.temperature, UNAVAILABLE);
        assert_eq!(record.pressure, "1005 mbar");
        Ok(())
    }

    #[test]
    fn test_empty_document_is_all_unavailable() -> Result<(), ExtractError> {
        let record = extract_weather(b"")?;
        assert_eq!(record, WeatherRecord::unavailable());
        Ok(())
    }

    #[test]
    fn test_short_table() -> Result<(), ExtractError> {
        let table = info_table(&[
            ("Location:", "London City Airport"),
            ("Current Time:", "14:20"),
            ("Latest Report:", "13:50"),
        ]);
        let page = format!(r#"<div class="h2">15 °C</div>{}"#, table);
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.temperature, "15 °C");
        assert_eq!(record.visibility, UNAVAILABLE);
        assert_eq!(record.pressure, UNAVAILABLE);
        assert_eq!(record.humidity, UNAVAILABLE);
        assert_eq!(record.dew_point, UNAVAILABLE);
        Ok(())
    }

    #[test]
    fn test_partial_table() -> Result<(), ExtractError> {
        let table = info_table(&[
            ("Location:", "Oslo"),
            ("Current Time:", "14:20"),
            ("Latest Report:", "13:50"),
            ("Visibility:", "N/A"),
            ("Pressure:", "1021 mbar"),
        ]);
        let record = extract_weather(table.as_bytes())?;
        assert_eq!(record.visibility, "N/A");
        assert_eq!(record.pressure, "1021 mbar");
        assert_eq!(record.humidity, UNAVAILABLE);
        assert_eq!(record.dew_point, UNAVAILABLE);
        Ok(())
    }

    #[test]
    fn test_table_without_left_class_is_ignored() -> Result<(), ExtractError> {
        let page = london_page().replace("table--left", "table--right");
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.visibility, UNAVAILABLE);
        assert_eq!(record.dew_point, UNAVAILABLE);
        assert_eq!(record.temperature, "15 °C");
        Ok(())
    }

    #[test]
    fn test_row_without_data_cell() -> Result<(), ExtractError> {
        let page = r#"<table class="table--left"><tr><td>a</td></tr><tr><td>b</td></tr><tr><td>c</td></tr><tr><th>Visibility:</th></tr><tr><td>998 mbar</td></tr></table>"#;
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.visibility, UNAVAILABLE);
        assert_eq!(record.pressure, "998 mbar");
        Ok(())
    }

    #[test]
    fn test_single_paragraph_has_no_summary() -> Result<(), ExtractError> {
        let page = format!(r#"<div><p>{}</p></div>"#, SUMMARY);
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.feels_like, UNAVAILABLE);
        assert_eq!(record.forecast, UNAVAILABLE);
        assert_eq!(record.wind, UNAVAILABLE);
        Ok(())
    }

    #[test]
    fn test_summary_must_be_sibling_of_first_paragraph() -> Result<(), ExtractError> {
        let page = format!(
            r#"<div><p>Passing clouds.</p></div><div><p>{}</p></div>"#,
            SUMMARY
        );
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.wind, UNAVAILABLE);

        let page = format!(
            r#"<div><p>Passing clouds.</p><span>ad</span><p>{}</p></div>"#,
            SUMMARY
        );
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.wind, "17 km/h from West");
        Ok(())
    }

    #[test]
    fn test_labelled_readings() -> Result<(), ExtractError> {
        let summary = clean_summary(SUMMARY);
        assert_eq!(
            labelled_reading(&label_pattern(FEELS_LIKE_LABEL)?, &summary).as_deref(),
            Some("14 °C")
        );
        assert_eq!(
            labelled_reading(&label_pattern(FORECAST_LABEL)?, &summary).as_deref(),
            Some("19 °C to 13 °C")
        );
        assert_eq!(
            labelled_reading(&label_pattern(WIND_LABEL)?, &summary).as_deref(),
            Some("17 km/h from West")
        );
        Ok(())
    }

    #[test]
    fn test_empty_label_is_not_unavailable() -> Result<(), ExtractError> {
        let page = "<p>Sunny.</p><p>Feels Like: 3 °C, Forecast: 5 / 1 °C, Wind: , gusts</p>";
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.wind, "");
        assert_eq!(record.feels_like, "3 °C");
        assert_eq!(record.forecast, "5 °C to 1 °C");

        let pattern = label_pattern(WIND_LABEL)?;
        assert_eq!(labelled_reading(&pattern, "Wind:,").as_deref(), Some(""));
        assert_eq!(labelled_reading(&pattern, "Gusts: 40 km/h"), None);
        Ok(())
    }

    #[test]
    fn test_missing_label() -> Result<(), ExtractError> {
        let page = "<p>Sunny.</p><p>Feels Like: 3 °C, Wind: 4 km/h ↑ from North</p>";
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.feels_like, "3 °C");
        assert_eq!(record.forecast, UNAVAILABLE);
        assert_eq!(record.wind, "4 km/h from North");
        Ok(())
    }

    #[test]
    fn test_nbsp_entities_are_normalized() -> Result<(), ExtractError> {
        let page = r#"<div class="h2">&nbsp;-2&nbsp;°C&nbsp;</div>
<p>Snow.</p><p>Feels Like:&nbsp;-7&nbsp;°C, Wind:&nbsp;20&nbsp;km/h</p>"#;
        let record = extract_weather(page.as_bytes())?;
        assert_eq!(record.temperature, "-2 °C");
        assert_eq!(record.feels_like, "-7 °C");
        assert_eq!(record.wind, "20 km/h");
        for (_, value) in record.fields() {
            assert!(!value.contains('\u{a0}'));
        }
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() -> Result<(), ExtractError> {
        let mut page = b"<div class=\"h2\">21 \xff\xfeC</div>".to_vec();
        page.extend_from_slice(b"<p>x</p><p>Wind: 5 km/h</p>");
        let record = extract_weather(&page)?;
        assert!(record.temperature.starts_with("21 "));
        assert_eq!(record.wind, "5 km/h");
        Ok(())
    }

    #[test]
    fn test_custom_layout() -> Result<(), ExtractError> {
        let layout = PageLayout {
            temperature_selector: "#now .temp".to_string(),
            table_selector: "table#details".to_string(),
            visibility_row: 0,
            pressure_row: 1,
            humidity_row: 2,
            dew_point_row: 3,
            ..PageLayout::default()
        };
        let page = r#"<div id="now"><span class="temp">30 °F</span></div>
<table id="details"><tr><td>6 mi</td></tr><tr><td>29.9 "Hg</td></tr><tr><td>40%</td></tr><tr><td>8 °F</td></tr></table>"#;
        let extractor = WeatherExtractor::new(layout.clone())?;
        assert_eq!(extractor.layout(), &layout);
        let record = extractor.extract(page.as_bytes());
        assert_eq!(record.temperature, "30 °F");
        assert_eq!(record.visibility, "6 mi");
        assert_eq!(record.pressure, "29.9 \"Hg");
        assert_eq!(record.humidity, "40%");
        assert_eq!(record.dew_point, "8 °F");
        Ok(())
    }

    #[test]
    fn test_invalid_selector() {
        let layout = PageLayout {
            table_selector: "table[".to_string(),
            ..PageLayout::default()
        };
        match WeatherExtractor::new(layout) {
            Err(ExtractError::InvalidSelector { selector, .. }) => assert_eq!(selector, "table["),
            other => panic!("Expected InvalidSelector, got {:?}", other),
        }
    }
}
