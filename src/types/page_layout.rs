//! CSS selectors and row positions describing where each reading sits on a weather page.

/// Describes the markup of a weather page.
///
/// [`PageLayout::default()`] matches the current timeanddate.com weather pages:
///
/// * the current temperature is the first element with class `h2`,
/// * the summary line ("Feels Like: ..., Forecast: ..., Wind: ...") is the `p`
///   sibling following the first `p` of the document,
/// * visibility, pressure, humidity and dew point are the first `td` of rows
///   3, 4, 5 and 6 (zero-based) of the `table--left` table.
///
/// The table rows are looked up by position only, there is no matching on the row headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub temperature_selector: String,
    pub summary_selector: String,
    pub table_selector: String,
    pub row_selector: String,
    pub cell_selector: String,
    pub visibility_row: usize,
    pub pressure_row: usize,
    pub humidity_row: usize,
    pub dew_point_row: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            temperature_selector: ".h2".to_string(),
            summary_selector: "p".to_string(),
            table_selector: "table.table--left".to_string(),
            row_selector: "tr".to_string(),
            cell_selector: "td".to_string(),
            visibility_row: 3,
            pressure_row: 4,
            humidity_row: 5,
            dew_point_row: 6,
        }
    }
}
