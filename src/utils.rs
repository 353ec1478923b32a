const NBSP: char = '\u{a0}';

/// Replaces every non-breaking space with a regular space and trims both ends.
pub fn clean_text(text: &str) -> String {
    text.replace(NBSP, " ").trim().to_string()
}

/// Cleans the summary line so the labelled readings can be split on commas.
///
/// The page renders two readings back to back without a separator, e.g.
/// `19°CF:14°C` or `14 °CWind:`, so a comma is put back between them.
/// The `/` between the forecast high and low becomes `°C to`, and the wind
/// direction arrow is dropped.
pub fn clean_summary(text: &str) -> String {
    let text = clean_text(text)
        .replace("CF", "C, F")
        .replace("CW", "C, W")
        .replace(" / ", " °C to ")
        .replace("↑ ", "");
    text.trim().to_string()
}
