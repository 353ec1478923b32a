use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Failed to compile label pattern")]
    InvalidPattern(#[from] regex::Error),
}
