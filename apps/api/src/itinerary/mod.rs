// Itinerary parsing: turns AI-generated itinerary text into day records for
// the interactive timeline.

pub mod handlers;
pub mod parser;

pub use parser::{parse, ParsedItinerary};

use crate::errors::AppError;

/// Rejects itinerary text above the configured size limit.
pub fn ensure_text_within_limit(text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "Itinerary text is {} bytes; the limit is {max_bytes}",
            text.len()
        )));
    }
    Ok(())
}
