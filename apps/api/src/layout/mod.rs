// Export document layout: classifies itinerary lines, word-wraps them with an
// injected measurer, flows them across fixed-size pages and stamps footers.
// Everything here is pure and synchronous; handlers run it via spawn_blocking.

pub mod classify;
pub mod config;
pub mod document;
pub mod font_metrics;
pub mod handlers;
pub mod measure;
pub mod page;
pub mod paginator;
pub mod wrap;

use thiserror::Error;

use crate::layout::page::RunStyle;

// Re-export the public API consumed by handlers and state.
pub use config::PaginationConfig;
pub use document::{DocumentMetadata, ExportDocument, TripDetails};
pub use measure::measurer_for;
pub use paginator::paginate;

/// Configuration defects that make any layout impossible.
///
/// Malformed itinerary text is never an error; only these abort a call.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("content width for {style:?} text is {width}pt; margins and indent leave no room")]
    NonPositiveContentWidth { style: RunStyle, width: f32 },

    #[error("page leaves {available}pt for body text but a line needs {required}pt")]
    ContentHeightTooSmall { available: f32, required: f32 },

    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("style {0:?} needs a positive font size and line height")]
    InvalidStyle(RunStyle),

    #[error("no text measurer available for font '{0}'")]
    UnknownMeasurer(String),

    #[error("measurer returned {width} for {probe:?} in {style:?}; expected a finite positive width")]
    InvalidMeasurement {
        probe: String,
        style: RunStyle,
        width: f32,
    },

    #[error("glyph {probe:?} is {width}pt wide in {style:?} but the line is only {available}pt")]
    GlyphWiderThanLine {
        probe: String,
        style: RunStyle,
        width: f32,
        available: f32,
    },
}
