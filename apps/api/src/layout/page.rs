//! Page descriptors produced by the paginator.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page; `y` is the top of the line box a run sits in.

use serde::{Deserialize, Serialize};

/// Visual style of a text run.
///
/// The first five mirror the body line classes; the rest decorate the first-page
/// header band, the summary box and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunStyle {
    Blank,
    BoldHeader,
    Bullet,
    InlineEmphasis,
    Plain,
    Title,
    Subtitle,
    SummaryLabel,
    SummaryValue,
    Footer,
}

impl RunStyle {
    /// Styles that carry itinerary body text, in classifier order.
    pub const BODY: [RunStyle; 5] = [
        RunStyle::Blank,
        RunStyle::BoldHeader,
        RunStyle::Bullet,
        RunStyle::InlineEmphasis,
        RunStyle::Plain,
    ];
}

/// An RGB fill or text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A positioned, styled piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
    pub x: f32,
    pub y: f32,
}

/// A filled background rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Rgb,
}

/// One fixed-size page of the export document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position in the document.
    pub index: usize,
    pub runs: Vec<TextRun>,
    pub bands: Vec<Band>,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Page {
    /// Runs carrying itinerary body text (no header, summary or footer decoration).
    pub fn body_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.runs.iter().filter(|r| RunStyle::BODY.contains(&r.style))
    }

    /// The stamped "Page i of N" footer text, if footers have been stamped.
    pub fn page_label(&self) -> Option<&str> {
        self.runs
            .iter()
            .find(|r| r.style == RunStyle::Footer && r.text.starts_with("Page "))
            .map(|r| r.text.as_str())
    }
}
