//! Body line classifier.
//!
//! Rules are tried in a fixed order and the first match wins, so every line
//! lands in exactly one class. `BoldHeader` is tested before `InlineEmphasis`
//! so a fully wrapped bold line is not treated as inline emphasis, and
//! `Bullet` before `InlineEmphasis` so emphasized bullets keep their glyph.

use crate::layout::page::RunStyle;
use crate::markup::{has_emphasis, is_fully_emphasized, strip_bullet_marker, strip_emphasis};

/// A classified body line carrying its render text (markers already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    BoldHeader(String),
    Bullet(String),
    InlineEmphasis(String),
    Plain(String),
}

impl LineKind {
    pub fn style(&self) -> RunStyle {
        match self {
            LineKind::Blank => RunStyle::Blank,
            LineKind::BoldHeader(_) => RunStyle::BoldHeader,
            LineKind::Bullet(_) => RunStyle::Bullet,
            LineKind::InlineEmphasis(_) => RunStyle::InlineEmphasis,
            LineKind::Plain(_) => RunStyle::Plain,
        }
    }

    /// Text to measure and render; empty for blank lines.
    pub fn text(&self) -> &str {
        match self {
            LineKind::Blank => "",
            LineKind::BoldHeader(t)
            | LineKind::Bullet(t)
            | LineKind::InlineEmphasis(t)
            | LineKind::Plain(t) => t,
        }
    }
}

pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if is_fully_emphasized(trimmed) {
        return LineKind::BoldHeader(strip_emphasis(trimmed).trim().to_string());
    }

    if let Some(rest) = strip_bullet_marker(trimmed) {
        return LineKind::Bullet(strip_emphasis(rest).trim().to_string());
    }

    if has_emphasis(trimmed) {
        return LineKind::InlineEmphasis(strip_emphasis(trimmed).trim().to_string());
    }

    LineKind::Plain(trimmed.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
