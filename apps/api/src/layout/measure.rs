//! Text measurement capability injected into the paginator.
//!
//! Font metrics differ per export target, so the paginator never measures text
//! itself: it asks a `TextMeasurer`. The service resolves one by name; tests
//! can hand in anything that implements the trait.

use crate::layout::config::StyleSheet;
use crate::layout::font_metrics::{get_metrics, FontFamily};
use crate::layout::page::RunStyle;
use crate::layout::LayoutError;

/// Strings every measurer must report a finite, positive width for.
/// `@` and `W` are the widest ASCII glyphs in the proportional faces.
pub const GLYPH_PROBES: [&str; 3] = ["M", "W", "@"];

/// Measures rendered text width in points for a run style.
pub trait TextMeasurer: Send + Sync {
    fn measure_width(&self, text: &str, style: RunStyle) -> f32;
}

/// Measurer backed by the static AFM width tables, scaled by each style's font size.
#[derive(Debug, Clone)]
pub struct StaticFontMeasurer {
    family: FontFamily,
    styles: StyleSheet,
}

impl StaticFontMeasurer {
    pub fn new(family: FontFamily, styles: StyleSheet) -> Self {
        Self { family, styles }
    }

    pub fn family(&self) -> FontFamily {
        self.family
    }
}

impl TextMeasurer for StaticFontMeasurer {
    fn measure_width(&self, text: &str, style: RunStyle) -> f32 {
        let metrics = self.styles.get(style);
        get_metrics(self.family, metrics.weight).measure_str(text) * metrics.font_size
    }
}

/// Resolves a measurer by font name. An unknown name means the export target
/// has no measurement capability for it.
pub fn measurer_for(name: &str, styles: &StyleSheet) -> Result<StaticFontMeasurer, LayoutError> {
    FontFamily::from_name(name)
        .map(|family| StaticFontMeasurer::new(family, styles.clone()))
        .ok_or_else(|| LayoutError::UnknownMeasurer(name.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
