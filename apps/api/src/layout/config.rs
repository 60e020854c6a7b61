//! Page geometry and per-style typography for the export document.
//!
//! Defaults model an A4 page in points (595.28 × 841.89) with 40pt margins.
//! Every field deserializes with a default so API callers can override just
//! the handful they care about.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontWeight;
use crate::layout::page::{Rgb, RunStyle};
use crate::layout::LayoutError;

pub const DEFAULT_PRODUCT_LABEL: &str = "Generated by Voyage Planner";

const TEAL: Rgb = Rgb(16, 92, 76);
const INK: Rgb = Rgb(40, 40, 40);

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

/// Typography for one run style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMetrics {
    pub font_size: f32,
    /// Vertical advance of one line, including leading.
    pub line_height: f32,
    /// Extra space above the first line, skipped at the top of a page.
    #[serde(default)]
    pub spacing_before: f32,
    #[serde(default)]
    pub weight: FontWeight,
    pub color: Rgb,
}

impl StyleMetrics {
    fn new(font_size: f32, line_height: f32, weight: FontWeight, color: Rgb) -> Self {
        Self {
            font_size,
            line_height,
            spacing_before: 0.0,
            weight,
            color,
        }
    }

    fn with_spacing_before(mut self, spacing: f32) -> Self {
        self.spacing_before = spacing;
        self
    }
}

/// Metrics for every run style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSheet {
    pub title: StyleMetrics,
    pub subtitle: StyleMetrics,
    pub summary_label: StyleMetrics,
    pub summary_value: StyleMetrics,
    pub bold_header: StyleMetrics,
    pub bullet: StyleMetrics,
    pub inline_emphasis: StyleMetrics,
    pub plain: StyleMetrics,
    pub footer: StyleMetrics,
}

impl Default for StyleSheet {
    fn default() -> Self {
        use FontWeight::{Bold, Regular};
        Self {
            title: StyleMetrics::new(22.0, 28.0, Bold, Rgb(255, 255, 255)),
            subtitle: StyleMetrics::new(12.0, 18.0, Regular, Rgb(214, 236, 230)),
            summary_label: StyleMetrics::new(10.0, 16.0, Bold, TEAL),
            summary_value: StyleMetrics::new(10.0, 16.0, Regular, INK),
            bold_header: StyleMetrics::new(13.0, 18.0, Bold, TEAL).with_spacing_before(10.0),
            bullet: StyleMetrics::new(11.0, 15.0, Regular, INK),
            inline_emphasis: StyleMetrics::new(11.0, 15.0, Regular, INK),
            plain: StyleMetrics::new(11.0, 15.0, Regular, INK),
            footer: StyleMetrics::new(9.0, 12.0, Regular, Rgb(255, 255, 255)),
        }
    }
}

impl StyleSheet {
    /// Metrics for a run style. Blank lines take the plain body metrics.
    pub fn get(&self, style: RunStyle) -> &StyleMetrics {
        match style {
            RunStyle::Title => &self.title,
            RunStyle::Subtitle => &self.subtitle,
            RunStyle::SummaryLabel => &self.summary_label,
            RunStyle::SummaryValue => &self.summary_value,
            RunStyle::BoldHeader => &self.bold_header,
            RunStyle::Bullet => &self.bullet,
            RunStyle::InlineEmphasis => &self.inline_emphasis,
            RunStyle::Plain | RunStyle::Blank => &self.plain,
            RunStyle::Footer => &self.footer,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for every page of the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Left inset of bullet text; the glyph sits in this gutter.
    pub bullet_indent: f32,
    pub bullet_glyph_offset: f32,
    /// Vertical gap emitted for a blank source line.
    pub blank_spacing: f32,
    /// Height of the first-page title band.
    pub header_band_height: f32,
    /// Gap below the header band and below the summary box.
    pub section_gap: f32,
    pub summary_padding: f32,
    pub summary_row_height: f32,
    pub summary_label_width: f32,
    /// Height reserved at the bottom of every page for the footer band.
    pub footer_height: f32,
    pub header_fill: Rgb,
    pub summary_fill: Rgb,
    pub footer_fill: Rgb,
    /// Left-aligned footer text. Fixed by the service, never taken from requests.
    #[serde(skip_deserializing)]
    pub product_label: String,
    pub styles: StyleSheet,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_top: 40.0,
            margin_bottom: 20.0,
            margin_left: 40.0,
            margin_right: 40.0,
            bullet_indent: 14.0,
            bullet_glyph_offset: 3.0,
            blank_spacing: 6.0,
            header_band_height: 96.0,
            section_gap: 16.0,
            summary_padding: 10.0,
            summary_row_height: 16.0,
            summary_label_width: 90.0,
            footer_height: 32.0,
            header_fill: TEAL,
            summary_fill: Rgb(236, 246, 243),
            footer_fill: TEAL,
            product_label: DEFAULT_PRODUCT_LABEL.to_string(),
            styles: StyleSheet::default(),
        }
    }
}

impl PaginationConfig {
    /// Horizontal space for unindented body text.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Horizontal space for text of the given style, after any style indent.
    pub fn content_width_for(&self, style: RunStyle) -> f32 {
        match style {
            RunStyle::Bullet => self.content_width() - self.bullet_indent,
            _ => self.content_width(),
        }
    }

    /// Lowest y a body line may reach; everything below belongs to the footer.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.footer_height - self.margin_bottom
    }

    /// Rejects geometry under which no sane layout exists.
    ///
    /// Measurement-dependent checks live with the paginator, which owns the measurer.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let numbers = [
            self.page_width,
            self.page_height,
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
            self.bullet_indent,
            self.bullet_glyph_offset,
            self.blank_spacing,
            self.header_band_height,
            self.section_gap,
            self.summary_padding,
            self.summary_row_height,
            self.summary_label_width,
            self.footer_height,
        ];
        if numbers.iter().any(|n| !n.is_finite() || *n < 0.0) {
            return Err(LayoutError::InvalidGeometry(
                "page dimensions, margins, spacing and band heights must be finite and non-negative"
                    .to_string(),
            ));
        }

        for style in [RunStyle::Plain, RunStyle::Bullet] {
            let width = self.content_width_for(style);
            if width <= 0.0 {
                return Err(LayoutError::NonPositiveContentWidth { style, width });
            }
        }

        for style in RunStyle::BODY.iter().chain(&[RunStyle::Footer]) {
            let metrics = self.styles.get(*style);
            if !(metrics.font_size > 0.0 && metrics.line_height > 0.0) {
                return Err(LayoutError::InvalidStyle(*style));
            }
        }

        let available = self.content_bottom() - self.margin_top;
        let tallest = RunStyle::BODY
            .iter()
            .map(|s| self.styles.get(*s).line_height)
            .fold(0.0_f32, f32::max);
        if available < tallest {
            return Err(LayoutError::ContentHeightTooSmall {
                available,
                required: tallest,
            });
        }

        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
