//! Document paginator: flows itinerary text across fixed-size pages.
//!
//! # Passes
//! - `layout_content` classifies each source line, word-wraps it and places the
//!   wrapped lines top to bottom, opening a new page whenever the next line
//!   would cross into the footer reservation. Breaks only fall between lines.
//! - `stamp_footers` revisits every page once the final count N is known and
//!   adds the footer band, "Page i of N" and the product label.
//!
//! `paginate` runs both after rejecting configurations no layout can satisfy.

use tracing::{debug, warn};

use crate::layout::classify::{classify, LineKind};
use crate::layout::config::PaginationConfig;
use crate::layout::document::{DocumentMetadata, SummaryField};
use crate::layout::measure::{TextMeasurer, GLYPH_PROBES};
use crate::layout::page::{Band, Page, RunStyle, TextRun};
use crate::layout::wrap::{fit_to_width, wrap_words};
use crate::layout::LayoutError;
use crate::markup::BULLET_GLYPH;

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `text` and stamps footers. Always returns at least one page.
pub fn paginate(
    text: &str,
    config: &PaginationConfig,
    metadata: &DocumentMetadata,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<Page>, LayoutError> {
    let pages = layout_content(text, config, metadata, measurer)?;
    Ok(stamp_footers(pages, config, measurer))
}

/// First pass: header band, summary box and body text, without footers.
pub fn layout_content(
    text: &str,
    config: &PaginationConfig,
    metadata: &DocumentMetadata,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<Page>, LayoutError> {
    config.validate()?;
    check_measurer(config, measurer)?;

    let mut flow = Flow::new(config, measurer);
    flow.place_header(metadata);
    for line in text.lines() {
        flow.place_line(&classify(line))?;
    }

    let pages = flow.finish();
    debug!(pages = pages.len(), "Laid out export document");
    Ok(pages)
}

/// Second pass: stamps the footer on every page now that the page count is final.
pub fn stamp_footers(
    pages: Vec<Page>,
    config: &PaginationConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<Page> {
    let total = pages.len();
    let band_y = config.page_height - config.footer_height;
    let text_y = band_y + ((config.footer_height - config.styles.footer.line_height) / 2.0).max(0.0);

    pages
        .into_iter()
        .map(|mut page| {
            page.bands.push(Band {
                x: 0.0,
                y: band_y,
                width: config.page_width,
                height: config.footer_height,
                fill: config.footer_fill,
            });

            let label = format!("Page {} of {}", page.index + 1, total);
            let label_width = measurer.measure_width(&label, RunStyle::Footer);
            page.runs.push(TextRun {
                x: config.page_width - config.margin_right - label_width,
                y: text_y,
                text: label,
                style: RunStyle::Footer,
            });
            page.runs.push(TextRun {
                text: config.product_label.clone(),
                style: RunStyle::Footer,
                x: config.margin_left,
                y: text_y,
            });
            page
        })
        .collect()
}

/// Rejects measurers that cannot produce a sane layout under this config.
fn check_measurer(config: &PaginationConfig, measurer: &dyn TextMeasurer) -> Result<(), LayoutError> {
    let styles = [
        RunStyle::BoldHeader,
        RunStyle::Bullet,
        RunStyle::InlineEmphasis,
        RunStyle::Plain,
        RunStyle::Footer,
    ];

    for style in styles {
        for probe in GLYPH_PROBES {
            let width = measurer.measure_width(probe, style);
            if !(width.is_finite() && width > 0.0) {
                return Err(LayoutError::InvalidMeasurement {
                    probe: probe.to_string(),
                    style,
                    width,
                });
            }

            // Footer text is placed, never wrapped.
            if style == RunStyle::Footer {
                continue;
            }
            let available = config.content_width_for(style);
            if width > available {
                return Err(LayoutError::GlyphWiderThanLine {
                    probe: probe.to_string(),
                    style,
                    width,
                    available,
                });
            }
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Flow state
// ────────────────────────────────────────────────────────────────────────────

/// Cursor state for one `layout_content` call.
struct Flow<'a> {
    config: &'a PaginationConfig,
    measurer: &'a dyn TextMeasurer,
    done: Vec<Page>,
    page: Page,
    cursor_y: f32,
    /// False until the first body line lands on the current page.
    page_has_body: bool,
}

impl<'a> Flow<'a> {
    fn new(config: &'a PaginationConfig, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            config,
            measurer,
            done: Vec::new(),
            page: Page::new(0),
            cursor_y: config.margin_top,
            page_has_body: false,
        }
    }

    fn place_header(&mut self, metadata: &DocumentMetadata) {
        let c = self.config;

        self.page.bands.push(Band {
            x: 0.0,
            y: 0.0,
            width: c.page_width,
            height: c.header_band_height,
            fill: c.header_fill,
        });

        let block = c.styles.title.line_height + c.styles.subtitle.line_height;
        let title_y = ((c.header_band_height - block) / 2.0).max(0.0);
        self.push_fitted(&metadata.title, RunStyle::Title, c.margin_left, title_y, c.content_width());
        self.push_fitted(
            &metadata.subtitle,
            RunStyle::Subtitle,
            c.margin_left,
            title_y + c.styles.title.line_height,
            c.content_width(),
        );

        self.cursor_y = c.header_band_height + c.section_gap;
        self.place_summary(&metadata.summary_fields);
        self.cursor_y = self.cursor_y.max(c.margin_top);
    }

    fn place_summary(&mut self, fields: &[SummaryField]) {
        if fields.is_empty() {
            return;
        }
        let c = self.config;
        let top = self.cursor_y;

        let rows = if c.summary_row_height > 0.0 {
            let room = c.content_bottom() - top - 2.0 * c.summary_padding;
            let max_rows = (room / c.summary_row_height).floor().max(0.0) as usize;
            if max_rows < fields.len() {
                warn!(
                    shown = max_rows,
                    total = fields.len(),
                    "Summary box truncated to fit the first page"
                );
            }
            fields.len().min(max_rows)
        } else {
            fields.len()
        };
        if rows == 0 {
            return;
        }

        let height = 2.0 * c.summary_padding + rows as f32 * c.summary_row_height;
        self.page.bands.push(Band {
            x: c.margin_left,
            y: top,
            width: c.content_width(),
            height,
            fill: c.summary_fill,
        });

        let label_x = c.margin_left + c.summary_padding;
        let value_x = label_x + c.summary_label_width;
        let value_width = c.content_width() - 2.0 * c.summary_padding - c.summary_label_width;
        for (i, field) in fields.iter().take(rows).enumerate() {
            let y = top + c.summary_padding + i as f32 * c.summary_row_height;
            self.push_fitted(&field.label, RunStyle::SummaryLabel, label_x, y, c.summary_label_width);
            self.push_fitted(&field.value, RunStyle::SummaryValue, value_x, y, value_width);
        }

        self.cursor_y = top + height + c.section_gap;
    }

    fn place_line(&mut self, line: &LineKind) -> Result<(), LayoutError> {
        match line {
            LineKind::Blank => {
                self.skip(self.config.blank_spacing);
                Ok(())
            }
            LineKind::Bullet(text) => self.place_bullet(text),
            other => self.place_wrapped(other.text(), other.style()),
        }
    }

    fn place_wrapped(&mut self, text: &str, style: RunStyle) -> Result<(), LayoutError> {
        let lines = wrap_words(text, self.config.content_width_for(style), style, self.measurer)?;
        if lines.is_empty() {
            return Ok(());
        }

        self.lead_in(style);
        for line in lines {
            self.ensure_room(style);
            self.push_body_run(line, style, self.config.margin_left);
        }
        Ok(())
    }

    fn place_bullet(&mut self, text: &str) -> Result<(), LayoutError> {
        let style = RunStyle::Bullet;
        let lines = wrap_words(text, self.config.content_width_for(style), style, self.measurer)?;
        if lines.is_empty() {
            return Ok(());
        }

        self.lead_in(style);
        let glyph_x = self.config.margin_left + self.config.bullet_glyph_offset;
        let text_x = self.config.margin_left + self.config.bullet_indent;
        for (i, line) in lines.into_iter().enumerate() {
            self.ensure_room(style);
            if i == 0 {
                self.push_run(BULLET_GLYPH, style, glyph_x, self.cursor_y);
            }
            self.push_body_run(line, style, text_x);
        }
        Ok(())
    }

    /// Leading space above a block, dropped at the top of a page.
    fn lead_in(&mut self, style: RunStyle) {
        let spacing = self.config.styles.get(style).spacing_before;
        if self.page_has_body && spacing > 0.0 {
            self.cursor_y += spacing;
        }
    }

    fn skip(&mut self, gap: f32) {
        if self.page_has_body {
            self.cursor_y += gap;
        }
    }

    /// Opens a new page if one more line of `style` would cross the footer reservation.
    fn ensure_room(&mut self, style: RunStyle) {
        let line_height = self.config.styles.get(style).line_height;
        if self.cursor_y + line_height > self.config.content_bottom() {
            self.start_next_page();
        }
    }

    fn start_next_page(&mut self) {
        let next = Page::new(self.page.index + 1);
        self.done.push(std::mem::replace(&mut self.page, next));
        self.cursor_y = self.config.margin_top;
        self.page_has_body = false;
    }

    fn push_run(&mut self, text: &str, style: RunStyle, x: f32, y: f32) {
        self.page.runs.push(TextRun {
            text: text.to_string(),
            style,
            x,
            y,
        });
    }

    /// Places decoration text cut down to `max_width`; nothing when none of it fits.
    fn push_fitted(&mut self, text: &str, style: RunStyle, x: f32, y: f32, max_width: f32) {
        let fitted = fit_to_width(text, max_width, style, self.measurer);
        if !fitted.is_empty() {
            self.push_run(&fitted, style, x, y);
        }
    }

    /// Places one wrapped line at the cursor and advances past it.
    fn push_body_run(&mut self, text: String, style: RunStyle, x: f32) {
        self.page.runs.push(TextRun {
            text,
            style,
            x,
            y: self.cursor_y,
        });
        self.cursor_y += self.config.styles.get(style).line_height;
        self.page_has_body = true;
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.page);
        self.done
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
