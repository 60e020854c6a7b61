//! Greedy word-wrap and single-line fitting against an injected measurer.

use crate::layout::measure::TextMeasurer;
use crate::layout::page::RunStyle;
use crate::layout::LayoutError;

/// Appended to single-line text cut short by `fit_to_width`.
pub const ELLIPSIS: &str = "…";

/// Packs words into lines no wider than `max_width`.
///
/// Whitespace runs collapse to single spaces. A word wider than the whole line
/// is split at character boundaries. A single glyph wider than the line cannot
/// be placed at all and is reported as `GlyphWiderThanLine`.
/// Empty or whitespace-only text yields no lines.
pub fn wrap_words(
    text: &str,
    max_width: f32,
    style: RunStyle,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<String>, LayoutError> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measurer.measure_width(&candidate, style) <= max_width {
            current = candidate;
            continue;
        }

        // Current line is full: flush it and start the next with this word.
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measurer.measure_width(word, style) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = split_word(word, max_width, style, measurer)?;
            // The last piece stays open so following words can join it.
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// Splits an overlong word into the fewest pieces that each fit `max_width`.
fn split_word(
    word: &str,
    max_width: f32,
    style: RunStyle,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<String>, LayoutError> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for ch in word.chars() {
        let glyph = ch.to_string();
        let width = measurer.measure_width(&glyph, style);
        if !width.is_finite() {
            return Err(LayoutError::InvalidMeasurement {
                probe: glyph,
                style,
                width,
            });
        }
        if width > max_width {
            return Err(LayoutError::GlyphWiderThanLine {
                probe: glyph,
                style,
                width,
                available: max_width,
            });
        }

        piece.push(ch);
        if piece.chars().count() > 1 && measurer.measure_width(&piece, style) > max_width {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, glyph));
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    Ok(pieces)
}

/// Shortens single-line text to fit `max_width`, ending it with `ELLIPSIS`.
///
/// Text that fits comes back unchanged; when not even the ellipsis fits the
/// result is empty.
pub fn fit_to_width(
    text: &str,
    max_width: f32,
    style: RunStyle,
    measurer: &dyn TextMeasurer,
) -> String {
    if measurer.measure_width(text, style) <= max_width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while kept.pop().is_some() {
        let prefix: String = kept.iter().collect();
        let candidate = format!("{}{ELLIPSIS}", prefix.trim_end());
        if measurer.measure_width(&candidate, style) <= max_width {
            return candidate;
        }
    }
    String::new()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 1 unit wide, so widths equal character counts.
    struct UnitMeasurer;

    impl TextMeasurer for UnitMeasurer {
        fn measure_width(&self, text: &str, _style: RunStyle) -> f32 {
            text.chars().count() as f32
        }
    }

    /// ASCII is 5pt per char; anything else is a 200pt wide glyph.
    struct WideGlyphMeasurer;

    impl TextMeasurer for WideGlyphMeasurer {
        fn measure_width(&self, text: &str, _style: RunStyle) -> f32 {
            text.chars()
                .map(|c| if c.is_ascii() { 5.0 } else { 200.0 })
                .sum()
        }
    }

    fn wrap(text: &str, width: f32) -> Vec<String> {
        wrap_words(text, width, RunStyle::Plain, &UnitMeasurer).unwrap()
    }

    fn fit(text: &str, width: f32) -> String {
        fit_to_width(text, width, RunStyle::Title, &UnitMeasurer)
    }

    #[test]
    fn test_empty_and_whitespace_yield_no_lines() {
        assert!(wrap("", 10.0).is_empty());
        assert!(wrap("   \t ", 10.0).is_empty());
    }

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap("Visit Ranchi", 20.0), vec!["Visit Ranchi"]);
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        assert_eq!(wrap("abcde fghij", 11.0), vec!["abcde fghij"]);
    }

    #[test]
    fn test_greedy_packing() {
        assert_eq!(
            wrap("the quick brown fox jumps over", 10.0),
            vec!["the quick", "brown fox", "jumps over"]
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(wrap("a    b\t c", 20.0), vec!["a b c"]);
    }

    #[test]
    fn test_overlong_word_is_split() {
        assert_eq!(
            wrap("go Jharkhandtourism now", 5.0),
            vec!["go", "Jhark", "handt", "ouris", "m now"]
        );
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = "Netarhat, the Queen of Chotanagpur, is famous for sunrise and sunset views \
                    supercalifragilisticexpialidocious and pine forests";
        for width in [6.0, 9.0, 17.0, 40.0] {
            for line in wrap(text, width) {
                assert!(
                    line.chars().count() as f32 <= width,
                    "line {line:?} exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn test_wrapping_preserves_words() {
        let text = "Hike to the Lodh falls then picnic by the river";
        let joined = wrap(text, 12.0).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn test_glyph_wider_than_line_is_an_error() {
        let err = wrap_words("京都 trip", 140.0, RunStyle::Bullet, &WideGlyphMeasurer).unwrap_err();
        assert_eq!(
            err,
            LayoutError::GlyphWiderThanLine {
                probe: "京".to_string(),
                style: RunStyle::Bullet,
                width: 200.0,
                available: 140.0,
            }
        );
    }

    #[test]
    fn test_wide_glyph_that_fits_is_placed() {
        let lines = wrap_words("京 trip", 240.0, RunStyle::Plain, &WideGlyphMeasurer).unwrap();
        assert_eq!(lines, vec!["京 trip"]);
    }

    #[test]
    fn test_fit_keeps_text_that_fits() {
        assert_eq!(fit("Ranchi", 10.0), "Ranchi");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        let fitted = fit("Netarhat Hill Station", 10.0);
        assert_eq!(fitted, "Netarhat…");
        assert!(fitted.chars().count() as f32 <= 10.0);
    }

    #[test]
    fn test_fit_yields_empty_when_nothing_fits() {
        assert_eq!(fit("Ranchi", 0.5), "");
    }
}
