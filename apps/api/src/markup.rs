//! Line-level markup helpers shared by the itinerary parser and the document paginator.
//!
//! AI-generated itineraries use a loose markdown dialect: `**bold**` / `__bold__`
//! emphasis and bullet lines prefixed with `•`, `-`, `*` or a typographic dash.
//! Nothing here fails: unbalanced or stray markers fall through as text.

/// Emphasis delimiters recognized in itinerary text.
pub const EMPHASIS_MARKERS: [&str; 2] = ["**", "__"];

/// Glyph rendered in front of the first wrapped sub-line of a bullet.
pub const BULLET_GLYPH: &str = "•";

/// Markers that open a bullet even when glued to the following word.
const GLYPH_MARKERS: [char; 4] = ['•', '◦', '▪', '–'];

/// Markers that only open a bullet when followed by whitespace, so that
/// `**bold**` and `-5°C` are not mistaken for list items.
const SPACED_MARKERS: [char; 2] = ['-', '*'];

// ────────────────────────────────────────────────────────────────────────────
// Bullets
// ────────────────────────────────────────────────────────────────────────────

/// Returns the text after the bullet marker (trimmed), or `None` if the line
/// does not start with one. Leading indentation is ignored.
pub fn strip_bullet_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    if GLYPH_MARKERS.contains(&first) {
        return Some(trimmed[first.len_utf8()..].trim());
    }

    if SPACED_MARKERS.contains(&first) {
        let rest = &trimmed[first.len_utf8()..];
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim());
        }
    }

    None
}

// ────────────────────────────────────────────────────────────────────────────
// Emphasis
// ────────────────────────────────────────────────────────────────────────────

/// True if the line contains any emphasis delimiter.
pub fn has_emphasis(line: &str) -> bool {
    EMPHASIS_MARKERS.iter().any(|m| line.contains(m))
}

/// True if the whole (trimmed) line is a single emphasis span, e.g. `**Day 2: Hills**`.
///
/// `**Morning** and **Evening**` opens and closes with markers but is not one span,
/// so the inner text must not contain the delimiter again.
pub fn is_fully_emphasized(line: &str) -> bool {
    let trimmed = line.trim();
    EMPHASIS_MARKERS.iter().any(|m| {
        trimmed.len() > m.len() * 2
            && trimmed.starts_with(m)
            && trimmed.ends_with(m)
            && {
                let inner = &trimmed[m.len()..trimmed.len() - m.len()];
                !inner.contains(m) && !inner.trim().is_empty()
            }
    })
}

/// Removes every emphasis delimiter from the text, leaving the words intact.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS_MARKERS
        .iter()
        .fold(text.to_string(), |acc, m| acc.replace(m, ""))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bullet_marker_glyph() {
        assert_eq!(strip_bullet_marker("• Visit Ranchi"), Some("Visit Ranchi"));
        assert_eq!(strip_bullet_marker("•Visit Ranchi"), Some("Visit Ranchi"));
        assert_eq!(strip_bullet_marker("   – Sunset point"), Some("Sunset point"));
    }

    #[test]
    fn test_strip_bullet_marker_dash_and_star_need_space() {
        assert_eq!(strip_bullet_marker("- Hike Netarhat"), Some("Hike Netarhat"));
        assert_eq!(strip_bullet_marker("* Boat ride"), Some("Boat ride"));
        assert_eq!(strip_bullet_marker("-5°C at night"), None);
        assert_eq!(strip_bullet_marker("**Day 1**"), None);
    }

    #[test]
    fn test_strip_bullet_marker_plain_and_empty() {
        assert_eq!(strip_bullet_marker("Check in at noon"), None);
        assert_eq!(strip_bullet_marker(""), None);
        assert_eq!(strip_bullet_marker("   "), None);
    }

    #[test]
    fn test_bare_marker_yields_empty_text() {
        assert_eq!(strip_bullet_marker("•"), Some(""));
        assert_eq!(strip_bullet_marker("- "), Some(""));
    }

    #[test]
    fn test_is_fully_emphasized() {
        assert!(is_fully_emphasized("**Day 2: Adventure**"));
        assert!(is_fully_emphasized("  __Evening__  "));
        assert!(!is_fully_emphasized("**Morning** and **Evening**"));
        assert!(!is_fully_emphasized("Visit the **falls** today"));
        assert!(!is_fully_emphasized("****"));
        assert!(!is_fully_emphasized("**unclosed"));
    }

    #[test]
    fn test_has_emphasis() {
        assert!(has_emphasis("Try the **local** thali"));
        assert!(has_emphasis("__x"));
        assert!(!has_emphasis("plain text"));
    }

    #[test]
    fn test_strip_emphasis_removes_all_markers() {
        assert_eq!(strip_emphasis("**Day 1:** __Arrival__"), "Day 1: Arrival");
        assert_eq!(strip_emphasis("no markers"), "no markers");
    }
}
