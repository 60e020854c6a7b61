//! Itinerary parser: turns free-form AI itinerary text into day records.
//!
//! The generator is asked for "Day N" sections with bullet lists, but nothing
//! guarantees it. Every input parses: text without a single recognizable day
//! header collapses into one synthesized day.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::{strip_bullet_marker, strip_emphasis};

/// Bullets at or above this many characters stay in the narrative only.
///
/// Short bullets become activity chips in the timeline view; long ones read
/// as sentences and would overflow a chip.
pub const MAX_ACTIVITY_CHARS: usize = 50;

/// Highlights shown on the itinerary overview.
pub const MAX_HIGHLIGHTS: usize = 6;

pub const DEFAULT_TIME: &str = "Full Day";
pub const DEFAULT_LOCATION: &str = "Multiple Locations";

const FALLBACK_TITLE: &str = "Your Adventure Begins";
const FALLBACK_ACTIVITIES: [&str; 3] = ["Explore", "Discover", "Experience"];

/// `Day N`, optionally behind a bullet, `#` heading marks, a `1.` list number
/// or emphasis, optionally followed by `:`/`-` and a title.
static DAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•]\s+)?(?:#{1,6}\s*)?(?:\d+[.)]\s*)?(?:\*\*|__)?\s*day\s+([0-9a-z]+)\s*(?:(?:\*\*|__)\s*)?(?:[:\-–—]\s*(.*?))?\s*(?:\*\*|__)?\s*$",
    )
    .expect("day header pattern is valid")
});

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One itinerary day as shown in the interactive timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub number: u32,
    pub title: String,
    /// Every non-empty line between this day's header and the next, verbatim.
    pub content: String,
    /// Short bullet lines, markers and emphasis stripped, in source order.
    pub activities: Vec<String>,
    pub time: String,
    pub location: String,
}

/// Full parse result.
///
/// `total_days` is 0 when no day headers were found, even though `days`
/// then holds the one synthesized entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItinerary {
    pub days: Vec<Day>,
    pub total_days: usize,
    pub highlights: Vec<String>,
}

impl ParsedItinerary {
    /// True if the text had no recognizable day structure.
    pub fn is_synthesized(&self) -> bool {
        self.total_days == 0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

/// A recognized day header line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DayHeader {
    number: u32,
    title: String,
}

/// The day currently collecting lines. Lives only for one `parse` call.
struct OpenDay {
    header: DayHeader,
    content: String,
    activities: Vec<String>,
}

impl OpenDay {
    fn new(header: DayHeader) -> Self {
        Self {
            header,
            content: String::new(),
            activities: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');

        if let Some(activity) = activity_text(line) {
            self.activities.push(activity);
        }
    }

    fn close(self) -> Day {
        Day {
            number: self.header.number,
            title: self.header.title,
            content: self.content.trim_end().to_string(),
            activities: self.activities,
            time: DEFAULT_TIME.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// Parses raw itinerary text into day records. Never fails.
pub fn parse(text: &str) -> ParsedItinerary {
    let mut days: Vec<Day> = Vec::new();
    let mut open: Option<OpenDay> = None;

    for line in text.lines() {
        if let Some(header) = match_day_header(line) {
            if let Some(day) = open.take() {
                days.push(day.close());
            }
            open = Some(OpenDay::new(header));
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        // Lines before the first header have no day to belong to.
        if let Some(day) = open.as_mut() {
            day.push_line(line);
        }
    }

    if let Some(day) = open.take() {
        days.push(day.close());
    }

    let total_days = days.len();
    if days.is_empty() {
        days.push(fallback_day(text));
    }

    let highlights = days
        .iter()
        .flat_map(|d| d.activities.iter().cloned())
        .take(MAX_HIGHLIGHTS)
        .collect();

    debug!(
        total_days,
        synthesized = total_days == 0,
        "Parsed itinerary text"
    );

    ParsedItinerary {
        days,
        total_days,
        highlights,
    }
}

/// Returns the header if `line` is a `Day N` header with a parseable numeral.
fn match_day_header(line: &str) -> Option<DayHeader> {
    let caps = DAY_HEADER.captures(line)?;
    let number: u32 = caps.get(1)?.as_str().parse().ok()?;

    let suffix = caps
        .get(2)
        .map(|m| strip_emphasis(m.as_str()).trim().to_string())
        .unwrap_or_default();

    let title = if suffix.is_empty() {
        format!("Day {number}")
    } else {
        format!("Day {number}: {suffix}")
    };

    Some(DayHeader { number, title })
}

/// The chip text for a short bullet line, or `None` if the line is not a bullet
/// or its text is empty or too long.
fn activity_text(line: &str) -> Option<String> {
    let stripped = strip_bullet_marker(line)?;
    let text = strip_emphasis(stripped).trim().to_string();
    let chars = text.chars().count();
    (chars >= 1 && chars < MAX_ACTIVITY_CHARS).then_some(text)
}

fn fallback_day(text: &str) -> Day {
    Day {
        number: 1,
        title: FALLBACK_TITLE.to_string(),
        content: text.to_string(),
        activities: FALLBACK_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        time: DEFAULT_TIME.to_string(),
        location: DEFAULT_LOCATION.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
