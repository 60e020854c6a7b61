//! Export document metadata and the artifact handed back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::config::StyleSheet;
use crate::layout::font_metrics::FontFamily;
use crate::layout::page::Page;

/// Trip facts shown in the first-page header and summary box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub destination: String,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub travelers: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryField {
    pub label: String,
    pub value: String,
}

impl SummaryField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Header band text plus the ordered summary rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub title: String,
    pub subtitle: String,
    pub summary_fields: Vec<SummaryField>,
}

impl DocumentMetadata {
    /// Builds the header and summary for a trip. Absent facts get no row.
    pub fn from_trip(trip: &TripDetails) -> Self {
        let destination = trip.destination.trim();

        let subtitle = match trip.duration_days {
            Some(days) => format!("Your {days}-day travel plan"),
            None => "Your personalized travel plan".to_string(),
        };

        let mut summary_fields = vec![SummaryField::new("Destination", destination)];
        if let Some(days) = trip.duration_days {
            summary_fields.push(SummaryField::new("Duration", plural(days, "day")));
        }
        if let Some(travelers) = trip.travelers {
            summary_fields.push(SummaryField::new("Travelers", plural(travelers, "traveler")));
        }
        if let Some(budget) = trip.budget.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            summary_fields.push(SummaryField::new("Budget", budget));
        }
        if !trip.interests.is_empty() {
            summary_fields.push(SummaryField::new("Interests", trip.interests.join(", ")));
        }

        Self {
            title: format!("{destination} Itinerary"),
            subtitle,
            summary_fields,
        }
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Artifact name for a trip: the destination lower-cased, whitespace runs as `-`.
pub fn artifact_name(destination: &str) -> String {
    destination
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn export_file_name(destination: &str) -> String {
    format!("{}-itinerary.pdf", artifact_name(destination))
}

/// Paginated document returned to the export surface, which turns the pages
/// into the final file.
///
/// `font` and `styles` are the ones the layout measured with; runs must be
/// rendered with them for the computed positions to hold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub document_id: Uuid,
    pub file_name: String,
    pub page_count: usize,
    pub generated_at: DateTime<Utc>,
    pub font: FontFamily,
    pub styles: StyleSheet,
    pub pages: Vec<Page>,
}

impl ExportDocument {
    pub fn new(destination: &str, font: FontFamily, styles: StyleSheet, pages: Vec<Page>) -> Self {
        Self {
            document_id: Uuid::new_v4(),
            file_name: export_file_name(destination),
            page_count: pages.len(),
            generated_at: Utc::now(),
            font,
            styles,
            pages,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_lowercases_and_hyphenates() {
        assert_eq!(artifact_name("Netarhat Hill Station"), "netarhat-hill-station");
        assert_eq!(artifact_name("  Ranchi   City "), "ranchi-city");
        assert_eq!(artifact_name("Goa"), "goa");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Betla National Park"), "betla-national-park-itinerary.pdf");
    }

    #[test]
    fn test_metadata_full_trip() {
        let meta = DocumentMetadata::from_trip(&TripDetails {
            destination: "Ranchi".to_string(),
            duration_days: Some(3),
            travelers: Some(1),
            budget: Some("Budget".to_string()),
            interests: vec!["Waterfalls".to_string(), "Food".to_string()],
        });
        assert_eq!(meta.title, "Ranchi Itinerary");
        assert_eq!(meta.subtitle, "Your 3-day travel plan");
        assert_eq!(
            meta.summary_fields,
            vec![
                SummaryField::new("Destination", "Ranchi"),
                SummaryField::new("Duration", "3 days"),
                SummaryField::new("Travelers", "1 traveler"),
                SummaryField::new("Budget", "Budget"),
                SummaryField::new("Interests", "Waterfalls, Food"),
            ]
        );
    }

    #[test]
    fn test_metadata_minimal_trip() {
        let meta = DocumentMetadata::from_trip(&TripDetails {
            destination: "Deoghar".to_string(),
            budget: Some("  ".to_string()),
            ..TripDetails::default()
        });
        assert_eq!(meta.subtitle, "Your personalized travel plan");
        assert_eq!(meta.summary_fields.len(), 1);
    }

    #[test]
    fn test_export_document_counts_pages() {
        let doc = ExportDocument::new(
            "Hazaribagh",
            FontFamily::Helvetica,
            StyleSheet::default(),
            vec![Page::new(0), Page::new(1)],
        );
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.file_name, "hazaribagh-itinerary.pdf");
    }

    #[test]
    fn test_export_document_carries_render_styles() {
        let mut styles = StyleSheet::default();
        styles.plain.font_size = 14.0;
        let doc = ExportDocument::new("Ranchi", FontFamily::Courier, styles, vec![Page::new(0)]);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["fileName"], "ranchi-itinerary.pdf");
        assert_eq!(value["pageCount"], 1);
        assert!(value.get("documentId").is_some());
        assert!(value.get("generatedAt").is_some());
        assert_eq!(value["font"], "courier");
        assert_eq!(value["styles"]["plain"]["fontSize"], 14.0);
        assert_ne!(
            value["styles"]["boldHeader"]["color"],
            value["styles"]["plain"]["color"]
        );
    }

    #[test]
    fn test_trip_details_optional_fields_default() {
        let trip: TripDetails = serde_json::from_str(r#"{"destination": "Ranchi"}"#).unwrap();
        assert!(trip.duration_days.is_none());
        assert!(trip.interests.is_empty());
    }

    #[test]
    fn test_trip_details_reads_camel_case_keys() {
        let trip: TripDetails =
            serde_json::from_str(r#"{"destination": "Ranchi", "durationDays": 3}"#).unwrap();
        assert_eq!(trip.duration_days, Some(3));
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let meta = DocumentMetadata::from_trip(&TripDetails {
            destination: "Ranchi".to_string(),
            ..TripDetails::default()
        });
        let value = serde_json::to_value(&meta).unwrap();
        assert!(value.get("summaryFields").is_some());
        assert!(value.get("summary_fields").is_none());
    }
}
