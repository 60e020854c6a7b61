pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::itinerary::handlers::handle_parse;
use crate::layout::handlers::handle_export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/itineraries/parse", post(handle_parse))
        .route("/api/v1/itineraries/export", post(handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn small_limit_app() -> Router {
        build_router(AppState::new(Config {
            max_text_bytes: 16,
            ..Config::default()
        }))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_parse_endpoint_returns_camel_case_days() {
        let text = "**Day 1: Arrival**\n• Visit Ranchi\n• Check in hotel\n**Day 2: Adventure**\n• Hike Netarhat";
        let (status, body) =
            post_json(app(), "/api/v1/itineraries/parse", json!({ "text": text })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalDays"], 2);
        assert_eq!(body["days"][0]["activities"], json!(["Visit Ranchi", "Check in hotel"]));
        assert_eq!(body["highlights"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_parse_endpoint_synthesizes_for_unstructured_text() {
        let (status, body) = post_json(
            app(),
            "/api/v1/itineraries/parse",
            json!({ "text": "Just explore freely and enjoy." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalDays"], 0);
        assert_eq!(body["days"][0]["title"], "Your Adventure Begins");
    }

    #[tokio::test]
    async fn test_parse_endpoint_rejects_oversized_text() {
        let (status, body) = post_json(
            small_limit_app(),
            "/api/v1/itineraries/parse",
            json!({ "text": "Day 1: far too much text for the limit" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_export_endpoint_returns_pages() {
        let (status, body) = post_json(
            app(),
            "/api/v1/itineraries/export",
            json!({
                "text": "**Day 1: Arrival**\n• Visit Ranchi",
                "trip": { "destination": "Netarhat Hill Station", "durationDays": 1 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fileName"], "netarhat-hill-station-itinerary.pdf");
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["font"], "helvetica");
        assert!(body["styles"]["boldHeader"]["fontSize"].is_number());
        let runs = body["pages"][0]["runs"].as_array().unwrap();
        assert!(runs.iter().any(|r| r["text"] == "Your 1-day travel plan"));
        assert_eq!(body["pages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_export_endpoint_accepts_empty_text() {
        let (status, body) = post_json(
            app(),
            "/api/v1/itineraries/export",
            json!({ "text": "", "trip": { "destination": "Ranchi" }, "font": "courier" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["font"], "courier");
    }

    #[tokio::test]
    async fn test_export_endpoint_rejects_unknown_font() {
        let (status, body) = post_json(
            app(),
            "/api/v1/itineraries/export",
            json!({ "text": "Day 1", "trip": { "destination": "Ranchi" }, "font": "papyrus" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "LAYOUT_CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_export_endpoint_rejects_non_positive_width() {
        let (status, body) = post_json(
            app(),
            "/api/v1/itineraries/export",
            json!({
                "text": "Day 1",
                "trip": { "destination": "Ranchi" },
                "page": { "pageWidth": 50.0 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "LAYOUT_CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_export_endpoint_requires_destination() {
        let (status, _) = post_json(
            app(),
            "/api/v1/itineraries/export",
            json!({ "text": "Day 1", "trip": { "destination": "  " } }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
