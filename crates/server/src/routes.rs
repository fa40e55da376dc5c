use axum::body::Bytes;
use axum::http::{StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};
use upkeep_core::{catalog, MaintenanceRequest, RecommendationEngine, RecommendationResponse};
use uuid::Uuid;

use crate::health;

pub fn router() -> Router {
    Router::new()
        .route("/api/predict-maintenance", post(predict_maintenance))
        .route("/api/services", get(list_services))
        .route("/health", get(health::health))
        .fallback(not_found)
}

/// Derive recommendations for one request body.
///
/// The wire contract always produces a well-formed response object: a
/// body that is empty, unparsable, or structurally invalid yields the
/// fixed single-entry fallback response rather than an error status.
async fn predict_maintenance(body: Bytes) -> Json<RecommendationResponse> {
    let correlation_id = Uuid::new_v4();
    let raw = String::from_utf8_lossy(&body);

    let response = match MaintenanceRequest::from_json(&raw) {
        Ok(request) => {
            let response = RecommendationEngine::new().respond(&request);
            info!(
                event_name = "api.predict.completed",
                correlation_id = %correlation_id,
                vin = %request.vin,
                recommendation_count = response.recommendations.len(),
                "derived maintenance recommendations"
            );
            response
        }
        Err(error) => {
            warn!(
                event_name = "api.predict.fallback",
                correlation_id = %correlation_id,
                error = %error,
                "substituted fallback recommendation response"
            );
            RecommendationResponse::fallback(error)
        }
    };

    Json(response)
}

#[derive(Debug, Serialize)]
struct ServiceListResponse {
    services: &'static [catalog::ServiceInfo],
}

async fn list_services() -> Json<ServiceListResponse> {
    Json(ServiceListResponse { services: catalog::all() })
}

#[derive(Debug, Serialize)]
struct NotFoundResponse {
    status: &'static str,
    message: &'static str,
    path: String,
}

async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            status: "error",
            message: "Not Found",
            path: uri.path().to_string(),
        }),
    )
}
