use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use upkeep_core::{MaintenanceRequest, RecommendationEngine};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub engine: HealthCheck,
    pub checked_at: String,
}

pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    let engine = engine_check();
    let ready = engine.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "upkeep-server runtime initialized".to_string(),
        },
        engine,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn engine_check() -> HealthCheck {
    // An empty request must still produce the preventive default.
    let recommendations = RecommendationEngine::new().recommend(&MaintenanceRequest::default());

    if recommendations.is_empty() {
        HealthCheck {
            status: "degraded",
            detail: "engine produced an empty recommendation list".to_string(),
        }
    } else {
        HealthCheck {
            status: "ready",
            detail: "engine fallback path produced a recommendation".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::Json;

    use crate::health::health;

    #[tokio::test]
    async fn health_reports_ready_when_engine_self_check_passes() {
        let (status, Json(payload)) = health().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert_eq!(payload.engine.status, "ready");
        assert!(!payload.checked_at.is_empty());
    }
}
