//! The stdin/stdout recommendation boundary.
//!
//! Reads one JSON request payload from stdin and always emits a
//! well-formed recommendation response on stdout with exit code 0: any
//! failure to receive or parse the payload is substituted with the
//! fixed fallback response carrying the error detail.

use std::io::Read;

use upkeep_core::{MaintenanceRequest, RecommendationEngine, RecommendationResponse};

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let mut raw = String::new();
    match std::io::stdin().read_to_string(&mut raw) {
        Ok(_) => run_with_payload(&raw),
        Err(error) => respond(RecommendationResponse::fallback(error)),
    }
}

/// Boundary body, split out so tests can drive it without a real stdin.
pub fn run_with_payload(raw: &str) -> CommandResult {
    let response = match MaintenanceRequest::from_json(raw) {
        Ok(request) => RecommendationEngine::new().respond(&request),
        Err(error) => RecommendationResponse::fallback(error),
    };

    respond(response)
}

fn respond(response: RecommendationResponse) -> CommandResult {
    let output = serde_json::to_string(&response).unwrap_or_else(|error| {
        format!(
            "{{\"recommendations\":[{{\"service_code\":\"PERIODIC_10K\",\"priority\":3,\"reason\":\"Fallback recommendation due to model error: {}\"}}]}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    });

    CommandResult { exit_code: 0, output }
}
