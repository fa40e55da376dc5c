use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use serde_json::json;
use upkeep_core::config::{AppConfig, LoadOptions};
use upkeep_core::{MaintenanceRequest, RecommendationEngine, ServiceCode, ServiceRecord};

use crate::commands::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum SmokeStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct SmokeCheck {
    name: &'static str,
    status: SmokeStatus,
    elapsed_ms: u64,
    message: String,
}

#[derive(Debug, Serialize)]
struct SmokeReport {
    command: &'static str,
    status: SmokeStatus,
    summary: String,
    total_elapsed_ms: u64,
    checks: Vec<SmokeCheck>,
}

pub fn run() -> CommandResult {
    let started = Instant::now();
    let engine = RecommendationEngine::new();

    let checks = vec![
        config_validation_check(),
        engine_fallback_check(&engine),
        engine_merge_check(&engine),
        response_shape_check(&engine),
    ];

    finalize_report(checks, started.elapsed().as_millis() as u64)
}

fn config_validation_check() -> SmokeCheck {
    let started = Instant::now();
    match AppConfig::load(LoadOptions::default()) {
        Ok(_) => SmokeCheck {
            name: "config_validation",
            status: SmokeStatus::Pass,
            elapsed_ms: started.elapsed().as_millis() as u64,
            message: "configuration loaded and validated".to_string(),
        },
        Err(error) => SmokeCheck {
            name: "config_validation",
            status: SmokeStatus::Fail,
            elapsed_ms: started.elapsed().as_millis() as u64,
            message: error.to_string(),
        },
    }
}

/// An empty request must still yield the single preventive default.
fn engine_fallback_check(engine: &RecommendationEngine) -> SmokeCheck {
    let started = Instant::now();
    let recommendations = engine.recommend(&MaintenanceRequest::default());

    let expected = recommendations.len() == 1
        && recommendations[0].service_code == ServiceCode::Periodic10k
        && recommendations[0].priority == 3;

    SmokeCheck {
        name: "engine_fallback",
        status: if expected { SmokeStatus::Pass } else { SmokeStatus::Fail },
        elapsed_ms: started.elapsed().as_millis() as u64,
        message: if expected {
            "empty request produced the preventive default".to_string()
        } else {
            format!("unexpected fallback output: {recommendations:?}")
        },
    }
}

/// Tier and keyword rules nominating the same code must merge to one entry.
fn engine_merge_check(engine: &RecommendationEngine) -> SmokeCheck {
    let started = Instant::now();
    let request = MaintenanceRequest::new("smoke", "SMOKE-VIN")
        .with_feature("mileage_km", json!(20_000))
        .with_history(vec![ServiceRecord::new(vec!["power loss".to_string()])]);
    let recommendations = engine.recommend(&request);

    let expected = recommendations.len() == 1
        && recommendations[0].service_code == ServiceCode::Periodic20k
        && recommendations[0].priority == 2;

    SmokeCheck {
        name: "engine_merge",
        status: if expected { SmokeStatus::Pass } else { SmokeStatus::Fail },
        elapsed_ms: started.elapsed().as_millis() as u64,
        message: if expected {
            "colliding candidates merged into one entry".to_string()
        } else {
            format!("unexpected merge output: {recommendations:?}")
        },
    }
}

/// A busy request must serialize into a sorted, duplicate-free response.
fn response_shape_check(engine: &RecommendationEngine) -> SmokeCheck {
    let started = Instant::now();
    let request = MaintenanceRequest::new("smoke", "SMOKE-VIN")
        .with_feature("odometer", json!(9_000))
        .with_history(vec![ServiceRecord::new(vec![
            "brake pedal spongy".to_string(),
            "clutch hard in traffic".to_string(),
        ])]);
    let response = engine.respond(&request);

    let non_empty = !response.recommendations.is_empty();
    let sorted = response
        .recommendations
        .windows(2)
        .all(|pair| pair[0].priority <= pair[1].priority);
    let codes: HashSet<ServiceCode> =
        response.recommendations.iter().map(|recommendation| recommendation.service_code).collect();
    let unique = codes.len() == response.recommendations.len();
    let serializable = serde_json::to_string(&response).is_ok();

    let expected = non_empty && sorted && unique && serializable;

    SmokeCheck {
        name: "response_shape",
        status: if expected { SmokeStatus::Pass } else { SmokeStatus::Fail },
        elapsed_ms: started.elapsed().as_millis() as u64,
        message: if expected {
            "response is non-empty, sorted, duplicate-free, and serializable".to_string()
        } else {
            format!(
                "shape violation (non_empty={non_empty}, sorted={sorted}, unique={unique}, serializable={serializable})"
            )
        },
    }
}

fn finalize_report(checks: Vec<SmokeCheck>, total_elapsed_ms: u64) -> CommandResult {
    let passed = checks.iter().filter(|check| check.status == SmokeStatus::Pass).count();
    let total = checks.len();
    let failed = checks.iter().any(|check| check.status == SmokeStatus::Fail);

    let report = SmokeReport {
        command: "smoke",
        status: if failed { SmokeStatus::Fail } else { SmokeStatus::Pass },
        summary: format!("smoke: {passed}/{total} checks passed in {total_elapsed_ms}ms"),
        total_elapsed_ms,
        checks,
    };

    let human = report.summary.clone();
    let machine = serde_json::to_string(&report).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"smoke\",\"status\":\"fail\",\"summary\":\"serialization failed\",\"error\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    });

    CommandResult { exit_code: if failed { 6 } else { 0 }, output: format!("{human}\n{machine}") }
}
