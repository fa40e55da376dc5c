//! Rule evaluators
//!
//! Each evaluator is a pure predicate over the normalized input that
//! yields at most one candidate recommendation. `evaluate` runs them in
//! a fixed order; the merge step relies on that order to break ties.

use super::normalize::NormalizedInput;
use super::types::Recommendation;
use super::{PRIORITY_CRITICAL, PRIORITY_ROUTINE, PRIORITY_STANDARD};
use crate::catalog::ServiceCode;

/// Odometer threshold at which the 30,000 km tier fires.
const TIER_30K_KM: f64 = 28_000.0;
/// Odometer threshold at which the 20,000 km tier fires.
const TIER_20K_KM: f64 = 18_000.0;
/// Odometer threshold at which the 10,000 km tier fires.
const TIER_10K_KM: f64 = 8_000.0;

/// Run every evaluator in its fixed order and collect the candidates.
pub fn evaluate(input: &NormalizedInput) -> Vec<Recommendation> {
    [
        mileage_tier(input.mileage_km),
        brake_keywords(&input.issue_corpus),
        powertrain_keywords(&input.issue_corpus),
        clutch_keywords(&input.issue_corpus),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Mutually exclusive odometer tiers; only the highest matching tier fires.
fn mileage_tier(mileage_km: f64) -> Option<Recommendation> {
    if mileage_km >= TIER_30K_KM {
        Some(Recommendation {
            service_code: ServiceCode::Periodic30k,
            priority: PRIORITY_CRITICAL,
            reason: "Odometer near or above 30,000 km based on Indian city usage.".to_string(),
        })
    } else if mileage_km >= TIER_20K_KM {
        Some(Recommendation {
            service_code: ServiceCode::Periodic20k,
            priority: PRIORITY_STANDARD,
            reason: "Odometer near or above 20,000 km; recommend periodic service.".to_string(),
        })
    } else if mileage_km >= TIER_10K_KM {
        Some(Recommendation {
            service_code: ServiceCode::Periodic10k,
            priority: PRIORITY_ROUTINE,
            reason: "Odometer near or above 10,000 km; basic periodic service.".to_string(),
        })
    } else {
        None
    }
}

fn brake_keywords(corpus: &str) -> Option<Recommendation> {
    contains_any(corpus, &["brake", "spongy"]).then(|| Recommendation {
        service_code: ServiceCode::BrakeCheck,
        priority: PRIORITY_CRITICAL,
        reason: "User reported brake-related issues; brake inspection is critical.".to_string(),
    })
}

fn powertrain_keywords(corpus: &str) -> Option<Recommendation> {
    contains_any(corpus, &["pickup", "power"]).then(|| Recommendation {
        service_code: ServiceCode::Periodic20k,
        priority: PRIORITY_STANDARD,
        reason: "Reported pickup drop; periodic service and inspection recommended.".to_string(),
    })
}

fn clutch_keywords(corpus: &str) -> Option<Recommendation> {
    contains_any(corpus, &["clutch", "hard"]).then(|| Recommendation {
        service_code: ServiceCode::ClutchAdjust,
        priority: PRIORITY_STANDARD,
        reason: "Reported clutch hardness; clutch adjustment advised for BLR traffic conditions."
            .to_string(),
    })
}

// Plain substring containment, not word-boundary aware: "hardware" also
// matches "hard". Known keyword-matching quirk, kept as-is.
fn contains_any(corpus: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| corpus.contains(needle))
}
