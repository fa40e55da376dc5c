//! Recommendation engine implementation

use std::collections::HashMap;

use super::normalize::normalize;
use super::rules;
use super::types::{MaintenanceRequest, Recommendation, RecommendationResponse};
use super::PRIORITY_ROUTINE;
use crate::catalog::ServiceCode;

/// The deterministic recommendation pipeline.
///
/// A pure function of its request: normalize the input, run the rule
/// evaluators in their fixed order, inject the preventive default when
/// nothing fired, merge by service code keeping the most urgent
/// candidate, and sort by priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive the ranked recommendation list for one request.
    ///
    /// Never fails: malformed feature values degrade inside
    /// normalization and the fallback guarantees a non-empty result.
    pub fn recommend(&self, request: &MaintenanceRequest) -> Vec<Recommendation> {
        let input = normalize(request);
        let mut candidates = rules::evaluate(&input);

        if candidates.is_empty() {
            candidates.push(Recommendation {
                service_code: ServiceCode::Periodic10k,
                priority: PRIORITY_ROUTINE,
                reason: "Default preventive periodic service recommendation for city driving."
                    .to_string(),
            });
        }

        let mut merged = merge_by_code(candidates);
        merged.sort_by_key(|recommendation| recommendation.priority);
        merged
    }

    /// Wrap the recommendation list in the wire response shape.
    pub fn respond(&self, request: &MaintenanceRequest) -> RecommendationResponse {
        RecommendationResponse { recommendations: self.recommend(request) }
    }
}

/// Keep at most one candidate per service code.
///
/// Candidates fold in emission order; a later candidate replaces an
/// earlier one for the same code only when its priority is strictly
/// smaller, and the survivor keeps the code's first-seen position.
fn merge_by_code(candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut merged: Vec<Recommendation> = Vec::with_capacity(candidates.len());
    let mut slot_by_code: HashMap<ServiceCode, usize> = HashMap::new();

    for candidate in candidates {
        match slot_by_code.get(&candidate.service_code) {
            Some(&slot) => {
                if candidate.priority < merged[slot].priority {
                    merged[slot] = candidate;
                }
            }
            None => {
                slot_by_code.insert(candidate.service_code, merged.len());
                merged.push(candidate);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::types::{MaintenanceRequest, ServiceRecord};
    use super::super::{PRIORITY_CRITICAL, PRIORITY_ROUTINE, PRIORITY_STANDARD};
    use super::*;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new()
    }

    #[test]
    fn empty_request_yields_exactly_the_preventive_default() {
        let recommendations = engine().recommend(&MaintenanceRequest::default());

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].service_code, ServiceCode::Periodic10k);
        assert_eq!(recommendations[0].priority, PRIORITY_ROUTINE);
        assert_eq!(
            recommendations[0].reason,
            "Default preventive periodic service recommendation for city driving."
        );
    }

    #[test]
    fn unparsable_mileage_takes_the_fallback_path() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234")
            .with_feature("mileage_km", json!("unknown"));

        let recommendations = engine().recommend(&request);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].service_code, ServiceCode::Periodic10k);
        assert_eq!(recommendations[0].priority, PRIORITY_ROUTINE);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234").with_history(vec![
            ServiceRecord::new(vec!["Brake pedal feels SPONGY".to_string()]),
        ]);

        let recommendations = engine().recommend(&request);

        assert_eq!(recommendations[0].service_code, ServiceCode::BrakeCheck);
        assert_eq!(recommendations[0].priority, PRIORITY_CRITICAL);
    }

    #[test]
    fn equal_priority_collision_keeps_the_first_seen_candidate() {
        // Tier rule and powertrain keyword both nominate PERIODIC_20K at
        // the same priority; the tier candidate is emitted first.
        let request = MaintenanceRequest::new("c-1", "KA01AB1234")
            .with_feature("mileage_km", json!(20_000))
            .with_history(vec![ServiceRecord::new(vec!["power loss".to_string()])]);

        let recommendations = engine().recommend(&request);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].service_code, ServiceCode::Periodic20k);
        assert_eq!(recommendations[0].priority, PRIORITY_STANDARD);
        assert_eq!(
            recommendations[0].reason,
            "Odometer near or above 20,000 km; recommend periodic service."
        );
    }

    #[test]
    fn output_is_sorted_ascending_by_priority() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234")
            .with_feature("odometer", json!(9_000))
            .with_history(vec![ServiceRecord::new(vec![
                "clutch hard".to_string(),
                "brake noise".to_string(),
            ])]);

        let recommendations = engine().recommend(&request);

        let priorities: Vec<u8> =
            recommendations.iter().map(|recommendation| recommendation.priority).collect();
        assert_eq!(priorities, vec![PRIORITY_CRITICAL, PRIORITY_STANDARD, PRIORITY_ROUTINE]);
        assert_eq!(recommendations[0].service_code, ServiceCode::BrakeCheck);
        assert_eq!(recommendations[1].service_code, ServiceCode::ClutchAdjust);
        assert_eq!(recommendations[2].service_code, ServiceCode::Periodic10k);
    }

    #[test]
    fn no_duplicate_service_codes_survive_the_merge() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234")
            .with_feature("mileage_km", json!(19_000))
            .with_history(vec![ServiceRecord::new(vec![
                "pickup drop".to_string(),
                "power loss in third gear".to_string(),
            ])]);

        let recommendations = engine().recommend(&request);

        let mut codes: Vec<ServiceCode> =
            recommendations.iter().map(|recommendation| recommendation.service_code).collect();
        codes.dedup();
        assert_eq!(codes.len(), recommendations.len());
    }

    #[test]
    fn smaller_priority_replaces_in_place() {
        let survivors = merge_by_code(vec![
            Recommendation {
                service_code: ServiceCode::Periodic20k,
                priority: PRIORITY_STANDARD,
                reason: "first".to_string(),
            },
            Recommendation {
                service_code: ServiceCode::BrakeCheck,
                priority: PRIORITY_CRITICAL,
                reason: "brakes".to_string(),
            },
            Recommendation {
                service_code: ServiceCode::Periodic20k,
                priority: PRIORITY_CRITICAL,
                reason: "second, more urgent".to_string(),
            },
        ]);

        assert_eq!(survivors.len(), 2);
        // The code keeps its first-seen position but carries the more
        // urgent candidate.
        assert_eq!(survivors[0].service_code, ServiceCode::Periodic20k);
        assert_eq!(survivors[0].priority, PRIORITY_CRITICAL);
        assert_eq!(survivors[0].reason, "second, more urgent");
        assert_eq!(survivors[1].service_code, ServiceCode::BrakeCheck);
    }

    #[test]
    fn passthrough_fields_do_not_affect_scoring() {
        let with_ids = engine().recommend(
            &MaintenanceRequest::new("customer-42", "KA05XY9999")
                .with_feature("mileage_km", json!(28_000)),
        );
        let without_ids = engine().recommend(
            &MaintenanceRequest::default().with_feature("mileage_km", json!(28_000)),
        );

        assert_eq!(with_ids, without_ids);
        assert_eq!(with_ids[0].service_code, ServiceCode::Periodic30k);
    }

    #[test]
    fn respond_wraps_the_recommendation_list() {
        let response = engine().respond(&MaintenanceRequest::default());

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].service_code, ServiceCode::Periodic10k);
    }
}
