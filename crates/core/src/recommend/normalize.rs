//! Request normalization

use serde_json::Value;

use super::types::MaintenanceRequest;

/// Flattened view of a request that the rule evaluators consume.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    /// Best-effort odometer reading in kilometres; 0.0 when absent or unparsable
    pub mileage_km: f64,
    /// Lower-cased, space-joined issue text across the whole history
    pub issue_corpus: String,
}

/// Extract the numeric mileage and the searchable issue corpus.
///
/// Total over all requests: a missing or malformed mileage degrades to
/// 0.0 and an empty history yields an empty corpus. `mileage_km` wins
/// over `odometer` whenever it is present and non-null, even at zero.
pub fn normalize(request: &MaintenanceRequest) -> NormalizedInput {
    let mileage_km = request
        .vehicle_features
        .get("mileage_km")
        .filter(|value| !value.is_null())
        .or_else(|| request.vehicle_features.get("odometer"))
        .map(coerce_mileage)
        .unwrap_or(0.0);

    let issue_corpus = request
        .history
        .iter()
        .flat_map(|record| record.issues_reported.iter())
        .map(|issue| issue.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    NormalizedInput { mileage_km, issue_corpus }
}

fn coerce_mileage(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::super::types::{MaintenanceRequest, ServiceRecord};
    use super::normalize;

    fn request_with_feature(key: &str, value: Value) -> MaintenanceRequest {
        MaintenanceRequest::new("c-1", "KA01AB1234").with_feature(key, value)
    }

    #[test]
    fn mileage_km_wins_over_odometer() {
        let request = request_with_feature("mileage_km", json!(12_500))
            .with_feature("odometer", json!(30_000));

        assert_eq!(normalize(&request).mileage_km, 12_500.0);
    }

    #[test]
    fn null_mileage_km_falls_back_to_odometer() {
        let request =
            request_with_feature("mileage_km", Value::Null).with_feature("odometer", json!(9_100));

        assert_eq!(normalize(&request).mileage_km, 9_100.0);
    }

    #[test]
    fn numeric_string_mileage_is_coerced() {
        let request = request_with_feature("mileage_km", json!(" 18250.5 "));

        assert_eq!(normalize(&request).mileage_km, 18_250.5);
    }

    #[test]
    fn unparsable_mileage_degrades_to_zero() {
        let request = request_with_feature("mileage_km", json!("unknown"));

        assert_eq!(normalize(&request).mileage_km, 0.0);
    }

    #[test]
    fn absent_features_degrade_to_zero() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234");

        assert_eq!(normalize(&request).mileage_km, 0.0);
    }

    #[test]
    fn zero_mileage_km_is_not_skipped() {
        let request =
            request_with_feature("mileage_km", json!(0)).with_feature("odometer", json!(30_000));

        assert_eq!(normalize(&request).mileage_km, 0.0);
    }

    #[test]
    fn corpus_is_lowercased_and_joined_in_order() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234").with_history(vec![
            ServiceRecord::new(vec!["Brake pedal SPONGY".to_string(), "AC weak".to_string()]),
            ServiceRecord::new(vec!["Pickup drop".to_string()]),
        ]);

        assert_eq!(normalize(&request).issue_corpus, "brake pedal spongy ac weak pickup drop");
    }

    #[test]
    fn empty_history_yields_empty_corpus() {
        let request = MaintenanceRequest::new("c-1", "KA01AB1234");

        assert_eq!(normalize(&request).issue_corpus, "");
    }
}
