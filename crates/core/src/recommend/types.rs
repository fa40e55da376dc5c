//! Types for the recommendation engine

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::ServiceCode;
use crate::errors::RequestError;

/// Request for maintenance recommendations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintenanceRequest {
    /// Customer the vehicle belongs to; passed through, never scored
    #[serde(default)]
    pub customer_id: String,
    /// Vehicle identification number; passed through, never scored
    #[serde(default)]
    pub vin: String,
    /// Past workshop visits, oldest first
    #[serde(default)]
    pub history: Vec<ServiceRecord>,
    /// Free-form vehicle attributes (`mileage_km`, `odometer`, ...)
    #[serde(default)]
    pub vehicle_features: Map<String, Value>,
}

impl MaintenanceRequest {
    /// Create a request for a customer's vehicle
    pub fn new(customer_id: impl Into<String>, vin: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            vin: vin.into(),
            history: Vec::new(),
            vehicle_features: Map::new(),
        }
    }

    /// Replace the service history
    pub fn with_history(mut self, history: Vec<ServiceRecord>) -> Self {
        self.history = history;
        self
    }

    /// Set one vehicle feature
    pub fn with_feature(mut self, key: impl Into<String>, value: Value) -> Self {
        self.vehicle_features.insert(key.into(), value);
        self
    }

    /// Parse a raw payload received at a boundary.
    ///
    /// An empty (or whitespace-only) payload is distinguished from a
    /// malformed one so the fallback reason names the actual failure.
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        if raw.trim().is_empty() {
            return Err(RequestError::EmptyPayload);
        }

        Ok(serde_json::from_str(raw)?)
    }
}

/// One past workshop visit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceRecord {
    /// Free-text issues the customer reported at that visit
    #[serde(default)]
    pub issues_reported: Vec<String>,
}

impl ServiceRecord {
    pub fn new(issues_reported: Vec<String>) -> Self {
        Self { issues_reported }
    }
}

/// A single ranked maintenance recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service_code: ServiceCode,
    /// Urgency rank; 1 is most urgent
    pub priority: u8,
    /// Human-readable explanation of why the service is recommended
    pub reason: String,
}

/// Wire response produced by every boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResponse {
    /// Fixed single-entry response substituted when a payload never
    /// reaches the engine.
    pub fn fallback(detail: impl std::fmt::Display) -> Self {
        Self {
            recommendations: vec![Recommendation {
                service_code: ServiceCode::Periodic10k,
                priority: super::PRIORITY_ROUTINE,
                reason: format!("Fallback recommendation due to model error: {detail}"),
            }],
        }
    }
}
