pub mod catalog;
pub mod config;
pub mod errors;
pub mod recommend;

pub use catalog::{ServiceCode, ServiceInfo};
pub use errors::RequestError;
pub use recommend::{
    MaintenanceRequest, NormalizedInput, Recommendation, RecommendationEngine,
    RecommendationResponse, ServiceRecord,
};
