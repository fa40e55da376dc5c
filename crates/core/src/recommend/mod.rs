//! Maintenance recommendation engine
//!
//! Derives a ranked, de-duplicated list of service recommendations from
//! a vehicle's reported history and feature attributes using a fixed
//! set of threshold and keyword rules.

mod engine;
mod normalize;
mod rules;
mod types;

pub use engine::RecommendationEngine;
pub use normalize::{normalize, NormalizedInput};
pub use types::*;

/// Priority of the most urgent recommendations.
pub const PRIORITY_CRITICAL: u8 = 1;

/// Priority of standard service recommendations.
pub const PRIORITY_STANDARD: u8 = 2;

/// Priority of routine preventive recommendations.
pub const PRIORITY_ROUTINE: u8 = 3;
