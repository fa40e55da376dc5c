//! Fixed service catalog shared by the engine and its boundaries.

use serde::{Deserialize, Serialize};

/// Identifier of a maintenance action in the fixed service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    #[serde(rename = "PERIODIC_10K")]
    Periodic10k,
    #[serde(rename = "PERIODIC_20K")]
    Periodic20k,
    #[serde(rename = "PERIODIC_30K")]
    Periodic30k,
    #[serde(rename = "BRAKE_CHECK")]
    BrakeCheck,
    #[serde(rename = "CLUTCH_ADJUST")]
    ClutchAdjust,
}

impl ServiceCode {
    /// Every catalog code, in master-list order.
    pub const ALL: [ServiceCode; 5] = [
        ServiceCode::Periodic10k,
        ServiceCode::Periodic20k,
        ServiceCode::Periodic30k,
        ServiceCode::BrakeCheck,
        ServiceCode::ClutchAdjust,
    ];

    /// Wire name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::Periodic10k => "PERIODIC_10K",
            ServiceCode::Periodic20k => "PERIODIC_20K",
            ServiceCode::Periodic30k => "PERIODIC_30K",
            ServiceCode::BrakeCheck => "BRAKE_CHECK",
            ServiceCode::ClutchAdjust => "CLUTCH_ADJUST",
        }
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One entry of the service master list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub service_code: ServiceCode,
    pub name: &'static str,
    pub description: &'static str,
    pub average_time_minutes: u32,
    pub categories: &'static [&'static str],
    /// Part the workshop stages before the vehicle arrives.
    pub consumable: &'static str,
}

const SERVICE_SEEDS: &[ServiceInfo] = &[
    ServiceInfo {
        service_code: ServiceCode::Periodic10k,
        name: "10,000 km Periodic Service",
        description: "Engine oil and filter change with a basic multi-point inspection.",
        average_time_minutes: 90,
        categories: &["periodic"],
        consumable: "Engine Oil 5W30",
    },
    ServiceInfo {
        service_code: ServiceCode::Periodic20k,
        name: "20,000 km Periodic Service",
        description: "Oil service plus air filter, throttle body cleaning, and pickup inspection.",
        average_time_minutes: 120,
        categories: &["periodic", "inspection"],
        consumable: "Engine Oil 5W30",
    },
    ServiceInfo {
        service_code: ServiceCode::Periodic30k,
        name: "30,000 km Periodic Service",
        description: "Major periodic service covering fluids, filters, and wear inspection.",
        average_time_minutes: 150,
        categories: &["periodic", "inspection"],
        consumable: "Engine Oil 5W30",
    },
    ServiceInfo {
        service_code: ServiceCode::BrakeCheck,
        name: "Brake Inspection",
        description: "Pad, disc, and hydraulic inspection for reported braking issues.",
        average_time_minutes: 60,
        categories: &["brakes", "safety"],
        consumable: "Brake Pads Front",
    },
    ServiceInfo {
        service_code: ServiceCode::ClutchAdjust,
        name: "Clutch Adjustment",
        description: "Clutch free-play adjustment and engagement check.",
        average_time_minutes: 75,
        categories: &["clutch", "drivetrain"],
        consumable: "Clutch Plate Assembly",
    },
];

/// The full service master list, in catalog order.
pub fn all() -> &'static [ServiceInfo] {
    SERVICE_SEEDS
}

/// Catalog entry for a code. Total: every `ServiceCode` has an entry.
pub fn find(code: ServiceCode) -> &'static ServiceInfo {
    SERVICE_SEEDS
        .iter()
        .find(|entry| entry.service_code == code)
        .unwrap_or(&SERVICE_SEEDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_catalog_entry() {
        for code in ServiceCode::ALL {
            let entry = find(code);
            assert_eq!(entry.service_code, code);
            assert!(!entry.name.is_empty());
            assert!(entry.average_time_minutes > 0);
            assert!(!entry.categories.is_empty());
        }
    }

    #[test]
    fn wire_names_round_trip() {
        for code in ServiceCode::ALL {
            let serialized = serde_json::to_string(&code).expect("code should serialize");
            assert_eq!(serialized, format!("\"{}\"", code.as_str()));

            let deserialized: ServiceCode =
                serde_json::from_str(&serialized).expect("code should deserialize");
            assert_eq!(deserialized, code);
        }
    }

    #[test]
    fn master_list_covers_all_codes_once() {
        assert_eq!(all().len(), ServiceCode::ALL.len());
        for (entry, code) in all().iter().zip(ServiceCode::ALL) {
            assert_eq!(entry.service_code, code);
        }
    }
}
