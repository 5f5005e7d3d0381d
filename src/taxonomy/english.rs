use crate::models::ServiceType::{self, Complementing, Substituting};

use super::CategoryDef;

/// Built-in English dictionary: `(id, type, phrases)` in canonical order.
const CATEGORIES: &[(&str, ServiceType, &[&str])] = &[
    (
        "maintenance_and_repair",
        Complementing,
        &[
            "maintenance", "repair", "repairs", "repair and maintenance",
            "aftermarket service", "after-sales service", "after sales service",
            "field service", "mro", "maintenance overhaul", "overhaul",
            "service and repair", "servicing", "product servicing",
            "scheduled maintenance", "unscheduled maintenance",
        ],
    ),
    (
        "spare_parts_support",
        Complementing,
        &[
            "spare parts", "replacement parts", "parts support",
            "parts and service", "parts sales", "component parts",
            "aftermarket parts", "parts distribution", "parts logistics",
            "genuine parts", "parts supply", "parts fulfillment",
        ],
    ),
    (
        "leasing_and_rental",
        Substituting,
        &[
            "lease", "leasing", "operating lease", "capital lease",
            "rental", "rentals", "equipment rental",
            "power by the hour", "power-by-the-hour",
            "fee per use", "usage-based pricing", "subscription service",
            "as-a-service", "aaS", "equipment-as-a-service",
        ],
    ),
    (
        "warranty_and_insurance",
        Complementing,
        &[
            "warranty", "extended warranty", "warranty service",
            "product warranty", "service warranty",
            "insurance", "product insurance", "coverage plan",
        ],
    ),
    (
        "installation_and_commissioning",
        Complementing,
        &[
            "installation", "installing", "commissioning",
            "system installation", "equipment installation",
            "assembly", "setup", "on-site installation",
            "deployment service",
        ],
    ),
    (
        "technical_support",
        Complementing,
        &[
            "technical support", "tech support", "support services",
            "customer support", "helpdesk", "troubleshooting",
            "remote support", "call center support", "24/7 support",
            "service hotline", "technical assistance",
        ],
    ),
    (
        "customization_and_r&d_services",
        Complementing,
        &[
            "customization", "customized solutions", "customised solutions",
            "tailored solution", "bespoke solution",
            "engineering services", "engineering design",
            "r&d services", "research and development service",
            "product adaptation", "system tailoring",
        ],
    ),
    (
        "distribution_and_procurement",
        Complementing,
        &[
            "distribution", "product distribution", "distribution services",
            "procurement", "purchasing services", "supply procurement",
            "trade and distribution", "inventory procurement",
            "material sourcing", "logistics service", "fulfillment services",
        ],
    ),
    (
        "training_and_consulting",
        Complementing,
        &[
            "training", "training services", "skills training",
            "consulting", "consultancy", "professional consulting",
            "customer training", "technical training",
            "education services", "on-site training", "certification training",
        ],
    ),
    (
        "solutions_system_integration",
        Complementing,
        &[
            "solution", "solutions", "integrated solution",
            "system integration", "integration services",
            "turnkey solution", "system architecture",
            "end-to-end solution", "platform integration",
        ],
    ),
    (
        "digital_and_streaming_services",
        Complementing,
        &[
            "software as a service", "saas", "cloud service",
            "digital services", "digital platform",
            "streaming services", "online services",
            "remote monitoring service", "iot service",
            "data analytics service", "cloud-based service",
        ],
    ),
    (
        "performance_based_contracts",
        Substituting,
        &[
            "performance-based", "performance based",
            "performance contract", "performance guarantee",
            "pay per use", "fee per use", "pay-per-hour",
            "service-level agreement", "sla contract",
            "availability guarantee", "uptime guarantee",
        ],
    ),
    (
        "recycling_and_process_management",
        Substituting,
        &[
            "recycling", "recycle services", "recycling program",
            "process management", "waste management",
            "resource recovery", "end-of-life services",
            "asset disposal", "equipment disposal", "reverse logistics",
        ],
    ),
];

/// The built-in English category definitions.
pub fn categories() -> Vec<CategoryDef> {
    CATEGORIES
        .iter()
        .map(|(id, service_type, phrases)| CategoryDef::new(id, *service_type, phrases))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_categories_with_phrases() {
        let defs = categories();
        assert_eq!(defs.len(), 13);
        assert!(defs.iter().all(|d| !d.phrases.is_empty()));
    }

    #[test]
    fn test_fee_per_use_is_shared() {
        // the phrase is listed under both leasing and performance contracts
        let defs = categories();
        let holders: Vec<&str> = defs
            .iter()
            .filter(|d| d.phrases.iter().any(|p| p == "fee per use"))
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(holders, vec!["leasing_and_rental", "performance_based_contracts"]);
    }
}
