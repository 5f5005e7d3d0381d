use std::collections::{BTreeMap, HashMap};

use crate::models::{RiskSummary, ServiceType};

/// Weight of a detected substituting category.
pub const SUBSTITUTING_WEIGHT: f64 = 2.0;
/// Weight of a detected complementing category.
pub const COMPLEMENTING_WEIGHT: f64 = 0.5;

/// Turn category flags into counts and a weighted risk score.
///
/// `risk_score = 2.0 * sub_count + 0.5 * comp_count`: substituting services
/// move revenue away from product sales and weigh four times as much.
/// A flagged category missing from `types` counts as complementing.
pub fn score(flags: &BTreeMap<String, u8>, types: &HashMap<String, ServiceType>) -> RiskSummary {
    let mut comp_count = 0;
    let mut sub_count = 0;

    for (category, &flag) in flags {
        if flag != 1 {
            continue;
        }
        match types.get(category).copied().unwrap_or(ServiceType::Complementing) {
            ServiceType::Substituting => sub_count += 1,
            ServiceType::Complementing => comp_count += 1,
        }
    }

    RiskSummary {
        service_num: comp_count + sub_count,
        comp_count,
        sub_count,
        risk_score: SUBSTITUTING_WEIGHT * sub_count as f64 + COMPLEMENTING_WEIGHT * comp_count as f64,
    }
}
