//! Power/toughness pattern detection.
//!
//! Looks at a commander's resolved companions and decides which
//! commander-level combat-stat patterns are active. The three checks
//! are independent booleans; more than one may hold at once.

use crate::types::PtPatterns;
use card_data::Creature;

const HIGH_POWER_THRESHOLD: f32 = 4.0;
const LOW_POWER_THRESHOLD: f32 = 2.0;
const POWER_SUPPORT: f32 = 0.75;
const TOUGHNESS_SUPPORT: f32 = 0.80;

/// Detect the power/toughness patterns among a commander's companions.
///
/// `companions` are the training-data creatures already resolved against
/// the catalog. Companions without combat stats count toward the total
/// but never satisfy a threshold. An empty slice yields all-false flags.
pub fn detect_pt_patterns(companions: &[&Creature]) -> PtPatterns {
    if companions.is_empty() {
        return PtPatterns::default();
    }

    let total = companions.len() as f32;

    let high_power_count = companions
        .iter()
        .filter(|c| c.power.is_some_and(|p| p >= HIGH_POWER_THRESHOLD))
        .count() as f32;
    let low_power_count = companions
        .iter()
        .filter(|c| c.power.is_some_and(|p| p <= LOW_POWER_THRESHOLD))
        .count() as f32;
    let high_toughness_count = companions
        .iter()
        .filter(|c| matches!((c.power, c.toughness), (Some(p), Some(t)) if t > p))
        .count() as f32;

    PtPatterns {
        high_power: high_power_count / total >= POWER_SUPPORT,
        low_power: low_power_count / total >= POWER_SUPPORT,
        high_toughness: high_toughness_count / total >= TOUGHNESS_SUPPORT,
    }
}
