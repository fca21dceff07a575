//! Misconduct: data fabrication, and the discovery risks it feeds.
//!
//! Probabilities are percentages in [0, 100]. The whistleblower curve
//! is deliberately non-monotonic: ten or more fabrications buy enough
//! cover-up to silence internal reporting entirely, while the external
//! audit risk stays capped but active. Both probabilities are exactly
//! zero at fraud count zero.

use crate::{config::GameConfig, rng::RandomSource, state::GameState};

/// Monthly internal-whistleblower probability, in percent.
pub fn whistleblower_probability(fraud_count: u32, config: &GameConfig) -> u32 {
    if fraud_count == 0 || fraud_count >= config.coverup_threshold {
        return 0;
    }
    config.whistle_base + fraud_count
}

/// Fiscal-boundary external-audit probability, in percent.
pub fn audit_probability(fraud_count: u32, config: &GameConfig) -> u32 {
    if fraud_count == 0 {
        return 0;
    }
    (config.audit_base + fraud_count).min(config.audit_cap)
}

pub const WHISTLEBLOWER_LOG: &str = "[EMERGENCY] An internal whistleblower has come forward! \
     Evidence of the lab's misconduct is spreading across campus...";

pub const AUDIT_LOG: &str = "[EMERGENCY] Ministry auditors arrived unannounced! \
     They are pressing the lab on inconsistencies in its published data...";

/// Euphemisms the log records in place of an admission.
pub const COVER_STORIES: [&str; 4] = [
    "Excluded outliers to improve the consistency of the dataset.",
    "Optimized parameters to bring the results closer to theory.",
    "Removed noise to make the underlying trend clear.",
    "Revised the interpretation and derived the expected result.",
];

/// Apply one fabrication to a draft snapshot: data points up, fraud
/// count up, one euphemistic log line.
pub fn commit_fraud(state: &mut GameState, config: &GameConfig, rng: &mut dyn RandomSource) {
    let story = COVER_STORIES[rng.pick_index(COVER_STORIES.len())];
    state.resources.data_points += config.fraud_data_gain;
    state.flags.fraud_count += 1;
    state.log.push(format!(
        "[Data correction] {story} (Data +{}pt)",
        config.fraud_data_gain
    ));
    log::debug!("fraud committed: count={}", state.flags.fraud_count);
}
