//! Game tunables — every constant the turn engine rolls against.
//!
//! Defaults carry the canonical values; `load` reads overrides from a
//! JSON file, with missing fields keeping their defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Currency granted when a session starts.
    pub starting_currency: i64,
    /// Data points gained per fabrication.
    pub fraud_data_gain: i64,
    /// Internal-whistleblower probability base, in percent. The fraud
    /// count is added on top.
    pub whistle_base: u32,
    /// Fraud count at which internal whistleblowing is suppressed
    /// entirely (the cover-up clamp).
    pub coverup_threshold: u32,
    /// External-audit probability base, in percent.
    pub audit_base: u32,
    /// External-audit probability ceiling, in percent.
    pub audit_cap: u32,
    /// Annual budget for ranks B and below.
    pub base_budget: i64,
    pub s_rank_budget: i64,
    pub a_rank_budget: i64,
    /// Share of the annual grant deducted per doctoral roster member.
    pub doctoral_upkeep_rate: f64,
    /// Chance an S-rank lab attracts an external student each April.
    pub recruitment_chance: f64,
    /// Share of failed activities that escalate to broken equipment.
    pub break_escalation_chance: f64,
    /// Years until the directorship ends in a clear.
    pub tenure_years: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_currency:       5000,
            fraud_data_gain:         20,
            whistle_base:            5,
            coverup_threshold:       10,
            audit_base:              10,
            audit_cap:               20,
            base_budget:             5000,
            s_rank_budget:           10000,
            a_rank_budget:           8000,
            doctoral_upkeep_rate:    0.05,
            recruitment_chance:      0.5,
            break_escalation_chance: 0.25,
            tenure_years:            10,
        }
    }
}

impl GameConfig {
    /// Load overrides from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }
}
