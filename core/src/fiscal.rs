//! Fiscal-year resolution: budget grant, doctoral upkeep, recruitment.
//!
//! RULE: everything here is computed into a FiscalDraft. The draft is
//! merged into the real snapshot only when no game-over event fired in
//! the same month-advance — never speculatively. Its log lines are the
//! one exception: they are appended whether or not the draft lands.

use crate::{
    config::GameConfig,
    rng::RandomSource,
    roster::{self, Student, StudentRank},
    state::{GameState, LabRank},
    types::Year,
};

/// Uncommitted effects of one March→April rollover.
#[derive(Debug, Default)]
pub struct FiscalDraft {
    pub currency_delta: i64,
    pub recruit:        Option<Student>,
    pub log:            Vec<String>,
}

pub fn resolve(
    state: &GameState,
    next_year: Year,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> FiscalDraft {
    let mut draft = FiscalDraft::default();

    let mut budget = match state.lab.rank {
        LabRank::S => config.s_rank_budget,
        LabRank::A => config.a_rank_budget,
        _ => config.base_budget,
    };
    draft.log.push(format!(
        "[New fiscal year] Year {next_year} has begun. A budget of {budget} is granted."
    ));

    let doctoral = state.doctoral_count();
    if doctoral > 0 {
        let upkeep =
            (budget as f64 * config.doctoral_upkeep_rate * doctoral as f64).floor() as i64;
        budget -= upkeep;
        draft
            .log
            .push(format!("{upkeep} was deducted for doctoral upkeep."));
    }
    draft.currency_delta = budget;

    if state.lab.rank == LabRank::S && rng.chance(config.recruitment_chance) {
        let rank = if rng.chance(0.5) {
            StudentRank::D
        } else {
            StudentRank::M1
        };
        let recruit = roster::external_recruit(roster::next_free_id(&state.roster), rank);
        draft.log.push(format!(
            "[Good news] Word of the lab's S-rank reputation got out — {} has joined!",
            recruit.name
        ));
        draft.recruit = Some(recruit);
    }

    draft
}
