//! The month-advance engine — the core algorithm of the game.
//!
//! DRAW ORDER (fixed, documented, never reordered):
//!   1. Whistleblower roll — every month, exactly one draw, even when
//!      the probability is zero.
//!   2. Audit roll — fiscal boundary only, skipped entirely (no draw)
//!      when the whistleblower already fired this call.
//!   3. Recruitment rolls — fiscal boundary, S rank only. These draws
//!      still happen when an audit event is pending; their effects are
//!      discarded with the rest of the fiscal draft.
//!
//! On a pending game-over event the accumulated log lines are kept but
//! every other draft effect (calendar, resources, roster) is discarded.

use crate::{
    config::GameConfig,
    fiscal,
    misconduct,
    rng::RandomSource,
    state::{GameOverReason, GameState, Phase, SubPhase},
};

/// Resolve the end of a month against the current snapshot, returning
/// the next snapshot.
pub fn advance(state: &GameState, config: &GameConfig, rng: &mut dyn RandomSource) -> GameState {
    let mut next = state.clone();
    let (calendar, fiscal_rollover) = state.calendar.next();

    let mut pending: Option<GameOverReason> = None;

    let whistle = misconduct::whistleblower_probability(state.flags.fraud_count, config);
    if rng.percent_roll() < f64::from(whistle) {
        pending = Some(GameOverReason::ArrestInternal);
        next.log.push(misconduct::WHISTLEBLOWER_LOG.to_string());
    }

    let mut draft = None;
    if fiscal_rollover {
        if pending.is_none() {
            let audit = misconduct::audit_probability(state.flags.fraud_count, config);
            if rng.percent_roll() < f64::from(audit) {
                pending = Some(GameOverReason::ArrestAudit);
                next.log.push(misconduct::AUDIT_LOG.to_string());
            }
        }
        let resolved = fiscal::resolve(state, calendar.year, config, rng);
        next.log.extend(resolved.log.iter().cloned());
        draft = Some(resolved);
    }

    if let Some(reason) = pending {
        // Arrest: the log keeps what was computed, nothing else lands.
        next.phase = Phase::GameOver;
        next.flags.is_game_over = true;
        next.flags.game_over_reason = Some(reason);
        log::info!("game over: {reason:?}");
        return next;
    }

    next.calendar = calendar;
    if let Some(resolved) = draft {
        next.resources.currency += resolved.currency_delta;
        if let Some(recruit) = resolved.recruit {
            next.roster.push(recruit);
        }
    }
    next.sub_phase = SubPhase::Command;

    if fiscal_rollover && calendar.year > config.tenure_years {
        // Directorship complete: the clear ending, not an arrest.
        next.phase = Phase::GameOver;
        next.log.push(format!(
            "[Tenure complete] {} years at the helm. The directorship ends here.",
            config.tenure_years
        ));
        log::info!("tenure complete at year {}", calendar.year);
    }

    next
}
