//! Activity resolution — turning a COMMAND order into the queue of
//! per-student outcomes the presentation layer animates.
//!
//! One roll per student against the rank's success rate; a failure may
//! escalate to broken equipment. Successes credit the rank's action
//! points as data.

use crate::{config::GameConfig, rng::RandomSource, state::GameState, types::StudentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Success,
    Fail,
    Break,
}

/// One animated outcome awaiting display. Transient: the queue is
/// cleared once fully played or skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub outcome:    ActionOutcome,
    pub student_id: StudentId,
    pub message:    String,
}

const SUCCESS_LINES: [&str; 3] = [
    "Finally got the hang of the instrument!",
    "The data looks perfect.",
    "Got a clean run on the first try!",
];

const FAIL_LINES: [&str; 3] = [
    "The numbers look off...",
    "Nothing usable this time...",
    "I must have contaminated the sample...",
];

const BREAK_LINES: [&str; 2] = [
    "Sorry! The centrifuge!",
    "The vacuum pump just died!",
];

/// Outcome of resolving one month's activities.
#[derive(Debug)]
pub struct ActivityReport {
    pub queue:     Vec<ActionEvent>,
    pub data_gain: i64,
}

pub fn resolve(
    state: &GameState,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> ActivityReport {
    let mut queue = Vec::with_capacity(state.roster.len());
    let mut data_gain = 0;

    for student in &state.roster {
        let roll = rng.next_f64();
        let (outcome, message) = if roll < student.rank.success_rate() {
            data_gain += student.rank.action_points();
            (
                ActionOutcome::Success,
                SUCCESS_LINES[rng.pick_index(SUCCESS_LINES.len())],
            )
        } else if rng.chance(config.break_escalation_chance) {
            (
                ActionOutcome::Break,
                BREAK_LINES[rng.pick_index(BREAK_LINES.len())],
            )
        } else {
            (
                ActionOutcome::Fail,
                FAIL_LINES[rng.pick_index(FAIL_LINES.len())],
            )
        };
        queue.push(ActionEvent {
            outcome,
            student_id: student.id,
            message: message.to_string(),
        });
    }

    ActivityReport { queue, data_gain }
}
