//! The command dispatcher — single owner of the canonical snapshot.
//!
//! RULES:
//!   - Commands are processed synchronously, one at a time.
//!   - Every command builds a new snapshot; the old one is replaced
//!     whole, never edited in place.
//!   - Once flags.is_game_over is set, every command except Restart is
//!     a silent no-op.
//!   - All randomness flows through the injected RandomSource.

use crate::{
    activity,
    command::Command,
    config::GameConfig,
    error::{GameError, GameResult},
    misconduct,
    rng::{GameRng, RandomSource},
    script,
    state::{GameState, Phase, SubPhase},
    turn,
};

pub struct GameEngine {
    state:  GameState,
    config: GameConfig,
    rng:    Box<dyn RandomSource>,
}

impl GameEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, Box::new(GameRng::seed_from(seed)))
    }

    /// Build with a caller-supplied random source (scripted in tests).
    pub fn with_rng(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        let state = GameState::new(&config);
        Self { state, config, rng }
    }

    /// Resume from an exported snapshot. Also the seam tests use to pin
    /// a scenario before dispatching.
    pub fn from_state(config: GameConfig, state: GameState, rng: Box<dyn RandomSource>) -> Self {
        Self { state, config, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validate and apply one command, returning the new snapshot.
    pub fn dispatch(&mut self, command: Command) -> GameResult<&GameState> {
        if self.state.flags.is_game_over && !matches!(command, Command::Restart) {
            log::debug!("command ignored after game over: {command:?}");
            return Ok(&self.state);
        }

        let mut next = self.state.clone();
        match command {
            Command::SetPhase { phase } => next.phase = phase,
            Command::SetSubPhase { sub_phase } => next.sub_phase = sub_phase,
            Command::SetLabName { name, suffix } => {
                let name = name.trim();
                if name.is_empty() {
                    // Disabled at the boundary: an empty submission is a no-op.
                    return Ok(&self.state);
                }
                let len = name.chars().count();
                if len > script::LAB_NAME_LIMIT {
                    return Err(GameError::NameTooLong {
                        len,
                        limit: script::LAB_NAME_LIMIT,
                    });
                }
                next.lab.name = name.to_string();
                next.lab.suffix = suffix;
            }
            Command::StartActivity => {
                let report = activity::resolve(&next, &self.config, self.rng.as_mut());
                next.sub_phase = SubPhase::Action;
                next.action_queue = report.queue;
                if report.data_gain > 0 {
                    next.resources.data_points += report.data_gain;
                    next.log.push(format!(
                        "Monthly activities concluded. (Data +{}pt)",
                        report.data_gain
                    ));
                }
            }
            Command::AdvanceMonth => {
                next = turn::advance(&self.state, &self.config, self.rng.as_mut());
            }
            Command::CommitFraud => {
                misconduct::commit_fraud(&mut next, &self.config, self.rng.as_mut());
            }
            Command::UpdateResources { patch } => {
                next.resources = next.resources.merged(patch)?;
            }
            Command::AddLog { text } => next.log.push(text),
            Command::AddStudent { student } => {
                if next.roster.iter().any(|s| s.id == student.id) {
                    return Err(GameError::DuplicateStudent { id: student.id });
                }
                next.roster.push(student);
            }
            Command::SetActionQueue { events } => {
                for event in &events {
                    if next.find_student(event.student_id).is_none() {
                        return Err(GameError::UnknownStudent {
                            id: event.student_id,
                        });
                    }
                }
                next.action_queue = events;
            }
            Command::SetGameOver { reason } => {
                next.phase = Phase::GameOver;
                next.flags.is_game_over = true;
                next.flags.game_over_reason = Some(reason);
            }
            Command::Restart => next = GameState::new(&self.config),
        }

        self.state = next;
        Ok(&self.state)
    }
}
