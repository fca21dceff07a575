//! The canonical game state snapshot and its closed enumerations.
//!
//! RULE: GameState is never mutated in place. Every command builds a
//! new snapshot and the engine swaps it in whole; readers only ever
//! observe fully committed snapshots.

use crate::{
    activity::ActionEvent,
    calendar::Calendar,
    config::GameConfig,
    error::{GameError, GameResult},
    roster::Student,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Naming,
    MainGame,
    GameOver,
}

/// The monthly loop inside MainGame. Meaningless in any other phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubPhase {
    Command,
    Action,
    Decision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabRank {
    S,
    A,
    B,
    C,
    D,
    F,
}

/// The closed set of naming suffixes the founding paperwork accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabSuffix {
    Laboratory,
    Lab,
    Institute,
    Center,
    Agency,
    Empire,
    Sanctum,
    Cradle,
    Workshop,
    Foundry,
}

impl LabSuffix {
    pub const ALL: [LabSuffix; 10] = [
        Self::Laboratory,
        Self::Lab,
        Self::Institute,
        Self::Center,
        Self::Agency,
        Self::Empire,
        Self::Sanctum,
        Self::Cradle,
        Self::Workshop,
        Self::Foundry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Laboratory => "Laboratory",
            Self::Lab        => "Lab",
            Self::Institute  => "Institute",
            Self::Center     => "Center",
            Self::Agency     => "Agency",
            Self::Empire     => "Empire",
            Self::Sanctum    => "Sanctum",
            Self::Cradle     => "Cradle",
            Self::Workshop   => "Workshop",
            Self::Foundry    => "Foundry",
        }
    }
}

impl FromStr for LabSuffix {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suffix| suffix.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownSuffix(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    ArrestInternal,
    ArrestAudit,
    Bankruptcy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub currency:       i64,
    pub data_points:    i64,
    pub special_points: i64,
}

/// A partial update for `Resources`. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResourcePatch {
    pub currency:       Option<i64>,
    pub data_points:    Option<i64>,
    pub special_points: Option<i64>,
}

impl Resources {
    /// Shallow-merge a patch, rejecting values that would go negative.
    pub fn merged(&self, patch: ResourcePatch) -> GameResult<Resources> {
        let mut next = *self;
        if let Some(value) = patch.currency {
            if value < 0 {
                return Err(GameError::NegativeResource { field: "currency", value });
            }
            next.currency = value;
        }
        if let Some(value) = patch.data_points {
            if value < 0 {
                return Err(GameError::NegativeResource { field: "data_points", value });
            }
            next.data_points = value;
        }
        if let Some(value) = patch.special_points {
            if value < 0 {
                return Err(GameError::NegativeResource { field: "special_points", value });
            }
            next.special_points = value;
        }
        Ok(next)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Fabrications so far. Only ever increments.
    pub fraud_count:      u32,
    pub is_game_over:     bool,
    pub game_over_reason: Option<GameOverReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabIdentity {
    pub name:   String,
    pub suffix: LabSuffix,
    pub rank:   LabRank,
}

impl LabIdentity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.suffix.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase:        Phase,
    pub sub_phase:    SubPhase,
    pub calendar:     Calendar,
    pub lab:          LabIdentity,
    pub resources:    Resources,
    pub flags:        Flags,
    pub roster:       Vec<Student>,
    pub action_queue: Vec<ActionEvent>,
    pub log:          Vec<String>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase:     Phase::Intro,
            sub_phase: SubPhase::Command,
            calendar:  Calendar::start(),
            lab: LabIdentity {
                name:   String::new(),
                suffix: LabSuffix::Laboratory,
                rank:   LabRank::F,
            },
            resources: Resources {
                currency:       config.starting_currency,
                data_points:    0,
                special_points: 0,
            },
            flags:        Flags::default(),
            roster:       Vec::new(),
            action_queue: Vec::new(),
            log:          Vec::new(),
        }
    }

    pub fn find_student(&self, id: crate::types::StudentId) -> Option<&Student> {
        self.roster.iter().find(|s| s.id == id)
    }

    /// Roster members that draw the annual doctoral upkeep.
    pub fn doctoral_count(&self) -> usize {
        self.roster.iter().filter(|s| s.rank.counts_for_upkeep()).count()
    }

    /// Snapshot export for the presentation layer and tooling.
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
