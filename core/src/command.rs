use crate::{
    activity::ActionEvent,
    roster::Student,
    state::{GameOverReason, LabSuffix, Phase, ResourcePatch, SubPhase},
};
use serde::{Deserialize, Serialize};

/// Every command the presentation layer may issue.
/// Variants are added, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    // ── Screen flow ───────────────────────────────
    SetPhase { phase: Phase },
    SetSubPhase { sub_phase: SubPhase },
    SetLabName { name: String, suffix: LabSuffix },

    // ── Monthly loop ──────────────────────────────
    StartActivity,
    AdvanceMonth,
    CommitFraud,

    // ── Bookkeeping ───────────────────────────────
    UpdateResources { patch: ResourcePatch },
    AddLog { text: String },
    AddStudent { student: Student },
    SetActionQueue { events: Vec<ActionEvent> },

    // ── Endings ───────────────────────────────────
    SetGameOver { reason: GameOverReason },
    Restart,
}
