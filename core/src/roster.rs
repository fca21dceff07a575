//! Students: ranks, per-rank stats, and recruit generation.

use crate::types::StudentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentRank {
    B4,
    M1,
    M2,
    D,
    PhD,
}

impl StudentRank {
    /// Data points one successful activity cycle yields.
    pub fn action_points(&self) -> i64 {
        match self {
            Self::B4  => 3,
            Self::M1  => 4,
            Self::M2  => 5,
            Self::D   => 8,
            Self::PhD => 10,
        }
    }

    /// Chance a single activity succeeds. Doctoral ranks cannot fail.
    pub fn success_rate(&self) -> f64 {
        match self {
            Self::B4  => 0.8,
            Self::M1  => 0.9,
            Self::M2  => 0.95,
            Self::D   => 1.0,
            Self::PhD => 1.2,
        }
    }

    /// Ranks that draw the annual doctoral upkeep deduction.
    pub fn counts_for_upkeep(&self) -> bool {
        matches!(self, Self::D | Self::PhD)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::B4  => "B4",
            Self::M1  => "M1",
            Self::M2  => "M2",
            Self::D   => "D",
            Self::PhD => "PhD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id:   StudentId,
    pub name: String,
    pub rank: StudentRank,
}

/// Surnames handed to externally recruited students.
const RECRUIT_SURNAMES: &[&str] = &[
    "Sato", "Suzuki", "Takahashi", "Tanaka", "Ito",
    "Watanabe", "Yamamoto", "Nakamura", "Kobayashi", "Kato",
];

/// Lowest id not yet taken by the roster. Keeps generated recruits from
/// colliding with caller-supplied ids.
pub fn next_free_id(roster: &[Student]) -> StudentId {
    roster.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

/// Build the student an S-rank reputation attracts each April. The name
/// is derived from the id so recruitment consumes no extra draws.
pub fn external_recruit(id: StudentId, rank: StudentRank) -> Student {
    let surname = RECRUIT_SURNAMES[(id as usize) % RECRUIT_SURNAMES.len()];
    Student {
        id,
        name: format!("{surname} (transfer {})", rank.label()),
        rank,
    }
}
