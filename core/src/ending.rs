//! Epilogue generation: the headline, title, message and share text the
//! final screen renders from the terminal state.
//!
//! The fraud epithet tiers (0, 1–3, 4–9, 10+) are load-bearing: the
//! share text is the one place the player's misconduct record is spelled
//! out, and the tiers must not drift.

use crate::state::{GameOverReason, GameState, LabRank};

pub const SHARE_URL: &str = "https://example.com/lab_architect";
pub const SHARE_TAG: &str = "#LabArchitect";

/// Visual treatment of the final screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingMood {
    Clean,
    Dark,
    White,
    Torn,
}

#[derive(Debug, Clone)]
pub struct Epilogue {
    pub headline:   &'static str,
    pub title:      String,
    pub message:    String,
    pub share_text: String,
    pub mood:       EndingMood,
}

/// Epithet earned by the misconduct record.
pub fn fraud_epithet(fraud_count: u32) -> &'static str {
    if fraud_count >= 10 {
        "Fabricated"
    } else if fraud_count >= 4 {
        "Gilded"
    } else if fraud_count >= 1 {
        "Tainted"
    } else {
        ""
    }
}

pub fn rank_epithet(rank: LabRank) -> &'static str {
    match rank {
        LabRank::S => "Legendary",
        LabRank::A => "Prestigious",
        LabRank::B => "Up-and-coming",
        LabRank::C => "Developing",
        LabRank::D => "Fledgling",
        LabRank::F => "Unproven",
    }
}

pub fn epilogue(state: &GameState) -> Epilogue {
    let lab = state.lab.full_name();
    let fraud_count = state.flags.fraud_count;

    let fraud_part = fraud_epithet(fraud_count);
    let full_title = if fraud_part.is_empty() {
        format!("the {} {lab}", rank_epithet(state.lab.rank))
    } else {
        format!("the {fraud_part} {} {lab}", rank_epithet(state.lab.rank))
    };

    if state.flags.is_game_over {
        let message = match state.flags.game_over_reason {
            Some(GameOverReason::ArrestInternal) => {
                "Arrested after an internal whistleblower came forward."
            }
            Some(GameOverReason::ArrestAudit) => "Exposed by an external audit.",
            Some(GameOverReason::Bankruptcy) | None => "Bankrupt: the funding ran dry.",
        };
        return Epilogue {
            headline: "GAME OVER",
            title: lab.clone(),
            message: message.to_string(),
            share_text: format!(
                "The lab has been shut down... {lab}, the lab I ran, \
                 fell with its work unfinished. Next time I'll do better... {SHARE_TAG}\n{SHARE_URL}"
            ),
            mood: EndingMood::Torn,
        };
    }

    // Tenure served in full. What kind of decade it was depends on the
    // misconduct record.
    let (mood, message, share_text) = if fraud_count == 0 {
        (
            EndingMood::Clean,
            "Tenure complete: magnificent work!".to_string(),
            format!(
                "I served my full term! {lab}, the lab I ran, goes down in history \
                 as «{full_title}». What a decade it was! {SHARE_TAG}\n{SHARE_URL}"
            ),
        )
    } else {
        let mood = if fraud_count >= 10 {
            EndingMood::White
        } else {
            EndingMood::Dark
        };
        let message = if fraud_count >= 10 {
            "Tenure complete: ...nothing remains.".to_string()
        } else {
            "Tenure complete: the price was steep.".to_string()
        };
        (
            mood,
            message,
            format!(
                "...What have I done. {lab}, the lab I ran, became «{full_title}». \
                 ...Was this the truth I wanted? {SHARE_TAG}\n{SHARE_URL}"
            ),
        )
    };

    Epilogue {
        headline: "Congratulations",
        title: full_title,
        message,
        share_text,
        mood,
    }
}
