//! The fixed intro script and naming data the presentation layer
//! renders. One line prompts the naming modal.

pub struct DialogueLine {
    pub speaker:        &'static str,
    pub text:           &'static str,
    pub prompts_naming: bool,
}

/// The lab secretary who walks the player through the opening.
pub const SECRETARY: &str = "Shiori Saeki";

pub const INTRO_SCRIPT: [DialogueLine; 3] = [
    DialogueLine {
        speaker:        SECRETARY,
        text:           "Welcome, Professor. Congratulations on your appointment.",
        prompts_naming: false,
    },
    DialogueLine {
        speaker:        SECRETARY,
        text:           "I'm Shiori Saeki, your lab secretary starting today. A pleasure to work with you.",
        prompts_naming: false,
    },
    DialogueLine {
        speaker:        SECRETARY,
        text:           "First, let's decide on a name for the lab. What shall we call it?\nIt goes on file with the university, so there's no changing it later. Choose well!",
        prompts_naming: true,
    },
];

/// Maximum lab name length, in characters.
pub const LAB_NAME_LIMIT: usize = 10;
