//! Epilogue tiers and share text.

use lab_architect_core::{
    config::GameConfig,
    ending::{self, EndingMood, SHARE_TAG},
    state::{GameOverReason, GameState, LabRank, LabSuffix, Phase},
};

fn finished_state(fraud_count: u32) -> GameState {
    let mut state = GameState::new(&GameConfig::default());
    state.phase = Phase::GameOver;
    state.lab.name = "Nimbus".into();
    state.lab.suffix = LabSuffix::Lab;
    state.lab.rank = LabRank::B;
    state.flags.fraud_count = fraud_count;
    state
}

#[test]
fn fraud_epithet_thresholds() {
    assert_eq!(ending::fraud_epithet(0), "");
    for n in 1..=3 {
        assert_eq!(ending::fraud_epithet(n), "Tainted");
    }
    for n in 4..=9 {
        assert_eq!(ending::fraud_epithet(n), "Gilded");
    }
    for n in [10, 30] {
        assert_eq!(ending::fraud_epithet(n), "Fabricated");
    }
}

#[test]
fn clean_clear() {
    let epilogue = ending::epilogue(&finished_state(0));
    assert_eq!(epilogue.mood, EndingMood::Clean);
    assert_eq!(epilogue.headline, "Congratulations");
    assert_eq!(epilogue.title, "the Up-and-coming Nimbus Lab");
    assert!(epilogue.share_text.contains(SHARE_TAG));
}

#[test]
fn tainted_clear_is_dark() {
    let epilogue = ending::epilogue(&finished_state(2));
    assert_eq!(epilogue.mood, EndingMood::Dark);
    assert!(epilogue.title.contains("Tainted"));
}

#[test]
fn heavy_fraud_clear_is_white() {
    let epilogue = ending::epilogue(&finished_state(12));
    assert_eq!(epilogue.mood, EndingMood::White);
    assert!(epilogue.title.contains("Fabricated"));
    assert!(epilogue.message.contains("nothing remains"));
}

#[test]
fn arrest_is_torn() {
    let mut state = finished_state(5);
    state.flags.is_game_over = true;
    state.flags.game_over_reason = Some(GameOverReason::ArrestAudit);

    let epilogue = ending::epilogue(&state);
    assert_eq!(epilogue.mood, EndingMood::Torn);
    assert_eq!(epilogue.headline, "GAME OVER");
    assert_eq!(epilogue.title, "Nimbus Lab", "no epithets on a shutdown notice");
    assert!(epilogue.message.contains("audit"));
    assert!(epilogue.share_text.contains("shut down"));
}

#[test]
fn rank_epithets_cover_every_rank() {
    let epithets: Vec<&str> = [
        LabRank::S,
        LabRank::A,
        LabRank::B,
        LabRank::C,
        LabRank::D,
        LabRank::F,
    ]
    .into_iter()
    .map(ending::rank_epithet)
    .collect();
    assert_eq!(
        epithets,
        vec![
            "Legendary",
            "Prestigious",
            "Up-and-coming",
            "Developing",
            "Fledgling",
            "Unproven"
        ]
    );
}
