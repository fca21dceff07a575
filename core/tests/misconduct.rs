//! Discovery-risk properties: the probability table, event priority,
//! terminal freeze, and fraud commission.

use lab_architect_core::{
    command::Command,
    config::GameConfig,
    engine::GameEngine,
    misconduct::{audit_probability, whistleblower_probability, COVER_STORIES, WHISTLEBLOWER_LOG},
    rng::SequenceRng,
    state::{GameOverReason, GameState, Phase, SubPhase},
};

#[test]
fn whistleblower_probability_table() {
    let config = GameConfig::default();
    assert_eq!(whistleblower_probability(0, &config), 0);
    for n in 1..=9 {
        assert_eq!(whistleblower_probability(n, &config), n + 5);
    }
    for n in [10, 11, 25] {
        assert_eq!(
            whistleblower_probability(n, &config),
            0,
            "cover-up clamp at fraud count {n}"
        );
    }
}

#[test]
fn audit_probability_table() {
    let config = GameConfig::default();
    assert_eq!(audit_probability(0, &config), 0);
    for n in 1..=9 {
        assert_eq!(audit_probability(n, &config), 10 + n);
    }
    assert_eq!(audit_probability(10, &config), 20);
    assert_eq!(audit_probability(50, &config), 20, "capped at 20");
}

#[test]
fn scenario_single_fraud() {
    let mut engine = GameEngine::with_rng(
        GameConfig::default(),
        Box::new(SequenceRng::new([0.0])),
    );
    engine
        .dispatch(Command::SetPhase { phase: Phase::MainGame })
        .unwrap();

    engine.dispatch(Command::CommitFraud).unwrap();

    let state = engine.state();
    assert_eq!(state.resources.data_points, 20);
    assert_eq!(state.flags.fraud_count, 1);
    assert_eq!(state.log.len(), 1);

    let line = &state.log[0];
    assert!(line.starts_with("[Data correction]"), "got: {line}");
    assert!(
        COVER_STORIES.iter().any(|story| line.contains(story)),
        "log line must carry a cover story: {line}"
    );
    assert!(line.ends_with("(Data +20pt)"), "got: {line}");
}

#[test]
fn fraud_accumulates_linearly() {
    let mut engine = GameEngine::with_rng(
        GameConfig::default(),
        Box::new(SequenceRng::new([]).with_fallback(0.3)),
    );
    for _ in 0..5 {
        engine.dispatch(Command::CommitFraud).unwrap();
    }

    let state = engine.state();
    assert_eq!(state.resources.data_points, 100);
    assert_eq!(state.flags.fraud_count, 5);
    assert_eq!(state.log.len(), 5);
}

#[test]
fn whistleblower_arrest_freezes_the_session() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.phase = Phase::MainGame;
    state.flags.fraud_count = 1; // 6% monthly risk

    let rng = SequenceRng::new([0.0]); // roll 0 < 6: fires
    let mut engine = GameEngine::from_state(config.clone(), state, Box::new(rng));

    engine.dispatch(Command::AdvanceMonth).unwrap();

    let state = engine.state().clone();
    assert_eq!(state.phase, Phase::GameOver);
    assert!(state.flags.is_game_over);
    assert_eq!(
        state.flags.game_over_reason,
        Some(GameOverReason::ArrestInternal)
    );
    assert_eq!(state.calendar.month, 4, "calendar change is discarded");

    // Terminal freeze: no command but Restart touches anything.
    engine.dispatch(Command::CommitFraud).unwrap();
    engine.dispatch(Command::AdvanceMonth).unwrap();
    engine
        .dispatch(Command::AddLog { text: "ignored".into() })
        .unwrap();
    assert_eq!(engine.state(), &state);
}

#[test]
fn internal_event_outranks_audit_on_the_boundary() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.phase = Phase::MainGame;
    state.sub_phase = SubPhase::Decision;
    state.calendar.month = 3;
    state.flags.fraud_count = 1;

    // One draw only: the whistleblower fires and the audit roll is
    // never taken. Any second draw would hit the 0.99 fallback and
    // could not fire anything anyway.
    let rng = SequenceRng::new([0.03]);
    let mut engine = GameEngine::from_state(config.clone(), state, Box::new(rng));

    engine.dispatch(Command::AdvanceMonth).unwrap();

    let state = engine.state();
    assert_eq!(
        state.flags.game_over_reason,
        Some(GameOverReason::ArrestInternal)
    );
    assert!(state.log.iter().any(|l| l == WHISTLEBLOWER_LOG));
    // The fiscal draft is computed after the event: its log lines are
    // kept, its effects are not.
    assert!(state.log.iter().any(|l| l.contains("[New fiscal year]")));
    assert_eq!(state.resources.currency, config.starting_currency);
    assert_eq!(state.calendar.year, 1);
    assert_eq!(state.calendar.month, 3);
    assert_eq!(state.sub_phase, SubPhase::Decision, "no sub-phase reset");
}
