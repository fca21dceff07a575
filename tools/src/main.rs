//! lab-runner: headless playthrough driver for Lab Architect.
//!
//! Usage:
//!   lab-runner --seed 42
//!   lab-runner --seed 42 --fraud-every 3 --config tunables.json

use anyhow::Result;
use lab_architect_core::{
    command::Command,
    config::GameConfig,
    ending,
    engine::GameEngine,
    roster::{Student, StudentRank},
    script,
    state::{LabSuffix, Phase, SubPhase},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    // 0 = honest run; otherwise fabricate every n-th month.
    let fraud_every = parse_arg(&args, "--fraud-every", 0u64);
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => GameConfig::load(&w[1])?,
        None => GameConfig::default(),
    };

    println!("Lab Architect — lab-runner");
    println!("  seed:        {seed}");
    println!("  fraud-every: {fraud_every}");
    println!();

    for line in &script::INTRO_SCRIPT {
        println!("{}: {}", line.speaker, line.text.replace('\n', " "));
    }
    println!();

    let mut engine = GameEngine::new(config, seed);
    engine.dispatch(Command::SetPhase { phase: Phase::Naming })?;
    engine.dispatch(Command::SetLabName {
        name: "Hampton".into(),
        suffix: LabSuffix::Laboratory,
    })?;
    engine.dispatch(Command::SetPhase { phase: Phase::MainGame })?;

    let founding_roster = [
        ("Sato", StudentRank::B4),
        ("Suzuki", StudentRank::M1),
        ("Tanaka", StudentRank::M2),
        ("Takahashi", StudentRank::D),
    ];
    for (i, (name, rank)) in founding_roster.into_iter().enumerate() {
        engine.dispatch(Command::AddStudent {
            student: Student {
                id: i as u64 + 1,
                name: format!("{name} ({})", rank.label()),
                rank,
            },
        })?;
    }

    let mut months = 0u64;
    while engine.state().phase != Phase::GameOver {
        months += 1;
        if fraud_every > 0 && months % fraud_every == 0 {
            engine.dispatch(Command::CommitFraud)?;
        }
        engine.dispatch(Command::StartActivity)?;
        engine.dispatch(Command::SetSubPhase {
            sub_phase: SubPhase::Decision,
        })?;
        engine.dispatch(Command::AdvanceMonth)?;
    }
    log::info!("playthrough finished after {months} months");

    let state = engine.state();
    println!("── log ──");
    for line in &state.log {
        println!("{line}");
    }
    println!();

    let epilogue = ending::epilogue(state);
    println!("{}", epilogue.headline);
    println!("{}", epilogue.title);
    println!("{}", epilogue.message);
    println!();
    println!("{}", epilogue.share_text);
    println!();
    println!("{}", state.to_json()?);

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
