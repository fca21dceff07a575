//! Lab Architect — the game core.
//!
//! A deterministic, command-driven state machine for a lab-management
//! narrative sim: monthly COMMAND → ACTION → DECISION cycles, a
//! misconduct counter feeding two discovery risks, and a fiscal-year
//! resolution every March→April.
//!
//! RULES:
//!   - The engine is the single writer; commands apply synchronously.
//!   - State is replaced snapshot-for-snapshot, never edited in place.
//!   - All randomness flows through the injected RandomSource.

pub mod activity;
pub mod calendar;
pub mod command;
pub mod config;
pub mod ending;
pub mod engine;
pub mod error;
pub mod fiscal;
pub mod misconduct;
pub mod rng;
pub mod roster;
pub mod script;
pub mod state;
pub mod turn;
pub mod types;
