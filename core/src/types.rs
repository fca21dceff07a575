//! Shared primitive types used across the game core.

/// A stable, caller-visible identifier for a roster member.
pub type StudentId = u64;

/// In-game year, starting at 1.
pub type Year = u32;

/// In-game month, always in [1, 12].
pub type Month = u8;
