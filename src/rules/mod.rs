pub mod scoring;
pub mod streak;

pub use scoring::{base_points, clamp_magnitude, scan_points};
pub use streak::{advance, StreakOutcome, STREAK_BONUS_CAP};
