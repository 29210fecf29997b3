use chrono::NaiveDate;

/// Streak bonus points are capped regardless of how long the streak runs.
pub const STREAK_BONUS_CAP: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOutcome {
    /// Streak counter after this scan.
    pub streak: u32,
    /// Bonus points contributed by this scan.
    pub bonus: u32,
}

/// Advances the daily streak for a scan on `today`.
///
/// Same calendar day: counter unchanged, no bonus. Exactly one day later:
/// counter increments. Anything else (first-ever scan, a gap of more than
/// one day, or a clock that moved backwards) resets the counter to 1.
pub fn advance(last_scan: Option<NaiveDate>, today: NaiveDate, current: u32) -> StreakOutcome {
    match last_scan {
        Some(last) => {
            let days = (today - last).num_days();
            if days == 0 {
                StreakOutcome {
                    streak: current,
                    bonus: 0,
                }
            } else if days == 1 {
                let streak = current + 1;
                StreakOutcome {
                    streak,
                    bonus: streak.min(STREAK_BONUS_CAP),
                }
            } else {
                StreakOutcome { streak: 1, bonus: 1 }
            }
        }
        None => StreakOutcome { streak: 1, bonus: 1 },
    }
}
