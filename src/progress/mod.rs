use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::data::achievements::AchievementId;
use crate::data::badges::{BadgeId, Rarity};
use crate::data::levels::{level_for, Level};

const DEFAULT_WEEKLY_GOAL: u32 = 50;

/// A badge instance once unlocked, stamped with its unlock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub unlocked_at: DateTime<Utc>,
}

impl EarnedBadge {
    pub fn unlock(id: BadgeId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            rarity: id.rarity(),
            unlocked_at: at,
        }
    }
}

/// Live progress toward one achievement. Created at initialization, mutated
/// in place, never removed. `completed` is a latch: once true it stays true
/// and the reward has been granted exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementState {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub progress: u64,
    pub target: u64,
    pub completed: bool,
    pub reward: u32,
}

impl AchievementState {
    pub fn seed(id: AchievementId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            progress: 0,
            target: id.target(),
            completed: false,
            reward: id.reward(),
        }
    }
}

/// The singleton per-installation progress record.
///
/// Fields use camelCase payload names for compatibility with previously
/// stored records; missing fields fill in from the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub eco_points: u32,
    pub daily_streak: u32,
    pub total_scans: u32,
    /// Accumulated grams CO2-equivalent across all accepted scans.
    pub co2_tracked: f64,
    /// Calendar day of the most recent accepted scan; day granularity only.
    pub last_scan_date: Option<NaiveDate>,
    /// Fixed configuration value, never mutated by scoring.
    pub weekly_goal: u32,
    pub badges: Vec<EarnedBadge>,
    pub achievements: Vec<AchievementState>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            eco_points: 0,
            daily_streak: 0,
            total_scans: 0,
            co2_tracked: 0.0,
            last_scan_date: None,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            badges: Vec::new(),
            achievements: AchievementId::ALL
                .into_iter()
                .map(AchievementState::seed)
                .collect(),
        }
    }
}

impl UserProgress {
    /// The level is derived from the point total, never stored, so it can
    /// never drift out of sync with `eco_points`.
    pub fn level(&self) -> &'static Level {
        level_for(self.eco_points)
    }

    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }

    pub fn achievement(&self, id: AchievementId) -> Option<&AchievementState> {
        self.achievements.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_seeds_every_achievement() {
        let progress = UserProgress::default();
        assert_eq!(progress.achievements.len(), AchievementId::ALL.len());
        assert!(progress.achievements.iter().all(|a| !a.completed));
        assert_eq!(progress.weekly_goal, 50);
        assert_eq!(progress.level().name, "Eco Beginner");
        assert!(progress.last_scan_date.is_none());
    }

    #[test]
    fn payload_round_trips_with_camel_case_fields() {
        let mut progress = UserProgress::default();
        progress.eco_points = 120;
        progress.last_scan_date = NaiveDate::from_ymd_opt(2025, 6, 1);

        let raw = serde_json::to_string(&progress).expect("encode");
        assert!(raw.contains("\"ecoPoints\":120"));
        assert!(raw.contains("\"lastScanDate\":\"2025-06-01\""));

        let decoded: UserProgress = serde_json::from_str(&raw).expect("decode");
        assert_eq!(decoded, progress);
    }

    #[test]
    fn missing_fields_fill_in_from_the_default() {
        let decoded: UserProgress =
            serde_json::from_str(r#"{"ecoPoints": 40, "totalScans": 3}"#).expect("decode");
        assert_eq!(decoded.eco_points, 40);
        assert_eq!(decoded.total_scans, 3);
        assert_eq!(decoded.weekly_goal, 50);
        assert_eq!(decoded.achievements.len(), AchievementId::ALL.len());
    }
}
