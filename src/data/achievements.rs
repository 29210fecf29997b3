use serde::{Deserialize, Serialize};

/// Closed set of achievement definitions, one progress record each in
/// `UserProgress`, seeded at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    ScanMaster,
    StreakLegend,
    Co2Conscious,
}

/// Which live counter an achievement's progress mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalScans,
    DailyStreak,
    Co2Grams,
}

impl AchievementId {
    pub const ALL: [AchievementId; 3] = [
        AchievementId::ScanMaster,
        AchievementId::StreakLegend,
        AchievementId::Co2Conscious,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AchievementId::ScanMaster => "scan_master",
            AchievementId::StreakLegend => "streak_legend",
            AchievementId::Co2Conscious => "co2_conscious",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AchievementId::ScanMaster => "Scan Master",
            AchievementId::StreakLegend => "Streak Legend",
            AchievementId::Co2Conscious => "CO2 Conscious",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AchievementId::ScanMaster => "Complete 100 scans",
            AchievementId::StreakLegend => "Reach a 100 day streak",
            AchievementId::Co2Conscious => "Track 50 kg of CO2",
        }
    }

    pub fn target(self) -> u64 {
        match self {
            AchievementId::ScanMaster => 100,
            AchievementId::StreakLegend => 100,
            AchievementId::Co2Conscious => 50_000,
        }
    }

    /// EcoPoints granted exactly once, when `progress` reaches `target`.
    pub fn reward(self) -> u32 {
        match self {
            AchievementId::ScanMaster => 500,
            AchievementId::StreakLegend => 1000,
            AchievementId::Co2Conscious => 750,
        }
    }

    pub fn metric(self) -> Metric {
        match self {
            AchievementId::ScanMaster => Metric::TotalScans,
            AchievementId::StreakLegend => Metric::DailyStreak,
            AchievementId::Co2Conscious => Metric::Co2Grams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_ids_are_unique() {
        for (i, a) in AchievementId::ALL.iter().enumerate() {
            for b in AchievementId::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn targets_and_rewards_match_the_catalog() {
        assert_eq!(AchievementId::Co2Conscious.target(), 50_000);
        assert_eq!(AchievementId::Co2Conscious.reward(), 750);
        assert_eq!(AchievementId::ScanMaster.metric(), Metric::TotalScans);
        assert_eq!(AchievementId::StreakLegend.metric(), Metric::DailyStreak);
    }
}
