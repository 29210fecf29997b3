use serde::{Deserialize, Serialize};

use crate::progress::UserProgress;

/// Closed set of badge definitions. Adding a badge means adding a variant
/// and extending the exhaustive matches below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstScan,
    #[serde(rename = "streak_3")]
    Streak3,
    #[serde(rename = "streak_7")]
    Streak7,
    #[serde(rename = "streak_30")]
    Streak30,
    CarbonTracker,
    CarbonCrusher,
    EcoExpert,
    PlanetGuardian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl BadgeId {
    pub const ALL: [BadgeId; 8] = [
        BadgeId::FirstScan,
        BadgeId::Streak3,
        BadgeId::Streak7,
        BadgeId::Streak30,
        BadgeId::CarbonTracker,
        BadgeId::CarbonCrusher,
        BadgeId::EcoExpert,
        BadgeId::PlanetGuardian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeId::FirstScan => "first_scan",
            BadgeId::Streak3 => "streak_3",
            BadgeId::Streak7 => "streak_7",
            BadgeId::Streak30 => "streak_30",
            BadgeId::CarbonTracker => "carbon_tracker",
            BadgeId::CarbonCrusher => "carbon_crusher",
            BadgeId::EcoExpert => "eco_expert",
            BadgeId::PlanetGuardian => "planet_guardian",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BadgeId::FirstScan => "First Scan",
            BadgeId::Streak3 => "3 Day Streak",
            BadgeId::Streak7 => "7 Day Streak",
            BadgeId::Streak30 => "30 Day Streak",
            BadgeId::CarbonTracker => "Carbon Tracker",
            BadgeId::CarbonCrusher => "Carbon Crusher",
            BadgeId::EcoExpert => "Eco Expert",
            BadgeId::PlanetGuardian => "Planet Guardian",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BadgeId::FirstScan => "Completed your first scan",
            BadgeId::Streak3 => "Scanned three days in a row",
            BadgeId::Streak7 => "Scanned seven days in a row",
            BadgeId::Streak30 => "Scanned thirty days in a row",
            BadgeId::CarbonTracker => "Tracked 1 kg of CO2",
            BadgeId::CarbonCrusher => "Tracked 10 kg of CO2",
            BadgeId::EcoExpert => "Earned 1000 EcoPoints",
            BadgeId::PlanetGuardian => "Earned 8000 EcoPoints",
        }
    }

    pub fn rarity(self) -> Rarity {
        match self {
            BadgeId::FirstScan => Rarity::Common,
            BadgeId::Streak3 => Rarity::Common,
            BadgeId::Streak7 => Rarity::Rare,
            BadgeId::Streak30 => Rarity::Epic,
            BadgeId::CarbonTracker => Rarity::Rare,
            BadgeId::CarbonCrusher => Rarity::Epic,
            BadgeId::EcoExpert => Rarity::Epic,
            BadgeId::PlanetGuardian => Rarity::Legendary,
        }
    }

    /// Unlock predicate evaluated against the record after a scan has been
    /// applied. Unlocks are idempotent: callers skip ids already earned.
    pub fn unlocked_by(self, progress: &UserProgress) -> bool {
        match self {
            BadgeId::FirstScan => progress.total_scans >= 1,
            BadgeId::Streak3 => progress.daily_streak >= 3,
            BadgeId::Streak7 => progress.daily_streak >= 7,
            BadgeId::Streak30 => progress.daily_streak >= 30,
            BadgeId::CarbonTracker => progress.co2_tracked >= 1000.0,
            BadgeId::CarbonCrusher => progress.co2_tracked >= 10_000.0,
            BadgeId::EcoExpert => progress.eco_points >= 1000,
            BadgeId::PlanetGuardian => progress.eco_points >= 8000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_ids_are_unique() {
        for (i, a) in BadgeId::ALL.iter().enumerate() {
            for b in BadgeId::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn fresh_record_unlocks_nothing() {
        let progress = UserProgress::default();
        for id in BadgeId::ALL {
            assert!(!id.unlocked_by(&progress), "{} unlocked too early", id.as_str());
        }
    }

    #[test]
    fn predicates_trip_at_their_thresholds() {
        let mut progress = UserProgress::default();
        progress.total_scans = 1;
        assert!(BadgeId::FirstScan.unlocked_by(&progress));

        progress.daily_streak = 7;
        assert!(BadgeId::Streak3.unlocked_by(&progress));
        assert!(BadgeId::Streak7.unlocked_by(&progress));
        assert!(!BadgeId::Streak30.unlocked_by(&progress));

        progress.co2_tracked = 999.9;
        assert!(!BadgeId::CarbonTracker.unlocked_by(&progress));
        progress.co2_tracked = 1000.0;
        assert!(BadgeId::CarbonTracker.unlocked_by(&progress));

        progress.eco_points = 1000;
        assert!(BadgeId::EcoExpert.unlocked_by(&progress));
        assert!(!BadgeId::PlanetGuardian.unlocked_by(&progress));
    }

    #[test]
    fn serde_ids_match_the_stable_string_form() {
        for id in BadgeId::ALL {
            let encoded = serde_json::to_string(&id).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", id.as_str()));
        }
    }
}
