use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{debug, info};

use crate::data::achievements::Metric;
use crate::data::badges::BadgeId;
use crate::data::footprints::multiplier_for_label;
use crate::data::levels::{level_for, next_level_for, progress_to_next_level, Level};
use crate::progress::{EarnedBadge, UserProgress};
use crate::rules::scoring::{clamp_magnitude, scan_points};
use crate::rules::streak;
use crate::store::{KeyValueStore, ProgressStore, StoreError};

/// A classified item as delivered by the external detector/catalog lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Category label; unrecognized labels score with multiplier 1.0.
    pub category: String,
    /// Grams CO2-equivalent. Negative values are clamped to zero.
    pub co2_grams: f64,
}

/// Delta summary returned to the presentation layer after a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Base points plus streak bonus; achievement rewards are not included.
    pub points_earned: u32,
    pub new_badges: Vec<EarnedBadge>,
    pub level_up: bool,
    /// Set when `level_up` is true.
    pub new_level: Option<&'static str>,
}

/// The progression engine. One instance per progress record, constructed
/// with an injected persistence backend; there is no shared global state.
///
/// Scan acceptance is a single-writer operation: concurrent writers to the
/// same backend key are last-write-wins, which is a known limitation.
pub struct EcoScanService<S: KeyValueStore> {
    store: ProgressStore<S>,
}

impl<S: KeyValueStore> EcoScanService<S> {
    pub fn new(backend: S) -> Self {
        Self {
            store: ProgressStore::new(backend),
        }
    }

    /// Snapshot of the current record (default if nothing is persisted).
    pub fn progress(&self) -> UserProgress {
        self.store.load()
    }

    /// Accepts one scan using the local calendar day.
    pub fn accept_scan(&mut self, scan: &Classification) -> Result<ScanOutcome, StoreError> {
        self.accept_scan_at(scan, Local::now().date_naive(), Utc::now())
    }

    /// Accepts one scan with explicit clocks. `today` drives streak
    /// arithmetic; `now` stamps any badges unlocked by this scan.
    pub fn accept_scan_at(
        &mut self,
        scan: &Classification,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ScanOutcome, StoreError> {
        let mut progress = self.store.load();
        let prior_level = progress.level();

        let grams = clamp_magnitude(scan.co2_grams);
        let multiplier = multiplier_for_label(&scan.category);
        let base = scan_points(grams, multiplier);
        let streak = streak::advance(progress.last_scan_date, today, progress.daily_streak);
        let earned = base + streak.bonus;

        progress.daily_streak = streak.streak;
        progress.eco_points += earned;
        progress.total_scans += 1;
        progress.co2_tracked += grams;
        progress.last_scan_date = Some(today);

        let new_badges = self.unlock_badges(&mut progress, now);
        self.update_achievements(&mut progress);

        let new_level = level_for(progress.eco_points);
        let level_up = new_level.min_points != prior_level.min_points;

        self.store.save(&progress)?;
        debug!(
            category = %scan.category,
            points = earned,
            total = progress.eco_points,
            streak = progress.daily_streak,
            "scan accepted"
        );

        Ok(ScanOutcome {
            points_earned: earned,
            new_badges,
            level_up,
            new_level: level_up.then_some(new_level.name),
        })
    }

    fn unlock_badges(&self, progress: &mut UserProgress, now: DateTime<Utc>) -> Vec<EarnedBadge> {
        let mut unlocked = Vec::new();
        for id in BadgeId::ALL {
            if !progress.has_badge(id) && id.unlocked_by(progress) {
                info!(badge = id.as_str(), "badge unlocked");
                let badge = EarnedBadge::unlock(id, now);
                progress.badges.push(badge.clone());
                unlocked.push(badge);
            }
        }
        unlocked
    }

    /// Mirrors each incomplete achievement's progress from its live counter
    /// and latches completion, granting the reward exactly once.
    fn update_achievements(&self, progress: &mut UserProgress) {
        let total_scans = progress.total_scans as u64;
        let daily_streak = progress.daily_streak as u64;
        let co2_floored = progress.co2_tracked.floor() as u64;

        let mut rewards = 0u32;
        for entry in &mut progress.achievements {
            if entry.completed {
                continue;
            }
            entry.progress = match entry.id.metric() {
                Metric::TotalScans => total_scans,
                Metric::DailyStreak => daily_streak,
                Metric::Co2Grams => co2_floored,
            };
            if entry.progress >= entry.target {
                entry.completed = true;
                rewards += entry.reward;
                info!(achievement = entry.id.as_str(), reward = entry.reward, "achievement completed");
            }
        }
        progress.eco_points += rewards;
    }

    pub fn current_level(&self) -> &'static Level {
        level_for(self.store.load().eco_points)
    }

    pub fn next_level(&self) -> Option<&'static Level> {
        next_level_for(self.store.load().eco_points)
    }

    /// Integer percentage toward the next level, 100 at the top.
    pub fn progress_to_next_level(&self) -> u32 {
        progress_to_next_level(self.store.load().eco_points)
    }

    /// Removes the persisted record entirely.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }
}
