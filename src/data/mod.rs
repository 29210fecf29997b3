pub mod achievements;
pub mod badges;
pub mod footprints;
pub mod levels;

pub use achievements::{AchievementId, Metric};
pub use badges::{BadgeId, Rarity};
pub use footprints::{
    lookup, multiplier_for_label, search, Category, ImpactLevel, ItemFootprint, FOOTPRINTS,
};
pub use levels::{level_for, next_level_for, progress_to_next_level, Level, LEVELS};
