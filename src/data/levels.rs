/// A named progression tier covering an inclusive EcoPoints range.
///
/// The catalog partitions the non-negative integers: no gaps, no overlaps,
/// and the last tier is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub min_points: u32,
    /// `None` for the final, unbounded tier.
    pub max_points: Option<u32>,
    pub description: &'static str,
}

pub static LEVELS: [Level; 8] = [
    Level {
        name: "Eco Beginner",
        min_points: 0,
        max_points: Some(99),
        description: "Starting out",
    },
    Level {
        name: "Green Explorer",
        min_points: 100,
        max_points: Some(299),
        description: "Learning impact",
    },
    Level {
        name: "Carbon Detective",
        min_points: 300,
        max_points: Some(599),
        description: "Tracking carbon",
    },
    Level {
        name: "Sustainability Scout",
        min_points: 600,
        max_points: Some(999),
        description: "Eco conscious",
    },
    Level {
        name: "Zero Waste Hunter",
        min_points: 1000,
        max_points: Some(1999),
        description: "Reducing waste",
    },
    Level {
        name: "Climate Champion",
        min_points: 2000,
        max_points: Some(3999),
        description: "Climate action",
    },
    Level {
        name: "Eco Master",
        min_points: 4000,
        max_points: Some(7999),
        description: "Eco leader",
    },
    Level {
        name: "Planet Guardian",
        min_points: 8000,
        max_points: None,
        description: "Planet protector",
    },
];

/// Highest catalog tier whose `min_points` does not exceed `points`.
pub fn level_for(points: u32) -> &'static Level {
    LEVELS
        .iter()
        .rev()
        .find(|level| points >= level.min_points)
        .unwrap_or(&LEVELS[0])
}

/// The tier after the current one, or `None` at the top of the catalog.
pub fn next_level_for(points: u32) -> Option<&'static Level> {
    let current = level_for(points);
    LEVELS
        .iter()
        .position(|level| level.min_points == current.min_points)
        .and_then(|index| LEVELS.get(index + 1))
}

/// Integer percentage through the current tier, 100 once at the top tier.
pub fn progress_to_next_level(points: u32) -> u32 {
    let current = level_for(points);
    match next_level_for(points) {
        Some(next) => {
            let span = next.min_points - current.min_points;
            100 * (points - current.min_points) / span
        }
        None => 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_point_total_lands_in_exactly_one_range() {
        for points in [0u32, 1, 99, 100, 299, 300, 999, 1000, 3999, 4000, 7999, 8000, 50_000] {
            let matches = LEVELS
                .iter()
                .filter(|level| {
                    points >= level.min_points
                        && level.max_points.map_or(true, |max| points <= max)
                })
                .count();
            assert_eq!(matches, 1, "points {} matched {} ranges", points, matches);
            let level = level_for(points);
            assert!(points >= level.min_points);
            assert!(level.max_points.map_or(true, |max| points <= max));
        }
    }

    #[test]
    fn ranges_are_contiguous_and_ascending() {
        for pair in LEVELS.windows(2) {
            let upper = pair[0].max_points.expect("only the last tier is unbounded");
            assert_eq!(upper + 1, pair[1].min_points);
        }
        assert!(LEVELS[LEVELS.len() - 1].max_points.is_none());
    }

    #[test]
    fn boundary_crossing_changes_level() {
        assert_eq!(level_for(99).name, "Eco Beginner");
        assert_eq!(level_for(100).name, "Green Explorer");
        assert_eq!(level_for(8000).name, "Planet Guardian");
    }

    #[test]
    fn next_level_is_absent_at_the_top() {
        assert_eq!(next_level_for(0).map(|l| l.name), Some("Green Explorer"));
        assert!(next_level_for(8000).is_none());
        assert!(next_level_for(20_000).is_none());
    }

    #[test]
    fn percentage_is_monotonic_within_a_tier_and_resets_on_crossing() {
        let mut last = 0;
        for points in 0..100 {
            let pct = progress_to_next_level(points);
            assert!(pct >= last);
            assert!(pct <= 100);
            last = pct;
        }
        assert_eq!(progress_to_next_level(0), 0);
        assert_eq!(progress_to_next_level(50), 50);
        assert_eq!(progress_to_next_level(100), 0);
        assert_eq!(progress_to_next_level(8000), 100);
    }
}
