/// Base points by magnitude breakpoint. Low-impact items earn more than
/// high-impact ones: the score is an educational nudge, not a cost proxy.
pub fn base_points(co2_grams: f64) -> u32 {
    if co2_grams > 1000.0 {
        15
    } else if co2_grams > 100.0 {
        20
    } else {
        25
    }
}

/// Base points scaled by the category multiplier, floored to an integer.
pub fn scan_points(co2_grams: f64, multiplier: f64) -> u32 {
    (base_points(co2_grams) as f64 * multiplier).floor() as u32
}

/// Magnitudes are caller-supplied and unvalidated upstream; negative or
/// non-finite values are clamped to zero.
pub fn clamp_magnitude(co2_grams: f64) -> f64 {
    if co2_grams.is_finite() && co2_grams > 0.0 {
        co2_grams
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exclusive_lower_bounds() {
        assert_eq!(base_points(0.0), 25);
        assert_eq!(base_points(100.0), 25);
        assert_eq!(base_points(100.1), 20);
        assert_eq!(base_points(1000.0), 20);
        assert_eq!(base_points(1000.1), 15);
        assert_eq!(base_points(6100.0), 15);
    }

    #[test]
    fn multiplier_is_applied_then_floored() {
        assert_eq!(scan_points(12.0, 1.0), 25);
        assert_eq!(scan_points(12.0, 1.5), 37); // 25 * 1.5 = 37.5
        assert_eq!(scan_points(340.0, 1.2), 24); // 20 * 1.2 = 24.0
        assert_eq!(scan_points(6100.0, 1.3), 19); // 15 * 1.3 = 19.5
    }

    #[test]
    fn negative_and_non_finite_magnitudes_clamp_to_zero() {
        assert_eq!(clamp_magnitude(-5.0), 0.0);
        assert_eq!(clamp_magnitude(f64::NAN), 0.0);
        assert_eq!(clamp_magnitude(f64::INFINITY), 0.0);
        assert_eq!(clamp_magnitude(42.5), 42.5);
    }
}
