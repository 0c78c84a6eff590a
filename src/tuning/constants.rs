//! Reference interval sizes in cents.

/// Size in cents of a justly tuned perfect fifth, 1200 * log2(3/2)
pub const JUST_FIFTH: f64 = 701.955_000_865_387_4;

/// Size in cents of a 12EDO perfect fifth
pub const DEFAULT_FIFTH: f64 = 700.0;

/// Smallest fifth in the diatonic range (the 7EDO fifth)
pub const SMALLEST_DIATONIC_FIFTH: f64 = 1200.0 / 7.0 * 4.0;

/// Largest fifth in the diatonic range (the 5EDO fifth)
pub const LARGEST_DIATONIC_FIFTH: f64 = 1200.0 / 5.0 * 3.0;

/// Size in cents of the syntonic comma, 1200 * log2(81/80)
pub const SYNTONIC_COMMA: f64 = 21.506_289_596_714_78;

/// Deviation of a fifth from the 12EDO fifth
pub fn fifth_deviation(fifth_size: f64) -> f64 {
    fifth_size - DEFAULT_FIFTH
}

/// Just fifth narrowed by `fraction` of a syntonic comma
/// 1/4 gives quarter-comma meantone, 0 gives Pythagorean tuning
pub fn comma_tempered_fifth(fraction: f64) -> f64 {
    JUST_FIFTH - fraction * SYNTONIC_COMMA
}

/// Whether the fifth generates a diatonic scale with the usual step ordering
pub fn is_diatonic_fifth(fifth_size: f64) -> bool {
    (SMALLEST_DIATONIC_FIFTH..=LARGEST_DIATONIC_FIFTH).contains(&fifth_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_ratios() {
        assert!((JUST_FIFTH - 1200.0 * 1.5f64.log2()).abs() < 1e-9);
        assert!((SYNTONIC_COMMA - 1200.0 * (81.0f64 / 80.0).log2()).abs() < 1e-9);
        assert!((SMALLEST_DIATONIC_FIFTH - 685.714).abs() < 0.001);
        assert_eq!(LARGEST_DIATONIC_FIFTH, 720.0);
    }

    #[test]
    fn test_quarter_comma_meantone() {
        let fifth = comma_tempered_fifth(0.25);
        assert!((fifth - 696.578).abs() < 0.001);
        assert!((fifth_deviation(fifth) - (-3.422)).abs() < 0.001);
    }

    #[test]
    fn test_pythagorean() {
        assert_eq!(comma_tempered_fifth(0.0), JUST_FIFTH);
        assert!(fifth_deviation(JUST_FIFTH) > 0.0);
    }

    #[test]
    fn test_diatonic_range() {
        assert!(is_diatonic_fifth(DEFAULT_FIFTH));
        assert!(is_diatonic_fifth(SMALLEST_DIATONIC_FIFTH));
        assert!(is_diatonic_fifth(LARGEST_DIATONIC_FIFTH));
        assert!(!is_diatonic_fifth(680.0));
        assert!(!is_diatonic_fifth(721.0));
    }
}
