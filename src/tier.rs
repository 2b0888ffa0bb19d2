//! Point thresholds and tier classification

/// Legacy 8-tier ladder, minimum points per tier, highest tier first
pub const LEGACY_TIER_POINTS: [i64; 8] = [
    1300, // Tier 8
    1225, // Tier 7
    1000, // Tier 6
    800,  // Tier 5
    500,  // Tier 4
    200,  // Tier 3
    100,  // Tier 2
    0,    // Tier 1
];

/// Current 9-tier ladder, highest tier first
pub const ALTERNATE_TIER_POINTS: [i64; 9] = [
    4500, // Tier 9
    3600, // Tier 8
    2800, // Tier 7
    2100, // Tier 6
    1500, // Tier 5
    1000, // Tier 4
    600,  // Tier 3
    300,  // Tier 2
    100,  // Tier 1
];

/// Find the highest tier whose minimum `points` reaches.
///
/// `thresholds` must be in descending order. Returns `None` for an empty
/// ladder or when `points` is below every threshold.
pub fn find_tier(thresholds: &[i64], points: i64) -> Option<usize> {
    let mut tier = thresholds.len();
    for &limit in thresholds {
        if points >= limit {
            return Some(tier);
        }
        tier -= 1;
    }
    None
}

/// Threshold of `tier` on a descending ladder (`ladder[len - tier]`)
pub fn tier_points(thresholds: &[i64], tier: usize) -> Option<i64> {
    if tier == 0 || tier > thresholds.len() {
        return None;
    }
    thresholds.get(thresholds.len() - tier).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_boundaries() {
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 1300), Some(8));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 1299), Some(7));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 1225), Some(7));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 1000), Some(6));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 999), Some(5));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 150), Some(2));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 100), Some(2));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 99), Some(1));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 0), Some(1));
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, 50_000), Some(8));
    }

    #[test]
    fn test_below_floor_has_no_tier() {
        assert_eq!(find_tier(&LEGACY_TIER_POINTS, -1), None);
        assert_eq!(find_tier(&ALTERNATE_TIER_POINTS, 99), None);
        assert_eq!(find_tier(&[], 10), None);
    }

    #[test]
    fn test_tier_always_within_ladder() {
        for points in (0..5000).step_by(25) {
            let tier = find_tier(&LEGACY_TIER_POINTS, points).unwrap();
            assert!((1..=LEGACY_TIER_POINTS.len()).contains(&tier));
        }
    }

    #[test]
    fn test_tier_points() {
        assert_eq!(tier_points(&ALTERNATE_TIER_POINTS, 9), Some(4500));
        assert_eq!(tier_points(&ALTERNATE_TIER_POINTS, 2), Some(300));
        assert_eq!(tier_points(&ALTERNATE_TIER_POINTS, 1), Some(100));
        assert_eq!(tier_points(&ALTERNATE_TIER_POINTS, 0), None);
        assert_eq!(tier_points(&ALTERNATE_TIER_POINTS, 10), None);
    }
}
