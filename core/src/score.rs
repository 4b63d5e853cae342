/// Flat award for any hit.
const HIT_BASE: u32 = 10;
/// Per-tile weight of the canonical minimal trail.
const LENGTH_WEIGHT: u32 = 3;
/// Efficiency bonus at zero overhead, decaying per extra tile.
const EFFICIENCY_CAP: u32 = 16;
const OVERHEAD_PENALTY: u32 = 4;
/// Per-combo-step bonus.
const COMBO_WEIGHT: u32 = 3;

/// Points earned for one exact-sum hit.
///
/// `combo` is the value after being bumped for this hit. Relative to the
/// minimal trail, shorter paths never score less than longer ones.
pub fn hit_points(minimal_len: u32, actual_len: u32, combo: u32) -> u32 {
    let base = HIT_BASE + minimal_len * LENGTH_WEIGHT;
    let overhead = actual_len.saturating_sub(minimal_len);
    let efficiency = EFFICIENCY_CAP.saturating_sub(overhead * OVERHEAD_PENALTY);
    base + efficiency + combo * COMBO_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_path_earns_full_efficiency_bonus() {
        // base 10 + 3*3, efficiency 16, combo 3
        assert_eq!(hit_points(3, 3, 1), 38);
    }

    #[test]
    fn overhead_erodes_the_efficiency_bonus() {
        assert_eq!(hit_points(3, 4, 1), 34);
        assert_eq!(hit_points(3, 5, 1), 30);
        // bonus floors at zero instead of going negative
        assert_eq!(hit_points(3, 7, 1), 22);
        assert_eq!(hit_points(3, 30, 1), 22);
    }

    #[test]
    fn combo_chains_add_points() {
        assert_eq!(hit_points(3, 3, 2) - hit_points(3, 3, 1), 3);
        assert_eq!(hit_points(4, 4, 5), 10 + 12 + 16 + 15);
    }

    #[test]
    fn shorter_paths_never_score_less() {
        for minimal in 0..=7 {
            for combo in 0..=5 {
                for shorter in minimal..=7 {
                    for longer in shorter..=7 {
                        assert!(
                            hit_points(minimal, shorter, combo)
                                >= hit_points(minimal, longer, combo)
                        );
                    }
                }
            }
        }
    }
}
