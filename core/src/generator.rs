use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Generation attempts before the max-sum fallback kicks in.
const MAX_ATTEMPTS: u32 = 10;
/// Floor applied to every requested minimum target sum.
const MIN_TARGET_SUM: u32 = 6;

/// The sum to chase this level, plus one canonical solution trail.
///
/// `minimal_len` is the length of the shortest known exact-sum trail and is
/// the efficiency baseline for scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetTrail {
    target_sum: u32,
    trail: Vec<TileId>,
    minimal_len: u32,
}

impl TargetTrail {
    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    pub fn trail_ids(&self) -> &[TileId] {
        &self.trail
    }

    pub fn minimal_trail_length(&self) -> u32 {
        self.minimal_len
    }

    /// Whether hints can follow a known solution.
    pub fn is_playable(&self) -> bool {
        self.trail.len() >= MIN_TRAIL_LEN
    }

    /// Target fixed by the caller; the canonical trail is the shortest exact
    /// match, or empty (hints disabled) when no trail sums to it.
    pub(crate) fn from_preset(board: &Board, target_sum: u32) -> Self {
        match shortest_exact(board, target_sum) {
            Some(best) => Self::from_candidate(board, target_sum, &best),
            None => {
                log::debug!("preset target {target_sum} has no exact trail, hints disabled");
                Self {
                    target_sum,
                    trail: Vec::new(),
                    minimal_len: 0,
                }
            }
        }
    }

    fn from_candidate(board: &Board, target_sum: u32, candidate: &TrailCandidate) -> Self {
        let trail = candidate
            .indices
            .iter()
            .filter_map(|&index| board.tile_at(index))
            .map(|tile| tile.id)
            .collect();
        Self {
            target_sum,
            trail,
            minimal_len: candidate.indices.len() as u32,
        }
    }
}

/// Picks a fresh target for the board, boosting tile values in place when the
/// requested minimum is out of reach.
pub(crate) fn generate_target(board: &mut Board, rng: &mut Lcg64, minimum_sum: u32) -> TargetTrail {
    let minimum = minimum_sum.max(MIN_TARGET_SUM);

    for attempt in 1..=MAX_ATTEMPTS {
        let candidates = enumerate_trails(board, SumRule::AtLeast(minimum));
        if !candidates.is_empty() {
            let pick = rng.next_in_range(0, candidates.len() as u64 - 1) as usize;
            let chosen = &candidates[pick];
            log::debug!(
                "picked target {} out of {} candidates on attempt {}",
                chosen.sum,
                candidates.len(),
                attempt
            );
            return canonicalize(board, chosen);
        }
        if attempt < MAX_ATTEMPTS {
            let boosted = board.boost_values();
            log::debug!("no trail reaches sum {minimum}, boosted {boosted} tiles (attempt {attempt})");
        }
    }

    // Out of attempts: settle for the richest trail the board offers at all.
    let unconstrained = enumerate_trails(board, SumRule::AtLeast(0));
    if let Some(best) = unconstrained.iter().max_by_key(|candidate| candidate.sum) {
        log::warn!(
            "target generation exhausted {MAX_ATTEMPTS} attempts, using max-sum trail ({})",
            best.sum
        );
        return canonicalize(board, best);
    }

    log::warn!("degenerate board, falling back to a fixed three-tile trail");
    fallback_trail(board)
}

/// Re-resolves `chosen`'s sum to the shortest exact trail; path length first,
/// sum second as the sort key.
fn canonicalize(board: &Board, chosen: &TrailCandidate) -> TargetTrail {
    match shortest_exact(board, chosen.sum) {
        Some(best) => TargetTrail::from_candidate(board, chosen.sum, &best),
        None => TargetTrail::from_candidate(board, chosen.sum, chosen),
    }
}

fn shortest_exact(board: &Board, target_sum: u32) -> Option<TrailCandidate> {
    enumerate_trails(board, SumRule::Exactly(target_sum))
        .into_iter()
        .min_by_key(|candidate| (candidate.indices.len(), candidate.sum))
}

fn fallback_trail(board: &Board) -> TargetTrail {
    let tiles = board.tiles();
    let picked = &tiles[..tiles.len().min(MIN_TRAIL_LEN)];
    TargetTrail {
        target_sum: picked.iter().map(|tile| u32::from(tile.value)).sum(),
        trail: picked.iter().map(|tile| tile.id).collect(),
        minimal_len: picked.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_target_is_playable_and_meets_minimum() {
        let mut rng = Lcg64::new(21);
        let mut board = Board::random((5, 5), &mut rng);
        let target = generate_target(&mut board, &mut rng, 12);

        assert!(target.is_playable());
        assert!(target.target_sum() >= 12);
        assert!((MIN_TRAIL_LEN..=MAX_TRAIL_LEN).contains(&target.trail_ids().len()));
        let sum: u32 = target
            .trail_ids()
            .iter()
            .map(|&id| u32::from(board.tile_by_id(id).unwrap().value))
            .sum();
        assert_eq!(sum, target.target_sum());
    }

    #[test]
    fn canonical_trail_has_minimal_length() {
        let mut rng = Lcg64::new(21);
        let mut board = Board::random((5, 5), &mut rng);
        let target = generate_target(&mut board, &mut rng, 10);

        let shortest = shortest_exact(&board, target.target_sum()).unwrap();
        assert_eq!(target.minimal_trail_length() as usize, shortest.indices.len());
        assert_eq!(target.trail_ids().len(), shortest.indices.len());
    }

    #[test]
    fn unreachable_minimum_boosts_values_until_a_trail_exists() {
        // all ones: best trail sums to 7, far below the requested 40
        let mut board = Board::from_values((3, 3), &[1; 9]).unwrap();
        let mut rng = Lcg64::new(5);
        let target = generate_target(&mut board, &mut rng, 40);

        assert!(target.is_playable());
        assert!(target.target_sum() >= 40);
        assert!(board.tiles().iter().all(|tile| tile.value > 1));
    }

    #[test]
    fn impossible_minimum_falls_back_to_max_sum_trail() {
        // even boosted to all nines the cap is 7 * 9 = 63
        let mut board = Board::from_values((3, 3), &[9; 9]).unwrap();
        let mut rng = Lcg64::new(5);
        let target = generate_target(&mut board, &mut rng, 1000);

        assert!(target.is_playable());
        assert_eq!(target.target_sum(), 63);
        assert_eq!(target.minimal_trail_length(), 7);
    }

    #[test]
    fn preset_target_without_exact_trail_is_unplayable() {
        let board = Board::from_values((2, 2), &[1, 1, 1, 1]).unwrap();
        let target = TargetTrail::from_preset(&board, 100);

        assert!(!target.is_playable());
        assert_eq!(target.target_sum(), 100);
        assert_eq!(target.minimal_trail_length(), 0);
    }

    #[test]
    fn preset_target_resolves_shortest_exact_trail() {
        let board = Board::from_values((2, 2), &[1, 2, 3, 4]).unwrap();
        let target = TargetTrail::from_preset(&board, 7);

        assert!(target.is_playable());
        assert_eq!(target.minimal_trail_length(), 3);
        assert_eq!(target.trail_ids(), [TileId(0), TileId(1), TileId(3)]);
    }
}
