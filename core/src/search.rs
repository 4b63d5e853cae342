use alloc::vec;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::*;

/// Shortest trail the search records.
pub const MIN_TRAIL_LEN: usize = 3;
/// Longest trail the search extends to.
pub const MAX_TRAIL_LEN: usize = 7;

/// Predicate a candidate trail's sum has to satisfy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SumRule {
    AtLeast(u32),
    Exactly(u32),
}

impl SumRule {
    pub const fn accepts(self, sum: u32) -> bool {
        match self {
            Self::AtLeast(min) => sum >= min,
            Self::Exactly(target) => sum == target,
        }
    }

    /// Whether a prefix with this running sum can still reach an accepting
    /// state. Values are strictly positive, so an exact-mode prefix at or over
    /// the target is a dead end.
    const fn can_extend(self, sum: u32) -> bool {
        match self {
            Self::AtLeast(_) => true,
            Self::Exactly(target) => sum < target,
        }
    }
}

/// One simple trail found by the exhaustive search, as linear indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailCandidate {
    pub indices: SmallVec<[TileCount; MAX_TRAIL_LEN]>,
    pub sum: u32,
}

/// Exhaustively enumerates simple trails whose sums satisfy `rule`.
///
/// Depth-first from every start tile, extending only to unvisited orthogonal
/// neighbors; every prefix of length `MIN_TRAIL_LEN..=MAX_TRAIL_LEN` with an
/// accepted sum is recorded. Read-only over the board.
pub fn enumerate_trails(board: &Board, rule: SumRule) -> Vec<TrailCandidate> {
    let mut found = Vec::new();
    let mut visited = vec![false; usize::from(board.total_tiles())];
    let mut prefix: SmallVec<[TileCount; MAX_TRAIL_LEN]> = SmallVec::new();

    for start in 0..board.total_tiles() {
        let Some(tile) = board.tile_at(start) else {
            continue;
        };
        visited[usize::from(start)] = true;
        prefix.push(start);
        extend_trail(
            board,
            rule,
            &mut prefix,
            &mut visited,
            u32::from(tile.value),
            &mut found,
        );
        prefix.pop();
        visited[usize::from(start)] = false;
    }
    found
}

fn extend_trail(
    board: &Board,
    rule: SumRule,
    prefix: &mut SmallVec<[TileCount; MAX_TRAIL_LEN]>,
    visited: &mut [bool],
    sum: u32,
    found: &mut Vec<TrailCandidate>,
) {
    if prefix.len() >= MIN_TRAIL_LEN && rule.accepts(sum) {
        found.push(TrailCandidate {
            indices: prefix.clone(),
            sum,
        });
    }

    if prefix.len() == MAX_TRAIL_LEN || !rule.can_extend(sum) {
        return;
    }

    let last = prefix[prefix.len() - 1];
    for next in board.neighbors_of(last) {
        if visited[usize::from(next)] {
            continue;
        }
        let Some(tile) = board.tile_at(next) else {
            continue;
        };
        visited[usize::from(next)] = true;
        prefix.push(next);
        extend_trail(board, rule, prefix, visited, sum + u32::from(tile.value), found);
        prefix.pop();
        visited[usize::from(next)] = false;
    }
}
