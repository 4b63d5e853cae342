use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// In-progress tile selection with its incrementally tracked sum.
///
/// Ordering and non-repetition are enforced by the engine; the sum here must
/// always be recomputable from the selected ids against the board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathState {
    selected: SmallVec<[TileId; 8]>,
    sum: u32,
}

impl PathState {
    pub fn ids(&self) -> &[TileId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    pub fn last(&self) -> Option<TileId> {
        self.selected.last().copied()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.selected.contains(&id)
    }

    pub(crate) fn push(&mut self, tile: Tile) {
        self.selected.push(tile.id);
        self.sum += u32::from(tile.value);
    }

    /// Pops the tail and recomputes the sum from the remaining tiles, keeping
    /// the tracked value honest against the board.
    pub(crate) fn pop_recompute(&mut self, board: &Board) -> u32 {
        self.selected.pop();
        self.sum = self
            .selected
            .iter()
            .filter_map(|&id| board.tile_by_id(id))
            .map(|tile| u32::from(tile.value))
            .sum();
        self.sum
    }

    pub(crate) fn clear(&mut self) {
        self.selected.clear();
        self.sum = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_values((2, 2), &[1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn push_tracks_sum_incrementally() {
        let board = board();
        let mut path = PathState::default();
        path.push(board.tile_at(0).unwrap());
        path.push(board.tile_at(1).unwrap());
        assert_eq!(path.sum(), 3);
        assert_eq!(path.ids(), [TileId(0), TileId(1)]);
        assert_eq!(path.last(), Some(TileId(1)));
        assert!(path.contains(TileId(0)));
    }

    #[test]
    fn pop_recompute_matches_remaining_tiles() {
        let board = board();
        let mut path = PathState::default();
        path.push(board.tile_at(0).unwrap());
        path.push(board.tile_at(1).unwrap());
        path.push(board.tile_at(3).unwrap());

        assert_eq!(path.pop_recompute(&board), 3);
        assert_eq!(path.pop_recompute(&board), 1);
        assert_eq!(path.pop_recompute(&board), 0);
        assert!(path.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let board = board();
        let mut path = PathState::default();
        path.push(board.tile_at(2).unwrap());
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.sum(), 0);
    }
}
