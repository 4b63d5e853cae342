use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Row-major grid of numbered tiles; the sole owner of tile values.
///
/// The linear index `i` maps to `row = i / width, col = i % width`; two
/// indices are adjacent iff their Manhattan distance is 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Builds a board from preset values, clamping each into the valid range.
    pub fn from_values(size: Coord2, values: &[TileValue]) -> Result<Self> {
        let (width, height) = size;
        if values.len() != usize::from(mult(width, height)) {
            return Err(GameError::InvalidBoardShape);
        }

        let tiles: Vec<Tile> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Tile {
                id: TileId(i as u16),
                value: value.clamp(MIN_TILE_VALUE, MAX_TILE_VALUE),
            })
            .collect();
        let tiles = Array2::from_shape_vec((usize::from(height), usize::from(width)), tiles)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { tiles })
    }

    /// Builds a board with every value drawn from the PRNG, row-major.
    pub fn random(size: Coord2, rng: &mut Lcg64) -> Self {
        let (width, height) = size;
        let total = usize::from(mult(width, height));
        let tiles: Vec<Tile> = (0..total)
            .map(|i| Tile {
                id: TileId(i as u16),
                value: rng.next_in_range(MIN_TILE_VALUE.into(), MAX_TILE_VALUE.into()) as TileValue,
            })
            .collect();
        let tiles = Array2::from_shape_vec((usize::from(height), usize::from(width)), tiles)
            .expect("tile count matches the board shape");
        Self { tiles }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (dim.1 as Coord, dim.0 as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_tiles(&self) -> TileCount {
        self.tiles.len() as TileCount
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        self.tiles.as_slice().expect("default layout is standard")
    }

    pub fn tile_at(&self, index: TileCount) -> Option<Tile> {
        self.tiles().get(usize::from(index)).copied()
    }

    /// Linear scan; ids are opaque to callers even though they happen to be
    /// dense today.
    pub fn index_of(&self, id: TileId) -> Option<TileCount> {
        self.tiles()
            .iter()
            .position(|tile| tile.id == id)
            .map(|i| i as TileCount)
    }

    pub fn tile_by_id(&self, id: TileId) -> Option<Tile> {
        self.index_of(id).and_then(|index| self.tile_at(index))
    }

    pub fn neighbors_of(&self, index: TileCount) -> NeighborIter {
        NeighborIter::new(index, self.size())
    }

    pub fn are_adjacent(&self, a: TileCount, b: TileCount) -> bool {
        self.neighbors_of(a).any(|index| index == b)
    }

    pub(crate) fn set_value(&mut self, id: TileId, value: TileValue) {
        if let Some(tile) = self.tiles.iter_mut().find(|tile| tile.id == id) {
            tile.value = value.clamp(MIN_TILE_VALUE, MAX_TILE_VALUE);
        }
    }

    /// Raises every value below the maximum by one; returns how many changed.
    pub(crate) fn boost_values(&mut self) -> TileCount {
        let mut boosted = 0;
        for tile in self.tiles.iter_mut() {
            if tile.value < MAX_TILE_VALUE {
                tile.value += 1;
                boosted += 1;
            }
        }
        boosted
    }
}
