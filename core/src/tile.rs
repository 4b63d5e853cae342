use serde::{Deserialize, Serialize};

/// Tile face value, always in `MIN_TILE_VALUE..=MAX_TILE_VALUE`.
pub type TileValue = u8;

pub const MIN_TILE_VALUE: TileValue = 1;
pub const MAX_TILE_VALUE: TileValue = 9;

/// Stable tile identity, assigned once when the board is built and kept for
/// the whole round even as the value underneath is rewritten.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

/// Identity-bearing numbered tile. Owned exclusively by the board; everything
/// else refers to tiles by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: TileValue,
}
