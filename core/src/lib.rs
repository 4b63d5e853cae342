#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use path::*;
pub use rng::*;
pub use score::*;
pub use search::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod path;
mod rng;
mod score;
mod search;
mod snapshot;
mod tile;
mod types;

/// Round parameters. `new` silently clamps out-of-range values instead of
/// rejecting them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub size: Coord2,
    pub max_moves: u32,
    pub required_hits: u32,
    pub seed: u64,
}

impl EngineConfig {
    pub const fn new_unchecked(
        size: Coord2,
        max_moves: u32,
        required_hits: u32,
        seed: u64,
    ) -> Self {
        Self {
            size,
            max_moves,
            required_hits,
            seed,
        }
    }

    pub fn new((width, height): Coord2, max_moves: u32, required_hits: u32, seed: u64) -> Self {
        let width = width.clamp(2, Coord::MAX);
        let height = height.clamp(2, Coord::MAX);
        Self::new_unchecked(
            (width, height),
            max_moves.max(1),
            required_hits.max(1),
            seed.max(1),
        )
    }

    pub const fn total_tiles(&self) -> TileCount {
        mult(self.size.0, self.size.1)
    }
}

/// Result of feeding one tap to the engine. User-driven misuse is reported
/// here, never through errors or panics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Round already won; taps are ignored.
    AlreadyWon,
    /// Round already lost; taps are ignored.
    AlreadyLost,
    /// A cleared level is waiting for `advance_to_next_level`.
    AwaitingAdvance,
    /// The id resolves to no tile on the board.
    Ignored,
    /// Mid-path removal or non-adjacent extension.
    InvalidMove,
    /// First tile of a fresh path.
    Started { sum: u32 },
    /// Path extended, target not reached yet.
    Extended { sum: u32 },
    /// Tail tile popped.
    Backtracked { sum: u32 },
    /// Exact hit; the level is cleared and an advance is pending.
    LevelCleared { points: u32, next_level: u32 },
    /// Exact hit on the final required level.
    RoundWon { points: u32 },
    /// Sum overshot the target; the path resets and a move is consumed.
    Bust { missed_target: u32 },
    /// The bust consumed the last move.
    RoundLost,
}

impl TapOutcome {
    /// Whether this outcome could have changed engine state.
    pub const fn has_update(self) -> bool {
        !matches!(
            self,
            Self::AlreadyWon
                | Self::AlreadyLost
                | Self::AwaitingAdvance
                | Self::Ignored
                | Self::InvalidMove
        )
    }

    pub const fn is_hit(self) -> bool {
        matches!(self, Self::LevelCleared { .. } | Self::RoundWon { .. })
    }
}
