use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Indicates the round has ended and only a full reset is accepted.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One round of the Number Trail puzzle, from first tap to win or loss.
///
/// Single-threaded and synchronous; every call is an immediate state
/// transition. Callers in concurrent environments must serialize access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailEngine {
    config: EngineConfig,
    board: Board,
    rng: Lcg64,
    path: PathState,
    target: TargetTrail,
    score: u32,
    combo: u32,
    hits: u32,
    moves_remaining: u32,
    current_level: u32,
    state: RoundState,
    awaiting_advance: bool,
    hinted_tile: Option<TileId>,
}

impl TrailEngine {
    /// Fresh round with a PRNG-drawn board. Board values are drawn row-major
    /// before the first target, so identical configs replay identically.
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = Lcg64::new(config.seed);
        let mut board = Board::random(config.size, &mut rng);
        let target = generate_target(&mut board, &mut rng, 0);
        Self::assemble(config, board, rng, target)
    }

    /// Round over preset values, for deterministic setups. A preset target
    /// skips generation entirely.
    pub fn with_preset(
        config: EngineConfig,
        values: &[TileValue],
        target_sum: Option<u32>,
    ) -> Result<Self> {
        let mut rng = Lcg64::new(config.seed);
        let mut board = Board::from_values(config.size, values)?;
        let target = match target_sum {
            Some(sum) => TargetTrail::from_preset(&board, sum),
            None => generate_target(&mut board, &mut rng, 0),
        };
        Ok(Self::assemble(config, board, rng, target))
    }

    fn assemble(config: EngineConfig, board: Board, rng: Lcg64, target: TargetTrail) -> Self {
        Self {
            config,
            board,
            rng,
            path: PathState::default(),
            target,
            score: 0,
            combo: 0,
            hits: 0,
            moves_remaining: config.max_moves,
            current_level: 1,
            state: RoundState::default(),
            awaiting_advance: false,
            hinted_tile: None,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn target_sum(&self) -> u32 {
        self.target.target_sum()
    }

    pub fn current_sum(&self) -> u32 {
        self.path.sum()
    }

    /// Selected tile ids in tap order.
    pub fn selected_ids(&self) -> &[TileId] {
        self.path.ids()
    }

    pub fn is_selected(&self, id: TileId) -> bool {
        self.path.contains(id)
    }

    pub fn target_trail_ids(&self) -> &[TileId] {
        self.target.trail_ids()
    }

    pub fn minimal_trail_length(&self) -> u32 {
        self.target.minimal_trail_length()
    }

    pub fn has_playable_target_trail(&self) -> bool {
        self.target.is_playable()
    }

    pub fn hinted_tile(&self) -> Option<TileId> {
        self.hinted_tile
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    pub fn completion_ratio(&self) -> f32 {
        self.hits as f32 / self.config.required_hits as f32
    }

    /// Feeds one tap to the engine.
    ///
    /// Precedence: terminal round state, pending level advance, unknown id,
    /// tail backtrack, mid-path / non-adjacent rejection, then append and
    /// resolve the new sum against the target.
    pub fn tap_tile(&mut self, id: TileId) -> TapOutcome {
        match self.state {
            RoundState::Won => return TapOutcome::AlreadyWon,
            RoundState::Lost => return TapOutcome::AlreadyLost,
            RoundState::InProgress => {}
        }

        if self.awaiting_advance {
            return TapOutcome::AwaitingAdvance;
        }

        let Some(index) = self.board.index_of(id) else {
            return TapOutcome::Ignored;
        };

        if self.path.last() == Some(id) {
            self.hinted_tile = None;
            let sum = self.path.pop_recompute(&self.board);
            return TapOutcome::Backtracked { sum };
        }

        // only tail-popping is permitted, not arbitrary removal
        if self.path.contains(id) {
            return TapOutcome::InvalidMove;
        }

        if let Some(last_id) = self.path.last() {
            let adjacent = self
                .board
                .index_of(last_id)
                .is_some_and(|last_index| self.board.are_adjacent(last_index, index));
            if !adjacent {
                return TapOutcome::InvalidMove;
            }
        }

        let Some(tile) = self.board.tile_at(index) else {
            return TapOutcome::Ignored;
        };
        let was_empty = self.path.is_empty();
        self.path.push(tile);
        self.hinted_tile = None;

        let sum = self.path.sum();
        let target = self.target.target_sum();
        if sum < target {
            if was_empty {
                TapOutcome::Started { sum }
            } else {
                TapOutcome::Extended { sum }
            }
        } else if sum == target {
            self.resolve_hit()
        } else {
            self.resolve_bust()
        }
    }

    fn resolve_hit(&mut self) -> TapOutcome {
        self.hits += 1;
        self.combo += 1;
        let points = hit_points(
            self.target.minimal_trail_length(),
            self.path.len() as u32,
            self.combo,
        );
        self.score += points;
        log::debug!(
            "hit target {} with {} tiles for {} points",
            self.target.target_sum(),
            self.path.len(),
            points
        );

        if self.hits >= self.config.required_hits {
            // the winning path stays visible
            self.state = RoundState::Won;
            TapOutcome::RoundWon { points }
        } else {
            self.awaiting_advance = true;
            TapOutcome::LevelCleared {
                points,
                next_level: self.current_level + 1,
            }
        }
    }

    fn resolve_bust(&mut self) -> TapOutcome {
        let missed_target = self.target.target_sum();
        self.combo = 0;
        self.path.clear();
        self.hinted_tile = None;
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        log::debug!(
            "busted target {}, {} moves remaining",
            missed_target,
            self.moves_remaining
        );

        if self.moves_remaining == 0 && self.hits < self.config.required_hits {
            self.state = RoundState::Lost;
            TapOutcome::RoundLost
        } else {
            TapOutcome::Bust { missed_target }
        }
    }

    /// Consumes the cleared path and moves to the next level: the consumed
    /// tiles are redrawn in tap order, the level counter increments, and the
    /// new target is generated with a strictly larger minimum sum. Returns
    /// false when no level clear is pending.
    pub fn advance_to_next_level(&mut self) -> bool {
        if !matches!(self.state, RoundState::InProgress) || !self.awaiting_advance {
            return false;
        }

        let consumed: Vec<TileId> = self.path.ids().to_vec();
        for id in consumed {
            let value = self
                .rng
                .next_in_range(MIN_TILE_VALUE.into(), MAX_TILE_VALUE.into())
                as TileValue;
            self.board.set_value(id, value);
        }

        self.path.clear();
        self.hinted_tile = None;
        self.awaiting_advance = false;
        self.current_level += 1;

        let minimum = self.target.target_sum() + 1;
        self.target = generate_target(&mut self.board, &mut self.rng, minimum);
        log::debug!(
            "advanced to level {}, new target {}",
            self.current_level,
            self.target.target_sum()
        );
        true
    }

    /// Drops the current selection. No-op while a level clear is pending or
    /// after the round has ended.
    pub fn clear_path(&mut self) {
        if self.awaiting_advance || self.state.is_final() {
            return;
        }
        self.path.clear();
        self.hinted_tile = None;
    }

    /// Points at the next tile of the canonical solution: its first tile when
    /// the selection is empty or has diverged from the canonical prefix, the
    /// next unmatched tile otherwise.
    pub fn reveal_hint(&mut self) -> Option<TileId> {
        if self.state.is_final() || self.awaiting_advance || !self.target.is_playable() {
            return None;
        }

        let trail = self.target.trail_ids();
        let selected = self.path.ids();
        let hint = if selected.len() < trail.len() && trail[..selected.len()] == *selected {
            trail[selected.len()]
        } else {
            trail[0]
        };
        self.hinted_tile = Some(hint);
        Some(hint)
    }

    /// Discards everything and starts a fresh round from `seed`.
    pub fn reset(&mut self, seed: u64) {
        let config = EngineConfig {
            seed: seed.max(1),
            ..self.config
        };
        *self = Self::new(config);
    }
}
