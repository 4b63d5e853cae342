/// Single coordinate axis used for board width and height.
pub type Coord = u8;

/// Count type used for linear tile indices and total-tile counts.
pub type TileCount = u16;

/// Board dimensions `(width, height)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}

/// Orthogonal displacements in `(row, col)` form; no diagonals, no wraparound.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to a `(row, col)` position, returning the linear index only
/// when it remains in bounds.
fn apply_delta(row: isize, col: isize, delta: (isize, isize), size: Coord2) -> Option<TileCount> {
    let (width, height) = size;
    let next_row = row + delta.0;
    let next_col = col + delta.1;

    if next_row < 0 || next_row >= height as isize {
        return None;
    }
    if next_col < 0 || next_col >= width as isize {
        return None;
    }

    Some(next_row as TileCount * width as TileCount + next_col as TileCount)
}

/// Iterates the up-to-four in-bounds orthogonal neighbors of a linear index.
///
/// An out-of-bounds center yields nothing; the center itself is never yielded.
#[derive(Debug)]
pub struct NeighborIter {
    row: isize,
    col: isize,
    size: Coord2,
    step: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: TileCount, size: Coord2) -> Self {
        let width = TileCount::from(size.0);
        if width == 0 || center >= mult(size.0, size.1) {
            return Self {
                row: 0,
                col: 0,
                size,
                step: DISPLACEMENTS.len() as u8,
            };
        }
        Self {
            row: (center / width) as isize,
            col: (center % width) as isize,
            size,
            step: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = TileCount;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.step) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.row,
                self.col,
                DISPLACEMENTS[self.step as usize],
                self.size,
            );
            self.step += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
