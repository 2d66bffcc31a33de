/// Single coordinate axis used for grid size and positions.
pub type Coord = u8;

/// Count type used for cell totals and move counters.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`. Row `0` is the top edge, col `0` the left edge.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chebyshev distance between two coordinates, adjacency means exactly `1`.
pub const fn chebyshev_distance(a: Coord2, b: Coord2) -> Coord {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    if dr > dc { dr } else { dc }
}

/// Walks the 3x3 window centered on a cell in row-major order, skipping the center and any
/// position outside `0..size` on either axis.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    slot: u8,
}

impl NeighborIter {
    const CENTER_SLOT: u8 = 4;
    const WINDOW_SLOTS: u8 = 9;

    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            slot: 0,
        }
    }

    fn offset(&self, base: Coord, step: u8) -> Option<Coord> {
        // step 0, 1, 2 maps to -1, 0, +1
        let pos = base.checked_add(step)?.checked_sub(1)?;
        (pos < self.size).then_some(pos)
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < Self::WINDOW_SLOTS {
            let slot = self.slot;
            self.slot += 1;
            if slot == Self::CENTER_SLOT {
                continue;
            }

            let row = self.offset(self.center.0, slot / 3);
            let col = self.offset(self.center.1, slot % 3);
            if let (Some(row), Some(col)) = (row, col) {
                return Some((row, col));
            }
        }
        None
    }
}
