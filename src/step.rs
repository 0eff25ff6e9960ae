use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;

/// Rules of Conway's Game of Life.
pub const B3S23: Rule = Rule::new(0b1000, 0b1100);

/// # Representation
/// Birth and survival conditions as bitsets over neighbor counts: bit `n` is on when a count of
/// `n` qualifies. Bits past the 8th are ignored.
/// ```notrust
/// b3s23: births    0_0000_1000
///        survivals 0_0000_1100
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    births: u16,
    survivals: u16,
}

impl Rule {
    pub const fn new(births: u16, survivals: u16) -> Self {
        Self {
            births: births & 0x1FF,
            survivals: survivals & 0x1FF,
        }
    }

    /// State of a cell in the next generation, given its current state and live neighbor count
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let set = if alive { self.survivals } else { self.births };

        neighbors <= 8 && set & (1 << neighbors) != 0
    }
}

/// Compute the next generation of `grid`.
///
/// Every count is taken from `grid` itself, never from partially updated state. The result is a
/// new grid of the same dimensions.
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |row, col| {
        let neighbors = count_live_neighbors(grid, row, col);

        B3S23.next_state(grid.get(row, col), neighbors)
    })
}
