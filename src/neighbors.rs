use crate::grid::Grid;

/// Relative (row, col) positions of the eight cells surrounding a cell
///
/// ```notrust
///   (-1,-1) (-1, 0) (-1, 1)
///   ( 0,-1)    x    ( 0, 1)
///   ( 1,-1) ( 1, 0) ( 1, 1)
/// ```
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Coordinates of every neighbor of (`row`, `col`) that lies on the grid. There is no wrapping,
/// so corners have 3 neighbors and edges 5.
pub fn neighbor_positions(
    grid: &Grid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (h, w) = (grid.height(), grid.width());

    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < h)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < w)?;

        Some((r, c))
    })
}

/// Number of live neighbors of (`row`, `col`), which must be on the grid.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    debug_assert!(row < grid.height() && col < grid.width());

    neighbor_positions(grid, row, col)
        .filter(|&(r, c)| grid.get(r, c))
        .count() as u8
}
