use std::fmt;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A fixed-size board of live and dead cells.
///
/// Cells are stored row-major, so row `r` occupies `cells[r * width..(r + 1) * width]`. The
/// dimensions never change after construction; stepping produces a fresh `Grid`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// A grid where every cell is dead
    pub fn dead(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Create a `width` by `height` grid where each cell is alive with probability one half,
    /// using the thread local generator.
    pub fn random(width: usize, height: usize) -> Self {
        Self::random_with(&mut rand::rng(), width, height)
    }

    /// Like [`Grid::random`], but draws the bits from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Self {
        let cells = (0..width * height).map(|_| rng.random::<bool>()).collect();

        Self {
            cells,
            width,
            height,
        }
    }

    /// Build a grid from explicit rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);

        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }

            cells.extend(cols);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub(crate) fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at (`row`, `col`).
    ///
    /// Panics if the coordinate is off the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        self.cells[row * self.width + col]
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    #[cfg(test)]
    pub(crate) fn toggle(&mut self, row: usize, col: usize) {
        let i = row * self.width + col;
        self.cells[i] = !self.cells[i];
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// Build a grid from lines of `#` (alive) and `.` (dead).
#[cfg(test)]
pub(crate) fn pattern(lines: &[&str]) -> Grid {
    let rows = lines
        .iter()
        .map(|line| line.bytes().map(|b| b == b'#').collect())
        .collect();

    Grid::from_rows(rows).unwrap()
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();

        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_grids() {
        let g = Grid::random(0, 4);
        assert_eq!((g.width(), g.height()), (0, 4));
        assert_eq!(g.rows().count(), 4);
        assert!(g.rows().all(|r| r.is_empty()));

        let g = Grid::random(4, 0);
        assert_eq!((g.width(), g.height()), (4, 0));
        assert_eq!(g.rows().count(), 0);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Grid::random_with(&mut StdRng::seed_from_u64(7), 16, 9);
        let b = Grid::random_with(&mut StdRng::seed_from_u64(7), 16, 9);

        assert_eq!(a, b);
    }

    #[test]
    fn random_fill_is_roughly_even() {
        let g = Grid::random_with(&mut StdRng::seed_from_u64(42), 100, 100);
        let alive = g.population();

        assert!((4_000..6_000).contains(&alive), "{alive} live cells");
    }

    #[test]
    fn display_dumps_rows() {
        let g = pattern(&["#.", ".#", "##"]);

        assert_eq!(g.to_string(), "#.\n.#\n##\n");
    }

    proptest! {
        #[test]
        fn random_has_requested_shape(w in 0usize..40, h in 0usize..40, seed in any::<u64>()) {
            let g = Grid::random_with(&mut StdRng::seed_from_u64(seed), w, h);

            prop_assert_eq!(g.width(), w);
            prop_assert_eq!(g.height(), h);
            prop_assert_eq!(g.rows().count(), h);
            prop_assert!(g.rows().all(|r| r.len() == w));
        }
    }
}
