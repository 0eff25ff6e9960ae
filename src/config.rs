use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid::Grid;

pub struct Config {
    /// Number of columns
    pub width: usize,

    /// Number of rows
    pub height: usize,

    /// Pause between two rendered generations
    pub delay: Duration,

    /// Id of the element on the page that receives the board
    pub element_id: String,

    /// Where the page is written
    pub page: PathBuf,

    /// Seed for the initial fill. `None` draws from the thread generator.
    pub seed: Option<u64>,
}

impl Config {
    pub const WIDTH: usize = 30;
    pub const HEIGHT: usize = 30;
    pub const DELAY: Duration = Duration::from_millis(200);
    pub const ELEMENT_ID: &'static str = "divBoard";
    pub const PAGE: &'static str = "board.html";

    /// The first generation, drawn according to `seed`
    pub fn initial_grid(&self) -> Grid {
        match self.seed {
            Some(seed) => {
                Grid::random_with(&mut StdRng::seed_from_u64(seed), self.width, self.height)
            }
            None => Grid::random(self.width, self.height),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            delay: Self::DELAY,
            element_id: Self::ELEMENT_ID.to_owned(),
            page: PathBuf::from(Self::PAGE),
            seed: None,
        }
    }
}
