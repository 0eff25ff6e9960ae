use std::time::Duration;

use tracing::debug;
use tracing::info;

use crate::grid::Grid;
use crate::render::render_table;
use crate::step::next_generation;
use crate::surface::Surface;
use crate::surface::SurfaceError;
use crate::termination::is_stable;
use crate::timer::Timer;

/// Result of a single tick. Both variants carry the generation that was just rendered.
#[derive(Debug)]
pub enum Tick {
    /// The new generation differs from the previous one; another tick is due
    Continue(Grid),

    /// The new generation equals the previous one
    Stable(Grid),
}

/// How a finished run ended
#[derive(Debug)]
pub struct Outcome {
    /// Number of generations rendered, the stable one included
    pub generations: usize,

    /// The final, stable generation
    pub last: Grid,
}

/// Steps a grid forward and shows every new generation on a [`Surface`], pausing with a
/// [`Timer`] in between.
pub struct Driver<S, T> {
    surface: S,
    timer: T,
    delay: Duration,
    generation: usize,
}

impl<S, T> Driver<S, T>
where
    S: Surface,
    T: Timer,
{
    pub fn new(surface: S, timer: T, delay: Duration) -> Self {
        Self {
            surface,
            timer,
            delay,
            generation: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of generations rendered so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Step `current`, render the result and compare it with `current`.
    pub fn tick(&mut self, current: &Grid) -> Result<Tick, SurfaceError> {
        let next = next_generation(current);

        self.surface.replace_content(&render_table(&next))?;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = next.population(),
            "rendered generation"
        );

        if is_stable(current, &next) {
            Ok(Tick::Stable(next))
        } else {
            Ok(Tick::Continue(next))
        }
    }

    /// Tick until the grid stops changing, waiting `delay` between ticks.
    ///
    /// `initial` itself is never rendered, the first frame is its successor. Grids that settle
    /// into an oscillation of period 2 or more never return.
    pub fn run(&mut self, initial: Grid) -> Result<Outcome, SurfaceError> {
        let mut current = initial;

        loop {
            match self.tick(&current)? {
                Tick::Continue(next) => {
                    self.timer.wait(self.delay);
                    current = next;
                }
                Tick::Stable(last) => {
                    info!(
                        generations = self.generation,
                        population = last.population(),
                        "grid is stable"
                    );

                    return Ok(Outcome {
                        generations: self.generation,
                        last,
                    });
                }
            }
        }
    }
}
