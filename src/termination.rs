use crate::grid::Grid;

/// Whether `current` is identical to `previous`, i.e. the simulation hit a fixed point.
///
/// Only period 1 is detected. Oscillators such as the blinker never compare equal to their
/// immediate predecessor and keep running.
pub fn is_stable(current: &Grid, previous: &Grid) -> bool {
    debug_assert_eq!(
        (current.width(), current.height()),
        (previous.width(), previous.height()),
        "generations must share dimensions"
    );

    current
        .rows()
        .zip(previous.rows())
        .all(|(a, b)| a == b)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::grid::pattern;
    use crate::step::next_generation;

    #[test]
    fn still_life_is_stable() {
        let block = pattern(&["....", ".##.", ".##.", "...."]);

        assert!(is_stable(&next_generation(&block), &block));
    }

    #[test]
    fn blinker_is_never_stable() {
        let mut g = pattern(&[".....", ".....", ".###.", ".....", "....."]);

        for _ in 0..10 {
            let next = next_generation(&g);
            assert!(!is_stable(&next, &g));
            g = next;
        }
    }

    #[test]
    fn empty_grids_are_stable() {
        assert!(is_stable(&Grid::dead(0, 0), &Grid::dead(0, 0)));
        assert!(is_stable(&Grid::dead(5, 0), &Grid::dead(5, 0)));
    }

    proptest! {
        #[test]
        fn reflexive(w in 0usize..20, h in 0usize..20, seed in any::<u64>()) {
            let g = Grid::random_with(&mut StdRng::seed_from_u64(seed), w, h);

            prop_assert!(is_stable(&g, &g.clone()));
        }

        #[test]
        fn sensitive_to_one_cell(w in 1usize..20, h in 1usize..20, r in 0usize..20, c in 0usize..20, seed in any::<u64>()) {
            let g = Grid::random_with(&mut StdRng::seed_from_u64(seed), w, h);
            let mut changed = g.clone();
            changed.toggle(r % h, c % w);

            prop_assert!(!is_stable(&changed, &g));
            prop_assert!(!is_stable(&g, &changed));
        }
    }
}
