//! Generation step: B3/S23 applied to every cell at once.
//!
//! Both strategies read only from the `previous` snapshot and write into a
//! freshly allocated grid, so no cell ever sees a neighbor's new state.

use rayon::prelude::*;

use super::{Cell, Grid};

/// Advance one generation, visiting cells in row-major order
pub fn step(previous: &Grid) -> Grid {
    let (width, height) = previous.dimensions();
    let cells = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| previous.next_cell(x, y))
        .collect();

    previous.with_cells(cells)
}

/// Advance one generation with output rows partitioned across the rayon pool.
/// Cell-for-cell identical to [`step`].
pub fn step_parallel(previous: &Grid) -> Grid {
    let width = previous.width();
    let mut cells = vec![Cell::Dead; width * previous.height()];

    cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = previous.next_cell(x, y);
            }
        });

    previous.with_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Reference evaluation visiting cells back to front, writing through `set`
    fn step_reverse(previous: &Grid) -> Grid {
        let (w, h) = previous.dimensions();
        let mut next = Grid::new(w, h).unwrap();
        for y in (0..h as i32).rev() {
            for x in (0..w as i32).rev() {
                let alive = previous.get(x, y);
                let n = previous.count_live_neighbors(x, y);
                next.set(x, y, matches!((alive, n), (true, 2 | 3) | (false, 3)));
            }
        }
        next
    }

    fn random_grid(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(seed), 0.35);
        grid
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::new(64, 48).unwrap();
        let next = step(&grid);
        assert!(next.is_empty());
        assert!(step_parallel(&grid).is_empty());
    }

    #[test]
    fn test_visitation_order_does_not_matter() {
        for seed in 0..8 {
            let grid = random_grid(23, 17, seed);
            assert_eq!(step(&grid), step_reverse(&grid), "seed {}\n{}", seed, grid);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        for seed in 0..8 {
            let mut serial = random_grid(50, 31, seed);
            let mut parallel = serial.clone();
            for _ in 0..10 {
                serial = step(&serial);
                parallel = step_parallel(&parallel);
                assert_eq!(serial, parallel, "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_step_does_not_touch_previous() {
        let grid = random_grid(16, 16, 3);
        let snapshot = grid.clone();
        let _ = step(&grid);
        let _ = step_parallel(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_blinker_flips() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(4, 5, true);
        grid.set(5, 5, true);
        grid.set(6, 5, true);

        let next = step(&grid);
        assert!(!next.get(4, 5));
        assert!(next.get(5, 4));
        assert!(next.get(5, 5));
        assert!(next.get(5, 6));
        assert!(!next.get(6, 5));
        assert_eq!(next.population(), 3);

        assert_eq!(step(&next), grid);
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(4, 4, true);
        grid.set(5, 4, true);
        grid.set(4, 5, true);
        grid.set(5, 5, true);

        let mut current = grid.clone();
        for _ in 0..20 {
            current = step(&current);
            assert_eq!(current, grid);
        }
    }

    #[test]
    fn test_block_across_the_seam() {
        // A block split over all four corners is still a block on a torus
        let mut grid = Grid::new(9, 7).unwrap();
        grid.set(0, 0, true);
        grid.set(8, 0, true);
        grid.set(0, 6, true);
        grid.set(8, 6, true);

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_lone_cell_and_pair_die() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(1, 1, true);
        grid.set(5, 5, true);
        grid.set(5, 6, true);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn test_overcrowded_center_dies() {
        // Plus sign: center has 4 neighbors
        let mut grid = Grid::new(8, 8).unwrap();
        for (x, y) in [(3, 3), (2, 3), (4, 3), (3, 2), (3, 4)] {
            grid.set(x, y, true);
        }
        let next = step(&grid);
        assert!(!next.get(3, 3));
        // Diagonal gaps see two arms plus the center
        assert!(next.get(2, 2));
        assert!(next.get(4, 4));
        // Arms see the center plus two neighboring arms
        assert!(next.get(2, 3));
        assert_eq!(next.population(), 8);
    }

    #[test]
    fn test_lone_cell_dies_on_thin_grids() {
        for (w, h) in [(1, 1), (1, 5), (5, 1), (1, 2), (2, 1)] {
            let mut grid = Grid::new(w, h).unwrap();
            grid.set(0, 0, true);
            assert!(step(&grid).is_empty(), "{}x{}", w, h);
            assert!(step_parallel(&grid).is_empty(), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_thin_grids_agree_across_strategies() {
        for (w, h) in [(1, 9), (9, 1), (2, 7), (7, 2)] {
            for seed in 0..4 {
                let grid = random_grid(w, h, seed);
                let serial = step(&grid);
                assert_eq!(serial, step_parallel(&grid), "{}x{} seed {}", w, h, seed);
                assert_eq!(serial, step_reverse(&grid), "{}x{} seed {}", w, h, seed);
            }
        }
    }
}
