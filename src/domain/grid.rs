use std::fmt;

use rand::Rng;

use super::{Cell, GridError};

/// Grid manages the 2D cellular automaton grid.
///
/// The grid is a torus: every coordinate is wrapped modulo the dimensions,
/// so reads and writes never fail, whatever integer is passed in.
/// Dimensions are fixed at construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Map any integer coordinate onto its cell index.
    ///
    /// Takes `i64` so that a neighbor offset applied to an extreme `i32`
    /// cannot overflow before the modulo.
    fn wrapped_index(&self, x: i64, y: i64) -> usize {
        let wx = x.rem_euclid(self.width as i64) as usize;
        let wy = y.rem_euclid(self.height as i64) as usize;
        wy * self.width + wx
    }

    /// Get cell at the wrapped position
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[self.wrapped_index(x.into(), y.into())]
    }

    /// Alive/dead state at `(x mod width, y mod height)`
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Write alive/dead state at the wrapped position
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        self.set_wide(x.into(), y.into(), alive);
    }

    pub(crate) fn set_wide(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx] = Cell::from(alive);
    }

    /// Flip the cell at the wrapped position, returning its new state
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        let idx = self.wrapped_index(x.into(), y.into());
        self.cells[idx] = self.cells[idx].toggle();
        self.cells[idx].is_alive()
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    ///
    /// Each axis wraps independently, so column 0 sees column `width - 1`
    /// on its left and row `height - 1` sees row 0 below it.
    ///
    /// Offsets are wrapped before the self check, so on a grid one cell wide
    /// or tall the offsets that land back on `(x, y)` are skipped too. A
    /// neighbor reached through several offsets counts once per offset.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        let (x, y) = (i64::from(x), i64::from(y));
        let center = self.wrapped_index(x, y);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .map(|(dx, dy)| self.wrapped_index(x + dx, y + dy))
            .filter(|&idx| idx != center && self.cells[idx].is_alive())
            .count() as u8
    }

    /// State of the cell at `(x, y)` one generation later, read from `self` only
    pub(crate) fn next_cell(&self, x: usize, y: usize) -> Cell {
        let current = self.cells[y * self.width + x];
        current.evolve(self.count_live_neighbors(x as i32, y as i32))
    }

    /// Build a grid of the same size from row-major cells
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx % self.width, idx / self.width, cell.is_alive()))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(64, 48).unwrap();
        assert_eq!(grid.dimensions(), (64, 48));
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::InvalidDimension { width: 0, height: 10 })
        );
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let too_wide = i32::MAX as usize + 1;
        assert!(matches!(
            Grid::new(too_wide, 1),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_get_set_wraps() {
        let mut grid = Grid::new(10, 8).unwrap();

        grid.set(-1, -1, true);
        assert!(grid.get(9, 7));
        assert!(grid.get(19, 15));
        assert!(grid.get(-11, -9));

        grid.set(23, 8, true);
        assert!(grid.get(3, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut grid = Grid::new(7, 5).unwrap();
        grid.set(i32::MAX, i32::MIN, true);
        assert!(grid.get(i32::MAX, i32::MIN));
        assert_eq!(grid.count_live_neighbors(i32::MAX, i32::MIN), 0);
        assert_eq!(grid.count_live_neighbors(i32::MAX - 1, i32::MIN), 1);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(grid.toggle(2, 2));
        assert!(grid.get(2, 2));
        assert!(!grid.toggle(2, 2));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_count_neighbors_excludes_self() {
        let mut grid = Grid::new(10, 10).unwrap();

        // Horizontal blinker at (4,5), (5,5), (6,5)
        grid.set(4, 5, true);
        grid.set(5, 5, true);
        grid.set(6, 5, true);

        assert_eq!(grid.count_live_neighbors(5, 5), 2);
        assert_eq!(grid.count_live_neighbors(5, 4), 3);
        assert_eq!(grid.count_live_neighbors(5, 6), 3);
        assert_eq!(grid.count_live_neighbors(4, 5), 1);
    }

    #[test]
    fn test_count_neighbors_full_ring() {
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_thin_grid_never_counts_self() {
        let mut column = Grid::new(1, 5).unwrap();
        column.set(0, 2, true);
        assert_eq!(column.count_live_neighbors(0, 2), 0);
        // (0,1) is reached through dx = -1, 0 and +1
        assert_eq!(column.count_live_neighbors(0, 1), 3);

        let mut row = Grid::new(5, 1).unwrap();
        row.set(2, 0, true);
        assert_eq!(row.count_live_neighbors(2, 0), 0);
        assert_eq!(row.count_live_neighbors(3, 0), 3);
    }

    #[test]
    fn test_wraparound_diagonal_neighbor() {
        let (w, h) = (12, 9);
        let mut grid = Grid::new(w, h).unwrap();
        grid.set(w as i32 - 1, h as i32 - 1, true);

        assert_eq!(grid.count_live_neighbors(0, 0), 1);

        grid.set(0, 0, true);
        assert_eq!(grid.count_live_neighbors(w as i32 - 1, h as i32 - 1), 1);
    }

    #[test]
    fn test_wraparound_each_axis() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(5, 3, true); // left of column 0
        grid.set(2, 0, true); // below row 5
        assert_eq!(grid.count_live_neighbors(0, 3), 1);
        assert_eq!(grid.count_live_neighbors(2, 5), 1);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(3, 4, true);
        grid.set(19, 0, true);
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (20, 20));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Grid::new(8, 8).unwrap();
        original.set(1, 1, true);

        let mut copy = original.clone();
        copy.set(2, 2, true);
        original.set(1, 1, false);

        assert!(copy.get(1, 1));
        assert!(!original.get(2, 2));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = Grid::new(32, 32).unwrap();
        let mut b = Grid::new(32, 32).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(a, b);
        assert!(a.population() > 0);

        a.randomize(&mut StdRng::seed_from_u64(7), 0.0);
        assert!(a.is_empty());
        a.randomize(&mut StdRng::seed_from_u64(7), 1.0);
        assert_eq!(a.population(), 32 * 32);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, true);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], (1, 0, false));
        assert_eq!(cells[5], (2, 1, true));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 0, true);
        grid.set(2, 1, true);
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }
}
