use super::Grid;

/// A named seed pattern that can be stamped onto the grid.
///
/// Offsets are relative to the stamp center, x growing right and y growing
/// down. Stamping only ever sets cells alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Blinker,
    Beacon,
    Toad,
    Glider,
    Lwss,
    Pulsar,
    GliderGun,
    DirtyPuffer,
    CleanPuffer,
    C5Spaceship,
}

impl Pattern {
    /// Catalog order, as laid out in the control panel
    pub const ALL: [Pattern; 10] = [
        Pattern::Blinker,
        Pattern::Beacon,
        Pattern::DirtyPuffer,
        Pattern::Toad,
        Pattern::Glider,
        Pattern::Lwss,
        Pattern::CleanPuffer,
        Pattern::C5Spaceship,
        Pattern::GliderGun,
        Pattern::Pulsar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "Blinker",
            Pattern::Beacon => "Beacon",
            Pattern::Toad => "Toad",
            Pattern::Glider => "Glider",
            Pattern::Lwss => "LWSS",
            Pattern::Pulsar => "Pulsar",
            Pattern::GliderGun => "Glider Gun",
            Pattern::DirtyPuffer => "Dirty Puffer",
            Pattern::CleanPuffer => "Clean Puffer",
            Pattern::C5Spaceship => "C5 Ship",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pattern::Blinker => "Oscillator (period 2)",
            Pattern::Beacon => "Oscillator (period 2)",
            Pattern::Toad => "Oscillator (period 2)",
            Pattern::Glider => "Moves diagonally (period 4)",
            Pattern::Lwss => "Lightweight spaceship (period 4)",
            Pattern::Pulsar => "Oscillator (period 3)",
            Pattern::GliderGun => "Produces gliders (period 30)",
            Pattern::DirtyPuffer => "Puffer leaving debris",
            Pattern::CleanPuffer => "Puffer",
            Pattern::C5Spaceship => "Spaceship moving up at c/5",
        }
    }

    /// Relative coordinates of the alive cells
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Blinker => offsets::BLINKER,
            Pattern::Beacon => offsets::BEACON,
            Pattern::Toad => offsets::TOAD,
            Pattern::Glider => offsets::GLIDER,
            Pattern::Lwss => offsets::LWSS,
            Pattern::Pulsar => offsets::PULSAR,
            Pattern::GliderGun => offsets::GLIDER_GUN,
            Pattern::DirtyPuffer => offsets::DIRTY_PUFFER,
            Pattern::CleanPuffer => offsets::CLEAN_PUFFER,
            Pattern::C5Spaceship => offsets::C5_SPACESHIP,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.offsets().len()
    }

    /// Set every cell of the pattern alive around `(cx, cy)`.
    ///
    /// Additive: cells already alive stay alive and nothing is cleared.
    /// Callers wanting a clean placement clear the grid first.
    pub fn stamp(&self, grid: &mut Grid, cx: i32, cy: i32) {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        for &(dx, dy) in self.offsets() {
            grid.set_wide(cx + i64::from(dx), cy + i64::from(dy), true);
        }
    }
}

/// Stamp `pattern` onto `grid` centered at `center`
pub fn stamp(grid: &mut Grid, pattern: Pattern, center: (i32, i32)) {
    pattern.stamp(grid, center.0, center.1);
}

mod offsets {
    pub const BLINKER: &[(i32, i32)] = &[(0, 0), (0, -1), (0, 1)];

    // Two diagonal blocks
    pub const BEACON: &[(i32, i32)] = &[
        (0, 0), (1, 0), (0, 1), (1, 1),
        (-1, -1), (-2, -1), (-1, -2), (-2, -2),
    ];

    pub const TOAD: &[(i32, i32)] = &[
        (0, 0), (1, 0), (-1, 0),
        (0, -1), (1, -1), (2, -1),
    ];

    pub const GLIDER: &[(i32, i32)] = &[
        (-1, -1),
        (0, 0), (1, 0),
        (0, 1), (-1, 1),
    ];

    pub const LWSS: &[(i32, i32)] = &[
        (0, 0), (-1, 0), (-2, -1), (1, 0), (2, 0),
        (2, -1), (2, -2), (1, -3), (-2, -3),
    ];

    pub const DIRTY_PUFFER: &[(i32, i32)] = &[
        // top
        (0, -6), (-1, -6), (1, -6), (2, -6),
        (-2, -7), (2, -7), (2, -8), (1, -9),
        // middle
        (0, 0), (0, 1), (0, -1),
        (-1, 2), (-1, -1), (-2, -2),
        // bottom
        (0, 8), (-1, 8), (1, 8), (2, 8),
        (2, 7), (2, 6), (1, 5), (-2, 7),
    ];

    pub const CLEAN_PUFFER: &[(i32, i32)] = &[
        // bottom
        (0, 0), (0, 1), (1, 1),
        (-1, 2), (0, 2), (1, 2), (2, 2),
        (-1, 3), (0, 3), (2, 3), (3, 3),
        (1, 4), (2, 4),
        // top
        (-2, -1), (2, -1),
        (-6, -2), (-5, -2), (-3, -2), (3, -2),
        (-4, -3), (-3, -3), (3, -3),
        (-2, -4), (-1, -4), (0, -4), (1, -4), (2, -4), (3, -4),
    ];

    pub const C5_SPACESHIP: &[(i32, i32)] = &[
        // middle
        (-1, 0), (-1, -1), (-1, 1),
        (1, 0), (1, -1), (1, 1),
        // left wing
        (-2, -3), (-3, -3), (-4, -4), (-5, -3), (-5, -2),
        (-6, -2), (-7, -2), (-7, -1), (-7, -3),
        (-8, 0), (-8, 2), (-8, 3),
        (-9, 0), (-9, 2), (-9, -1), (-9, -2), (-9, -3),
        (-10, -3), (-11, -2), (-11, 1), (-11, 2),
        (-12, -2), (-12, 1), (-12, 2), (-13, -1), (-13, -2),
        // right wing
        (2, -3), (3, -3), (4, -4), (5, -3), (5, -2),
        (6, -2), (7, -2), (7, -1), (7, -3),
        (8, 0), (8, 2), (8, 3),
        (9, 0), (9, 2), (9, -1), (9, -2), (9, -3),
        (10, -3), (11, -2), (11, 1), (11, 2),
        (12, -2), (12, 1), (12, 2), (13, -1), (13, -2),
    ];

    pub const GLIDER_GUN: &[(i32, i32)] = &[
        // left
        (0, 0), (1, -2), (1, 2), (2, 0), (2, -1), (2, 1), (3, 0),
        (-1, 3), (-1, -3), (-2, 3), (-2, -3), (-3, -2), (-3, 2),
        (-4, 0), (-4, -1), (-4, 1),
        (-13, 0), (-13, -1), (-14, 0), (-14, -1),
        // right
        (6, -1), (6, -2), (6, -3), (7, -1), (7, -2), (7, -3),
        (8, -4), (8, 0),
        (10, -4), (10, -5), (10, 0), (10, 1),
        (20, -2), (20, -3), (21, -2), (21, -3),
    ];

    pub const PULSAR: &[(i32, i32)] = &[
        // left
        (-1, -2), (-1, -3), (-1, 2), (-1, 3),
        (-2, -1), (-2, -3), (-2, -5), (-2, 1), (-2, 3), (-2, 5),
        (-3, -1), (-3, -2), (-3, -5), (-3, -6), (-3, -7),
        (-3, 1), (-3, 2), (-3, 5), (-3, 6), (-3, 7),
        (-5, -2), (-5, -3), (-5, 2), (-5, 3),
        (-6, -3), (-6, 3), (-7, -3), (-7, 3),
        // right
        (1, -2), (1, -3), (1, 2), (1, 3),
        (2, -1), (2, -3), (2, -5), (2, 1), (2, 3), (2, 5),
        (3, -1), (3, -2), (3, -5), (3, -6), (3, -7),
        (3, 1), (3, 2), (3, 5), (3, 6), (3, 7),
        (5, -2), (5, -3), (5, 2), (5, 3),
        (6, -3), (6, 3), (7, -3), (7, 3),
    ];
}
