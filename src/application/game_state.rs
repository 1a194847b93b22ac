use std::time::Instant;

use tracing::{debug, info, trace};

use super::{AppConfig, ConfigError};
use crate::domain::{Algorithm, Grid, GridError, Pattern};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic: it owns the
/// current grid and hands it to the engine once per generation.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            algorithm: Algorithm::default(),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let (width, height) = config.grid_dimensions()?;
        let mut state = Self::new(width, height)?;
        state.algorithm = config.algorithm;
        state.updates_per_second = config.fps as f32;
        Ok(state)
    }

    /// Start button is live only while stopped
    pub fn can_start(&self) -> bool {
        !self.is_running
    }

    pub fn can_stop(&self) -> bool {
        self.is_running
    }

    pub fn start(mut self) -> Self {
        if self.can_start() {
            info!(generation = self.generation, population = self.grid.population(), "simulation started");
            self.is_running = true;
            self.update_timer = 0.0;
        }
        self
    }

    pub fn stop(mut self) -> Self {
        if self.can_stop() {
            info!(generation = self.generation, "simulation stopped");
            self.is_running = false;
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.stop() } else { self.start() }
    }

    /// Stop if running, then clear the grid and reset the generation counter
    pub fn clear(self) -> Self {
        let mut state = self.stop();
        info!(generation = state.generation, "grid cleared");
        state.grid.clear();
        state.generation = 0;
        state
    }

    /// Flip one cell; edits are only accepted while stopped
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if self.is_running {
            return;
        }
        let alive = self.grid.toggle(x, y);
        debug!(x, y, alive, "cell toggled");
    }

    /// Replace the grid contents with `pattern` stamped at the grid center
    pub fn place_pattern(mut self, pattern: Pattern) -> Self {
        if self.is_running {
            return self;
        }
        let (width, height) = self.grid.dimensions();
        let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

        self.grid.clear();
        pattern.stamp(&mut self.grid, cx, cy);
        self.generation = 0;
        info!(pattern = pattern.name(), cx, cy, "pattern placed");
        self
    }

    /// Advance exactly one generation
    pub fn advance(mut self) -> Self {
        let start = Instant::now();
        self.grid = self.algorithm.step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            step_ms = self.last_step_time_ms,
            "generation advanced"
        );
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.advance();
        }

        self
    }
}
