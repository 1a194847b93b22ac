use thiserror::Error;

use crate::domain::{Algorithm, GridError};

/// Errors from an inconsistent window/grid configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("canvas {axis} of {length}px is not a multiple of the {cell_size}px cell size")]
    CanvasNotMultiple {
        axis: &'static str,
        length: u32,
        cell_size: u32,
    },
    #[error("frame rate must be at least one generation per second")]
    ZeroFps,
    #[error("window of {width}x{height}px is too large for the display backend")]
    WindowTooLarge { width: u64, height: u32 },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Startup configuration of the simulation window.
///
/// The engine only ever sees the grid dimensions derived from it; pixel
/// geometry stays with the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    pub panel_width: u32,
    /// Generations per second while running
    pub fps: u32,
    pub algorithm: Algorithm,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1280,
            canvas_height: 960,
            cell_size: 20,
            panel_width: 240,
            fps: 10,
            algorithm: Algorithm::Serial,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        for (axis, length) in [("width", self.canvas_width), ("height", self.canvas_height)] {
            if length % self.cell_size != 0 {
                return Err(ConfigError::CanvasNotMultiple {
                    axis,
                    length,
                    cell_size: self.cell_size,
                });
            }
        }
        self.window_size().map(|_| ())
    }

    /// Grid size in cells: canvas pixels divided by the cell size
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        self.validate()?;
        Ok((
            (self.canvas_width / self.cell_size) as usize,
            (self.canvas_height / self.cell_size) as usize,
        ))
    }

    /// Full window size including the control panel, in the `i32` pixels
    /// the window backend takes
    pub fn window_size(&self) -> Result<(i32, i32), ConfigError> {
        let too_large = || ConfigError::WindowTooLarge {
            width: u64::from(self.canvas_width) + u64::from(self.panel_width),
            height: self.canvas_height,
        };
        let width = self
            .canvas_width
            .checked_add(self.panel_width)
            .and_then(|w| i32::try_from(w).ok())
            .ok_or_else(too_large)?;
        let height = i32::try_from(self.canvas_height).map_err(|_| too_large())?;
        Ok((width, height))
    }
}
