// Domain layer - the simulation engine
pub mod domain;

// Application layer - driver state and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, GridError, Pattern, stamp, step, step_parallel};
pub use application::{AppConfig, ConfigError, GameState};
pub use ui::{Button, Layout, UiAction};
