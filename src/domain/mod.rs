mod algorithm;
mod cell;
mod error;
mod generation;
mod grid;
mod patterns;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, stamp};
pub use generation::{step, step_parallel};
