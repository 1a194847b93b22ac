use thiserror::Error;

/// Errors raised by the simulation engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Either dimension is zero or too large to address with an `i32` coordinate.
    #[error("invalid grid dimensions {width}x{height}: both must be in 1..={max}", max = i32::MAX)]
    InvalidDimension { width: usize, height: usize },
}
