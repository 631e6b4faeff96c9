//! Error types for grid access, configuration and simulation drivers.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::automaton::Grid) construction and strict access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },

    /// Strict access outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {column}) is outside a {width}x{height} grid")]
    OutOfBounds {
        row: i32,
        column: i32,
        width: i32,
        height: i32,
    },

    /// A row passed to `Grid::from_rows` had a different length than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while loading or validating a [`SketchConfig`](crate::config::SketchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("seed density {0} must be within 0.0..=1.0")]
    InvalidDensity(f64),

    /// Canvas maps to more columns or rows than a grid can address.
    #[error("canvas maps to {columns}x{rows} cells, beyond the grid limit")]
    CanvasTooLarge { columns: u32, rows: u32 },
}

/// Errors raised by the owned simulation drivers in [`crate::state`].
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias defaulting to [`GridError`].
pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidDimensions {
            width: 0,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions 0x3: both must be positive"
        );

        let err = GridError::OutOfBounds {
            row: -1,
            column: 2,
            width: 3,
            height: 2,
        };
        assert_eq!(err.to_string(), "cell (-1, 2) is outside a 3x2 grid");
    }

    #[test]
    fn test_simulation_error_from_grid_error() {
        let err: SimulationError = GridError::InvalidDimensions {
            width: 1,
            height: 0,
        }
        .into();
        assert!(matches!(err, SimulationError::Grid(_)));
        assert!(err.to_string().contains("1x0"));
    }
}
