//! C FFI layer.
//!
//! Exports C ABI functions for hosts that drive a simulation through an
//! opaque handle. Every handle comes from a `*_create` call and must be
//! released with the matching `*_destroy` call.
//!
//! The actual logic is in `automaton` and `state`. These functions are thin
//! wrappers that handle null checks and map errors onto status codes.

pub mod grid;
pub mod lifecycle;
pub mod sand;

use crate::error::GridError;

/// Call succeeded.
pub const SA_OK: i32 = 0;
/// Handle (or another pointer argument) was null.
pub const SA_NULL: i32 = 1;
/// Coordinates outside the grid.
pub const SA_OUT_OF_BOUNDS: i32 = 2;
/// Non-positive dimensions, or a grid that could not be built.
pub const SA_INVALID_DIMENSIONS: i32 = 3;
/// Unknown pattern name, or a name that is not valid UTF-8.
pub const SA_UNKNOWN_PATTERN: i32 = 4;

pub(crate) fn status_of(result: Result<(), GridError>) -> i32 {
    match result {
        Ok(()) => SA_OK,
        Err(GridError::OutOfBounds { .. }) => SA_OUT_OF_BOUNDS,
        Err(GridError::InvalidDimensions { .. } | GridError::RaggedRows { .. }) => {
            SA_INVALID_DIMENSIONS
        }
    }
}

pub use grid::{
    sa_life_generation, sa_life_get, sa_life_insert_pattern, sa_life_live_count, sa_life_set,
    sa_life_step,
};
pub use lifecycle::{
    sa_init_logging, sa_life_create, sa_life_destroy, sa_sand_create, sa_sand_destroy,
};
pub use sand::{sa_sand_drop_grain, sa_sand_grain_count, sa_sand_is_occupied, sa_sand_step};
