//! Sand box grain placement and stepping.

use super::{status_of, SA_NULL, SA_OK};
use crate::state::SandSimulation;

/// Drops a grain at `(row, column)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SandSimulation, or null
///
/// # Returns
/// `SA_OK`, `SA_NULL`, or `SA_OUT_OF_BOUNDS`.
#[no_mangle]
pub unsafe extern "C" fn sa_sand_drop_grain(
    ptr: *mut SandSimulation,
    row: i32,
    column: i32,
) -> i32 {
    if ptr.is_null() {
        tracing::warn!("sa_sand_drop_grain called with null handle");
        return SA_NULL;
    }
    status_of((*ptr).drop_grain(row, column))
}

/// Lets every grain fall by at most one cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SandSimulation, or null
#[no_mangle]
pub unsafe extern "C" fn sa_sand_step(ptr: *mut SandSimulation) -> i32 {
    if ptr.is_null() {
        tracing::warn!("sa_sand_step called with null handle");
        return SA_NULL;
    }
    (*ptr).step();
    SA_OK
}

/// 1 if a grain occupies `(row, column)`, 0 if empty, out of bounds, or null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SandSimulation, or null
#[no_mangle]
pub unsafe extern "C" fn sa_sand_is_occupied(
    ptr: *const SandSimulation,
    row: i32,
    column: i32,
) -> u8 {
    if ptr.is_null() {
        tracing::warn!("sa_sand_is_occupied called with null handle");
        return 0;
    }
    match (*ptr).is_occupied(row, column) {
        Ok(true) => 1,
        _ => 0,
    }
}

/// Number of grains in the box, or 0 for a null handle.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SandSimulation, or null
#[no_mangle]
pub unsafe extern "C" fn sa_sand_grain_count(ptr: *const SandSimulation) -> u64 {
    if ptr.is_null() {
        tracing::warn!("sa_sand_grain_count called with null handle");
        return 0;
    }
    (*ptr).grain_count() as u64
}
