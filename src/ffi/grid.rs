//! Life board cell access and stepping.

use std::ffi::{c_char, CStr};

use super::{status_of, SA_NULL, SA_OK, SA_UNKNOWN_PATTERN};
use crate::automaton::patterns::pattern_by_name;
use crate::state::LifeSimulation;

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn sa_life_get(ptr: *const LifeSimulation, row: i32, column: i32) -> u8 {
    if ptr.is_null() {
        tracing::warn!("sa_life_get called with null handle");
        return 0;
    }
    let sim = &*ptr;
    match sim.get(row, column) {
        Ok(true) => 1,
        _ => 0,
    }
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
///
/// # Returns
/// `SA_OK`, `SA_NULL`, or `SA_OUT_OF_BOUNDS`.
#[no_mangle]
pub unsafe extern "C" fn sa_life_set(
    ptr: *mut LifeSimulation,
    row: i32,
    column: i32,
    alive: u8,
) -> i32 {
    if ptr.is_null() {
        tracing::warn!("sa_life_set called with null handle");
        return SA_NULL;
    }
    let sim = &mut *ptr;
    status_of(sim.set(row, column, alive != 0))
}

/// Advances the board by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
#[no_mangle]
pub unsafe extern "C" fn sa_life_step(ptr: *mut LifeSimulation) -> i32 {
    if ptr.is_null() {
        tracing::warn!("sa_life_step called with null handle");
        return SA_NULL;
    }
    (*ptr).step();
    SA_OK
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn sa_life_generation(ptr: *const LifeSimulation) -> u64 {
    if ptr.is_null() {
        tracing::warn!("sa_life_generation called with null handle");
        return 0;
    }
    (*ptr).generation()
}

/// Counts live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
#[no_mangle]
pub unsafe extern "C" fn sa_life_live_count(ptr: *const LifeSimulation) -> u64 {
    if ptr.is_null() {
        tracing::warn!("sa_life_live_count called with null handle");
        return 0;
    }
    (*ptr).live_count() as u64
}

/// Stamps a named pattern (e.g. "glider") with its top-left cell at
/// `(row, column)`. The pattern wraps across the board edges.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeSimulation, or null
/// - `name` must be a valid NUL-terminated string, or null
///
/// # Returns
/// `SA_OK`, `SA_NULL`, or `SA_UNKNOWN_PATTERN`.
#[no_mangle]
pub unsafe extern "C" fn sa_life_insert_pattern(
    ptr: *mut LifeSimulation,
    name: *const c_char,
    row: i32,
    column: i32,
) -> i32 {
    if ptr.is_null() || name.is_null() {
        tracing::warn!("sa_life_insert_pattern called with null handle or name");
        return SA_NULL;
    }

    let Ok(name) = CStr::from_ptr(name).to_str() else {
        tracing::warn!("pattern name is not valid UTF-8");
        return SA_UNKNOWN_PATTERN;
    };
    let Some(pattern) = pattern_by_name(name) else {
        tracing::warn!(name, "unknown pattern");
        return SA_UNKNOWN_PATTERN;
    };

    match pattern.to_grid() {
        Ok(grid) => {
            (*ptr).insert(&grid, row, column);
            SA_OK
        }
        Err(err) => status_of(Err(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{sa_life_create, sa_life_destroy};
    use crate::ffi::SA_OUT_OF_BOUNDS;
    use std::ptr;

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let sim = sa_life_create(8, 8, 1);

            assert_eq!(sa_life_set(sim, 0, 0, 1), SA_OK);
            assert_eq!(sa_life_get(sim, 0, 0), 1);

            assert_eq!(sa_life_set(sim, 0, 0, 0), SA_OK);
            assert_eq!(sa_life_get(sim, 0, 0), 0);

            sa_life_destroy(sim);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let sim = sa_life_create(4, 4, 1);

            assert_eq!(sa_life_get(sim, -1, 0), 0);
            assert_eq!(sa_life_get(sim, 4, 0), 0);
            assert_eq!(sa_life_set(sim, -1, 0, 1), SA_OUT_OF_BOUNDS);
            assert_eq!(sa_life_set(sim, 0, 4, 1), SA_OUT_OF_BOUNDS);
            assert_eq!(sa_life_live_count(sim), 0);

            sa_life_destroy(sim);
        }
    }

    #[test]
    fn test_step() {
        unsafe {
            let sim = sa_life_create(5, 5, 1);

            // Blinker
            sa_life_set(sim, 2, 1, 1);
            sa_life_set(sim, 2, 2, 1);
            sa_life_set(sim, 2, 3, 1);
            assert_eq!(sa_life_generation(sim), 0);

            assert_eq!(sa_life_step(sim), SA_OK);

            assert_eq!(sa_life_generation(sim), 1);
            assert_eq!(sa_life_get(sim, 1, 2), 1);
            assert_eq!(sa_life_get(sim, 2, 1), 0);
            assert_eq!(sa_life_live_count(sim), 3);

            sa_life_destroy(sim);
        }
    }

    #[test]
    fn test_insert_pattern() {
        unsafe {
            let sim = sa_life_create(6, 6, 1);

            assert_eq!(sa_life_insert_pattern(sim, c"glider".as_ptr(), 5, 5), SA_OK);
            assert_eq!(sa_life_live_count(sim), 5);
            // ".#." row lands on row 5, its live cell wraps to column 0
            assert_eq!(sa_life_get(sim, 5, 0), 1);

            assert_eq!(
                sa_life_insert_pattern(sim, c"spaceship".as_ptr(), 0, 0),
                SA_UNKNOWN_PATTERN
            );
            assert_eq!(sa_life_insert_pattern(sim, ptr::null(), 0, 0), SA_NULL);
            assert_eq!(
                sa_life_insert_pattern(ptr::null_mut(), c"glider".as_ptr(), 0, 0),
                SA_NULL
            );
            assert_eq!(sa_life_live_count(sim), 5);

            sa_life_destroy(sim);
        }
    }

    #[test]
    fn test_insert_pattern_invalid_utf8_name() {
        unsafe {
            let sim = sa_life_create(6, 6, 1);

            let name = c"gl\xffder";
            assert_eq!(sa_life_insert_pattern(sim, name.as_ptr(), 0, 0), SA_UNKNOWN_PATTERN);
            assert_eq!(sa_life_live_count(sim), 0);

            sa_life_destroy(sim);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(sa_life_get(ptr::null(), 0, 0), 0);
            assert_eq!(sa_life_set(ptr::null_mut(), 0, 0, 1), SA_NULL);
            assert_eq!(sa_life_step(ptr::null_mut()), SA_NULL);
            assert_eq!(sa_life_generation(ptr::null()), 0);
            assert_eq!(sa_life_live_count(ptr::null()), 0);
        }
    }
}
