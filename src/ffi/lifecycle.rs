//! Handle creation and destruction, plus logging setup.

use tracing_subscriber::EnvFilter;

use crate::automaton::sand::Rgb;
use crate::state::{LifeSimulation, SandSimulation};

/// Install a `tracing` subscriber that honors `RUST_LOG`.
///
/// # Returns
/// 0 if installed, 1 if a global subscriber was already set (nothing changes).
#[no_mangle]
pub extern "C" fn sa_init_logging() -> i32 {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    match installed {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Creates an all-dead life board and returns an opaque pointer.
///
/// `threads` is the worker count for stepping; 0 means one.
///
/// # Returns
/// A pointer to a new LifeSimulation, or null for non-positive dimensions.
///
/// # Safety
/// The returned pointer must eventually be freed with `sa_life_destroy()`.
#[no_mangle]
pub extern "C" fn sa_life_create(width: i32, height: i32, threads: u8) -> *mut LifeSimulation {
    match LifeSimulation::new(width, height, threads as usize) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            tracing::warn!(%err, "sa_life_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a life board and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `sa_life_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn sa_life_destroy(ptr: *mut LifeSimulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Creates an empty sand box whose grains use the given color.
///
/// # Returns
/// A pointer to a new SandSimulation, or null for non-positive dimensions.
///
/// # Safety
/// The returned pointer must eventually be freed with `sa_sand_destroy()`.
#[no_mangle]
pub extern "C" fn sa_sand_create(
    width: i32,
    height: i32,
    r: u8,
    g: u8,
    b: u8,
) -> *mut SandSimulation {
    match SandSimulation::new(width, height, Rgb(r, g, b)) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            tracing::warn!(%err, "sa_sand_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a sand box and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `sa_sand_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn sa_sand_destroy(ptr: *mut SandSimulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}
