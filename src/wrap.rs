//! Wrap-around helpers for indices and scalar values.

use thiserror::Error;

/// Raised by [`keep_inside`] when the range is empty or inverted.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("lower limit {lower} is not below upper limit {upper}")]
pub struct WrapError {
    pub lower: f64,
    pub upper: f64,
}

/// Floor-style modulo of `value` into `[0, len)`.
///
/// Negative inputs wrap from the far edge: `wrap_index(-1, 3) == 2`.
/// `len` must be positive; grids guarantee this at construction.
#[inline]
pub fn wrap_index(value: i64, len: i32) -> i32 {
    debug_assert!(len > 0);
    // rem_euclid of a positive divisor fits back into i32.
    value.rem_euclid(len as i64) as i32
}

/// Fold `n` into `[lower, upper]` by whole multiples of `upper - lower`.
///
/// Values already inside the range (both ends included) come back untouched,
/// so `keep_inside(5.0, 0.0, 5.0) == Ok(5.0)` while `keep_inside(7.0, 0.0, 5.0) == Ok(2.0)`.
pub fn keep_inside(n: f64, lower: f64, upper: f64) -> Result<f64, WrapError> {
    if upper <= lower {
        return Err(WrapError { lower, upper });
    }
    if (lower..=upper).contains(&n) {
        return Ok(n);
    }

    let size = upper - lower;
    let res = if n < lower {
        n + ((lower - n) / size).ceil() * size
    } else {
        n - ((n - upper) / size).ceil() * size
    };
    Ok(res)
}
