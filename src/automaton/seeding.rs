//! Random seeding of boolean grids.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::grid::Grid;

/// Deterministic RNG when `seed` is set, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Fill `grid` so each cell is alive with probability `density`.
///
/// `density` is clamped to `[0, 1]`; NaN and infinities count as 0.
pub fn seed_random<R: Rng + ?Sized>(grid: &mut Grid<bool>, density: f64, rng: &mut R) {
    let density = if density.is_finite() {
        density.clamp(0.0, 1.0)
    } else {
        0.0
    };
    for cell in grid.iter_mut() {
        *cell = rng.gen_bool(density);
    }
}
