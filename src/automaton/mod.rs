//! Core grid and automaton logic.
//!
//! This module contains the grid abstraction, the life and sand update
//! rules, and seed patterns. The drivers in `state` and the FFI layer in
//! `ffi/` call these functions.

pub mod grid;
pub mod patterns;
pub mod rules;
pub mod sand;
pub mod seeding;
pub mod stepping;

pub use grid::{Grid, Size};
pub use patterns::{pattern_by_name, Pattern, PATTERNS};
pub use rules::{count_neighbors, next_alive};
pub use sand::{drop_grain, empty_sand, grain_count, step_sand, Rgb, SandCell};
pub use seeding::{rng_from_seed, seed_random};
pub use stepping::{next_generation, next_generation_with, step_aged};
