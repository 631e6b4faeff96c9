//! Full-generation transforms built on the single-cell life rule.
//!
//! Every transform reads only the grid it is given and writes a brand new
//! grid, so cell evaluation order does not matter and work is spread across
//! the current rayon pool.

use rayon::prelude::*;

use super::grid::Grid;
use super::rules::next_alive;

/// Compute the next generation as a boolean grid.
pub fn next_generation<T, F>(grid: &Grid<T>, is_alive: F) -> Grid<bool>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync,
{
    next_generation_with(grid, is_alive, |_, alive| alive)
}

/// Compute the next generation, letting `evolve` pick each new cell value
/// from the old value and its next liveness.
pub fn next_generation_with<T, U, F, E>(grid: &Grid<T>, is_alive: F, evolve: E) -> Grid<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> bool + Sync,
    E: Fn(&T, bool) -> U + Sync,
{
    let size = grid.size();
    let width = size.width as usize;

    let cells: Vec<U> = grid
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(idx, value)| {
            let row = (idx / width) as i32;
            let column = (idx % width) as i32;
            evolve(value, next_alive(grid, row, column, &is_alive))
        })
        .collect();

    Grid::from_parts(size, cells)
}

/// Step an age grid where each live cell holds the generation it was born in.
///
/// Survivors keep their birth generation, births get `generation`, deaths become `None`.
pub fn step_aged(grid: &Grid<Option<u64>>, generation: u64) -> Grid<Option<u64>> {
    next_generation_with(
        grid,
        |cell: &Option<u64>| cell.is_some(),
        |old, alive| match (old, alive) {
            (Some(born), true) => Some(*born),
            (None, true) => Some(generation),
            (_, false) => None,
        },
    )
}
