//! Moore-neighborhood life rule (B3/S23) on a toroidal grid.

use super::grid::Grid;

/// Offsets of the 8 Moore neighbors as `(row, column)` deltas.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbor count a dead cell needs to be born.
pub const BIRTH: u8 = 3;

/// Neighbor counts that keep a live cell alive.
pub const SURVIVAL: [u8; 2] = [2, 3];

/// Count live Moore neighbors of `(row, column)`, wrapping across every edge.
pub fn count_neighbors<T, F>(grid: &Grid<T>, row: i32, column: i32, is_alive: F) -> u8
where
    F: Fn(&T) -> bool,
{
    let mut count = 0;
    for (dr, dc) in MOORE_OFFSETS {
        if is_alive(grid.get_wrapped(row as i64 + dr, column as i64 + dc)) {
            count += 1;
        }
    }
    count
}

/// Whether `(row, column)` is alive in the next generation.
///
/// - Live cell: survives with exactly 2 or 3 live neighbors
/// - Dead cell: born with exactly 3 live neighbors
///
/// `is_alive` maps the stored cell value to liveness, so boolean grids, age
/// grids and color grids all share the same rule. Reads go through
/// `get_wrapped`, so this cannot fail for any coordinate.
pub fn next_alive<T, F>(grid: &Grid<T>, row: i32, column: i32, is_alive: F) -> bool
where
    F: Fn(&T) -> bool,
{
    let neighbors = count_neighbors(grid, row, column, &is_alive);
    if is_alive(grid.get_wrapped(row as i64, column as i64)) {
        SURVIVAL.contains(&neighbors)
    } else {
        neighbors == BIRTH
    }
}
