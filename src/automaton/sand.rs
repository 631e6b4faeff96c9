//! Falling-sand gravity rule.
//!
//! Unlike the life rule this one looks at a single neighbor (the cell below)
//! and does not wrap: the bottom row is a floor.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::error::Result;

/// Grain color, stored per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Default for Rgb {
    fn default() -> Self {
        Rgb(0xdd, 0xdd, 0xdd)
    }
}

/// `None` is empty space, `Some(color)` is a grain.
pub type SandCell = Option<Rgb>;

/// Create an empty sand grid.
pub fn empty_sand(width: i32, height: i32) -> Result<Grid<SandCell>> {
    Grid::new(width, height, None)
}

/// Place a grain at `(row, column)`. Strict bounds, like [`Grid::set`].
pub fn drop_grain(grid: &mut Grid<SandCell>, row: i32, column: i32, color: Rgb) -> Result<()> {
    grid.set(row, column, Some(color))
}

/// Advance every grain by at most one cell.
///
/// A grain moves down when the cell below it is empty in the current grid,
/// otherwise it stays. Grains on the bottom row never move. The result is a
/// fresh grid; `grid` is only read.
pub fn step_sand(grid: &Grid<SandCell>) -> Grid<SandCell> {
    let size = grid.size();
    let mut next = vec![None; size.width as usize * size.height as usize];
    let width = size.width as usize;

    for (row, column, cell) in grid.cells() {
        let Some(color) = cell else {
            continue;
        };

        // the bottom row has nothing below it, so `get` fails there and the grain stays
        let target_row = if matches!(grid.get(row + 1, column), Ok(None)) {
            row + 1
        } else {
            row
        };
        next[target_row as usize * width + column as usize] = Some(*color);
    }

    Grid::from_parts(size, next)
}

/// Number of grains in the grid.
pub fn grain_count(grid: &Grid<SandCell>) -> usize {
    grid.count(|cell| cell.is_some())
}
