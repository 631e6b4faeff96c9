//! Fixed-size 2D grid with strict and toroidal addressing.

use crate::error::{GridError, Result};
use crate::wrap::wrap_index;

/// Grid dimensions; fixed for the lifetime of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A `height` x `width` lattice of cells addressed as `(row, column)`.
///
/// Cells live in one row-major buffer of exactly `width * height` values, so
/// every row always has `width` entries. Resizing means building a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default`.
    pub fn new(width: i32, height: i32, default: T) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        let len = width as usize * height as usize;
        Ok(Grid {
            width,
            height,
            cells: vec![default; len],
        })
    }

    /// Build a grid from row-major rows, e.g. `[[0, 1, 2], [3, 4, 5]]`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(GridError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Grid {
            width: width as i32,
            height: height as i32,
            cells,
        })
    }

    /// Copy every cell of `other` into this grid with `other`'s origin at
    /// `(dest_row, dest_column)`. Destinations wrap across the edges.
    pub fn insert(&mut self, other: &Grid<T>, dest_row: i32, dest_column: i32) {
        for (row, column, value) in other.cells() {
            let r = wrap_index(dest_row as i64 + row as i64, self.height);
            let c = wrap_index(dest_column as i64 + column as i64, self.width);
            let idx = self.index_of(r, c);
            self.cells[idx] = value.clone();
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && row < self.height && column >= 0 && column < self.width
    }

    /// Linear index for an in-bounds coordinate.
    #[inline]
    fn index_of(&self, row: i32, column: i32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    fn checked_index(&self, row: i32, column: i32) -> Result<usize> {
        if self.in_bounds(row, column) {
            Ok(self.index_of(row, column))
        } else {
            Err(GridError::OutOfBounds {
                row,
                column,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Strict read. Coordinates outside the grid are an error, never clamped.
    pub fn get(&self, row: i32, column: i32) -> Result<&T> {
        let idx = self.checked_index(row, column)?;
        Ok(&self.cells[idx])
    }

    /// Strict write, same bounds rules as [`Grid::get`].
    pub fn set(&mut self, row: i32, column: i32, value: T) -> Result<()> {
        let idx = self.checked_index(row, column)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Toroidal read: any row/column is folded into range first, so this never fails.
    ///
    /// On a 3x3 grid `get_wrapped(-1, 0)` reads `(2, 0)` and `get_wrapped(3, 1)` reads `(0, 1)`.
    #[inline]
    pub fn get_wrapped(&self, row: i64, column: i64) -> &T {
        let r = wrap_index(row, self.height);
        let c = wrap_index(column, self.width);
        &self.cells[self.index_of(r, c)]
    }

    /// Row slices from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Every `(row, column, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| ((idx / width) as i32, (idx % width) as i32, value))
    }

    /// Mutable access to every cell in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    /// Number of cells matching `pred`.
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.cells.iter().filter(|value| pred(value)).count()
    }

    /// A same-sized grid with `f` applied to every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Wrap a buffer produced for a grid of the same size.
    pub(crate) fn from_parts(size: Size, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), size.width as usize * size.height as usize);
        Grid {
            width: size.width,
            height: size.height,
            cells,
        }
    }
}
