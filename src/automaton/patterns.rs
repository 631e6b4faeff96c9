//! Named seed patterns for the life grid.

use super::grid::Grid;
use crate::error::Result;

/// A small pattern drawn as text rows: `#` alive, anything else dead.
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rows: &[".#.", "..#", "###"],
    },
    Pattern {
        name: "Blinker",
        rows: &["###"],
    },
    Pattern {
        name: "Toad",
        rows: &[".###", "###."],
    },
    Pattern {
        name: "Beacon",
        rows: &["##..", "##..", "..##", "..##"],
    },
    Pattern {
        name: "R-pentomino",
        rows: &[".##", "##.", ".#."],
    },
];

impl Pattern {
    /// Render the pattern as a boolean grid sized to its bounding box.
    pub fn to_grid(&self) -> Result<Grid<bool>> {
        let width = self.rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Grid::from_rows(
            self.rows
                .iter()
                .map(|row| {
                    let mut cells: Vec<bool> = row.chars().map(|c| c == '#').collect();
                    cells.resize(width, false);
                    cells
                })
                .collect(),
        )
    }
}

/// Look up a pattern by name, ignoring ASCII case.
pub fn pattern_by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
