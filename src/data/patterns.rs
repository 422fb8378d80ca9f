//! Layout pattern generators for level authoring.
//!
//! Each generator returns a row-major cell list of `rows * columns` entries,
//! `None` marking an empty cell.

use rand::Rng;
use serde::Deserialize;

/// A generated layout kind, selectable from a level file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum PatternKind {
    /// Alternate the first two brick types (second cell empty with one type)
    Checkerboard,
    /// Manhattan diamond around the grid center, banded by brick type
    Diamond,
    /// About 80% fill with uniformly chosen brick types
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    /// No bricks at all
    Empty,
}

pub fn checkerboard(rows: usize, columns: usize, types: &[String]) -> Vec<Option<String>> {
    let mut cells = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let cell = if (row + column) % 2 == 0 {
                types.first().cloned()
            } else {
                types.get(1).cloned()
            };
            cells.push(cell);
        }
    }
    cells
}

pub fn diamond(rows: usize, columns: usize, types: &[String]) -> Vec<Option<String>> {
    let center_row = rows / 2;
    let center_column = columns / 2;
    let radius = center_row.min(center_column);

    let mut cells = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let distance = row.abs_diff(center_row) + column.abs_diff(center_column);
            let cell = if distance <= radius && !types.is_empty() {
                Some(types[distance % types.len()].clone())
            } else {
                None
            };
            cells.push(cell);
        }
    }
    cells
}

pub fn random<R: Rng>(rows: usize, columns: usize, types: &[String], rng: &mut R) -> Vec<Option<String>> {
    (0..rows * columns)
        .map(|_| {
            if types.is_empty() || rng.gen::<f32>() <= 0.2 {
                None
            } else {
                Some(types[rng.gen_range(0..types.len())].clone())
            }
        })
        .collect()
}

pub fn empty(rows: usize, columns: usize) -> Vec<Option<String>> {
    vec![None; rows * columns]
}

/// Number of non-empty cells.
pub fn count_bricks(cells: &[Option<String>]) -> usize {
    cells.iter().filter(|cell| cell.is_some()).count()
}
