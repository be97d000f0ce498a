//! The N×N grid table and its read accessors.
//!
//! Invariants (checked by `validate`, on construction and after every move):
//! - the table is square;
//! - every row and every column holds exactly one X and exactly one O.

use std::fmt;

use super::error::{CromwellError, DiagramError};
use super::types::{Axis, Entry};

/// Grid diagram of a knot: a square table of X, O and blank cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridDiagram {
    pub(super) rows: Vec<Vec<Entry>>,
}

impl GridDiagram {
    /// Validates and wraps a row-major table.
    pub fn new(rows: Vec<Vec<Entry>>) -> Result<Self, DiagramError> {
        validate_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Parses a row-major table of cell tokens (`x`, `o`, blank).
    pub fn from_tokens<S: AsRef<str>>(tokens: &[Vec<S>]) -> Result<Self, DiagramError> {
        let rows = tokens
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, token)| {
                        token
                            .as_ref()
                            .parse::<Entry>()
                            .map_err(|e| DiagramError::UnknownToken {
                                row,
                                col,
                                token: e.token,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }

    /// Builds the diagram with the X of row `r` in column `x_cols[r]` and its
    /// O in column `o_cols[r]`.
    pub fn from_columns(x_cols: &[usize], o_cols: &[usize]) -> Result<Self, DiagramError> {
        let n = x_cols.len();
        if o_cols.len() != n {
            return Err(DiagramError::NotSquare {
                row: n.min(o_cols.len()),
                len: o_cols.len(),
                size: n,
            });
        }
        let rows = x_cols
            .iter()
            .zip(o_cols)
            .map(|(&x, &o)| {
                let mut row = vec![Entry::Blank; n];
                if let Some(cell) = row.get_mut(x) {
                    *cell = Entry::X;
                }
                if let Some(cell) = row.get_mut(o) {
                    *cell = Entry::O;
                }
                row
            })
            .collect();
        Self::new(rows)
    }

    /// Number of rows (= number of columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Entry>] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&[Entry]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn col(&self, index: usize) -> Option<Vec<Entry>> {
        if index >= self.size() {
            return None;
        }
        Some(self.rows.iter().map(|r| r[index]).collect())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Entry> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Position of the first `entry` along row/column `index`.
    pub fn find_first(&self, axis: Axis, index: usize, entry: Entry) -> Option<usize> {
        match axis {
            Axis::Row => self.row(index)?.iter().position(|&e| e == entry),
            Axis::Col => {
                if index >= self.size() {
                    return None;
                }
                self.rows.iter().position(|r| r[index] == entry)
            }
        }
    }

    /// Positions `(x, o)` of the X and the O along row/column `index`.
    pub fn find_xo(&self, axis: Axis, index: usize) -> Option<(usize, usize)> {
        let x = self.find_first(axis, index, Entry::X)?;
        let o = self.find_first(axis, index, Entry::O)?;
        Some((x, o))
    }

    /// `Ok` when `(row, col)` addresses a cell of this grid.
    pub fn check_cell(&self, row: usize, col: usize) -> Result<(), CromwellError> {
        let size = self.size();
        if row < size && col < size {
            Ok(())
        } else {
            Err(CromwellError::OutOfBounds { row, col, size })
        }
    }

    /// Column-major absolute index `row + col·N` used by the traversal.
    #[inline]
    pub fn absolute_index(&self, row: usize, col: usize) -> usize {
        row + col * self.size()
    }

    /// Inverse of [`GridDiagram::absolute_index`]: `(row, col)`.
    #[inline]
    pub fn grid_position(&self, absolute: usize) -> (usize, usize) {
        (absolute % self.size(), absolute / self.size())
    }

    /// Re-checks the structural invariants.
    pub fn validate(&self) -> Result<(), DiagramError> {
        validate_rows(&self.rows)
    }
}

fn count_xo(cells: impl Iterator<Item = Entry>) -> (usize, usize) {
    cells.fold((0, 0), |(x, o), e| match e {
        Entry::X => (x + 1, o),
        Entry::O => (x, o + 1),
        Entry::Blank => (x, o),
    })
}

fn validate_rows(rows: &[Vec<Entry>]) -> Result<(), DiagramError> {
    let size = rows.len();
    if size < 2 {
        return Err(DiagramError::TooSmall { size });
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != size {
            return Err(DiagramError::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }
    }
    for index in 0..size {
        let (x, o) = count_xo(rows[index].iter().copied());
        if x != 1 || o != 1 {
            return Err(DiagramError::RowCount { index, x, o });
        }
        let (x, o) = count_xo(rows.iter().map(|r| r[index]));
        if x != 1 || o != 1 {
            return Err(DiagramError::ColCount { index, x, o });
        }
    }
    Ok(())
}

/// One line per row, cells separated by commas (`x`, `o`, ` `).
impl fmt::Display for GridDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(|e| e.token()).collect();
            writeln!(f, "{}", line.join(","))?;
        }
        Ok(())
    }
}
