//! Cromwell moves: translation, commutation, (de)stabilization.
//!
//! Every move validates before it mutates; a rejected move returns a
//! `CromwellError` and leaves the grid exactly as it was. Moves that change
//! the grid size build the new table on the side and swap it in only after it
//! passes `validate`.

use std::fmt;
use std::str::FromStr;

use super::error::CromwellError;
use super::grid::GridDiagram;
use super::types::{Axis, Corner, Direction, Entry, ParseTokenError};

/// A single edit, in a form that can be logged, stored, and parsed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CromwellMove {
    Translate(Direction),
    Commute { axis: Axis, index: usize },
    Stabilize { corner: Corner, row: usize, col: usize },
    Destabilize { row: usize, col: usize },
}

impl GridDiagram {
    /// Cyclically shifts the whole grid by one cell.
    ///
    /// `Up` moves the first row to the bottom, `Down` the last row to the top,
    /// `Left`/`Right` do the same with the first/last cell of every row.
    pub fn translate(&mut self, direction: Direction) -> Result<(), CromwellError> {
        match direction {
            Direction::Up => self.rows.rotate_left(1),
            Direction::Down => self.rows.rotate_right(1),
            Direction::Left => self.rows.iter_mut().for_each(|r| r.rotate_left(1)),
            Direction::Right => self.rows.iter_mut().for_each(|r| r.rotate_right(1)),
        }
        Ok(())
    }

    /// Sorted `(min, max)` positions of the X and O along a row/column.
    fn span(&self, axis: Axis, index: usize) -> Result<(usize, usize), CromwellError> {
        let (x, o) = self
            .find_xo(axis, index)
            .ok_or(CromwellError::OutOfBounds {
                row: index,
                col: index,
                size: self.size(),
            })?;
        Ok((x.min(o), x.max(o)))
    }

    /// `true` unless one span is strictly nested in the other or the two are
    /// strictly disjoint. Shared endpoints count as interleaved.
    pub fn are_interleaved(&self, axis: Axis, a: usize, b: usize) -> Result<bool, CromwellError> {
        let (a0, a1) = self.span(axis, a)?;
        let (b0, b1) = self.span(axis, b)?;
        let nested = (a0 > b0 && a1 < b1) || (b0 > a0 && b1 < a1);
        let disjoint = a1 < b0 || b1 < a0;
        Ok(!(nested || disjoint))
    }

    /// Exchanges row/column `index` with `index + 1` when they do not interleave.
    pub fn commute(&mut self, axis: Axis, index: usize) -> Result<(), CromwellError> {
        let next = index
            .checked_add(1)
            .filter(|&next| next < self.size())
            .ok_or(CromwellError::NoAdjacent { axis, index })?;
        if self.are_interleaved(axis, index, next)? {
            return Err(CromwellError::Interleaved {
                axis,
                a: index,
                b: next,
            });
        }
        match axis {
            Axis::Row => self.rows.swap(index, next),
            Axis::Col => self.rows.iter_mut().for_each(|r| r.swap(index, next)),
        }
        Ok(())
    }

    /// Replaces the X or O at `(row, col)` by a 2×2 block whose `corner` is
    /// blank. The block's upper-left cell is `(row, col)` afterwards, so
    /// `destabilize(row, col)` undoes the move. The grid grows by one.
    pub fn stabilize(&mut self, corner: Corner, row: usize, col: usize) -> Result<(), CromwellError> {
        self.check_cell(row, col)?;
        let e = self.rows[row][col];
        if e.is_blank() {
            return Err(CromwellError::NotFound { row, col });
        }
        let f = e.opposite();
        let b = Entry::Blank;

        // (cells of the original row, cells of the new row, new row index, new column index)
        let (old_cells, new_cells, row_at, col_at) = match corner {
            Corner::NW => ([b, e], [e, f], row + 1, col + 1),
            Corner::SW => ([b, e], [e, f], row, col + 1),
            Corner::NE => ([e, b], [f, e], row + 1, col),
            Corner::SE => ([e, b], [f, e], row, col),
        };

        let mut rows = self.rows.clone();
        for r in rows.iter_mut() {
            r.insert(col_at, Entry::Blank);
        }
        rows[row][col] = old_cells[0];
        rows[row][col + 1] = old_cells[1];
        let mut extra = vec![Entry::Blank; rows.len() + 1];
        extra[col] = new_cells[0];
        extra[col + 1] = new_cells[1];
        rows.insert(row_at, extra);

        self.rows = rows;
        debug_assert!(self.validate().is_ok());
        Ok(())
    }

    /// Collapses the 2×2 block with upper-left cell `(row, col)`.
    ///
    /// The block must hold exactly one blank plus a doubled X (or O) and a
    /// single O (or X). The doubled entry moves into the blank cell; the row
    /// and column opposite the blank (which hold nothing outside the block)
    /// are removed. The grid shrinks by one.
    pub fn destabilize(&mut self, row: usize, col: usize) -> Result<(), CromwellError> {
        let size = self.size();
        let out_of_bounds = CromwellError::OutOfBounds { row, col, size };
        let row2 = row.checked_add(1).filter(|&r| r < size).ok_or(out_of_bounds.clone())?;
        let col2 = col.checked_add(1).filter(|&c| c < size).ok_or(out_of_bounds)?;
        let invalid = CromwellError::InvalidSubgrid { row, col };

        let cells = [(row, col), (row, col2), (row2, col), (row2, col2)];
        let blanks: Vec<(usize, usize)> = cells
            .iter()
            .copied()
            .filter(|&(i, j)| self.rows[i][j].is_blank())
            .collect();
        let xs = cells.iter().filter(|&&(i, j)| self.rows[i][j] == Entry::X).count();
        let os = cells.iter().filter(|&&(i, j)| self.rows[i][j] == Entry::O).count();
        let doubled = match (blanks.as_slice(), xs, os) {
            ([_], 2, 1) => Entry::X,
            ([_], 1, 2) => Entry::O,
            _ => return Err(invalid),
        };
        let (blank_row, blank_col) = blanks[0];
        let drop_row = if blank_row == row { row2 } else { row };
        let drop_col = if blank_col == col { col2 } else { col };

        let mut rows = self.rows.clone();
        rows[blank_row][blank_col] = doubled;
        rows.remove(drop_row);
        for r in rows.iter_mut() {
            r.remove(drop_col);
        }
        let candidate = GridDiagram::new(rows).map_err(|_| invalid)?;
        *self = candidate;
        Ok(())
    }

    /// Applies `mv`, logging the outcome.
    pub fn apply(&mut self, mv: CromwellMove) -> Result<(), CromwellError> {
        let result = match mv {
            CromwellMove::Translate(direction) => self.translate(direction),
            CromwellMove::Commute { axis, index } => self.commute(axis, index),
            CromwellMove::Stabilize { corner, row, col } => self.stabilize(corner, row, col),
            CromwellMove::Destabilize { row, col } => self.destabilize(row, col),
        };
        match &result {
            Ok(()) => tracing::debug!(%mv, size = self.size(), "cromwell move applied"),
            Err(e) => tracing::debug!(%mv, error = %e, "cromwell move rejected"),
        }
        result
    }
}

impl fmt::Display for CromwellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CromwellMove::Translate(d) => write!(f, "translate:{d}"),
            CromwellMove::Commute { axis, index } => write!(f, "commute:{axis}:{index}"),
            CromwellMove::Stabilize { corner, row, col } => {
                write!(f, "stabilize:{corner}:{row}:{col}")
            }
            CromwellMove::Destabilize { row, col } => write!(f, "destabilize:{row}:{col}"),
        }
    }
}

/// Textual form: `translate:up`, `commute:row:2`, `stabilize:nw:1:3`,
/// `destabilize:1:3`.
impl FromStr for CromwellMove {
    type Err = CromwellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        let index = |token: &str| -> Result<usize, CromwellError> {
            token
                .parse::<usize>()
                .map_err(|_| CromwellError::parse(s, format!("{token:?} is not an index")))
        };
        let token = |e: ParseTokenError| CromwellError::parse(s, e.to_string());
        let kind = parts[0].to_ascii_lowercase();
        match (kind.as_str(), &parts[1..]) {
            ("translate", [d]) => Ok(CromwellMove::Translate(d.parse().map_err(token)?)),
            ("commute", [axis, i]) => Ok(CromwellMove::Commute {
                axis: axis.parse().map_err(token)?,
                index: index(*i)?,
            }),
            ("stabilize", [corner, i, j]) => Ok(CromwellMove::Stabilize {
                corner: corner.parse().map_err(token)?,
                row: index(*i)?,
                col: index(*j)?,
            }),
            ("destabilize", [i, j]) => Ok(CromwellMove::Destabilize {
                row: index(*i)?,
                col: index(*j)?,
            }),
            ("translate" | "commute" | "stabilize" | "destabilize", _) => {
                Err(CromwellError::parse(s, "wrong number of arguments"))
            }
            _ => Err(CromwellError::parse(s, "unknown move")),
        }
    }
}
