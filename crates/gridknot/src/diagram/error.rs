use std::fmt;

use super::types::Axis;

/// Structural problems: the table cannot be used as a knot diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramError {
    /// Fewer than two rows; no knot fits.
    TooSmall { size: usize },
    /// Row `row` has `len` cells in a table with `size` rows.
    NotSquare { row: usize, len: usize, size: usize },
    /// Row `index` does not hold exactly one X and one O.
    RowCount { index: usize, x: usize, o: usize },
    /// Column `index` does not hold exactly one X and one O.
    ColCount { index: usize, x: usize, o: usize },
    /// Unrecognized cell token at `(row, col)`.
    UnknownToken {
        row: usize,
        col: usize,
        token: String,
    },
    /// Traversal closed after `found` indices instead of `expected` (e.g. a
    /// multi-component link).
    Traversal { expected: usize, found: usize },
    /// Consecutive traversal cells share neither a row nor a column.
    Crossing { from: usize, to: usize },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::TooSmall { size } => {
                write!(f, "grid diagram of size {size} is too small (need at least 2)")
            }
            DiagramError::NotSquare { row, len, size } => write!(
                f,
                "row {row} has {len} cells but the diagram has {size} rows"
            ),
            DiagramError::RowCount { index, x, o } => write!(
                f,
                "row {index} holds {x} x and {o} o entries (need exactly one of each)"
            ),
            DiagramError::ColCount { index, x, o } => write!(
                f,
                "column {index} holds {x} x and {o} o entries (need exactly one of each)"
            ),
            DiagramError::UnknownToken { row, col, token } => write!(
                f,
                "unknown entry {token:?} at ({row}, {col}); expected 'x', 'o' or ' '"
            ),
            DiagramError::Traversal { expected, found } => write!(
                f,
                "traversal closed after {found} indices, expected {expected} (diagram is not a single knot)"
            ),
            DiagramError::Crossing { from, to } => write!(
                f,
                "traversal cells {from} and {to} share neither a row nor a column"
            ),
        }
    }
}

impl std::error::Error for DiagramError {}

/// Rejected Cromwell move. The diagram is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CromwellError {
    /// `index` is the last row/column; there is nothing to exchange with.
    NoAdjacent { axis: Axis, index: usize },
    /// The X–O spans of the two rows/columns interleave.
    Interleaved { axis: Axis, a: usize, b: usize },
    /// Stabilization target is blank.
    NotFound { row: usize, col: usize },
    /// Cell (or 2×2 block) lies outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The 2×2 block at `(row, col)` is not a destabilizable corner.
    InvalidSubgrid { row: usize, col: usize },
    /// Malformed textual move.
    Parse { input: String, reason: String },
}

impl CromwellError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CromwellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CromwellError::NoAdjacent { axis, index } => write!(
                f,
                "cannot exchange {axis} {index}: there is no adjacent {axis} after it"
            ),
            CromwellError::Interleaved { axis, a, b } => write!(
                f,
                "{axis}s {a} and {b} are interleaved and cannot be exchanged"
            ),
            CromwellError::NotFound { row, col } => write!(
                f,
                "there is no x or o at ({row}, {col}): stabilization cannot be performed"
            ),
            CromwellError::OutOfBounds { row, col, size } => {
                write!(f, "position ({row}, {col}) is outside the {size}x{size} grid")
            }
            CromwellError::InvalidSubgrid { row, col } => write!(
                f,
                "the 2x2 block at ({row}, {col}) needs one blank and a doubled x or o"
            ),
            CromwellError::Parse { input, reason } => {
                write!(f, "cannot parse move {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for CromwellError {}
