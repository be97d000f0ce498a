//! Walk of the knot through the grid's X and O cells.

use crate::diagram::{Axis, DiagramError, Entry, GridDiagram};

/// Absolute indices `row + col·N` visited by the knot, starting at the X of
/// column 0 and alternating column jumps (X → O) with row jumps (O → X).
///
/// The walk stops when a cell recurs; the starting index is appended once
/// more as the closing repeat. A knot visits every row and column once, so
/// the result has `2N + 1` entries. Anything shorter is a link with several
/// components and is rejected with [`DiagramError::Traversal`].
pub fn traverse(diagram: &GridDiagram) -> Result<Vec<usize>, DiagramError> {
    let n = diagram.size();
    let expected = 2 * n + 1;
    let broken = |found: usize| DiagramError::Traversal { expected, found };

    let start_row = diagram
        .find_first(Axis::Col, 0, Entry::X)
        .ok_or_else(|| broken(0))?;
    let start = diagram.absolute_index(start_row, 0);

    let mut visited = vec![false; n * n];
    let mut out = Vec::with_capacity(expected);
    visited[start] = true;
    out.push(start);

    let (mut row, mut col) = (start_row, 0);
    loop {
        // Column jump: X to the O of the same column.
        row = diagram
            .find_first(Axis::Col, col, Entry::O)
            .ok_or_else(|| broken(out.len()))?;
        let index = diagram.absolute_index(row, col);
        if visited[index] {
            break;
        }
        visited[index] = true;
        out.push(index);

        // Row jump: O to the X of the same row.
        col = diagram
            .find_first(Axis::Row, row, Entry::X)
            .ok_or_else(|| broken(out.len()))?;
        let index = diagram.absolute_index(row, col);
        if visited[index] {
            break;
        }
        visited[index] = true;
        out.push(index);
    }
    out.push(start);

    if out.len() != expected {
        return Err(broken(out.len()));
    }
    Ok(out)
}
