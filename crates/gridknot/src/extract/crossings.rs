//! Crossing detection and splicing. Columns always pass over rows.

use std::fmt;

use crate::diagram::{DiagramError, GridDiagram};

/// Grid cell where a vertical (column) strand passes over a horizontal (row)
/// strand. The cell itself is always blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crossing {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[inline]
fn strictly_between(v: usize, a: usize, b: usize) -> bool {
    a.min(b) < v && v < a.max(b)
}

fn check_len(expected: usize, traversal: &[usize]) -> Result<(), DiagramError> {
    if traversal.len() == expected {
        Ok(())
    } else {
        Err(DiagramError::Traversal {
            expected,
            found: traversal.len(),
        })
    }
}

/// Crossings of every column strand, grouped by column chunk.
///
/// `traversal` has `2N + 1` entries: column chunks are `(t[2k], t[2k+1])`
/// (X → O) and row chunks `(t[2k+1], t[2k+2])` (O → X). Within a group the
/// crossings are ordered along the strand's direction of travel. Any other
/// length is a [`DiagramError::Traversal`].
pub fn find_crossings(
    diagram: &GridDiagram,
    traversal: &[usize],
) -> Result<Vec<Vec<Crossing>>, DiagramError> {
    let n = diagram.size();
    check_len(2 * n + 1, traversal)?;
    let rows: Vec<(usize, usize, usize)> = (0..n)
        .map(|m| {
            let (r, ca) = diagram.grid_position(traversal[2 * m + 1]);
            let (_, cb) = diagram.grid_position(traversal[2 * m + 2]);
            (r, ca, cb)
        })
        .collect();

    Ok((0..n)
        .map(|k| {
            let (ra, c) = diagram.grid_position(traversal[2 * k]);
            let (rb, _) = diagram.grid_position(traversal[2 * k + 1]);
            let mut hits: Vec<Crossing> = rows
                .iter()
                .filter(|&&(r, ca, cb)| strictly_between(c, ca, cb) && strictly_between(r, ra, rb))
                .map(|&(row, _, _)| Crossing { row, col: c })
                .collect();
            if ra < rb {
                hits.sort_by_key(|h| h.row);
            } else {
                hits.sort_by_key(|h| std::cmp::Reverse(h.row));
            }
            hits
        })
        .collect())
}

/// Traversal with each column's crossings inserted right after its X.
///
/// Returns the topology (`2N + 1 + C` absolute indices, closing repeat
/// included) and a parallel flag that marks the crossing entries. The
/// traversal must have `2·per_column.len() + 1` entries.
pub fn splice(
    diagram: &GridDiagram,
    traversal: &[usize],
    per_column: &[Vec<Crossing>],
) -> Result<(Vec<usize>, Vec<bool>), DiagramError> {
    check_len(2 * per_column.len() + 1, traversal)?;
    let total = traversal.len() + per_column.iter().map(Vec::len).sum::<usize>();
    let mut topology = Vec::with_capacity(total);
    let mut lifted = Vec::with_capacity(total);
    for (k, hits) in per_column.iter().enumerate() {
        topology.push(traversal[2 * k]);
        lifted.push(false);
        for h in hits {
            topology.push(diagram.absolute_index(h.row, h.col));
            lifted.push(true);
        }
        topology.push(traversal[2 * k + 1]);
        lifted.push(false);
    }
    topology.push(traversal[2 * per_column.len()]);
    lifted.push(false);
    Ok((topology, lifted))
}
