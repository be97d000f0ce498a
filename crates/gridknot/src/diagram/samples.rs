//! Small reference diagrams.

use super::grid::GridDiagram;

/// 2×2 unknot: a single square loop.
pub fn unknot() -> GridDiagram {
    GridDiagram::from_columns(&[0, 1], &[1, 0]).expect("unknot")
}

/// 5×5 trefoil: X on the diagonal, O two columns to the right (cyclically).
pub fn trefoil() -> GridDiagram {
    GridDiagram::from_columns(&[0, 1, 2, 3, 4], &[2, 3, 4, 0, 1]).expect("trefoil")
}
