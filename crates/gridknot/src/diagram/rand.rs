//! Random single-component grid diagrams.
//!
//! Model
//! - Draw the X column of every row as a uniform permutation `x`.
//! - Draw a uniform cyclic permutation `c` of the rows (Sattolo's shuffle) and
//!   put the O of row `c[r]` in column `x[r]`.
//! - The traversal X(r) → O(c[r]) → X(c[r]) → … then visits every row once
//!   before closing, so the diagram is a knot (never a link), and `c` has no
//!   fixed points, so an X never shares a cell with an O.
//!
//! Determinism uses a plain `u64` seed through `StdRng`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::error::DiagramError;
use super::grid::GridDiagram;

/// Random knot diagram of the given size (`size >= 2`).
pub fn random_knot_diagram<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<GridDiagram, DiagramError> {
    if size < 2 {
        return Err(DiagramError::TooSmall { size });
    }
    let mut x_cols: Vec<usize> = (0..size).collect();
    x_cols.shuffle(rng);

    let mut cycle: Vec<usize> = (0..size).collect();
    for i in (1..size).rev() {
        let j = rng.gen_range(0..i);
        cycle.swap(i, j);
    }

    let mut o_cols = vec![0; size];
    for (r, &next) in cycle.iter().enumerate() {
        o_cols[next] = x_cols[r];
    }
    GridDiagram::from_columns(&x_cols, &o_cols)
}

/// Seeded variant of [`random_knot_diagram`]; equal seeds give equal diagrams.
pub fn random_knot_diagram_seeded(size: usize, seed: u64) -> Result<GridDiagram, DiagramError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_knot_diagram(size, &mut rng)
}
