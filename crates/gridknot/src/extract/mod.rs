//! Grid diagram → closed 3D curve.
//!
//! Purpose
//! - Turn a validated `GridDiagram` into a non-self-intersecting polyline that
//!   the relaxation engine can smooth.
//!
//! Model
//! - Traversal: start at the X of column 0; jump along the column to its O,
//!   along that row to its X, and so on until the start recurs (`2N + 1`
//!   absolute indices `row + col·N`, closing repeat included).
//! - Crossings: columns pass over rows. A column strand and a row strand cross
//!   at `(r, c)` when each strictly straddles the other. Crossing cells are
//!   spliced into the column strand in travel order and lifted to `z = lift`.
//! - Embedding: cell centers of a grid centered on the origin; every cell
//!   between two consecutive entries gets a filler vertex, and the closing
//!   repeat is dropped.
//!
//! Code cross-refs: `diagram::GridDiagram` (input), `relax::RelaxationEngine`
//! (consumer of `Extraction::curve`).

mod crossings;
mod embed;
mod traversal;

pub use crossings::{find_crossings, splice, Crossing};
pub use embed::{embed, EmbedCfg};
pub use traversal::traverse;

use crate::diagram::{DiagramError, GridDiagram};
use crate::geom::PolygonalCurve;

/// Everything produced while extracting a curve, for inspection and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    /// Raw X/O walk, `2N + 1` entries.
    pub traversal: Vec<usize>,
    /// Walk with crossing cells spliced in, `2N + 1 + C` entries.
    pub topology: Vec<usize>,
    /// Crossings in the order they are met along the walk.
    pub crossings: Vec<Crossing>,
    /// Per curve vertex: `true` for lifted crossing vertices.
    pub lifted: Vec<bool>,
    pub curve: PolygonalCurve,
}

/// Extracts with the default unit-cell embedding.
pub fn extract(diagram: &GridDiagram) -> Result<Extraction, DiagramError> {
    extract_with(diagram, EmbedCfg::default())
}

pub fn extract_with(diagram: &GridDiagram, cfg: EmbedCfg) -> Result<Extraction, DiagramError> {
    let traversal = traverse(diagram)?;
    let per_column = find_crossings(diagram, &traversal)?;
    let (topology, topo_lifted) = splice(diagram, &traversal, &per_column)?;
    let (curve, lifted) = embed(diagram, &topology, &topo_lifted, cfg)?;
    let crossings: Vec<Crossing> = per_column.into_iter().flatten().collect();
    tracing::debug!(
        size = diagram.size(),
        crossings = crossings.len(),
        vertices = curve.len(),
        "curve extracted"
    );
    Ok(Extraction {
        traversal,
        topology,
        crossings,
        lifted,
        curve,
    })
}

/// Just the curve.
pub fn extract_curve(diagram: &GridDiagram) -> Result<PolygonalCurve, DiagramError> {
    extract(diagram).map(|e| e.curve)
}

impl GridDiagram {
    /// Closed polyline for this diagram; see [`extract`].
    pub fn generate_curve(&self) -> Result<PolygonalCurve, DiagramError> {
        extract_curve(self)
    }
}

#[cfg(test)]
mod tests;
