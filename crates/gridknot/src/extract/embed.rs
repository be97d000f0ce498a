//! Grid cells to 3D points, plus filler vertices along straight runs.

use crate::diagram::{DiagramError, GridDiagram};
use crate::geom::{PolygonalCurve, Vec3};

/// Placement of grid cells in space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbedCfg {
    /// Edge length of one grid cell.
    pub cell: f64,
    /// Height of crossing vertices above the grid plane.
    pub lift: f64,
}

impl Default for EmbedCfg {
    fn default() -> Self {
        Self {
            cell: 1.0,
            lift: 1.0,
        }
    }
}

impl EmbedCfg {
    /// Center of cell `(row, col)` on a grid centered at the origin; rows run
    /// downward (`-y`), columns to the right (`+x`).
    pub fn position(&self, size: usize, row: usize, col: usize, lifted: bool) -> Vec3 {
        let half = size as f64 / 2.0;
        let x = (col as f64 + 0.5 - half) * self.cell;
        let y = (half - row as f64 - 0.5) * self.cell;
        let z = if lifted { self.lift } else { 0.0 };
        Vec3::new(x, y, z)
    }
}

/// Builds the closed curve for a topology sequence (closing repeat included).
///
/// Every cell strictly between two consecutive entries gets a filler vertex
/// in the grid plane, so the curve has one vertex per cell step. The closing
/// repeat itself is not emitted. Returns the curve and a per-vertex lift flag.
pub fn embed(
    diagram: &GridDiagram,
    topology: &[usize],
    lifted: &[bool],
    cfg: EmbedCfg,
) -> Result<(PolygonalCurve, Vec<bool>), DiagramError> {
    let n = diagram.size();
    let mut curve = PolygonalCurve::default();
    let mut flags = Vec::new();
    for (w, pair) in topology.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let (r0, c0) = diagram.grid_position(from);
        let (r1, c1) = diagram.grid_position(to);
        let up = lifted.get(w).copied().unwrap_or(false);
        curve.push_vertex(cfg.position(n, r0, c0, up));
        flags.push(up);

        let fillers = if c0 == c1 {
            between(r0, r1)
        } else if r0 == r1 {
            between(c0, c1)
        } else {
            return Err(DiagramError::Crossing { from, to });
        };
        for k in fillers {
            let (r, c) = if c0 == c1 { (k, c0) } else { (r0, k) };
            curve.push_vertex(cfg.position(n, r, c, false));
            flags.push(false);
        }
    }
    Ok((curve, flags))
}

/// Values strictly between `a` and `b`, walking from `a` toward `b`.
fn between(a: usize, b: usize) -> impl Iterator<Item = usize> {
    let (lo, hi) = (a.min(b), a.max(b));
    let down = a > b;
    (lo + 1..hi).map(move |k| if down { lo + hi - k } else { k })
}
