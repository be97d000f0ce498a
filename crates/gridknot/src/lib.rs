//! Grid diagrams of knots, their 3D curves, and physical relaxation.
//!
//! Pipeline
//! - `diagram`: the N×N X/O grid, Cromwell moves, random knot diagrams.
//! - `extract`: traversal, crossing detection, and embedding into a closed
//!   polyline that never touches itself.
//! - `relax`: bead-spring relaxation of that polyline with a collision guard.
//! - `geom`: the polyline and segment types shared by the stages above.
//!
//! The crate does no I/O and holds no global state; file formats, logging
//! setup, and configuration files live in the `cli` crate.

pub mod diagram;
pub mod extract;
pub mod geom;
pub mod relax;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use diagram::{CromwellError, CromwellMove, DiagramError, GridDiagram};
pub use geom::{PolygonalCurve, Vec3};
pub use relax::{RelaxError, RelaxationEngine, SimulationParams};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::diagram::{
        random_knot_diagram, random_knot_diagram_seeded, Axis, Corner, CromwellError,
        CromwellMove, DiagramError, Direction, Entry, GridDiagram,
    };
    pub use crate::extract::{extract, extract_curve, extract_with, Crossing, EmbedCfg, Extraction};
    pub use crate::geom::{Bounds3, PolygonalCurve, Segment, Vec3};
    pub use crate::relax::{Bead, RelaxError, RelaxationEngine, SimulationParams, StepReport};
}
