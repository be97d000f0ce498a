//! Grid diagrams and Cromwell moves.
//!
//! Purpose
//! - `GridDiagram`: the N×N table of X/O/blank cells that is the single source
//!   of truth for the knot's topology.
//! - Four invariant-preserving edits (`translate`, `commute`, `stabilize`,
//!   `destabilize`), each returning a typed `CromwellError` on rejection.
//! - Random single-component diagrams for tests, benches, and the CLI.
//!
//! Code cross-refs: `extract::extract` consumes a validated `GridDiagram`.

mod error;
mod grid;
mod moves;
pub mod rand;
pub mod samples;
mod types;

pub use error::{CromwellError, DiagramError};
pub use grid::GridDiagram;
pub use moves::CromwellMove;
pub use self::rand::{random_knot_diagram, random_knot_diagram_seeded};
pub use types::{Axis, Corner, Direction, Entry, ParseTokenError};

#[cfg(test)]
mod tests;
