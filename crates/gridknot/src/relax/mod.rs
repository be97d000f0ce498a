//! Physics relaxation of an extracted curve.
//!
//! Purpose
//! - Smooth the blocky grid curve into a rounder knot without letting it pass
//!   through itself.
//!
//! Model
//! - One bead per vertex. Ring neighbors attract (`h·r^(1+β)`), every other
//!   pair repels (`k·r^-(2+α)`), and an optional weak spring pulls each bead
//!   toward its rest position.
//! - Damped semi-implicit Euler with a per-step displacement cap `d_max`.
//! - Collision guard: a bead's move is reverted when one of its two segments
//!   comes within `d_close` of a segment it shares no endpoint with. Since
//!   `d_max` is small compared to `d_close`, strands cannot tunnel through
//!   each other in one step.
//!
//! Single-threaded and deterministic: same curve and parameters give the same
//! trajectory.
//!
//! Code cross-refs: `extract::extract_curve` (typical input),
//! `geom::Segment::distance` (guard query).

mod bead;
mod engine;
mod params;

pub use bead::Bead;
pub use engine::{RelaxationEngine, StepReport, MIN_VERTICES};
pub use params::{RelaxError, SimulationParams, DEFAULT_SEGMENT_LENGTH};
