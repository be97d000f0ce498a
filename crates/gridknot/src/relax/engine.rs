//! Bead-spring relaxation with a per-bead collision guard.

use crate::geom::{PolygonalCurve, Segment, Vec3};

use super::bead::Bead;
use super::params::{RelaxError, SimulationParams};

/// Smallest curve the engine accepts: below four vertices every pair of
/// segments shares an endpoint and nothing can be guarded.
pub const MIN_VERTICES: usize = 4;

/// Outcome of one [`RelaxationEngine::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Steps taken so far, this one included.
    pub step: usize,
    /// Beads whose move was kept.
    pub free: usize,
    /// Beads reverted by the collision guard.
    pub stuck: usize,
    /// Largest kept displacement.
    pub max_displacement: f64,
}

/// Owns the working curve (`rope`), its rest positions (`anchors`) and one
/// bead per vertex.
///
/// Invariant: if the starting rope keeps every pair of segments that share
/// no endpoint at least `d_close` apart, every step preserves that.
#[derive(Clone, Debug)]
pub struct RelaxationEngine {
    rope: PolygonalCurve,
    anchors: PolygonalCurve,
    beads: Vec<Bead>,
    params: SimulationParams,
    anchored: bool,
    steps: usize,
}

impl RelaxationEngine {
    pub fn new(curve: PolygonalCurve, params: SimulationParams) -> Result<Self, RelaxError> {
        params.validate()?;
        check_len(&curve)?;
        let beads = build_beads(&curve);
        tracing::debug!(vertices = curve.len(), "relaxation engine built");
        Ok(Self {
            anchors: curve.clone(),
            rope: curve,
            beads,
            params,
            anchored: true,
            steps: 0,
        })
    }

    /// Replaces the curve (new topology): rope, anchors, and beads are rebuilt
    /// from scratch and the step counter restarts.
    pub fn rebuild(&mut self, curve: PolygonalCurve) -> Result<(), RelaxError> {
        check_len(&curve)?;
        self.beads = build_beads(&curve);
        self.anchors = curve.clone();
        self.rope = curve;
        self.steps = 0;
        tracing::debug!(vertices = self.rope.len(), "relaxation engine rebuilt");
        Ok(())
    }

    /// Puts every bead back on its anchor, at rest and unstuck. The topology
    /// is unchanged and the step counter restarts.
    pub fn reset(&mut self) {
        for (bead, &rest) in self.beads.iter_mut().zip(self.anchors.vertices()) {
            bead.reset_to(rest);
        }
        self.rope = self.anchors.clone();
        self.steps = 0;
        tracing::debug!(vertices = self.rope.len(), "relaxation engine reset");
    }

    /// Advances the simulation by one step.
    ///
    /// Forces come from the positions at the start of the step. Beads then
    /// move in index order; each move is checked against the current positions
    /// of all other beads and reverted if it brings one of the bead's two
    /// segments within `d_close` of a segment it shares no endpoint with.
    pub fn step(&mut self) -> StepReport {
        let p = self.params;
        let mut positions: Vec<Vec3> = self.beads.iter().map(|b| b.position).collect();
        let forces: Vec<Vec3> = (0..self.beads.len())
            .map(|i| self.force_on(i, &positions))
            .collect();

        let mut report = StepReport::default();
        for (i, force) in forces.into_iter().enumerate() {
            let bead = &mut self.beads[i];
            bead.integrate(force, p.mass, p.damping, p.d_max);
            positions[i] = bead.position;
            if too_close(&self.rope, &positions, bead.left, i, p.d_close) {
                bead.revert();
                bead.stuck = true;
                positions[i] = bead.position;
                report.stuck += 1;
            } else {
                bead.stuck = false;
                report.free += 1;
                let moved = (bead.position - bead.prev_position).norm();
                report.max_displacement = report.max_displacement.max(moved);
            }
        }
        self.rope.set_vertices(positions);
        self.steps += 1;
        report.step = self.steps;
        tracing::trace!(
            step = report.step,
            free = report.free,
            stuck = report.stuck,
            max_displacement = report.max_displacement,
            "relaxation step"
        );
        report
    }

    /// Runs `steps` steps and returns the last report.
    pub fn run(&mut self, steps: usize) -> Option<StepReport> {
        (0..steps).map(|_| self.step()).last()
    }

    /// Net force on bead `i` for the given positions.
    fn force_on(&self, i: usize, positions: &[Vec3]) -> Vec3 {
        let p = &self.params;
        let bead = &self.beads[i];
        let here = positions[i];
        let mut force = Vec3::zeros();
        for (j, &there) in positions.iter().enumerate() {
            if j == i {
                continue;
            }
            let d = there - here;
            let r = d.norm();
            if r < p.epsilon {
                continue;
            }
            let dir = d / r;
            if bead.is_neighbor(j) {
                force += dir * (p.h * r.powf(1.0 + p.beta));
            } else {
                force -= dir * (p.k * r.powf(-(2.0 + p.alpha)));
            }
        }
        if self.anchored {
            let d = self.anchors.vertices()[i] - here;
            let r = d.norm();
            if r >= p.epsilon {
                force += d / r * (p.anchor_weight * p.h * r.powf(1.0 + p.beta));
            }
        }
        force
    }

    #[inline]
    pub fn rope(&self) -> &PolygonalCurve {
        &self.rope
    }
    #[inline]
    pub fn anchors(&self) -> &PolygonalCurve {
        &self.anchors
    }
    #[inline]
    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }
    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SimulationParams) -> Result<(), RelaxError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    #[inline]
    pub fn anchored(&self) -> bool {
        self.anchored
    }
    /// Turns the pull toward the rest positions on or off.
    #[inline]
    pub fn set_anchored(&mut self, anchored: bool) {
        self.anchored = anchored;
    }

    /// `1` for every bead whose latest move was reverted, else `0`.
    pub fn stuck_flags(&self) -> Vec<u8> {
        self.beads.iter().map(|b| u8::from(b.stuck)).collect()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.beads.len()
    }
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps
    }
}

fn check_len(curve: &PolygonalCurve) -> Result<(), RelaxError> {
    if curve.len() < MIN_VERTICES {
        return Err(RelaxError::TooFewVertices {
            found: curve.len(),
            min: MIN_VERTICES,
        });
    }
    Ok(())
}

fn build_beads(curve: &PolygonalCurve) -> Vec<Bead> {
    curve
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let (left, right) = curve.neighbors(i);
            Bead::new(i, pos, left, right)
        })
        .collect()
}

#[inline]
fn segment_at(positions: &[Vec3], index: usize) -> Segment {
    let n = positions.len();
    Segment::new(positions[index % n], positions[(index + 1) % n])
}

/// `true` if segment `left` (left neighbor → bead) or segment `own` (bead →
/// right neighbor) is closer than `d_close` to any segment sharing no endpoint
/// with it. `topology` only supplies the ring structure.
fn too_close(
    topology: &PolygonalCurve,
    positions: &[Vec3],
    left: usize,
    own: usize,
    d_close: f64,
) -> bool {
    [left, own].into_iter().any(|s| {
        let seg = segment_at(positions, s);
        (0..positions.len())
            .filter(|&t| !topology.segments_share_endpoint(s, t))
            .any(|t| seg.distance(&segment_at(positions, t)) < d_close)
    })
}
