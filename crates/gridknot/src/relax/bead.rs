use crate::geom::Vec3;

/// Particle bound to one curve vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    /// Vertex index on the rope.
    pub index: usize,
    pub position: Vec3,
    /// Position before the latest integration; the guard reverts to it.
    pub prev_position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Ring neighbors (wrapped vertex indices).
    pub left: usize,
    pub right: usize,
    /// Set when the latest move was reverted by the collision guard.
    pub stuck: bool,
}

impl Bead {
    pub fn new(index: usize, position: Vec3, left: usize, right: usize) -> Self {
        Self {
            index,
            position,
            prev_position: position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            left,
            right,
            stuck: false,
        }
    }

    #[inline]
    pub fn is_neighbor(&self, other: usize) -> bool {
        other == self.left || other == self.right
    }

    /// Semi-implicit damped Euler step; the displacement is capped at `d_max`.
    pub(super) fn integrate(&mut self, force: Vec3, mass: f64, damping: f64, d_max: f64) {
        self.acceleration += force / mass;
        self.velocity = (self.velocity + self.acceleration) * damping;
        self.acceleration = Vec3::zeros();
        self.prev_position = self.position;
        let mut delta = self.velocity;
        let len = delta.norm();
        if len > d_max {
            delta *= d_max / len;
        }
        self.position += delta;
    }

    /// Undo the latest integration; velocity is kept.
    #[inline]
    pub(super) fn revert(&mut self) {
        self.position = self.prev_position;
    }

    /// Back to `rest` with no motion.
    pub(super) fn reset_to(&mut self, rest: Vec3) {
        self.position = rest;
        self.prev_position = rest;
        self.velocity = Vec3::zeros();
        self.acceleration = Vec3::zeros();
        self.stuck = false;
    }
}
