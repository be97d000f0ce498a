//! Simulation constants and the engine's error type.

use std::fmt;

/// Coefficients of the bead-spring model.
///
/// Neighboring beads attract with magnitude `h·r^(1+β)`, all other pairs
/// repel with `k·r^-(2+α)`, and (when anchoring is on) each bead is pulled
/// toward its rest position with `anchor_weight·h·r^(1+β)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Spring coefficient.
    pub h: f64,
    /// Spring exponent offset.
    pub beta: f64,
    /// Repulsion coefficient.
    pub k: f64,
    /// Repulsion exponent offset.
    pub alpha: f64,
    /// Velocity multiplier applied every step, in `[0, 1]`.
    pub damping: f64,
    pub mass: f64,
    pub anchor_weight: f64,
    /// Largest displacement of a bead in one step.
    pub d_max: f64,
    /// Smallest allowed distance between segments that share no endpoint.
    pub d_close: f64,
    /// Pairs closer than this exert no force on each other.
    pub epsilon: f64,
}

/// Segment length the defaults are tuned for.
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.25;

impl Default for SimulationParams {
    fn default() -> Self {
        Self::for_segment_length(DEFAULT_SEGMENT_LENGTH)
    }
}

impl SimulationParams {
    /// Defaults with the step cap and collision distance scaled to a typical
    /// segment length: `d_max = len / 40`, `d_close = len / 4`.
    pub fn for_segment_length(len: f64) -> Self {
        Self {
            h: 1.0,
            beta: 1.0,
            k: 1.0,
            alpha: 4.0,
            damping: 0.25,
            mass: 1.0,
            anchor_weight: 0.01,
            d_max: 0.025 * len,
            d_close: 0.25 * len,
            epsilon: 1e-3,
        }
    }

    /// Checks that every coefficient is finite and in range.
    pub fn validate(&self) -> Result<(), RelaxError> {
        let fields = [
            ("h", self.h),
            ("beta", self.beta),
            ("k", self.k),
            ("alpha", self.alpha),
            ("damping", self.damping),
            ("mass", self.mass),
            ("anchor_weight", self.anchor_weight),
            ("d_max", self.d_max),
            ("d_close", self.d_close),
            ("epsilon", self.epsilon),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RelaxError::invalid(format!("{name} must be finite, got {v}")));
        }
        if self.mass <= 0.0 {
            return Err(RelaxError::invalid("mass must be positive"));
        }
        if self.d_max <= 0.0 {
            return Err(RelaxError::invalid("d_max must be positive"));
        }
        if self.epsilon <= 0.0 {
            return Err(RelaxError::invalid("epsilon must be positive"));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RelaxError::invalid("damping must lie in [0, 1]"));
        }
        for (name, v) in [
            ("h", self.h),
            ("k", self.k),
            ("anchor_weight", self.anchor_weight),
            ("d_close", self.d_close),
        ] {
            if v < 0.0 {
                return Err(RelaxError::invalid(format!("{name} must be non-negative")));
            }
        }
        Ok(())
    }
}

/// Why an engine could not be built.
#[derive(Clone, Debug, PartialEq)]
pub enum RelaxError {
    InvalidParams { reason: String },
    /// The curve is too short for the guard to have non-adjacent segments.
    TooFewVertices { found: usize, min: usize },
}

impl RelaxError {
    fn invalid(reason: impl Into<String>) -> Self {
        RelaxError::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RelaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelaxError::InvalidParams { reason } => {
                write!(f, "invalid simulation parameters: {reason}")
            }
            RelaxError::TooFewVertices { found, min } => {
                write!(f, "curve has {found} vertices, relaxation needs at least {min}")
            }
        }
    }
}

impl std::error::Error for RelaxError {}
