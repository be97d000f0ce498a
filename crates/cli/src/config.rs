//! JSON run configuration for `relax`.
//!
//! Every field is optional. `params` holds per-coefficient overrides that are
//! applied on top of `SimulationParams::for_segment_length`, where the length
//! is `segment_length` if given, else the mean segment length of the curve.

use anyhow::{bail, Context, Result};
use gridknot::SimulationParams;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelaxConfig {
    pub steps: usize,
    /// Record a frame every this many steps (the first and last are always kept).
    pub record_every: usize,
    pub anchored: bool,
    /// Subdivisions per extracted segment before relaxing.
    pub refine: usize,
    pub segment_length: Option<f64>,
    pub params: ParamOverrides,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            record_every: 10,
            anchored: true,
            refine: 4,
            segment_length: None,
            params: ParamOverrides::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamOverrides {
    pub h: Option<f64>,
    pub beta: Option<f64>,
    pub k: Option<f64>,
    pub alpha: Option<f64>,
    pub damping: Option<f64>,
    pub mass: Option<f64>,
    pub anchor_weight: Option<f64>,
    pub d_max: Option<f64>,
    pub d_close: Option<f64>,
    pub epsilon: Option<f64>,
}

impl RelaxConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text).context("parsing relax config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_every == 0 {
            bail!("record_every must be at least 1");
        }
        if self.refine == 0 {
            bail!("refine must be at least 1");
        }
        if let Some(len) = self.segment_length {
            if !(len.is_finite() && len > 0.0) {
                bail!("segment_length must be positive, got {len}");
            }
        }
        Ok(())
    }

    /// Effective parameters for a curve whose mean segment length is
    /// `measured`.
    pub fn simulation_params(&self, measured: f64) -> SimulationParams {
        let base = SimulationParams::for_segment_length(self.segment_length.unwrap_or(measured));
        self.params.apply(base)
    }
}

impl ParamOverrides {
    pub fn apply(&self, base: SimulationParams) -> SimulationParams {
        SimulationParams {
            h: self.h.unwrap_or(base.h),
            beta: self.beta.unwrap_or(base.beta),
            k: self.k.unwrap_or(base.k),
            alpha: self.alpha.unwrap_or(base.alpha),
            damping: self.damping.unwrap_or(base.damping),
            mass: self.mass.unwrap_or(base.mass),
            anchor_weight: self.anchor_weight.unwrap_or(base.anchor_weight),
            d_max: self.d_max.unwrap_or(base.d_max),
            d_close: self.d_close.unwrap_or(base.d_close),
            epsilon: self.epsilon.unwrap_or(base.epsilon),
        }
    }
}

/// JSON view of the parameters for provenance sidecars.
pub fn params_json(p: &SimulationParams) -> Value {
    json!({
        "h": p.h,
        "beta": p.beta,
        "k": p.k,
        "alpha": p.alpha,
        "damping": p.damping,
        "mass": p.mass,
        "anchor_weight": p.anchor_weight,
        "d_max": p.d_max,
        "d_close": p.d_close,
        "epsilon": p.epsilon,
    })
}
