//! Reaction lag, redrawn once per trial.
//!
//! `lag = min_value + 0.1 * draw`, where `draw` comes from a bounded
//! distribution on [0, 1]. Draws use inverse-transform sampling on each
//! distribution's closed-form quantile, so the same function also answers
//! percentile queries such as the 75th-percentile lag used for geometry.

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::LagConfig;
use crate::error::{GoalieError, Result};
use crate::mechanics::stoch;

/// Scale applied to the [0, 1] draw.
pub const LAG_SPREAD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LagDistribution {
    #[default]
    Uniform,
    /// Triangular on [0, 1] peaking at `mode`.
    Triangular { mode: f64 },
    /// Kumaraswamy(a, b): beta-like shapes with a closed-form quantile.
    Kumaraswamy { a: f64, b: f64 },
    /// Always the same draw.
    Fixed { value: f64 },
}

impl LagDistribution {
    pub fn validate(&self) -> Result<()> {
        match *self {
            LagDistribution::Uniform => Ok(()),
            LagDistribution::Triangular { mode } if (0.0..=1.0).contains(&mode) => Ok(()),
            LagDistribution::Triangular { .. } => Err(GoalieError::lag("triangular mode must lie in [0, 1]")),
            LagDistribution::Kumaraswamy { a, b } if a > 0.0 && b > 0.0 && a.is_finite() && b.is_finite() => Ok(()),
            LagDistribution::Kumaraswamy { .. } => Err(GoalieError::lag("kumaraswamy shapes must be positive")),
            LagDistribution::Fixed { value } if (0.0..=1.0).contains(&value) => Ok(()),
            LagDistribution::Fixed { .. } => Err(GoalieError::lag("fixed draw must lie in [0, 1]")),
        }
    }

    /// Inverse CDF; `p` is clamped to [0, 1].
    pub fn quantile(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        let q = match *self {
            LagDistribution::Uniform => p,
            LagDistribution::Triangular { mode } => {
                if p < mode {
                    (p * mode).sqrt()
                } else {
                    1.0 - ((1.0 - p) * (1.0 - mode)).sqrt()
                }
            }
            LagDistribution::Kumaraswamy { a, b } => (1.0 - (1.0 - p).powf(1.0 / b)).powf(1.0 / a),
            LagDistribution::Fixed { value } => value,
        };
        q.clamp(0.0, 1.0)
    }

    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile(stoch::unit(rng))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagModel {
    min_value: f64,
    distribution: LagDistribution,
}

impl LagModel {
    pub fn new(cfg: LagConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { min_value: cfg.min_value, distribution: cfg.distribution })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn distribution(&self) -> LagDistribution {
        self.distribution
    }

    /// One lag, in seconds, for the coming trial.
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min_value + LAG_SPREAD * self.distribution.sample(rng)
    }

    /// Lag at the given percentile of the distribution.
    pub fn upper_bound(&self, percentile: f64) -> f64 {
        self.min_value + LAG_SPREAD * self.distribution.quantile(percentile)
    }

    /// The representative lag the critical geometry is built for.
    pub fn representative(&self) -> f64 {
        self.upper_bound(0.75)
    }
}
