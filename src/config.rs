//! Configuration surface: field geometry, lag model and goalie construction
//! parameters. Everything here is plain data with serde support, checked by
//! `validate()` before a goalie is built from it.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{GoalieError, Result};
use crate::systems::lag::LagDistribution;

/// Immutable field and motion parameters, shared read-only by every goalie
/// of a session. Positions are in pixels with the origin at screen centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub ball_start_x: f64,
    pub ball_start_y: f64,
    /// The goalie's (fixed) x position.
    pub bar_x: f64,
    /// Horizontal ball advance per step; also the ball's max vertical step.
    pub ball_speed: f64,
    pub bar_base_speed: f64,
    /// Growth of the goalie's speed factor per sustained step.
    pub bar_accel_incr: f64,
    pub bar_half_length: f64,
    pub screen_half_height: f64,
    /// Seconds per frame.
    pub refresh_interval: f64,
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.ball_start_x,
            self.ball_start_y,
            self.bar_x,
            self.ball_speed,
            self.bar_base_speed,
            self.bar_accel_incr,
            self.bar_half_length,
            self.screen_half_height,
            self.refresh_interval,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(GoalieError::field("all parameters must be finite"));
        }
        if self.ball_speed <= 0.0 {
            return Err(GoalieError::field("ball speed must be positive"));
        }
        if self.bar_base_speed <= 0.0 {
            return Err(GoalieError::field("bar base speed must be positive"));
        }
        if self.bar_accel_incr < 0.0 {
            return Err(GoalieError::field("bar acceleration increment must not be negative"));
        }
        if self.bar_half_length <= 0.0 || self.screen_half_height <= 0.0 {
            return Err(GoalieError::field("bar and screen half-lengths must be positive"));
        }
        if self.refresh_interval <= 0.0 {
            return Err(GoalieError::field("refresh interval must be positive"));
        }
        if self.bar_x <= self.ball_start_x {
            return Err(GoalieError::field("goalie must stand to the right of the ball start"));
        }
        Ok(())
    }
}

/// Reaction lag: `min_value + 0.1 * draw`, draw from `distribution` on [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LagConfig {
    pub min_value: f64,
    #[serde(default)]
    pub distribution: LagDistribution,
}

impl Default for LagConfig {
    fn default() -> Self {
        Self { min_value: 0.12, distribution: LagDistribution::default() }
    }
}

impl LagConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_value.is_finite() || self.min_value < 0.0 {
            return Err(GoalieError::lag("minimum lag must be a non-negative number of seconds"));
        }
        self.distribution.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMode {
    /// Track the lagged ball for the whole trial.
    Reactive,
    /// Track until the critical zone, then commit to a guess.
    Guessing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalieConfig {
    pub mode: StrategyMode,
    pub learning: bool,
    /// Copies of each base label in the initial multiset.
    pub prior_strength: u32,
    #[serde(default)]
    pub lag: LagConfig,
    /// Also seed up-down and down-up (normally only learned).
    #[serde(default)]
    pub seed_stutter_steps: bool,
}

impl Default for GoalieConfig {
    fn default() -> Self {
        Self {
            mode: StrategyMode::Guessing,
            learning: true,
            prior_strength: 1,
            lag: LagConfig::default(),
            seed_stutter_steps: false,
        }
    }
}

impl GoalieConfig {
    pub fn reactive() -> Self {
        Self { mode: StrategyMode::Reactive, learning: false, ..Self::default() }
    }

    pub fn guessing(learning: bool, prior_strength: u32) -> Self {
        Self { mode: StrategyMode::Guessing, learning, prior_strength, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prior_strength == 0 {
            return Err(GoalieError::InvalidPriorStrength { value: self.prior_strength });
        }
        self.lag.validate()
    }

    /// Apply the coercions a goalie is built with: a reactive goalie never
    /// learns, and without learning the prior strength is 1.
    pub fn normalized(mut self) -> Self {
        if self.mode == StrategyMode::Reactive && self.learning {
            warn!("reactive goalie does not learn; disabling learning");
            self.learning = false;
        }
        if !self.learning && self.prior_strength > 1 {
            warn!("prior strength {} is unused without learning; using 1", self.prior_strength);
            self.prior_strength = 1;
        }
        self
    }
}

/// A field plus the goalie that plays on it, e.g. loaded from a JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub field: FieldConfig,
    #[serde(default)]
    pub goalie: GoalieConfig,
    #[serde(default)]
    pub seed: u64,
}

impl SessionConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: SessionConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.field.validate()?;
        self.goalie.validate()
    }
}
