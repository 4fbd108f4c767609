//! Critical-point geometry.
//!
//! Walks the ball's x positions from its start to the goalie's x in ball-speed
//! steps and compares how far the ball could still go vertically with how far
//! the goalie could still get, accelerating flat out, once its reaction lag is
//! accounted for. Positions where the goalie can no longer keep up are
//! critical; the goalie commits to a guess one step before the first of them
//! and may switch direction two steps after it.
//!
//! Computed once per goalie and read-only afterwards.

use log::debug;

use crate::config::FieldConfig;
use crate::error::{GoalieError, Result};
use crate::mechanics::motion::{accelerating_reach, nearest_close, step_count};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inflection {
    /// Commit to a guess from here on.
    pub first: f64,
    /// Two-part guesses switch direction from here on.
    pub second: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CriticalGeometry {
    ball_x: Vec<f64>,
    ball_range: Vec<f64>,
    bar_range: Vec<f64>,
    critical_points: Vec<f64>,
    inflection: Inflection,
    lag_steps: usize,
    bar_x: f64,
    half_height: f64,
}

/// Build the geometry for `field`, assuming a reaction lag of
/// `lag_upper_bound` seconds.
pub fn compute(field: &FieldConfig, lag_upper_bound: f64) -> Result<CriticalGeometry> {
    field.validate()?;
    if !lag_upper_bound.is_finite() || lag_upper_bound < 0.0 {
        return Err(GoalieError::lag("lag bound for geometry must be a non-negative number"));
    }
    let half = field.screen_half_height;
    let n = step_count(field.ball_start_x, field.bar_x, field.ball_speed);

    let ball_x: Vec<f64> = (0..n)
        .map(|i| field.ball_start_x + i as f64 * field.ball_speed)
        .collect();

    // The ball's vertical speed is capped at its horizontal speed, so the
    // horizontal distance left doubles as the vertical range left.
    let ball_range: Vec<f64> = ball_x.iter().map(|x| (field.bar_x - x).clamp(0.0, half)).collect();

    let bar_reach: Vec<f64> = ball_x
        .iter()
        .map(|x| {
            let moves = step_count(*x, field.bar_x, field.ball_speed);
            accelerating_reach(field.bar_base_speed, field.bar_accel_incr, moves).clamp(0.0, half)
        })
        .collect();

    let lag_steps = ((lag_upper_bound / field.refresh_interval).round() as usize).max(1);
    let bar_range: Vec<f64> = (0..n)
        .map(|i| bar_reach.get(i + lag_steps).copied().unwrap_or(0.0))
        .collect();

    let critical_points: Vec<f64> = ball_x
        .iter()
        .zip(&bar_range)
        .zip(&ball_range)
        .filter(|((x, bar), ball)| **x > **bar + field.bar_half_length && **ball < half)
        .map(|((x, _), _)| *x)
        .collect();

    let Some(&first_crit) = critical_points.first() else {
        return Err(GoalieError::NoCriticalPoints {
            ball_start_x: field.ball_start_x,
            bar_x: field.bar_x,
        });
    };
    let inflection = Inflection {
        first: first_crit - field.ball_speed,
        second: first_crit + 2.0 * field.ball_speed,
    };

    debug!(
        "critical geometry: {} samples, {} critical points from x={first_crit}, lag shift {lag_steps} steps, inflection {:?}",
        n,
        critical_points.len(),
        inflection
    );

    Ok(CriticalGeometry {
        ball_x,
        ball_range,
        bar_range,
        critical_points,
        inflection,
        lag_steps,
        bar_x: field.bar_x,
        half_height: half,
    })
}

impl CriticalGeometry {
    /// Ascending critical x positions (never empty).
    pub fn critical_points(&self) -> &[f64] {
        &self.critical_points
    }

    pub fn inflection(&self) -> Inflection {
        self.inflection
    }

    /// Sampled ball x positions, ascending.
    pub fn ball_x(&self) -> &[f64] {
        &self.ball_x
    }

    /// Vertical range the ball could still cover, per sample.
    pub fn ball_range(&self) -> &[f64] {
        &self.ball_range
    }

    /// Vertical range the goalie could still cover, per sample, lag-shifted.
    pub fn bar_range(&self) -> &[f64] {
        &self.bar_range
    }

    pub fn lag_steps(&self) -> usize {
        self.lag_steps
    }

    /// Ball range at `x`, read from the nearest sample when `x` is one of
    /// them up to float drift, otherwise from the closed form.
    pub fn ball_range_at(&self, x: f64) -> f64 {
        match nearest_close(&self.ball_x, x) {
            Some(i) => self.ball_range[i],
            None => (self.bar_x - x).clamp(0.0, self.half_height),
        }
    }

    pub fn is_critical(&self, x: f64) -> bool {
        nearest_close(&self.critical_points, x).is_some()
    }
}
