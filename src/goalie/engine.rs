//! The goalie: one owner for the critical geometry, the guess multiset, the
//! lag model and the RNG, with a per-frame and a per-trial entry point.
//!
//! ```text
//! start_trial(prev ball path) ── learn ──► weights
//!                              └─ draw ──► lag
//! decide(history, y, max_step)
//!     reaction::resolve (x, y) ─► guess::decide ─► bounded_move ─► next y
//! ```

use std::fmt;

use bevy_prng::WyRand;
use log::debug;
use rand_core::SeedableRng;

use crate::config::{FieldConfig, GoalieConfig, StrategyMode};
use crate::error::Result;
use crate::mechanics::motion::bounded_move;
use crate::systems::critical_points::{self, CriticalGeometry};
use crate::systems::guess::{self, EdgeLimits, GuessWeights, Strategy, TrialState};
use crate::systems::lag::LagModel;
use crate::systems::{learning, reaction};

/// One frame's decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub strategy: Strategy,
    /// Where the goalie wanted to go.
    pub destination: f64,
    /// Where it actually goes this frame.
    pub next_y: f64,
}

pub struct Goalie {
    mode: StrategyMode,
    learning: bool,
    prior_strength: u32,
    field: FieldConfig,
    geometry: CriticalGeometry,
    weights: GuessWeights,
    lag: LagModel,
    trial: TrialState,
    rng: WyRand,
}

impl Goalie {
    pub fn new(field: FieldConfig, cfg: GoalieConfig, seed: u64) -> Result<Self> {
        cfg.validate()?;
        let cfg = cfg.normalized();
        let lag = LagModel::new(cfg.lag)?;
        let geometry = critical_points::compute(&field, lag.representative())?;

        let labels: &[Strategy] = match (cfg.mode, cfg.seed_stutter_steps) {
            (StrategyMode::Reactive, _) => &[Strategy::ContinueTracking],
            (StrategyMode::Guessing, false) => &[Strategy::ContinueTracking, Strategy::UpUp, Strategy::DownDown],
            (StrategyMode::Guessing, true) => &Strategy::ALL,
        };
        let weights = GuessWeights::seeded(labels, cfg.prior_strength);
        debug!("new {:?} goalie (learning={}), weights {weights}", cfg.mode, cfg.learning);

        Ok(Self {
            mode: cfg.mode,
            learning: cfg.learning,
            prior_strength: cfg.prior_strength,
            field,
            geometry,
            weights,
            lag,
            trial: TrialState::default(),
            rng: WyRand::from_seed(seed.to_le_bytes()),
        })
    }

    /// Reset per-trial state, learn from the previous trial's ball path when
    /// learning is on, and draw this trial's lag.
    pub fn start_trial(&mut self, previous: Option<(&[f64], &[f64])>) -> f64 {
        learning::update(&mut self.weights, previous, &self.geometry, self.learning);
        let lag = self.lag.sample(&mut self.rng);
        self.trial = TrialState::new(lag);
        debug!("trial lag {lag:.4}s");
        lag
    }

    /// Where to move this frame, given the ball history so far.
    pub fn decide(
        &mut self,
        ball_x: &[f64],
        ball_y: &[f64],
        times: &[f64],
        current_y: f64,
        max_step: f64,
    ) -> Result<Move> {
        let reacted_x = reaction::resolve(ball_x, times, self.trial.lag)?;
        let reacted_y = reaction::resolve(ball_y, times, self.trial.lag)?;
        let edges = self.edges();
        let (strategy, destination) = guess::decide(
            reacted_x,
            reacted_y,
            &self.geometry,
            &self.weights,
            &edges,
            &mut self.trial,
            &mut self.rng,
        );
        Ok(Move { strategy, destination, next_y: bounded_move(destination, current_y, max_step) })
    }

    fn edges(&self) -> EdgeLimits {
        EdgeLimits {
            screen_half_height: self.field.screen_half_height,
            bar_half_length: self.field.bar_half_length,
        }
    }

    pub fn mode(&self) -> StrategyMode {
        self.mode
    }

    pub fn learning(&self) -> bool {
        self.learning
    }

    pub fn prior_strength(&self) -> u32 {
        self.prior_strength
    }

    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    pub fn geometry(&self) -> &CriticalGeometry {
        &self.geometry
    }

    pub fn weights(&self) -> &GuessWeights {
        &self.weights
    }

    pub fn lag_this_trial(&self) -> f64 {
        self.trial.lag
    }

    /// `None` until the ball passes the first inflection point.
    pub fn strategy_this_trial(&self) -> Option<Strategy> {
        self.trial.strategy
    }
}

impl fmt::Debug for Goalie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Goalie")
            .field("mode", &self.mode)
            .field("learning", &self.learning)
            .field("prior_strength", &self.prior_strength)
            .field("weights", &self.weights)
            .field("trial", &self.trial)
            .finish_non_exhaustive()
    }
}
