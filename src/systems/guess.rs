//! Guess strategies and the per-frame commitment state machine.
//!
//! Before the ball reaches the first inflection point the goalie simply
//! tracks it. At the first frame past it, one strategy is drawn from the
//! weighted multiset (after ruling out guesses that would run into a screen
//! edge) and stays locked until the trial ends.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{GoalieError, Result};
use crate::mechanics::stoch;
use crate::systems::critical_points::CriticalGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    ContinueTracking,
    UpUp,
    UpDown,
    DownUp,
    DownDown,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ContinueTracking,
        Strategy::UpUp,
        Strategy::UpDown,
        Strategy::DownUp,
        Strategy::DownDown,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The short label used in logs and recorded data.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::ContinueTracking => "react",
            Strategy::UpUp => "^^",
            Strategy::UpDown => "^v",
            Strategy::DownUp => "v^",
            Strategy::DownDown => "vv",
        }
    }

    /// First leg heads down.
    pub fn starts_down(self) -> bool {
        matches!(self, Strategy::DownDown | Strategy::DownUp)
    }

    /// First leg heads up.
    pub fn starts_up(self) -> bool {
        matches!(self, Strategy::UpUp | Strategy::UpDown)
    }

    /// Where to head, given the reacted ball position and the ball's
    /// remaining vertical range at that x.
    pub fn destination(self, reacted_x: f64, reacted_y: f64, max_range: f64, second_inflection: f64) -> f64 {
        let before_switch = reacted_x < second_inflection;
        match self {
            Strategy::ContinueTracking => reacted_y,
            Strategy::DownDown => reacted_y - max_range,
            Strategy::UpUp => reacted_y + max_range,
            Strategy::DownUp if before_switch => reacted_y - max_range,
            Strategy::DownUp => reacted_y + max_range,
            Strategy::UpDown if before_switch => reacted_y + max_range,
            Strategy::UpDown => reacted_y - max_range,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = GoalieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "react" | "continue-tracking" => Ok(Strategy::ContinueTracking),
            "^^" | "up-up" => Ok(Strategy::UpUp),
            "^v" | "up-down" => Ok(Strategy::UpDown),
            "v^" | "down-up" => Ok(Strategy::DownUp),
            "vv" | "down-down" => Ok(Strategy::DownDown),
            other => Err(GoalieError::UnknownStrategyLabel(other.to_string())),
        }
    }
}

/// Occurrence count per strategy: a weighted multiset kept as an explicit
/// count table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessWeights {
    counts: [u64; 5],
}

impl GuessWeights {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Each of `labels` seeded `strength` times.
    pub fn seeded(labels: &[Strategy], strength: u32) -> Self {
        let mut w = Self::empty();
        for s in labels {
            w.counts[s.index()] += u64::from(strength);
        }
        w
    }

    /// Build from label strings; any unknown label is rejected.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut w = Self::empty();
        for l in labels {
            w.add(l.parse()?);
        }
        Ok(w)
    }

    pub fn add(&mut self, s: Strategy) {
        self.counts[s.index()] += 1;
    }

    pub fn count(&self, s: Strategy) -> u64 {
        self.counts[s.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn probability(&self, s: Strategy) -> f64 {
        match self.total() {
            0 => 0.0,
            t => self.count(s) as f64 / t as f64,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Strategy, u64)> + '_ {
        Strategy::ALL.iter().map(|s| (*s, self.count(*s)))
    }

    /// Copy with every strategy matching `exclude` zeroed out.
    pub fn excluding(&self, exclude: impl Fn(Strategy) -> bool) -> Self {
        let mut w = self.clone();
        for s in Strategy::ALL {
            if exclude(s) {
                w.counts[s.index()] = 0;
            }
        }
        w
    }

    /// One strategy, drawn in proportion to its count.
    pub fn draw<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<Strategy> {
        stoch::weighted_index(rng, &self.counts).map(|i| Strategy::ALL[i])
    }
}

impl fmt::Display for GuessWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(s, c)| format!("{s}:{c}")).collect();
        write!(f, "{{{}}}", parts.join(" "))
    }
}

/// Screen limits used to rule out guesses that head into an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLimits {
    pub screen_half_height: f64,
    pub bar_half_length: f64,
}

impl EdgeLimits {
    /// Too close to the bottom to guess that the ball goes further down.
    pub fn near_bottom(&self, y: f64) -> bool {
        y < -self.screen_half_height + self.bar_half_length
    }

    /// Too close to the top to guess that it goes further up. The ceiling
    /// sits at half the screen half-height.
    pub fn near_top(&self, y: f64) -> bool {
        y > self.screen_half_height / 2.0 - self.bar_half_length
    }

    /// `weights` minus the labels ruled out at height `y`.
    pub fn admissible(&self, weights: &GuessWeights, y: f64) -> GuessWeights {
        if self.near_bottom(y) {
            weights.excluding(Strategy::starts_down)
        } else if self.near_top(y) {
            weights.excluding(Strategy::starts_up)
        } else {
            weights.clone()
        }
    }
}

/// The part of a trial the engine itself keeps: this trial's lag and, once
/// the ball is past the first inflection point, the locked strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrialState {
    pub lag: f64,
    pub strategy: Option<Strategy>,
}

impl TrialState {
    pub fn new(lag: f64) -> Self {
        Self { lag, strategy: None }
    }
}

/// Strategy and destination for one frame.
pub fn decide<R: RngCore + ?Sized>(
    reacted_x: f64,
    reacted_y: f64,
    geometry: &CriticalGeometry,
    weights: &GuessWeights,
    edges: &EdgeLimits,
    trial: &mut TrialState,
    rng: &mut R,
) -> (Strategy, f64) {
    let inflection = geometry.inflection();
    let strategy = if reacted_x < inflection.first {
        Strategy::ContinueTracking
    } else if let Some(locked) = trial.strategy {
        locked
    } else {
        let pool = edges.admissible(weights, reacted_y);
        let drawn = pool.draw(rng).unwrap_or(Strategy::ContinueTracking);
        debug!("committing to {drawn} at x={reacted_x:.1}, y={reacted_y:.1} from {pool}");
        trial.strategy = Some(drawn);
        drawn
    };

    let dest = match strategy {
        Strategy::ContinueTracking => reacted_y,
        s => s.destination(reacted_x, reacted_y, geometry.ball_range_at(reacted_x), inflection.second),
    };
    trace!("x={reacted_x:.1} y={reacted_y:.1} -> {strategy} dest={dest:.1}");
    (strategy, dest)
}
