//! Headless arena: ball kinematics, goalie bounds, outcome checks and a
//! fixed-clock trial runner for driving a [`Goalie`] without a display.
//!
//! Screen coordinates have the origin at the centre; y grows upward.

use log::{debug, info};

use crate::config::FieldConfig;
use crate::error::Result;
use crate::goalie::engine::Goalie;
use crate::mechanics::accel::Acceleration;
use crate::systems::guess::Strategy;

/// Ball speed, in px/s, at speed factor 1.
pub const BALL_VELOCITY: f64 = 1500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    /// Seconds per frame.
    pub frame_dur: f64,
    pub ball_radius: f64,
    pub bar_width: f64,
    pub bar_length: f64,
    pub ball_start: (f64, f64),
    pub bar_x: f64,
    pub bar_start_y: f64,
    /// Crossing this x scores.
    pub final_line: f64,
    /// Pixels per frame.
    pub ball_speed: f64,
    pub bar_base_speed: f64,
    pub bar_accel_incr: f64,
    /// The ball holds still for this long at the start of a trial.
    pub pause: f64,
}

impl Arena {
    /// Lay out the field for a `width` x `height` screen.
    pub fn from_screen(width: f64, height: f64, frame_dur: f64, speed_factor: f64) -> Self {
        let ball_radius = width / 128.0;
        let bar_x = width * 3.0 / 8.0;
        let ball_speed = BALL_VELOCITY * speed_factor * frame_dur;
        Self {
            width,
            height,
            frame_dur,
            ball_radius,
            bar_width: ball_radius,
            bar_length: height / 4.0,
            ball_start: (-width * 3.0 / 8.0, 0.0),
            bar_x,
            bar_start_y: 0.0,
            final_line: bar_x + 3.0 * ball_radius,
            ball_speed,
            bar_base_speed: ball_speed / 1.5,
            bar_accel_incr: ball_speed / 90.0,
            pause: 0.3,
        }
    }

    pub fn field(&self) -> FieldConfig {
        FieldConfig {
            ball_start_x: self.ball_start.0,
            ball_start_y: self.ball_start.1,
            bar_x: self.bar_x,
            ball_speed: self.ball_speed,
            bar_base_speed: self.bar_base_speed,
            bar_accel_incr: self.bar_accel_incr,
            bar_half_length: self.bar_length / 2.0,
            screen_half_height: self.height / 2.0,
            refresh_interval: self.frame_dur,
        }
    }

    /// Advance the ball one frame; `input` in [-1, 1] scales its vertical step.
    pub fn step_ball(&self, (x, y): (f64, f64), input: f64) -> (f64, f64) {
        let half_w = self.width / 2.0;
        let top = self.height / 2.0 - self.ball_radius;
        let x = (x + self.ball_speed).clamp(-half_w, half_w);
        let y = (y + self.ball_speed * input.clamp(-1.0, 1.0)).clamp(-top, top);
        (x, y)
    }

    /// Keep the whole bar on screen.
    pub fn clamp_bar(&self, y: f64) -> f64 {
        let lim = self.height / 2.0 - self.bar_length / 2.0;
        y.clamp(-lim, lim)
    }

    pub fn outcome(&self, (x, y): (f64, f64), bar_y: f64) -> Option<Outcome> {
        let r = self.ball_radius;
        let (hw, hl) = (self.bar_width / 2.0, self.bar_length / 2.0);
        let overlaps_x = x + r >= self.bar_x - hw && x - r <= self.bar_x + hw;
        let overlaps_y = y + r > bar_y - hl && y - r < bar_y + hl;
        if overlaps_x && overlaps_y {
            Some(Outcome::Blocked)
        } else if x + r > self.final_line {
            Some(Outcome::Scored)
        } else {
            None
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_screen(1920.0, 1080.0, 1.0 / 60.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Blocked,
    Scored,
    /// Hit the frame limit without either.
    Timeout,
}

/// What an opponent sees before steering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub time: f64,
    pub ball: (f64, f64),
    pub bar_y: f64,
}

/// The ball player.
pub trait Opponent {
    /// Vertical input in [-1, 1] for this frame.
    fn steer(&mut self, frame: &Frame) -> f64;
}

impl<F: FnMut(&Frame) -> f64> Opponent for F {
    fn steer(&mut self, frame: &Frame) -> f64 {
        self(frame)
    }
}

/// Canned ball players.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scripted {
    Straight,
    /// Full up from `from_x` on.
    Up { from_x: f64 },
    /// Full down from `from_x` on.
    Down { from_x: f64 },
    /// Full up from `from_x`, full down from `turn_x`.
    UpThenDown { from_x: f64, turn_x: f64 },
    /// Full down from `from_x`, full up from `turn_x`.
    DownThenUp { from_x: f64, turn_x: f64 },
}

impl Opponent for Scripted {
    fn steer(&mut self, frame: &Frame) -> f64 {
        let x = frame.ball.0;
        match *self {
            Scripted::Straight => 0.0,
            Scripted::Up { from_x } => if x >= from_x { 1.0 } else { 0.0 },
            Scripted::Down { from_x } => if x >= from_x { -1.0 } else { 0.0 },
            Scripted::UpThenDown { from_x, turn_x } => {
                if x >= turn_x { -1.0 } else if x >= from_x { 1.0 } else { 0.0 }
            }
            Scripted::DownThenUp { from_x, turn_x } => {
                if x >= turn_x { 1.0 } else if x >= from_x { -1.0 } else { 0.0 }
            }
        }
    }
}

/// Time-stamped ball positions of one trial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub times: Vec<f64>,
}

impl Trajectory {
    pub fn push(&mut self, (x, y): (f64, f64), t: f64) {
        self.xs.push(x);
        self.ys.push(y);
        self.times.push(t);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn as_path(&self) -> (&[f64], &[f64]) {
        (&self.xs, &self.ys)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrialRecord {
    pub lag: f64,
    pub strategy: Option<Strategy>,
    pub outcome: Outcome,
    pub ball: Trajectory,
    pub bar_y: Vec<f64>,
    pub destinations: Vec<f64>,
    pub max_steps: Vec<f64>,
}

/// Play one trial. Call [`Goalie::start_trial`] first.
///
/// Each frame: the opponent steers, the ball moves (after the pause), the
/// goalie decides from the history recorded so far, then the outcome is
/// checked and the frame is recorded.
pub fn play_trial<O: Opponent + ?Sized>(
    goalie: &mut Goalie,
    arena: &Arena,
    opponent: &mut O,
    max_frames: usize,
) -> Result<TrialRecord> {
    let mut ball = arena.ball_start;
    let mut bar_y = arena.bar_start_y;
    let mut accel = Acceleration::new(arena.bar_base_speed, arena.bar_accel_incr);
    let mut rec = TrialRecord {
        lag: goalie.lag_this_trial(),
        strategy: None,
        outcome: Outcome::Timeout,
        ball: Trajectory::default(),
        bar_y: Vec::new(),
        destinations: Vec::new(),
        max_steps: Vec::new(),
    };

    for index in 0..max_frames {
        let time = index as f64 * arena.frame_dur;
        let input = opponent.steer(&Frame { index, time, ball, bar_y });
        if time > arena.pause {
            ball = arena.step_ball(ball, input);
        }

        let max_step = accel.max_step(&rec.bar_y, rec.max_steps.last().copied());
        rec.max_steps.push(max_step);
        if !rec.ball.is_empty() {
            let mv = goalie.decide(&rec.ball.xs, &rec.ball.ys, &rec.ball.times, bar_y, max_step)?;
            rec.destinations.push(mv.destination);
            bar_y = mv.next_y;
        }
        bar_y = arena.clamp_bar(bar_y);

        let outcome = arena.outcome(ball, bar_y);
        rec.ball.push(ball, time);
        rec.bar_y.push(bar_y);
        if let Some(o) = outcome {
            rec.outcome = o;
            break;
        }
    }

    rec.strategy = goalie.strategy_this_trial();
    debug!(
        "trial over after {} frames: {:?} (lag {:.3}s, strategy {:?})",
        rec.ball.len(),
        rec.outcome,
        rec.lag,
        rec.strategy
    );
    Ok(rec)
}

/// Play `trials` trials in a row, feeding each one's ball path to the next
/// `start_trial` so a learning goalie can adapt.
pub fn run_trials<O: Opponent + ?Sized>(
    goalie: &mut Goalie,
    arena: &Arena,
    opponent: &mut O,
    trials: usize,
    max_frames: usize,
) -> Result<Vec<TrialRecord>> {
    let mut records: Vec<TrialRecord> = Vec::with_capacity(trials);
    for _ in 0..trials {
        goalie.start_trial(records.last().map(|r| r.ball.as_path()));
        records.push(play_trial(goalie, arena, opponent, max_frames)?);
    }
    let blocked = records.iter().filter(|r| r.outcome == Outcome::Blocked).count();
    info!("{} trials: {blocked} blocked, weights {}", records.len(), goalie.weights());
    Ok(records)
}
