/*!
`penalty_goalie`: the decision engine of an autonomous goalie.

What it does
- A ball crosses the field under a player's control; the goalie, standing at
  a fixed x, must intercept it before it reaches the goal line. The goalie
  moves with bounded, accelerating steps and sees the ball with a lag.
- Precomputes the *critical points*: ball x positions past which the goalie
  can no longer catch up by tracking alone.
- Per frame, tracks the lagged ball until the first inflection point, then
  commits to one guess (`react`, `^^`, `^v`, `v^`, `vv`) drawn from a weighted
  multiset and holds it for the rest of the trial.
- Per trial, draws a new reaction lag and, when learning, adds what the ball
  player did in the critical zone to the multiset.

How to use (call surface only)
- Build a goalie: `Goalie::new(FieldConfig, GoalieConfig, seed)`.
- At each trial boundary: `goalie.start_trial(Some((&prev_xs, &prev_ys)))`
  (or `None` on the first trial) → this trial's lag.
- Each frame: `goalie.decide(&ball_xs, &ball_ys, &times, current_y, max_step)`
  → `Move { strategy, destination, next_y }`.
- With the `arena` feature, `goalie::arena::run_trials` plays whole trials
  against a scripted or closure opponent.

What it does NOT do
- No rendering, input devices, persistence or run-loop control. A trial that
  never ends is bounded by the caller.
*/

pub mod config;
pub mod error;
pub mod goalie;
pub mod mechanics;
pub mod systems;

pub use config::{FieldConfig, GoalieConfig, LagConfig, SessionConfig, StrategyMode};
pub use error::{GoalieError, Result};
pub use goalie::{Goalie, Move};
pub use mechanics::motion::bounded_move;
pub use systems::critical_points::{CriticalGeometry, Inflection};
pub use systems::guess::{GuessWeights, Strategy};
pub use systems::lag::{LagDistribution, LagModel};
