/// Acceleration mechanics: how far the goalie may move this frame.
///
/// The goalie speeds up while it keeps moving flat out in one direction and
/// drops back to its base speed as soon as it stops or turns. Easing off
/// holds the current speed.
use crate::mechanics::motion::is_close;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Acceleration {
    pub factor: f64,
    pub base_speed: f64,
    pub increment: f64,
    /// Absolute tolerance when checking the last move used the full step.
    pub tolerance: f64,
}

impl Acceleration {
    pub fn new(base_speed: f64, increment: f64) -> Self {
        Self { factor: 1.0, base_speed, increment, tolerance: 1e-12 }
    }

    pub fn reset(&mut self) {
        self.factor = 1.0;
    }

    /// Update the factor from the goalie's y history and return this frame's
    /// max step. `last_max_step` is the max step granted on the previous frame.
    pub fn max_step(&mut self, bar_y: &[f64], last_max_step: Option<f64>) -> f64 {
        let n = bar_y.len();
        let steady = n >= 3 && {
            let d1 = bar_y[n - 1] - bar_y[n - 2];
            let d2 = bar_y[n - 2] - bar_y[n - 3];
            !is_close(bar_y[n - 1], bar_y[n - 2], 1e-5, 1e-8) && d1.signum() == d2.signum() && d2 != 0.0
        };
        if steady {
            let used = (bar_y[n - 1] - bar_y[n - 2]).abs();
            if last_max_step.is_some_and(|m| is_close(m, used, 1e-5, self.tolerance)) {
                self.factor += self.increment;
            }
        } else {
            self.factor = 1.0;
        }
        self.factor * self.base_speed
    }
}
