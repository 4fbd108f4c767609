/// Motion mechanics: bounded steps, accelerating reach, float matching.

/// One legal step toward `dest`: cur + clamp(dest - cur, -max_step, max_step).
/// A negative or NaN `max_step` means the goalie cannot move this frame.
#[inline]
pub fn bounded_move(dest: f64, cur: f64, max_step: f64) -> f64 {
    let m = max_step.max(0.0);
    let delta = dest - cur;
    if delta.abs() <= m { dest } else { cur + m.copysign(delta) }
}

/// Total distance covered over `moves` further moves in one direction.
///
/// The series has `moves + 1` terms: two at the base rate, then each term's
/// rate factor grows by `incr`, i.e. `base * (1 + max(k - 1, 0) * incr)`,
/// summed in closed form.
#[inline]
pub fn accelerating_reach(base: f64, incr: f64, moves: usize) -> f64 {
    let m = moves as f64;
    base * ((m + 1.0) + incr * m * (m - 1.0) / 2.0)
}

/// Number of samples in `start, start + step, ...` strictly below `stop`.
#[inline]
pub fn step_count(start: f64, stop: f64, step: f64) -> usize {
    if step <= 0.0 || stop <= start {
        return 0;
    }
    // Shave off accumulated rounding so (200 - -200) / 10 stays 40, not 41.
    let n = ((stop - start) / step - 1e-9).ceil();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// numpy-style closeness: |a - b| <= atol + rtol * |b|.
#[inline]
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/// `is_close` with numpy's default tolerances.
#[inline]
pub fn close(a: f64, b: f64) -> bool {
    is_close(a, b, 1e-5, 1e-8)
}

/// Index of the entry of an ascending slice nearest to `x`, if it is `close`.
pub fn nearest_close(sorted: &[f64], x: f64) -> Option<usize> {
    if sorted.is_empty() || x.is_nan() {
        return None;
    }
    let hi = sorted.partition_point(|v| *v < x);
    let best = match (hi.checked_sub(1), sorted.get(hi)) {
        (Some(lo), Some(up)) => {
            if (x - sorted[lo]).abs() <= (up - x).abs() { lo } else { hi }
        }
        (Some(lo), None) => lo,
        (None, _) => hi,
    };
    close(x, sorted[best]).then_some(best)
}
