//! Which past ball sample the goalie is reacting to.

use crate::error::{GoalieError, Result};

/// Index of the timestamp closest to `times.last() - lag`; ties go to the
/// earliest entry.
pub fn lagged_index(times: &[f64], lag: f64) -> Option<usize> {
    let t_end = *times.last()?;
    let target = t_end - lag;
    let mut best: Option<(usize, f64)> = None;
    for (i, t) in times.iter().enumerate() {
        let d = (t - target).abs();
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// The position the goalie sees at the latest timestamp, `lag` seconds late.
///
/// Call once per axis; the match is made on time, not on array position.
pub fn resolve(positions: &[f64], times: &[f64], lag: f64) -> Result<f64> {
    if positions.is_empty() || positions.len() != times.len() {
        return Err(GoalieError::InvalidHistory { positions: positions.len(), times: times.len() });
    }
    let i = lagged_index(times, lag)
        .ok_or(GoalieError::InvalidHistory { positions: positions.len(), times: times.len() })?;
    Ok(positions[i])
}
