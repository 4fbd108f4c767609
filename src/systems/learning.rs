//! Cross-trial learning: after each trial, add one observation of what the
//! ball player did inside the critical zone to the guess multiset.
//!
//! Observations are never decayed or capped, so the multiset drifts toward
//! the player's long-run mix and early trials keep their weight.

use log::debug;

use crate::systems::critical_points::CriticalGeometry;
use crate::systems::guess::{GuessWeights, Strategy};

/// Ball y samples whose x lies on a critical point.
pub fn critical_zone<'a>(xs: &'a [f64], ys: &'a [f64], geometry: &'a CriticalGeometry) -> impl Iterator<Item = f64> + 'a {
    xs.iter()
        .zip(ys)
        .filter(|(x, _)| geometry.is_critical(**x))
        .map(|(_, y)| *y)
}

/// Classify a y path by the first and last direction it moved in.
pub fn classify(path: impl IntoIterator<Item = f64>) -> Strategy {
    let ys: Vec<f64> = path.into_iter().collect();
    let mut signs = ys.windows(2).filter_map(|w| {
        let d = w[1] - w[0];
        if d > 0.0 {
            Some(1i8)
        } else if d < 0.0 {
            Some(-1i8)
        } else {
            None
        }
    });
    let Some(first) = signs.next() else {
        return Strategy::ContinueTracking;
    };
    let last = signs.last().unwrap_or(first);
    match (first, last) {
        (1, 1) => Strategy::UpUp,
        (-1, -1) => Strategy::DownDown,
        (1, -1) => Strategy::UpDown,
        (-1, 1) => Strategy::DownUp,
        _ => Strategy::ContinueTracking,
    }
}

/// Fold the previous trial into `weights`. Does nothing unless learning is
/// on and both histories are non-empty; returns the observation added.
pub fn update(
    weights: &mut GuessWeights,
    previous: Option<(&[f64], &[f64])>,
    geometry: &CriticalGeometry,
    enabled: bool,
) -> Option<Strategy> {
    if !enabled {
        return None;
    }
    let (xs, ys) = previous?;
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    let seen = classify(critical_zone(xs, ys, geometry));
    weights.add(seen);
    debug!("learned {seen}; weights now {weights}");
    Some(seen)
}
