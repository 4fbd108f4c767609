// tests/reaction.rs
use penalty_goalie::GoalieError;
use penalty_goalie::systems::reaction::{lagged_index, resolve};

#[test]
fn picks_the_sample_closest_to_the_lagged_time() {
    // 0.3 - 0.15 sits between 0.1 and 0.2; the first of the nearest wins.
    let got = resolve(&[0.0, 1.0, 2.0, 3.0], &[0.0, 0.1, 0.2, 0.3], 0.15).unwrap();
    assert_eq!(got, 1.0);
}

#[test]
fn exact_ties_go_to_the_earliest_sample() {
    let times = [0.0, 0.25, 0.5, 0.75];
    assert_eq!(lagged_index(&times, 0.375), Some(1));
    assert_eq!(resolve(&[10.0, 11.0, 12.0, 13.0], &times, 0.375).unwrap(), 11.0);
}

#[test]
fn zero_lag_sees_the_latest_sample() {
    assert_eq!(resolve(&[5.0, 6.0, 7.0], &[0.0, 0.1, 0.2], 0.0).unwrap(), 7.0);
}

#[test]
fn long_lag_sees_the_first_sample() {
    assert_eq!(resolve(&[5.0, 6.0, 7.0], &[0.0, 0.1, 0.2], 10.0).unwrap(), 5.0);
}

#[test]
fn uneven_frame_times_are_matched_on_time() {
    let times = [0.0, 0.05, 0.07, 0.2, 0.21];
    let ys = [0.0, 1.0, 2.0, 3.0, 4.0];
    // target 0.06: 0.05 and 0.07 are both about 0.01 away
    assert_eq!(lagged_index(&times, 0.15), Some(1));
    assert_eq!(resolve(&ys, &times, 0.15).unwrap(), 1.0);
}

#[test]
fn axes_resolve_independently() {
    let times = [0.0, 0.1, 0.2, 0.3];
    let xs = [-10.0, 0.0, 10.0, 20.0];
    let ys = [3.0, 2.0, 1.0, 0.0];
    assert_eq!(resolve(&xs, &times, 0.1).unwrap(), 10.0);
    assert_eq!(resolve(&ys, &times, 0.1).unwrap(), 1.0);
}

#[test]
fn empty_or_misaligned_histories_are_rejected() {
    assert_eq!(
        resolve(&[], &[], 0.1),
        Err(GoalieError::InvalidHistory { positions: 0, times: 0 })
    );
    let err = resolve(&[1.0, 2.0, 3.0], &[0.0, 0.1], 0.1).unwrap_err();
    assert_eq!(err, GoalieError::InvalidHistory { positions: 3, times: 2 });
    assert!(!err.is_configuration());
}
