// tests/critical_points.rs
use penalty_goalie::systems::critical_points::compute;
use penalty_goalie::{FieldConfig, GoalieError};

/// Ball and goalie 400px apart, 60 fps.
fn field() -> FieldConfig {
    FieldConfig {
        ball_start_x: -200.0,
        ball_start_y: 0.0,
        bar_x: 200.0,
        ball_speed: 10.0,
        bar_base_speed: 8.0,
        bar_accel_incr: 1.0,
        bar_half_length: 40.0,
        screen_half_height: 300.0,
        refresh_interval: 1.0 / 60.0,
    }
}

#[test]
fn example_field_has_critical_points_before_the_goalie() {
    let geo = compute(&field(), 0.195).unwrap();
    let crit = geo.critical_points();
    assert!(!crit.is_empty());
    assert!(crit.iter().all(|x| *x < 200.0));
    assert!(crit.windows(2).all(|w| w[0] < w[1]));
    // 0.195s at 60fps rounds to a 12-step shift; everything past x=60 is
    // out of the goalie's reach.
    assert_eq!(geo.lag_steps(), 12);
    assert_eq!(crit.first().copied(), Some(70.0));
    assert_eq!(crit.last().copied(), Some(190.0));
    assert_eq!(crit.len(), 13);
}

#[test]
fn inflection_points_bracket_the_first_critical_point() {
    let geo = compute(&field(), 0.195).unwrap();
    let inf = geo.inflection();
    assert_eq!(inf.first, 60.0);
    assert_eq!(inf.second, 90.0);
    assert!(inf.first < geo.critical_points()[0] && geo.critical_points()[0] < inf.second);
}

#[test]
fn zero_lag_still_shifts_by_one_step() {
    let geo = compute(&field(), 0.0).unwrap();
    assert_eq!(geo.lag_steps(), 1);
    assert_eq!(geo.critical_points(), &[150.0, 160.0, 170.0, 180.0, 190.0]);
}

#[test]
fn samples_and_ranges_line_up() {
    let geo = compute(&field(), 0.195).unwrap();
    assert_eq!(geo.ball_x().len(), 40);
    assert_eq!(geo.ball_x()[0], -200.0);
    assert_eq!(geo.ball_x()[39], 190.0);
    assert_eq!(geo.ball_range().len(), 40);
    assert_eq!(geo.bar_range().len(), 40);
    // Far from the goalie the ball can reach the screen edge.
    assert_eq!(geo.ball_range()[0], 300.0);
    assert_eq!(geo.ball_range()[39], 10.0);
    // Past the shifted end the goalie has no reach left.
    assert!(geo.bar_range()[40 - 12..].iter().all(|r| *r == 0.0));
    assert!(geo.bar_range().iter().all(|r| (0.0..=300.0).contains(r)));
}

#[test]
fn ball_range_lookup_tolerates_float_drift() {
    let geo = compute(&field(), 0.195).unwrap();
    assert_eq!(geo.ball_range_at(150.0), 50.0);
    assert_eq!(geo.ball_range_at(150.0 + 1e-10), 50.0);
    assert_eq!(geo.ball_range_at(-150.0), 300.0);
    // Off the sampled grid: closed form.
    assert_eq!(geo.ball_range_at(195.0), 5.0);
    assert_eq!(geo.ball_range_at(250.0), 0.0);
}

#[test]
fn critical_membership_uses_tolerance() {
    let geo = compute(&field(), 0.195).unwrap();
    assert!(geo.is_critical(70.0));
    assert!(geo.is_critical(70.0 - 1e-11));
    assert!(!geo.is_critical(60.0));
    assert!(!geo.is_critical(75.0));
}

#[test]
fn field_left_of_centre_has_no_critical_points() {
    let mut f = field();
    f.ball_start_x = -500.0;
    f.bar_x = 0.0;
    let err = compute(&f, 0.195).unwrap_err();
    assert!(matches!(err, GoalieError::NoCriticalPoints { .. }));
    assert!(err.is_configuration());
}

#[test]
fn invalid_fields_fail_fast() {
    let mut f = field();
    f.ball_speed = 0.0;
    assert!(matches!(compute(&f, 0.1), Err(GoalieError::InvalidField { .. })));

    let mut f = field();
    f.bar_x = -300.0;
    assert!(matches!(compute(&f, 0.1), Err(GoalieError::InvalidField { .. })));

    assert!(matches!(compute(&field(), f64::NAN), Err(GoalieError::InvalidLag { .. })));
}

#[test]
fn geometry_is_deterministic() {
    assert_eq!(compute(&field(), 0.195).unwrap(), compute(&field(), 0.195).unwrap());
}
