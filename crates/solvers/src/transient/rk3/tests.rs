use approx::assert_relative_eq;

use coil_core::{Point, ScalarOde};

use super::{
    Action, Adjustment, Boundary, Config, Error, Estimate, Event, Status, fixed, solve,
    solve_unobserved, step,
};

/// dy/dx = 0: the error estimate is always zero, so every step grows.
struct Constant;

impl ScalarOde for Constant {
    fn derivative(&self, _x: f64, _y: f64) -> f64 {
        0.0
    }

    fn exact(&self, start: Point, _x: f64) -> Option<f64> {
        Some(start.y)
    }
}

/// dy/dx = y
struct Growth;

impl ScalarOde for Growth {
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        y
    }
}

/// dy/dx = cos(3x) − y/2, smooth and mildly oscillating.
struct Forced;

impl ScalarOde for Forced {
    fn derivative(&self, x: f64, y: f64) -> f64 {
        (3.0 * x).cos() - 0.5 * y
    }
}

/// dy/dx = 1/(1 − x), singular at x = 1.
struct Blowup;

impl ScalarOde for Blowup {
    fn derivative(&self, x: f64, _y: f64) -> f64 {
        1.0 / (1.0 - x)
    }
}

fn config(h0: f64, n: usize, eps: f64, x_end: f64, precision: f64) -> Config {
    Config::new(h0, n, eps, Boundary::new(x_end, precision).unwrap()).unwrap()
}

#[test]
fn zero_steps_returns_start() {
    let solution =
        solve_unobserved(&Forced, Point::new(0.5, 2.0), &config(0.1, 0, 1e-3, 5.0, 1e-6))
            .expect("should return start");

    assert_eq!(solution.status, Status::StepBudgetExhausted);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.len(), 1);
    assert_eq!(solution.trajectory.first().point(), Point::new(0.5, 2.0));
    assert_eq!(solution.stats.increases(), 0);
    assert_eq!(solution.stats.min_step(), None);
}

#[test]
fn first_sample_is_start() {
    let solution =
        solve_unobserved(&Constant, Point::new(0.0, 1.0), &config(1e-3, 10, 1e-3, 1.0, 1e-5))
            .expect("should solve");

    let first = solution.trajectory.first();
    assert_eq!(first.x, 0.0);
    assert_eq!(first.current, 1.0);
    assert_eq!(first.exact, Some(1.0));
    assert_eq!(first.adjustment, None);
}

#[test]
fn respects_step_budget() {
    let solution =
        solve_unobserved(&Forced, Point::new(0.0, 1.0), &config(1e-3, 25, 1e-8, 100.0, 1e-6))
            .expect("should solve");

    assert_eq!(solution.status, Status::StepBudgetExhausted);
    assert_eq!(solution.steps, 25);
    assert_eq!(solution.trajectory.len(), 26);
}

#[test]
fn x_never_decreases_or_passes_boundary() {
    let x_end = 2.0;
    let precision = 1e-6;
    let solution = solve_unobserved(
        &Forced,
        Point::new(0.0, 1.0),
        &config(0.05, 10_000, 1e-6, x_end, precision),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::ReachedBoundary);
    let samples = solution.trajectory.as_slice();
    for pair in samples.windows(2) {
        assert!(pair[0].x <= pair[1].x, "{} > {}", pair[0].x, pair[1].x);
    }
    for sample in samples {
        assert!(sample.x <= x_end + precision);
    }
    let last = solution.trajectory.last();
    assert!(x_end - last.x < precision);
}

#[test]
fn constant_solution_doubles_every_step() {
    let solution =
        solve_unobserved(&Constant, Point::new(0.0, 3.0), &config(0.01, 5, 1e-3, 100.0, 1e-6))
            .expect("should solve");

    let steps: Vec<f64> = solution.trajectory.iter().skip(1).map(|s| s.step).collect();
    assert_eq!(steps, vec![0.01, 0.02, 0.04, 0.08, 0.16]);

    for (i, sample) in solution.trajectory.iter().enumerate().skip(1) {
        assert_eq!(sample.adjustment, Some(Adjustment::Grow));
        assert_eq!(sample.increases, i);
        assert_eq!(sample.decreases, 0);
        assert_eq!(sample.current, 3.0);
    }
    assert_eq!(solution.stats.increases(), 5);
    assert_eq!(solution.stats.min_step().map(|e| e.index), Some(1));
    assert_eq!(solution.stats.max_step().map(|e| e.index), Some(5));
}

#[test]
fn large_error_halves_and_retakes_step() {
    let solution =
        solve_unobserved(&Growth, Point::new(0.0, 1.0), &config(0.5, 1, 1e-12, 100.0, 1e-6))
            .expect("should solve");

    let sample = &solution.trajectory[1];
    assert_eq!(sample.adjustment, Some(Adjustment::Shrink));
    assert_eq!(sample.attempted, 0.5);
    assert_eq!(sample.step, 0.25);
    assert_eq!(sample.x, 0.25);
    assert_eq!(sample.current, step(&Growth, 0.0, 1.0, 0.25));
    assert_eq!(sample.decreases, 1);
    assert_eq!(solution.stats.decreases(), 1);
}

#[test]
fn overshooting_step_is_clamped_at_boundary() {
    let solution =
        solve_unobserved(&Constant, Point::new(0.0, 1.0), &config(0.3, 1000, 1e-3, 1.0, 1e-9))
            .expect("should solve");

    let adjustments: Vec<_> = solution
        .trajectory
        .iter()
        .skip(1)
        .take(3)
        .map(|s| s.adjustment)
        .collect();
    assert_eq!(
        adjustments,
        vec![
            Some(Adjustment::Grow),
            Some(Adjustment::Grow),
            Some(Adjustment::Clamp),
        ]
    );

    assert_eq!(solution.status, Status::ReachedBoundary);
    let last = solution.trajectory.last();
    assert!(last.x <= 1.0);
    assert!(1.0 - last.x < 1e-9);
    assert!(solution.stats.decreases() >= 1);
}

#[test]
fn start_within_precision_takes_no_steps() {
    let solution =
        solve_unobserved(&Forced, Point::new(0.9999, 1.0), &config(0.1, 100, 1e-3, 1.0, 1e-3))
            .expect("should solve");

    assert_eq!(solution.status, Status::ReachedBoundary);
    assert_eq!(solution.trajectory.len(), 1);
}

#[test]
fn start_at_edge_of_precision_is_clamped() {
    let x_end = 1e-3;
    let precision = 1e-3;
    let solution = solve_unobserved(
        &Constant,
        Point::new(0.0, 1.0),
        &config(0.5, 10, 1e-3, x_end, precision),
    )
    .expect("should solve");

    assert_eq!(solution.status, Status::ReachedBoundary);
    assert_eq!(solution.trajectory.len(), 2);

    let sample = &solution.trajectory[1];
    assert_eq!(sample.adjustment, Some(Adjustment::Clamp));
    assert!(sample.x <= x_end);
    for sample in &solution.trajectory {
        assert!(sample.x <= x_end + precision);
    }
}

#[test]
fn rejects_start_at_or_beyond_boundary() {
    let config = config(0.1, 100, 1e-3, 1.0, 1e-3);

    let err = solve_unobserved(&Forced, Point::new(1.0, 0.0), &config).unwrap_err();
    assert_eq!(
        err,
        Error::StartBeyondBoundary {
            x: 1.0,
            x_end: 1.0
        }
    );
    assert!(solve_unobserved(&Forced, Point::new(3.0, 0.0), &config).is_err());
}

#[test]
fn rejects_non_finite_start() {
    let config = config(0.1, 100, 1e-3, 1.0, 1e-3);
    let err = solve_unobserved(&Forced, Point::new(0.0, f64::NAN), &config).unwrap_err();
    assert!(matches!(err, Error::NonFiniteStart { .. }));
}

#[test]
fn reports_step_size_underflow() {
    // At x = 1e17 adjacent doubles are 16 apart, so a unit step cannot move x.
    let solution = solve_unobserved(
        &Constant,
        Point::new(1e17, 0.0),
        &config(1.0, 100, 1e-3, 2e17, 1.0),
    )
    .expect("should stop");

    assert_eq!(solution.status, Status::StepSizeUnderflow);
    assert_eq!(solution.steps, 0);
}

#[test]
fn repeated_halving_ends_in_underflow() {
    // Steps shrink toward the singularity until they no longer move x.
    let solution = solve_unobserved(
        &Blowup,
        Point::new(0.0, 0.0),
        &config(0.1, 100_000, 1e-6, 2.0, 1e-9),
    )
    .expect("should stop");

    assert_eq!(solution.status, Status::StepSizeUnderflow);
    assert!(solution.steps < 100_000);
    assert!(solution.stats.decreases() > 0);

    let last = solution.trajectory.last();
    assert!(last.x < 1.0);
    assert!(last.x > 0.999);
    for sample in &solution.trajectory {
        assert!(sample.current.is_finite());
    }
}

#[test]
fn degenerates_to_fixed_step_without_error_control() {
    let h0 = 0.01;
    let n = 200;
    let start = Point::new(0.0, 1.0);
    let config = config(h0, n, f64::INFINITY, 1e6, 0.0)
        .with_max_step(h0)
        .unwrap();

    let adaptive = solve_unobserved(&Forced, start, &config).expect("should solve");
    let fixed = fixed::solve(&Forced, start, h0, n);

    let adaptive_ys: Vec<f64> = adaptive.trajectory.iter().map(|s| s.current).collect();
    let fixed_ys: Vec<f64> = fixed.iter().map(|p| p.y).collect();
    assert_eq!(adaptive_ys, fixed_ys);
    assert_eq!(adaptive.stats.increases(), 0);
    assert_eq!(adaptive.stats.decreases(), 0);
}

#[test]
fn stored_estimates_can_be_rederived() {
    let solution = solve_unobserved(
        &Forced,
        Point::new(0.0, 1.0),
        &config(0.2, 500, 1e-7, 3.0, 1e-6),
    )
    .expect("should solve");

    let samples = solution.trajectory.as_slice();
    for pair in samples.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        let estimate = Estimate::new(&Forced, before.x, before.current, after.attempted);
        assert_eq!(estimate.local_error, after.estimate);
        assert_eq!(estimate.half_steps, after.half_steps);
    }
}

#[test]
fn counters_never_decrease_and_match_stats() {
    let solution = solve_unobserved(
        &Forced,
        Point::new(0.0, 1.0),
        &config(0.5, 500, 1e-6, 4.0, 1e-6),
    )
    .expect("should solve");

    let samples = solution.trajectory.as_slice();
    for pair in samples.windows(2) {
        assert!(pair[0].increases <= pair[1].increases);
        assert!(pair[0].decreases <= pair[1].decreases);
    }
    let last = solution.trajectory.last();
    assert_eq!(last.increases, solution.stats.increases());
    assert_eq!(last.decreases, solution.stats.decreases());
}

#[test]
fn error_extremes_point_at_matching_samples() {
    let solution = solve_unobserved(
        &Forced,
        Point::new(0.0, 1.0),
        &config(0.5, 500, 1e-6, 4.0, 1e-6),
    )
    .expect("should solve");

    let max = solution.stats.max_error().expect("steps were taken");
    let min = solution.stats.min_error().expect("steps were taken");
    let trajectory = &solution.trajectory;

    assert_relative_eq!(trajectory[max.index].scaled_error().abs(), max.value);
    assert_relative_eq!(trajectory[min.index].scaled_error().abs(), min.value);
    for sample in trajectory.iter().skip(1) {
        let magnitude = sample.scaled_error().abs();
        assert!(magnitude <= max.value);
        assert!(magnitude >= min.value);
    }
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_>| (event.step >= 5).then_some(Action::StopEarly);

    let solution = solve(
        &Forced,
        Point::new(0.0, 1.0),
        &config(1e-3, 100, 1e-6, 10.0, 1e-6),
        observer,
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.trajectory.len(), 6);
}

#[test]
fn observer_can_stop_before_first_step() {
    let observer = |_event: &Event<'_>| Some(Action::StopEarly);

    let solution = solve(
        &Forced,
        Point::new(0.0, 1.0),
        &config(1e-3, 100, 1e-6, 10.0, 1e-6),
        observer,
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.trajectory.len(), 1);
}

#[test]
fn events_follow_the_trajectory() {
    let mut seen = Vec::new();
    let solution = solve(
        &Constant,
        Point::new(0.0, 1.0),
        &config(0.25, 4, 1e-3, 100.0, 1e-6),
        |event: &Event<'_>| {
            seen.push((event.step, event.sample.x, event.next_step));
            None::<Action>
        },
    )
    .expect("should solve");

    assert_eq!(seen.len(), solution.trajectory.len());
    assert_eq!(seen[0], (0, 0.0, 0.25));
    assert_eq!(seen[1], (1, 0.25, 0.5));
    assert_eq!(seen[4], (4, 3.75, 4.0));
}
