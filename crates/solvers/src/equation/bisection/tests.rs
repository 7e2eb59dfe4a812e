use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use goalseek_core::{FnModel, Model};

use crate::equation::GoalProblem;

use super::{
    Action, Bounds, Bracket, Config, Error, Event, Sign, Status, refine, solve, solve_unobserved,
};

/// Model that squares its input.
struct SquareModel;

impl Model for SquareModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(input * input)
    }
}

/// Model that cubes its input.
struct CubeModel;

impl Model for CubeModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(input * input * input)
    }
}

#[derive(Debug, Error)]
#[error("negative input")]
struct NegativeInput;

/// Model that refuses negative inputs.
struct SqrtModel;

impl Model for SqrtModel {
    type Input = f64;
    type Output = f64;
    type Error = NegativeInput;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        if *input < 0.0 {
            Err(NegativeInput)
        } else {
            Ok(input.sqrt())
        }
    }
}

fn tight() -> Config {
    Config {
        residual_tol: 1e-10,
        ..Config::default()
    }
}

#[test]
fn finds_square_root() {
    let solution = solve_unobserved(&SquareModel, &GoalProblem::new(9.0), [0.0, 10.0], &tight())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    let eval = solution.eval.expect("converged solutions are evaluated");
    assert_relative_eq!(eval.snapshot.output, 9.0, epsilon = 1e-10);
}

#[test]
fn finds_cube_root() {
    let solution = solve_unobserved(&CubeModel, &GoalProblem::new(27.0), [0.0, 10.0], &tight())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    assert!(solution.residual().expect("evaluated").abs() <= 1e-10);
}

#[test]
fn normalizes_reversed_bracket() {
    let solution = solve_unobserved(
        &SquareModel,
        &GoalProblem::new(36.0),
        [10.0, 0.0],
        &tight(),
    )
    .expect("should solve with reversed bracket");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
}

#[test]
fn exact_endpoint_returns_without_bisecting() {
    let mut midpoints = 0;
    let observer = |event: &Event<'_, f64, f64>| {
        if matches!(event, Event::Midpoint { .. }) {
            midpoints += 1;
        }
        None
    };

    let solution = solve(
        &SquareModel,
        &GoalProblem::new(16.0),
        [4.0, 10.0],
        &Config::default(),
        observer,
    )
    .expect("left endpoint is a root");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 4.0);
    assert_eq!(midpoints, 0);
}

#[test]
fn endpoint_within_tolerance_is_not_accepted() {
    // g(3.0000001) is within 1e-6 but not exactly zero, so bisection runs.
    let config = Config {
        residual_tol: 1e-6,
        ..Config::default()
    };
    let model = FnModel::new(|x: f64| x);
    let solution = solve_unobserved(&model, &GoalProblem::new(3.0), [2.9999999, 10.0], &config)
        .expect("should solve");

    assert!(solution.iters >= 1);
    assert!(solution.residual().expect("evaluated").abs() <= 1e-6);
}

#[test]
fn observer_can_stop_iteration() {
    let mut calls = 0usize;
    let observer = |event: &Event<'_, f64, f64>| {
        calls += 1;
        match event {
            Event::Midpoint { iter, .. } if *iter >= 3 => Some(Action::StopEarly),
            _ => None,
        }
    };

    let solution = solve(
        &SquareModel,
        &GoalProblem::new(9.0),
        [0.0, 10.0],
        &tight(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    // Two endpoints plus three midpoints.
    assert_eq!(calls, 5);
    assert!(solution.eval.is_some());
}

#[test]
fn midpoint_events_track_the_bracket() {
    let mut widths = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        if let Event::Midpoint { bracket, eval, .. } = event {
            widths.push(bracket.width());
            assert_relative_eq!(eval.point(), bracket.midpoint());
        }
        None
    };

    solve(
        &SquareModel,
        &GoalProblem::new(2.0),
        [0.0, 8.0],
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert_relative_eq!(widths[0], 8.0);
    for pair in widths.windows(2) {
        assert_relative_eq!(pair[1], 0.5 * pair[0]);
    }
}

#[test]
fn max_iters_returns_final_midpoint() {
    let config = Config {
        max_iters: 2,
        residual_tol: 0.0,
    };

    // [0, 10] -> m=5 (g>0) -> [0, 5] -> m=2.5 (g<0) -> [2.5, 5]
    let solution = solve_unobserved(&SquareModel, &GoalProblem::new(9.0), [0.0, 10.0], &config)
        .expect("should return best effort");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x, 3.75);
    assert_eq!(solution.bracket, [2.5, 5.0]);
    assert!(solution.eval.is_none());
    assert!(solution.residual().is_none());
}

#[test]
fn bisects_brackets_near_f64_max() {
    let model = FnModel::new(|x: f64| x);
    let config = Config {
        residual_tol: 1e300,
        ..Config::default()
    };

    let solution = solve_unobserved(&model, &GoalProblem::new(1.5e308), [1e308, 1.7e308], &config)
        .expect("midpoints stay finite");

    assert!(solution.is_converged());
    assert!(solution.x.is_finite());
    assert!(solution.x > 1e308 && solution.x < 1.7e308);

    let config = Config {
        max_iters: 1,
        residual_tol: 0.0,
    };
    let solution = solve_unobserved(&model, &GoalProblem::new(1.5e308), [1e308, 1.7e308], &config)
        .expect("should return best effort");
    assert_eq!(solution.status, Status::MaxIters);
    assert!(solution.x.is_finite());
}

#[test]
fn refine_skips_endpoint_evaluation() {
    let bracket = Bracket::new(
        Bounds::new([0.0, 10.0]).expect("valid bounds"),
        Sign::Negative,
        Sign::Positive,
    )
    .expect("valid bracket");

    let mut endpoints = 0;
    let observer = |event: &Event<'_, f64, f64>| {
        if matches!(event, Event::Endpoint { .. }) {
            endpoints += 1;
        }
        None
    };

    let solution = refine(&SquareModel, &GoalProblem::new(49.0), bracket, &tight(), observer)
        .expect("should solve");

    assert_eq!(endpoints, 0);
    assert_relative_eq!(solution.x, 7.0, epsilon = 1e-10);
}

#[test]
fn errors_on_zero_width_bracket() {
    let result = solve_unobserved(
        &SquareModel,
        &GoalProblem::new(25.0),
        [5.0, 5.0],
        &Config::default(),
    );

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(super::BracketError::ZeroWidth))
    ));
}

#[test]
fn errors_on_non_finite_bracket() {
    let problem = GoalProblem::new(67.0);

    let result = solve_unobserved(&SquareModel, &problem, [f64::NAN, 10.0], &Config::default());
    assert!(matches!(result, Err(Error::InvalidBracket(_))));

    let result = solve_unobserved(
        &SquareModel,
        &problem,
        [0.0, f64::INFINITY],
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::InvalidBracket(_))));
}

#[test]
fn errors_on_no_bracket() {
    // Both endpoint residuals are positive.
    let result = solve_unobserved(
        &SquareModel,
        &GoalProblem::new(9.0),
        [5.0, 10.0],
        &Config::default(),
    );

    match result {
        Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        }) => {
            assert_relative_eq!(left, 5.0);
            assert_relative_eq!(right, 10.0);
            assert_relative_eq!(left_residual, 16.0);
            assert_relative_eq!(right_residual, 91.0);
        }
        other => panic!("expected NoBracket, got {other:?}"),
    }
}

#[test]
fn errors_on_non_finite_residual() {
    let model = FnModel::new(|x: f64| 1.0 / (x - 5.0));

    // The first midpoint of [0, 10] lands on the pole.
    let result = solve_unobserved(&model, &GoalProblem::new(0.0), [0.0, 10.0], &Config::default());

    match result {
        Err(Error::NonFiniteResidual { x, residual }) => {
            assert_relative_eq!(x, 5.0);
            assert!(residual.is_infinite());
        }
        other => panic!("expected NonFiniteResidual, got {other:?}"),
    }
}

#[test]
fn errors_on_invalid_config() {
    let config = Config {
        max_iters: 0,
        ..Config::default()
    };
    let result = solve_unobserved(&SquareModel, &GoalProblem::new(4.0), [0.0, 10.0], &config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn model_errors_are_propagated() {
    let result = solve_unobserved(
        &SqrtModel,
        &GoalProblem::new(1.0),
        [-4.0, 4.0],
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::Model(_))));
}
