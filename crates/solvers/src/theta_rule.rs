//! Theta-rule solver for the linear decay equation.
//!
//! The theta-rule discretizes `u' = -a·u` on a uniform mesh as
//!
//! ```text
//! (u[n+1] - u[n]) / dt = -a·(θ·u[n+1] + (1 - θ)·u[n])
//! ```
//!
//! which rearranges to the first-order recurrence `u[n+1] = A·u[n]` with the
//! constant [`UpdateFactor`] `A`. `θ = 0` is Forward Euler, `θ = 1` Backward
//! Euler, and `θ = 0.5` Crank-Nicolson.
//!
//! Explicit schemes with `a·dt > 2` have `|A| > 1` and produce a growing
//! sequence of alternating sign. The solver returns that sequence as is.
//!
//! # Example
//!
//! ```
//! use decay_core::{Parameters, Scheme};
//! use decay_solvers::theta_rule;
//!
//! let params = Parameters::new(0.8, 1.2, 1.5, 0.5, Scheme::CrankNicolson.theta()).unwrap();
//! let solution = theta_rule::solve_unobserved(&params);
//!
//! assert_eq!(solution.times, vec![0.0, 0.5, 1.0, 1.5]);
//! assert_eq!(solution.values.len(), 4);
//! ```
//!
//! [`UpdateFactor`]: decay_core::UpdateFactor

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use decay_core::{Observer, Parameters};
use tracing::debug;

/// Solves the decay equation with the theta-rule.
///
/// # Algorithm
///
/// 1. Build the mesh with `Nt = round(T / dt)` and `T` snapped to `Nt·dt`.
/// 2. Compute the update factor `A` once.
/// 3. Set `u[0] = I`, then `u[n+1] = A·u[n]` for `n = 0..Nt`.
///
/// # Observer
///
/// The observer receives an [`Event`] for every mesh point, `n = 0..=Nt`,
/// carrying `u[n]` and the two sub-factors of `A`. Observation is read-only:
/// [`Action`] has no variants, so the solve always runs to completion.
pub fn solve<Obs>(params: &Parameters, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let mesh = params.mesh();
    let factor = params.update_factor();
    let amplification = factor.value();

    debug!(
        dt = mesh.dt(),
        steps = mesh.steps(),
        end_time = mesh.end_time(),
        theta = params.theta().value(),
        amplification,
        "solving decay equation with the theta-rule"
    );
    if factor.is_amplifying() {
        debug!(amplification, "|A| > 1, the discrete solution grows");
    }

    let times = mesh.points();
    let mut values = Vec::with_capacity(times.len());
    let mut value = params.initial();

    for (step, &time) in times.iter().enumerate() {
        if step > 0 {
            value *= amplification;
        }
        values.push(value);

        let event = Event {
            step,
            time,
            value,
            factor,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }
    }

    Solution {
        values,
        times,
        parameters: *params,
    }
}

/// Solves the decay equation with the theta-rule without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
#[must_use]
pub fn solve_unobserved(params: &Parameters) -> Solution {
    solve(params, ())
}

/// Validates raw scalar inputs and solves without observation.
///
/// Each scalar is converted to `f64` before use, so integer arguments are
/// safe.
///
/// # Errors
///
/// Returns [`Error::Parameters`] if any input is invalid.
pub fn solve_decay(
    initial: impl Into<f64>,
    rate: impl Into<f64>,
    end_time: impl Into<f64>,
    dt: impl Into<f64>,
    theta: impl Into<f64>,
) -> Result<Solution, Error> {
    let params = Parameters::new(initial, rate, end_time, dt, theta)?;
    Ok(solve_unobserved(&params))
}
