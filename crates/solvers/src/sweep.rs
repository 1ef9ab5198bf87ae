//! Step-size sweeps and observed convergence rates.
//!
//! A sweep solves the same problem once per step size and records the error
//! norm of each solve. For errors behaving like `E = C·dt^r`, consecutive
//! entries give the observed rate
//!
//! ```text
//! r = ln(E[i] / E[i-1]) / ln(dt[i] / dt[i-1])
//! ```
//!
//! which approaches 1 for Forward and Backward Euler and 2 for Crank-Nicolson
//! as `dt` shrinks.

use decay_core::{Observer, Parameters};
use tracing::info;

use crate::theta_rule::{self, Action, Error, Event, Solution};

/// One solve within a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEntry {
    /// The step size used.
    pub dt: f64,

    /// The number of time steps `Nt`.
    pub steps: usize,

    /// The discrete L2 error against the exact solution.
    pub error: f64,
}

impl From<&Solution> for SweepEntry {
    fn from(solution: &Solution) -> Self {
        Self {
            dt: solution.parameters.dt(),
            steps: solution.steps(),
            error: solution.error_norm(),
        }
    }
}

/// Solves `params` once for each of `dt_values`.
///
/// The step size in `params` is ignored; every other parameter is shared
/// across the sweep.
///
/// # Errors
///
/// Returns an error if any step size is invalid for the requested end time.
pub fn sweep(params: &Parameters, dt_values: &[f64]) -> Result<Vec<SweepEntry>, Error> {
    sweep_observed(params, dt_values, ())
}

/// Solves `params` once for each of `dt_values`, passing every event of every
/// solve to `observer`.
///
/// # Errors
///
/// Returns an error if any step size is invalid for the requested end time.
pub fn sweep_observed<Obs>(
    params: &Parameters,
    dt_values: &[f64],
    mut observer: Obs,
) -> Result<Vec<SweepEntry>, Error>
where
    Obs: Observer<Event, Action>,
{
    dt_values
        .iter()
        .map(|&dt| -> Result<SweepEntry, Error> {
            let params = params.with_dt(dt)?;
            let solution = theta_rule::solve(&params, |event: &Event| observer.observe(event));
            let entry = SweepEntry::from(&solution);
            info!(dt, steps = entry.steps, error = entry.error, "sweep entry");
            Ok(entry)
        })
        .collect()
}

/// Returns the observed convergence rate between each pair of consecutive
/// entries.
///
/// The result has one fewer element than `entries`.
#[must_use]
pub fn convergence_rates(entries: &[SweepEntry]) -> Vec<f64> {
    entries
        .windows(2)
        .map(|pair| (pair[1].error / pair[0].error).ln() / (pair[1].dt / pair[0].dt).ln())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use decay_core::{ParameterError, Scheme};

    const HALVING: [f64; 4] = [0.1, 0.05, 0.025, 0.0125];

    fn rates_for(scheme: Scheme) -> Vec<f64> {
        let params = Parameters::new(1.0, 1.0, 1.0, 0.1, scheme.theta()).unwrap();
        let entries = sweep(&params, &HALVING).unwrap();
        convergence_rates(&entries)
    }

    #[test]
    fn one_entry_per_step_size() {
        let params = Parameters::new(1.0, 2.0, 4.0, 1.0, Scheme::BackwardEuler.theta()).unwrap();

        let entries = sweep(&params, &[0.4, 0.2, 0.1]).unwrap();

        let steps: Vec<usize> = entries.iter().map(|entry| entry.steps).collect();
        assert_eq!(steps, vec![10, 20, 40]);
        assert!(entries.windows(2).all(|pair| pair[1].error < pair[0].error));
    }

    #[test]
    fn euler_schemes_converge_at_first_order() {
        for scheme in [Scheme::ForwardEuler, Scheme::BackwardEuler] {
            let rates = rates_for(scheme);
            assert_eq!(rates.len(), 3);
            assert_abs_diff_eq!(rates[2], 1.0, epsilon = 0.05);
        }
    }

    #[test]
    fn crank_nicolson_converges_at_second_order() {
        let rates = rates_for(Scheme::CrankNicolson);

        assert_abs_diff_eq!(rates[2], 2.0, epsilon = 0.05);
    }

    #[test]
    fn empty_and_single_sweeps_have_no_rates() {
        let params = Parameters::new(1.0, 1.0, 1.0, 0.1, 0.5).unwrap();

        assert!(sweep(&params, &[]).unwrap().is_empty());
        assert!(convergence_rates(&sweep(&params, &[0.1]).unwrap()).is_empty());
    }

    #[test]
    fn observed_sweep_sees_every_solve() {
        let params = Parameters::new(1.0, 2.0, 4.0, 1.0, Scheme::CrankNicolson.theta()).unwrap();

        let mut steps = Vec::new();
        let entries = sweep_observed(&params, &[0.4, 0.2], |event: &Event| {
            steps.push(event.step);
            None
        })
        .unwrap();

        assert_eq!(steps.len(), 11 + 21);
        assert_eq!(steps[10], 10);
        assert_eq!(steps[11], 0);
        assert_eq!(entries, sweep(&params, &[0.4, 0.2]).unwrap());
    }

    #[test]
    fn invalid_step_size_fails_the_sweep() {
        let params = Parameters::new(1.0, 1.0, 1.0, 0.1, 0.5).unwrap();

        assert!(matches!(
            sweep(&params, &[0.1, 0.0]),
            Err(Error::Parameters(ParameterError::TimeStep(_)))
        ));
    }
}
