//! Reference solutions for verifying the theta-rule solver.
//!
//! [`exact_solution`] is the solution of the ODE itself. It measures the
//! discretization error of a scheme. [`discrete_exact_solution`] is the
//! solution of the difference equation, so a correctly implemented solver
//! reproduces it up to round-off regardless of `dt`.

use crate::{Theta, UpdateFactor};

/// Evaluates the exact solution `I·e^(-a·t)` at time `t`.
#[must_use]
pub fn exact_solution(t: f64, initial: f64, rate: f64) -> f64 {
    initial * (-rate * t).exp()
}

/// Evaluates the exact solution at each of `times`.
#[must_use]
pub fn exact_solution_on(times: &[f64], initial: f64, rate: f64) -> Vec<f64> {
    times
        .iter()
        .map(|&t| exact_solution(t, initial, rate))
        .collect()
}

/// Evaluates the discrete exact solution `I·A^n` at step `n`.
///
/// `A` is the same [`UpdateFactor`] the solver applies at every step.
#[must_use]
pub fn discrete_exact_solution(n: u32, initial: f64, rate: f64, theta: Theta, dt: f64) -> f64 {
    let factor = UpdateFactor::new(rate, dt, theta).value();
    let power = match i32::try_from(n) {
        Ok(n) => factor.powi(n),
        Err(_) => factor.powf(f64::from(n)),
    };
    initial * power
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn exact_solution_decays() {
        assert_relative_eq!(exact_solution(0.0, 3.0, 2.0), 3.0);
        assert_relative_eq!(exact_solution(1.0, 1.0, 1.0), (-1.0_f64).exp());
        assert_relative_eq!(exact_solution(2.0, 1.0, -0.5), 1.0_f64.exp());
    }

    #[test]
    fn exact_solution_on_mesh() {
        let values = exact_solution_on(&[0.0, 0.5, 1.0], 2.0, 1.0);

        assert_eq!(values.len(), 3);
        assert_relative_eq!(values[0], 2.0);
        assert_relative_eq!(values[1], 2.0 * (-0.5_f64).exp());
        assert_relative_eq!(values[2], 2.0 * (-1.0_f64).exp());
    }

    #[test]
    fn discrete_exact_crank_nicolson() {
        let theta = Theta::CRANK_NICOLSON;

        assert_abs_diff_eq!(
            discrete_exact_solution(1, 0.8, 1.2, theta, 0.5),
            0.430_769_230_769_23,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            discrete_exact_solution(3, 0.8, 1.2, theta, 0.5),
            0.124_897_587_619_48,
            epsilon = 1e-12
        );
    }

    #[test]
    fn discrete_exact_forward_euler_alternates_sign() {
        let theta = Theta::FORWARD_EULER;

        assert_relative_eq!(
            discrete_exact_solution(1, 1.0, 2.0, theta, 1.2),
            -1.4,
            epsilon = 1e-14
        );
        assert_relative_eq!(
            discrete_exact_solution(2, 1.0, 2.0, theta, 1.2),
            1.96,
            epsilon = 1e-14
        );
    }

    #[test]
    fn large_step_index_uses_powf() {
        let value = discrete_exact_solution(u32::MAX, 1.0, 0.0, Theta::BACKWARD_EULER, 0.1);

        assert_relative_eq!(value, 1.0);
    }
}
