//! Discrete error norms against the exact solution.

use thiserror::Error;

use crate::exact::exact_solution;

/// Errors that can occur when computing an error norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormError {
    #[error("solution has {values} values but the mesh has {times} points")]
    LengthMismatch { values: usize, times: usize },
}

/// Computes the discrete L2 error `sqrt(dt · Σ (u_e(t_k) - u_k)²)`.
///
/// Every mesh point, endpoints included, carries the same weight `dt`.
///
/// # Errors
///
/// Returns [`NormError::LengthMismatch`] if `values` and `times` differ in
/// length.
pub fn l2_error(
    values: &[f64],
    times: &[f64],
    dt: f64,
    initial: f64,
    rate: f64,
) -> Result<f64, NormError> {
    if values.len() != times.len() {
        return Err(NormError::LengthMismatch {
            values: values.len(),
            times: times.len(),
        });
    }

    let errors = values
        .iter()
        .zip(times)
        .map(|(&u, &t)| exact_solution(t, initial, rate) - u);

    Ok(l2_norm(errors, dt))
}

/// Computes `sqrt(dt · Σ e²)` for pointwise errors `e` on a uniform mesh.
///
/// This is a plain Riemann sum, so the result is deterministic for a given
/// sequence of errors.
#[must_use]
pub fn l2_norm<I>(errors: I, dt: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let sum: f64 = errors.into_iter().map(|e| e * e).sum();
    (dt * sum).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_values_have_zero_error() {
        let times = [0.0, 0.5, 1.0];
        let values: Vec<f64> = times.iter().map(|&t| exact_solution(t, 1.0, 2.0)).collect();

        let error = l2_error(&values, &times, 0.5, 1.0, 2.0).unwrap();

        assert_relative_eq!(error, 0.0);
    }

    #[test]
    fn constant_offset_weights_every_point() {
        // Exact solution with a = 0 is constant, so each point is off by 0.1.
        let times = [0.0, 0.25, 0.5, 0.75, 1.0];
        let values = [1.1; 5];

        let error = l2_error(&values, &times, 0.25, 1.0, 0.0).unwrap();

        assert_relative_eq!(error, (0.25 * 5.0 * 0.01_f64).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn norm_of_errors() {
        assert_relative_eq!(l2_norm([3.0, 4.0], 1.0), 5.0);
        assert_relative_eq!(l2_norm([3.0, 4.0], 0.25), 2.5);
        assert_relative_eq!(l2_norm(std::iter::empty(), 0.1), 0.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            l2_error(&[1.0, 0.5], &[0.0], 0.1, 1.0, 1.0),
            Err(NormError::LengthMismatch {
                values: 2,
                times: 1
            })
        );
    }
}
