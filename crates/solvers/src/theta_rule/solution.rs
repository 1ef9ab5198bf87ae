use decay_core::{Parameters, norm};

/// The result of a theta-rule solve.
///
/// `values` and `times` always have `Nt + 1` entries, indexed in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The numerical solution `u[0..=Nt]`.
    pub values: Vec<f64>,

    /// The time mesh `t[0..=Nt]`.
    pub times: Vec<f64>,

    /// The parameters used for the solve.
    pub parameters: Parameters,
}

impl Solution {
    /// Returns the number of time steps `Nt`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.parameters.mesh().steps()
    }

    /// Returns the end time of the mesh, `Nt·dt`.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.parameters.mesh().end_time()
    }

    /// Returns the exact solution evaluated on the mesh.
    #[must_use]
    pub fn exact_values(&self) -> Vec<f64> {
        self.times
            .iter()
            .map(|&t| self.parameters.exact(t))
            .collect()
    }

    /// Computes the discrete L2 error against the exact solution.
    #[must_use]
    pub fn error_norm(&self) -> f64 {
        let errors = self
            .values
            .iter()
            .zip(&self.times)
            .map(|(&u, &t)| self.parameters.exact(t) - u);
        norm::l2_norm(errors, self.parameters.dt())
    }

    /// Returns the largest `|u[n] - I·A^n|` over the mesh.
    ///
    /// For a correct recurrence this is round-off only.
    #[must_use]
    pub fn max_discrete_deviation(&self) -> f64 {
        (0..=u32::MAX)
            .zip(&self.values)
            .map(|(n, &u)| (u - self.parameters.discrete_exact(n)).abs())
            .fold(0.0, f64::max)
    }

    /// Consumes the solution and returns `(values, times)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.times)
    }
}

#[cfg(test)]
mod tests {
    use decay_core::{Parameters, Theta, norm};

    use approx::assert_relative_eq;

    use crate::theta_rule::solve_unobserved;

    #[test]
    fn backward_euler_error_norm() {
        let params = Parameters::new(1, 2, 4, 0.4, Theta::BACKWARD_EULER).unwrap();

        let solution = solve_unobserved(&params);
        let error = solution.error_norm();

        assert!(error.is_finite() && error > 0.0);
        assert!(error > 0.11 && error < 0.125, "E = {error}");
        assert_eq!(error.to_bits(), solve_unobserved(&params).error_norm().to_bits());

        let checked = norm::l2_error(&solution.values, &solution.times, 0.4, 1.0, 2.0).unwrap();
        assert_relative_eq!(error, checked);
    }

    #[test]
    fn exact_values_follow_mesh() {
        let params = Parameters::new(2.0, 1.0, 1.0, 0.25, Theta::CRANK_NICOLSON).unwrap();

        let solution = solve_unobserved(&params);
        let exact = solution.exact_values();

        assert_eq!(exact.len(), solution.times.len());
        assert_relative_eq!(exact[4], 2.0 * (-1.0_f64).exp());
    }

    #[test]
    fn into_parts_preserves_lengths() {
        let params = Parameters::new(1.0, 1.0, 2.0, 0.3, 0.3).unwrap();

        let solution = solve_unobserved(&params);
        let steps = solution.steps();
        let (values, times) = solution.into_parts();

        assert_eq!(values.len(), steps + 1);
        assert_eq!(times.len(), steps + 1);
    }
}
