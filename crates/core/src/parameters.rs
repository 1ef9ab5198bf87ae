use thiserror::Error;

use crate::{Theta, TimeMesh, UpdateFactor, exact};

/// Errors that can occur when validating decay problem parameters.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ParameterError {
    #[error("initial value must be finite, got {0}")]
    Initial(f64),

    #[error("decay rate must be finite, got {0}")]
    Rate(f64),

    #[error("end time must be finite and positive, got {0}")]
    EndTime(f64),

    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("theta must lie in [0, 1], got {0}")]
    Theta(f64),

    #[error("end time {end_time} with time step {dt} needs more than {max} steps")]
    TooManySteps { end_time: f64, dt: f64, max: usize },
}

/// Validated parameters for one solve of `u' = -a·u, u(0) = I` on `[0, T]`.
///
/// Every scalar is accepted as `impl Into<f64>` and converted before any
/// arithmetic, so integer-typed arguments never cause integer division when
/// computing the number of steps.
///
/// # Example
///
/// ```
/// use decay_core::{Parameters, Scheme};
///
/// // Integer arguments are fine: Nt = 8 / 2 is computed in floating point.
/// let params = Parameters::new(1, 1, 8, 2, Scheme::BackwardEuler.theta()).unwrap();
/// assert_eq!(params.mesh().steps(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    initial: f64,
    rate: f64,
    requested_end_time: f64,
    theta: Theta,
    mesh: TimeMesh,
}

impl Parameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` or `rate` is not finite, if `end_time` or
    /// `dt` is not finite and positive, if `theta` is outside `[0, 1]`, or if
    /// the resulting mesh would be too large.
    pub fn new(
        initial: impl Into<f64>,
        rate: impl Into<f64>,
        end_time: impl Into<f64>,
        dt: impl Into<f64>,
        theta: impl Into<f64>,
    ) -> Result<Self, ParameterError> {
        let initial = initial.into();
        let rate = rate.into();
        let end_time = end_time.into();
        let dt = dt.into();

        if !initial.is_finite() {
            return Err(ParameterError::Initial(initial));
        }
        if !rate.is_finite() {
            return Err(ParameterError::Rate(rate));
        }
        let theta = Theta::new(theta.into())?;
        let mesh = TimeMesh::uniform(end_time, dt)?;

        Ok(Self {
            initial,
            rate,
            requested_end_time: end_time,
            theta,
            mesh,
        })
    }

    /// Returns a copy of these parameters with a different time step.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is invalid for the requested end time.
    pub fn with_dt(&self, dt: impl Into<f64>) -> Result<Self, ParameterError> {
        let mesh = TimeMesh::uniform(self.requested_end_time, dt.into())?;
        Ok(Self { mesh, ..*self })
    }

    /// Returns a copy of these parameters with a different theta weight.
    #[must_use]
    pub fn with_theta(&self, theta: Theta) -> Self {
        Self { theta, ..*self }
    }

    /// Returns the initial value `I`.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Returns the decay rate `a`.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the end time as requested, before snapping to the mesh.
    #[must_use]
    pub fn requested_end_time(&self) -> f64 {
        self.requested_end_time
    }

    /// Returns the time step `dt`.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.mesh.dt()
    }

    /// Returns the theta weight.
    #[must_use]
    pub fn theta(&self) -> Theta {
        self.theta
    }

    /// Returns the time mesh.
    #[must_use]
    pub fn mesh(&self) -> &TimeMesh {
        &self.mesh
    }

    /// Returns the update factor `A` for these parameters.
    #[must_use]
    pub fn update_factor(&self) -> UpdateFactor {
        UpdateFactor::new(self.rate, self.mesh.dt(), self.theta)
    }

    /// Evaluates the exact solution `I·e^(-a·t)`.
    #[must_use]
    pub fn exact(&self, t: f64) -> f64 {
        exact::exact_solution(t, self.initial, self.rate)
    }

    /// Evaluates the discrete exact solution `I·A^n`.
    #[must_use]
    pub fn discrete_exact(&self, n: u32) -> f64 {
        exact::discrete_exact_solution(n, self.initial, self.rate, self.theta, self.mesh.dt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integer_arguments_use_float_division() {
        let params = Parameters::new(1, 1, 8, 2, 1).unwrap();

        assert_eq!(params.mesh().steps(), 4);
        assert_relative_eq!(params.mesh().end_time(), 8.0);

        // 7 / 2 truncates to 3 in integer arithmetic, but rounds to 4 here.
        let params = Parameters::new(1, 1, 7, 2, 1).unwrap();
        assert_eq!(params.mesh().steps(), 4);
    }

    #[test]
    fn snapped_end_time_is_within_half_a_step() {
        let params = Parameters::new(1.0, 2.0, 4.0, 1.2, 0.0).unwrap();

        assert_eq!(params.mesh().steps(), 3);
        assert_relative_eq!(params.requested_end_time(), 4.0);
        assert!((params.mesh().end_time() - 4.0).abs() <= params.dt() / 2.0);
    }

    #[test]
    fn rejects_each_invalid_parameter() {
        assert!(matches!(
            Parameters::new(f64::NAN, 1.0, 1.0, 0.1, 0.5),
            Err(ParameterError::Initial(_))
        ));
        assert_eq!(
            Parameters::new(1.0, f64::INFINITY, 1.0, 0.1, 0.5),
            Err(ParameterError::Rate(f64::INFINITY))
        );
        assert_eq!(
            Parameters::new(1.0, 1.0, -1.0, 0.1, 0.5),
            Err(ParameterError::EndTime(-1.0))
        );
        assert_eq!(
            Parameters::new(1.0, 1.0, 1.0, 0.0, 0.5),
            Err(ParameterError::TimeStep(0.0))
        );
        assert_eq!(
            Parameters::new(1.0, 1.0, 1.0, 0.1, 1.1),
            Err(ParameterError::Theta(1.1))
        );
    }

    #[test]
    fn negative_rate_is_allowed() {
        let params = Parameters::new(1.0, -0.5, 1.0, 0.1, 0.5).unwrap();

        assert!(params.update_factor().value() > 1.0);
    }

    #[test]
    fn with_dt_keeps_requested_end_time() {
        let params = Parameters::new(1.0, 2.0, 1.0, 0.3, 0.5).unwrap();
        let finer = params.with_dt(0.25).unwrap();

        assert_relative_eq!(finer.requested_end_time(), 1.0);
        assert_eq!(finer.mesh().steps(), 4);
        assert_eq!(finer.theta(), params.theta());
        assert!(params.with_dt(-1.0).is_err());
    }

    #[test]
    fn reference_solutions_agree_at_start() {
        let params = Parameters::new(0.8, 1.2, 1.5, 0.5, 0.5).unwrap();

        assert_relative_eq!(params.exact(0.0), 0.8);
        assert_relative_eq!(params.discrete_exact(0), 0.8);
    }
}
