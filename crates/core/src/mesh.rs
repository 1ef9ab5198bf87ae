use crate::ParameterError;

/// A uniform time mesh on `[0, T]`.
///
/// The number of intervals is `Nt = round(T / dt)`, rounding halfway cases
/// away from zero, and the end time is snapped to `Nt·dt`. The snapped end
/// time therefore differs from the requested one by at most `dt / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMesh {
    dt: f64,
    steps: usize,
}

impl TimeMesh {
    /// The largest number of intervals a mesh may have.
    pub const MAX_STEPS: usize = u32::MAX as usize;

    /// Creates the mesh for a requested end time and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_time` or `dt` is not finite and positive, or
    /// if the mesh would need more than [`TimeMesh::MAX_STEPS`] intervals.
    pub fn uniform(end_time: f64, dt: f64) -> Result<Self, ParameterError> {
        if !(end_time.is_finite() && end_time > 0.0) {
            return Err(ParameterError::EndTime(end_time));
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ParameterError::TimeStep(dt));
        }

        #[allow(clippy::cast_precision_loss)]
        let max = Self::MAX_STEPS as f64;
        let ratio = (end_time / dt).round();
        if ratio > max {
            return Err(ParameterError::TooManySteps {
                end_time,
                dt,
                max: Self::MAX_STEPS,
            });
        }

        // Integral and within [0, MAX_STEPS].
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ratio as usize;

        Ok(Self { dt, steps })
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of intervals `Nt`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of mesh points, `Nt + 1`.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.steps + 1
    }

    /// Returns the snapped end time `Nt·dt`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn end_time(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// Returns the mesh points `t[k] = k·T/Nt` for `k = 0..=Nt`.
    ///
    /// The last point equals [`TimeMesh::end_time`] exactly.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<f64> {
        if self.steps == 0 {
            return vec![0.0];
        }

        let end_time = self.end_time();
        let spacing = end_time / self.steps as f64;

        let mut points: Vec<f64> = (0..=self.steps).map(|k| k as f64 * spacing).collect();
        if let Some(last) = points.last_mut() {
            *last = end_time;
        }
        points
    }
}
