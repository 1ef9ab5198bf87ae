use crate::Theta;

/// The per-step amplification factor of the theta-rule.
///
/// Applying the theta-rule to `u' = -a·u` gives the recurrence
///
/// ```text
/// u[n+1] = (1 - (1 - θ)·a·dt) / (1 + θ·a·dt) · u[n] = A · u[n]
/// ```
///
/// The numerator is the explicit sub-factor and the denominator the implicit
/// one. Both depend only on `a`, `dt`, and `θ`, so `A` is constant across a
/// solve and the solver and discrete exact solution share the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateFactor {
    explicit: f64,
    implicit: f64,
}

impl UpdateFactor {
    /// Computes the sub-factors for decay rate `rate`, step `dt`, and `theta`.
    #[must_use]
    pub fn new(rate: f64, dt: f64, theta: Theta) -> Self {
        let theta = theta.value();
        Self {
            explicit: 1.0 - (1.0 - theta) * rate * dt,
            implicit: 1.0 + theta * rate * dt,
        }
    }

    /// Returns the explicit sub-factor `1 - (1 - θ)·a·dt`.
    #[must_use]
    pub fn explicit(&self) -> f64 {
        self.explicit
    }

    /// Returns the implicit sub-factor `1 + θ·a·dt`.
    #[must_use]
    pub fn implicit(&self) -> f64 {
        self.implicit
    }

    /// Returns the amplification factor `A`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.explicit / self.implicit
    }

    /// Returns `true` if `|A| > 1`, meaning the discrete solution grows.
    #[must_use]
    pub fn is_amplifying(&self) -> bool {
        self.value().abs() > 1.0
    }
}
