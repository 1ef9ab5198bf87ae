use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::ParameterError;

/// The theta-rule weight, guaranteed to lie in `[0, 1]`.
///
/// `0` gives the explicit Forward Euler scheme, `1` the implicit Backward
/// Euler scheme, and `0.5` Crank-Nicolson. Any other value in between is a
/// valid member of the family.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Theta(f64);

impl Theta {
    pub const FORWARD_EULER: Self = Self(0.0);
    pub const CRANK_NICOLSON: Self = Self(0.5);
    pub const BACKWARD_EULER: Self = Self(1.0);

    /// Creates a theta weight.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Theta`] if `value` is outside `[0, 1]` or NaN.
    pub fn new(value: f64) -> Result<Self, ParameterError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParameterError::Theta(value))
        }
    }

    /// Returns the weight as a plain `f64`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Theta> for f64 {
    fn from(theta: Theta) -> Self {
        theta.0
    }
}

impl TryFrom<f64> for Theta {
    type Error = ParameterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scheme> for Theta {
    fn from(scheme: Scheme) -> Self {
        scheme.theta()
    }
}

/// A named member of the theta-rule family.
///
/// Schemes are written by their short names on the command line:
/// `FE` (Forward Euler), `CN` (Crank-Nicolson), and `BE` (Backward Euler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    ForwardEuler,
    CrankNicolson,
    BackwardEuler,
}

/// Errors that can occur when parsing a [`Scheme`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("invalid scheme name `{0}`, expected one of FE, CN, BE")]
    Unknown(String),
}

impl Scheme {
    /// All schemes, in the order FE, CN, BE.
    pub const ALL: [Self; 3] = [Self::ForwardEuler, Self::CrankNicolson, Self::BackwardEuler];

    /// Returns the theta weight selecting this scheme.
    #[must_use]
    pub fn theta(self) -> Theta {
        match self {
            Self::ForwardEuler => Theta::FORWARD_EULER,
            Self::CrankNicolson => Theta::CRANK_NICOLSON,
            Self::BackwardEuler => Theta::BACKWARD_EULER,
        }
    }

    /// Returns the short name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ForwardEuler => "FE",
            Self::CrankNicolson => "CN",
            Self::BackwardEuler => "BE",
        }
    }

    /// Returns the named scheme for `theta`, if it is one of the three.
    #[must_use]
    pub fn from_theta(theta: Theta) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.theta() == theta)
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| SchemeError::Unknown(s.to_owned()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_names_map_to_theta() {
        let lookup = [("FE", 0.0), ("CN", 0.5), ("BE", 1.0)];

        for (name, expected) in lookup {
            let scheme: Scheme = name.parse().expect("known scheme");
            assert_eq!(scheme.theta().value(), expected);
            assert_eq!(scheme.to_string(), name);
        }
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert_eq!(
            "RK4".parse::<Scheme>(),
            Err(SchemeError::Unknown("RK4".into()))
        );
        assert!("be".parse::<Scheme>().is_err(), "names are case-sensitive");
    }

    #[test]
    fn theta_bounds() {
        assert!(Theta::new(0.0).is_ok());
        assert!(Theta::new(1.0).is_ok());
        assert!(Theta::new(0.8).is_ok());

        assert_eq!(Theta::new(-0.1), Err(ParameterError::Theta(-0.1)));
        assert_eq!(Theta::new(1.5), Err(ParameterError::Theta(1.5)));
        assert!(Theta::new(f64::NAN).is_err());
    }

    #[test]
    fn named_schemes_recovered_from_theta() {
        assert_eq!(
            Scheme::from_theta(Theta::CRANK_NICOLSON),
            Some(Scheme::CrankNicolson)
        );
        assert_eq!(Scheme::from_theta(Theta::new(0.8).unwrap()), None);
    }
}
