//! Solvers for the linear decay equation `u' = -a·u, u(0) = I`.
//!
//! - [`theta_rule`] — the theta-rule time stepper, unifying Forward Euler,
//!   Crank-Nicolson, and Backward Euler
//! - [`sweep`] — repeats a solve over several step sizes and estimates
//!   convergence rates from the resulting error norms

pub mod sweep;
pub mod theta_rule;
