//! Core types for solving the linear decay equation `u' = -a·u, u(0) = I`.
//!
//! This crate defines everything the theta-rule solver and its callers share:
//!
//! - [`Parameters`] — validated problem and discretization parameters
//! - [`Theta`] and [`Scheme`] — the theta-rule weight and its named schemes
//! - [`UpdateFactor`] — the per-step amplification `A` of the recurrence
//! - [`TimeMesh`] — the uniform time mesh with `T` snapped to a multiple of `dt`
//! - [`exact`] — the continuous and discrete exact solutions
//! - [`norm`] — the discrete L2 error norm
//! - [`Observer`] — receives solver events for logging or plotting

mod mesh;
mod observer;
mod parameters;
mod scheme;
mod update;

pub mod exact;
pub mod norm;

pub use mesh::TimeMesh;
pub use observer::Observer;
pub use parameters::{ParameterError, Parameters};
pub use scheme::{Scheme, SchemeError, Theta};
pub use update::UpdateFactor;
