//! Capability traits for solver events.
//!
//! Observers written against these traits work with any event that exposes
//! the same data, rather than with one solver's concrete event type.
//!
//! # Example
//!
//! ```rust
//! use decay_core::Observer;
//! use decay_observers::traits::StepRecord;
//!
//! /// Tracks the largest magnitude seen so far.
//! struct Peak(f64);
//!
//! impl<E: StepRecord, A> Observer<E, A> for Peak {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.0 = self.0.max(event.value().abs());
//!         None
//!     }
//! }
//! ```

use decay_core::UpdateFactor;
use decay_solvers::theta_rule;

/// An event describing one point of a time-stepped solution.
pub trait StepRecord {
    /// Returns the step number `n`.
    fn step(&self) -> usize;

    /// Returns the mesh time `t[n]`.
    fn time(&self) -> f64;

    /// Returns the solution value `u[n]`.
    fn value(&self) -> f64;

    /// Returns the update factor applied at this step, if the solver has one.
    fn factor(&self) -> Option<UpdateFactor> {
        None
    }
}

impl StepRecord for theta_rule::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn factor(&self) -> Option<UpdateFactor> {
        Some(self.factor)
    }
}
