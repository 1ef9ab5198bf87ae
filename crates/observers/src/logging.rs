use decay_core::Observer;
use tracing::{debug, info};

use crate::traits::StepRecord;

/// An observer that logs every step through `tracing`.
///
/// Each step emits `u[n]` at `info` level and, when the event carries an
/// update factor, its explicit and implicit sub-factors at `debug` level.
/// Nothing is written unless the caller installs a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    logged: usize,
}

impl TracingObserver {
    /// Creates a new observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of steps logged so far.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E: StepRecord, A> Observer<E, A> for TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        info!(step, time = event.time(), "u[{step}]={}", event.value());
        if let Some(factor) = event.factor() {
            debug!(
                explicit = factor.explicit(),
                implicit = factor.implicit(),
                "1 - (1-theta)*a*dt = {}, 1 + theta*a*dt = {}",
                factor.explicit(),
                factor.implicit()
            );
        }
        self.logged += 1;
        None
    }
}

/// Allows `&mut TracingObserver` to be passed to solvers that take an
/// observer by value, so the count can be read after the solve.
impl<E: StepRecord, A> Observer<E, A> for &mut TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
