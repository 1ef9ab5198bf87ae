use decay_core::Observer;

use crate::traits::StepRecord;

/// An observer that collects `(t, u)` pairs as a solve runs.
///
/// Points from successive solves are appended, so one recorder can gather
/// several runs; call [`Recorder::take`] between runs to keep them apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    points: Vec<[f64; 2]>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `[t, u]` pairs.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the largest `|u|` recorded, or `None` if nothing was recorded.
    #[must_use]
    pub fn peak(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|[_, u]| u.abs())
            .reduce(f64::max)
    }

    /// Removes and returns the recorded points.
    pub fn take(&mut self) -> Vec<[f64; 2]> {
        std::mem::take(&mut self.points)
    }
}

impl<E: StepRecord, A> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push([event.time(), event.value()]);
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the points can be read after the solve.
impl<E: StepRecord, A> Observer<E, A> for &mut Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
