use decay_core::UpdateFactor;

/// Event emitted by the theta-rule solver for each mesh point.
///
/// Step 0 carries the initial condition. Steps `1..=Nt` are emitted after
/// each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number `n`.
    pub step: usize,

    /// The mesh time `t[n]`.
    pub time: f64,

    /// The solution value `u[n]`.
    pub value: f64,

    /// The update factor and its explicit and implicit sub-factors.
    pub factor: UpdateFactor,
}
