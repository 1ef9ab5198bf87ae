/// Control actions supported by the theta-rule solver.
///
/// There are none. Observers may watch a solve but cannot steer or stop it,
/// so a solution always covers the full mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
