use decay_core::ParameterError;

/// Errors that can occur when setting up a theta-rule solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
}
