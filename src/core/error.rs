use thiserror::Error;

/// Boxed failure raised by a dynamic [`Accessor`](crate::stats::Accessor).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum NanStdevError {
    #[error("invalid input argument: {0}")]
    InvalidInput(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid option: dimension {dim} exceeds the number of matrix dimensions (2)")]
    DimensionOutOfRange { dim: u32 },

    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    #[error(transparent)]
    Accessor(BoxError),
}
