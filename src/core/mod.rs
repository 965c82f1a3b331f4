pub mod error;
pub mod estimators;
pub mod matrix;
pub mod missing;
pub mod samples;

pub use error::{BoxError, NanStdevError};
