pub mod cli;
pub mod core;
pub mod stats;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
