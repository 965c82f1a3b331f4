mod matrices;
mod samples;

pub use matrices::{int32_6x5_with_sentinels, seq_3x3};
pub use samples::{mixed_values, sentinel_records};
