mod dtype;
mod matrix;
mod matrix_data;

pub use dtype::DType;
pub use matrix::Matrix;
pub use matrix_data::MatrixData;
