use crate::core::matrix::{Matrix, MatrixData};

/// 6x5 `int32` matrix holding `1..=25` row-major, last row all `999`.
pub fn int32_6x5_with_sentinels() -> Matrix {
    let data: Vec<i32> = (0..30).map(|i| if i < 25 { i + 1 } else { 999 }).collect();
    Matrix::new(MatrixData::Int32(data), [6, 5]).expect("6x5 fixture")
}

/// 3x3 `float64` matrix holding `1..=9` row-major.
pub fn seq_3x3() -> Matrix {
    let data: Vec<f64> = (1..=9).map(f64::from).collect();
    Matrix::new(MatrixData::Float64(data), [3, 3]).expect("3x3 fixture")
}
