use crate::core::error::NanStdevError;
use crate::core::matrix::{DType, Matrix, MatrixData};
use crate::core::missing::MissingEncoding;
use crate::stats::{Input, NanStdev, NanStdevOptions, nanstdev, nanstdev_array, nanstdev_value};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

const DEMO_LEN: usize = 1000;
const DEMO_SHAPE: [usize; 2] = [100, 10];

/// Random values in `[0, 100)` with every fifth entry `NaN`.
pub fn demo_data(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..DEMO_LEN)
        .map(|i| {
            if i % 5 == 0 {
                f64::NAN
            } else {
                rng.random::<f64>() * 100.0
            }
        })
        .collect()
}

fn render(r: Option<NanStdev>) -> String {
    match r {
        None => "null".to_string(),
        Some(NanStdev::Scalar(x)) => x.to_string(),
        Some(NanStdev::Matrix(m)) => m.to_string(),
    }
}

/// Runs every input shape over the same random data; one line per case.
pub fn run_demo(seed: u64) -> Result<Vec<String>, NanStdevError> {
    info!("running demo with seed {seed}");
    let data = demo_data(seed);
    let none = MissingEncoding::empty();
    let mut lines = Vec::new();

    let sd = nanstdev_array(&data, &none, false);
    lines.push(format!("Arrays: {}", render(sd.map(NanStdev::Scalar))));

    let records = Value::Array(data.iter().map(|&x| json!({ "x": x })).collect());
    let by_field = nanstdev_value(&records, &NanStdevOptions::default().with_field("/x"))?;
    lines.push(format!("Accessors: {}", render(by_field)));

    let typed: Vec<f32> = data.iter().map(|&x| x as f32).collect();
    let sd = nanstdev_array(&typed, &none, false);
    lines.push(format!("Typed arrays: {}", render(sd.map(NanStdev::Scalar))));

    let mat = Matrix::new(MatrixData::Float64(data), DEMO_SHAPE)?;
    let per_column = nanstdev(Input::Matrix(&mat), &NanStdevOptions::default().with_dim(1))?;
    lines.push(format!("Matrix (columns): {}", render(per_column)));

    let per_row = nanstdev(Input::Matrix(&mat), &NanStdevOptions::default().with_dim(2))?;
    lines.push(format!("Matrix (rows): {}", render(per_row)));

    let opts = NanStdevOptions::default().with_dtype(DType::Uint8);
    let narrow = nanstdev(Input::Matrix(&mat), &opts)?;
    lines.push(format!("Matrix ({}): {}", opts.dtype, render(narrow)));

    Ok(lines)
}
