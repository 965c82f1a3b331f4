use crate::core::error::NanStdevError;
use crate::core::matrix::Matrix;
use crate::stats::{Axis, NanStdevOptions, nanstdev_array, nanstdev_matrix, try_nanstdev_by};
use crate::utils::predicates::{as_array_like, is_matrix_like};
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Input accepted by [`nanstdev`].
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// Flat sequence of values, or of records when an accessor is configured.
    Array(&'a [Value]),
    Matrix(&'a Matrix),
}

impl<'a> From<&'a [Value]> for Input<'a> {
    fn from(v: &'a [Value]) -> Self {
        Input::Array(v)
    }
}

impl<'a> From<&'a Vec<Value>> for Input<'a> {
    fn from(v: &'a Vec<Value>) -> Self {
        Input::Array(v.as_slice())
    }
}

impl<'a> From<&'a Matrix> for Input<'a> {
    fn from(m: &'a Matrix) -> Self {
        Input::Matrix(m)
    }
}

/// Non-absent result of [`nanstdev`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NanStdev {
    Scalar(f64),
    Matrix(Matrix),
}

impl NanStdev {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            NanStdev::Scalar(x) => Some(*x),
            NanStdev::Matrix(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            NanStdev::Matrix(m) => Some(m),
            NanStdev::Scalar(_) => None,
        }
    }
}

/// Standard deviation of `x`, ignoring non-numeric and missing values.
///
/// - Arrays produce a scalar, optionally reading records through the
///   configured accessor. An empty array is absent (`None`).
/// - Matrices with a dimension equal to 1 are treated as vectors and produce a
///   scalar.
/// - Other matrices produce a `[rows, 1]` (`dim = 2`) or `[1, cols]`
///   (`dim = 1`) matrix of `opts.dtype`, or `None` when a dimension is zero.
pub fn nanstdev(x: Input<'_>, opts: &NanStdevOptions) -> Result<Option<NanStdev>, NanStdevError> {
    opts.validate()?;
    let encoding = &opts.encoding;

    match x {
        Input::Matrix(mat) => {
            let [rows, cols] = mat.shape();
            if rows == 1 || cols == 1 {
                debug!("nanstdev: {rows}x{cols} matrix treated as a vector");
                let values: Vec<f64> = mat.iter().collect();
                return Ok(nanstdev_array(&values, encoding, opts.bias).map(NanStdev::Scalar));
            }
            let axis = Axis::from_dim(opts.dim)?;
            debug!(
                "nanstdev: {rows}x{cols} {} matrix along dim {} into {}",
                mat.dtype(),
                axis.dim(),
                opts.dtype
            );
            let out = Matrix::zeros(axis.output_shape(mat.shape()), opts.dtype);
            let out = nanstdev_matrix(out, mat, encoding, opts.bias, axis)?;
            Ok(out.map(NanStdev::Matrix))
        }
        Input::Array(values) => {
            let result = match opts.resolved_accessor() {
                Some(accessor) => {
                    debug!("nanstdev: {} records through accessor", values.len());
                    try_nanstdev_by(values, encoding, opts.bias, |v, i| accessor.call(v, i))
                        .map_err(NanStdevError::Accessor)?
                }
                None => {
                    debug!("nanstdev: {} values", values.len());
                    nanstdev_array(values, encoding, opts.bias)
                }
            };
            Ok(result.map(NanStdev::Scalar))
        }
    }
}

/// [`nanstdev`] over a JSON value: an array, or a matrix object
/// `{"shape": [r, c], "data": [...], "dtype"?, "strides"?, "offset"?}`.
pub fn nanstdev_value(x: &Value, opts: &NanStdevOptions) -> Result<Option<NanStdev>, NanStdevError> {
    if is_matrix_like(x) {
        let mat: Matrix = serde_json::from_value(x.clone())
            .map_err(|e| NanStdevError::InvalidMatrix(e.to_string()))?;
        return nanstdev(Input::Matrix(&mat), opts);
    }
    if let Some(values) = as_array_like(x) {
        return nanstdev(Input::Array(values), opts);
    }
    Err(NanStdevError::InvalidInput(format!(
        "first argument must be either an array or a matrix, got `{x}`"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BoxError;
    use crate::core::matrix::{DType, MatrixData};
    use crate::testing::dummies::{int32_6x5_with_sentinels, mixed_values, sentinel_records, seq_3x3};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-12;

    fn scalar(r: Result<Option<NanStdev>, NanStdevError>) -> f64 {
        r.unwrap().unwrap().as_scalar().unwrap()
    }

    fn sentinel_opts() -> NanStdevOptions {
        NanStdevOptions::default().with_encoding([999.0])
    }

    #[test]
    fn array_scenarios() {
        let data = mixed_values();
        let sd = scalar(nanstdev((&data).into(), &sentinel_opts()));
        assert!((sd - 2.280350850198276).abs() < EPS);

        let sd = scalar(nanstdev((&data).into(), &sentinel_opts().with_bias(true)));
        assert!((sd - 2.0816659994661326).abs() < EPS);

        let one = vec![json!(2)];
        assert_eq!(scalar(nanstdev((&one).into(), &sentinel_opts())), 0.0);

        let empty: Vec<Value> = vec![];
        assert!(nanstdev((&empty).into(), &sentinel_opts()).unwrap().is_none());
    }

    #[test]
    fn accessor_scenario_matches_array_scenario() {
        let records = sentinel_records();
        let opts = sentinel_opts().with_accessor(|r, _| Ok(r["x"].clone()));
        let sd = scalar(nanstdev((&records).into(), &opts));
        assert!((sd - 2.280350850198276).abs() < EPS);

        let opts = sentinel_opts().with_field("/x").with_bias(true);
        let sd = scalar(nanstdev((&records).into(), &opts));
        assert!((sd - 2.0816659994661326).abs() < EPS);
    }

    #[test]
    fn accessor_on_empty_array_is_absent() {
        let empty: Vec<Value> = vec![];
        let opts = NanStdevOptions::default().with_field("/x");
        assert!(nanstdev((&empty).into(), &opts).unwrap().is_none());
    }

    #[test]
    fn accessor_sees_every_index_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let opts = NanStdevOptions::default().with_accessor(move |v, i| {
            sink.lock().unwrap().push(i);
            Ok(v.clone())
        });
        let data = vec![json!(1), json!("x"), json!(3)];
        nanstdev((&data).into(), &opts).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[derive(Debug)]
    struct Corrupt;

    impl std::fmt::Display for Corrupt {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "corrupt record")
        }
    }

    impl std::error::Error for Corrupt {}

    #[test]
    fn accessor_error_is_propagated() {
        let opts = NanStdevOptions::default().with_accessor(|_, i| {
            if i == 1 {
                Err(Box::new(Corrupt) as BoxError)
            } else {
                Ok(json!(1))
            }
        });
        let data = vec![json!({}), json!({}), json!({})];
        match nanstdev((&data).into(), &opts) {
            Err(NanStdevError::Accessor(e)) => {
                assert!(e.downcast_ref::<Corrupt>().is_some());
                assert_eq!(e.to_string(), "corrupt record");
            }
            other => panic!("expected accessor error, got {other:?}"),
        }
    }

    #[test]
    fn matrix_defaults_to_per_row_float64() {
        let r = nanstdev((&seq_3x3()).into(), &NanStdevOptions::default()).unwrap().unwrap();
        let m = r.as_matrix().unwrap();
        assert_eq!(m.shape(), [3, 1]);
        assert_eq!(m.dtype(), DType::Float64);
        assert_eq!(m.to_string(), "1;1;1");
    }

    #[test]
    fn matrix_per_column() {
        let opts = NanStdevOptions::default().with_dim(1);
        let r = nanstdev((&seq_3x3()).into(), &opts).unwrap().unwrap();
        let m = r.as_matrix().unwrap();
        assert_eq!(m.shape(), [1, 3]);
        assert_eq!(m.to_string(), "3,3,3");
    }

    #[test]
    fn matrix_output_dtype() {
        let opts = sentinel_opts().with_dtype(DType::Uint8);
        let r = nanstdev((&int32_6x5_with_sentinels()).into(), &opts).unwrap().unwrap();
        let m = r.as_matrix().unwrap();
        assert_eq!(m.data(), &MatrixData::Uint8(vec![1, 1, 1, 1, 1, 0]));

        let opts = sentinel_opts().with_dim(1).with_dtype(DType::Int16);
        let r = nanstdev((&int32_6x5_with_sentinels()).into(), &opts).unwrap().unwrap();
        assert_eq!(r.as_matrix().unwrap().data(), &MatrixData::Int16(vec![7; 5]));
    }

    #[test]
    fn vector_matrices_give_scalars() {
        let row = Matrix::new(MatrixData::from(vec![2.0, 4.0, 5.0, 3.0, 8.0, 2.0, 999.0]), [1, 7]).unwrap();
        let col = row.clone().transpose();
        for m in [&row, &col] {
            let sd = scalar(nanstdev(m.into(), &sentinel_opts()));
            assert!((sd - 5.2f64.sqrt()).abs() < EPS);
        }
        // dim is not checked for vectors
        let sd = scalar(nanstdev((&row).into(), &sentinel_opts().with_dim(5)));
        assert!((sd - 5.2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn degenerate_vector_matrix_is_absent() {
        let m = Matrix::zeros([1, 0], DType::Float64);
        assert!(nanstdev((&m).into(), &NanStdevOptions::default()).unwrap().is_none());
    }

    #[test]
    fn zero_sized_matrix_is_absent() {
        for shape in [[0, 10], [10, 0], [0, 0]] {
            let m = Matrix::zeros(shape, DType::Float64);
            assert!(nanstdev((&m).into(), &NanStdevOptions::default()).unwrap().is_none());
        }
    }

    #[test]
    fn dim_out_of_range_for_matrix() {
        let opts = NanStdevOptions::default().with_dim(3);
        let err = nanstdev((&seq_3x3()).into(), &opts).unwrap_err();
        assert!(matches!(err, NanStdevError::DimensionOutOfRange { dim: 3 }));
    }

    #[test]
    fn dim_zero_is_invalid_option() {
        let opts = NanStdevOptions::default().with_dim(0);
        let err = nanstdev((&seq_3x3()).into(), &opts).unwrap_err();
        assert!(matches!(err, NanStdevError::InvalidOption(_)));
    }

    #[test]
    fn value_entry_point_dispatches_on_shape() {
        let opts = sentinel_opts();
        let arr = json!([2, 4, 5, 3, 8, 2, null, true, {}, "string", [], 999, 999]);
        let sd = scalar(nanstdev_value(&arr, &opts));
        assert!((sd - 2.280350850198276).abs() < EPS);

        let mat = json!({"dtype": "int32", "shape": [3, 3], "data": [1, 2, 3, 4, 5, 6, 7, 8, 9]});
        let r = nanstdev_value(&mat, &NanStdevOptions::default().with_dim(1)).unwrap().unwrap();
        assert_eq!(r.as_matrix().unwrap().to_string(), "3,3,3");

        assert!(nanstdev_value(&json!([]), &opts).unwrap().is_none());
    }

    #[test]
    fn value_entry_point_rejects_non_collections() {
        for bad in [json!("5"), json!(5), json!(true), json!(null), json!({}), json!({"x": 1})] {
            match nanstdev_value(&bad, &NanStdevOptions::default()) {
                Err(NanStdevError::InvalidInput(_)) => {}
                other => panic!("expected InvalidInput for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn value_entry_point_reports_bad_matrices() {
        let bad = json!({"shape": [2, 2], "data": [1, 2, 3]});
        assert!(matches!(
            nanstdev_value(&bad, &NanStdevOptions::default()),
            Err(NanStdevError::InvalidMatrix(_))
        ));
    }

    #[test]
    fn results_serialize_as_plain_json() {
        let v = serde_json::to_value(NanStdev::Scalar(1.5)).unwrap();
        assert_eq!(v, json!(1.5));
        let r = nanstdev((&seq_3x3()).into(), &NanStdevOptions::default()).unwrap();
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["shape"], json!([3, 1]));
        assert_eq!(v["data"], json!([1.0, 1.0, 1.0]));
    }
}
