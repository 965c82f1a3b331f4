use crate::core::error::NanStdevError;
use crate::core::estimators::WelfordEstimator;
use crate::core::matrix::Matrix;
use crate::core::missing::MissingEncoding;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction of a matrix reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// `dim = 1`: reduce down each column, one result per column (`[1, cols]`).
    PerColumn,
    /// `dim = 2`: reduce across each row, one result per row (`[rows, 1]`).
    #[default]
    PerRow,
}

impl Axis {
    /// Maps the numeric `dim` option onto an axis.
    pub fn from_dim(dim: u32) -> Result<Self, NanStdevError> {
        match dim {
            1 => Ok(Axis::PerColumn),
            2 => Ok(Axis::PerRow),
            0 => Err(NanStdevError::InvalidOption(
                "dimension must be a positive integer".to_string(),
            )),
            dim => Err(NanStdevError::DimensionOutOfRange { dim }),
        }
    }

    pub fn dim(self) -> u32 {
        match self {
            Axis::PerColumn => 1,
            Axis::PerRow => 2,
        }
    }

    /// Shape of the output matrix for an input of shape `shape`.
    pub fn output_shape(self, shape: [usize; 2]) -> [usize; 2] {
        match self {
            Axis::PerColumn => [1, shape[1]],
            Axis::PerRow => [shape[0], 1],
        }
    }
}

/// Standard deviation of every row or column of `mat`, written into `out`.
///
/// Line `i` is stored at backing position `i` of `out`, converted per `out`'s
/// storage type. Traversal uses `mat`'s own offset and strides, so flipped
/// and transposed views are handled without copying.
///
/// # Returns
/// - `Ok(None)` if either dimension of `mat` is zero (nothing is written);
/// - `Err(InvalidMatrix)` if `out` holds fewer elements than there are lines;
/// - otherwise `Ok(Some(out))`.
pub fn nanstdev_matrix(
    mut out: Matrix,
    mat: &Matrix,
    encoding: &MissingEncoding,
    bias: bool,
    axis: Axis,
) -> Result<Option<Matrix>, NanStdevError> {
    let [rows, cols] = mat.shape();
    let [s0, s1] = mat.strides();
    let (lines, len, line_stride, step) = match axis {
        Axis::PerRow => (rows, cols, s0, s1),
        Axis::PerColumn => (cols, rows, s1, s0),
    };
    if lines == 0 || len == 0 {
        return Ok(None);
    }
    if out.data().len() < lines {
        return Err(NanStdevError::InvalidMatrix(format!(
            "output holds {} elements, {lines} required",
            out.data().len()
        )));
    }

    let data = mat.data();
    let offset = mat.offset() as isize;
    for i in 0..lines {
        let start = offset + i as isize * line_stride;
        let mut est = WelfordEstimator::new();
        for j in 0..len {
            let k = start + j as isize * step;
            est.observe(usize::try_from(k).ok().and_then(|k| data.get(k)), encoding);
        }
        out.data_mut().set(i, est.std_dev(bias));
    }
    Ok(Some(out))
}
