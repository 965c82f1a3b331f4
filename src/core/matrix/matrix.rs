use crate::core::error::NanStdevError;
use crate::core::matrix::{DType, MatrixData};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Two-dimensional strided view over a typed buffer.
///
/// Element `(i, j)` lives at `offset + i * strides[0] + j * strides[1]` in the
/// backing buffer. Strides may be negative, so flipped and transposed views are
/// expressed purely through metadata. Every constructor checks that all
/// addressed elements are inside the buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    data: MatrixData,
    shape: [usize; 2],
    strides: [isize; 2],
    offset: usize,
}

impl Matrix {
    /// Row-major matrix over `data`, which must hold exactly `rows * cols` elements.
    pub fn new(data: MatrixData, shape: [usize; 2]) -> Result<Self, NanStdevError> {
        let expected = shape[0]
            .checked_mul(shape[1])
            .ok_or_else(|| NanStdevError::InvalidMatrix(format!("shape {shape:?} overflows")))?;
        if data.len() != expected {
            return Err(NanStdevError::InvalidMatrix(format!(
                "shape {:?} needs {expected} elements, buffer holds {}",
                shape,
                data.len()
            )));
        }
        Self::from_parts(data, shape, row_major_strides(shape), 0)
    }

    /// Zero-filled row-major matrix of the given shape and storage type.
    pub fn zeros(shape: [usize; 2], dtype: DType) -> Self {
        Self {
            data: MatrixData::zeros(dtype, shape[0] * shape[1]),
            shape,
            strides: row_major_strides(shape),
            offset: 0,
        }
    }

    pub fn from_parts(
        data: MatrixData,
        shape: [usize; 2],
        strides: [isize; 2],
        offset: usize,
    ) -> Result<Self, NanStdevError> {
        check_bounds(data.len(), shape, strides, offset)?;
        Ok(Self {
            data,
            shape,
            strides,
            offset,
        })
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Number of logical elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn strides(&self) -> [isize; 2] {
        self.strides
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn data(&self) -> &MatrixData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut MatrixData {
        &mut self.data
    }

    pub fn into_data(self) -> MatrixData {
        self.data
    }

    /// Backing-buffer position of element `(i, j)`.
    #[inline]
    pub fn index_of(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.shape[0] || j >= self.shape[1] {
            return None;
        }
        let k = self.offset as isize + i as isize * self.strides[0] + j as isize * self.strides[1];
        usize::try_from(k).ok()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.index_of(i, j).and_then(|k| self.data.get(k))
    }

    pub fn set(&mut self, i: usize, j: usize, x: f64) -> bool {
        match self.index_of(i, j) {
            Some(k) => self.data.set(k, x),
            None => false,
        }
    }

    /// Logical elements in row-major order, independent of the stride layout.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let [rows, cols] = self.shape;
        (0..rows).flat_map(move |i| (0..cols).filter_map(move |j| self.get(i, j)))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.shape[0])
            .map(|i| (0..self.shape[1]).filter_map(|j| self.get(i, j)).collect())
            .collect()
    }

    /// Reverses row order without touching the buffer.
    pub fn flipud(mut self) -> Self {
        if self.shape[0] > 0 {
            self.offset = (self.offset as isize + (self.shape[0] as isize - 1) * self.strides[0]) as usize;
        }
        self.strides[0] = -self.strides[0];
        self
    }

    /// Reverses column order without touching the buffer.
    pub fn fliplr(mut self) -> Self {
        if self.shape[1] > 0 {
            self.offset = (self.offset as isize + (self.shape[1] as isize - 1) * self.strides[1]) as usize;
        }
        self.strides[1] = -self.strides[1];
        self
    }

    /// Swaps rows and columns without touching the buffer.
    pub fn transpose(mut self) -> Self {
        self.shape.swap(0, 1);
        self.strides.swap(0, 1);
        self
    }
}

fn row_major_strides(shape: [usize; 2]) -> [isize; 2] {
    [shape[1] as isize, 1]
}

fn check_bounds(
    len: usize,
    shape: [usize; 2],
    strides: [isize; 2],
    offset: usize,
) -> Result<(), NanStdevError> {
    if shape[0] == 0 || shape[1] == 0 {
        return Ok(());
    }
    let overflow = || NanStdevError::InvalidMatrix(format!("strides {strides:?} overflow for shape {shape:?}"));
    let mut lo = offset as i128;
    let mut hi = offset as i128;
    for d in 0..2 {
        let span = (shape[d] as i128 - 1)
            .checked_mul(strides[d] as i128)
            .ok_or_else(overflow)?;
        if span < 0 {
            lo += span;
        } else {
            hi += span;
        }
    }
    if lo < 0 || hi >= len as i128 {
        return Err(NanStdevError::InvalidMatrix(format!(
            "shape {shape:?}, strides {strides:?} and offset {offset} address [{lo}, {hi}] outside a buffer of {len} elements"
        )));
    }
    Ok(())
}

/// Rows separated by `;`, columns by `,`.
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}

/// Wire form: `{"dtype", "shape", "strides"?, "offset"?, "data"}`.
/// `null` entries in `data` read as `NaN` before storage conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMatrix {
    #[serde(default)]
    dtype: DType,
    shape: [usize; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strides: Option<[isize; 2]>,
    #[serde(default)]
    offset: usize,
    data: Vec<Option<f64>>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = NanStdevError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let values: Vec<f64> = raw.data.iter().map(|x| x.unwrap_or(f64::NAN)).collect();
        let data = MatrixData::from_f64s(raw.dtype, &values);
        match raw.strides {
            Some(strides) => Matrix::from_parts(data, raw.shape, strides, raw.offset),
            None => Matrix::from_parts(data, raw.shape, row_major_strides(raw.shape), raw.offset),
        }
    }
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        let data = m
            .data
            .to_f64_vec()
            .into_iter()
            .map(|x| if x.is_nan() { None } else { Some(x) })
            .collect();
        RawMatrix {
            dtype: m.data.dtype(),
            shape: m.shape,
            strides: Some(m.strides),
            offset: m.offset,
            data,
        }
    }
}
