use crate::core::matrix::DType;

/// Typed backing buffer of a [`Matrix`](crate::core::matrix::Matrix).
///
/// Values are read back as `f64`. Writing an `f64` follows the storage
/// semantics of the buffer's [`DType`]:
/// - floats: `float64` stores as is, `float32` rounds to nearest;
/// - integers: `NaN`/±∞ store `0`, otherwise truncate toward zero and wrap
///   modulo `2^bits`;
/// - `uint8_clamped`: `NaN` stores `0`, otherwise clamp to `[0, 255]` and
///   round half to even.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixData {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

#[inline]
fn wrap_integer(x: f64, bits: i32) -> u64 {
    if !x.is_finite() {
        return 0;
    }
    x.trunc().rem_euclid(2f64.powi(bits)) as u64
}

#[inline]
fn clamp_u8(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.clamp(0.0, 255.0).round_ties_even() as u8
}

macro_rules! dispatch {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            MatrixData::Int8($v) => $body,
            MatrixData::Uint8($v) => $body,
            MatrixData::Uint8Clamped($v) => $body,
            MatrixData::Int16($v) => $body,
            MatrixData::Uint16($v) => $body,
            MatrixData::Int32($v) => $body,
            MatrixData::Uint32($v) => $body,
            MatrixData::Float32($v) => $body,
            MatrixData::Float64($v) => $body,
        }
    };
}

impl MatrixData {
    /// Allocates a zero-filled buffer of `len` elements for `dtype`.
    pub fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::Int8 => MatrixData::Int8(vec![0; len]),
            DType::Uint8 => MatrixData::Uint8(vec![0; len]),
            DType::Uint8Clamped => MatrixData::Uint8Clamped(vec![0; len]),
            DType::Int16 => MatrixData::Int16(vec![0; len]),
            DType::Uint16 => MatrixData::Uint16(vec![0; len]),
            DType::Int32 => MatrixData::Int32(vec![0; len]),
            DType::Uint32 => MatrixData::Uint32(vec![0; len]),
            DType::Float32 => MatrixData::Float32(vec![0.0; len]),
            DType::Float64 => MatrixData::Float64(vec![0.0; len]),
        }
    }

    /// Builds a `dtype` buffer by storing each of `values` in turn.
    pub fn from_f64s(dtype: DType, values: &[f64]) -> Self {
        let mut data = Self::zeros(dtype, values.len());
        for (i, &x) in values.iter().enumerate() {
            data.set(i, x);
        }
        data
    }

    pub fn dtype(&self) -> DType {
        match self {
            MatrixData::Int8(_) => DType::Int8,
            MatrixData::Uint8(_) => DType::Uint8,
            MatrixData::Uint8Clamped(_) => DType::Uint8Clamped,
            MatrixData::Int16(_) => DType::Int16,
            MatrixData::Uint16(_) => DType::Uint16,
            MatrixData::Int32(_) => DType::Int32,
            MatrixData::Uint32(_) => DType::Uint32,
            MatrixData::Float32(_) => DType::Float32,
            MatrixData::Float64(_) => DType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        dispatch!(self, v => v.get(index).map(|&x| x as f64))
    }

    /// Stores `x` at `index` per the buffer's storage semantics.
    /// Out-of-range indices are ignored and reported with `false`.
    #[inline]
    pub fn set(&mut self, index: usize, x: f64) -> bool {
        if index >= self.len() {
            return false;
        }
        match self {
            MatrixData::Int8(v) => v[index] = wrap_integer(x, 8) as i8,
            MatrixData::Uint8(v) => v[index] = wrap_integer(x, 8) as u8,
            MatrixData::Uint8Clamped(v) => v[index] = clamp_u8(x),
            MatrixData::Int16(v) => v[index] = wrap_integer(x, 16) as i16,
            MatrixData::Uint16(v) => v[index] = wrap_integer(x, 16) as u16,
            MatrixData::Int32(v) => v[index] = wrap_integer(x, 32) as i32,
            MatrixData::Uint32(v) => v[index] = wrap_integer(x, 32) as u32,
            MatrixData::Float32(v) => v[index] = x as f32,
            MatrixData::Float64(v) => v[index] = x,
        }
        true
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        dispatch!(self, v => v.iter().map(|&x| x as f64).collect())
    }
}

impl From<Vec<f64>> for MatrixData {
    fn from(v: Vec<f64>) -> Self {
        MatrixData::Float64(v)
    }
}

impl From<Vec<f32>> for MatrixData {
    fn from(v: Vec<f32>) -> Self {
        MatrixData::Float32(v)
    }
}

impl From<Vec<i32>> for MatrixData {
    fn from(v: Vec<i32>) -> Self {
        MatrixData::Int32(v)
    }
}

impl From<Vec<u8>> for MatrixData {
    fn from(v: Vec<u8>) -> Self {
        MatrixData::Uint8(v)
    }
}
