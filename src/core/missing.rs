use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Returns `true` when `value` equals one of the `encoding` sentinels.
#[inline]
pub fn is_missing(value: f64, encoding: &[f64]) -> bool {
    encoding.iter().any(|&m| m == value)
}

/// Ordered set of numeric sentinels that stand for absent data (e.g. `999`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MissingEncoding(Vec<f64>);

impl MissingEncoding {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_missing(&self, value: f64) -> bool {
        is_missing(value, &self.0)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        self.0.extend(values)
    }
}

impl From<Vec<f64>> for MissingEncoding {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for MissingEncoding {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for MissingEncoding {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for MissingEncoding {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
