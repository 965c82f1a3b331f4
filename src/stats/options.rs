use crate::core::error::{BoxError, NanStdevError};
use crate::core::matrix::DType;
use crate::core::missing::MissingEncoding;
use crate::stats::Accessor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_false() -> bool {
    false
}

fn default_dim() -> u32 {
    2
}

fn default_dtype() -> DType {
    DType::Float64
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NanStdevOptions {
    #[serde(default = "default_false")]
    #[schemars(
        title = "Bias",
        description = "Compute the biased (population, divide by N) estimate instead of the sample (N - 1) estimate",
        default = "default_false"
    )]
    pub bias: bool,

    #[serde(default = "default_dim")]
    #[schemars(
        title = "Dimension",
        description = "Matrix dimension to reduce: 1 gives one result per column, 2 one result per row",
        range(min = 1, max = 2),
        default = "default_dim"
    )]
    pub dim: u32,

    #[serde(default = "default_dtype")]
    #[schemars(
        title = "Output data type",
        description = "Storage type of the output matrix",
        default = "default_dtype"
    )]
    pub dtype: DType,

    #[serde(default)]
    #[schemars(
        title = "Missing-value encoding",
        description = "Numeric values to treat as missing data"
    )]
    pub encoding: MissingEncoding,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Field",
        description = "JSON pointer (e.g. \"/x\") used to read each record of an array"
    )]
    pub field: Option<String>,

    #[serde(skip)]
    pub accessor: Option<Accessor>,
}

impl Default for NanStdevOptions {
    fn default() -> Self {
        Self {
            bias: default_false(),
            dim: default_dim(),
            dtype: default_dtype(),
            encoding: MissingEncoding::default(),
            field: None,
            accessor: None,
        }
    }
}

impl NanStdevOptions {
    /// Reads options from a JSON object; malformed fields are `InvalidOption`.
    pub fn from_json(value: &Value) -> Result<Self, NanStdevError> {
        if !value.is_object() {
            return Err(NanStdevError::InvalidOption(format!(
                "options argument must be an object, got `{value}`"
            )));
        }
        let opts: NanStdevOptions = serde_json::from_value(value.clone())
            .map_err(|e| NanStdevError::InvalidOption(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Checks option values that do not depend on the input shape.
    ///
    /// `dim` beyond the matrix rank is reported at dispatch time instead.
    pub fn validate(&self) -> Result<(), NanStdevError> {
        if self.dim == 0 {
            return Err(NanStdevError::InvalidOption(
                "`dim` must be a positive integer".to_string(),
            ));
        }
        if let Some(field) = &self.field {
            if !field.is_empty() && !field.starts_with('/') {
                return Err(NanStdevError::InvalidOption(format!(
                    "`field` must be a JSON pointer starting with '/', got `{field}`"
                )));
            }
        }
        Ok(())
    }

    /// The accessor in effect: an explicit one wins over `field`.
    pub fn resolved_accessor(&self) -> Option<Accessor> {
        self.accessor
            .clone()
            .or_else(|| self.field.as_deref().map(Accessor::pointer))
    }

    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_dim(mut self, dim: u32) -> Self {
        self.dim = dim;
        self
    }

    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    pub fn with_encoding<E: Into<MissingEncoding>>(mut self, encoding: E) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_accessor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, usize) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.accessor = Some(Accessor::new(f));
        self
    }
}
