use crate::core::error::BoxError;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

type AccessorFn = dyn Fn(&Value, usize) -> Result<Value, BoxError> + Send + Sync;

/// Shared record accessor for the dynamic (JSON) surface.
///
/// Called once per element with the element and its zero-based index.
#[derive(Clone)]
pub struct Accessor(Arc<AccessorFn>);

impl Accessor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, usize) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Accessor reading a JSON pointer (e.g. `"/x"`). Unresolved pointers read as `null`.
    pub fn pointer<S: Into<String>>(pointer: S) -> Self {
        let pointer = pointer.into();
        Self::new(move |record, _| Ok(record.pointer(&pointer).cloned().unwrap_or(Value::Null)))
    }

    #[inline]
    pub fn call(&self, record: &Value, index: usize) -> Result<Value, BoxError> {
        (self.0)(record, index)
    }
}

impl Debug for Accessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Accessor(..)")
    }
}
