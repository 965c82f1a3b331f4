use crate::core::error::NanStdevError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Closed set of numeric storage representations for matrix buffers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DType {
    #[strum(message = "8-bit signed integer")]
    Int8,
    #[strum(message = "8-bit unsigned integer")]
    Uint8,
    #[strum(message = "8-bit unsigned integer, clamped and rounded")]
    Uint8Clamped,
    #[strum(message = "16-bit signed integer")]
    Int16,
    #[strum(message = "16-bit unsigned integer")]
    Uint16,
    #[strum(message = "32-bit signed integer")]
    Int32,
    #[strum(message = "32-bit unsigned integer")]
    Uint32,
    #[strum(message = "32-bit float")]
    Float32,
    #[default]
    #[strum(message = "64-bit float")]
    Float64,
}

impl DType {
    /// Looks up a storage representation by name (`"float64"`, `"uint8"`, ...).
    pub fn from_name(name: &str) -> Result<Self, NanStdevError> {
        DType::from_str(name).map_err(|_| {
            let known: Vec<&'static str> = DType::iter().map(Into::into).collect();
            NanStdevError::InvalidOption(format!(
                "data type `{name}` has no corresponding buffer constructor (expected one of: {})",
                known.join(", ")
            ))
        })
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumMessage;

    #[test]
    fn default_is_float64() {
        assert_eq!(DType::default(), DType::Float64);
    }

    #[test]
    fn names_round_trip_through_registry() {
        for dt in DType::iter() {
            assert_eq!(DType::from_name(dt.name()).unwrap(), dt);
            assert!(dt.get_message().is_some());
        }
        assert_eq!(DType::from_name("uint8_clamped").unwrap(), DType::Uint8Clamped);
        assert_eq!(DType::Float32.to_string(), "float32");
    }

    #[test]
    fn unknown_name_is_invalid_option() {
        let err = DType::from_name("complex128").unwrap_err();
        match err {
            NanStdevError::InvalidOption(msg) => assert!(msg.contains("complex128")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_uses_same_names_as_registry() {
        for dt in DType::iter() {
            let s = serde_json::to_value(dt).unwrap();
            assert_eq!(s.as_str(), Some(dt.name()));
        }
        assert!(serde_json::from_str::<DType>("\"int64\"").is_err());
    }
}
