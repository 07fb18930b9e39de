//! Variable predicates used to filter tasks by task or process variables.

use super::InvalidArgument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dynamically typed scalar held by a variable or compared by a predicate.
///
/// Deserializes from a JSON string, boolean, or number. Integers that fit in
/// `i64` become [`VariableValue::Integer`]; other numbers become
/// [`VariableValue::Double`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Text value.
    String(String),
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Double(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Timestamp.
    Date(DateTime<Utc>),
}

impl VariableValue {
    /// Returns the runtime type name used in validation messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
        }
    }

    /// Returns the text when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl TryFrom<serde_json::Value> for VariableValue {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(text) => Ok(Self::String(text)),
            serde_json::Value::Bool(flag) => Ok(Self::Boolean(flag)),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Double))
                .ok_or_else(|| format!("unsupported numeric variable value: {number}")),
            other => Err(format!("unsupported variable value: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for VariableValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for VariableValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.to_rfc3339()),
        }
    }
}

/// Comparison applied by a variable predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum VariableOperation {
    /// Value equality.
    Equals,
    /// Case-insensitive string equality.
    EqualsIgnoreCase,
    /// Value inequality.
    NotEquals,
    /// Case-insensitive string inequality.
    NotEqualsIgnoreCase,
}

impl VariableOperation {
    /// Returns the wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::EqualsIgnoreCase => "equalsIgnoreCase",
            Self::NotEquals => "notEquals",
            Self::NotEqualsIgnoreCase => "notEqualsIgnoreCase",
        }
    }
}

impl TryFrom<&str> for VariableOperation {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equals" => Ok(Self::Equals),
            "equalsIgnoreCase" => Ok(Self::EqualsIgnoreCase),
            "notEquals" => Ok(Self::NotEquals),
            "notEqualsIgnoreCase" => Ok(Self::NotEqualsIgnoreCase),
            _ => Err(InvalidArgument::UnsupportedOperation(value.to_owned())),
        }
    }
}

impl TryFrom<String> for VariableOperation {
    type Error = InvalidArgument;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for VariableOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single condition on a task or process variable.
///
/// A predicate without a name matches the value against every variable in
/// its namespace and is only valid with [`VariableOperation::Equals`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariablePredicate {
    /// Variable name; `None` queries by value only.
    pub name: Option<String>,
    /// Comparison to apply.
    pub operation: Option<VariableOperation>,
    /// Value to compare against.
    pub value: Option<VariableValue>,
    /// Type hint for explicit value conversion. Accepted but not acted upon.
    #[serde(rename = "type")]
    pub value_type: Option<String>,
}

impl VariablePredicate {
    /// Creates a named predicate.
    #[must_use]
    pub fn named(
        name: impl Into<String>,
        operation: VariableOperation,
        value: impl Into<VariableValue>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            operation: Some(operation),
            value: Some(value.into()),
            value_type: None,
        }
    }

    /// Creates a value-only predicate.
    #[must_use]
    pub fn nameless(operation: VariableOperation, value: impl Into<VariableValue>) -> Self {
        Self {
            name: None,
            operation: Some(operation),
            value: Some(value.into()),
            value_type: None,
        }
    }

    /// Sets the type hint.
    #[must_use]
    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}
