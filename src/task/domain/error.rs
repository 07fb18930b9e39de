//! Error types for task filter and update request validation.

use thiserror::Error;

/// Caller input errors raised while translating filter, update, or
/// pagination requests.
///
/// Every variant is synchronous and non-retryable; the transport layer maps
/// them to a client-facing status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A variable predicate did not carry an operation.
    #[error("variable operation is missing for variable: {}", display_name(.name))]
    MissingVariableOperation {
        /// Variable name, if the predicate had one.
        name: Option<String>,
    },

    /// A variable predicate did not carry a value.
    #[error("variable value is missing for variable: {}", display_name(.name))]
    MissingVariableValue {
        /// Variable name, if the predicate had one.
        name: Option<String>,
    },

    /// A nameless predicate used an operation other than `equals`.
    #[error(
        "value-only query (without a variable name) is only supported when using 'equals' operation"
    )]
    ValueOnlyRequiresEquals,

    /// A case-insensitive comparison was requested for a non-string value.
    #[error("only string variable values are supported when ignoring casing, but was: {actual}")]
    IgnoreCaseRequiresString {
        /// Runtime type name of the offending value.
        actual: &'static str,
    },

    /// The variable operation is not recognised.
    #[error("unsupported variable query operation: {0}")]
    UnsupportedOperation(String),

    /// The delegation state string is not a known state.
    #[error("illegal value for delegationState: {0}")]
    InvalidDelegationState(String),

    /// The sort key is not a registered sortable property.
    #[error("value for param 'sort' is not valid, '{0}' is not a valid property")]
    InvalidSortProperty(String),

    /// The sort order is neither `asc` nor `desc`.
    #[error("value for param 'order' is not valid: '{0}', must be 'asc' or 'desc'")]
    InvalidSortOrder(String),
}

fn display_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<unnamed>")
}
