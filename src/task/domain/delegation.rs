//! Delegation state of a task and its request-string parser.

use super::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delegation state of a task that was handed to another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationState {
    /// The delegate resolved the task and handed it back to the owner.
    Resolved,
    /// The task is delegated and waiting on the delegate.
    Pending,
}

impl DelegationState {
    /// Returns the serialized lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Pending => "pending",
        }
    }
}

impl TryFrom<&str> for DelegationState {
    type Error = InvalidArgument;

    /// Matching is case-sensitive: only the exact lower-case names are
    /// accepted.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "resolved" => Ok(Self::Resolved),
            "pending" => Ok(Self::Pending),
            _ => Err(InvalidArgument::InvalidDelegationState(value.to_owned())),
        }
    }
}

impl fmt::Display for DelegationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an optional delegation state string from a request.
///
/// `None` means "no constraint" for filters and "clear" or "no change" for
/// updates, so it parses to `Ok(None)`.
///
/// # Errors
///
/// Returns [`InvalidArgument::InvalidDelegationState`] when `raw` is present
/// but is not exactly `resolved` or `pending`.
///
/// # Examples
///
/// ```
/// use task_filter::task::domain::{DelegationState, parse_delegation_state};
///
/// assert_eq!(parse_delegation_state(Some("pending")), Ok(Some(DelegationState::Pending)));
/// assert_eq!(parse_delegation_state(None), Ok(None));
/// assert!(parse_delegation_state(Some("Pending")).is_err());
/// ```
pub fn parse_delegation_state(
    raw: Option<&str>,
) -> Result<Option<DelegationState>, InvalidArgument> {
    raw.map(DelegationState::try_from).transpose()
}
