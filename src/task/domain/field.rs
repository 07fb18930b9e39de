//! Presence-aware request fields.

use serde::{Deserialize, Deserializer};

/// A request field that tracks whether it was supplied at all, separately
/// from whether its value is null.
///
/// `Unset` leaves the target untouched. `Set(None)` clears the target.
/// `Set(Some(v))` assigns `v`.
///
/// When used as a struct field with `#[serde(default)]`, a missing JSON key
/// deserializes to `Unset` and an explicit `null` to `Set(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was not part of the request.
    Unset,
    /// The field was part of the request, possibly with a null value.
    Set(Option<T>),
}

impl<T> Field<T> {
    /// Creates a present field holding `value`.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Set(Some(value))
    }

    /// Creates a present field holding null.
    #[must_use]
    pub const fn null() -> Self {
        Self::Set(None)
    }

    /// Returns `true` when the field was part of the request.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the supplied value when present, `None` when unset.
    ///
    /// The inner `Option` is the possibly-null request value.
    #[must_use]
    pub const fn as_set(&self) -> Option<&Option<T>> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::Set)
    }
}
