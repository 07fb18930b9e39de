//! Pagination parameters and paged result sets.

use super::{InvalidArgument, SortablePropertyRegistry, TaskQueryProperty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for paginated task listings.
///
/// # Examples
///
/// ```
/// use task_filter::task::domain::PaginationConfig;
///
/// let config = PaginationConfig::default();
/// assert_eq!(config.default_page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the caller does not supply one.
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
        }
    }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the request name of the order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(InvalidArgument::InvalidSortOrder(value.to_owned())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied pagination parameters, all optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PaginationParams {
    /// Zero-based index of the first result.
    pub start: Option<usize>,
    /// Maximum number of results.
    pub size: Option<usize>,
    /// Sort key from the sortable property registry.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
}

impl PaginationParams {
    /// Sets the start index.
    #[must_use]
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Resolves defaults and validates the sort key and order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::InvalidSortProperty`] when the sort key is
    /// not registered and [`InvalidArgument::InvalidSortOrder`] when the
    /// order is neither `asc` nor `desc`.
    pub fn resolve(
        &self,
        default_sort: &str,
        properties: &SortablePropertyRegistry,
        config: &PaginationConfig,
    ) -> Result<PageRequest, InvalidArgument> {
        let sort = self.sort.as_deref().unwrap_or(default_sort);
        let property = properties
            .get(sort)
            .ok_or_else(|| InvalidArgument::InvalidSortProperty(sort.to_owned()))?;
        let order = self
            .order
            .as_deref()
            .map(SortOrder::try_from)
            .transpose()?
            .unwrap_or_default();

        Ok(PageRequest {
            start: self.start.unwrap_or(0),
            size: self.size.unwrap_or(config.default_page_size),
            sort: sort.to_owned(),
            property,
            order,
        })
    }
}

/// Validated pagination window and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based index of the first result.
    pub start: usize,
    /// Maximum number of results.
    pub size: usize,
    /// Sort key as supplied or defaulted.
    pub sort: String,
    /// Property the sort key resolved to.
    pub property: TaskQueryProperty,
    /// Sort direction.
    pub order: SortOrder,
}

/// One page of results together with the pagination that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPage<T> {
    /// Results on this page.
    pub data: Vec<T>,
    /// Number of results across all pages.
    pub total: usize,
    /// Index of the first result on this page.
    pub start: usize,
    /// Number of results on this page.
    pub size: usize,
    /// Sort key applied.
    pub sort: String,
    /// Sort direction applied.
    pub order: SortOrder,
}
