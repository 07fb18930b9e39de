//! Sortable task properties and the registry mapping request sort keys to
//! them.

use super::Task;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Internal query property a task result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskQueryProperty {
    /// Task identifier.
    TaskId,
    /// Task name.
    Name,
    /// Task description.
    Description,
    /// Due date.
    DueDate,
    /// Creation time.
    CreateTime,
    /// Priority.
    Priority,
    /// Owning execution.
    ExecutionId,
    /// Owning process instance.
    ProcessInstanceId,
}

impl TaskQueryProperty {
    /// Returns the internal column identifier of the property.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::TaskId => "RES.ID_",
            Self::Name => "RES.NAME_",
            Self::Description => "RES.DESCRIPTION_",
            Self::DueDate => "RES.DUE_DATE_",
            Self::CreateTime => "RES.CREATE_TIME_",
            Self::Priority => "RES.PRIORITY_",
            Self::ExecutionId => "RES.EXECUTION_ID_",
            Self::ProcessInstanceId => "RES.PROC_INST_ID_",
        }
    }

    /// Compares two tasks by this property in ascending order.
    ///
    /// Absent values sort before present ones.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::TaskId => left.id().cmp(&right.id()),
            Self::Name => left.name().cmp(&right.name()),
            Self::Description => left.description().cmp(&right.description()),
            Self::DueDate => left.due_date().cmp(&right.due_date()),
            Self::CreateTime => left.created_at().cmp(&right.created_at()),
            Self::Priority => left.priority().cmp(&right.priority()),
            Self::ExecutionId => left.execution_id().cmp(&right.execution_id()),
            Self::ProcessInstanceId => left.process_instance_id().cmp(&right.process_instance_id()),
        }
    }
}

/// Immutable mapping from request sort keys to task query properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortablePropertyRegistry {
    properties: HashMap<&'static str, TaskQueryProperty>,
}

impl SortablePropertyRegistry {
    /// Builds a registry from `(sort key, property)` pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (&'static str, TaskQueryProperty)>) -> Self {
        Self {
            properties: entries.into_iter().collect(),
        }
    }

    /// Looks up the property registered for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<TaskQueryProperty> {
        self.properties.get(key).copied()
    }

    /// Returns `true` when `key` is a registered sort key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the registered sort keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.keys().copied()
    }

    /// Returns the number of registered sort keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when no sort keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

static TASK_PROPERTIES: LazyLock<SortablePropertyRegistry> = LazyLock::new(|| {
    SortablePropertyRegistry::new([
        ("id", TaskQueryProperty::TaskId),
        ("name", TaskQueryProperty::Name),
        ("description", TaskQueryProperty::Description),
        ("dueDate", TaskQueryProperty::DueDate),
        ("createTime", TaskQueryProperty::CreateTime),
        ("priority", TaskQueryProperty::Priority),
        ("executionId", TaskQueryProperty::ExecutionId),
        ("processInstanceId", TaskQueryProperty::ProcessInstanceId),
    ])
});

/// Returns the process-wide registry of sortable task properties.
///
/// # Examples
///
/// ```
/// use task_filter::task::domain::{TaskQueryProperty, task_properties};
///
/// assert_eq!(task_properties().get("dueDate"), Some(TaskQueryProperty::DueDate));
/// assert_eq!(task_properties().get("assignee"), None);
/// ```
#[must_use]
pub fn task_properties() -> &'static SortablePropertyRegistry {
    &TASK_PROPERTIES
}
