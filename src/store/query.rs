//! Single-filter query surface for listing tasks.

use crate::domain::{TaskPriority, TaskStatus};

/// Filter parameters for [`crate::store::TaskStore::list`].
///
/// A query mirrors the boundary's optional list parameters. The store
/// applies at most one filter per query; when several are set, the
/// highest-precedence one wins (search, then status, priority, category,
/// tag) and the rest are ignored rather than combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub(crate) search: Option<String>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) priority: Option<TaskPriority>,
    pub(crate) category: Option<String>,
    pub(crate) tag: Option<String>,
}

impl TaskQuery {
    /// Creates a query with no filters; listing with it returns every
    /// task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by case-insensitive free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filters by workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filters by priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Filters by exact category value.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters by exact tag membership.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
