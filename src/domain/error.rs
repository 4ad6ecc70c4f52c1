//! Error types for the task core and its boundary conversions.

use super::TaskId;
use thiserror::Error;

/// Error returned when an operation addresses a task id no task carries.
///
/// This is the only failure the store itself produces. Bulk operations
/// swallow it per item to keep one missing id from aborting the rest of
/// a batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task {0} not found")]
pub struct TaskNotFoundError(pub TaskId);

/// Error converting a raw string into a [`super::TaskStatus`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error converting a raw string into a [`super::TaskPriority`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error converting a raw string into a [`super::HistoryAction`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown history action: {0}")]
pub struct ParseHistoryActionError(pub String);
