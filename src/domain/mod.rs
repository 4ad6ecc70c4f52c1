//! Domain model for task tracking and its audit history.
//!
//! Everything here is a pure value type or a pure function over value
//! types. State lives in [`crate::store`]; boundaries build
//! [`TaskDraft`], [`TaskPatch`] and identifier values from validated raw
//! input and hand them to the store.

mod change;
mod draft;
mod error;
mod history;
mod ids;
mod statistics;
mod task;

pub use change::{FieldChange, detect_changes};
pub use draft::{TaskDraft, TaskPatch};
pub use error::{
    ParseHistoryActionError, ParseTaskPriorityError, ParseTaskStatusError, TaskNotFoundError,
};
pub use history::{FieldValue, HistoryAction, HistoryDraft, HistoryEntry, TaskField};
pub use ids::{HistoryEntryId, TaskId};
pub use statistics::TaskStatistics;
pub use task::{Task, TaskPriority, TaskStatus};
