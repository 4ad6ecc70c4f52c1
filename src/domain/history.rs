//! Audit record types for task lifecycle events and field changes.
//!
//! History entries are append-only value objects: once built they are
//! never edited, and the log they live in only ever grows or drops whole
//! per-task slices. Field snapshots use the closed [`FieldValue`] union
//! so every change keeps its concrete type through serialization.
//!
//! # Examples
//!
//! ```
//! use tasktrail::domain::{FieldValue, HistoryAction, HistoryDraft, TaskField, TaskId, TaskStatus};
//!
//! let draft = HistoryDraft::new(
//!     TaskId::new("7"),
//!     HistoryAction::StatusChanged,
//!     "Status changed from TODO to DONE",
//! )
//! .with_field(TaskField::Status)
//! .with_transition(
//!     FieldValue::Status(TaskStatus::Todo),
//!     FieldValue::Status(TaskStatus::Done),
//! );
//! assert_eq!(draft.action(), HistoryAction::StatusChanged);
//! ```

use super::{HistoryEntryId, ParseHistoryActionError, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a recorded history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    /// A task came into existence.
    Created,
    /// A title, description or due-date field changed.
    Updated,
    /// The workflow status changed.
    StatusChanged,
    /// The priority changed.
    PriorityChanged,
    /// The category changed.
    CategoryChanged,
    /// The tag list changed.
    TagsChanged,
    /// A task was deleted.
    Deleted,
}

impl HistoryAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Created,
        Self::Updated,
        Self::StatusChanged,
        Self::PriorityChanged,
        Self::CategoryChanged,
        Self::TagsChanged,
        Self::Deleted,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::PriorityChanged => "PRIORITY_CHANGED",
            Self::CategoryChanged => "CATEGORY_CHANGED",
            Self::TagsChanged => "TAGS_CHANGED",
            Self::Deleted => "DELETED",
        }
    }
}

impl TryFrom<&str> for HistoryAction {
    type Error = ParseHistoryActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "UPDATED" => Ok(Self::Updated),
            "STATUS_CHANGED" => Ok(Self::StatusChanged),
            "PRIORITY_CHANGED" => Ok(Self::PriorityChanged),
            "CATEGORY_CHANGED" => Ok(Self::CategoryChanged),
            "TAGS_CHANGED" => Ok(Self::TagsChanged),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(ParseHistoryActionError(value.to_owned())),
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task attribute addressed by a field-level history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task description.
    Description,
    /// The workflow status.
    Status,
    /// The priority.
    Priority,
    /// The category.
    Category,
    /// The tag list.
    Tags,
    /// The due date.
    DueDate,
}

impl TaskField {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Category => "category",
            Self::Tags => "tags",
            Self::DueDate => "dueDate",
        }
    }

    /// Returns the human-readable label used in change descriptions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::Category => "Category",
            Self::Tags => "Tags",
            Self::DueDate => "Due date",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a single field value captured in a history entry.
///
/// The union is closed over everything a task field can hold, so
/// snapshots survive serialization without collapsing into strings.
/// [`FieldValue::Unset`] captures the absent side of an optional-field
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// The field carried no value.
    Unset,
    /// Free text, as used by titles and descriptions.
    Text(String),
    /// A workflow status.
    Status(TaskStatus),
    /// A priority.
    Priority(TaskPriority),
    /// A tag list.
    Tags(Vec<String>),
    /// A point in time, as used by due dates.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Wraps an optional text value, mapping absence to
    /// [`FieldValue::Unset`].
    #[must_use]
    pub fn from_text(value: Option<&str>) -> Self {
        value.map_or(Self::Unset, |text| Self::Text(text.to_owned()))
    }

    /// Wraps an optional timestamp, mapping absence to
    /// [`FieldValue::Unset`].
    #[must_use]
    pub fn from_timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Unset, Self::Timestamp)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "none"),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Status(status) => write!(f, "{status}"),
            Self::Priority(priority) => write!(f, "{priority}"),
            Self::Tags(tags) => write!(f, "[{}]", tags.join(", ")),
            Self::Timestamp(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}

/// Parameter object describing a history entry about to be appended.
///
/// The log supplies the identifier and timestamp; the draft carries
/// everything the caller knows. Lifecycle drafts (created, deleted) stay
/// as built, field-change drafts add the affected field and its value
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryDraft {
    pub(crate) task_id: TaskId,
    pub(crate) action: HistoryAction,
    pub(crate) description: String,
    pub(crate) field: Option<TaskField>,
    pub(crate) old_value: Option<FieldValue>,
    pub(crate) new_value: Option<FieldValue>,
}

impl HistoryDraft {
    /// Creates a draft for the given task, action and description.
    #[must_use]
    pub fn new(task_id: TaskId, action: HistoryAction, description: impl Into<String>) -> Self {
        Self {
            task_id,
            action,
            description: description.into(),
            field: None,
            old_value: None,
            new_value: None,
        }
    }

    /// Names the field a field-level change concerns.
    #[must_use]
    pub const fn with_field(mut self, field: TaskField) -> Self {
        self.field = Some(field);
        self
    }

    /// Attaches the before and after snapshots of a field-level change.
    #[must_use]
    pub fn with_transition(mut self, old_value: FieldValue, new_value: FieldValue) -> Self {
        self.old_value = Some(old_value);
        self.new_value = Some(new_value);
        self
    }

    /// Returns the action the draft records.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }
}

/// Immutable audit record of one lifecycle event or field-level change.
///
/// The `task_id` reference is deliberately unenforced: entries may point
/// at tasks that have since been deleted, which is what keeps deletion
/// events auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    id: HistoryEntryId,
    task_id: TaskId,
    action: HistoryAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<TaskField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_value: Option<FieldValue>,
    timestamp: DateTime<Utc>,
    description: String,
}

impl HistoryEntry {
    /// Materializes a draft into an immutable entry.
    pub(crate) fn from_draft(
        id: HistoryEntryId,
        draft: HistoryDraft,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            task_id: draft.task_id,
            action: draft.action,
            field: draft.field,
            old_value: draft.old_value,
            new_value: draft.new_value,
            timestamp,
            description: draft.description,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> &HistoryEntryId {
        &self.id
    }

    /// Returns the identifier of the task the entry concerns.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the affected field for field-level changes.
    #[must_use]
    pub const fn field(&self) -> Option<TaskField> {
        self.field
    }

    /// Returns the pre-change snapshot, where one was recorded.
    #[must_use]
    pub const fn old_value(&self) -> Option<&FieldValue> {
        self.old_value.as_ref()
    }

    /// Returns the post-change snapshot, where one was recorded.
    #[must_use]
    pub const fn new_value(&self) -> Option<&FieldValue> {
        self.new_value.as_ref()
    }

    /// Returns the instant the entry was appended.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the human-readable event summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
