//! Field-level change detection between a task and a patch.

use super::{FieldValue, HistoryAction, Task, TaskField, TaskPatch};

/// One materially changed field, with its action kind and both value
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    field: TaskField,
    action: HistoryAction,
    old_value: FieldValue,
    new_value: FieldValue,
}

impl FieldChange {
    const fn new(
        field: TaskField,
        action: HistoryAction,
        old_value: FieldValue,
        new_value: FieldValue,
    ) -> Self {
        Self {
            field,
            action,
            old_value,
            new_value,
        }
    }

    /// Returns the changed attribute.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the action kind recorded for this change.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the pre-change snapshot.
    #[must_use]
    pub const fn old_value(&self) -> &FieldValue {
        &self.old_value
    }

    /// Returns the post-change snapshot.
    #[must_use]
    pub const fn new_value(&self) -> &FieldValue {
        &self.new_value
    }

    /// Renders the one-line transition summary recorded in history.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} changed from {} to {}",
            self.field.label(),
            self.old_value,
            self.new_value
        )
    }
}

/// Compares every field the patch mentions against the task's current
/// value and returns one change per material difference.
///
/// Changes come back in a fixed field order (title, description, status,
/// priority, category, tags, due date) regardless of how the patch was
/// built. Mentioned-but-identical fields produce nothing; tag lists
/// compare as multisets, so reordering alone is not a change.
#[must_use]
pub fn detect_changes(task: &Task, patch: &TaskPatch) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    if let Some(title) = &patch.title
        && title.as_str() != task.title()
    {
        changes.push(FieldChange::new(
            TaskField::Title,
            HistoryAction::Updated,
            FieldValue::Text(task.title().to_owned()),
            FieldValue::Text(title.clone()),
        ));
    }
    if let Some(description) = &patch.description
        && description.as_str() != task.description()
    {
        changes.push(FieldChange::new(
            TaskField::Description,
            HistoryAction::Updated,
            FieldValue::Text(task.description().to_owned()),
            FieldValue::Text(description.clone()),
        ));
    }
    if let Some(status) = patch.status
        && status != task.status()
    {
        changes.push(FieldChange::new(
            TaskField::Status,
            HistoryAction::StatusChanged,
            FieldValue::Status(task.status()),
            FieldValue::Status(status),
        ));
    }
    if let Some(priority) = patch.priority
        && priority != task.priority()
    {
        changes.push(FieldChange::new(
            TaskField::Priority,
            HistoryAction::PriorityChanged,
            FieldValue::Priority(task.priority()),
            FieldValue::Priority(priority),
        ));
    }
    if let Some(category) = &patch.category
        && category.as_deref() != task.category()
    {
        changes.push(FieldChange::new(
            TaskField::Category,
            HistoryAction::CategoryChanged,
            FieldValue::from_text(task.category()),
            FieldValue::from_text(category.as_deref()),
        ));
    }
    if let Some(tags) = &patch.tags
        && !tags_match(task.tags(), tags)
    {
        changes.push(FieldChange::new(
            TaskField::Tags,
            HistoryAction::TagsChanged,
            FieldValue::Tags(task.tags().to_vec()),
            FieldValue::Tags(tags.clone()),
        ));
    }
    if let Some(due_date) = patch.due_date
        && due_date != task.due_date()
    {
        changes.push(FieldChange::new(
            TaskField::DueDate,
            HistoryAction::Updated,
            FieldValue::from_timestamp(task.due_date()),
            FieldValue::from_timestamp(due_date),
        ));
    }
    changes
}

/// Order-insensitive tag comparison: lists match when they hold the same
/// values with the same multiplicities.
fn tags_match(current: &[String], proposed: &[String]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut lhs: Vec<&str> = current.iter().map(String::as_str).collect();
    let mut rhs: Vec<&str> = proposed.iter().map(String::as_str).collect();
    lhs.sort_unstable();
    rhs.sort_unstable();
    lhs == rhs
}
