//! In-memory task store: the stateful owner of the task collection.

use super::{HistoryLog, TaskQuery};
use crate::domain::{
    HistoryAction, HistoryDraft, Task, TaskDraft, TaskId, TaskNotFoundError, TaskPatch,
    TaskPriority, TaskStatistics, TaskStatus, detect_changes,
};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result type for store operations that can miss a task.
pub type StoreResult<T> = Result<T, TaskNotFoundError>;

/// Outcome counters for a bulk delete.
///
/// `deleted + failed` always equals the number of ids in the request;
/// ids that matched no task count as failed without aborting the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteOutcome {
    /// Ids that resolved to a task, which was deleted.
    pub deleted: usize,
    /// Ids that matched nothing.
    pub failed: usize,
}

/// Authoritative, in-memory owner of the task collection.
///
/// Tasks live in a `Vec` in creation order, which is the order every
/// listing operation preserves. Identifiers come from a monotonic
/// counter that never reuses a value, even after deletions. Every
/// mutation is recorded in the store's [`HistoryLog`] as field-level
/// entries derived by [`detect_changes`].
///
/// All operations are synchronous; exclusive borrows are the only
/// concurrency control, matching a single-threaded boundary.
///
/// # Examples
///
/// ```
/// use tasktrail::domain::{TaskDraft, TaskPatch, TaskStatus};
/// use tasktrail::store::TaskStore;
///
/// let mut store = TaskStore::default();
/// let task = store.create(TaskDraft::new("Write report", "Quarterly figures"));
/// assert_eq!(task.id().as_str(), "1");
///
/// let updated = store
///     .update(task.id(), TaskPatch::new().with_status(TaskStatus::Done))
///     .expect("task exists");
/// assert_eq!(updated.status(), TaskStatus::Done);
/// assert_eq!(store.history().for_task(task.id()).len(), 2);
/// ```
#[derive(Debug)]
pub struct TaskStore<C>
where
    C: Clock,
{
    tasks: Vec<Task>,
    next_id: u64,
    history: HistoryLog,
    clock: C,
}

impl Default for TaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new(DefaultClock)
    }
}

impl<C> TaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store driven by the given clock. The first
    /// created task receives id `"1"`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            history: HistoryLog::new(),
            clock,
        }
    }

    /// Creates a task from the draft and records a `CREATED` entry.
    ///
    /// The new task is appended at the end of store order. Draft fields
    /// left unset take their creation defaults; see
    /// [`TaskDraft`](crate::domain::TaskDraft).
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let id = TaskId::from_counter(self.next_id);
        self.next_id += 1;
        let task = Task::from_draft(id, draft, &self.clock);
        let record = HistoryDraft::new(
            task.id().clone(),
            HistoryAction::Created,
            format!("Task \"{}\" created", task.title()),
        );
        self.history.append(record, &self.clock);
        tracing::debug!(task = %task.id(), "created task");
        self.tasks.push(task.clone());
        task
    }

    /// Returns the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFoundError`] when no task carries the id.
    pub fn find_one(&self, id: &TaskId) -> StoreResult<Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
            .ok_or_else(|| TaskNotFoundError(id.clone()))
    }

    /// Returns every task in store order.
    #[must_use]
    pub fn find_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns tasks with the given status, store order preserved.
    #[must_use]
    pub fn find_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.filtered(|task| task.status() == status)
    }

    /// Returns tasks with the given priority, store order preserved.
    #[must_use]
    pub fn find_by_priority(&self, priority: TaskPriority) -> Vec<Task> {
        self.filtered(|task| task.priority() == priority)
    }

    /// Returns tasks whose category equals the given value exactly,
    /// store order preserved. Comparison is case-sensitive and an empty
    /// string only matches tasks whose category is the empty string.
    #[must_use]
    pub fn find_by_category(&self, category: &str) -> Vec<Task> {
        self.filtered(|task| task.category() == Some(category))
    }

    /// Returns tasks whose tag list contains the given value exactly,
    /// store order preserved.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<Task> {
        self.filtered(|task| task.tags().iter().any(|candidate| candidate == tag))
    }

    /// Returns tasks matching the query case-insensitively against
    /// title, description, category or any tag, store order preserved.
    ///
    /// Matching is substring containment; an empty query matches every
    /// task.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Task> {
        let needle = query.to_lowercase();
        self.filtered(|task| {
            task.title().to_lowercase().contains(&needle)
                || task.description().to_lowercase().contains(&needle)
                || task
                    .category()
                    .is_some_and(|category| category.to_lowercase().contains(&needle))
                || task
                    .tags()
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
    }

    /// Returns the distinct non-empty category values in use, sorted
    /// lexicographically.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .tasks
            .iter()
            .filter_map(Task::category)
            .filter(|category| !category.is_empty())
            .collect();
        distinct.into_iter().map(ToOwned::to_owned).collect()
    }

    /// Returns the distinct tag values in use across every task, sorted
    /// lexicographically.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .tasks
            .iter()
            .flat_map(Task::tags)
            .map(String::as_str)
            .collect();
        distinct.into_iter().map(ToOwned::to_owned).collect()
    }

    /// Computes aggregate statistics over the whole collection.
    ///
    /// Status and priority counts are zero-filled across every enum
    /// value; category counts include only non-empty categories that
    /// occur. Consistency with the individual `find_by_*` operations is
    /// guaranteed by counting from the same collection in one pass.
    #[must_use]
    pub fn statistics(&self) -> TaskStatistics {
        let mut stats = TaskStatistics::empty();
        stats.total = self.tasks.len();
        for task in &self.tasks {
            if let Some(count) = stats.by_status.get_mut(&task.status()) {
                *count += 1;
            }
            if let Some(count) = stats.by_priority.get_mut(&task.priority()) {
                *count += 1;
            }
            if let Some(category) = task.category()
                && !category.is_empty()
            {
                *stats.by_category.entry(category.to_owned()).or_default() += 1;
            }
        }
        stats
    }

    /// Applies the patch to the task with the given id and returns the
    /// updated snapshot.
    ///
    /// Each field the patch mentions is compared against the current
    /// value; material differences are applied and recorded as one
    /// history entry apiece, while identical overwrites leave no trace.
    /// `updated_at` refreshes whether or not anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFoundError`] when no task carries the id.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> StoreResult<Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return Err(TaskNotFoundError(id.clone()));
        };
        let changes = detect_changes(task, &patch);
        task.apply(patch, &self.clock);
        for change in &changes {
            let record = HistoryDraft::new(id.clone(), change.action(), change.description())
                .with_field(change.field())
                .with_transition(change.old_value().clone(), change.new_value().clone());
            self.history.append(record, &self.clock);
        }
        if !changes.is_empty() {
            tracing::debug!(task = %id, fields = changes.len(), "updated task");
        }
        Ok(task.clone())
    }

    /// Removes the task with the given id, records a `DELETED` entry and
    /// returns the removed task.
    ///
    /// Earlier history entries for the task stay in the log; dropping
    /// them is a separate, explicit call to
    /// [`HistoryLog::clear_for_task`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFoundError`] when no task carries the id.
    pub fn remove(&mut self, id: &TaskId) -> StoreResult<Task> {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            return Err(TaskNotFoundError(id.clone()));
        };
        let task = self.tasks.remove(index);
        let record = HistoryDraft::new(
            id.clone(),
            HistoryAction::Deleted,
            format!("Task \"{}\" deleted", task.title()),
        );
        self.history.append(record, &self.clock);
        tracing::debug!(task = %id, "removed task");
        Ok(task)
    }

    /// Sets the status on every id that resolves to a task, in input
    /// order, and returns the updated snapshots.
    ///
    /// Unknown ids are skipped without error. Tasks already in the
    /// target status still refresh `updated_at` but record no history;
    /// the rest record one `STATUS_CHANGED` entry each.
    pub fn bulk_update_status(&mut self, ids: &[TaskId], status: TaskStatus) -> Vec<Task> {
        let mut updated = Vec::new();
        for id in ids {
            if let Ok(task) = self.update(id, TaskPatch::new().with_status(status)) {
                updated.push(task);
            }
        }
        tracing::debug!(
            requested = ids.len(),
            updated = updated.len(),
            status = status.as_str(),
            "bulk status update"
        );
        updated
    }

    /// Deletes every id that resolves to a task, in input order, and
    /// counts the misses as failed.
    ///
    /// Each successful deletion records its own `DELETED` entry; one
    /// unknown id never aborts the remaining deletions.
    pub fn bulk_delete(&mut self, ids: &[TaskId]) -> BulkDeleteOutcome {
        let mut outcome = BulkDeleteOutcome::default();
        for id in ids {
            match self.remove(id) {
                Ok(_) => outcome.deleted += 1,
                Err(TaskNotFoundError(_)) => outcome.failed += 1,
            }
        }
        tracing::debug!(
            deleted = outcome.deleted,
            failed = outcome.failed,
            "bulk delete"
        );
        outcome
    }

    /// Lists tasks for the boundary's query surface.
    ///
    /// At most one filter applies, in precedence order: search, status,
    /// priority, category, tag. A query with no filters returns every
    /// task in store order.
    #[must_use]
    pub fn list(&self, query: &TaskQuery) -> Vec<Task> {
        if let Some(needle) = &query.search {
            return self.search(needle);
        }
        if let Some(status) = query.status {
            return self.find_by_status(status);
        }
        if let Some(priority) = query.priority {
            return self.find_by_priority(priority);
        }
        if let Some(category) = &query.category {
            return self.find_by_category(category);
        }
        if let Some(tag) = &query.tag {
            return self.find_by_tag(tag);
        }
        self.find_all()
    }

    /// Returns the number of tasks currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read access to the audit history log.
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Mutable access to the audit history log, for explicit per-task
    /// clears.
    #[must_use]
    pub const fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| keep(task))
            .cloned()
            .collect()
    }
}
