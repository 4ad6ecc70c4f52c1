//! Append-only log owning every audit history entry.

use crate::domain::{HistoryAction, HistoryDraft, HistoryEntry, HistoryEntryId, TaskId};
use mockable::Clock;

/// In-memory owner of the audit trail.
///
/// The log is append-only: entries are immutable once stored and only
/// leave through [`HistoryLog::clear_for_task`]. Task ids are recorded
/// as given, without existence checks, which is what lets `DELETED`
/// entries outlive their task.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use tasktrail::domain::{HistoryAction, HistoryDraft, TaskId};
/// use tasktrail::store::HistoryLog;
///
/// let mut log = HistoryLog::new();
/// let entry = log.append(
///     HistoryDraft::new(TaskId::new("1"), HistoryAction::Created, "Task \"Demo\" created"),
///     &DefaultClock,
/// );
/// assert_eq!(entry.id().as_str(), "1");
/// assert_eq!(log.for_task(&TaskId::new("1")).len(), 1);
/// ```
#[derive(Debug)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl HistoryLog {
    /// Creates an empty log. The first appended entry receives id `"1"`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends an entry built from the draft and returns a snapshot of it.
    ///
    /// The log mints the entry identifier and stamps the clock's current
    /// instant; everything else comes from the draft verbatim.
    pub fn append(&mut self, draft: HistoryDraft, clock: &impl Clock) -> HistoryEntry {
        let id = HistoryEntryId::from_counter(self.next_id);
        self.next_id += 1;
        let entry = HistoryEntry::from_draft(id, draft, clock.utc());
        tracing::trace!(
            entry = %entry.id(),
            task = %entry.task_id(),
            action = entry.action().as_str(),
            "appended history entry"
        );
        self.entries.push(entry.clone());
        entry
    }

    /// Returns every entry recorded for the given task, newest first.
    ///
    /// Ordering is by descending timestamp; entries sharing an instant
    /// come back latest-appended first.
    #[must_use]
    pub fn for_task(&self, task_id: &TaskId) -> Vec<HistoryEntry> {
        self.newest_first(|entry| entry.task_id() == task_id)
    }

    /// Returns every entry across all tasks, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<HistoryEntry> {
        self.newest_first(|_| true)
    }

    /// Returns every entry with the given action kind, newest first.
    #[must_use]
    pub fn by_action(&self, action: HistoryAction) -> Vec<HistoryEntry> {
        self.newest_first(|entry| entry.action() == action)
    }

    /// Drops every entry recorded for the given task and returns how many
    /// were removed. Clearing an unknown or history-less task removes
    /// nothing and is not an error.
    pub fn clear_for_task(&mut self, task_id: &TaskId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.task_id() != task_id);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(task = %task_id, removed, "cleared task history");
        }
        removed
    }

    /// Returns the number of entries currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the log holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selects matching entries newest first. Iterating in reverse before
    /// the stable sort is what breaks timestamp ties towards the
    /// later-appended entry.
    fn newest_first(&self, keep: impl Fn(&HistoryEntry) -> bool) -> Vec<HistoryEntry> {
        let mut selected: Vec<HistoryEntry> = self
            .entries
            .iter()
            .rev()
            .filter(|entry| keep(entry))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        selected
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
