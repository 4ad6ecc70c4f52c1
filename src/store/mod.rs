//! Stateful owners of the task collection and its audit history.
//!
//! [`TaskStore`] holds the tasks and drives every mutation;
//! [`HistoryLog`] holds the append-only audit trail. The store owns its
//! log and records into it, but the log never reaches back into the
//! store, so entries can outlive the tasks they describe.

mod history;
mod query;
mod tasks;

pub use history::HistoryLog;
pub use query::TaskQuery;
pub use tasks::{BulkDeleteOutcome, StoreResult, TaskStore};
