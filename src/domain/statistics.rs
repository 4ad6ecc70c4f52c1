//! Aggregate counts over the task collection.

use super::{TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time aggregate statistics for every task in a store.
///
/// Status and priority breakdowns are zero-filled across all enum values
/// so consumers can index them without existence checks. The category
/// breakdown only carries categories that actually occur; tasks without a
/// category (or with an empty-string one) count towards `total` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks per workflow status, zero-filled over every status.
    pub by_status: BTreeMap<TaskStatus, usize>,
    /// Tasks per priority, zero-filled over every priority.
    pub by_priority: BTreeMap<TaskPriority, usize>,
    /// Tasks per occurring category, keyed by exact category value.
    pub by_category: BTreeMap<String, usize>,
}

impl TaskStatistics {
    /// Creates the statistics for an empty collection: zero totals,
    /// zero-filled breakdowns, no categories.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total: 0,
            by_status: TaskStatus::ALL
                .iter()
                .map(|status| (*status, 0))
                .collect(),
            by_priority: TaskPriority::ALL
                .iter()
                .map(|priority| (*priority, 0))
                .collect(),
            by_category: BTreeMap::new(),
        }
    }
}

impl Default for TaskStatistics {
    fn default() -> Self {
        Self::empty()
    }
}
