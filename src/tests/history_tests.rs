//! Unit tests for the append-only history log.

use super::support::ManualClock;
use crate::domain::{HistoryAction, HistoryDraft, HistoryEntryId, TaskId};
use crate::store::HistoryLog;
use chrono::Duration;
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> ManualClock {
    ManualClock::fixed()
}

fn lifecycle_draft(task: &str, action: HistoryAction) -> HistoryDraft {
    HistoryDraft::new(TaskId::new(task), action, format!("{action} for task {task}"))
}

#[rstest]
fn append_mints_sequential_entry_ids(clock: ManualClock) {
    let mut log = HistoryLog::new();
    let first = log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    let second = log.append(lifecycle_draft("2", HistoryAction::Created), &clock);

    assert_eq!(*first.id(), HistoryEntryId::new("1"));
    assert_eq!(*second.id(), HistoryEntryId::new("2"));
    assert_eq!(log.len(), 2);
}

#[rstest]
fn append_stamps_the_clock_instant(clock: ManualClock) {
    let mut log = HistoryLog::new();
    let entry = log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    assert_eq!(entry.timestamp(), clock.now());
}

#[rstest]
fn for_task_filters_and_orders_newest_first(clock: ManualClock) -> eyre::Result<()> {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    clock.advance(Duration::seconds(10));
    log.append(lifecycle_draft("2", HistoryAction::Created), &clock);
    clock.advance(Duration::seconds(10));
    log.append(lifecycle_draft("1", HistoryAction::Deleted), &clock);

    let entries = log.for_task(&TaskId::new("1"));

    let actions: Vec<HistoryAction> = entries.iter().map(|entry| entry.action()).collect();
    ensure!(actions == vec![HistoryAction::Deleted, HistoryAction::Created]);
    let newest = entries.first().expect("deletion entry should exist");
    let oldest = entries.get(1).expect("creation entry should exist");
    ensure!(newest.timestamp() > oldest.timestamp());
    Ok(())
}

#[rstest]
fn identical_timestamps_order_later_appends_first(clock: ManualClock) -> eyre::Result<()> {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    log.append(lifecycle_draft("1", HistoryAction::Updated), &clock);
    log.append(lifecycle_draft("1", HistoryAction::Deleted), &clock);

    let ids: Vec<String> = log
        .for_task(&TaskId::new("1"))
        .iter()
        .map(|entry| entry.id().as_str().to_owned())
        .collect();

    ensure!(ids == vec!["3", "2", "1"]);
    Ok(())
}

#[rstest]
fn all_spans_every_task(clock: ManualClock) {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    clock.advance(Duration::seconds(1));
    log.append(lifecycle_draft("2", HistoryAction::Created), &clock);

    let entries = log.all();

    let task_ids: Vec<&str> = entries.iter().map(|entry| entry.task_id().as_str()).collect();
    assert_eq!(task_ids, vec!["2", "1"]);
}

#[rstest]
fn by_action_selects_matching_entries(clock: ManualClock) {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    clock.advance(Duration::seconds(1));
    log.append(lifecycle_draft("1", HistoryAction::Deleted), &clock);
    clock.advance(Duration::seconds(1));
    log.append(lifecycle_draft("2", HistoryAction::Created), &clock);

    let created = log.by_action(HistoryAction::Created);

    let task_ids: Vec<&str> = created.iter().map(|entry| entry.task_id().as_str()).collect();
    assert_eq!(task_ids, vec!["2", "1"]);
}

#[rstest]
fn clear_for_task_drops_only_that_task(clock: ManualClock) -> eyre::Result<()> {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    log.append(lifecycle_draft("1", HistoryAction::Updated), &clock);
    log.append(lifecycle_draft("2", HistoryAction::Created), &clock);

    let removed = log.clear_for_task(&TaskId::new("1"));

    ensure!(removed == 2);
    ensure!(log.for_task(&TaskId::new("1")).is_empty());
    ensure!(log.for_task(&TaskId::new("2")).len() == 1);
    ensure!(log.len() == 1);
    Ok(())
}

#[rstest]
fn clearing_an_unknown_task_is_a_noop(clock: ManualClock) {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);

    assert_eq!(log.clear_for_task(&TaskId::new("missing")), 0);
    assert_eq!(log.len(), 1);
}

#[rstest]
fn entry_ids_are_not_reused_after_clearing(clock: ManualClock) {
    let mut log = HistoryLog::new();
    log.append(lifecycle_draft("1", HistoryAction::Created), &clock);
    log.clear_for_task(&TaskId::new("1"));
    let entry = log.append(lifecycle_draft("2", HistoryAction::Created), &clock);

    assert_eq!(*entry.id(), HistoryEntryId::new("2"));
}

#[rstest]
fn empty_log_reports_empty() {
    let log = HistoryLog::new();
    assert!(log.is_empty());
    assert!(log.all().is_empty());
    assert!(log.by_action(HistoryAction::Deleted).is_empty());
}
