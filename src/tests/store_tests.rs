//! Unit tests for task store CRUD and its history wiring.

use super::support::{ManualClock, tags};
use crate::domain::{
    FieldValue, HistoryAction, Task, TaskDraft, TaskField, TaskId, TaskNotFoundError, TaskPatch,
    TaskPriority, TaskStatus,
};
use crate::store::TaskStore;
use chrono::Duration;
use eyre::{bail, ensure};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> ManualClock {
    ManualClock::fixed()
}

#[fixture]
fn store(clock: ManualClock) -> TaskStore<ManualClock> {
    TaskStore::new(clock)
}

#[rstest]
fn create_mints_sequential_string_ids(mut store: TaskStore<ManualClock>) {
    let first = store.create(TaskDraft::new("First", "a"));
    let second = store.create(TaskDraft::new("Second", "b"));

    assert_eq!(first.id().as_str(), "1");
    assert_eq!(second.id().as_str(), "2");
    assert_eq!(store.len(), 2);
}

#[rstest]
fn create_records_a_created_entry(mut store: TaskStore<ManualClock>) -> eyre::Result<()> {
    let task = store.create(TaskDraft::new("Water the plants", "Front garden only"));

    let entries = store.history().for_task(task.id());
    let [entry] = entries.as_slice() else {
        bail!("expected one history entry, got {entries:?}");
    };

    ensure!(entry.action() == HistoryAction::Created);
    ensure!(entry.description() == "Task \"Water the plants\" created");
    ensure!(entry.field().is_none());
    ensure!(entry.old_value().is_none());
    ensure!(entry.new_value().is_none());
    ensure!(entry.timestamp() == task.created_at());
    Ok(())
}

#[rstest]
fn find_one_returns_stored_snapshot(mut store: TaskStore<ManualClock>) -> eyre::Result<()> {
    let created = store.create(TaskDraft::new("Read paper", "Apply notes"));
    let fetched = store.find_one(created.id())?;
    ensure!(fetched == created);
    Ok(())
}

#[rstest]
fn find_one_misses_with_not_found(store: TaskStore<ManualClock>) {
    let missing = TaskId::new("99");
    assert_eq!(
        store.find_one(&missing),
        Err(TaskNotFoundError(missing.clone()))
    );
}

#[rstest]
fn find_all_preserves_creation_order(mut store: TaskStore<ManualClock>) {
    store.create(TaskDraft::new("First", "a"));
    store.create(TaskDraft::new("Second", "b"));
    store.create(TaskDraft::new("Third", "c"));

    let all = store.find_all();
    let titles: Vec<&str> = all.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[rstest]
fn update_applies_fields_and_records_each_change(clock: ManualClock) -> eyre::Result<()> {
    let mut store = TaskStore::new(clock.clone());
    let task = store.create(TaskDraft::new("Draft blog post", "Outline first"));
    clock.advance(Duration::seconds(30));

    let updated = store.update(
        task.id(),
        TaskPatch::new()
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::High),
    )?;

    ensure!(updated.status() == TaskStatus::InProgress);
    ensure!(updated.priority() == TaskPriority::High);
    ensure!(updated.updated_at() == clock.now());
    ensure!(updated.created_at() < updated.updated_at());

    let entries = store.history().for_task(task.id());
    ensure!(entries.len() == 3);
    let actions: Vec<HistoryAction> = entries.iter().map(|entry| entry.action()).collect();
    ensure!(
        actions
            == vec![
                HistoryAction::PriorityChanged,
                HistoryAction::StatusChanged,
                HistoryAction::Created,
            ]
    );
    Ok(())
}

#[rstest]
fn update_snapshots_old_and_new_values(clock: ManualClock) -> eyre::Result<()> {
    let mut store = TaskStore::new(clock.clone());
    let task = store.create(TaskDraft::new("Tidy desk", "Shred the old mail"));
    clock.advance(Duration::seconds(5));

    store.update(task.id(), TaskPatch::new().with_status(TaskStatus::Done))?;

    let entries = store.history().by_action(HistoryAction::StatusChanged);
    let [entry] = entries.as_slice() else {
        bail!("expected one status entry, got {entries:?}");
    };
    ensure!(entry.field() == Some(TaskField::Status));
    ensure!(entry.old_value() == Some(&FieldValue::Status(TaskStatus::Todo)));
    ensure!(entry.new_value() == Some(&FieldValue::Status(TaskStatus::Done)));
    ensure!(entry.description() == "Status changed from TODO to DONE");
    Ok(())
}

#[rstest]
fn noop_update_refreshes_timestamp_without_history(clock: ManualClock) -> eyre::Result<()> {
    let mut store = TaskStore::new(clock.clone());
    let task = store.create(TaskDraft::new("Stretch", "Ten minutes"));
    let created_at = task.created_at();
    clock.advance(Duration::seconds(60));

    let updated = store.update(task.id(), TaskPatch::new().with_title("Stretch"))?;

    ensure!(updated.updated_at() == clock.now());
    ensure!(updated.updated_at() > created_at);
    ensure!(store.history().for_task(task.id()).len() == 1);
    Ok(())
}

#[rstest]
fn empty_patch_still_refreshes_timestamp(clock: ManualClock) -> eyre::Result<()> {
    let mut store = TaskStore::new(clock.clone());
    let task = store.create(TaskDraft::new("Stand up", "Walk around"));
    clock.advance(Duration::seconds(15));

    let updated = store.update(task.id(), TaskPatch::new())?;

    ensure!(updated.updated_at() == clock.now());
    ensure!(store.history().for_task(task.id()).len() == 1);
    Ok(())
}

#[rstest]
fn update_misses_with_not_found(mut store: TaskStore<ManualClock>) {
    let missing = TaskId::new("7");
    let result = store.update(&missing, TaskPatch::new().with_title("nope"));
    assert_eq!(result, Err(TaskNotFoundError(missing)));
}

#[rstest]
fn clearing_category_empties_the_field(mut store: TaskStore<ManualClock>) -> eyre::Result<()> {
    let task =
        store.create(TaskDraft::new("File taxes", "Before the deadline").with_category("home"));

    let updated = store.update(task.id(), TaskPatch::new().clear_category())?;

    ensure!(updated.category().is_none());
    let entries = store.history().by_action(HistoryAction::CategoryChanged);
    ensure!(entries.len() == 1);
    Ok(())
}

#[rstest]
fn remove_returns_task_and_records_deletion(mut store: TaskStore<ManualClock>) -> eyre::Result<()> {
    let task = store.create(TaskDraft::new("Cancel subscription", "The unused one"));

    let removed = store.remove(task.id())?;

    ensure!(removed.id() == task.id());
    ensure!(store.is_empty());
    ensure!(store.find_one(task.id()) == Err(TaskNotFoundError(task.id().clone())));

    let entries = store.history().for_task(task.id());
    let actions: Vec<HistoryAction> = entries.iter().map(|entry| entry.action()).collect();
    ensure!(actions == vec![HistoryAction::Deleted, HistoryAction::Created]);
    let newest = entries.first().expect("deletion entry should exist");
    ensure!(newest.description() == "Task \"Cancel subscription\" deleted");
    Ok(())
}

#[rstest]
fn remove_misses_with_not_found(mut store: TaskStore<ManualClock>) {
    let missing = TaskId::new("1");
    assert_eq!(store.remove(&missing), Err(TaskNotFoundError(missing)));
}

#[rstest]
fn deleted_ids_are_never_reused(mut store: TaskStore<ManualClock>) -> eyre::Result<()> {
    let first = store.create(TaskDraft::new("First", "a"));
    store.remove(first.id())?;
    let second = store.create(TaskDraft::new("Second", "b"));

    ensure!(second.id().as_str() == "2");
    Ok(())
}

#[rstest]
fn history_survives_task_deletion_until_cleared(
    mut store: TaskStore<ManualClock>,
) -> eyre::Result<()> {
    let task = store.create(TaskDraft::new("Book flights", "Window seat"));
    let id = task.id().clone();
    store.update(&id, TaskPatch::new().with_status(TaskStatus::Done))?;
    store.remove(&id)?;

    ensure!(store.history().for_task(&id).len() == 3);

    let removed = store.history_mut().clear_for_task(&id);
    ensure!(removed == 3);
    ensure!(store.history().for_task(&id).is_empty());
    Ok(())
}

#[rstest]
fn update_with_full_patch_changes_every_field(clock: ManualClock) -> eyre::Result<()> {
    let mut store = TaskStore::new(clock.clone());
    let task = store.create(
        TaskDraft::new("Original", "Original body")
            .with_category("work")
            .with_tags(tags(&["one"])),
    );
    clock.advance(Duration::seconds(1));

    let due = clock.now() + Duration::days(7);
    let updated = store.update(
        task.id(),
        TaskPatch::new()
            .with_title("Renamed")
            .with_description("New body")
            .with_status(TaskStatus::Cancelled)
            .with_priority(TaskPriority::Low)
            .with_category("home")
            .with_tags(tags(&["two", "three"]))
            .with_due_date(due),
    )?;

    ensure!(updated.title() == "Renamed");
    ensure!(updated.description() == "New body");
    ensure!(updated.status() == TaskStatus::Cancelled);
    ensure!(updated.priority() == TaskPriority::Low);
    ensure!(updated.category() == Some("home"));
    ensure!(updated.tags() == tags(&["two", "three"]).as_slice());
    ensure!(updated.due_date() == Some(due));
    ensure!(store.history().for_task(task.id()).len() == 8);
    Ok(())
}
