//! Tasktrail: in-memory task tracking with field-level audit history.
//!
//! This crate provides the core functionality for managing a task
//! collection: creation, patch-based updates, filtered listings,
//! aggregate statistics and an append-only change history derived by
//! diffing each update against the current state.
//!
//! # Architecture
//!
//! The crate is the state-owning core behind a thin boundary (HTTP or
//! otherwise) that validates raw input before calling in:
//!
//! - **Domain**: Pure value types and change detection with no state
//! - **Store**: The stateful owners of tasks and history
//!
//! Mutations flow one way: the store diffs, applies, then records into
//! its history log. The log never reaches back into the task collection.
//!
//! # Modules
//!
//! - [`domain`]: Tasks, drafts, patches, history records and diffing
//! - [`store`]: [`store::TaskStore`] and [`store::HistoryLog`]

pub mod domain;
pub mod store;

#[cfg(test)]
mod tests;
