//! Unit tests for the task domain and the stateful stores.

mod support;

mod history_tests;
mod store_tests;
