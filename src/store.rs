//! Global Application State Store
//!
//! Wraps [`TodoState`] in a Leptos reactive store. Components read through
//! `store.todo()` and mutate only through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{TaskId, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task list plus composer input
    pub todo: TodoState,
}

impl AppState {
    pub fn new(todo: TodoState) -> Self {
        Self { todo }
    }
}

/// Type alias for the store
pub type TodoStore = Store<AppState>;

/// Get the app store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the pending input as a task (or raise the empty-input flag)
pub fn store_submit(store: &TodoStore) -> Option<TaskId> {
    store.todo().write().submit()
}

pub fn store_set_pending(store: &TodoStore, text: String) {
    store.todo().write().set_pending_text(text);
}

pub fn store_clear_pending(store: &TodoStore) {
    store.todo().write().clear_pending_text();
}

/// Toggle completion of a task by ID
pub fn store_toggle_complete(store: &TodoStore, id: TaskId) {
    store.todo().write().toggle_complete_task(id);
}

/// Toggle edit mode of a task by ID
pub fn store_toggle_edit(store: &TodoStore, id: TaskId) {
    store.todo().write().toggle_edit_task(id);
}

/// Commit edited text for a task by ID
pub fn store_save_task(store: &TodoStore, id: TaskId, text: String) {
    store.todo().write().save_task(id, text);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TodoStore, id: TaskId) {
    if let Some(task) = store.todo().write().remove_task(id) {
        log::debug!("[STORE] removed task {} {:?}", task.id, task.text);
    }
}
