//! Todo State
//!
//! The task list together with the composer's pending input and the
//! empty-submission flag. Every mutation the UI performs goes through here.
//!
//! Operations on a missing index or id are no-ops: the list reports the
//! error, this layer logs it and leaves the state as it was.

use serde::{Deserialize, Serialize};

use crate::error::TaskResult;
use crate::list::TaskList;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    list: TaskList,
    pending: String,
    input_empty: bool,
}

fn ignore_missing<T>(op: &str, result: TaskResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("[STORE] {} ignored: {}", op, err);
            None
        }
    }
}

impl TodoState {
    pub fn new(list: TaskList) -> Self {
        Self {
            list,
            ..Default::default()
        }
    }

    /// State seeded with the given task texts
    pub fn seeded<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(TaskList::from_texts(texts))
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.list.task(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    /// True after an empty submission, until the input changes
    pub fn is_input_empty(&self) -> bool {
        self.input_empty
    }

    // ========================
    // Composer
    // ========================

    /// Append a task, or raise the empty-input flag when `text` is empty.
    ///
    /// Returns the id of the created task.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            self.input_empty = true;
            return None;
        }
        let id = self.list.push(text);
        self.pending.clear();
        log::debug!("[STORE] added task {} ({} total)", id, self.list.len());
        Some(id)
    }

    /// Add the pending input as a task
    pub fn submit(&mut self) -> Option<TaskId> {
        let text = std::mem::take(&mut self.pending);
        let added = self.add(&text);
        if added.is_none() {
            self.pending = text;
        }
        added
    }

    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.input_empty = false;
        self.pending = text.into();
    }

    pub fn clear_pending_text(&mut self) {
        self.pending.clear();
    }

    // ========================
    // Rows by index
    // ========================

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        ignore_missing("remove", self.list.remove(index))
    }

    pub fn toggle_complete(&mut self, index: usize) -> Option<bool> {
        ignore_missing("toggle_complete", self.list.toggle_complete(index))
    }

    pub fn toggle_edit(&mut self, index: usize) -> Option<bool> {
        ignore_missing("toggle_edit", self.list.toggle_edit(index))
    }

    pub fn save(&mut self, index: usize, text: impl Into<String>) -> bool {
        ignore_missing("save", self.list.save(index, text)).is_some()
    }

    // ========================
    // Rows by id
    // ========================

    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        ignore_missing("remove_task", self.list.remove_task(id))
    }

    pub fn toggle_complete_task(&mut self, id: TaskId) -> Option<bool> {
        ignore_missing("toggle_complete_task", self.list.toggle_complete_task(id))
    }

    pub fn toggle_edit_task(&mut self, id: TaskId) -> Option<bool> {
        ignore_missing("toggle_edit_task", self.list.toggle_edit_task(id))
    }

    pub fn save_task(&mut self, id: TaskId, text: impl Into<String>) -> bool {
        ignore_missing("save_task", self.list.save_task(id, text)).is_some()
    }
}
