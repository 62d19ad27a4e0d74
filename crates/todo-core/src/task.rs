//! Task Entity
//!
//! A single to-do entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Stable task identifier, allocated by [`TaskList`](crate::TaskList)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never reused
    pub id: TaskId,
    /// Label shown in the list
    pub text: String,
    /// Completion status, drives the checkbox
    pub is_completed: bool,
    /// Whether the row shows the inline edit field
    pub is_editing: bool,
}

impl Task {
    /// New task, neither completed nor editing
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_completed: false,
            is_editing: false,
        }
    }

    pub fn toggle_complete(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }

    pub fn toggle_edit(&mut self) -> bool {
        self.is_editing = !self.is_editing;
        self.is_editing
    }

    /// Commit edited text and leave edit mode
    pub fn save(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_editing = false;
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_flags_are_explicit() {
        let task = Task::new(TaskId::new(7), "Water plants");
        assert_eq!(task.id(), TaskId::new(7));
        assert_eq!(task.text, "Water plants");
        assert!(!task.is_completed);
        assert!(!task.is_editing);
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut task = Task::new(TaskId::new(1), "a");
        assert!(task.toggle_complete());
        assert!(!task.toggle_complete());
        assert!(task.toggle_edit());
        assert!(!task.toggle_edit());
        assert_eq!(task, Task::new(TaskId::new(1), "a"));
    }

    #[test]
    fn test_save_leaves_edit_mode() {
        let mut task = Task::new(TaskId::new(1), "old");
        task.toggle_edit();
        task.toggle_complete();
        task.save("new");
        assert_eq!(task.text, "new");
        assert!(!task.is_editing);
        assert!(task.is_completed);
    }

    #[test]
    fn test_task_serializes_with_plain_id() {
        let task = Task::new(TaskId::new(3), "x");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["is_completed"], false);
    }
}
