//! Task List
//!
//! Ordered task sequence. Order is insertion order and only changes on
//! removal. Ids come from a counter owned by the list and are never reused.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{TaskError, TaskResult};
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTaskList")]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

/// Wire shape of a snapshot, before the id counter is checked
#[derive(Deserialize)]
struct RawTaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl From<RawTaskList> for TaskList {
    fn from(raw: RawTaskList) -> Self {
        // The counter must stay ahead of every id already handed out
        let after_max = raw
            .tasks
            .iter()
            .map(|task| task.id().get() + 1)
            .max()
            .unwrap_or(1);
        Self {
            tasks: raw.tasks,
            next_id: raw.next_id.max(after_max),
        }
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a list from seed texts, in order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for text in texts {
            list.push(text);
        }
        list
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new task and return its id
    pub fn push(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text));
        id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Current position of a task, if it still exists
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    fn check_index(&self, index: usize) -> TaskResult<usize> {
        if index < self.tasks.len() {
            Ok(index)
        } else {
            Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }

    fn index_of(&self, id: TaskId) -> TaskResult<usize> {
        self.position(id).ok_or(TaskError::NotFound(id))
    }

    // ========================
    // Index-addressed mutations
    // ========================

    pub fn remove(&mut self, index: usize) -> TaskResult<Task> {
        let index = self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Flip completion, returning the new value
    pub fn toggle_complete(&mut self, index: usize) -> TaskResult<bool> {
        let index = self.check_index(index)?;
        Ok(self.tasks[index].toggle_complete())
    }

    /// Flip edit mode, returning the new value
    pub fn toggle_edit(&mut self, index: usize) -> TaskResult<bool> {
        let index = self.check_index(index)?;
        Ok(self.tasks[index].toggle_edit())
    }

    pub fn save(&mut self, index: usize, text: impl Into<String>) -> TaskResult<()> {
        let index = self.check_index(index)?;
        self.tasks[index].save(text);
        Ok(())
    }

    // ========================
    // Id-addressed mutations
    // ========================

    pub fn remove_task(&mut self, id: TaskId) -> TaskResult<Task> {
        let index = self.index_of(id)?;
        self.remove(index)
    }

    pub fn toggle_complete_task(&mut self, id: TaskId) -> TaskResult<bool> {
        let index = self.index_of(id)?;
        self.toggle_complete(index)
    }

    pub fn toggle_edit_task(&mut self, id: TaskId) -> TaskResult<bool> {
        let index = self.index_of(id)?;
        self.toggle_edit(index)
    }

    pub fn save_task(&mut self, id: TaskId, text: impl Into<String>) -> TaskResult<()> {
        let index = self.index_of(id)?;
        self.save(index, text)
    }
}
