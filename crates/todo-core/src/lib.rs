//! Todo Core
//!
//! Domain layer for the todo list:
//! - task: the task entity and its id
//! - list: ordered task sequence with index and id addressing
//! - state: task list plus composer input (the store the UI wraps)
//!
//! No UI framework dependencies live here.

mod entity;
mod error;
mod list;
mod state;
mod task;

#[cfg(test)]
mod tests;

pub use entity::Entity;
pub use error::{TaskError, TaskResult};
pub use list::TaskList;
pub use state::TodoState;
pub use task::{Task, TaskId};
