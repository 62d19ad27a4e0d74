//! Task Errors

use thiserror::Error;

use crate::task::TaskId;

/// Common result type for task list operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors reported by [`TaskList`](crate::TaskList) addressing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("index {index} out of range for {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("task {0} not found")]
    NotFound(TaskId),
}
