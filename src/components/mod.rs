//! UI Components
//!
//! The form container, the composer and the task list.

mod todo_form;
mod task_composer;
mod task_list_view;
mod task_row;

pub use todo_form::TodoForm;
pub use task_composer::TaskComposer;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
