//! Task List View Component
//!
//! Renders tasks in insertion order, keyed by task id.

use leptos::prelude::*;
use todo_core::TaskId;

use crate::components::TaskRow;
use crate::store::{use_todo_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_todo_store();

    let task_ids = move || {
        store
            .todo()
            .with(|todo| todo.tasks().iter().map(|task| task.id).collect::<Vec<TaskId>>())
    };

    view! {
        <ul class="task-list">
            <For
                each=task_ids
                key=|id| *id
                children=move |id| view! { <TaskRow id=id /> }
            />
        </ul>
    }
}
