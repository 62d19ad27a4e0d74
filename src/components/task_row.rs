//! Task Row Component
//!
//! One task: checkbox, label or inline edit field, edit/save and delete.

use leptos::html;
use leptos::prelude::*;
use todo_core::TaskId;

use crate::events::prevent_enter;
use crate::store::{
    store_remove_task, store_save_task, store_toggle_complete, store_toggle_edit, use_todo_store,
    AppStateStoreFields,
};

/// A single task row
#[component]
pub fn TaskRow(id: TaskId) -> impl IntoView {
    let store = use_todo_store();
    let task = Memo::new(move |_| store.todo().with(|todo| todo.task(id).cloned()));

    let is_completed = move || task.with(|t| t.as_ref().is_some_and(|t| t.is_completed));
    let is_editing = move || task.with(|t| t.as_ref().is_some_and(|t| t.is_editing));
    let text = move || task.with(|t| t.as_ref().map(|t| t.text.clone()).unwrap_or_default());

    let label_id = format!("list-todo-{}", id);
    let checkbox_label = label_id.clone();
    let edit_id = format!("task-{}", id);
    let edit_ref: NodeRef<html::Input> = NodeRef::new();

    // Read the live field value, not a controlled buffer
    let save = move |_: web_sys::MouseEvent| match edit_ref.get() {
        Some(input) => store_save_task(&store, id, input.value()),
        None => log::warn!("[ROW] save on task {} without an edit field", id),
    };

    view! {
        <li class=move || if is_completed() { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                class="task-row__checkbox"
                tabindex="-1"
                aria-labelledby=checkbox_label
                prop:checked=is_completed
                on:change=move |_| store_toggle_complete(&store, id)
                on:keypress=prevent_enter
            />
            <Show
                when=move || !is_editing()
                fallback=move || {
                    let edit_id = edit_id.clone();
                    let initial = task.with_untracked(|t| {
                        t.as_ref().map(|t| t.text.clone()).unwrap_or_default()
                    });
                    view! {
                        <label for=edit_id.clone() class="visuallyhidden">{text}</label>
                        <input
                            id=edit_id
                            class="form__edit-input"
                            node_ref=edit_ref
                            value=initial
                            on:keypress=prevent_enter
                        />
                        <button type="button" class="icon-btn" aria-label="save" on:click=save>
                            "🔖"
                        </button>
                    }
                }
            >
                <span id=label_id.clone() class="task-row__text">{text}</span>
                <button
                    type="button"
                    class="icon-btn"
                    aria-label="edit"
                    on:click=move |_| store_toggle_edit(&store, id)
                >
                    "✎"
                </button>
            </Show>
            <button
                type="button"
                class="icon-btn"
                aria-label="delete"
                on:click=move |_| store_remove_task(&store, id)
            >
                "🗑"
            </button>
        </li>
    }
}
