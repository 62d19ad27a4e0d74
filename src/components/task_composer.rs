//! Task Composer Component
//!
//! Text field for a new task, the submit button and the empty-input hint.

use leptos::html;
use leptos::prelude::*;

use crate::config::TodoConfig;
use crate::events::prevent_enter;
use crate::store::{store_clear_pending, store_set_pending, use_todo_store, AppStateStoreFields};

/// Composer for new tasks. Submission is handled by the enclosing form.
#[component]
pub fn TaskComposer(input_ref: NodeRef<html::Input>) -> impl IntoView {
    let store = use_todo_store();
    let config = expect_context::<TodoConfig>();

    let pending = move || store.todo().with(|todo| todo.pending_text().to_string());
    let input_empty = move || store.todo().with(|todo| todo.is_input_empty());
    let empty_message = config.empty_message.clone();

    view! {
        <div class="form__input">
            <div class="form-control">
                <label for="new-task" class="text-field__label">{config.input_label.clone()}</label>
                <input
                    id="new-task"
                    type="text"
                    class="text-field__input"
                    aria-describedby="component-error-text"
                    node_ref=input_ref
                    prop:value=pending
                    on:input=move |ev| store_set_pending(&store, event_target_value(&ev))
                    on:focus=move |_| store_clear_pending(&store)
                    on:keypress=prevent_enter
                />
                <Show when=input_empty>
                    <p id="component-error-text" class="helper-text">{empty_message.clone()}</p>
                </Show>
            </div>
            <button type="submit" class="button" on:keypress=prevent_enter>
                {config.submit_label.clone()}
            </button>
        </div>
    }
}
