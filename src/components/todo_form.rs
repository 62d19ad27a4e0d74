//! Todo Form Component
//!
//! Container wiring the composer and the list into one form. Owns the
//! composer input reference so focus returns to it after a submit.

use leptos::html;
use leptos::prelude::*;

use crate::components::{TaskComposer, TaskListView};
use crate::store::{store_submit, use_todo_store};

#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_todo_store();
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit(&store);
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::warn!("[FORM] could not refocus composer input: {:?}", e);
            }
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <TaskComposer input_ref=input_ref />
            <TaskListView />
        </form>
    }
}
