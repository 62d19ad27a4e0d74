//! Todo List App
//!
//! Root component: loads config, creates the store and provides both via
//! context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoForm;
use crate::config::TodoConfig;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::load();
    let store = Store::new(AppState::new(config.initial_state()));
    log::info!("[APP] starting with {} seeded tasks", config.seed_tasks.len());

    let title = config.title.clone();
    let theme_style = config.theme.css_variables();

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    view! {
        <div class="wrapper" style=theme_style>
            <h1>{title}</h1>
            <TodoForm />
        </div>
    }
}
