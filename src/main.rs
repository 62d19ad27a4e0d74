#![allow(warnings)]
//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod events;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("failed to initialize console logging: {}", e).into());
    }
    mount_to_body(App);
}
