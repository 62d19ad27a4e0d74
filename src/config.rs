//! App Configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON block embedded in
//! the host page:
//!
//! ```html
//! <script id="todo-config" type="application/json">{"title": "Chores"}</script>
//! ```

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::TodoState;

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colors applied as CSS custom properties on the wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub list_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#000000".to_string(),
            list_background: "#f5f5f5".to_string(),
        }
    }
}

impl Theme {
    pub fn css_variables(&self) -> String {
        format!(
            "--todo-primary: {}; --todo-list-bg: {};",
            self.primary, self.list_background
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub title: String,
    pub input_label: String,
    pub empty_message: String,
    pub submit_label: String,
    /// Tasks present on first render
    pub seed_tasks: Vec<String>,
    pub theme: Theme,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            input_label: "What's need to be done?".to_string(),
            empty_message: "Task can't be empty".to_string(),
            submit_label: "Add task".to_string(),
            seed_tasks: vec![
                "Learn about Leptos".to_string(),
                "Meet friend for lunch".to_string(),
                "Build really cool todo app".to_string(),
            ],
            theme: Theme::default(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the embedded config block, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::debug!("[CONFIG] loaded from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn initial_state(&self) -> TodoState {
        TodoState::seeded(self.seed_tasks.iter().cloned())
    }
}
