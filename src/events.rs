//! Shared DOM event handlers

/// Swallow Enter so inline fields never submit the enclosing form
pub fn prevent_enter(ev: web_sys::KeyboardEvent) {
    if ev.key() == "Enter" {
        ev.prevent_default();
    }
}
