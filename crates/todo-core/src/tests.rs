//! Scenario Tests
//!
//! Walks the store through sequences of user actions.

#[cfg(test)]
mod tests {
    use crate::{Task, TodoState};

    fn seeded() -> TodoState {
        TodoState::seeded([
            "Learn about Leptos",
            "Meet friend for lunch",
            "Build really cool todo app",
        ])
    }

    #[test]
    fn test_add_toggle_delete_scenario() {
        let mut state = seeded();

        state.set_pending_text("Buy milk");
        state.submit().expect("add failed");
        assert_eq!(state.len(), 4);
        assert_eq!(state.tasks()[3].text, "Buy milk");

        let untouched: Vec<Task> = state.tasks()[1..].to_vec();
        assert_eq!(state.toggle_complete(0), Some(true));
        assert!(state.tasks()[0].is_completed);
        assert_eq!(&state.tasks()[1..], untouched.as_slice());

        let former_two = state.tasks()[2].clone();
        state.remove(1).expect("delete failed");
        assert_eq!(state.len(), 3);
        assert_eq!(state.tasks()[1], former_two);
    }

    #[test]
    fn test_toggle_complete_twice_restores() {
        let mut state = seeded();
        let original = state.tasks()[2].is_completed;
        state.toggle_complete(2);
        state.toggle_complete(2);
        assert_eq!(state.tasks()[2].is_completed, original);
    }

    #[test]
    fn test_multiple_rows_can_edit_at_once() {
        let mut state = seeded();
        state.toggle_edit(0);
        state.toggle_edit(2);
        let editing: Vec<bool> = state.tasks().iter().map(|t| t.is_editing).collect();
        assert_eq!(editing, vec![true, false, true]);

        state.save(2, "Ship it");
        let editing: Vec<bool> = state.tasks().iter().map(|t| t.is_editing).collect();
        assert_eq!(editing, vec![true, false, false]);
        assert_eq!(state.tasks()[2].text, "Ship it");
    }

    #[test]
    fn test_edit_by_id_survives_deletion_before_it() {
        let mut state = seeded();
        let target = state.tasks()[2].id;
        state.toggle_edit_task(target);
        state.remove(0);

        assert!(state.save_task(target, "Renamed"));
        let task = state.task(target).unwrap();
        assert_eq!(task.text, "Renamed");
        assert!(!task.is_editing);
        assert_eq!(state.list().position(target), Some(1));
    }

    #[test]
    fn test_empty_submit_then_typing() {
        let mut state = seeded();
        state.submit();
        assert!(state.is_input_empty());
        assert_eq!(state.len(), 3);

        state.set_pending_text("Call mom");
        assert!(!state.is_input_empty());
        state.submit();
        assert_eq!(state.len(), 4);
        assert!(!state.is_input_empty());
    }

    #[test]
    fn test_state_snapshot_serializes() {
        let state = seeded();
        let json = serde_json::to_string(&state).unwrap();
        let back: TodoState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_snapshot_with_stale_counter_does_not_reuse_ids() {
        let json = r#"{
            "list": {
                "tasks": [
                    {"id": 1, "text": "a", "is_completed": false, "is_editing": false},
                    {"id": 4, "text": "b", "is_completed": true, "is_editing": false}
                ],
                "next_id": 1
            },
            "pending": "",
            "input_empty": false
        }"#;
        let mut state: TodoState = serde_json::from_str(json).unwrap();
        let existing: Vec<_> = state.tasks().iter().map(|t| t.id).collect();

        let id = state.add("c").unwrap();
        assert!(!existing.contains(&id));
        assert!(existing.iter().all(|old| id > *old));
    }

    #[test]
    fn test_snapshot_keeps_counter_ahead_of_tasks() {
        let json = r#"{"list": {"tasks": [], "next_id": 9}, "pending": "", "input_empty": false}"#;
        let mut state: TodoState = serde_json::from_str(json).unwrap();
        assert_eq!(state.add("x").map(|id| id.get()), Some(9));
    }
}
