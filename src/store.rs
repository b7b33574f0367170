//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! owned by the root component and only changed through [`reduce`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Client state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Pending text in the add-form
    pub add_todo_text: String,
    /// Service's list as of the last successful load
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// State changes produced by the UI and the sync layer
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// User typed in the add-form
    InputChanged(String),
    /// An add went through
    InputCleared,
    /// Fresh list from the service
    TodosLoaded(Vec<Todo>),
}

/// Apply one event to the state
pub fn reduce(state: &mut AppState, event: SyncEvent) {
    match event {
        SyncEvent::InputChanged(text) => state.add_todo_text = text,
        SyncEvent::InputCleared => state.add_todo_text.clear(),
        SyncEvent::TodosLoaded(todos) => state.todos = todos,
    }
}

/// Apply an event to the live store, notifying subscribers
pub fn store_apply(store: &AppStore, event: SyncEvent) {
    if let SyncEvent::TodosLoaded(todos) = &event {
        log::debug!("[STORE] Loaded {} todos", todos.len());
    }
    store.update(|state| reduce(state, event));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    fn todo(id: i64, text: &str, complete: bool) -> Todo {
        Todo { id: TodoId(id), text: text.to_string(), complete }
    }

    #[test]
    fn test_initial_state_empty() {
        let state = AppState::default();
        assert!(state.add_todo_text.is_empty());
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_input_changed_sets_text() {
        let mut state = AppState::default();
        reduce(&mut state, SyncEvent::InputChanged("Buy milk".into()));
        assert_eq!(state.add_todo_text, "Buy milk");
    }

    #[test]
    fn test_loaded_replaces_list_wholesale() {
        let mut state = AppState {
            add_todo_text: "draft".into(),
            todos: vec![todo(1, "old", false), todo(2, "older", true)],
        };

        reduce(&mut state, SyncEvent::TodosLoaded(vec![todo(7, "new", false)]));

        assert_eq!(state.todos, vec![todo(7, "new", false)]);
        assert_eq!(state.add_todo_text, "draft");
    }

    #[test]
    fn test_input_cleared_keeps_todos() {
        let mut state = AppState {
            add_todo_text: "Buy milk".into(),
            todos: vec![todo(1, "a", false)],
        };

        reduce(&mut state, SyncEvent::InputCleared);

        assert!(state.add_todo_text.is_empty());
        assert_eq!(state.todos.len(), 1);
    }
}
