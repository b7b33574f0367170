//! Todo List Component
//!
//! Heading plus one row per todo, or a placeholder when there are none.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::AppStateStoreFields;

/// Shown instead of rows when the list is empty
pub const EMPTY_PLACEHOLDER: &str = "No todos yet. Add some!";

/// Placeholder text for the list, if any
pub fn list_placeholder(todos: &[Todo]) -> Option<&'static str> {
    todos.is_empty().then_some(EMPTY_PLACEHOLDER)
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <h2>"Todos"</h2>
        <Show
            when=move || store.todos().with(|todos| list_placeholder(todos).is_none())
            fallback=|| view! { <p>{EMPTY_PLACEHOLDER}</p> }
        >
            <For
                each=move || store.todos().get()
                // Key on every displayed field so edits and toggles re-render
                key=|todo| (todo.id, todo.text.clone(), todo.complete)
                children=|todo| view! { <TodoRow todo=todo /> }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    #[test]
    fn test_placeholder_only_when_empty() {
        assert_eq!(list_placeholder(&[]), Some("No todos yet. Add some!"));

        let todos = vec![Todo { id: TodoId(1), text: "a".into(), complete: false }];
        assert_eq!(list_placeholder(&todos), None);
    }
}
