//! Todo Row Component
//!
//! One todo with its edit, toggle and delete controls.

use leptos::prelude::*;

use crate::context::{prompt, use_app_context};
use crate::models::{Todo, TodoId};
use crate::sync::SyncAction;

/// Class set on rows of completed todos
pub const COMPLETE_CLASS: &str = "complete";

const EDIT_PROMPT: &str = "Enter a new description for the todo item:";

/// Text shown after the row's buttons
pub fn row_label(id: TodoId, text: &str) -> String {
    format!("Todo #{}: {}", id, text)
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let Todo { id, text, complete } = todo;
    let label = row_label(id, &text);
    let edit_ctx = ctx.clone();
    let mark_ctx = ctx.clone();

    view! {
        <p class=(COMPLETE_CLASS, complete)>
            <button on:click=move |_| {
                // Cancelled prompt: leave the todo alone
                if let Some(new_text) = prompt(EDIT_PROMPT, &text) {
                    edit_ctx.dispatch(SyncAction::Edit { id, text: new_text });
                }
            }>"Edit"</button>
            <button on:click=move |_| {
                mark_ctx.dispatch(SyncAction::Mark { id, complete: !complete });
            }>"Toggle"</button>
            <button on:click=move |_| ctx.dispatch(SyncAction::Delete(id))>"Delete"</button>
            {label}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_label() {
        assert_eq!(row_label(TodoId(3), "Call mom"), "Todo #3: Call mom");
        assert_eq!(row_label(TodoId(12), ""), "Todo #12: ");
    }
}
