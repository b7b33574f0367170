//! Todo Adder Component
//!
//! Input bound to the pending text plus the add button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, SyncEvent};
use crate::sync::SyncAction;

/// Whether the add button is enabled for this input
pub fn can_add(text: &str) -> bool {
    !text.is_empty()
}

/// Form for creating new todos
#[component]
pub fn TodoAdder() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let input_ctx = ctx.clone();

    view! {
        <div>
            <input
                type="text"
                prop:value=move || store.add_todo_text().get()
                on:input=move |ev| input_ctx.apply(SyncEvent::InputChanged(event_target_value(&ev)))
            />
            <button
                disabled=move || !store.add_todo_text().with(|text| can_add(text))
                on:click=move |_| {
                    let text = store.add_todo_text().get_untracked();
                    if can_add(&text) {
                        ctx.dispatch(SyncAction::Add(text));
                    }
                }
            >
                "Add todo"
            </button>
        </div>
    }
}
