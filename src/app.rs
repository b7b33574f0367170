//! Todo App
//!
//! Root component: owns the state store and wires up the service client.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{TodoAdder, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::sync::SyncAction;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, HttpTodoApi::new(config));

    // Provide context to all children
    provide_context(ctx.clone());

    // Load todos on mount
    let load_ctx = ctx.clone();
    Effect::new(move |_| load_ctx.dispatch(SyncAction::Load));

    view! {
        <div>
            <TodoList />
            <TodoAdder />
            <button on:click=move |_| ctx.dispatch(SyncAction::ClearComplete)>
                "Clear completed todos"
            </button>
        </div>
    }
}
