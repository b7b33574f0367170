//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::store::{store_apply, AppStore, SyncEvent};
use crate::sync::{self, SyncAction};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Client state owned by the root component
    pub store: AppStore,
    api: HttpTodoApi,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpTodoApi) -> Self {
        Self { store, api }
    }

    /// Apply a local (non-network) event
    pub fn apply(&self, event: SyncEvent) {
        store_apply(&self.store, event);
    }

    /// Run an action in the background; failures end in a blocking alert
    pub fn dispatch(&self, action: SyncAction) {
        let store = self.store;
        let api = self.api.clone();
        log::debug!("[SYNC] {:?}", action);
        spawn_local(async move {
            if let Err(e) = sync::perform(&api, action, |event| store_apply(&store, event)).await {
                log::warn!("[SYNC] {}", e);
                alert(e.user_message());
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask the user for a new description. `None` when the prompt is cancelled.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}
