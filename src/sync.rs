//! Sync Actions
//!
//! One user intent, one request. Every successful write is followed by a full
//! reload of the list; a failed request stops the action where it is.

use crate::api::TodoApi;
use crate::error::SyncError;
use crate::models::TodoId;
use crate::store::SyncEvent;

/// Things the UI can ask the service to do
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    Load,
    Add(String),
    Edit { id: TodoId, text: String },
    Mark { id: TodoId, complete: bool },
    Delete(TodoId),
    ClearComplete,
}

/// Run an action against the service, handing resulting events to `apply`.
///
/// On error nothing more is applied and no reload is attempted.
pub async fn perform<A, F>(api: &A, action: SyncAction, mut apply: F) -> Result<(), SyncError>
where
    A: TodoApi + ?Sized,
    F: FnMut(SyncEvent),
{
    match action {
        SyncAction::Load => {}
        SyncAction::Add(text) => {
            api.add(&text).await?;
            apply(SyncEvent::InputCleared);
        }
        SyncAction::Edit { id, text } => api.edit(id, &text).await?,
        SyncAction::Mark { id, complete } => api.mark(id, complete).await?,
        SyncAction::Delete(id) => api.delete(id).await?,
        SyncAction::ClearComplete => api.clear_complete().await?,
    }

    let todos = api.list().await?;
    apply(SyncEvent::TodosLoaded(todos));
    Ok(())
}
