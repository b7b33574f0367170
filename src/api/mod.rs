//! Todo Service API
//!
//! The six calls the client makes against the todo service, behind a trait
//! so the sync layer can be driven without a network.

mod http;

use async_trait::async_trait;

use crate::error::SyncError;
use crate::models::{Todo, TodoId};

pub use http::HttpTodoApi;

/// Remote todo service.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos`
    async fn list(&self) -> Result<Vec<Todo>, SyncError>;

    /// `POST /add`
    async fn add(&self, text: &str) -> Result<(), SyncError>;

    /// `POST /edit`
    async fn edit(&self, id: TodoId, text: &str) -> Result<(), SyncError>;

    /// `POST /mark`
    async fn mark(&self, id: TodoId, complete: bool) -> Result<(), SyncError>;

    /// `POST /del`
    async fn delete(&self, id: TodoId) -> Result<(), SyncError>;

    /// `POST /clear_complete`
    async fn clear_complete(&self) -> Result<(), SyncError>;
}
