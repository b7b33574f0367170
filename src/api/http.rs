//! HTTP implementation of [`TodoApi`] on top of `reqwest` (fetch on wasm32).

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::SyncError;
use crate::models::{DeleteTodo, EditTodo, MarkTodo, NewTodo, Todo, TodoId};

/// Todo service reached over HTTP
#[derive(Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<(), SyncError> {
        let mut request = self.client.post(self.config.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        ensure_success(response).await.map(|_| ())
    }
}

/// Turn any non-2xx answer into [`SyncError::Status`]
async fn ensure_success(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(SyncError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, SyncError> {
        let response = self.client.get(self.config.endpoint("/todos")).send().await?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn add(&self, text: &str) -> Result<(), SyncError> {
        self.post("/add", Some(&NewTodo { text })).await
    }

    async fn edit(&self, id: TodoId, text: &str) -> Result<(), SyncError> {
        self.post("/edit", Some(&EditTodo { id, text })).await
    }

    async fn mark(&self, id: TodoId, complete: bool) -> Result<(), SyncError> {
        self.post("/mark", Some(&MarkTodo { id, complete })).await
    }

    async fn delete(&self, id: TodoId) -> Result<(), SyncError> {
        self.post("/del", Some(&DeleteTodo { id })).await
    }

    async fn clear_complete(&self) -> Result<(), SyncError> {
        self.post::<()>("/clear_complete", None).await
    }
}
