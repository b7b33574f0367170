//! Frontend Models
//!
//! Data structures matching the todo service's JSON bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque todo identifier assigned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo data structure (matches service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

// ========================
// Request Bodies
// ========================

/// Body of `POST /add`
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
}

/// Body of `POST /edit`
#[derive(Debug, Serialize)]
pub struct EditTodo<'a> {
    pub id: TodoId,
    pub text: &'a str,
}

/// Body of `POST /mark`
#[derive(Debug, Serialize)]
pub struct MarkTodo {
    pub id: TodoId,
    pub complete: bool,
}

/// Body of `POST /del`
#[derive(Debug, Serialize)]
pub struct DeleteTodo {
    pub id: TodoId,
}
