//! Error types
//!
//! `ApiError` is what went wrong on the wire. `ActionError` is what an
//! operation reports back to the caller; the user only ever sees the
//! `Failure` text.

use std::fmt;

use thiserror::Error;

use crate::models::TodoId;

/// Failure talking to the remote collection
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// User-facing failure category, one banner text per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Load,
    Create,
    Delete,
}

impl Failure {
    pub fn message(&self) -> &'static str {
        match self {
            Failure::Load => "Error fetching todos",
            Failure::Create => "Error adding todo",
            Failure::Delete => "Error deleting todo",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    /// Another operation holds the busy gate
    #[error("another operation is still in flight")]
    Busy,

    #[error("{failure}: {source}")]
    Request {
        failure: Failure,
        #[source]
        source: ApiError,
    },

    /// Bulk delete stopped at the first failing item
    #[error("deleted {deleted} of {total} todos, stopped at #{failed_id}: {source}")]
    BulkDelete {
        deleted: usize,
        total: usize,
        failed_id: TodoId,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    /// Banner category, if the error came from the service
    pub fn failure(&self) -> Option<Failure> {
        match self {
            ActionError::Busy => None,
            ActionError::Request { failure, .. } => Some(*failure),
            ActionError::BulkDelete { .. } => Some(Failure::Delete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages_are_generic() {
        assert_eq!(Failure::Load.to_string(), "Error fetching todos");
        assert_eq!(Failure::Create.to_string(), "Error adding todo");
        assert_eq!(Failure::Delete.to_string(), "Error deleting todo");
    }

    #[test]
    fn test_bulk_delete_reports_delete_failure() {
        let err = ActionError::BulkDelete {
            deleted: 2,
            total: 5,
            failed_id: 9,
            source: ApiError::Status {
                status: 500,
                url: "http://host/todos/9".to_string(),
            },
        };
        assert_eq!(err.failure(), Some(Failure::Delete));
        assert!(err.to_string().starts_with("deleted 2 of 5 todos"));
        assert_eq!(ActionError::Busy.failure(), None);
    }
}
