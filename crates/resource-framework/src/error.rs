//! # Resource Errors
//!
//! This module defines the error types returned by resource verbs.
//!
//! Two kinds of failure reach a caller:
//!
//! - [`HttpError`] - raised by the resource itself (e.g. `edit` on a missing id).
//! - A collaborator failure - whatever the [`Model`](crate::Model) returned, relayed verbatim.
//!
//! [`ResourceError`] is the union of both, so a hosting framework can render any rejection
//! with a single match.

use serde::{Deserialize, Serialize};

/// An HTTP-style error carrying a status code and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{status} {message}")]
pub struct HttpError {
    pub status: u16,
    pub message: String,
}

impl HttpError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// `404 Not Found`.
    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }
}

/// Errors returned by [`ModelResource`](crate::ModelResource) verbs.
///
/// `E` is the model's own error type. It is never wrapped or translated, only carried.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Model(E),

    /// The entity looked up by `update` was absent.
    #[error("Cannot update {0}: entity not found")]
    Missing(String),
}

impl<E> ResourceError<E>
where
    E: std::error::Error + 'static,
{
    /// The HTTP status a host should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ResourceError::Http(e) => e.status,
            ResourceError::Model(_) | ResourceError::Missing(_) => 500,
        }
    }

    /// Returns the HTTP error, if this is one.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            ResourceError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors from the in-memory [`StoreActor`](crate::actor::StoreActor) and its client.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Errors from loading [`ResourceConfig`](crate::config::ResourceConfig).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
