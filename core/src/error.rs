//! Error types for the character API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the detail view reports it
//! directly. All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` is produced by hosts when the
//! request never yields a response at all.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request could not be sent or the response could not be read.
    #[error("transport failed: {0}")]
    Transport(String),
}
