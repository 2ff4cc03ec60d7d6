//! cd-client: HTTP transport to the remote solver service.
//!
//! Owns no domain logic beyond serialization and error translation. One POST
//! per solve, no retries; a failed attempt is terminal for that cycle.

pub mod client;

pub use client::{SolveClient, DEFAULT_BASE_URL, DEFAULT_SOLVE_TIMEOUT, ENV_BASE_URL};

use std::time::Duration;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The whole exchange exceeded the solve bound. Distinct from a remote
    /// failure: the solver never answered.
    #[error("Request timed out. The calculation might be too complex or the server might be overloaded.")]
    Timeout { limit: Duration },

    /// The solver answered with a failure status and (usually) a message.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// Network-level failure underneath the bound.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
