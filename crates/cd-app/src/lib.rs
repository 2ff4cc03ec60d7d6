//! Shared application service layer for the calcdyn client.
//!
//! Centralizes the solve cycle (compile, exchange, project) behind one
//! interface so frontends only deal with [`SolveRequest`]/[`SolveOutcome`] and a
//! unified error type.

pub mod error;
pub mod solve_service;

pub use error::{AppError, AppResult, TROUBLESHOOTING_TIPS};
pub use solve_service::{compile_request, run_solve, SolveOutcome, SolveRequest};

// Frontends read these through the service layer.
pub use cd_client::SolveClient;
pub use cd_results::Snapshot;
