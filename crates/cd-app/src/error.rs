//! Unified error surface for frontends.

use cd_client::ClientError;

/// Shown alongside any failed solve cycle; intentionally static.
pub const TROUBLESHOOTING_TIPS: [&str; 3] = [
    "Check your internet connection",
    "Reduce the problem size (fewer grid points)",
    "Try the request again in a few moments",
];

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Parameter error: {0}")]
    Params(#[from] cd_params::ParamsError),

    #[error("Request compilation failed: {0}")]
    Compile(#[from] cd_protocol::CompileError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Expected runtime conditions (the exchange failed) as opposed to
    /// contract violations (bad parameters or selections), which should be
    /// fixed rather than retried.
    pub fn is_expected(&self) -> bool {
        matches!(self, AppError::Client(_))
    }

    /// Single user-visible message for the failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
