use thiserror::Error;

pub type CoreResult<T> = Result<T, DomainError>;

/// Contract violations in the pure core: bad synthesizer input or a
/// parameter value that can never reach the wire.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Degenerate grid: need at least 2 points, got {num_points}")]
    DegenerateGrid { num_points: usize },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Expected a positive value for {what}, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}
