//! cd-protocol: the wire contract with the remote solver service.
//!
//! Payload shapes, the parameter-to-request compiler, and the response types.
//! Everything here is pure: no I/O, no mutation of inputs.

pub mod compile;
pub mod payload;
pub mod result;

pub use compile::compile;
pub use payload::{BurgersPayload, Heat2dPayload, HeatPayload, SolvePayload, WavePayload};
pub use result::{HealthStatus, PlotSet, SolveResult};

use cd_params::{Dimension, EquationType};

pub type ProtocolResult<T> = Result<T, CompileError>;

#[derive(thiserror::Error, Debug)]
pub enum CompileError {
    /// Selection with no solver endpoint. Unreachable through the store's
    /// transitions, but the pairing is representable so it is rejected here
    /// rather than assumed away.
    #[error("No solver endpoint for dimension {dimension:?} with equation type {equation_type:?}")]
    UnsupportedSelection {
        dimension: Dimension,
        equation_type: EquationType,
    },

    #[error(transparent)]
    Domain(#[from] cd_core::DomainError),
}
