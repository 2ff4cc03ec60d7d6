//! cd-results: time-indexed projection of solve results.

pub mod projector;
pub mod types;

pub use projector::{
    nearest_index, nearest_index_within, project, representative_indices, representative_times,
    TIME_MATCH_TOLERANCE,
};
pub use types::Snapshot;
