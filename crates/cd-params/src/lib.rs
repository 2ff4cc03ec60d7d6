//! cd-params: problem selection, parameter schema, and the edit store.

pub mod defaults;
pub mod file;
pub mod schema;
pub mod store;

pub use defaults::apply_family_defaults;
pub use file::{load_json, load_yaml, save_json, save_yaml, ProblemDefinition};
pub use schema::{BoundaryKind, Dimension, EquationType, ParameterSet, ProblemSelection};
pub use store::{FieldKind, ParameterStore};

pub type ParamsResult<T> = Result<T, ParamsError>;

#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[error("Unknown parameter field: {name}")]
    UnknownField { name: String },

    #[error("Field {name} takes {expected} values")]
    KindMismatch { name: String, expected: &'static str },

    #[error("Cannot read {raw:?} as a {expected} value for {name}")]
    Coerce {
        name: String,
        raw: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Domain(#[from] cd_core::DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
