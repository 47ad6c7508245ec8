//! Error types for configuration transitions

use thiserror::Error;

use crate::types::{TypeTag, VariableRef};

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when an intent is rejected
///
/// All variants are recoverable: the reducer returns the error and the
/// caller's config is left untouched, never partially applied.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more variables do not match the explicitly declared output type
    #[error("{} variable(s) do not match declared type {expected:?}", offending.len())]
    TypeMismatch {
        expected: TypeTag,
        offending: Vec<VariableRef>,
    },

    /// A group index points past the end of the group list
    #[error("group index {index} out of range (have {len} groups)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A variable list repeats a `(node_id, variable_name)` pair
    #[error("duplicate variable '{variable_name}' from node '{node_id}'")]
    DuplicateVariable {
        node_id: String,
        variable_name: String,
    },

    /// The persisted node-settings record could not be read or written
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
