// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types.
use thiserror::Error;

/// Crate result type; defaults to precondition failures.
pub type Result<T, E = PreconditionError> = std::result::Result<T, E>;

/// A caller-supplied value failed a required structural check.
///
/// These are fatal to the operation that raised them: nothing is retried and no downstream
/// collaborator is invoked once one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("name is required")]
    MissingName,

    #[error("categories are required")]
    MissingCategories,

    #[error("name must be text")]
    NameNotText,

    #[error("{field} must be iterable")]
    NotIterable { field: &'static str },

    #[error("{field} must be a key/value mapping")]
    NotMapping { field: &'static str },

    #[error("{field} must be absent or a key/value mapping")]
    NotOptionalMapping { field: &'static str },

    /// The persistence result was present but not a mapping.
    #[error("save result must be absent or a key/value mapping")]
    ResultNotMapping,

    #[error("save result is missing keys: {}", .missing.join(", "))]
    ResultMissingKeys { missing: Vec<String> },
}

/// Failures while loading a [`GateConfig`](crate::config::GateConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gate config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("required result key at position {0} is empty")]
    EmptyResultKey(usize),
}
