//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An entity was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up.
        kind: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// An identifier was assigned to an entity that already has one.
    #[error("{kind} already has identifier {id}")]
    IdentityAlreadyAssigned {
        /// The kind of entity.
        kind: &'static str,
        /// The identifier the entity already carries.
        id: String,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Builds a `NotFound` error for the given entity kind and identifier.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
