//! Entity abstraction.
//!
//! An entity is a plain value whose identity is handed out by a repository
//! when it is first persisted. Until then `id()` returns `None`.

use std::fmt::{Debug, Display};

use crate::error::DomainError;

/// Trait for records with repository-assigned identity.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The identifier type.
    type Id: Copy + Ord + Debug + Display + Send + Sync + 'static;

    /// Short name used in errors and logs.
    const KIND: &'static str;

    /// Returns the identifier, or `None` before the entity is persisted.
    fn id(&self) -> Option<Self::Id>;

    /// Assigns the identifier. Identity is set exactly once.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentityAlreadyAssigned` if the entity already
    /// has an identifier.
    fn assign_id(&mut self, id: Self::Id) -> Result<(), DomainError>;
}
