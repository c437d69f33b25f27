//! Entity repository abstraction.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainError;

/// Repository trait for persisting entities of type `E`.
///
/// Implementations own identity assignment: `create` accepts an entity
/// without an identifier and returns it with one.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Persist a new entity and return it with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentityAlreadyAssigned` if `entity` already has
    /// an identifier, or `DomainError::Infrastructure` on storage failure.
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Replace the stored state of an existing entity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `entity` has no identifier,
    /// `DomainError::NotFound` if nothing is stored under it, or
    /// `DomainError::Infrastructure` on storage failure.
    async fn update(&self, entity: &E) -> Result<(), DomainError>;

    /// Load an entity by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on storage failure.
    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, DomainError>;

    /// Load every entity, ordered by identifier ascending.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on storage failure.
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Remove an entity by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if nothing is stored under `id`, or
    /// `DomainError::Infrastructure` on storage failure.
    async fn delete(&self, id: E::Id) -> Result<(), DomainError>;
}
