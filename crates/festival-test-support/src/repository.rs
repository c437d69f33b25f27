//! Test repositories: `EntityRepository` implementations for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use festival_core::entity::Entity;
use festival_core::error::DomainError;
use festival_core::repository::EntityRepository;

/// An in-memory repository that hands out sequential identifiers starting at
/// 1, the way a database identity column does.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    state: Mutex<State<E>>,
}

#[derive(Debug)]
struct State<E: Entity> {
    next_id: i64,
    entities: BTreeMap<E::Id, E>,
}

impl<E: Entity> InMemoryRepository<E>
where
    E::Id: From<i64>,
{
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                entities: BTreeMap::new(),
            }),
        }
    }

    /// Returns a snapshot of all stored entities, ordered by identifier.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stored(&self) -> Vec<E> {
        self.state
            .lock()
            .unwrap()
            .entities
            .values()
            .cloned()
            .collect()
    }
}

impl<E: Entity> Default for InMemoryRepository<E>
where
    E::Id: From<i64>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E>
where
    E::Id: From<i64>,
{
    async fn create(&self, mut entity: E) -> Result<E, DomainError> {
        let mut state = self.state.lock().unwrap();
        let id = <E::Id as From<i64>>::from(state.next_id);
        entity.assign_id(id)?;
        state.next_id += 1;
        state.entities.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &E) -> Result<(), DomainError> {
        let id = entity
            .id()
            .ok_or_else(|| DomainError::Validation(format!("{} has no identifier", E::KIND)))?;
        let mut state = self.state.lock().unwrap();
        match state.entities.get_mut(&id) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(())
            }
            None => Err(DomainError::not_found(E::KIND, id)),
        }
    }

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, DomainError> {
        Ok(self.state.lock().unwrap().entities.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.stored())
    }

    async fn delete(&self, id: E::Id) -> Result<(), DomainError> {
        self.state
            .lock()
            .unwrap()
            .entities
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for FailingRepository {
    async fn create(&self, _entity: E) -> Result<E, DomainError> {
        Err(connection_refused())
    }

    async fn update(&self, _entity: &E) -> Result<(), DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: E::Id) -> Result<Option<E>, DomainError> {
        Err(connection_refused())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: E::Id) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}
