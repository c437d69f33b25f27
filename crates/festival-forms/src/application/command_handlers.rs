//! Command handlers for festival records.
//!
//! Each handler loads what it needs from the repository, applies the record
//! operation and persists the result.

use festival_core::command::Command;
use festival_core::entity::Entity;
use festival_core::error::DomainError;
use festival_core::repository::EntityRepository;
use tracing::{info, instrument};

use crate::domain::commands::{CreateFestival, DeleteFestival, UpdateFestival};
use crate::domain::record::{FestivalId, FestivalRecord};

/// Loads a festival record, mapping absence to `DomainError::NotFound`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no record exists for `festival_id`, or
/// any error raised by the repository.
pub(crate) async fn load_festival(
    festival_id: FestivalId,
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<FestivalRecord, DomainError> {
    repo.find_by_id(festival_id)
        .await?
        .ok_or_else(|| DomainError::not_found(FestivalRecord::KIND, festival_id))
}

/// Handles the `CreateFestival` command: builds a record from the request and
/// persists it. The repository assigns the identifier.
///
/// # Errors
///
/// Returns `DomainError` if persisting the record fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_create_festival(
    command: &CreateFestival,
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<FestivalRecord, DomainError> {
    let record = FestivalRecord::create(
        &command.request,
        command.creator_id,
        command.image_url.as_str(),
    );

    let stored = repo.create(record).await?;

    info!(
        command_type = command.command_type(),
        festival_id = ?stored.id(),
        creator_id = %stored.user_id(),
        "festival created"
    );
    Ok(stored)
}

/// Handles the `UpdateFestival` command: loads the record, overwrites its
/// mutable fields and saves it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the record does not exist, or
/// `DomainError` if loading or saving fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, festival_id = %command.festival_id))]
pub async fn handle_update_festival(
    command: &UpdateFestival,
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<FestivalRecord, DomainError> {
    let mut record = load_festival(command.festival_id, repo).await?;

    record.update(&command.request);
    repo.update(&record).await?;

    info!(command_type = command.command_type(), "festival updated");
    Ok(record)
}

/// Handles the `DeleteFestival` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the record does not exist, or
/// `DomainError` if the repository fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, festival_id = %command.festival_id))]
pub async fn handle_delete_festival(
    command: &DeleteFestival,
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<(), DomainError> {
    repo.delete(command.festival_id).await?;

    info!(command_type = command.command_type(), "festival deleted");
    Ok(())
}
