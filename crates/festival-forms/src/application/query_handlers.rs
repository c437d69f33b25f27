//! Query handlers for festival records.
//!
//! Queries load records from the repository and return read-only view DTOs.

use chrono::NaiveDate;
use festival_core::error::DomainError;
use festival_core::repository::EntityRepository;
use serde::Serialize;

use crate::application::command_handlers::load_festival;
use crate::domain::record::{FestivalId, FestivalRecord, UserId};

/// Read-only view of a festival record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalView {
    /// The festival identifier. Views are only built from persisted records.
    pub festival_id: Option<FestivalId>,
    /// The user who created the record.
    pub user_id: UserId,
    /// Festival name.
    pub festival_name: String,
    /// First day of the festival.
    pub start_date: NaiveDate,
    /// Last day of the festival.
    pub end_date: NaiveDate,
    /// Free-text description.
    pub description: Option<String>,
    /// Venue address.
    pub address: Option<String>,
    /// Image URL.
    pub image: String,
    /// Entry fee.
    pub fee: String,
}

impl From<&FestivalRecord> for FestivalView {
    fn from(record: &FestivalRecord) -> Self {
        Self {
            festival_id: record.id(),
            user_id: record.user_id(),
            festival_name: record.festival_name().to_owned(),
            start_date: record.start_date(),
            end_date: record.end_date(),
            description: record.description().map(str::to_owned),
            address: record.address().map(str::to_owned),
            image: record.image().to_owned(),
            fee: record.fee().to_owned(),
        }
    }
}

/// Retrieves a festival record by its identifier.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no record exists for the ID, or any
/// error raised by the repository.
pub async fn get_festival_by_id(
    festival_id: FestivalId,
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<FestivalView, DomainError> {
    let record = load_festival(festival_id, repo).await?;
    Ok(FestivalView::from(&record))
}

/// Lists every festival record, ordered by identifier.
///
/// # Errors
///
/// Returns any error raised by the repository.
pub async fn list_festivals(
    repo: &dyn EntityRepository<FestivalRecord>,
) -> Result<Vec<FestivalView>, DomainError> {
    let records = repo.find_all().await?;
    Ok(records.iter().map(FestivalView::from).collect())
}
