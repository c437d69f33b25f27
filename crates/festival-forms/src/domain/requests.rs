//! Request payloads accepted by festival records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload used to create a new festival record.
///
/// The image is not part of the payload; it is resolved by the upload
/// service and passed to `FestivalRecord::create` separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalCreateRequest {
    /// Festival name.
    pub festival_name: String,
    /// First day of the festival.
    pub start_date: NaiveDate,
    /// Last day of the festival.
    pub end_date: NaiveDate,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Venue address.
    #[serde(default)]
    pub address: Option<String>,
    /// Entry fee, free-form (e.g. "free", "10").
    pub fee: String,
}

/// Payload used to overwrite every mutable field of a festival record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalUpdateRequest {
    /// Festival name.
    pub festival_name: String,
    /// First day of the festival.
    pub start_date: NaiveDate,
    /// Last day of the festival.
    pub end_date: NaiveDate,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Venue address.
    #[serde(default)]
    pub address: Option<String>,
    /// Image URL.
    pub image: String,
    /// Entry fee, free-form.
    pub fee: String,
}
