//! The festival record entity.

use std::fmt;

use chrono::NaiveDate;
use festival_core::entity::Entity;
use festival_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::requests::{FestivalCreateRequest, FestivalUpdateRequest};

/// Storage-assigned identifier of a festival record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FestivalId(i64);

impl FestivalId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for FestivalId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FestivalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of the user who created a festival record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One festival announcement.
///
/// Fields are private: a record is only ever built by [`FestivalRecord::create`]
/// or [`FestivalRecord::restore`] and only ever changed by
/// [`FestivalRecord::update`]. The identifier and the owning user never change
/// once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalRecord {
    id: Option<FestivalId>,
    festival_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<String>,
    address: Option<String>,
    image: String,
    fee: String,
    user_id: UserId,
}

impl FestivalRecord {
    /// Builds a new, not yet persisted record from a creation request.
    ///
    /// `image_url` is the already-resolved location of the uploaded image.
    #[must_use]
    pub fn create(
        request: &FestivalCreateRequest,
        creator_id: UserId,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            festival_name: request.festival_name.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            description: request.description.clone(),
            address: request.address.clone(),
            image: image_url.into(),
            fee: request.fee.clone(),
            user_id: creator_id,
        }
    }

    /// Rebuilds a persisted record from its stored identity, owner and fields.
    #[must_use]
    pub fn restore(id: FestivalId, user_id: UserId, fields: FestivalUpdateRequest) -> Self {
        let FestivalUpdateRequest {
            festival_name,
            start_date,
            end_date,
            description,
            address,
            image,
            fee,
        } = fields;
        Self {
            id: Some(id),
            festival_name,
            start_date,
            end_date,
            description,
            address,
            image,
            fee,
            user_id,
        }
    }

    /// Overwrites every mutable field with the request's values.
    ///
    /// This is a full replace, not a patch. `id` and `user_id` are untouched.
    pub fn update(&mut self, request: &FestivalUpdateRequest) {
        self.festival_name.clone_from(&request.festival_name);
        self.start_date = request.start_date;
        self.end_date = request.end_date;
        self.description.clone_from(&request.description);
        self.address.clone_from(&request.address);
        self.image.clone_from(&request.image);
        self.fee.clone_from(&request.fee);
    }

    /// Storage-assigned identifier, `None` until persisted.
    #[must_use]
    pub fn id(&self) -> Option<FestivalId> {
        self.id
    }

    /// Festival name.
    #[must_use]
    pub fn festival_name(&self) -> &str {
        &self.festival_name
    }

    /// First day of the festival.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the festival.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Venue address.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Image URL.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Entry fee.
    #[must_use]
    pub fn fee(&self) -> &str {
        &self.fee
    }

    /// The user who created the record.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl Entity for FestivalRecord {
    type Id = FestivalId;

    const KIND: &'static str = "festival";

    fn id(&self) -> Option<FestivalId> {
        self.id
    }

    fn assign_id(&mut self, id: FestivalId) -> Result<(), DomainError> {
        if let Some(existing) = self.id {
            return Err(DomainError::IdentityAlreadyAssigned {
                kind: Self::KIND,
                id: existing.to_string(),
            });
        }
        self.id = Some(id);
        Ok(())
    }
}
