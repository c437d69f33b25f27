//! Commands for festival records.

use festival_core::command::Command;
use uuid::Uuid;

use super::record::{FestivalId, UserId};
use super::requests::{FestivalCreateRequest, FestivalUpdateRequest};

/// Command to create a festival record.
#[derive(Debug, Clone)]
pub struct CreateFestival {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user creating the record.
    pub creator_id: UserId,
    /// Resolved URL of the uploaded festival image.
    pub image_url: String,
    /// The creation payload.
    pub request: FestivalCreateRequest,
}

impl Command for CreateFestival {
    fn command_type(&self) -> &'static str {
        "festival.create"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to overwrite a festival record's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateFestival {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The record to update.
    pub festival_id: FestivalId,
    /// The replacement field values.
    pub request: FestivalUpdateRequest,
}

impl Command for UpdateFestival {
    fn command_type(&self) -> &'static str {
        "festival.update"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to delete a festival record.
#[derive(Debug, Clone)]
pub struct DeleteFestival {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The record to delete.
    pub festival_id: FestivalId,
}

impl Command for DeleteFestival {
    fn command_type(&self) -> &'static str {
        "festival.delete"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
