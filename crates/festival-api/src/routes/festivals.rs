//! Routes for festival records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use festival_forms::application::command_handlers;
use festival_forms::application::query_handlers::{self, FestivalView};
use festival_forms::domain::commands;
use festival_forms::domain::record::FestivalId;
use festival_forms::domain::requests::{FestivalCreateRequest, FestivalUpdateRequest};

use crate::error::ApiError;
use crate::extract::RequestUser;
use crate::state::AppState;

/// Request body for POST /.
///
/// `image_url` is the location the upload service resolved for the
/// festival image.
#[derive(Debug, Deserialize)]
pub struct CreateFestivalBody {
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
    /// Entry fee.
    pub fee: String,
    /// Resolved image URL.
    pub image_url: String,
}

impl CreateFestivalBody {
    fn into_parts(self) -> (FestivalCreateRequest, String) {
        let request = FestivalCreateRequest {
            festival_name: self.festival_name,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            address: self.address,
            fee: self.fee,
        };
        (request, self.image_url)
    }
}

/// POST /
#[instrument(skip_all, fields(creator_id = %user))]
async fn create_festival(
    State(state): State<AppState>,
    RequestUser(user): RequestUser,
    Json(body): Json<CreateFestivalBody>,
) -> Result<(StatusCode, Json<FestivalView>), ApiError> {
    let (request, image_url) = body.into_parts();
    let command = commands::CreateFestival {
        correlation_id: Uuid::new_v4(),
        creator_id: user,
        image_url,
        request,
    };

    info!(correlation_id = %command.correlation_id, "handling create_festival command");

    let record =
        command_handlers::handle_create_festival(&command, &*state.festival_repository).await?;

    Ok((StatusCode::CREATED, Json(FestivalView::from(&record))))
}

/// GET /
async fn list_festivals(
    State(state): State<AppState>,
) -> Result<Json<Vec<FestivalView>>, ApiError> {
    let views = query_handlers::list_festivals(&*state.festival_repository).await?;
    Ok(Json(views))
}

/// GET /{id}
async fn get_festival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FestivalView>, ApiError> {
    let view =
        query_handlers::get_festival_by_id(FestivalId::new(id), &*state.festival_repository)
            .await?;
    Ok(Json(view))
}

/// PUT /{id}
#[instrument(skip(state, request))]
async fn update_festival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<FestivalUpdateRequest>,
) -> Result<Json<FestivalView>, ApiError> {
    let command = commands::UpdateFestival {
        correlation_id: Uuid::new_v4(),
        festival_id: FestivalId::new(id),
        request,
    };

    info!(correlation_id = %command.correlation_id, "handling update_festival command");

    let record =
        command_handlers::handle_update_festival(&command, &*state.festival_repository).await?;

    Ok(Json(FestivalView::from(&record)))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_festival(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteFestival {
        correlation_id: Uuid::new_v4(),
        festival_id: FestivalId::new(id),
    };

    info!(correlation_id = %command.correlation_id, "handling delete_festival command");

    command_handlers::handle_delete_festival(&command, &*state.festival_repository).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for festival records.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_festivals).post(create_festival))
        .route(
            "/{id}",
            get(get_festival).put(update_festival).delete(delete_festival),
        )
}
