//! `PostgreSQL` implementation of `EntityRepository<FestivalRecord>`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, error};

use festival_core::entity::Entity;
use festival_core::error::DomainError;
use festival_core::repository::EntityRepository;
use festival_forms::domain::record::{FestivalId, FestivalRecord, UserId};
use festival_forms::domain::requests::FestivalUpdateRequest;

const SELECT_COLUMNS: &str = "festival_form_id, festival_name, start_date, end_date, \
     description, address, image, fee, user_id";

/// Row shape of the `festival_forms` table.
#[derive(Debug, sqlx::FromRow)]
struct FestivalRow {
    festival_form_id: i64,
    festival_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<String>,
    address: Option<String>,
    image: String,
    fee: String,
    user_id: i64,
}

impl From<FestivalRow> for FestivalRecord {
    fn from(row: FestivalRow) -> Self {
        FestivalRecord::restore(
            FestivalId::new(row.festival_form_id),
            UserId::new(row.user_id),
            FestivalUpdateRequest {
                festival_name: row.festival_name,
                start_date: row.start_date,
                end_date: row.end_date,
                description: row.description,
                address: row.address,
                image: row.image,
                fee: row.fee,
            },
        )
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    error!(error = %err, "festival store query failed");
    DomainError::Infrastructure(err.to_string())
}

/// PostgreSQL-backed festival repository.
#[derive(Debug, Clone)]
pub struct PgFestivalRepository {
    pool: PgPool,
}

impl PgFestivalRepository {
    /// Creates a new `PgFestivalRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<FestivalRecord> for PgFestivalRepository {
    async fn create(&self, mut entity: FestivalRecord) -> Result<FestivalRecord, DomainError> {
        if let Some(existing) = entity.id() {
            return Err(DomainError::IdentityAlreadyAssigned {
                kind: FestivalRecord::KIND,
                id: existing.to_string(),
            });
        }

        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO festival_forms
                (festival_name, start_date, end_date, description, address, image, fee, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING festival_form_id
            ",
        )
        .bind(entity.festival_name())
        .bind(entity.start_date())
        .bind(entity.end_date())
        .bind(entity.description())
        .bind(entity.address())
        .bind(entity.image())
        .bind(entity.fee())
        .bind(entity.user_id().get())
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure)?;

        entity.assign_id(FestivalId::new(id))?;
        debug!(festival_id = id, "festival row inserted");
        Ok(entity)
    }

    async fn update(&self, entity: &FestivalRecord) -> Result<(), DomainError> {
        let id = entity.id().ok_or_else(|| {
            DomainError::Validation(format!("{} has no identifier", FestivalRecord::KIND))
        })?;

        let result = sqlx::query(
            r"
            UPDATE festival_forms
            SET festival_name = $2,
                start_date    = $3,
                end_date      = $4,
                description   = $5,
                address       = $6,
                image         = $7,
                fee           = $8
            WHERE festival_form_id = $1
            ",
        )
        .bind(id.get())
        .bind(entity.festival_name())
        .bind(entity.start_date())
        .bind(entity.end_date())
        .bind(entity.description())
        .bind(entity.address())
        .bind(entity.image())
        .bind(entity.fee())
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(FestivalRecord::KIND, id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: FestivalId) -> Result<Option<FestivalRecord>, DomainError> {
        let row: Option<FestivalRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM festival_forms WHERE festival_form_id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(FestivalRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<FestivalRecord>, DomainError> {
        let rows: Vec<FestivalRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM festival_forms ORDER BY festival_form_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(rows.into_iter().map(FestivalRecord::from).collect())
    }

    async fn delete(&self, id: FestivalId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM festival_forms WHERE festival_form_id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(FestivalRecord::KIND, id));
        }
        Ok(())
    }
}
