use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;

use crate::application::ports::{GigRepository, RepositoryError};
use crate::domain::{Gig, GigId, GigRevision, GigStatus, UserId};
use crate::infrastructure::persistence::sql_error::map_sqlx_error;

/// Gigs are stored as JSONB documents; `status` and `client_id` are lifted
/// into columns for filtering. Conditional writes match both the status
/// column and the document version.
pub struct PgGigRepository {
    pool: PgPool,
}

impl PgGigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn status_names(statuses: &[GigStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.as_str().to_string()).collect()
}

#[async_trait]
impl GigRepository for PgGigRepository {
    #[instrument(skip(self, gig), fields(gig_id = %gig.id))]
    async fn create(&self, gig: &Gig) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO gigs (id, client_id, status, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(gig.id.as_uuid())
        .bind(gig.client_id.as_uuid())
        .bind(gig.status.as_str())
        .bind(Json(gig))
        .bind(gig.created_at)
        .bind(gig.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(gig_id = %id))]
    async fn get_by_id(&self, id: GigId) -> Result<Option<Gig>, RepositoryError> {
        let document = sqlx::query_scalar::<_, Json<Gig>>(
            r#"
            SELECT document
            FROM gigs
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(document.map(|Json(gig)| gig))
    }

    #[instrument(
        skip(self, gig),
        fields(
            gig_id = %gig.id,
            expected = %expected.status,
            expected_version = expected.version,
            status = %gig.status
        )
    )]
    async fn update_if_unchanged(
        &self,
        gig: &Gig,
        expected: GigRevision,
    ) -> Result<bool, RepositoryError> {
        let expected_version = i64::try_from(expected.version).map_err(|_| {
            RepositoryError::QueryFailed(format!(
                "gig {} version {} exceeds storage range",
                gig.id, expected.version
            ))
        })?;

        let result = sqlx::query(
            r#"
            UPDATE gigs
            SET status = $1, document = $2, updated_at = $3
            WHERE id = $4
              AND status = $5
              AND COALESCE((document ->> 'version')::BIGINT, 0) = $6
            "#,
        )
        .bind(gig.status.as_str())
        .bind(Json(gig))
        .bind(gig.updated_at)
        .bind(gig.id.as_uuid())
        .bind(expected.status.as_str())
        .bind(expected_version)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM gigs WHERE id = $1)")
                .bind(gig.id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if exists {
            Ok(false)
        } else {
            Err(RepositoryError::NotFound(format!("gig {}", gig.id)))
        }
    }

    #[instrument(skip(self))]
    async fn list_by_status(&self, statuses: &[GigStatus]) -> Result<Vec<Gig>, RepositoryError> {
        let documents = sqlx::query_scalar::<_, Json<Gig>>(
            r#"
            SELECT document
            FROM gigs
            WHERE status = ANY($1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status_names(statuses))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(documents.into_iter().map(|Json(gig)| gig).collect())
    }

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn list_by_client(&self, client_id: UserId) -> Result<Vec<Gig>, RepositoryError> {
        let documents = sqlx::query_scalar::<_, Json<Gig>>(
            r#"
            SELECT document
            FROM gigs
            WHERE client_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(documents.into_iter().map(|Json(gig)| gig).collect())
    }

    #[instrument(skip(self), fields(worker_id = %worker_id))]
    async fn find_active_for_worker(
        &self,
        worker_id: UserId,
    ) -> Result<Option<Gig>, RepositoryError> {
        let active = [GigStatus::OnRoute, GigStatus::Arrived, GigStatus::InProgress];

        let document = sqlx::query_scalar::<_, Json<Gig>>(
            r#"
            SELECT document
            FROM gigs
            WHERE status = ANY($1)
              AND (
                document -> 'staffing' ->> 'assigned_worker_id' = $2
                OR document -> 'staffing' -> 'assigned_workers' @> jsonb_build_array($2::text)
              )
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .bind(status_names(&active))
        .bind(worker_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(document.map(|Json(gig)| gig))
    }
}
