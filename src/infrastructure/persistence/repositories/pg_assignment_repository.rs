use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{AssignmentRepository, RepositoryError};
use crate::domain::{Assignment, AssignmentId, GeoPoint, GigId, UserId};
use crate::infrastructure::persistence::sql_error::map_sqlx_error;

pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: Uuid,
    gig_id: Uuid,
    worker_id: Uuid,
    distance_miles: f64,
    eta_minutes: i32,
    current_lat: f64,
    current_lng: f64,
    accepted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AssignmentRow> for Assignment {
    fn from(r: AssignmentRow) -> Self {
        Assignment {
            id: AssignmentId::from_uuid(r.id),
            gig_id: GigId::from_uuid(r.gig_id),
            worker_id: UserId::from_uuid(r.worker_id),
            distance_miles: r.distance_miles,
            eta_minutes: r.eta_minutes.max(0) as u32,
            current_location: GeoPoint::new(r.current_lat, r.current_lng),
            accepted_at: r.accepted_at,
            updated_at: r.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "SELECT id, gig_id, worker_id, distance_miles, eta_minutes, \
     current_lat, current_lng, accepted_at, updated_at FROM assignments";

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self, assignment), fields(gig_id = %assignment.gig_id, worker_id = %assignment.worker_id))]
    async fn create(&self, assignment: &Assignment) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO assignments
                (id, gig_id, worker_id, distance_miles, eta_minutes, current_lat, current_lng, accepted_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(assignment.id.as_uuid())
        .bind(assignment.gig_id.as_uuid())
        .bind(assignment.worker_id.as_uuid())
        .bind(assignment.distance_miles)
        .bind(assignment.eta_minutes as i32)
        .bind(assignment.current_location.lat)
        .bind(assignment.current_location.lng)
        .bind(assignment.accepted_at)
        .bind(assignment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(gig_id = %gig_id, worker_id = %worker_id))]
    async fn get_by_gig_and_worker(
        &self,
        gig_id: GigId,
        worker_id: UserId,
    ) -> Result<Option<Assignment>, RepositoryError> {
        let row = sqlx::query_as::<_, AssignmentRow>(&format!(
            "{} WHERE gig_id = $1 AND worker_id = $2",
            SELECT_COLUMNS
        ))
        .bind(gig_id.as_uuid())
        .bind(worker_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Assignment::from))
    }

    #[instrument(skip(self), fields(gig_id = %gig_id))]
    async fn list_by_gig(&self, gig_id: GigId) -> Result<Vec<Assignment>, RepositoryError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(&format!(
            "{} WHERE gig_id = $1 ORDER BY accepted_at ASC",
            SELECT_COLUMNS
        ))
        .bind(gig_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    #[instrument(skip(self, assignment), fields(assignment_id = %assignment.id))]
    async fn update(&self, assignment: &Assignment) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE assignments
            SET distance_miles = $1, eta_minutes = $2, current_lat = $3, current_lng = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(assignment.distance_miles)
        .bind(assignment.eta_minutes as i32)
        .bind(assignment.current_location.lat)
        .bind(assignment.current_location.lng)
        .bind(assignment.updated_at)
        .bind(assignment.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "assignment {}",
                assignment.id
            )));
        }
        Ok(())
    }
}
