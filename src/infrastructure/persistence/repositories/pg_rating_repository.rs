use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RatingRepository, RepositoryError};
use crate::domain::{GigId, RaterType, Rating, RatingId, UserId};
use crate::infrastructure::persistence::sql_error::map_sqlx_error;

pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RatingRow {
    id: Uuid,
    gig_id: Uuid,
    rater_id: Uuid,
    rater_type: String,
    score: i16,
    tags: Vec<String>,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RatingRow> for Rating {
    type Error = RepositoryError;

    fn try_from(r: RatingRow) -> Result<Self, Self::Error> {
        let rater_type = r
            .rater_type
            .parse::<RaterType>()
            .map_err(RepositoryError::MalformedDocument)?;
        let score = u8::try_from(r.score)
            .map_err(|_| RepositoryError::MalformedDocument(format!("score {}", r.score)))?;

        Ok(Rating {
            id: RatingId::from_uuid(r.id),
            gig_id: GigId::from_uuid(r.gig_id),
            rater_id: UserId::from_uuid(r.rater_id),
            rater_type,
            score,
            tags: r.tags,
            comment: r.comment,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self, rating), fields(gig_id = %rating.gig_id, rater_id = %rating.rater_id))]
    async fn create(&self, rating: &Rating) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO ratings (id, gig_id, rater_id, rater_type, score, tags, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(rating.id.as_uuid())
        .bind(rating.gig_id.as_uuid())
        .bind(rating.rater_id.as_uuid())
        .bind(rating.rater_type.as_str())
        .bind(i16::from(rating.score))
        .bind(&rating.tags)
        .bind(&rating.comment)
        .bind(rating.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(gig_id = %gig_id))]
    async fn count_for_gig(&self, gig_id: GigId) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ratings WHERE gig_id = $1")
            .bind(gig_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self), fields(gig_id = %gig_id))]
    async fn list_for_gig(&self, gig_id: GigId) -> Result<Vec<Rating>, RepositoryError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, gig_id, rater_id, rater_type, score, tags, comment, created_at
            FROM ratings
            WHERE gig_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(gig_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Rating::try_from).collect()
    }
}
