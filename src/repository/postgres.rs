//! PostgreSQL-backed author store. One statement per call.

use crate::entity::{Author, AuthorDraft, AuthorPatch};
use crate::error::AppError;
use crate::repository::AuthorRepository;
use crate::sql::{self, to_arguments, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
    schema: String,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgAuthorRepository {
            pool,
            schema: schema.into(),
        }
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<Author>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = sqlx::query_as_with::<_, Author, _>(&q.sql, to_arguments(&q.params)?)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Author>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = sqlx::query_as_with::<_, Author, _>(&q.sql, to_arguments(&q.params)?)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = sqlx::query_with(&q.sql, to_arguments(&q.params)?)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn find(&self) -> Result<Vec<Author>, AppError> {
        self.fetch_many(&sql::select_all(&self.schema)).await
    }

    async fn find_one_by_id(&self, id: i32) -> Result<Option<Author>, AppError> {
        self.fetch_optional(&sql::select_by_id(&self.schema, id)).await
    }

    async fn save(&self, draft: AuthorDraft) -> Result<Author, AppError> {
        self.fetch_optional(&sql::insert(&self.schema, &draft))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn update(&self, id: i32, patch: &AuthorPatch) -> Result<u64, AppError> {
        self.execute(&sql::update(&self.schema, id, patch)).await
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        self.execute(&sql::delete(&self.schema, id)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
