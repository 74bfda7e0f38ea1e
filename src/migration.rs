//! Apply the author table DDL. Idempotent: safe to run on every start.

use crate::error::AppError;
use crate::sql::{qualified_table, quoted, AUTHOR_TABLE};
use sqlx::PgPool;

fn author_table_ddl(schema: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" SERIAL PRIMARY KEY,
            "first_name" VARCHAR NOT NULL,
            "last_name" VARCHAR NOT NULL,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT "author_updated_after_created" CHECK ("updated_at" >= "created_at")
        )
        "#,
        qualified_table(schema, AUTHOR_TABLE)
    )
}

/// CREATE SCHEMA and CREATE TABLE, both IF NOT EXISTS.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let create_schema = format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema));
    tracing::debug!(sql = %create_schema, "migration");
    sqlx::query(&create_schema).execute(pool).await?;

    let ddl = author_table_ddl(schema);
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;

    tracing::info!(schema, "author table ready");
    Ok(())
}
