//! Persistence gateway for authors. The service depends on this trait only, so
//! the PostgreSQL and in-memory stores are interchangeable.

mod memory;
mod postgres;

pub use memory::InMemoryAuthorRepository;
pub use postgres::PgAuthorRepository;

use crate::entity::{Author, AuthorDraft, AuthorPatch, CreateAuthor};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    /// Every record, in whatever order the store yields them.
    async fn find(&self) -> Result<Vec<Author>, AppError>;

    async fn find_one_by_id(&self, id: i32) -> Result<Option<Author>, AppError>;

    /// Instantiate an unsaved record. No I/O.
    fn create(&self, input: CreateAuthor) -> AuthorDraft {
        AuthorDraft::from(input)
    }

    /// Insert the draft; the store assigns id, created_at and updated_at.
    async fn save(&self, draft: AuthorDraft) -> Result<Author, AppError>;

    /// Apply the patch and refresh updated_at. Returns the number of affected records.
    async fn update(&self, id: i32, patch: &AuthorPatch) -> Result<u64, AppError>;

    /// Returns the number of affected records.
    async fn delete(&self, id: i32) -> Result<u64, AppError>;

    /// Reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
