//! In-memory author store. Ids come from a monotonic counter and are never reused.

use crate::entity::{Author, AuthorDraft, AuthorPatch};
use crate::error::AppError;
use crate::repository::AuthorRepository;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    authors: Vec<Author>,
    last_id: i32,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records; new ids continue after the highest seeded id.
    pub fn with_authors(authors: Vec<Author>) -> Self {
        let last_id = authors.iter().map(|a| a.id).max().unwrap_or(0);
        InMemoryAuthorRepository {
            inner: Mutex::new(Inner { authors, last_id }),
        }
    }

    /// Copy of the current contents.
    pub async fn snapshot(&self) -> Vec<Author> {
        self.inner.lock().await.authors.clone()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.snapshot().await)
    }

    async fn find_one_by_id(&self, id: i32) -> Result<Option<Author>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn save(&self, draft: AuthorDraft) -> Result<Author, AppError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let now = Utc::now();
        let author = Author {
            id: inner.last_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            created_at: now,
            updated_at: now,
        };
        inner.authors.push(author.clone());
        Ok(author)
    }

    async fn update(&self, id: i32, patch: &AuthorPatch) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().await;
        let Some(author) = inner.authors.iter_mut().find(|a| a.id == id) else {
            return Ok(0);
        };
        patch.apply_to(author);
        // Strictly later than the previous value even if the clock has not moved.
        author.updated_at = Utc::now().max(author.updated_at + Duration::milliseconds(1));
        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().await;
        let before = inner.authors.len();
        inner.authors.retain(|a| a.id != id);
        Ok((before - inner.authors.len()) as u64)
    }
}
