//! Business rules for authors: existence checks and not-found translation.

use crate::entity::{Author, AuthorPatch, CreateAuthor};
use crate::error::AppError;
use crate::repository::AuthorRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        AuthorService { repository }
    }

    /// Instantiate, persist and return the stored record.
    pub async fn create(&self, input: CreateAuthor) -> Result<Author, AppError> {
        let draft = self.repository.create(input);
        let author = self.repository.save(draft).await?;
        tracing::info!(id = author.id, "author created");
        Ok(author)
    }

    pub async fn find_all(&self) -> Result<Vec<Author>, AppError> {
        self.repository.find().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Author, AppError> {
        self.repository
            .find_one_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Partial update. updated_at is refreshed even when the patch is empty.
    pub async fn update(&self, id: i32, patch: &AuthorPatch) -> Result<(), AppError> {
        let affected = self.repository.update(id, patch).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(id, "author updated");
        Ok(())
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(id, "author removed");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AuthorDraft;
    use crate::repository::InMemoryAuthorRepository;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn seeded_repository() -> Arc<InMemoryAuthorRepository> {
        let ts = Utc.with_ymd_and_hms(2023, 10, 8, 0, 0, 0).unwrap();
        let authors = (1..=5)
            .map(|id| Author {
                id,
                first_name: format!("Name{}", id),
                last_name: format!("LastName{}", id),
                created_at: ts,
                updated_at: ts,
            })
            .collect();
        Arc::new(InMemoryAuthorRepository::with_authors(authors))
    }

    fn input(first: &str, last: &str) -> CreateAuthor {
        CreateAuthor {
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    /// Counts lookups and delegates everything to the in-memory store.
    struct CountingRepository {
        inner: InMemoryAuthorRepository,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl AuthorRepository for CountingRepository {
        async fn find(&self) -> Result<Vec<Author>, AppError> {
            self.inner.find().await
        }

        async fn find_one_by_id(&self, id: i32) -> Result<Option<Author>, AppError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_one_by_id(id).await
        }

        async fn save(&self, draft: AuthorDraft) -> Result<Author, AppError> {
            self.inner.save(draft).await
        }

        async fn update(&self, id: i32, patch: &AuthorPatch) -> Result<u64, AppError> {
            self.inner.update(id, patch).await
        }

        async fn delete(&self, id: i32) -> Result<u64, AppError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn create_returns_fresh_retrievable_record() {
        let repo = seeded_repository();
        let service = AuthorService::new(repo.clone());
        let author = service.create(input("FirstName", "LastName")).await.unwrap();
        assert_eq!(author.id, 6);
        assert_eq!(author.first_name, "FirstName");
        assert_eq!(author.created_at, author.updated_at);
        assert_eq!(service.find_one(6).await.unwrap(), author);
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let service = AuthorService::new(Arc::new(InMemoryAuthorRepository::new()));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_returns_every_record() {
        let service = AuthorService::new(seeded_repository());
        assert_eq!(service.find_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn find_one_does_a_single_lookup() {
        let repo = Arc::new(CountingRepository {
            inner: InMemoryAuthorRepository::new(),
            lookups: AtomicUsize::new(0),
        });
        let service = AuthorService::new(repo.clone());
        assert!(matches!(service.find_one(1).await, Err(AppError::NotFound)));
        assert_eq!(repo.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_without_side_effects() {
        let repo = seeded_repository();
        let service = AuthorService::new(repo.clone());
        let before = repo.snapshot().await;

        assert!(matches!(service.find_one(7).await, Err(AppError::NotFound)));
        let patch = AuthorPatch {
            first_name: Some("X".into()),
            last_name: None,
        };
        assert!(matches!(service.update(7, &patch).await, Err(AppError::NotFound)));
        assert!(matches!(service.remove(7).await, Err(AppError::NotFound)));

        assert_eq!(repo.snapshot().await, before);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_field_and_bumps_updated_at() {
        let service = AuthorService::new(seeded_repository());
        let before = service.find_one(1).await.unwrap();
        let patch = AuthorPatch {
            first_name: Some("EditedFirstName".into()),
            last_name: None,
        };
        service.update(1, &patch).await.unwrap();
        let after = service.find_one(1).await.unwrap();

        assert_eq!(after.first_name, "EditedFirstName");
        assert_eq!(after.last_name, before.last_name);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_still_bumps_updated_at() {
        let service = AuthorService::new(seeded_repository());
        let before = service.find_one(2).await.unwrap();
        service.update(2, &AuthorPatch::default()).await.unwrap();
        let after = service.find_one(2).await.unwrap();
        assert_eq!(after.first_name, before.first_name);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn remove_is_terminal() {
        let service = AuthorService::new(seeded_repository());
        service.remove(3).await.unwrap();
        assert!(matches!(service.find_one(3).await, Err(AppError::NotFound)));
        assert!(matches!(service.remove(3).await, Err(AppError::NotFound)));
        assert_eq!(service.find_all().await.unwrap().len(), 4);
    }
}
