use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Content, ContentPatch, NewContent};

/// Errors from content repositories
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate id: {0}")]
    Conflict(Uuid),
}

/// Persistence boundary for content records
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create(&self, new: NewContent) -> Result<Content, RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Content>, RepositoryError>;

    /// Returns `None` when no record has this id
    async fn update(&self, id: Uuid, patch: ContentPatch) -> Result<Option<Content>, RepositoryError>;

    /// Returns whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// All records, oldest first
    async fn list(&self) -> Result<Vec<Content>, RepositoryError>;
}

/// Process-local repository
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    records: RwLock<HashMap<Uuid, Content>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn create(&self, new: NewContent) -> Result<Content, RepositoryError> {
        let content = new.into_content();
        let mut records = self.records.write().await;
        if records.contains_key(&content.id) {
            return Err(RepositoryError::Conflict(content.id));
        }
        records.insert(content.id, content.clone());
        Ok(content)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Content>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: ContentPatch) -> Result<Option<Content>, RepositoryError> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|content| {
            patch.apply(content);
            content.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Content>, RepositoryError> {
        let mut all: Vec<Content> = self.records.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}
