//! List service - Handles record-related business logic.
//!
//! SOLID (SRP): Handles list record use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewRecord, Record, RecordId, RecordPatch};
use crate::errors::{AppResult, OptionExt};
use crate::infra::ListRepository;
use crate::types::{PageRequest, Paginated};

/// List service trait for dependency injection.
///
/// Soft-deleted records are invisible to every operation.
#[async_trait]
pub trait ListService: Send + Sync {
    /// Get active record by ID
    async fn get_record(&self, id: RecordId) -> AppResult<Record>;

    /// Create a new record
    async fn create_record(&self, record: NewRecord) -> AppResult<Record>;

    /// Merge `patch` onto a previously fetched record and persist it
    async fn update_record(&self, current: Record, patch: RecordPatch) -> AppResult<Record>;

    /// Soft delete an active record
    async fn delete_record(&self, id: RecordId) -> AppResult<()>;

    /// Find active records whose name matches exactly
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Record>>;

    /// List active records with the total active row count
    async fn list_records(&self, page: PageRequest) -> AppResult<Paginated<Record>>;
}

/// Concrete implementation of ListService using repository.
pub struct ListManager {
    repo: Arc<dyn ListRepository>,
}

impl ListManager {
    /// Create new list service instance with repository
    pub fn new(repo: Arc<dyn ListRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ListService for ListManager {
    async fn get_record(&self, id: RecordId) -> AppResult<Record> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_record(&self, record: NewRecord) -> AppResult<Record> {
        let created = self.repo.create(record).await?;
        tracing::info!(id = created.id, "record created");
        Ok(created)
    }

    async fn update_record(&self, mut current: Record, patch: RecordPatch) -> AppResult<Record> {
        if !current.apply(patch) {
            tracing::debug!(id = current.id, "update carries no changes");
        }

        // Lookup and write are separate statements; a record deleted in between
        // makes this a no-op.
        let rows = self.repo.save(current.clone()).await?;
        if rows == 0 {
            tracing::debug!(id = current.id, "record vanished before update");
        } else {
            tracing::info!(id = current.id, "record updated");
        }

        Ok(current)
    }

    async fn delete_record(&self, id: RecordId) -> AppResult<()> {
        self.get_record(id).await?;

        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            tracing::debug!(id, "record vanished before delete");
        } else {
            tracing::info!(id, "record deleted");
        }

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Record>> {
        self.repo.find_by_name(name).await
    }

    async fn list_records(&self, page: PageRequest) -> AppResult<Paginated<Record>> {
        let total = self.repo.count().await?;
        let list = self.repo.list(page).await?;
        Ok(Paginated::new(list, total, page))
    }
}
