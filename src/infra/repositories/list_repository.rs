//! List repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};

use super::entities::list::{self, ActiveModel, Entity as ListEntity};
use crate::domain::{NewRecord, Record, RecordId};
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// List repository trait for dependency injection.
///
/// Every query excludes soft-deleted records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Find active record by ID
    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<Record>>;

    /// Find active records with an exact name match, ordered by ID
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Record>>;

    /// List active records, ordered by ID, limited to the requested page
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Record>>;

    /// Count all active records
    async fn count(&self) -> AppResult<u64>;

    /// Insert a new record; the store assigns ID and timestamps
    async fn create(&self, record: NewRecord) -> AppResult<Record>;

    /// Write all business fields of an active record and refresh `updated_at`.
    ///
    /// Returns the number of rows affected.
    async fn save(&self, record: Record) -> AppResult<u64>;

    /// Soft delete an active record by ID (sets deleted_at timestamp).
    ///
    /// Returns the number of rows affected.
    async fn delete(&self, id: RecordId) -> AppResult<u64>;
}

/// Concrete implementation of ListRepository with soft delete
pub struct ListStore {
    db: DatabaseConnection,
}

impl ListStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active() -> Select<ListEntity> {
        ListEntity::find().filter(list::Column::DeletedAt.is_null())
    }
}

#[async_trait]
impl ListRepository for ListStore {
    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<Record>> {
        let result = Self::active()
            .filter(list::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Record::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Record>> {
        let models = Self::active()
            .filter(list::Column::Name.eq(name))
            .order_by_asc(list::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Record::from).collect())
    }

    async fn list(&self, page: PageRequest) -> AppResult<Vec<Record>> {
        let models = Self::active()
            .order_by_asc(list::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Record::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Self::active().count(&self.db).await.map_err(AppError::from)
    }

    async fn create(&self, record: NewRecord) -> AppResult<Record> {
        let now = Utc::now();
        let active_model = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            name: Set(record.name),
            state: Set(record.state),
            phone: Set(record.phone),
            email: Set(record.email),
            address: Set(record.address),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Record::from(model))
    }

    async fn save(&self, record: Record) -> AppResult<u64> {
        let result = ListEntity::update_many()
            .col_expr(list::Column::Name, Expr::value(record.name))
            .col_expr(list::Column::State, Expr::value(record.state))
            .col_expr(list::Column::Phone, Expr::value(record.phone))
            .col_expr(list::Column::Email, Expr::value(record.email))
            .col_expr(list::Column::Address, Expr::value(record.address))
            .col_expr(list::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(list::Column::Id.eq(record.id))
            .filter(list::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: RecordId) -> AppResult<u64> {
        let now = Utc::now();
        let result = ListEntity::update_many()
            .col_expr(list::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(list::Column::UpdatedAt, Expr::value(now))
            .filter(list::Column::Id.eq(id))
            .filter(list::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
