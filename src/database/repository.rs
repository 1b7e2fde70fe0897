use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

use crate::database::error::StoreError;
use crate::database::query_builder::QueryBuilder;
use crate::database::record::{Document, Record, RecordId};

/// Persistence gateway for one collection.
///
/// By-id operations take the raw client identifier and fail with
/// [`StoreError::InvalidId`] before touching the store when it is malformed.
#[async_trait]
pub trait Repository<D: Document>: Send + Sync {
    /// All records in insertion order
    async fn find_all(&self) -> Result<Vec<Record<D>>, StoreError>;

    async fn find_one(&self, field: D::Field, value: &str) -> Result<Option<Record<D>>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError>;

    /// Fails with [`StoreError::Duplicate`] when the unique key is taken
    async fn insert(&self, doc: D) -> Result<Record<D>, StoreError>;

    /// Replace every editable field. `None` when no record has this id.
    async fn update_by_id(&self, id: &str, doc: D) -> Result<Option<Record<D>>, StoreError>;

    /// Returns the removed record, `None` when no record has this id.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError>;

    /// Round-trip to the store
    async fn ping(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed repository, one table per collection
pub struct PgRepository<D> {
    pool: PgPool,
    _phantom: PhantomData<fn() -> D>,
}

impl<D: Document> PgRepository<D> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: PhantomData,
        }
    }

    /// Create the backing table and its unique constraint if missing
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(&QueryBuilder::<D>::create_table())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn classify(err: sqlx::Error) -> StoreError {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate {
                    collection: D::COLLECTION,
                    field: D::column(D::UNIQUE).to_string(),
                };
            }
        }
        StoreError::from(err)
    }
}

#[async_trait]
impl<D: Document> Repository<D> for PgRepository<D> {
    async fn find_all(&self) -> Result<Vec<Record<D>>, StoreError> {
        let sql = QueryBuilder::<D>::select_all();
        sqlx::query_as::<_, Record<D>>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::classify)
    }

    async fn find_one(&self, field: D::Field, value: &str) -> Result<Option<Record<D>>, StoreError> {
        let sql = QueryBuilder::<D>::select_where(field);
        sqlx::query_as::<_, Record<D>>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::classify)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let sql = QueryBuilder::<D>::select_by_id();
        sqlx::query_as::<_, Record<D>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::classify)
    }

    async fn insert(&self, doc: D) -> Result<Record<D>, StoreError> {
        let sql = QueryBuilder::<D>::insert();
        let mut query = sqlx::query_as::<_, Record<D>>(&sql).bind(RecordId::generate());
        for field in D::FIELDS {
            query = query.bind(doc.get(*field));
        }
        let record = query.fetch_one(&self.pool).await.map_err(Self::classify)?;

        tracing::debug!("Inserted {} {}", D::COLLECTION, record.id);
        Ok(record)
    }

    async fn update_by_id(&self, id: &str, doc: D) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let sql = QueryBuilder::<D>::update_by_id();
        let mut query = sqlx::query_as::<_, Record<D>>(&sql).bind(id);
        for field in D::FIELDS {
            query = query.bind(doc.get(*field));
        }
        query.fetch_optional(&self.pool).await.map_err(Self::classify)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let sql = QueryBuilder::<D>::delete_by_id();
        sqlx::query_as::<_, Record<D>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::classify)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
