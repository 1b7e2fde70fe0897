use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::error::StoreError;
use crate::database::record::{Document, Record, RecordId};
use crate::database::repository::Repository;

/// In-process repository with the same unique-key and ordering rules as the
/// PostgreSQL store. Records live in insertion order.
pub struct MemoryRepository<D> {
    records: RwLock<Vec<Record<D>>>,
}

impl<D: Document> Default for MemoryRepository<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> MemoryRepository<D> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    fn duplicate() -> StoreError {
        StoreError::Duplicate {
            collection: D::COLLECTION,
            field: D::column(D::UNIQUE).to_string(),
        }
    }
}

#[async_trait]
impl<D: Document> Repository<D> for MemoryRepository<D> {
    async fn find_all(&self) -> Result<Vec<Record<D>>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_one(&self, field: D::Field, value: &str) -> Result<Option<Record<D>>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.doc.get(field) == value).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, doc: D) -> Result<Record<D>, StoreError> {
        let mut records = self.records.write().await;
        let key = doc.get(D::UNIQUE);
        if records.iter().any(|r| r.doc.get(D::UNIQUE) == key) {
            return Err(Self::duplicate());
        }

        let record = Record::new(RecordId::generate(), doc, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: &str, doc: D) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let mut records = self.records.write().await;

        let key = doc.get(D::UNIQUE);
        if records
            .iter()
            .any(|r| r.id != id && r.doc.get(D::UNIQUE) == key)
        {
            return Err(Self::duplicate());
        }

        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.replace(doc, Utc::now());
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError> {
        let id = RecordId::parse(id)?;
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| r.id == id);
        Ok(position.map(|index| records.remove(index)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
