use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use std::fmt;
use uuid::Uuid;

use super::error::StoreError;

/// Store-assigned primary key. Clients only ever see its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied identifier, rejecting anything that is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The editable body of a stored document.
///
/// Every editable field is a string column. `FIELDS` fixes the column order
/// used for inserts and updates; `UNIQUE` names the field the store keeps
/// unique across the collection.
pub trait Document:
    Clone + fmt::Debug + Send + Sync + Unpin + Serialize + for<'r> FromRow<'r, PgRow> + 'static
{
    type Field: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    const COLLECTION: &'static str;
    const FIELDS: &'static [Self::Field];
    const UNIQUE: Self::Field;

    fn column(field: Self::Field) -> &'static str;

    fn get(&self, field: Self::Field) -> &str;
}

/// A document as persisted: editable body plus store-managed metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<D> {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub doc: D,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl<D: Document> Record<D> {
    pub fn new(id: RecordId, doc: D, now: DateTime<Utc>) -> Self {
        Self {
            id,
            doc,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field, keeping identity and creation time.
    pub fn replace(&mut self, doc: D, now: DateTime<Utc>) {
        self.doc = doc;
        self.updated_at = now;
    }
}

impl<'r, D> FromRow<'r, PgRow> for Record<D>
where
    D: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            doc: D::from_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_ids() {
        let id = RecordId::generate();
        let parsed = RecordId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["abc", "", "5f8d0d55b54764421b7156c9", "not-a-uuid-at-all-0000000000000"] {
            match RecordId::parse(raw) {
                Err(StoreError::InvalidId(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidId for {:?}, got {:?}", raw, other),
            }
        }
    }
}
