use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::record::{Document, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub name: String,
}

pub type GroupRecord = Record<Group>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Name,
}

impl Document for Group {
    type Field = GroupField;

    const COLLECTION: &'static str = "groups";
    const FIELDS: &'static [GroupField] = &[GroupField::Name];
    const UNIQUE: GroupField = GroupField::Name;

    fn column(field: GroupField) -> &'static str {
        match field {
            GroupField::Name => "name",
        }
    }

    fn get(&self, field: GroupField) -> &str {
        match field {
            GroupField::Name => &self.name,
        }
    }
}
