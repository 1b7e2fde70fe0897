use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::record::{Document, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub image_url: String,
    pub mobile: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub group_id: String,
}

pub type ContactRecord = Record<Contact>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    ImageUrl,
    Mobile,
    Email,
    Company,
    Title,
    GroupId,
}

impl Document for Contact {
    type Field = ContactField;

    const COLLECTION: &'static str = "contacts";
    const FIELDS: &'static [ContactField] = &[
        ContactField::Name,
        ContactField::ImageUrl,
        ContactField::Mobile,
        ContactField::Email,
        ContactField::Company,
        ContactField::Title,
        ContactField::GroupId,
    ];
    const UNIQUE: ContactField = ContactField::Mobile;

    fn column(field: ContactField) -> &'static str {
        match field {
            ContactField::Name => "name",
            ContactField::ImageUrl => "image_url",
            ContactField::Mobile => "mobile",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Title => "title",
            ContactField::GroupId => "group_id",
        }
    }

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::ImageUrl => &self.image_url,
            ContactField::Mobile => &self.mobile,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Title => &self.title,
            ContactField::GroupId => &self.group_id,
        }
    }
}
