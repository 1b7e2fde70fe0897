use serde::Deserialize;

use crate::database::models::Contact;
use crate::error::ApiError;
use crate::validation::{scalar_string, StoreManagedFields, Validator};

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create;
pub use delete::delete;
pub use list::list;
pub use show::show;
pub use update::update;

/// Request body for POST /contacts/ and PUT /contacts/:id
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub mobile: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub group_id: Option<String>,
    #[serde(flatten)]
    pub store_managed: StoreManagedFields,
}

impl ContactPayload {
    /// Check every required field, reporting all violations at once.
    pub fn into_contact(self) -> Result<Contact, ApiError> {
        let mut v = Validator::new();
        v.store_managed(&self.store_managed);

        let contact = Contact {
            name: v.required("name", self.name),
            image_url: v.required("ImageUrl", self.image_url),
            mobile: v.required("Mobile", self.mobile),
            email: v.required("Email", self.email),
            company: v.required("Company", self.company),
            title: v.required("Title", self.title),
            group_id: v.required("GroupId", self.group_id),
        };

        v.finish()?;
        Ok(contact)
    }
}
