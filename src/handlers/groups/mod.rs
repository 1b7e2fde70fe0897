use serde::Deserialize;

use crate::database::models::Group;
use crate::error::ApiError;
use crate::validation::{scalar_string, StoreManagedFields, Validator};

pub mod create;
pub mod list;
pub mod show;

pub use create::create;
pub use list::list;
pub use show::show;

/// Request body for POST /groups/
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GroupPayload {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub store_managed: StoreManagedFields,
}

impl GroupPayload {
    pub fn into_group(self) -> Result<Group, ApiError> {
        let mut v = Validator::new();
        v.store_managed(&self.store_managed);
        let group = Group {
            name: v.required("name", self.name),
        };
        v.finish()?;
        Ok(group)
    }
}
