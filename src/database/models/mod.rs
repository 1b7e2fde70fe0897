pub mod contact;
pub mod group;

pub use contact::{Contact, ContactField, ContactRecord};
pub use group::{Group, GroupField, GroupRecord};
