//! Field-presence validation for inbound payloads.
//!
//! Runs before any store access. A field is missing when it is absent,
//! `null`, or the empty string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// Collects one message per violation, in the order fields are checked.
#[derive(Debug, Default)]
pub struct Validator {
    messages: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a required string field, recording `"<label> is required"` when missing.
    pub fn required(&mut self, label: &str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                self.messages.push(format!("{} is required", label));
                String::new()
            }
        }
    }

    /// Record a violation for every store-managed field the client tried to set.
    pub fn store_managed(&mut self, fields: &StoreManagedFields) {
        for name in fields.present() {
            self.messages.push(format!("{} cannot be set by clients", name));
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.messages))
        }
    }
}

/// Deserialize a field that should hold text. Numbers and booleans are
/// taken in their string form; arrays and objects count as missing.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Fields assigned by the store. Accepted by the deserializer only so that a
/// client supplying them can be told so.
#[derive(Debug, Default, Deserialize)]
pub struct StoreManagedFields {
    #[serde(rename = "_id", default)]
    id: Option<Value>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<Value>,
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<Value>,
}

impl StoreManagedFields {
    fn present(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.id.is_some() {
            names.push("_id");
        }
        if self.created_at.is_some() {
            names.push("createdAt");
        }
        if self.updated_at.is_some() {
            names.push("updatedAt");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_keeps_present_values() {
        let mut v = Validator::new();
        assert_eq!(v.required("name", Some("VIP".into())), "VIP");
        assert!(v.finish().is_ok());
    }

    #[test]
    fn required_reports_absent_and_empty() {
        let mut v = Validator::new();
        v.required("name", None);
        v.required("Email", Some(String::new()));
        let err = v.finish().unwrap_err();
        assert_eq!(
            err,
            ApiError::validation(vec![
                "name is required".to_string(),
                "Email is required".to_string()
            ])
        );
    }

    #[test]
    fn store_managed_fields_are_rejected() {
        let fields: StoreManagedFields =
            serde_json::from_value(json!({ "_id": "x", "updatedAt": null, "createdAt": 1 })).unwrap();
        let mut v = Validator::new();
        v.store_managed(&fields);
        assert_eq!(v.finish().unwrap_err().message(), "_id cannot be set by clients,\ncreatedAt cannot be set by clients");
    }

    #[derive(Debug, Deserialize)]
    struct Scalar {
        #[serde(default, deserialize_with = "scalar_string")]
        value: Option<String>,
    }

    #[test]
    fn scalar_string_takes_text_form_of_scalars() {
        let read = |v: Value| serde_json::from_value::<Scalar>(json!({ "value": v })).unwrap().value;
        assert_eq!(read(json!("9000")), Some("9000".to_string()));
        assert_eq!(read(json!(9000000001u64)), Some("9000000001".to_string()));
        assert_eq!(read(json!(1.5)), Some("1.5".to_string()));
        assert_eq!(read(json!(true)), Some("true".to_string()));
        assert_eq!(read(json!(null)), None);
        assert_eq!(read(json!(["a"])), None);
        assert_eq!(read(json!({ "a": 1 })), None);

        let absent: Scalar = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.value, None);
    }
}
