//! List record domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Identifier type assigned by the store
pub type RecordId = i32;

/// Contact list record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: RecordId,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "active")]
    pub state: String,
    #[schema(example = "13800000000")]
    pub phone: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "1 Main Street")]
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Merge a patch onto this record.
    ///
    /// Fields absent from the patch keep their current value. Returns whether
    /// any field changed.
    pub fn apply(&mut self, patch: RecordPatch) -> bool {
        let mut changed = false;

        for (slot, value) in [
            (&mut self.name, patch.name),
            (&mut self.state, patch.state),
            (&mut self.phone, patch.phone),
            (&mut self.email, patch.email),
            (&mut self.address, patch.address),
        ] {
            if let Some(value) = value {
                changed |= *slot != value;
                *slot = value;
            }
        }

        changed
    }
}

/// Record creation data transfer object; every field is required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewRecord {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[validate(length(min = 1, message = "state is required"))]
    #[schema(example = "active")]
    pub state: String,
    #[validate(length(min = 1, message = "phone is required"))]
    #[schema(example = "13800000000")]
    pub phone: String,
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "address is required"))]
    #[schema(example = "1 Main Street")]
    pub address: String,
}

/// Partial update overlay.
///
/// An absent field is left untouched; a present field must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct RecordPatch {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "state must not be empty"))]
    #[schema(example = "active")]
    pub state: Option<String>,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    #[schema(example = "13800000000")]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "address must not be empty"))]
    #[schema(example = "1 Main Street")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        let now = Utc::now();
        Record {
            id: 7,
            name: "Alice".to_string(),
            state: "active".to_string(),
            phone: "123".to_string(),
            email: "alice@example.com".to_string(),
            address: "1 Main Street".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_apply_overwrites_present_fields_only() {
        let mut rec = record();
        let changed = rec.apply(RecordPatch {
            phone: Some("456".to_string()),
            address: Some("2 Side Road".to_string()),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(rec.phone, "456");
        assert_eq!(rec.address, "2 Side Road");
        assert_eq!(rec.name, "Alice");
        assert_eq!(rec.email, "alice@example.com");
        assert_eq!(rec.id, 7);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut rec = record();
        let before = rec.clone();
        assert!(!rec.apply(RecordPatch::default()));
        assert_eq!(rec, before);
    }

    #[test]
    fn test_apply_same_value_reports_unchanged() {
        let mut rec = record();
        assert!(!rec.apply(RecordPatch {
            name: Some("Alice".to_string()),
            ..Default::default()
        }));
    }

    #[test]
    fn test_new_record_rejects_empty_field() {
        let new = NewRecord {
            name: "Bob".to_string(),
            state: String::new(),
            phone: "1".to_string(),
            email: "bob@example.com".to_string(),
            address: "x".to_string(),
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn test_new_record_requires_every_field() {
        let result: Result<NewRecord, _> =
            serde_json::from_str(r#"{"name":"Bob","state":"a","phone":"1","email":"b@x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_explicit_empty() {
        let patch: RecordPatch = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(patch.validate().is_err());

        let patch: RecordPatch = serde_json::from_str(r#"{"state":"moved"}"#).unwrap();
        assert!(patch.validate().is_ok());
        assert_eq!(patch.state.as_deref(), Some("moved"));
    }

    #[test]
    fn test_deleted_at_hidden_when_active() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("deleted_at").is_none());
        assert_eq!(json["id"], 7);
    }
}
