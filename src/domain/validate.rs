//! Payload validation
//!
//! Typed field extraction over raw JSON payloads. Every Create/Update body
//! goes through an [`ObjectValidator`] before it reaches a repository, so
//! type violations are reported as a structured [`ValidationError`] instead
//! of being coerced.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single offending field in a request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }
}

/// Validation failure carrying one entry per offending field.
///
/// Serialized as-is into the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

/// Extracts typed fields from a JSON object, collecting an error per field
/// that has the wrong type. Fields absent from the object yield `None`
/// without an error; unknown fields are ignored.
#[derive(Debug)]
pub struct ObjectValidator<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> ObjectValidator<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ValidationError> {
        match value.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: Vec::new(),
            }),
            None => Err(ValidationError::single("body", "expected a JSON object")),
        }
    }

    pub fn string(&mut self, field: &'static str) -> Option<String> {
        match self.object.get(field) {
            None => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                self.errors.push(FieldError::new(field, "expected a string"));
                None
            }
        }
    }

    /// JSON integers only; floats and numeric strings are rejected.
    pub fn integer(&mut self, field: &'static str) -> Option<i64> {
        match self.object.get(field) {
            None => None,
            Some(value) => match value.as_i64() {
                Some(number) => Some(number),
                None => {
                    self.errors
                        .push(FieldError::new(field, "expected an integer"));
                    None
                }
            },
        }
    }

    pub fn timestamp(&mut self, field: &'static str) -> Option<DateTime<Utc>> {
        match self.object.get(field) {
            None => None,
            Some(Value::String(value)) => match DateTime::parse_from_rfc3339(value) {
                Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
                Err(_) => {
                    self.errors
                        .push(FieldError::new(field, "expected an RFC 3339 timestamp"));
                    None
                }
            },
            Some(_) => {
                self.errors.push(FieldError::new(
                    field,
                    "expected an RFC 3339 timestamp string",
                ));
                None
            }
        }
    }

    /// Consume the validator, failing if any field was rejected.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = ObjectValidator::new(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "body");
    }

    #[test]
    fn test_absent_fields_yield_none_without_error() {
        let value = json!({});
        let mut validator = ObjectValidator::new(&value).unwrap();
        assert!(validator.string("name").is_none());
        assert!(validator.integer("age").is_none());
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn test_every_offending_field_is_reported() {
        let value = json!({ "name": 7, "age": "thirty", "schedule": false });
        let mut validator = ObjectValidator::new(&value).unwrap();
        validator.string("name");
        validator.integer("age");
        validator.timestamp("schedule");
        let err = validator.finish().unwrap_err();
        assert_eq!(err.errors.len(), 3);
    }

    #[test]
    fn test_integer_rejects_floats() {
        let value = json!({ "age": 30.5 });
        let mut validator = ObjectValidator::new(&value).unwrap();
        assert!(validator.integer("age").is_none());
        assert!(validator.finish().is_err());
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let value = json!({ "schedule": "2026-09-01T10:00:00Z" });
        let mut validator = ObjectValidator::new(&value).unwrap();
        let timestamp = validator.timestamp("schedule").unwrap();
        assert_eq!(timestamp.to_rfc3339(), "2026-09-01T10:00:00+00:00");
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn test_error_serializes_field_list() {
        let err = ValidationError::single("age", "expected an integer");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["errors"][0]["field"], "age");
        assert_eq!(value["errors"][0]["message"], "expected an integer");
    }
}
