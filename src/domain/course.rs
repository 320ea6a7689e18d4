//! Course record
//!
//! A course document as stored in the courses collection. Same id scheme as
//! members; `schedule` is the course timestamp, RFC 3339 on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::validate::{FieldError, ObjectValidator, ValidationError};

/// Full course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub instructor_surname: String,
    pub schedule: DateTime<Utc>,
}

/// Projection of a course to its display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub instructor_name: String,
    pub instructor_surname: String,
}

/// Fields of a course payload that were present in the request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_surname: Option<String>,
    pub schedule: Option<DateTime<Utc>>,
}

impl CoursePatch {
    /// Validate a raw JSON body into a patch, rejecting fields of the wrong
    /// type. Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut validator = ObjectValidator::new(value)?;
        let patch = Self {
            title: validator.string("title"),
            description: validator.string("description"),
            instructor_name: validator.string("instructorName"),
            instructor_surname: validator.string("instructorSurname"),
            schedule: validator.timestamp("schedule"),
        };
        validator.finish()?;
        Ok(patch)
    }

    fn require_complete(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        for (field, present) in [
            ("title", self.title.is_some()),
            ("description", self.description.is_some()),
            ("instructorName", self.instructor_name.is_some()),
            ("instructorSurname", self.instructor_surname.is_some()),
            ("schedule", self.schedule.is_some()),
        ] {
            if !present {
                errors.push(FieldError::missing(field));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

impl Course {
    /// Build a full record from a draft payload, failing if any field is
    /// absent.
    pub fn from_draft(id: String, draft: CoursePatch) -> Result<Self, ValidationError> {
        draft.require_complete()?;

        // Placeholders are never observable: the draft is complete, so
        // apply() overwrites every field.
        let mut course = Self {
            id,
            title: String::new(),
            description: String::new(),
            instructor_name: String::new(),
            instructor_surname: String::new(),
            schedule: DateTime::<Utc>::MIN_UTC,
        };
        course.apply(draft);
        Ok(course)
    }

    /// Replace only the fields present in the patch; everything else keeps
    /// its prior value.
    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(instructor_name) = patch.instructor_name {
            self.instructor_name = instructor_name;
        }
        if let Some(instructor_surname) = patch.instructor_surname {
            self.instructor_surname = instructor_surname;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
    }
}
