//! Member record
//!
//! A member document as stored in the members collection. The `id` is the
//! string form of a v4 UUID minted by the server at creation time and never
//! changes afterwards.

use serde::Serialize;
use serde_json::Value;

use super::validate::{FieldError, ObjectValidator, ValidationError};

/// Full member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i64,
    pub membership_type: String,
    pub picture: String,
}

/// Projection of a member to its display fields, as returned by list/search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
    pub surname: String,
}

/// Fields of a member payload that were present in the request body.
///
/// `id` is deliberately not part of the patch: it is assigned by the server
/// on create and immutable on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub membership_type: Option<String>,
    pub picture: Option<String>,
}

impl MemberPatch {
    /// Validate a raw JSON body into a patch, rejecting fields of the wrong
    /// type. Unknown fields (including a client-sent `id`) are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut validator = ObjectValidator::new(value)?;
        let patch = Self {
            name: validator.string("name"),
            surname: validator.string("surname"),
            email: validator.string("email"),
            age: validator.integer("age"),
            membership_type: validator.string("membershipType"),
            picture: validator.string("picture"),
        };
        validator.finish()?;
        Ok(patch)
    }

    fn require_complete(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        for (field, present) in [
            ("name", self.name.is_some()),
            ("surname", self.surname.is_some()),
            ("email", self.email.is_some()),
            ("age", self.age.is_some()),
            ("membershipType", self.membership_type.is_some()),
            ("picture", self.picture.is_some()),
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

impl Member {
    /// Build a full record from a draft payload, failing if any field is
    /// absent.
    pub fn from_draft(id: String, draft: MemberPatch) -> Result<Self, ValidationError> {
        draft.require_complete()?;

        // Placeholders are never observable: the draft is complete, so
        // apply() overwrites every field.
        let mut member = Self {
            id,
            name: String::new(),
            surname: String::new(),
            email: String::new(),
            age: 0,
            membership_type: String::new(),
            picture: String::new(),
        };
        member.apply(draft);
        Ok(member)
    }

    /// Replace only the fields present in the patch; everything else keeps
    /// its prior value.
    pub fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            self.surname = surname;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(membership_type) = patch.membership_type {
            self.membership_type = membership_type;
        }
        if let Some(picture) = patch.picture {
            self.picture = picture;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> Member {
        Member {
            id: "m-1".to_string(),
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
            membership_type: "gold".to_string(),
            picture: String::new(),
        }
    }

    #[test]
    fn test_patch_from_value_extracts_typed_fields() {
        let patch = MemberPatch::from_value(&json!({
            "name": "Ada",
            "age": 30,
            "membershipType": "gold"
        }))
        .unwrap();

        assert_eq!(patch.name.as_deref(), Some("Ada"));
        assert_eq!(patch.age, Some(30));
        assert_eq!(patch.membership_type.as_deref(), Some("gold"));
        assert!(patch.surname.is_none());
    }

    #[test]
    fn test_patch_rejects_wrong_types() {
        let err = MemberPatch::from_value(&json!({ "name": 7, "age": "thirty" })).unwrap_err();

        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "age"]);
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let patch = MemberPatch::from_value(&json!({ "id": "custom", "nickname": "Addy" })).unwrap();
        assert_eq!(patch, MemberPatch::default());
    }

    #[test]
    fn test_from_draft_reports_every_missing_field() {
        let draft = MemberPatch::from_value(&json!({ "name": "Ada" })).unwrap();
        let err = Member::from_draft("m-1".to_string(), draft).unwrap_err();

        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["surname", "email", "age", "membershipType", "picture"]
        );
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut member = ada();
        member.apply(MemberPatch {
            age: Some(31),
            ..MemberPatch::default()
        });

        assert_eq!(member.age, 31);
        assert_eq!(member.name, "Ada");
        assert_eq!(member.surname, "Lovelace");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let value = serde_json::to_value(ada()).unwrap();
        assert_eq!(value["membershipType"], "gold");
        assert!(value.get("membership_type").is_none());
    }
}
