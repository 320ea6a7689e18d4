//! Domain records
//!
//! Typed member and course records, their partial-update patches and the
//! payload validation that guards them.

mod course;
mod member;
mod validate;

pub use course::{Course, CoursePatch, CourseSummary};
pub use member::{Member, MemberPatch, MemberSummary};
pub use validate::{FieldError, ObjectValidator, ValidationError};
