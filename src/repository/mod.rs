//! Repositories
//!
//! Store access for the members and courses collections. Each repository
//! owns a pool handle passed in at construction; there is no ambient
//! connection state.

pub mod course;
pub mod member;
pub mod search;

pub use course::CourseRepository;
pub use member::MemberRepository;
