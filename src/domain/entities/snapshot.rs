//! Flat snapshot of a [`School`](super::School)
//!
//! This is the shape the store reads and writes: every identity in id order,
//! instructors carrying full copies of the courses they own, learners carrying
//! only course codes. Nothing in a snapshot is cross-linked; turning one back
//! into a live school is the job of [`School::restore`](super::School::restore).

use crate::domain::value_objects::{CourseCode, PasswordDigest, UserId};

use super::Assignment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolSnapshot {
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub password: PasswordDigest,
    pub full_name: String,
    pub email: String,
    pub role: RoleRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRecord {
    Instructor { courses: Vec<CourseRecord> },
    /// Codes are unresolved until reconciliation
    Learner { course_codes: Vec<CourseCode> },
    Unassigned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub code: CourseCode,
    /// Owner id as written in the document
    pub provided_by: UserId,
    /// Roster as written in the document; rebuilt from the learner side on load
    pub registered_students: Vec<UserId>,
    pub assignments: Vec<Assignment>,
}

impl SchoolSnapshot {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
