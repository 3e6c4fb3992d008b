//! Domain Entities
//!
//! - `Identity` - A user record with its role payload (instructor or learner)
//! - `Course` - A coded catalog entry owned by one instructor
//! - `Assignment` / `Submission` - Gradable work and a learner's answer to it
//! - `School` - The arena that owns all of the above and keeps relations symmetric
//! - `SchoolSnapshot` - The flat, unlinked form the store reads and writes

mod assignment;
mod course;
mod identity;
mod school;
mod snapshot;

pub use assignment::{Assignment, Submission};
pub use course::{Course, CourseTotals, POINTS_PER_ASSIGNMENT};
pub use identity::{AccountKind, Identity, InstructorProfile, LearnerProfile, Role};
pub use school::{GradeReportEntry, ReconcileIssue, ReconcileReport, School, SignUp};
pub use snapshot::{CourseRecord, RoleRecord, SchoolSnapshot, UserRecord};
