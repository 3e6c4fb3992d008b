//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod course_code;
mod email;
mod password;
mod user_id;

pub use course_code::CourseCode;
pub use email::is_valid_email;
pub use password::PasswordDigest;
pub use user_id::UserId;
