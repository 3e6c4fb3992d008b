//! Domain Layer
//!
//! The core of Registrar: identities, courses, assignments and the rules that
//! keep them consistent. Nothing here touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Identity, Course, Assignment, School)
//! - `value_objects/` - Immutable value types (UserId, CourseCode, PasswordDigest)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
