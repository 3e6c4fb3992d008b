//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (JSON school store)

pub mod repositories;

pub use repositories::JsonSchoolRepository;
