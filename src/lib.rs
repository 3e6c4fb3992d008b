//! Registrar - academic records with file persistence
//!
//! Instructors create courses and assignments and grade submissions; learners
//! register in courses, submit work, and read their grade report. The whole
//! school lives in memory as an arena and is persisted as one JSON document.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckUseCase, Session};
pub use config::Config;
pub use domain::entities::{ReconcileReport, School, SchoolSnapshot, SignUp};
pub use domain::ports::{SchoolRepository, StoreError};
pub use error::{RegistrarError, RegistrarResult};
pub use infrastructure::JsonSchoolRepository;
