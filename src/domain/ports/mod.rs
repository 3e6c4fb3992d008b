//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod school_repository;

pub use school_repository::{SchoolRepository, StoreError};
