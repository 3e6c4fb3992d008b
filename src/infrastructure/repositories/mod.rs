//! Repository Implementations

mod school;

pub use school::JsonSchoolRepository;
