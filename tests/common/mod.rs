//! Common test utilities for Registrar integration and scenario tests.
//!
//! - `TestEnv`: isolated working directory, config directory and store file
//! - Fixtures: a seeded school and hand-written store documents

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
