//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Session` - One interactive run: load, sign in, mutate, save
//! - `CheckUseCase` - Load, reconcile and summarize the store, optionally repairing it

pub mod check;
pub mod session;

pub use check::{CheckResult, CheckUseCase, StoreSummary};
pub use session::Session;
