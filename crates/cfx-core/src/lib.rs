//! # cfx-core — Foundational Types for the Compliance Checklist
//!
//! Defines the data model shared by every other crate in the workspace:
//! frameworks, their controls, control priorities and the identifier
//! newtypes that keep framework, control and session identifiers apart.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `FrameworkId`, `ControlId` and
//!    `SessionId` are distinct types. A control id cannot be passed where a
//!    framework id is expected.
//!
//! 2. **Frameworks are read-only seeds.** A `Framework` is loaded once and
//!    never mutated. Checklist sessions copy its controls.
//!
//! 3. **UTC-only timestamps.** `Timestamp` is UTC with seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cfx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod control;
pub mod error;
pub mod framework;
pub mod identity;
pub mod priority;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use control::{Control, GENERAL_GROUP};
pub use error::CfxError;
pub use framework::Framework;
pub use identity::{ControlId, FrameworkId, SessionId};
pub use priority::Priority;
pub use temporal::Timestamp;
