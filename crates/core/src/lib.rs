//! # PBC Core
//!
//! Core types and abstractions for the mesh periodic-boundary-condition
//! engine.
//!
//! This crate provides the foundational types shared by the matching and
//! constraint-synthesis layers:
//!
//! - **Node types**: `Node`, `NodeLabel`
//! - **Match plane**: `MatchPlane` and its geometric predicates
//! - **Mode selection**: `Mode`, `NormalTreatment`
//! - **Model seam**: `ConstraintModel`, `EquationTerm`, `InMemoryModel`
//! - **Errors**: `Error`, `Result`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod mode;
pub mod model;
pub mod node;
pub mod plane;

// Re-exports
pub use error::{Error, Result};
pub use mode::{Mode, NormalTreatment};
pub use model::{ConstraintModel, DatumId, EquationTerm, InMemoryModel};
pub use node::{Node, NodeLabel};
pub use plane::{MatchPlane, AXIS_LETTERS};
