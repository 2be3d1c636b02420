//! # PBC
//!
//! Periodic boundary conditions for meshed 3D bodies.
//!
//! This crate pairs the nodes of two opposing surfaces (exact in-plane
//! coincidence first, nearest-neighbour assignment for the rest) and
//! synthesizes the linear multi-point constraint equations that enforce
//! periodicity between the paired nodes, including curvilinear radial/hoop
//! forms for axisymmetric problems.
//!
//! ## Quick Start
//!
//! ```rust
//! use pbc::{InMemoryModel, MatchPlane, Mode, Node, NodeMatcher};
//!
//! let master = vec![
//!     Node::new(1, [0.0, 0.0, 0.0]),
//!     Node::new(2, [0.0, 1.0, 0.0]),
//! ];
//! let slave = vec![
//!     Node::new(4, [1.0, 0.0, 0.0]),
//!     Node::new(5, [1.0, 1.0, 0.0]),
//! ];
//!
//! let mut matcher = NodeMatcher::new(
//!     "front", master, slave, None, None, MatchPlane::YZ, Mode::default(),
//! );
//! matcher.match_nodes();
//!
//! let mut model = InMemoryModel::new();
//! matcher.apply_constraints(&mut model).unwrap();
//! assert!(matcher.is_paired());
//!
//! matcher.delete_constraints(&mut model).unwrap();
//! assert!(model.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for nodes, pairs and matcher snapshots

/// Core types and the external model seam.
pub use pbc_core as core;

/// Matching and constraint synthesis.
pub use pbc_matching as matching;

// Re-export commonly used types at root level
pub use pbc_core::{
    ConstraintModel, DatumId, EquationTerm, Error, InMemoryModel, MatchPlane, Mode, Node,
    NodeLabel, NormalTreatment, Result, AXIS_LETTERS,
};
pub use pbc_matching::{resolve, MatchStats, MatcherRegistry, MatcherState, NodeMatcher, NodePair};
