//! # PBC Matching
//!
//! Node matching and constraint-equation synthesis for the mesh
//! periodic-boundary-condition engine.
//!
//! Given two ordered node collections of equal size (master and slave
//! surfaces), a [`NodeMatcher`] pairs them up (exact in-plane coincidence
//! first, nearest-neighbour assignment for the rest) and emits named node
//! sets and linear multi-point constraint equations to an external model
//! through the `ConstraintModel` seam. Assembly and teardown are reversible
//! and idempotent.
//!
//! ## Core Components
//!
//! - [`NodeMatcher`]: matching session and constraint lifecycle for one PBC
//! - [`NodePair`]: one matched (master, slave) correspondence
//! - [`MatchStats`]: exact/proximity/exempt counters and distance figures
//! - [`MatcherRegistry`]: one matcher per PBC name
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

mod equations;
pub mod matcher;
pub mod pair;
pub mod registry;
pub mod stats;

// Re-exports
pub use matcher::{MatcherState, NodeMatcher};
pub use pair::NodePair;
pub use registry::{resolve, MatcherRegistry};
pub use stats::MatchStats;
