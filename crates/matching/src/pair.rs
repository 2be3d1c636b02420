//! Matched node pair representation.

use pbc_core::{MatchPlane, Node, NodeLabel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One matched (master, slave) node correspondence.
///
/// Holds labels rather than node objects so the pair stays valid if the host
/// re-resolves its mesh, plus the in-plane coordinates captured at match
/// time. Exact matches have identical in-plane coordinates; proximity
/// matches do not, which matters for the distance and radius computations.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodePair {
    master: NodeLabel,
    slave: NodeLabel,
    master_in_plane: (f64, f64),
    slave_in_plane: (f64, f64),
    plane: MatchPlane,
    exempted: bool,
    index: usize,
}

impl NodePair {
    pub(crate) fn new(
        index: usize,
        master: &Node,
        slave: &Node,
        plane: MatchPlane,
        exempted: bool,
    ) -> Self {
        Self {
            master: master.label(),
            slave: slave.label(),
            master_in_plane: plane.in_plane_coordinates(master),
            slave_in_plane: plane.in_plane_coordinates(slave),
            plane,
            exempted,
            index,
        }
    }

    /// Label of the master node.
    pub fn master(&self) -> NodeLabel {
        self.master
    }

    /// Label of the slave node.
    pub fn slave(&self) -> NodeLabel {
        self.slave
    }

    /// True if either endpoint was in its surface's exemption set.
    pub fn is_exempted(&self) -> bool {
        self.exempted
    }

    /// Zero-based creation index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The plane this pair was matched in.
    pub fn plane(&self) -> MatchPlane {
        self.plane
    }

    /// Squared in-plane distance between the coordinates captured at match
    /// time. Zero for exact matches.
    pub fn distance_squared(&self) -> f64 {
        let d_i = self.master_in_plane.0 - self.slave_in_plane.0;
        let d_j = self.master_in_plane.1 - self.slave_in_plane.1;
        d_i * d_i + d_j * d_j
    }

    /// In-plane radius of the master node.
    pub fn master_radius(&self) -> f64 {
        self.master_in_plane.0.hypot(self.master_in_plane.1)
    }

    /// In-plane radius of the slave node. May differ slightly from the
    /// master radius for proximity matches.
    pub fn slave_radius(&self) -> f64 {
        self.slave_in_plane.0.hypot(self.slave_in_plane.1)
    }

    /// Base name for artifacts derived from this pair.
    pub fn name(&self, pbc_name: &str) -> String {
        format!("pbc_{pbc_name}_node_{}", self.index)
    }

    /// Name of the single-node set holding the master node.
    pub fn master_set_name(&self, pbc_name: &str) -> String {
        format!("{}_master", self.name(pbc_name))
    }

    /// Name of the single-node set holding the slave node.
    pub fn slave_set_name(&self, pbc_name: &str) -> String {
        format!("{}_slave", self.name(pbc_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_scheme() {
        let master = Node::new(1, [0.0, 0.0, 0.0]);
        let slave = Node::new(4, [1.0, 0.0, 0.0]);
        let pair = NodePair::new(2, &master, &slave, MatchPlane::YZ, false);

        assert_eq!(pair.name("top"), "pbc_top_node_2");
        assert_eq!(pair.master_set_name("top"), "pbc_top_node_2_master");
        assert_eq!(pair.slave_set_name("top"), "pbc_top_node_2_slave");
    }

    #[test]
    fn test_distance_squared_from_captured_coordinates() {
        let master = Node::new(1, [0.0, 1.0, 2.0]);
        let slave = Node::new(4, [9.0, 1.3, 1.6]);
        let pair = NodePair::new(0, &master, &slave, MatchPlane::YZ, false);

        // Only the in-plane (y, z) deltas count.
        assert!((pair.distance_squared() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_radii() {
        let master = Node::new(1, [3.0, 4.0, 5.0]);
        let slave = Node::new(4, [0.0, 5.0, 5.0]);
        let pair = NodePair::new(0, &master, &slave, MatchPlane::XY, false);

        assert_eq!(pair.master_radius(), 5.0);
        assert_eq!(pair.slave_radius(), 5.0);
    }
}
