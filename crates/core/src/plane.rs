//! Match plane: the projection plane used to compare nodes.

use crate::node::Node;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letters used for deterministic equation naming, indexed by global axis.
pub const AXIS_LETTERS: [char; 3] = ['x', 'y', 'z'];

/// A projection plane spanned by two of the global axes.
///
/// Nodes are compared by their coordinates along the two in-plane axes; the
/// remaining axis is the plane normal (and the axial direction in
/// axisymmetric mode). Only the three axis-aligned planes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchPlane {
    i: usize,
    j: usize,
}

impl MatchPlane {
    /// The XY plane (normal along Z).
    pub const XY: Self = Self { i: 0, j: 1 };
    /// The XZ plane (normal along Y).
    pub const XZ: Self = Self { i: 0, j: 2 };
    /// The YZ plane (normal along X).
    pub const YZ: Self = Self { i: 1, j: 2 };

    /// Returns the canonical plane for a selector index: 0 = XY, 1 = XZ,
    /// 2 = YZ.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::XY),
            1 => Ok(Self::XZ),
            2 => Ok(Self::YZ),
            _ => Err(Error::InvalidPlane(index)),
        }
    }

    /// Returns the selector index of this plane (inverse of `from_index`).
    pub fn index(&self) -> usize {
        match (self.i, self.j) {
            (0, 1) => 0,
            (0, 2) => 1,
            _ => 2,
        }
    }

    /// Returns the two in-plane axis indices `(i, j)` with `i < j`.
    pub fn in_plane_axes(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Returns the normal/axial axis index.
    pub fn normal_axis(&self) -> usize {
        3 - self.i - self.j
    }

    /// True iff both in-plane coordinates of the two nodes are exactly
    /// equal.
    ///
    /// No tolerance is applied: exact equality is the fast path, anything
    /// else falls through to proximity matching.
    pub fn nodes_match(&self, a: &Node, b: &Node) -> bool {
        a.coordinate(self.i) == b.coordinate(self.i) && a.coordinate(self.j) == b.coordinate(self.j)
    }

    /// Returns the squared distance between the two nodes projected onto
    /// this plane.
    pub fn in_plane_distance_squared(&self, a: &Node, b: &Node) -> f64 {
        let d_i = a.coordinate(self.i) - b.coordinate(self.i);
        let d_j = a.coordinate(self.j) - b.coordinate(self.j);
        d_i * d_i + d_j * d_j
    }

    /// Returns the node's coordinates along the two in-plane axes.
    pub fn in_plane_coordinates(&self, node: &Node) -> (f64, f64) {
        (node.coordinate(self.i), node.coordinate(self.j))
    }

    /// Returns the node's distance from the plane normal, computed from the
    /// in-plane coordinates. This is the radius used by the axisymmetric
    /// radial and hoop forms.
    pub fn in_plane_radius(&self, node: &Node) -> f64 {
        node.coordinate(self.i).hypot(node.coordinate(self.j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(MatchPlane::from_index(0).unwrap(), MatchPlane::XY);
        assert_eq!(MatchPlane::from_index(1).unwrap(), MatchPlane::XZ);
        assert_eq!(MatchPlane::from_index(2).unwrap(), MatchPlane::YZ);
        assert!(matches!(
            MatchPlane::from_index(3),
            Err(Error::InvalidPlane(3))
        ));
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..3 {
            assert_eq!(MatchPlane::from_index(index).unwrap().index(), index);
        }
    }

    #[test]
    fn test_axes() {
        assert_eq!(MatchPlane::XY.in_plane_axes(), (0, 1));
        assert_eq!(MatchPlane::XY.normal_axis(), 2);
        assert_eq!(MatchPlane::XZ.normal_axis(), 1);
        assert_eq!(MatchPlane::YZ.normal_axis(), 0);
    }

    #[test]
    fn test_nodes_match_exact_only() {
        let plane = MatchPlane::YZ;
        let a = Node::new(1, [0.0, 1.0, 2.0]);
        let b = Node::new(2, [5.0, 1.0, 2.0]);
        let c = Node::new(3, [0.0, 1.0 + 1e-12, 2.0]);

        // The normal coordinate is ignored, the in-plane ones must coincide
        // bitwise.
        assert!(plane.nodes_match(&a, &b));
        assert!(!plane.nodes_match(&a, &c));
    }

    #[test]
    fn test_in_plane_distance_squared() {
        let plane = MatchPlane::XY;
        let a = Node::new(1, [0.0, 0.0, 9.0]);
        let b = Node::new(2, [3.0, 4.0, -9.0]);
        assert_eq!(plane.in_plane_distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn test_in_plane_radius() {
        let plane = MatchPlane::XY;
        let node = Node::new(1, [3.0, 4.0, 7.0]);
        assert_eq!(plane.in_plane_radius(&node), 5.0);
    }
}
