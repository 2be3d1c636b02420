//! Mesh node representation.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable integer label identifying a mesh node within its surface.
pub type NodeLabel = u32;

/// A mesh node: a stable label plus its coordinate triple.
///
/// Nodes are read-only inputs supplied by the host mesh; the engine never
/// mutates them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    label: NodeLabel,
    coordinates: Vector3<f64>,
}

impl Node {
    /// Creates a node from its label and coordinates.
    pub fn new(label: NodeLabel, coordinates: [f64; 3]) -> Self {
        Self {
            label,
            coordinates: Vector3::new(coordinates[0], coordinates[1], coordinates[2]),
        }
    }

    /// Returns the node label.
    pub fn label(&self) -> NodeLabel {
        self.label
    }

    /// Returns the coordinate triple.
    pub fn coordinates(&self) -> &Vector3<f64> {
        &self.coordinates
    }

    /// Returns the coordinate along the given axis (0 = x, 1 = y, 2 = z).
    pub fn coordinate(&self, axis: usize) -> f64 {
        self.coordinates[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node = Node::new(7, [1.0, 2.0, 3.0]);
        assert_eq!(node.label(), 7);
        assert_eq!(node.coordinate(0), 1.0);
        assert_eq!(node.coordinate(1), 2.0);
        assert_eq!(node.coordinate(2), 3.0);
        assert_eq!(node.coordinates(), &Vector3::new(1.0, 2.0, 3.0));
    }
}
