//! Symmetry mode selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Treatment of the normal-direction equation in translational mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalTreatment {
    /// `u_k(master) - u_k(slave) = 0` for every pair.
    #[default]
    Asymmetric,
    /// `u_k(master) + u_k(slave) = 0` for every pair.
    Symmetric,
    /// No normal-direction equation.
    Ignore,
}

/// Constraint formulation applied to the matched pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Cartesian displacement coupling. The in-plane axes chain consecutive
    /// pairs; the normal axis follows the given treatment, one equation per
    /// pair.
    Translational(NormalTreatment),
    /// Cylindrical decomposition: chained axial terms, per-pair radial
    /// terms, and `1/r`-weighted chained hoop terms.
    Axisymmetric,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Translational(NormalTreatment::default())
    }
}

impl Mode {
    /// True for the axisymmetric formulation.
    pub fn is_axisymmetric(&self) -> bool {
        matches!(self, Self::Axisymmetric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Mode::default(), Mode::Translational(NormalTreatment::Asymmetric));
        assert!(!Mode::default().is_axisymmetric());
        assert!(Mode::Axisymmetric.is_axisymmetric());
    }
}
