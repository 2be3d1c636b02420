//! External model seam: node sets, linear equations and cylindrical datums.
//!
//! The engine never talks to a geometry kernel directly. Everything it
//! creates in the host model goes through [`ConstraintModel`], and everything
//! it creates is named, so teardown can mirror assembly exactly.

use std::collections::BTreeMap;

use crate::node::NodeLabel;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a cylindrical datum created in the external model.
pub type DatumId = u32;

/// One ordered term of a linear multi-point constraint equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquationTerm {
    /// Coefficient multiplying the displacement component.
    pub coefficient: f64,
    /// Name of the single-node set the term acts on.
    pub set_name: String,
    /// 1-based degree-of-freedom index. Under a cylindrical datum, 1 is
    /// radial, 2 is hoop and 3 is axial.
    pub dof: usize,
    /// Cylindrical datum the degree of freedom is expressed in, if any.
    pub csys: Option<DatumId>,
}

impl EquationTerm {
    /// Creates a term in the global coordinate system.
    pub fn new(coefficient: f64, set_name: impl Into<String>, dof: usize) -> Self {
        Self {
            coefficient,
            set_name: set_name.into(),
            dof,
            csys: None,
        }
    }

    /// Expresses the term in the given cylindrical datum.
    pub fn in_csys(mut self, csys: DatumId) -> Self {
        self.csys = Some(csys);
        self
    }
}

/// Interface to the host geometry/model layer.
///
/// Deletion methods report whether the named artifact existed (`false` means
/// it did not) so callers can tolerate conditional creation: exemption and
/// mode-dependent skips make existence of derived artifacts conditional.
pub trait ConstraintModel {
    /// Creates (or replaces) a named node set.
    fn create_node_set(&mut self, name: &str, labels: &[NodeLabel]) -> Result<()>;

    /// Deletes a named node set.
    fn delete_node_set(&mut self, name: &str) -> Result<bool>;

    /// Creates (or replaces) a named linear equation from ordered terms.
    fn create_equation(&mut self, name: &str, terms: &[EquationTerm]) -> Result<()>;

    /// Deletes a named equation.
    fn delete_equation(&mut self, name: &str) -> Result<bool>;

    /// Creates a named cylindrical datum whose axial direction is the given
    /// global axis, returning its identifier.
    fn create_cylindrical_datum(&mut self, name: &str, axial_axis: usize) -> Result<DatumId>;

    /// Deletes a named datum.
    fn delete_datum(&mut self, name: &str) -> Result<bool>;
}

/// In-memory reference backend.
///
/// Keeps a full inventory of created artifacts so hosts and tests can verify
/// that an apply/delete round-trip leaves the model unchanged.
#[derive(Debug, Default)]
pub struct InMemoryModel {
    sets: BTreeMap<String, Vec<NodeLabel>>,
    equations: BTreeMap<String, Vec<EquationTerm>>,
    datums: BTreeMap<String, (DatumId, usize)>,
    next_datum: DatumId,
}

impl InMemoryModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of node sets currently in the model.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Number of equations currently in the model.
    pub fn equation_count(&self) -> usize {
        self.equations.len()
    }

    /// Number of datums currently in the model.
    pub fn datum_count(&self) -> usize {
        self.datums.len()
    }

    /// True if the model holds no artifacts at all.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty() && self.equations.is_empty() && self.datums.is_empty()
    }

    /// True if a node set with this name exists.
    pub fn has_set(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// True if an equation with this name exists.
    pub fn has_equation(&self, name: &str) -> bool {
        self.equations.contains_key(name)
    }

    /// Returns the labels of a named node set.
    pub fn set(&self, name: &str) -> Option<&[NodeLabel]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    /// Returns the ordered terms of a named equation.
    pub fn equation(&self, name: &str) -> Option<&[EquationTerm]> {
        self.equations.get(name).map(Vec::as_slice)
    }

    /// Returns the id and axial axis of a named datum.
    pub fn datum(&self, name: &str) -> Option<(DatumId, usize)> {
        self.datums.get(name).copied()
    }

    /// Names of all equations, in lexicographic order.
    pub fn equation_names(&self) -> impl Iterator<Item = &str> {
        self.equations.keys().map(String::as_str)
    }

    /// Names of all node sets, in lexicographic order.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

impl ConstraintModel for InMemoryModel {
    fn create_node_set(&mut self, name: &str, labels: &[NodeLabel]) -> Result<()> {
        if labels.is_empty() {
            return Err(Error::Model(format!("node set '{name}' has no members")));
        }
        self.sets.insert(name.to_string(), labels.to_vec());
        Ok(())
    }

    fn delete_node_set(&mut self, name: &str) -> Result<bool> {
        Ok(self.sets.remove(name).is_some())
    }

    fn create_equation(&mut self, name: &str, terms: &[EquationTerm]) -> Result<()> {
        if terms.is_empty() {
            return Err(Error::Model(format!("equation '{name}' has no terms")));
        }
        self.equations.insert(name.to_string(), terms.to_vec());
        Ok(())
    }

    fn delete_equation(&mut self, name: &str) -> Result<bool> {
        Ok(self.equations.remove(name).is_some())
    }

    fn create_cylindrical_datum(&mut self, name: &str, axial_axis: usize) -> Result<DatumId> {
        if axial_axis > 2 {
            return Err(Error::Model(format!(
                "invalid axial axis {axial_axis} for datum '{name}'"
            )));
        }
        self.next_datum += 1;
        self.datums.insert(name.to_string(), (self.next_datum, axial_axis));
        Ok(self.next_datum)
    }

    fn delete_datum(&mut self, name: &str) -> Result<bool> {
        Ok(self.datums.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_round_trip() {
        let mut model = InMemoryModel::new();
        model.create_node_set("s1", &[4]).unwrap();
        assert!(model.has_set("s1"));
        assert_eq!(model.set("s1"), Some(&[4][..]));
        assert!(model.delete_node_set("s1").unwrap());
        assert!(!model.delete_node_set("s1").unwrap());
        assert!(model.is_empty());
    }

    #[test]
    fn test_empty_set_rejected() {
        let mut model = InMemoryModel::new();
        assert!(model.create_node_set("s1", &[]).is_err());
    }

    #[test]
    fn test_equation_round_trip() {
        let mut model = InMemoryModel::new();
        let terms = vec![
            EquationTerm::new(1.0, "m", 1),
            EquationTerm::new(-1.0, "s", 1),
        ];
        model.create_equation("eq_x_p0", &terms).unwrap();
        assert_eq!(model.equation("eq_x_p0"), Some(terms.as_slice()));
        assert!(model.delete_equation("eq_x_p0").unwrap());
        assert!(!model.has_equation("eq_x_p0"));
    }

    #[test]
    fn test_empty_equation_rejected() {
        let mut model = InMemoryModel::new();
        assert!(model.create_equation("eq", &[]).is_err());
    }

    #[test]
    fn test_datum_ids_are_distinct() {
        let mut model = InMemoryModel::new();
        let a = model.create_cylindrical_datum("csys_a", 2).unwrap();
        let b = model.create_cylindrical_datum("csys_b", 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(model.datum("csys_a"), Some((a, 2)));
        assert!(model.delete_datum("csys_a").unwrap());
        assert!(!model.delete_datum("csys_a").unwrap());
    }

    #[test]
    fn test_invalid_datum_axis() {
        let mut model = InMemoryModel::new();
        assert!(model.create_cylindrical_datum("csys", 3).is_err());
    }

    #[test]
    fn test_term_in_csys() {
        let term = EquationTerm::new(0.5, "m", 2).in_csys(9);
        assert_eq!(term.csys, Some(9));
        assert_eq!(term.dof, 2);
        assert_eq!(term.coefficient, 0.5);
    }
}
