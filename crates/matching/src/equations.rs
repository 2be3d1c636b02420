//! Constraint-equation term builders.
//!
//! Builders produce the ordered term lists consumed by the external model's
//! equation interface. An empty list means "no equation"; both creation and
//! deletion skip empty lists, which keeps teardown an exact mirror of
//! assembly.
//!
//! Chained forms relate a pair to the next pair in the non-exempt
//! creation-order subsequence. The last pair has no successor and yields an
//! empty list: the chain is deliberately open, anchoring relative
//! periodicity with n-1 equations instead of an over-constraining loop.

use pbc_core::{DatumId, EquationTerm, NormalTreatment, AXIS_LETTERS};

use crate::pair::NodePair;

/// Radial degree of freedom under a cylindrical datum.
const RADIAL_DOF: usize = 1;
/// Hoop degree of freedom under a cylindrical datum.
const HOOP_DOF: usize = 2;

fn equation_name(letter: char, pair_name: &str) -> String {
    format!("eq_{letter}_{pair_name}")
}

/// Chained translational terms along a global axis:
/// `u(master_t) - u(slave_t) = u(master_t+1) - u(slave_t+1)`.
fn chained_translational_terms(
    pbc_name: &str,
    pair: &NodePair,
    next: Option<&NodePair>,
    axis: usize,
) -> Vec<EquationTerm> {
    let Some(next) = next else {
        return Vec::new();
    };
    let dof = axis + 1;
    vec![
        EquationTerm::new(1.0, pair.master_set_name(pbc_name), dof),
        EquationTerm::new(-1.0, pair.slave_set_name(pbc_name), dof),
        EquationTerm::new(-1.0, next.master_set_name(pbc_name), dof),
        EquationTerm::new(1.0, next.slave_set_name(pbc_name), dof),
    ]
}

/// Per-pair normal-direction terms; no chaining.
fn direct_normal_terms(
    pbc_name: &str,
    pair: &NodePair,
    axis: usize,
    treatment: NormalTreatment,
) -> Vec<EquationTerm> {
    let dof = axis + 1;
    match treatment {
        NormalTreatment::Asymmetric => vec![
            EquationTerm::new(1.0, pair.master_set_name(pbc_name), dof),
            EquationTerm::new(-1.0, pair.slave_set_name(pbc_name), dof),
        ],
        NormalTreatment::Symmetric => vec![
            EquationTerm::new(1.0, pair.master_set_name(pbc_name), dof),
            EquationTerm::new(1.0, pair.slave_set_name(pbc_name), dof),
        ],
        NormalTreatment::Ignore => Vec::new(),
    }
}

/// Per-pair radial terms: `u_r(master) - u_r(slave) = 0` in the cylindrical
/// datum. Master and slave may sit at slightly different radii when
/// proximity-matched; the radial direction is per node, so the form holds
/// either way.
fn radial_terms(pbc_name: &str, pair: &NodePair, csys: DatumId) -> Vec<EquationTerm> {
    vec![
        EquationTerm::new(1.0, pair.master_set_name(pbc_name), RADIAL_DOF).in_csys(csys),
        EquationTerm::new(-1.0, pair.slave_set_name(pbc_name), RADIAL_DOF).in_csys(csys),
    ]
}

/// Chained hoop terms with per-node `1/r` weights, so equal arc-length
/// relative displacement is enforced rather than equal absolute
/// displacement. A node on the cylindrical axis has no hoop direction, so a
/// zero radius anywhere in the chain link skips the equation.
fn hoop_terms(
    pbc_name: &str,
    pair: &NodePair,
    next: Option<&NodePair>,
    csys: DatumId,
) -> Vec<EquationTerm> {
    let Some(next) = next else {
        return Vec::new();
    };
    let radii = [
        pair.master_radius(),
        pair.slave_radius(),
        next.master_radius(),
        next.slave_radius(),
    ];
    if radii.iter().any(|r| *r <= 0.0) {
        log::debug!(
            "skipping hoop terms for '{}': node on the cylindrical axis",
            pair.name(pbc_name)
        );
        return Vec::new();
    }
    vec![
        EquationTerm::new(1.0 / radii[0], pair.master_set_name(pbc_name), HOOP_DOF).in_csys(csys),
        EquationTerm::new(-1.0 / radii[1], pair.slave_set_name(pbc_name), HOOP_DOF).in_csys(csys),
        EquationTerm::new(-1.0 / radii[2], next.master_set_name(pbc_name), HOOP_DOF).in_csys(csys),
        EquationTerm::new(1.0 / radii[3], next.slave_set_name(pbc_name), HOOP_DOF).in_csys(csys),
    ]
}

/// Named equations for one non-exempt pair in translational mode: chained
/// terms along both in-plane axes, treatment-dependent terms along the
/// normal axis.
pub(crate) fn translational_equations(
    pbc_name: &str,
    pair: &NodePair,
    next: Option<&NodePair>,
    treatment: NormalTreatment,
) -> Vec<(String, Vec<EquationTerm>)> {
    let pair_name = pair.name(pbc_name);
    let (i, j) = pair.plane().in_plane_axes();
    let k = pair.plane().normal_axis();
    vec![
        (
            equation_name(AXIS_LETTERS[i], &pair_name),
            chained_translational_terms(pbc_name, pair, next, i),
        ),
        (
            equation_name(AXIS_LETTERS[j], &pair_name),
            chained_translational_terms(pbc_name, pair, next, j),
        ),
        (
            equation_name(AXIS_LETTERS[k], &pair_name),
            direct_normal_terms(pbc_name, pair, k, treatment),
        ),
    ]
}

/// Named equations for one non-exempt pair in axisymmetric mode: chained
/// translational terms along the axial axis, per-pair radial terms, chained
/// `1/r`-weighted hoop terms.
pub(crate) fn axisymmetric_equations(
    pbc_name: &str,
    pair: &NodePair,
    next: Option<&NodePair>,
    csys: DatumId,
) -> Vec<(String, Vec<EquationTerm>)> {
    let pair_name = pair.name(pbc_name);
    let k = pair.plane().normal_axis();
    vec![
        (
            equation_name(AXIS_LETTERS[k], &pair_name),
            chained_translational_terms(pbc_name, pair, next, k),
        ),
        (
            equation_name('r', &pair_name),
            radial_terms(pbc_name, pair, csys),
        ),
        (
            equation_name('t', &pair_name),
            hoop_terms(pbc_name, pair, next, csys),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbc_core::{MatchPlane, Node};

    fn pair_at(index: usize, master: [f64; 3], slave: [f64; 3], plane: MatchPlane) -> NodePair {
        let m = Node::new(10 + index as u32, master);
        let s = Node::new(20 + index as u32, slave);
        NodePair::new(index, &m, &s, plane, false)
    }

    #[test]
    fn test_chained_terms_signs_and_dofs() {
        let p0 = pair_at(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], MatchPlane::YZ);
        let p1 = pair_at(1, [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], MatchPlane::YZ);

        let terms = chained_translational_terms("pbc", &p0, Some(&p1), 1);
        assert_eq!(terms.len(), 4);
        assert_eq!(terms[0].coefficient, 1.0);
        assert_eq!(terms[1].coefficient, -1.0);
        assert_eq!(terms[2].coefficient, -1.0);
        assert_eq!(terms[3].coefficient, 1.0);
        assert!(terms.iter().all(|t| t.dof == 2 && t.csys.is_none()));
        assert_eq!(terms[0].set_name, "pbc_pbc_node_0_master");
        assert_eq!(terms[3].set_name, "pbc_pbc_node_1_slave");
    }

    #[test]
    fn test_last_pair_is_open_chained() {
        let p0 = pair_at(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], MatchPlane::YZ);
        assert!(chained_translational_terms("pbc", &p0, None, 1).is_empty());
    }

    #[test]
    fn test_normal_treatments() {
        let p0 = pair_at(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], MatchPlane::YZ);

        let asym = direct_normal_terms("pbc", &p0, 0, NormalTreatment::Asymmetric);
        assert_eq!(asym.len(), 2);
        assert_eq!((asym[0].coefficient, asym[1].coefficient), (1.0, -1.0));
        assert!(asym.iter().all(|t| t.dof == 1));

        let sym = direct_normal_terms("pbc", &p0, 0, NormalTreatment::Symmetric);
        assert_eq!((sym[0].coefficient, sym[1].coefficient), (1.0, 1.0));

        assert!(direct_normal_terms("pbc", &p0, 0, NormalTreatment::Ignore).is_empty());
    }

    #[test]
    fn test_hoop_weights_are_reciprocal_radii() {
        // XY plane: radii come from the (x, y) coordinates.
        let p0 = pair_at(0, [2.0, 0.0, 0.0], [0.0, 4.0, 1.0], MatchPlane::XY);
        let p1 = pair_at(1, [5.0, 0.0, 0.0], [0.0, 10.0, 1.0], MatchPlane::XY);

        let terms = hoop_terms("pbc", &p0, Some(&p1), 3);
        assert_eq!(terms.len(), 4);
        assert_eq!(terms[0].coefficient, 0.5);
        assert_eq!(terms[1].coefficient, -0.25);
        assert_eq!(terms[2].coefficient, -0.2);
        assert_eq!(terms[3].coefficient, 0.1);
        assert!(terms.iter().all(|t| t.dof == HOOP_DOF && t.csys == Some(3)));
    }

    #[test]
    fn test_hoop_skipped_on_axis() {
        let on_axis = pair_at(0, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], MatchPlane::XY);
        let off_axis = pair_at(1, [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], MatchPlane::XY);
        assert!(hoop_terms("pbc", &on_axis, Some(&off_axis), 1).is_empty());
    }

    #[test]
    fn test_radial_terms_use_csys() {
        let p0 = pair_at(0, [2.0, 0.0, 0.0], [2.1, 0.0, 1.0], MatchPlane::XY);
        let terms = radial_terms("pbc", &p0, 7);
        assert_eq!(terms.len(), 2);
        assert!(terms.iter().all(|t| t.dof == RADIAL_DOF && t.csys == Some(7)));
    }

    #[test]
    fn test_equation_names() {
        let p0 = pair_at(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], MatchPlane::YZ);
        let p1 = pair_at(1, [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], MatchPlane::YZ);

        let names: Vec<String> =
            translational_equations("top", &p0, Some(&p1), NormalTreatment::Asymmetric)
                .into_iter()
                .map(|(name, _)| name)
                .collect();
        assert_eq!(
            names,
            vec![
                "eq_y_pbc_top_node_0",
                "eq_z_pbc_top_node_0",
                "eq_x_pbc_top_node_0",
            ]
        );
    }
}
