//! Node matcher: pairing and constraint lifecycle for one named PBC.

use std::collections::HashSet;

use pbc_core::{
    ConstraintModel, DatumId, EquationTerm, MatchPlane, Mode, Node, NodeLabel, Result,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::equations;
use crate::pair::NodePair;
use crate::stats::MatchStats;

/// Matches the nodes of two opposing surfaces and drives constraint-equation
/// assembly and teardown for one named periodic boundary condition.
///
/// Lifecycle: validity is checked at construction (`UNVALIDATED ->
/// VALID|INVALID`); [`match_nodes`](Self::match_nodes) transitions to
/// `MATCHED`, [`apply_constraints`](Self::apply_constraints) to `PAIRED`,
/// and [`delete_constraints`](Self::delete_constraints) back to `MATCHED`.
/// All three are idempotent: re-invocation outside the expected state is a
/// silent no-op.
///
/// Validity compares the full node lists; exemption sets never enter the
/// count check. They only flag pairs at match time and skip their equations
/// at apply time.
#[derive(Debug, Clone)]
pub struct NodeMatcher {
    name: String,
    master: Vec<Node>,
    slave: Vec<Node>,
    master_exempt: HashSet<NodeLabel>,
    slave_exempt: HashSet<NodeLabel>,
    plane: MatchPlane,
    mode: Mode,
    valid: bool,
    matched: bool,
    paired: bool,
    pairs: Vec<NodePair>,
    stats: MatchStats,
    datum: Option<DatumId>,
}

impl NodeMatcher {
    /// Creates a matcher for one named PBC and checks its validity.
    ///
    /// `master` and `slave` are the ordered node collections of the two
    /// surfaces; the exemption sets hold labels of nodes excluded from
    /// equation generation (typically corner/edge nodes shared by several
    /// PBCs).
    pub fn new(
        name: impl Into<String>,
        master: Vec<Node>,
        slave: Vec<Node>,
        master_exempt: Option<HashSet<NodeLabel>>,
        slave_exempt: Option<HashSet<NodeLabel>>,
        plane: MatchPlane,
        mode: Mode,
    ) -> Self {
        let name = name.into();
        let valid = master.len() == slave.len();
        if !valid {
            log::warn!(
                "'{}': node counts differ ({} master, {} slave), matching disabled",
                name,
                master.len(),
                slave.len()
            );
        }
        Self {
            name,
            master,
            slave,
            master_exempt: master_exempt.unwrap_or_default(),
            slave_exempt: slave_exempt.unwrap_or_default(),
            plane,
            mode,
            valid,
            matched: false,
            paired: false,
            pairs: Vec::new(),
            stats: MatchStats::default(),
            datum: None,
        }
    }

    /// The PBC name this matcher was created under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The plane nodes are compared in.
    pub fn plane(&self) -> MatchPlane {
        self.plane
    }

    /// The constraint formulation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True iff the master and slave surfaces hold the same number of nodes.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True once the pairing has been computed.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// True while the constraint equations exist in the external model.
    pub fn is_paired(&self) -> bool {
        self.paired
    }

    /// Number of node pairs (equals the surface node count once matched).
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// The matched pairs, in creation order.
    pub fn pairs(&self) -> &[NodePair] {
        &self.pairs
    }

    /// Matching statistics.
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Human-readable matching summary for the host UI.
    pub fn status_messages(&self) -> Vec<String> {
        if !self.valid {
            return vec![format!(
                "Number of nodes in master ({}) and slave ({}) surfaces do not match",
                self.master.len(),
                self.slave.len()
            )];
        }
        let n = self.master.len();
        let mut messages = vec![
            format!("Exact matches: {}/{}", self.stats.exact, n),
            format!("Proximity matches: {}/{}", self.stats.proximity, n),
            format!("Exempted pairs: {}", self.stats.exempt),
        ];
        if let (Some(min), Some(max), Some(avg)) = (
            self.stats.min_distance,
            self.stats.max_distance,
            self.stats.average_distance(),
        ) {
            messages.push(format!(
                "Proximity distance: min = {min}, max = {max}, avg = {avg}"
            ));
        }
        messages
    }

    /// Uniquely matches each master node to a slave node.
    ///
    /// Runs the exact pass first (first slave in current list order whose
    /// in-plane coordinates coincide), then resolves the remainder by
    /// nearest in-plane distance. No-op unless valid and not yet matched.
    /// Both passes together drain both node lists completely.
    pub fn match_nodes(&mut self) {
        if !self.valid || self.matched {
            return;
        }

        let mut master_unmatched = self.master.clone();
        let mut slave_unmatched = self.slave.clone();
        let mut proximity_pending = 0usize;

        // Exact pass. Iterate over a snapshot since matched nodes are
        // removed as we go; the first exactly coinciding slave wins.
        for master in master_unmatched.clone() {
            let found = slave_unmatched
                .iter()
                .position(|slave| self.plane.nodes_match(&master, slave));
            let Some(position) = found else {
                proximity_pending += 1;
                continue;
            };
            let slave = slave_unmatched.remove(position);
            master_unmatched.retain(|m| m.label() != master.label());
            self.push_pair(&master, &slave, true, None);
        }

        // Proximity pass: strictly minimal squared in-plane distance, first
        // minimum wins.
        if proximity_pending > 0 {
            for master in master_unmatched.clone() {
                let mut best: Option<(usize, f64)> = None;
                for (position, slave) in slave_unmatched.iter().enumerate() {
                    let distance_squared = self.plane.in_plane_distance_squared(&master, slave);
                    if best.is_none_or(|(_, d)| distance_squared < d) {
                        best = Some((position, distance_squared));
                    }
                }
                let Some((position, distance_squared)) = best else {
                    break;
                };
                let slave = slave_unmatched.remove(position);
                master_unmatched.retain(|m| m.label() != master.label());
                self.push_pair(&master, &slave, false, Some(distance_squared.sqrt()));
            }
        }

        self.matched = true;
        log::debug!(
            "'{}': matched {} pairs ({} exact, {} proximity, {} exempt)",
            self.name,
            self.pairs.len(),
            self.stats.exact,
            self.stats.proximity,
            self.stats.exempt
        );
    }

    fn push_pair(&mut self, master: &Node, slave: &Node, exact: bool, distance: Option<f64>) {
        let exempted = self.master_exempt.contains(&master.label())
            || self.slave_exempt.contains(&slave.label());
        if exact {
            self.stats.exact += 1;
        } else {
            self.stats.proximity += 1;
        }
        if exempted {
            self.stats.exempt += 1;
        } else if let Some(distance) = distance {
            self.stats.record_distance(distance);
        }
        let index = self.pairs.len();
        self.pairs
            .push(NodePair::new(index, master, slave, self.plane, exempted));
    }

    /// Creates the named sets, datum and equations in the external model.
    ///
    /// Sets are created for every pair, exempt ones included, so teardown
    /// stays symmetric; equations only for non-exempt pairs. No-op unless
    /// matched and not yet paired.
    pub fn apply_constraints(&mut self, model: &mut dyn ConstraintModel) -> Result<()> {
        if !self.matched || self.paired {
            return Ok(());
        }

        for pair in &self.pairs {
            model.create_node_set(&pair.master_set_name(&self.name), &[pair.master()])?;
            model.create_node_set(&pair.slave_set_name(&self.name), &[pair.slave()])?;
        }

        if self.mode.is_axisymmetric() {
            let id = model.create_cylindrical_datum(&self.datum_name(), self.plane.normal_axis())?;
            self.datum = Some(id);
        }

        for (name, terms) in self.all_equations() {
            if terms.is_empty() {
                continue;
            }
            model.create_equation(&name, &terms)?;
        }

        self.paired = true;
        Ok(())
    }

    /// Deletes exactly the artifacts [`apply_constraints`](Self::apply_constraints)
    /// created, tolerating names that are already absent. No-op unless
    /// paired; afterwards the matcher is back in the matched state and may
    /// be re-applied.
    pub fn delete_constraints(&mut self, model: &mut dyn ConstraintModel) -> Result<()> {
        if !self.paired {
            return Ok(());
        }

        // Equations first: they reference the sets. The term lists are
        // recomputed so the empty-list skips mirror assembly exactly.
        for (name, terms) in self.all_equations() {
            if terms.is_empty() {
                continue;
            }
            if !model.delete_equation(&name)? {
                log::warn!("'{}': equation '{}' was already absent", self.name, name);
            }
        }

        for pair in &self.pairs {
            for set_name in [
                pair.master_set_name(&self.name),
                pair.slave_set_name(&self.name),
            ] {
                if !model.delete_node_set(&set_name)? {
                    log::warn!("'{}': node set '{}' was already absent", self.name, set_name);
                }
            }
        }

        if self.datum.take().is_some() && !model.delete_datum(&self.datum_name())? {
            log::warn!(
                "'{}': datum '{}' was already absent",
                self.name,
                self.datum_name()
            );
        }

        self.paired = false;
        Ok(())
    }

    /// Name of the matcher-wide cylindrical datum (axisymmetric mode only).
    pub fn datum_name(&self) -> String {
        format!("CSYS_PBC_{}", self.name)
    }

    /// All named equations in creation-index order, empty term lists
    /// included. Chaining runs over the non-exempt subsequence of pairs.
    fn all_equations(&self) -> Vec<(String, Vec<EquationTerm>)> {
        let active: Vec<&NodePair> = self.pairs.iter().filter(|p| !p.is_exempted()).collect();
        let mut out = Vec::new();
        for (position, pair) in active.iter().enumerate() {
            let next = active.get(position + 1).copied();
            out.extend(self.equations_for(pair, next));
        }
        out
    }

    fn equations_for(
        &self,
        pair: &NodePair,
        next: Option<&NodePair>,
    ) -> Vec<(String, Vec<EquationTerm>)> {
        match self.mode {
            Mode::Translational(treatment) => {
                equations::translational_equations(&self.name, pair, next, treatment)
            }
            Mode::Axisymmetric => match self.datum {
                Some(csys) => equations::axisymmetric_equations(&self.name, pair, next, csys),
                // The datum is created before any equation is built and
                // retained until after teardown.
                None => Vec::new(),
            },
        }
    }

    /// Takes a plain snapshot of this matcher.
    pub fn state(&self) -> MatcherState {
        MatcherState::from(self)
    }

    /// Restores a matcher from a snapshot.
    pub fn from_state(state: MatcherState) -> Result<Self> {
        let plane = MatchPlane::from_index(state.plane)?;
        Ok(Self {
            name: state.name,
            master: state.master,
            slave: state.slave,
            master_exempt: state.master_exempt.into_iter().collect(),
            slave_exempt: state.slave_exempt.into_iter().collect(),
            plane,
            mode: state.mode,
            valid: state.valid,
            matched: state.matched,
            paired: state.paired,
            pairs: state.pairs,
            stats: state.stats,
            datum: state.datum,
        })
    }
}

/// Plain snapshot of a matcher, suitable for host-side persistence.
///
/// The engine only fixes which fields make up the state; format evolution
/// and versioning remain the host's concern.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatcherState {
    /// PBC name.
    pub name: String,
    /// Master surface nodes.
    pub master: Vec<Node>,
    /// Slave surface nodes.
    pub slave: Vec<Node>,
    /// Exempted master node labels.
    pub master_exempt: Vec<NodeLabel>,
    /// Exempted slave node labels.
    pub slave_exempt: Vec<NodeLabel>,
    /// Plane selector index (0 = XY, 1 = XZ, 2 = YZ).
    pub plane: usize,
    /// Constraint formulation.
    pub mode: Mode,
    /// Lifecycle flags.
    pub valid: bool,
    /// True once the pairing has been computed.
    pub matched: bool,
    /// True while model-side artifacts exist.
    pub paired: bool,
    /// Matched pairs in creation order.
    pub pairs: Vec<NodePair>,
    /// Matching statistics.
    pub stats: MatchStats,
    /// Cylindrical datum id, if one exists in the model.
    pub datum: Option<DatumId>,
}

impl From<&NodeMatcher> for MatcherState {
    fn from(matcher: &NodeMatcher) -> Self {
        let mut master_exempt: Vec<NodeLabel> = matcher.master_exempt.iter().copied().collect();
        let mut slave_exempt: Vec<NodeLabel> = matcher.slave_exempt.iter().copied().collect();
        master_exempt.sort_unstable();
        slave_exempt.sort_unstable();
        Self {
            name: matcher.name.clone(),
            master: matcher.master.clone(),
            slave: matcher.slave.clone(),
            master_exempt,
            slave_exempt,
            plane: matcher.plane.index(),
            mode: matcher.mode,
            valid: matcher.valid,
            matched: matcher.matched,
            paired: matcher.paired,
            pairs: matcher.pairs.clone(),
            stats: matcher.stats.clone(),
            datum: matcher.datum,
        }
    }
}
