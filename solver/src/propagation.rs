use crate::cnf::{CNF, CNFVar, Simplified};
use crate::misc::log::targets;
use crate::tree::{DecisionTree, NodeId};

/// Literal of the first unit clause of the formula, in clause order
pub fn find_unit_literal(formula: &CNF) -> Option<CNFVar> {
    formula.clauses.iter()
        .find(|clause| clause.is_unit())
        .map(|clause| clause.vars[0])
}

/// Whether the formula has the unit clause `[literal]`
fn has_unit_clause(formula: &CNF, literal: CNFVar) -> bool {
    formula.clauses.iter()
        .any(|clause| clause.is_unit() && clause.vars[0] == literal)
}

impl DecisionTree {
    /// Assigns unit clauses as long as there are any, each assignment
    /// being an implicit child of the previous one.
    ///
    /// Returns the last node of the chain. If any assignment fails, the
    /// whole chain is pruned and `start` itself is marked as a conflict
    /// and returned instead.
    pub fn propagate_units(&mut self, start: NodeId) -> NodeId {
        let mut current = start;

        while let Some(unit) = find_unit_literal(self.node(current).formula()) {
            let formula = self.node(current).formula();
            // two unit clauses disagree on the variable
            let simplified = if has_unit_clause(formula, -unit) {
                Simplified::Conflict
            } else {
                formula.assign(unit)
            };

            let child = self.add_child(current, unit, true, simplified);
            if self.node(child).is_conflict() {
                log::debug!(target: targets::PROPAGATION, "Propagating {} failed, chain started at {:?} is abandoned", unit, start);
                self.mark_conflict(start);
                self.remove_children(start);
                return start;
            }

            current = child;
        }

        current
    }
}
