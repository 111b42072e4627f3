use crate::cnf::CNFVar;
use crate::misc::log::targets;
use crate::tree::{DecisionTree, NodeId};

impl DecisionTree {
    /// The complement of the literal assigned at `id`
    pub fn sibling_literal(&self, id: NodeId) -> CNFVar {
        match self.node(id).literal() {
            Some(literal) => -literal,
            None => panic!("internal error: the root has no sibling"),
        }
    }

    /// Picks the literal to branch on next.
    ///
    /// At a healthy node this is the first literal of the first clause.
    /// At a conflict the complementary assignment of the node itself is
    /// picked, to be tried next to it.
    pub fn select_literal(&self, id: NodeId) -> CNFVar {
        let node = self.node(id);
        if node.has_both_children() {
            panic!("internal error: selecting a literal below {:?}, whose both children are explored", id);
        }

        if node.is_conflict() {
            return self.sibling_literal(id);
        }

        match node.formula().clauses.first().and_then(|clause| clause.vars.first()) {
            Some(literal) => *literal,
            None => panic!("internal error: no literal to select at {:?}", id),
        }
    }

    /// Both children are present and both are conflicts
    fn children_conflicting(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.has_both_children()
            && node.children().all(|child| self.node(child).is_conflict())
    }

    /// Climbs from a conflict to the nearest branching decision whose
    /// complementary assignment was not tried yet, or to the root.
    ///
    /// Conflicts are passed up through implicit assignments and through
    /// nodes with both branches failed. Every node passed has its
    /// subtree pruned.
    pub fn backtrack(&mut self, from: NodeId) -> NodeId {
        let mut current = from;

        while let Some(parent) = self.node(current).parent() {
            let node = self.node(current);
            if !node.is_implicit() && !self.node(parent).has_both_children() {
                break;
            }

            if node.is_implicit() && node.is_conflict() {
                self.mark_conflict(parent);
            }

            current = parent;

            if self.children_conflicting(current) {
                self.mark_conflict(current);
            }
            self.remove_children(current);
        }

        log::debug!(target: targets::BACKTRACK, "Backtracked from {:?} to {:?}", from, current);
        current
    }
}
