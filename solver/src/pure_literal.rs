use crate::cnf::{CNF, CNFVar, Simplified, VarId};
use crate::misc::log::targets;
use crate::tree::{DecisionTree, NodeId};
use crate::util::IndexMap;

/// Polarities a variable occurs with across a formula
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    AllPositive,
    AllNegative,
    Mixed,
}

impl Occurrence {
    fn of(literal: CNFVar) -> Occurrence {
        if literal.sign {
            Occurrence::AllPositive
        } else {
            Occurrence::AllNegative
        }
    }

    fn merge(self, literal: CNFVar) -> Occurrence {
        if self == Occurrence::of(literal) {
            self
        } else {
            Occurrence::Mixed
        }
    }

    /// The literal satisfying every occurrence, if the variable is pure
    pub fn pure_literal(self, id: VarId) -> Option<CNFVar> {
        match self {
            Occurrence::AllPositive => Some(CNFVar::pos(id)),
            Occurrence::AllNegative => Some(CNFVar::neg(id)),
            Occurrence::Mixed => None,
        }
    }
}

/// Classifies every variable of the formula, in order of first occurrence
pub fn classify(formula: &CNF) -> IndexMap<VarId, Occurrence> {
    let mut occurrences = IndexMap::default();
    for literal in formula.clauses.iter().flat_map(|clause| clause.vars.iter()) {
        occurrences.entry(literal.id)
            .and_modify(|occurrence: &mut Occurrence| *occurrence = occurrence.merge(*literal))
            .or_insert_with(|| Occurrence::of(*literal));
    }
    occurrences
}

/// The first pure literal of the formula
pub fn find_pure_literal(formula: &CNF) -> Option<CNFVar> {
    classify(formula).into_iter()
        .find_map(|(id, occurrence)| occurrence.pure_literal(id))
}

impl DecisionTree {
    /// Assigns pure literals as long as there are any, each assignment
    /// being an implicit child of the previous one. Returns the last node.
    pub fn eliminate_pure_literals(&mut self, start: NodeId) -> NodeId {
        let mut current = start;

        while let Some(pure) = find_pure_literal(self.node(current).formula()) {
            let simplified = self.node(current).formula().assign(pure);
            if matches!(simplified, Simplified::Conflict) {
                panic!("internal error: assigning the pure literal {} falsified a clause", pure);
            }

            log::trace!(target: targets::PURE_LITERAL, "Pure literal {}", pure);
            current = self.add_child(current, pure, true, simplified);
        }

        current
    }
}
