use std::collections::BTreeMap;
use std::iter::FromIterator;
use rayon::prelude::*;

use crate::cnf::{CNF, CNFVar, VarId};
use crate::sat_solution::SATSolution;
use crate::misc::log::targets;
use crate::tree::{DecisionTree, NodeId};

/// Truth values of the variables of a formula
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model(BTreeMap<VarId, bool>);

impl Model {
    pub fn value(&self, var: VarId) -> Option<bool> {
        self.0.get(&var).copied()
    }

    /// Sets the variable of `literal` so that the literal is true
    pub fn insert(&mut self, literal: CNFVar) {
        self.0.insert(literal.id, literal.sign);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True literals in ascending variable order
    pub fn literals(&self) -> impl Iterator<Item=CNFVar> + '_ {
        self.0.iter().map(|(id, sign)| CNFVar::new(*id, *sign))
    }

    /// Checks that every clause has a true literal.
    /// Variables missing from the model make their literals false.
    pub fn satisfies(&self, formula: &CNF) -> bool {
        formula.clauses.par_iter()
            .all(|clause| clause.vars.iter().any(|var| self.value(var.id) == Some(var.sign)))
    }
}

impl FromIterator<CNFVar> for Model {
    fn from_iter<I: IntoIterator<Item=CNFVar>>(iter: I) -> Self {
        let mut model = Model::default();
        iter.into_iter().for_each(|literal| model.insert(literal));
        model
    }
}

impl DecisionTree {
    /// Next node on the satisfying path
    fn next_model_node(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        match (node.child(false), node.child(true)) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => {
                if self.node(child).is_conflict() {
                    panic!("internal error: the only child {:?} on the model path is a conflict", child);
                }
                Some(child)
            },
            (Some(negative), Some(positive)) => {
                match (self.node(negative).is_conflict(), self.node(positive).is_conflict()) {
                    (true, false) => Some(positive),
                    (false, true) => Some(negative),
                    (true, true) => panic!("internal error: both children of {:?} on the model path are conflicts", id),
                    (false, false) => panic!("internal error: both children of {:?} on the model path are valid", id),
                }
            },
        }
    }

    /// Reads the satisfying assignment off a finished search.
    ///
    /// Every variable of the input formula starts out true and is then
    /// overwritten by the assignments along the path. Returns `None` for
    /// an unsatisfiable formula.
    pub fn model(&self) -> Option<Model> {
        if self.is_unsat() {
            return None;
        }

        let root = self.root();
        let mut model: Model = self.node(root).formula().vars()
            .into_iter()
            .map(CNFVar::pos)
            .collect();

        let mut current = self.next_model_node(root);
        while let Some(id) = current {
            match self.node(id).literal() {
                Some(literal) => model.insert(literal),
                None => panic!("internal error: node {:?} below the root has no literal", id),
            }
            current = self.next_model_node(id);
        }

        log::debug!(target: targets::MODEL, "Model of {} variables", model.len());
        Some(model)
    }

    /// The verdict of a finished search
    pub fn solution(&self) -> SATSolution {
        match self.model() {
            Some(model) => SATSolution::Satisfiable(model),
            None => SATSolution::Unsatisfiable,
        }
    }
}
