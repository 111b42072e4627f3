/// The CNF representation of a formula
pub mod cnf;
/// The Solver trait which has to be implemented by each solver
pub mod sat_solver;
/// Module that specifies the output of a solver
mod sat_solution;
/// Errors of reading the input
mod error;
/// Search tree of the DPLL solver
pub mod tree;
/// Unit clause propagation over the decision tree
pub mod propagation;
pub mod pure_literal;
/// Literal selection and conflict resolution
mod backtrack;
/// Module that contains the custom DPLL solver
pub mod dpll;
/// Extraction of a satisfying assignment from the decision tree
pub mod model;
pub mod bruteforce;
pub mod misc;
mod util;

pub use cnf::{CNFClause, CNFVar, Simplified, VarId, CNF};
pub use sat_solver::Solver;
pub use sat_solution::SATSolution;
pub use error::{Error, Result};
pub use tree::{DecisionNode, DecisionTree, NodeId};
pub use dpll::{LogProgress, NoProgress, ProgressObserver, SatisfactionSolver};
pub use model::Model;
pub use bruteforce::Bruteforce;
