use auto_impl::auto_impl;

use crate::{CNF, SATSolution};

/// Decides satisfiability of a formula
#[auto_impl(&, Box)]
pub trait Solver {
    fn solve(&self, formula: &CNF) -> SATSolution;
}
