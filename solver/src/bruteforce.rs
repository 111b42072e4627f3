use crate::sat_solver::*;
use crate::{CNF, CNFVar, Model, SATSolution, VarId};

/// A simple CNF solver that naively checks all possible
/// valuations in order to ensure satisfiability
pub enum Bruteforce {
    Bruteforce,
}

impl Solver for Bruteforce {
    fn solve(&self, formula: &CNF) -> SATSolution {
        let vars = formula.vars();
        // initial valuation sets all to false
        let mut valuation = vec![false; vars.len()];
        if guess(formula, &vars, 0, &mut valuation) {
            SATSolution::Satisfiable(to_model(&vars, &valuation))
        } else {
            SATSolution::Unsatisfiable
        }
    }
}

fn to_model(vars: &[VarId], valuation: &[bool]) -> Model {
    vars.iter()
        .zip(valuation)
        .map(|(id, sign)| CNFVar::new(*id, *sign))
        .collect()
}

fn guess(formula: &CNF, vars: &[VarId], change: usize, valuation: &mut Vec<bool>) -> bool {
    if change == valuation.len() {
        to_model(vars, valuation).satisfies(formula)
    } else if guess(formula, vars, change + 1, valuation) {
        true
    } else {
        // set current bit
        valuation[change] = true;
        // try again
        let res = guess(formula, vars, change + 1, valuation);
        if !res {
            // if failed set back to default
            valuation[change] = false;
        }
        res
    }
}
