#![allow(dead_code)]

use dz3::{CNFClause, CNFVar, CNF};

pub fn clause(literals: &[i32]) -> CNFClause {
    literals.iter().copied().map(CNFVar::from_i32).collect()
}

pub fn formula(clauses: &[&[i32]]) -> CNF {
    CNF::from_clauses(clauses.iter().map(|literals| clause(literals)).collect())
}

pub fn lit(value: i32) -> CNFVar {
    CNFVar::from_i32(value)
}
