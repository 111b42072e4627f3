use std::convert::TryFrom;
use std::fmt;
use std::fs;
use std::iter::FromIterator;
use std::ops::Neg;
use std::path::Path;
use itertools::Itertools;
use rand::Rng;
use rand::seq::index;

use dimacs::parse_dimacs;
use crate::{Error, Result};

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    /// Number of variables declared by the problem line
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of literals)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNFClause {
    /// Vector of inner literals
    pub vars: Vec<CNFVar>,
}

/// Literal, a logical variable with a polarity
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct CNFVar {
    /// Identifier of a variable
    pub id: VarId,
    /// Variable is negated iff `sign == false`
    pub sign: bool,
}

/// Result of assigning a literal to a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Simplified {
    /// The formula left after dropping satisfied clauses
    /// and removing falsified literals.
    Formula(CNF),
    /// Some clause lost its last literal.
    Conflict,
}

impl CNF {
    /// Creates an empty CNF formula
    pub fn empty(num_variables: usize) -> CNF {
        CNF{clauses: Vec::new(), num_variables}
    }

    /// Creates a formula out of clauses, declaring as many variables
    /// as the highest identifier used
    pub fn from_clauses(clauses: Vec<CNFClause>) -> CNF {
        let num_variables = clauses.iter()
            .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
            .max()
            .unwrap_or(0);
        CNF{clauses, num_variables}
    }

    /// Inserts a new clause into the formula
    pub fn push(&mut self, c: CNFClause) {
        self.num_variables = c.vars.iter()
            .map(CNFVar::id)
            .fold(self.num_variables, usize::max);
        self.clauses.push(c)
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// A formula without clauses is trivially satisfied
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Collects all variable identifiers that appear in the formula,
    /// in ascending order
    pub fn vars(&self) -> Vec<VarId> {
        self.clauses.iter()
            .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
            .sorted()
            .dedup()
            .collect()
    }

    /// Checks for a clause with no literals left
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(CNFClause::is_empty)
    }

    /// Assigns `literal` the value true and returns the simplified formula.
    ///
    /// Clauses containing the literal are satisfied and dropped, the
    /// complementary literal is removed from every other clause. A clause
    /// emptied this way turns the whole result into [`Simplified::Conflict`].
    pub fn assign(&self, literal: CNFVar) -> Simplified {
        let complement = -literal;
        let mut clauses = Vec::with_capacity(self.clauses.len());

        for clause in &self.clauses {
            if clause.contains(literal) {
                continue;
            }
            if !clause.contains(complement) {
                clauses.push(clause.clone());
                continue;
            }

            let truncated: CNFClause = clause.vars.iter()
                .copied()
                .filter(|var| *var != complement)
                .collect();
            if truncated.is_empty() {
                return Simplified::Conflict;
            }
            clauses.push(truncated);
        }

        Simplified::Formula(CNF{clauses, num_variables: self.num_variables})
    }

    /// Prints formula in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.num_variables, self.clauses.len());
        for clause in &self.clauses {
            for var in &clause.vars {
                out.push_str(&var.to_i32().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }

    /// Parse DIMACS string into CNF structure.
    ///
    /// Literals repeated within one clause are kept once. Variables have
    /// to fit the signed 32-bit DIMACS literal.
    pub fn from_dimacs(input: &str) -> Result<CNF> {
        match parse_dimacs(input) {
            Ok(dimacs::Instance::Cnf{num_vars, clauses}) => {
                let clauses = clauses.iter()
                    .map(|clause| clause.lits().iter()
                         .map(|lit| Ok(CNFVar {
                             id: dimacs_var_id(lit.var().to_u64())?,
                             sign: lit.sign() == dimacs::Sign::Pos,
                         }))
                         .collect::<Result<Vec<CNFVar>>>()
                         .map(|vars| vars.into_iter().unique().collect()))
                    .collect::<Result<Vec<CNFClause>>>()?;
                Ok(CNF{clauses, num_variables: dimacs_var_id(num_vars)?})
            },
            Ok(_) => Err(Error::UnsupportedInstance),
            Err(err) => Err(Error::Parse(format!("{:?}", err))),
        }
    }

    /// Reads a DIMACS file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<CNF> {
        let content = fs::read_to_string(path)?;
        CNF::from_dimacs(&content)
    }

    /// Generates a uniform random formula with clauses of `clause_len`
    /// distinct variables each
    pub fn random<R: Rng + ?Sized>(num_variables: usize, num_clauses: usize, clause_len: usize, rng: &mut R) -> CNF {
        let clause_len = clause_len.min(num_variables);
        let clauses = (0..num_clauses)
            .map(|_| index::sample(&mut *rng, num_variables, clause_len)
                 .into_iter()
                 .map(|var| CNFVar::new(var + 1, rng.gen::<bool>()))
                 .collect())
            .collect();
        CNF{clauses, num_variables}
    }
}

/// Largest variable identifier a DIMACS literal can carry
pub const MAX_VAR_ID: VarId = i32::MAX as VarId;

fn dimacs_var_id(var: u64) -> Result<VarId> {
    if var > MAX_VAR_ID as u64 {
        return Err(Error::Parse(format!("variable {} is out of range, the maximum is {}", var, MAX_VAR_ID)));
    }
    Ok(var as VarId)
}

impl FromIterator<CNFClause> for CNF {
    fn from_iter<I: IntoIterator<Item=CNFClause>>(iter: I) -> Self {
        CNF::from_clauses(iter.into_iter().collect())
    }
}

impl CNFClause {
    /// Creates a CNF clause containing a single literal
    pub fn single(var: CNFVar) -> CNFClause {
        CNFClause{vars: vec![var]}
    }

    /// Returns number of literals in the clause
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// A unit clause forces the value of its only literal
    pub fn is_unit(&self) -> bool {
        self.vars.len() == 1
    }

    pub fn contains(&self, var: CNFVar) -> bool {
        self.vars.contains(&var)
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item=CNFVar>>(iter: I) -> Self {
        CNFClause{vars: iter.into_iter().collect()}
    }
}

impl CNFVar {
    /// Creates a literal with given identifier and positivity
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar{id, sign}
    }

    /// Creates a positive literal with given identifier
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar{id, sign: true}
    }

    /// Creates a negative literal with given identifier
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar{id, sign: false}
    }

    /// Creates a literal from its signed DIMACS representation
    pub fn from_i32(value: i32) -> CNFVar {
        CNFVar{id: value.unsigned_abs() as VarId, sign: value > 0}
    }

    /// Gets the identifier of a variable
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Converts to signed integer. The absolute value indicates
    /// the identifier and sign states for positivity.
    ///
    /// Panics if the identifier is above [`MAX_VAR_ID`].
    pub fn to_i32(&self) -> i32 {
        let id = match i32::try_from(self.id) {
            Ok(id) => id,
            Err(_) => panic!("variable {} does not fit a DIMACS literal", self.id),
        };
        if self.sign {
            id
        } else {
            -id
        }
    }
}

impl Neg for CNFVar {
    type Output = CNFVar;

    fn neg(self) -> CNFVar {
        CNFVar{id: self.id, sign: !self.sign}
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vars.iter().join(" || "))
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}
