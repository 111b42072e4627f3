use itertools::Itertools;

use crate::model::Model;

const MAX_LITERALS_PER_LINE: usize = 8;

#[derive(Clone, PartialEq, Eq)]
pub enum SATSolution {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SATSolution {
    pub fn is_sat(&self) -> bool {
        match self {
            SATSolution::Satisfiable(_) => true,
            SATSolution::Unsatisfiable  => false,
        }
    }

    pub fn is_unsat(&self) -> bool {
        !self.is_sat()
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SATSolution::Satisfiable(model) => Some(model),
            SATSolution::Unsatisfiable      => None,
        }
    }

    pub fn to_dimacs(&self) -> String {
        match self {
            SATSolution::Unsatisfiable => "s UNSATISFIABLE\n".to_string(),
            SATSolution::Satisfiable(model) => {
                let mut out = String::from("s SATISFIABLE\n");
                for line in &model.literals().chunks(MAX_LITERALS_PER_LINE) {
                    out.push_str(&format!("v {} 0\n", line.map(|literal| literal.to_i32()).join(" ")));
                }
                out
            }
        }
    }
}

impl std::fmt::Debug for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SATSolution::Unsatisfiable => write!(f, "Unsatisfiable"),
            SATSolution::Satisfiable(model) => {
                writeln!(f, "Satisfiable:")?;
                for line in &model.literals().chunks(MAX_LITERALS_PER_LINE) {
                    writeln!(f, "{}", line.map(|literal| format!("{:>3}", literal.to_i32())).join(" "))?;
                }
                Ok(())
            }
        }
    }
}
