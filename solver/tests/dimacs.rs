mod common;

use common::{formula, lit};
use dz3::{CNF, CNFVar, Error, Model, SATSolution, SatisfactionSolver, Solver, cnf::MAX_VAR_ID};
use rand::{rngs::StdRng, SeedableRng};

const INPUT: &str = "c a small example
c with two comment lines
p cnf 4 3
1 -2 0
2 3 -1 0
-4 0
";

#[test]
fn parses_comments_problem_line_and_clauses() {
    let cnf = CNF::from_dimacs(INPUT).expect("valid DIMACS");

    assert_eq!(cnf.num_variables, 4);
    assert_eq!(cnf, {
        let mut expected = formula(&[&[1, -2], &[2, 3, -1], &[-4]]);
        expected.num_variables = 4;
        expected
    });
}

#[test]
fn formula_survives_printing_as_dimacs() {
    let cnf = CNF::from_dimacs(INPUT).expect("valid DIMACS");
    assert_eq!(cnf.to_dimacs(), "p cnf 4 3\n1 -2 0\n2 3 -1 0\n-4 0\n");
}

#[test]
fn parsed_formula_is_solved() {
    let cnf = CNF::from_dimacs(INPUT).expect("valid DIMACS");
    let solution = SatisfactionSolver::new().solve(&cnf);

    assert!(solution.is_sat());
    assert!(solution.model().map_or(false, |model| model.satisfies(&cnf)));
}

#[test]
fn garbage_is_a_parse_error() {
    match CNF::from_dimacs("p cnf x y\n1 2 0\n") {
        Err(Error::Parse(_)) => (),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn variables_beyond_dimacs_literals_are_rejected() {
    for input in &["p cnf 3000000000 1\n1 0\n", "p cnf 3000000000 1\n-3000000000 0\n"] {
        match CNF::from_dimacs(input) {
            Err(Error::Parse(_)) => (),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}

#[test]
fn largest_variable_prints_unchanged() {
    let cnf = CNF::from_dimacs("p cnf 2147483647 1\n-2147483647 0\n").unwrap();
    assert_eq!(cnf.clauses[0].vars[0], CNFVar::neg(MAX_VAR_ID));

    let solution = SatisfactionSolver::new().solve(&cnf);
    assert_eq!(solution.to_dimacs(), "s SATISFIABLE\nv -2147483647 0\n");
}

#[test]
#[should_panic(expected = "does not fit a DIMACS literal")]
fn oversized_variable_has_no_dimacs_literal() {
    CNFVar::pos(MAX_VAR_ID + 1).to_i32();
}

#[test]
fn missing_file_is_an_io_error() {
    match CNF::from_file("/nonexistent/formula.cnf") {
        Err(Error::Io(_)) => (),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn solutions_print_in_dimacs_format() {
    assert_eq!(SATSolution::Unsatisfiable.to_dimacs(), "s UNSATISFIABLE\n");

    let model: Model = vec![lit(2), lit(-1)].into_iter().collect();
    assert_eq!(SATSolution::Satisfiable(model).to_dimacs(), "s SATISFIABLE\nv -1 2 0\n");

    let model: Model = (1..=10).map(|id| lit(if id % 2 == 0 { id } else { -id })).collect();
    assert_eq!(
        SATSolution::Satisfiable(model).to_dimacs(),
        "s SATISFIABLE\nv -1 2 -3 4 -5 6 -7 8 0\nv -9 10 0\n"
    );
}

#[test]
fn formula_prints_one_clause_per_line() {
    let cnf = formula(&[&[1, -2], &[3]]);
    assert_eq!(cnf.to_string(), "1 || -2\n3\n");
}

#[test]
fn random_formulae_have_distinct_variables_per_clause() {
    let mut rng = StdRng::seed_from_u64(42);
    let cnf = CNF::random(10, 40, 3, &mut rng);

    assert_eq!(cnf.num_variables, 10);
    assert_eq!(cnf.len(), 40);
    for clause in &cnf.clauses {
        assert_eq!(clause.len(), 3);
        let mut ids: Vec<_> = clause.vars.iter().map(|var| var.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| (1..=10).contains(id)));
    }
}
