mod common;

use common::{formula, lit};
use dz3::{
    Bruteforce, CNF, SATSolution, SatisfactionSolver, Solver,
    propagation::find_unit_literal,
};

#[test]
fn conflicting_unit_clauses_are_unsat() {
    let cnf = formula(&[&[1], &[-1]]);
    let tree = SatisfactionSolver::new().search(&cnf);

    assert!(tree.is_unsat());
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.solution(), SATSolution::Unsatisfiable);
}

#[test]
fn unit_propagation_alone_solves() {
    let cnf = formula(&[&[1, -2], &[2]]);
    let tree = SatisfactionSolver::new().search(&cnf);

    assert!(!tree.is_unsat());
    assert_eq!(tree.to_string(), "root\n\t 2 [I][ ]\n\t\t 1 [I][ ]\n");

    let model = tree.model().expect("formula is satisfiable");
    assert_eq!(model.value(1), Some(true));
    assert_eq!(model.value(2), Some(true));
    assert_eq!(model.len(), 2);
}

#[test]
fn pure_literal_solves_without_branching() {
    let cnf = formula(&[&[1, 2], &[1, -2]]);
    let tree = SatisfactionSolver::new().search(&cnf);

    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.to_string(), "root\n\t 1 [I][ ]\n");

    let model = tree.model().expect("formula is satisfiable");
    assert_eq!(model.value(1), Some(true));
    // never assigned, defaults to true
    assert_eq!(model.value(2), Some(true));
}

#[test]
fn propagated_unit_clauses_conflict() {
    let cnf = formula(&[&[1], &[-1, 2], &[-2]]);
    let tree = SatisfactionSolver::new().search(&cnf);

    assert!(tree.is_unsat());
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn empty_formula_is_sat_with_empty_model() {
    let cnf = CNF::empty(3);
    let solution = SatisfactionSolver::new().solve(&cnf);

    assert!(solution.is_sat());
    assert!(solution.model().map_or(false, |model| model.is_empty()));
}

#[test]
fn empty_input_clause_is_unsat() {
    let cnf = formula(&[&[1, 2], &[]]);
    let solver = SatisfactionSolver::new();

    assert!(solver.solve(&cnf).is_unsat());
    assert!(Bruteforce::Bruteforce.solve(&cnf).is_unsat());
}

#[test]
fn second_branch_after_conflict() {
    let cnf = formula(&[&[1, 2], &[-1, 3], &[-1, -3], &[-2, 4], &[2, -4]]);
    assert_eq!(find_unit_literal(&cnf), None);

    let tree = SatisfactionSolver::new().search(&cnf);

    assert_eq!(tree.to_string(), "root\n\t-1 [ ][ ]\n\t\t 2 [I][ ]\n\t\t\t 4 [I][ ]\n\t 1 [ ][C]\n");
    assert_eq!(tree.node_count(), 5);

    let model = tree.model().expect("formula is satisfiable");
    assert_eq!(model.literals().collect::<Vec<_>>(), vec![lit(-1), lit(2), lit(3), lit(4)]);
    assert!(model.satisfies(&cnf));
}

#[test]
fn both_branches_failing_is_unsat() {
    let cnf = formula(&[&[1, 2], &[1, -2], &[-1, 3], &[-1, -3]]);
    let tree = SatisfactionSolver::new().search(&cnf);

    assert!(tree.is_unsat());
    // everything below the root was pruned on the way up
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.to_string(), "root\n");
}

#[test]
fn deeper_backtracking_finds_a_model() {
    // 1 and 2 both fail, leaving 3 and 6
    let cnf = formula(&[
        &[1, 2, 3],
        &[-1, 4], &[-1, -4],
        &[-2, 5], &[-2, -5],
        &[3, 6], &[-3, 6, 1], &[-6, 2, 3],
    ]);
    let solution = SatisfactionSolver::new().solve(&cnf);

    assert!(solution.is_sat());
    assert!(solution.model().map_or(false, |model| model.satisfies(&cnf)));
}

#[test]
fn progress_is_reported_every_interval() {
    let cnf = formula(&[&[1, 2], &[-1, 3], &[-1, -3], &[-2, 4], &[2, -4]]);
    let mut counts: Vec<usize> = Vec::new();
    {
        let solver = SatisfactionSolver::new().with_progress(1, |nodes: usize| counts.push(nodes));
        solver.search(&cnf);
    }
    assert_eq!(counts, vec![1, 2]);

    let solver = SatisfactionSolver::new().with_progress(0, |_: usize| panic!("reporting is off"));
    assert!(solver.solve(&cnf).is_sat());
}

#[test]
fn solvers_work_through_references_and_boxes() {
    let cnf = formula(&[&[1, -2], &[2]]);
    let solvers: Vec<Box<dyn Solver>> = vec![
        Box::new(SatisfactionSolver::new()),
        Box::new(Bruteforce::Bruteforce),
    ];

    for solver in &solvers {
        assert!(solver.solve(&cnf).is_sat());
    }
    assert!((&SatisfactionSolver::new()).solve(&cnf).is_sat());
}

/// Pigeonhole formula: `pigeons` pigeons in `holes` holes, one per hole
fn pigeonhole(pigeons: usize, holes: usize) -> CNF {
    let var = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as i32;
    let mut clauses: Vec<Vec<i32>> = (0..pigeons)
        .map(|pigeon| (0..holes).map(|hole| var(pigeon, hole)).collect())
        .collect();
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in first + 1..pigeons {
                clauses.push(vec![-var(first, hole), -var(second, hole)]);
            }
        }
    }
    let clauses: Vec<&[i32]> = clauses.iter().map(Vec::as_slice).collect();
    formula(&clauses)
}

#[test]
fn arena_stays_within_the_live_tree() {
    let cnf = pigeonhole(5, 4);
    let num_variables = cnf.vars().len();

    let tree = SatisfactionSolver::new().search(&cnf);

    assert!(tree.is_unsat());
    assert_eq!(tree.node_count(), 1);
    assert!(tree.slot_count() <= 2 * num_variables + 1);
}
