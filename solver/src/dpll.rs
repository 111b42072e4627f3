use std::cell::RefCell;

use crate::{CNF, SATSolution, Solver};
use crate::misc::log::targets;
use crate::tree::DecisionTree;

/// Number of loop iterations between two progress reports
pub const DEFAULT_PROGRESS_INTERVAL: usize = 200;

/// Receives the number of live decision nodes while the search runs
pub trait ProgressObserver {
    fn report(&mut self, nodes: usize);
}

impl<F: FnMut(usize)> ProgressObserver for F {
    fn report(&mut self, nodes: usize) {
        self(nodes)
    }
}

/// Ignores every report
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn report(&mut self, _nodes: usize) {}
}

/// Writes every report to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn report(&mut self, nodes: usize) {
        log::info!(target: targets::SEARCH, "node count: {}", nodes);
    }
}

/// DPLL solver building an explicit decision tree
pub struct SatisfactionSolver<O = NoProgress> {
    progress_interval: usize,
    observer: RefCell<O>,
}

impl SatisfactionSolver<NoProgress> {
    pub fn new() -> SatisfactionSolver<NoProgress> {
        SatisfactionSolver {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            observer: RefCell::new(NoProgress),
        }
    }
}

impl Default for SatisfactionSolver<NoProgress> {
    fn default() -> Self {
        SatisfactionSolver::new()
    }
}

impl<O: ProgressObserver> SatisfactionSolver<O> {
    /// Reports the node count to `observer` every `interval` iterations
    /// of the search loop. An interval of 0 turns reporting off.
    pub fn with_progress<P: ProgressObserver>(self, interval: usize, observer: P) -> SatisfactionSolver<P> {
        SatisfactionSolver {
            progress_interval: interval,
            observer: RefCell::new(observer),
        }
    }

    /// Gives back the observer, e.g. to inspect what it collected
    pub fn into_observer(self) -> O {
        self.observer.into_inner()
    }

    /// Runs the search and returns the whole decision tree.
    ///
    /// A root marked as conflict means the formula is unsatisfiable,
    /// otherwise the satisfying path is the unique path of non-conflict
    /// nodes from the root down to a leaf.
    pub fn search(&self, formula: &CNF) -> DecisionTree {
        log::info!(target: targets::SEARCH, "Solving {} clauses over {} variables", formula.len(), formula.num_variables);

        let mut tree = DecisionTree::new(formula.clone());
        let root = tree.root();

        if formula.has_empty_clause() {
            log::info!(target: targets::SEARCH, "Input contains an empty clause");
            tree.mark_conflict(root);
            return tree;
        }

        let mut current = tree.propagate_units(root);
        if tree.node(current).is_conflict() {
            return tree;
        }
        current = tree.eliminate_pure_literals(current);

        let mut iteration: usize = 0;
        while !tree.node(current).formula().is_empty() || tree.node(current).is_conflict() {
            iteration += 1;
            if self.progress_interval > 0 && iteration % self.progress_interval == 0 {
                self.observer.borrow_mut().report(tree.node_count());
            }

            let literal = if !tree.node(current).is_conflict() {
                tree.select_literal(current)
            } else if !tree.sibling_explored(current) {
                let literal = tree.select_literal(current);
                current = tree.parent_of(current);
                literal
            } else {
                current = tree.backtrack(current);
                if current == root {
                    log::info!(target: targets::SEARCH, "Unsatisfiable after {} iterations", iteration);
                    tree.mark_conflict(root);
                    return tree;
                }
                let literal = tree.sibling_literal(current);
                current = tree.parent_of(current);
                literal
            };

            current = tree.branch(current, literal);
            if tree.node(current).is_conflict() {
                continue;
            }

            current = tree.propagate_units(current);
            if tree.node(current).is_conflict() {
                continue;
            }

            current = tree.eliminate_pure_literals(current);
        }

        log::info!(target: targets::SEARCH, "Satisfiable after {} iterations", iteration);
        tree
    }
}

impl<O: ProgressObserver> Solver for SatisfactionSolver<O> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        self.search(formula).solution()
    }
}
