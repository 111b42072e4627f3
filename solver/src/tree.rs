use std::fmt;
use stable_vec::StableVec;

use crate::cnf::{CNF, CNFVar, Simplified};
use crate::misc::log::targets;

/// Stable handle of a node living in a [`DecisionTree`].
///
/// A handle stays valid until the node is pruned, and is never reused
/// for a different node while the old one is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Child slot of a literal: negative literals go to 0, positive ones to 1
pub fn child_index(sign: bool) -> usize {
    sign as usize
}

/// A single assignment in the search, together with the formula
/// simplified under every assignment on the path from the root.
#[derive(Debug)]
pub struct DecisionNode {
    literal: Option<CNFVar>,
    implicit: bool,
    conflict: bool,
    formula: CNF,
    children: [Option<NodeId>; 2],
    parent: Option<NodeId>,
}

impl DecisionNode {
    /// Assigned literal, `None` only at the root
    pub fn literal(&self) -> Option<CNFVar> {
        self.literal
    }

    /// Forced by unit propagation or pure literal elimination,
    /// as opposed to chosen by branching
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    pub fn is_conflict(&self) -> bool {
        self.conflict
    }

    /// Formula left under this node's assignment.
    /// Empty and meaningless once the assignment itself falsified a clause.
    pub fn formula(&self) -> &CNF {
        &self.formula
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, sign: bool) -> Option<NodeId> {
        self.children[child_index(sign)]
    }

    pub fn children(&self) -> impl Iterator<Item=NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    pub fn children_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }

    pub fn has_both_children(&self) -> bool {
        self.children_count() == 2
    }
}

/// Search tree of the DPLL procedure.
///
/// Nodes live in an arena and refer to each other through [`NodeId`]s:
/// a parent owns its children, a child only remembers where its parent is.
/// Slots of pruned nodes are handed out again, so the arena never holds
/// more slots than the tree had live nodes at its largest.
pub struct DecisionTree {
    nodes: StableVec<DecisionNode>,
    free: Vec<usize>,
    root: NodeId,
}

impl DecisionTree {
    /// Creates a tree consisting of the root holding the input formula
    pub fn new(formula: CNF) -> DecisionTree {
        let mut nodes = StableVec::new();
        let root = NodeId(nodes.push(DecisionNode {
            literal: None,
            implicit: false,
            conflict: false,
            formula,
            children: [None, None],
            parent: None,
        }));
        DecisionTree{nodes, free: Vec::new(), root}
    }

    /// Stores `node` in a pruned slot if there is one
    fn allocate(&mut self, node: DecisionNode) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                if self.nodes.insert(index, node).is_some() {
                    panic!("internal error: free slot {} is occupied", index);
                }
                NodeId(index)
            },
            None => NodeId(self.nodes.push(node)),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The verdict carried by the root once the search has finished
    pub fn is_unsat(&self) -> bool {
        self.node(self.root).conflict
    }

    pub fn node(&self, id: NodeId) -> &DecisionNode {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!("internal error: node {} is not in the decision tree", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut DecisionNode {
        match self.nodes.get_mut(id.0) {
            Some(node) => node,
            None => panic!("internal error: node {} is not in the decision tree", id.0),
        }
    }

    /// Number of nodes currently alive
    pub fn node_count(&self) -> usize {
        self.nodes.num_elements()
    }

    /// Number of arena slots in use or kept for reuse
    pub fn slot_count(&self) -> usize {
        self.nodes.next_push_index()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.has_element_at(id.0)
    }

    /// Parent of a node that is known not to be the root
    pub fn parent_of(&self, id: NodeId) -> NodeId {
        match self.node(id).parent {
            Some(parent) => parent,
            None => panic!("internal error: the root has no parent"),
        }
    }

    /// Whether the complementary assignment of `id` was already tried
    pub fn sibling_explored(&self, id: NodeId) -> bool {
        self.node(id).parent
            .map_or(false, |parent| self.node(parent).has_both_children())
    }

    pub fn mark_conflict(&mut self, id: NodeId) {
        log::debug!(target: targets::BACKTRACK, "Conflict at node {}", id.0);
        self.node_mut(id).conflict = true;
    }

    /// Appends a child assigning `literal` under `parent`, holding the
    /// already simplified formula.
    pub fn add_child(&mut self, parent: NodeId, literal: CNFVar, implicit: bool, simplified: Simplified) -> NodeId {
        let slot = child_index(literal.sign);
        if let Some(existing) = self.node(parent).children[slot] {
            panic!("internal error: node {} already has a child for {}, found {}", parent.0, literal, existing.0);
        }

        let (formula, conflict) = match simplified {
            Simplified::Formula(formula) => (formula, false),
            Simplified::Conflict => (CNF::empty(self.node(parent).formula.num_variables), true),
        };

        let child = self.allocate(DecisionNode {
            literal: Some(literal),
            implicit,
            conflict,
            formula,
            children: [None, None],
            parent: Some(parent),
        });
        self.node_mut(parent).children[slot] = Some(child);

        log::trace!(target: targets::SEARCH, "Node {} assigns {} under {}{}{}",
            child.0, literal, parent.0,
            if implicit { " (implicit)" } else { "" },
            if conflict { " (conflict)" } else { "" });
        child
    }

    /// Assigns `literal` by an explicit branching decision
    pub fn branch(&mut self, parent: NodeId, literal: CNFVar) -> NodeId {
        let simplified = self.node(parent).formula.assign(literal);
        self.add_child(parent, literal, false, simplified)
    }

    /// Destroys every descendant of `id`. The node itself stays.
    pub fn remove_children(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        let mut work: Vec<NodeId> = node.children.iter_mut()
            .filter_map(Option::take)
            .collect();

        while let Some(next) = work.pop() {
            match self.nodes.remove(next.0) {
                Some(removed) => {
                    log::trace!(target: targets::BACKTRACK, "Pruned node {}", next.0);
                    work.extend(removed.children.iter().flatten());
                    self.free.push(next.0);
                },
                None => panic!("internal error: node {} was pruned twice", next.0),
            }
        }
    }

    fn format_node(&self, id: NodeId) -> String {
        let node = self.node(id);
        match node.literal {
            None => "root".to_string(),
            Some(literal) => format!("{}{} {}{}",
                if literal.sign { " " } else { "" },
                literal,
                if node.implicit { "[I]" } else { "[ ]" },
                if node.conflict { "[C]" } else { "[ ]" }),
        }
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            writeln!(f, "{}{}", "\t".repeat(depth), self.format_node(id))?;
            // negative child first, hence pushed last
            let children = &self.node(id).children;
            for child in children.iter().rev().flatten() {
                stack.push((*child, depth + 1));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
