use crate::avl_tree::traversal::TraversalOrder;
use crate::avl_tree::{AvlTree, NIL};
use thiserror::Error;

/// A broken structural invariant, found by `AvlTree::check_invariants`
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("node {node} is ordered before its in-order predecessor {predecessor}")]
    OutOfOrder { node: u32, predecessor: u32 },
    #[error("node {node} has balance factor {balance}")]
    Unbalanced { node: u32, balance: i16 },
    #[error("node {node} names {parent} as parent but is not one of its children")]
    ParentMismatch { node: u32, parent: u32 },
    #[error("root {root} has parent {parent}")]
    RootHasParent { root: u32, parent: u32 },
    #[error("node {node} stores depth {stored}, expected {expected}")]
    WrongDepth { node: u32, stored: u8, expected: u8 },
    #[error("{reached} nodes are reachable from the root but the tree holds {expected}")]
    Unreachable { reached: usize, expected: usize },
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Check ordering, balance, parent links and depths of every node.
    ///
    /// Ordering is checked on the in-order sequence, which must never step down. Equal values can
    /// end up in a left subtree after a rotation, so a strict left/right split is not required.
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let root = self.get_root();
        if root != NIL && self.get_parent(root) != NIL {
            return Err(InvariantViolation::RootHasParent {
                root,
                parent: self.get_parent(root),
            });
        }

        let mut violation = None;
        let mut reached = 0;
        self.traverse(
            TraversalOrder::PostOrder,
            |node| {
                reached += 1;
                violation = self.check_node(node).err();
                violation.is_none()
            },
            |_, _| true,
        );
        if let Some(violation) = violation.take() {
            return Err(violation);
        }
        if reached != self.len() {
            return Err(InvariantViolation::Unreachable {
                reached,
                expected: self.len(),
            });
        }

        let mut predecessor = NIL;
        self.traverse(
            TraversalOrder::InOrder,
            |node| {
                if predecessor != NIL && self.is_smaller(self.read(node), self.read(predecessor)) {
                    violation = Some(InvariantViolation::OutOfOrder { node, predecessor });
                }
                predecessor = node;
                violation.is_none()
            },
            |_, _| true,
        );
        match violation {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Checks which only need the node and its direct neighbours
    fn check_node(&self, node: u32) -> Result<(), InvariantViolation> {
        let parent = self.get_parent(node);
        if parent != NIL && self.get_left(parent) != node && self.get_right(parent) != node {
            return Err(InvariantViolation::ParentMismatch { node, parent });
        }
        for &child in &[self.get_left(node), self.get_right(node)] {
            if child != NIL && self.get_parent(child) != node {
                return Err(InvariantViolation::ParentMismatch {
                    node: child,
                    parent: self.get_parent(child),
                });
            }
        }

        let expected = u8::max(
            self.height(self.get_left(node)),
            self.height(self.get_right(node)),
        );
        if self.get_depth(node) != expected {
            return Err(InvariantViolation::WrongDepth {
                node,
                stored: self.get_depth(node),
                expected,
            });
        }

        let balance = self.balance_factor(node);
        if !(-1..=1).contains(&balance) {
            return Err(InvariantViolation::Unbalanced { node, balance });
        }
        Ok(())
    }
}
