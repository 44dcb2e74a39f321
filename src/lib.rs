//! An AVL tree ordered by a caller supplied comparator, traversed through an explicit
//! `ProcessingStack` rather than recursion.

pub mod avl_tree;
pub mod comparators;
pub mod processing_stack;
pub mod util;

pub use avl_tree::AvlTree;
pub use processing_stack::ProcessingStack;
