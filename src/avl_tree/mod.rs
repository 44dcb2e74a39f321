pub mod node_allocator;
pub mod node_check;
pub mod traversal;
pub mod tree;
pub mod validate;

pub use node_check::{NodeCheck, NodeRecord};
pub use tree::{AvlTree, Iter, DEFAULT_CAPACITY};
pub use validate::InvariantViolation;

/// Indicates empty node without the overhead of Some/None
pub const NIL: u32 = 0;

/// Converts a raw node id into an option
/// None if node == NIL
/// Some(node) otherwise
pub fn node_id_to_option(node: u32) -> Option<u32> {
    if node != NIL {
        Some(node)
    } else {
        None
    }
}

/// Which child of a node is meant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
