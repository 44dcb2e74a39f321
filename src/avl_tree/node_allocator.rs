use crate::avl_tree::NIL;

/// Hands out node ids for the arena
/// Nodes are never removed from the tree, so ids are dense: 1, 2, .., size
#[derive(Clone, Debug)]
pub struct NodeAllocator {
    /// The next node id which will be allocated.
    next_node: u32,
}

impl NodeAllocator {
    pub fn new() -> Self {
        NodeAllocator { next_node: NIL + 1 }
    }

    /// Returns a fresh node id
    pub fn new_node(&mut self) -> u32 {
        assert!(self.next_node < u32::MAX);
        let node = self.next_node;
        self.next_node += 1;
        node
    }

    /// Returns true if `node` has been handed out by this allocator
    pub fn is_allocated(&self, node: u32) -> bool {
        node != NIL && node < self.next_node
    }

    /// Number of ids handed out so far
    pub fn size(&self) -> u32 {
        self.next_node - 1
    }
}

impl Default for NodeAllocator {
    fn default() -> Self {
        Self::new()
    }
}
