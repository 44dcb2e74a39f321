use crate::avl_tree::node_allocator::NodeAllocator;
use crate::avl_tree::{node_id_to_option, Side, NIL};
use crate::comparators::less;
use log::trace;
use std::fmt;

/// Number of node slots reserved by `AvlTree::new` and `AvlTree::default`
pub const DEFAULT_CAPACITY: usize = 16;

/// Self-balancing binary search tree ordered by a caller supplied `is_smaller` comparator.
///
/// Nodes live in an arena of parallel vectors indexed by node id, `NIL` standing in for a
/// missing node. Children hang off the `left`/`right` links, while `parent` is a back reference
/// used to climb towards the root when rebalancing. Node ids stay valid for the lifetime of the
/// tree as nodes are never removed.
///
/// Values where neither is smaller than the other are placed in the right subtree, so they come
/// out of an in-order traversal in insertion order.
#[derive(Clone)]
pub struct AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    node_allocator: NodeAllocator,
    root: u32,
    parent: Vec<u32>,
    left: Vec<u32>,
    right: Vec<u32>,
    /// 0 for leaves, 1 + the deepest child otherwise
    depth: Vec<u8>,
    /// Value of node `n` lives at `n - 1`
    values: Vec<T>,
    is_smaller: C,
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> bool>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, less::<T> as fn(&T, &T) -> bool)
    }
}

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.values.len() + 1;
        f.debug_struct("AvlTree")
            .field("root", &self.root)
            .field("parent", &&self.parent[..slots])
            .field("left", &&self.left[..slots])
            .field("right", &&self.right[..slots])
            .field("depth", &&self.depth[..slots])
            .field("values", &self.values)
            .finish()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Create an empty tree ordered by `is_smaller`
    /// `is_smaller(a, b)` must return true iff `a` is strictly smaller than `b`
    pub fn new(is_smaller: C) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, is_smaller)
    }

    /// Create an empty tree with room for `capacity` nodes before the arena has to grow
    pub fn with_capacity(capacity: usize, is_smaller: C) -> Self {
        let mut tree = AvlTree {
            node_allocator: NodeAllocator::default(),
            root: NIL,
            parent: Vec::with_capacity(capacity + 1),
            left: Vec::with_capacity(capacity + 1),
            right: Vec::with_capacity(capacity + 1),
            depth: Vec::with_capacity(capacity + 1),
            values: Vec::with_capacity(capacity),
            is_smaller,
        };
        tree.resize(usize::max(capacity + 1, 2));
        tree
    }

    /// Resize the link arrays to `new_capacity` slots
    /// The extra node slots are filled with NIL
    fn resize(&mut self, new_capacity: usize) {
        self.parent.resize(new_capacity, NIL);
        self.left.resize(new_capacity, NIL);
        self.right.resize(new_capacity, NIL);
        self.depth.resize(new_capacity, 0);
    }

    /// Returns the number of node slots, including the NIL slot
    fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Return the current root of the tree
    #[inline]
    pub(crate) fn get_root(&self) -> u32 {
        self.root
    }

    /// Return the parent of the node
    #[inline]
    pub(crate) fn get_parent(&self, node: u32) -> u32 {
        self.parent[node as usize]
    }

    /// Set the parent of the node
    #[inline]
    pub(crate) fn set_parent(&mut self, node: u32, item: u32) {
        assert!(node != NIL);
        self.parent[node as usize] = item;
    }

    /// Return the left child of the node
    #[inline]
    pub(crate) fn get_left(&self, node: u32) -> u32 {
        self.left[node as usize]
    }

    /// Set the left child of the node
    #[inline]
    pub(crate) fn set_left(&mut self, node: u32, item: u32) {
        assert!(node != NIL);
        self.left[node as usize] = item;
    }

    /// Return the right child of the node
    #[inline]
    pub(crate) fn get_right(&self, node: u32) -> u32 {
        self.right[node as usize]
    }

    /// Set the right child of the node
    #[inline]
    pub(crate) fn set_right(&mut self, node: u32, item: u32) {
        assert!(node != NIL);
        self.right[node as usize] = item;
    }

    /// Return the child of the node on `side`
    #[inline]
    pub(crate) fn get_child(&self, node: u32, side: Side) -> u32 {
        match side {
            Side::Left => self.get_left(node),
            Side::Right => self.get_right(node),
        }
    }

    /// Return the depth of the node
    #[inline]
    pub(crate) fn get_depth(&self, node: u32) -> u8 {
        self.depth[node as usize]
    }

    /// Set the depth of the node
    #[inline]
    pub(crate) fn set_depth(&mut self, node: u32, item: u8) {
        assert!(node != NIL);
        self.depth[node as usize] = item;
    }

    /// Return the value held by `node`
    /// `node` must not be NIL
    #[inline]
    pub(crate) fn read(&self, node: u32) -> &T {
        &self.values[node as usize - 1]
    }

    /// Compare two values with the tree's comparator
    #[inline]
    pub(crate) fn is_smaller(&self, a: &T, b: &T) -> bool {
        (self.is_smaller)(a, b)
    }

    fn checked(&self, node: u32) -> Option<u32> {
        if self.node_allocator.is_allocated(node) {
            Some(node)
        } else {
            None
        }
    }

    /// Return the root node of the tree
    pub fn root(&self) -> Option<u32> {
        node_id_to_option(self.root)
    }

    /// Return the number of values in the tree
    pub fn len(&self) -> usize {
        self.node_allocator.size() as usize
    }

    /// Return true if the tree holds no values
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Return the value held by `node`, None if `node` is not part of the tree
    pub fn value(&self, node: u32) -> Option<&T> {
        self.checked(node).map(|node| self.read(node))
    }

    /// Return the depth of `node`, 0 for a leaf
    pub fn depth(&self, node: u32) -> Option<u8> {
        self.checked(node).map(|node| self.get_depth(node))
    }

    /// Return the parent of `node`, None for the root or a node not in the tree
    pub fn parent(&self, node: u32) -> Option<u32> {
        self.checked(node)
            .and_then(|node| node_id_to_option(self.get_parent(node)))
    }

    /// Return the left child of `node`
    pub fn left(&self, node: u32) -> Option<u32> {
        self.checked(node)
            .and_then(|node| node_id_to_option(self.get_left(node)))
    }

    /// Return the right child of `node`
    pub fn right(&self, node: u32) -> Option<u32> {
        self.checked(node)
            .and_then(|node| node_id_to_option(self.get_right(node)))
    }

    /// Add a value to the tree and return the id of the node holding it
    pub fn add(&mut self, value: T) -> u32 {
        let node = self.node_allocator.new_node();
        if node as usize >= self.capacity() {
            self.resize(2 * node as usize);
        }
        self.values.push(value);

        if self.root == NIL {
            self.root = node;
            return node;
        }

        let mut parent = self.root;
        assert!(self.get_parent(self.root) == NIL);
        let side = loop {
            let side = if self.is_smaller(self.read(node), self.read(parent)) {
                Side::Left
            } else {
                Side::Right
            };
            let child = self.get_child(parent, side);
            if child == NIL {
                break side;
            }
            parent = child;
        };

        self.set_parent(node, parent);
        match side {
            Side::Left => self.set_left(parent, node),
            Side::Right => self.set_right(parent, node),
        }

        self.fix_depth_upward(parent);
        self.rebalance_upward(parent);
        node
    }

    /// Find a node holding a value equivalent to `value`
    /// Returns None if not found
    pub fn find(&self, value: &T) -> Option<u32> {
        let mut node = self.root;
        while node != NIL {
            let current = self.read(node);
            if self.is_smaller(value, current) {
                node = self.get_left(node);
            } else if self.is_smaller(current, value) {
                node = self.get_right(node);
            } else {
                return Some(node);
            }
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the node holding the least value, None for an empty tree
    pub fn first(&self) -> Option<u32> {
        node_id_to_option(self.leftmost(self.root))
    }

    /// Returns the node holding the greatest value, None for an empty tree
    pub fn last(&self) -> Option<u32> {
        node_id_to_option(self.rightmost(self.root))
    }

    /// Returns the least node under `node`
    fn leftmost(&self, mut node: u32) -> u32 {
        if node == NIL {
            return NIL;
        }
        loop {
            let left = self.get_left(node);
            if left == NIL {
                return node;
            }
            node = left;
        }
    }

    /// Returns the greatest node under `node`
    fn rightmost(&self, mut node: u32) -> u32 {
        if node == NIL {
            return NIL;
        }
        loop {
            let right = self.get_right(node);
            if right == NIL {
                return node;
            }
            node = right;
        }
    }

    /// Returns the node following `node` in order, None if `node` is the last
    pub fn next(&self, node: u32) -> Option<u32> {
        let mut node = self.checked(node)?;
        let right = self.get_right(node);
        if right != NIL {
            return Some(self.leftmost(right));
        }
        let mut parent = self.get_parent(node);
        while parent != NIL && node == self.get_right(parent) {
            node = parent;
            parent = self.get_parent(parent);
        }
        node_id_to_option(parent)
    }

    /// Returns the node preceding `node` in order, None if `node` is the first
    pub fn prev(&self, node: u32) -> Option<u32> {
        let mut node = self.checked(node)?;
        let left = self.get_left(node);
        if left != NIL {
            return Some(self.rightmost(left));
        }
        let mut parent = self.get_parent(node);
        while parent != NIL && node == self.get_left(parent) {
            node = parent;
            parent = self.get_parent(parent);
        }
        node_id_to_option(parent)
    }

    /// Iterate over the values in ascending order
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            current_node: self.first(),
            tree: self,
        }
    }

    /// Height of the subtree under `node`, 0 for NIL
    #[inline]
    pub(crate) fn height(&self, node: u32) -> u8 {
        if node == NIL {
            0
        } else {
            self.get_depth(node) + 1
        }
    }

    /// Returns the balance of the avl tree node
    pub(crate) fn balance_factor(&self, node: u32) -> i16 {
        self.height(self.get_left(node)) as i16 - self.height(self.get_right(node)) as i16
    }

    /// Recompute the depth of `node` from its children
    /// Returns true if the stored depth changed
    fn fix_depth(&mut self, node: u32) -> bool {
        let left_height = self.height(self.get_left(node));
        let right_height = self.height(self.get_right(node));
        let depth = u8::max(left_height, right_height);
        let changed = depth != self.get_depth(node);
        self.set_depth(node, depth);
        changed
    }

    /// Recompute depths from `node` towards the root
    /// Stops at the first node whose depth did not change
    fn fix_depth_upward(&mut self, node: u32) {
        let mut n = node;
        while n != NIL && self.fix_depth(n) {
            n = self.get_parent(n);
        }
    }

    /// Rebalance every node from `node` up to the root
    fn rebalance_upward(&mut self, node: u32) {
        let mut n = node;
        while n != NIL {
            self.fix_depth(n);
            let subtree_root = self.rebalance(n);
            n = self.get_parent(subtree_root);
        }
    }

    /// Rebalance a single node
    /// Returns the root of the subtree which `node` was the root of before
    fn rebalance(&mut self, node: u32) -> u32 {
        match self.balance_factor(node) {
            diff if diff >= 2 => {
                let left = self.get_left(node);
                if self.height(self.get_left(left)) >= self.height(self.get_right(left)) {
                    trace!("rotate right at node {}", node);
                    self.rotate_right(node)
                } else {
                    trace!("double rotate right at node {}", node);
                    self.rotate_double_right(node)
                }
            }
            diff if diff <= -2 => {
                let right = self.get_right(node);
                if self.height(self.get_right(right)) >= self.height(self.get_left(right)) {
                    trace!("rotate left at node {}", node);
                    self.rotate_left(node)
                } else {
                    trace!("double rotate left at node {}", node);
                    self.rotate_double_left(node)
                }
            }
            _ => node,
        }
    }

    /// Hang `new_root` where `old_root` used to be, under `old_root`'s parent or as the tree root
    fn replace_child(&mut self, old_root: u32, new_root: u32) {
        let p = self.get_parent(old_root);
        self.set_parent(new_root, p);
        if p == NIL {
            trace!("node {} replaces node {} as root", new_root, old_root);
            self.root = new_root;
        } else if self.get_left(p) == old_root {
            self.set_left(p, new_root);
        } else {
            assert!(self.get_right(p) == old_root);
            self.set_right(p, new_root);
        }
    }

    /// Rotate the subtree under node `n` left
    /// Returns the new root of the subtree
    fn rotate_left(&mut self, n: u32) -> u32 {
        let r = self.get_right(n);
        let rl = self.get_left(r);

        self.set_right(n, rl);
        if rl != NIL {
            self.set_parent(rl, n);
        }

        self.replace_child(n, r);

        self.set_left(r, n);
        self.set_parent(n, r);
        self.fix_depth(n);
        self.fix_depth(r);
        r
    }

    /// Rotate the subtree under node `n` right
    /// Returns the new root of the subtree
    fn rotate_right(&mut self, n: u32) -> u32 {
        let l = self.get_left(n);
        let lr = self.get_right(l);

        self.set_left(n, lr);
        if lr != NIL {
            self.set_parent(lr, n);
        }

        self.replace_child(n, l);

        self.set_right(l, n);
        self.set_parent(n, l);
        self.fix_depth(n);
        self.fix_depth(l);
        l
    }

    /// Left-right case: the left child of `n` leans right
    fn rotate_double_right(&mut self, n: u32) -> u32 {
        let l = self.get_left(n);
        self.rotate_left(l);
        self.rotate_right(n)
    }

    /// Right-left case: the right child of `n` leans left
    fn rotate_double_left(&mut self, n: u32) -> u32 {
        let r = self.get_right(n);
        self.rotate_right(r);
        self.rotate_left(n)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}

/// In-order iterator which walks the parent links instead of keeping a stack
pub struct Iter<'a, T, C>
where
    C: Fn(&T, &T) -> bool,
{
    current_node: Option<u32>,
    tree: &'a AvlTree<T, C>,
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    C: Fn(&T, &T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree;
        let node = self.current_node?;
        self.current_node = tree.next(node);
        Some(tree.read(node))
    }
}

#[cfg(test)]
mod test {
    use crate::avl_tree::{AvlTree, NIL};
    use crate::comparators::{by_key, float_less, less};
    use crate::util::{gen_asc_vec, gen_desc_vec, gen_shuffled_vec, gen_uniform_vec};
    use approx::assert_relative_eq;
    use rand::distributions::{Distribution, Uniform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::Normal;

    type IntTree = AvlTree<i32, fn(&i32, &i32) -> bool>;

    fn tree_from(values: &[i32]) -> IntTree {
        let mut tree = IntTree::default();
        for value in values {
            tree.add(*value);
        }
        tree
    }

    fn value_of(tree: &IntTree, node: Option<u32>) -> Option<i32> {
        node.and_then(|node| tree.value(node)).copied()
    }

    #[test]
    fn empty_tree() {
        let tree = IntTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.find(&3), None);
        assert_eq!(tree.value(NIL), None);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn single_value_is_root_leaf() {
        let tree = tree_from(&[7]);
        let root = tree.root().unwrap();
        assert_eq!(tree.value(root), Some(&7));
        assert_eq!(tree.depth(root), Some(0));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.left(root), None);
        assert_eq!(tree.right(root), None);
    }

    #[test]
    fn ascending_run_rotates_left() {
        let tree = tree_from(&[1, 2, 3, 4, 5]);
        let root = tree.root();
        assert_eq!(value_of(&tree, root), Some(2));
        assert_eq!(value_of(&tree, tree.left(root.unwrap())), Some(1));
        let right = tree.right(root.unwrap());
        assert_eq!(value_of(&tree, right), Some(4));
        assert_eq!(value_of(&tree, tree.left(right.unwrap())), Some(3));
        assert_eq!(value_of(&tree, tree.right(right.unwrap())), Some(5));
        assert_eq!(tree.depth(root.unwrap()), Some(2));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn descending_run_rotates_right() {
        let tree = tree_from(&[5, 4, 3, 2, 1, 0]);
        let root = tree.root().unwrap();
        assert_eq!(value_of(&tree, Some(root)), Some(2));

        let left = tree.left(root);
        assert_eq!(value_of(&tree, left), Some(1));
        assert_eq!(value_of(&tree, tree.left(left.unwrap())), Some(0));
        assert_eq!(tree.right(left.unwrap()), None);

        let right = tree.right(root);
        assert_eq!(value_of(&tree, right), Some(4));
        assert_eq!(value_of(&tree, tree.left(right.unwrap())), Some(3));
        assert_eq!(value_of(&tree, tree.right(right.unwrap())), Some(5));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn zig_zag_uses_double_rotations() {
        // 3, 1, 2 needs a left-right rotation, 1, 3, 2 a right-left rotation
        for values in &[[3, 1, 2], [1, 3, 2]] {
            let tree = tree_from(values);
            let root = tree.root().unwrap();
            assert_eq!(value_of(&tree, Some(root)), Some(2));
            assert_eq!(value_of(&tree, tree.left(root)), Some(1));
            assert_eq!(value_of(&tree, tree.right(root)), Some(3));
            tree.check_invariants().unwrap();
        }
    }

    #[test]
    fn inner_grandchild_imbalance_is_restored() {
        // The left child of 8 has both children when 5 unbalances it
        let tree = tree_from(&[8, 4, 10, 2, 6, 12, 1, 5]);
        tree.check_invariants().unwrap();
        let tree = tree_from(&[8, 4, 10, 2, 6, 5]);
        tree.check_invariants().unwrap();
        assert_eq!(value_of(&tree, tree.root()), Some(6));
    }

    #[test]
    fn invariants_hold_after_every_add() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let uniform = Uniform::from(-500..500);
        let mut tree = IntTree::default();
        for i in 0..1000 {
            tree.add(uniform.sample(&mut rng));
            tree.check_invariants().unwrap();
            assert_eq!(tree.len(), i + 1);
        }
    }

    #[test]
    fn shuffled_values_come_out_sorted() {
        let values = gen_shuffled_vec(2000, 42);
        let mut tree = AvlTree::with_capacity(4, less);
        for value in &values {
            tree.add(*value);
        }
        let mut sorted = values.clone();
        sorted.sort();
        let collected: Vec<i64> = tree.iter().copied().collect();
        assert_eq!(collected, sorted);

        // 2000 nodes fit in an AVL tree no deeper than 1.44 * log2(2000)
        let root = tree.root().unwrap();
        assert!(tree.depth(root).unwrap() <= 15);
    }

    #[test]
    fn ascending_input_stays_balanced() {
        let mut tree = AvlTree::new(float_less);
        for value in gen_asc_vec((1 << 12) - 1) {
            tree.add(value);
        }
        assert_eq!(tree.depth(tree.root().unwrap()), Some(11));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn descending_input_stays_balanced() {
        let mut tree = AvlTree::new(float_less);
        for value in gen_desc_vec((1 << 12) - 1) {
            tree.add(value);
        }
        assert_eq!(tree.depth(tree.root().unwrap()), Some(11));
        assert_eq!(tree.first().and_then(|node| tree.value(node)), Some(&0.0));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn normal_samples_come_out_sorted() {
        let mut rng = StdRng::seed_from_u64(11);
        let normal = Normal::new(500.0, 50.0).unwrap();
        let values: Vec<f64> = (0..2000).map(|_| normal.sample(&mut rng)).collect();
        let mut tree = AvlTree::new(float_less);
        for value in &values {
            tree.add(*value);
        }
        tree.check_invariants().unwrap();

        let collected: Vec<f64> = tree.iter().copied().collect();
        assert!(collected.windows(2).all(|pair| pair[0] <= pair[1]));
        let expected: f64 = values.iter().sum();
        assert_relative_eq!(collected.iter().sum::<f64>(), expected, epsilon = 1e-6);
    }

    #[test]
    fn equal_values_keep_insertion_order() {
        let mut tree = AvlTree::new(by_key(|entry: &(i32, usize)| entry.0));
        let keys = [3, 1, 3, 2, 3, 1, 3];
        for (seq, key) in keys.iter().enumerate() {
            tree.add((*key, seq));
        }
        tree.check_invariants().unwrap();
        let collected: Vec<(i32, usize)> = tree.iter().copied().collect();
        assert_eq!(
            collected,
            vec![(1, 1), (1, 5), (2, 3), (3, 0), (3, 2), (3, 4), (3, 6)]
        );
    }

    #[test]
    fn find_and_contains() {
        let tree = tree_from(&[10, 20, 30, 40, 50, 25]);
        let node = tree.find(&25).unwrap();
        assert_eq!(tree.value(node), Some(&25));
        assert!(tree.contains(&40));
        assert!(!tree.contains(&35));
        assert_eq!(tree.find(&0), None);
    }

    #[test]
    fn first_last_next_prev() {
        let tree = tree_from(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(value_of(&tree, tree.first()), Some(1));
        assert_eq!(value_of(&tree, tree.last()), Some(7));

        let mut forward = Vec::new();
        let mut node = tree.first();
        while let Some(n) = node {
            forward.push(*tree.value(n).unwrap());
            node = tree.next(n);
        }
        assert_eq!(forward, vec![1, 2, 3, 4, 5, 6, 7]);

        let mut backward = Vec::new();
        let mut node = tree.last();
        while let Some(n) = node {
            backward.push(*tree.value(n).unwrap());
            node = tree.prev(n);
        }
        assert_eq!(backward, vec![7, 6, 5, 4, 3, 2, 1]);

        assert_eq!(tree.next(NIL), None);
        assert_eq!(tree.prev(1000), None);
    }

    #[test]
    fn node_ids_survive_rotations() {
        let mut tree = IntTree::default();
        let ids: Vec<u32> = (0..100).map(|value| tree.add(value)).collect();
        for (value, id) in ids.iter().enumerate() {
            assert_eq!(tree.value(*id), Some(&(value as i32)));
        }
        assert_eq!(tree.value(101), None);
    }

    #[test]
    fn unknown_ids_read_as_none() {
        let tree = tree_from(&[2, 1, 3]);
        // Slots past the last node exist in the arena but are not allocated
        for &node in &[NIL, 4, 15, u32::MAX] {
            assert_eq!(tree.value(node), None);
            assert_eq!(tree.depth(node), None);
            assert_eq!(tree.parent(node), None);
            assert_eq!(tree.left(node), None);
            assert_eq!(tree.right(node), None);
            assert_eq!(tree.next(node), None);
            assert_eq!(tree.prev(node), None);
        }
    }

    #[test]
    fn arena_grows_past_initial_capacity() {
        let mut tree = AvlTree::with_capacity(0, less);
        for value in (0..100).rev() {
            tree.add(value);
        }
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.iter().count(), 100);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn float_values_sum_matches() {
        let values = gen_uniform_vec(1001);
        let mut tree = AvlTree::new(float_less);
        for value in &values {
            tree.add(*value);
        }
        let expected: f64 = values.iter().sum();
        let actual: f64 = tree.iter().sum();
        assert_relative_eq!(actual, expected, epsilon = 1e-6);
    }

    #[test]
    fn into_iterator_for_reference() {
        let tree = tree_from(&[2, 1, 3]);
        let mut collected = Vec::new();
        for value in &tree {
            collected.push(*value);
        }
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
