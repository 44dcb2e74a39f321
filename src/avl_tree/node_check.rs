use crate::avl_tree::{node_id_to_option, AvlTree, NIL};
use log::debug;
use std::fmt;

/// Snapshot of one node, handed to a `NodeCheck`
#[derive(Debug)]
pub struct NodeRecord<'a, T> {
    pub id: u32,
    pub parent: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub depth: u8,
    pub value: &'a T,
    pub parent_value: Option<&'a T>,
    pub left_value: Option<&'a T>,
    pub right_value: Option<&'a T>,
}

impl<'a, T> fmt::Display for NodeRecord<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NodeCheck: ID: {:X} Value: {}", self.id, self.value)?;
        write!(
            f,
            "Parent ID: {:X}  Left ID: {:X}  Right ID: {:X}",
            self.parent.unwrap_or(NIL),
            self.left.unwrap_or(NIL),
            self.right.unwrap_or(NIL)
        )
    }
}

/// One link in a chain of structural assertions run by `AvlTree::hierarchy_check`.
///
/// Each check sees exactly one node, in pre-order. When its verify function returns true the
/// next check in the chain takes over at the following node. Returning false, or running out of
/// checks, ends the walk. Verify functions are free to panic (e.g. through `assert_eq!`) to
/// report a failure.
pub struct NodeCheck<'c, T> {
    verify: Box<dyn FnMut(&NodeRecord<'_, T>) -> bool + 'c>,
    next: Option<Box<NodeCheck<'c, T>>>,
}

impl<'c, T> NodeCheck<'c, T> {
    pub fn new<V>(verify: V) -> Self
    where
        V: FnMut(&NodeRecord<'_, T>) -> bool + 'c,
    {
        NodeCheck {
            verify: Box::new(verify),
            next: None,
        }
    }

    /// Append `next` to the end of this chain
    pub fn then(mut self, next: NodeCheck<'c, T>) -> Self {
        let tail = match self.next.take() {
            Some(successor) => (*successor).then(next),
            None => next,
        };
        self.next = Some(Box::new(tail));
        self
    }

    /// Number of checks in the chain starting at this one
    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut current = &self.next;
        while let Some(check) = current {
            count += 1;
            current = &check.next;
        }
        count
    }
}

impl<'c, T> fmt::Debug for NodeCheck<'c, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCheck").field("len", &self.len()).finish()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub(crate) fn record(&self, node: u32) -> NodeRecord<'_, T> {
        let parent = node_id_to_option(self.get_parent(node));
        let left = node_id_to_option(self.get_left(node));
        let right = node_id_to_option(self.get_right(node));
        NodeRecord {
            id: node,
            parent,
            left,
            right,
            depth: self.get_depth(node),
            value: self.read(node),
            parent_value: parent.map(|n| self.read(n)),
            left_value: left.map(|n| self.read(n)),
            right_value: right.map(|n| self.read(n)),
        }
    }

    /// Walk the tree in pre-order, running one check of the `validator` chain per node.
    ///
    /// Returns the number of checks which passed. The walk ends at the first failed check or
    /// when the chain is used up.
    pub fn hierarchy_check(&self, validator: NodeCheck<'_, T>) -> usize {
        let mut current = Some(validator);
        let mut passed = 0;
        self.pre_order(|node| {
            let check = match current.as_mut() {
                Some(check) => check,
                None => return false,
            };
            if (check.verify)(&self.record(node)) {
                passed += 1;
                current = current.take().and_then(|check| check.next.map(|next| *next));
            } else {
                current = None;
            }
            current.is_some()
        });
        passed
    }
}

impl<T, C> AvlTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> bool,
{
    /// Write the tree, one node per line, to the debug log
    pub fn dump(&self) {
        for line in self.to_string().lines() {
            debug!("{}", line);
        }
    }
}

/// One line per node in pre-order: id, child ids, value and depth
impl<T, C> fmt::Display for AvlTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.pre_order(|node| {
            result = writeln!(
                f,
                "{:X} [Left {:X} Right {:X} ] # {}  depth: {}",
                node,
                self.get_left(node),
                self.get_right(node),
                self.read(node),
                self.get_depth(node)
            );
            result.is_ok()
        });
        result
    }
}
