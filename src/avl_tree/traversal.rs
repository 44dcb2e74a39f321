use crate::avl_tree::{AvlTree, Side, NIL};
use crate::processing_stack::ProcessingStack;

/// Phase of a single stack frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    VisitLeft,
    ReturnValue,
    VisitRight,
    PopFrame,
}

/// Every order runs the same four phases per node, only the sequence differs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TraversalOrder {
    InOrder,
    Reverse,
    PostOrder,
    PreOrder,
}

impl TraversalOrder {
    /// Step a freshly pushed frame starts in
    fn first_step(self) -> Step {
        match self {
            TraversalOrder::InOrder | TraversalOrder::PostOrder => Step::VisitLeft,
            TraversalOrder::Reverse => Step::VisitRight,
            TraversalOrder::PreOrder => Step::ReturnValue,
        }
    }

    /// Step which follows `step` in this order
    fn after(self, step: Step) -> Step {
        use Step::*;
        use TraversalOrder::*;
        match (self, step) {
            (_, PopFrame) => PopFrame,
            (InOrder, VisitLeft) => ReturnValue,
            (InOrder, ReturnValue) => VisitRight,
            (InOrder, VisitRight) => PopFrame,
            (Reverse, VisitRight) => ReturnValue,
            (Reverse, ReturnValue) => VisitLeft,
            (Reverse, VisitLeft) => PopFrame,
            (PostOrder, VisitLeft) => VisitRight,
            (PostOrder, VisitRight) => ReturnValue,
            (PostOrder, ReturnValue) => PopFrame,
            (PreOrder, ReturnValue) => VisitLeft,
            (PreOrder, VisitLeft) => VisitRight,
            (PreOrder, VisitRight) => PopFrame,
        }
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Drive the stack machine over every node in `order`.
    ///
    /// `visit` is called with the node id and stops the traversal by returning false.
    /// `filter` is asked, with the side and the parent's value, whether a child subtree is pushed.
    ///
    /// Returns true if the traversal ran to completion.
    pub(crate) fn traverse<V, F>(&self, order: TraversalOrder, mut visit: V, mut filter: F) -> bool
    where
        V: FnMut(u32) -> bool,
        F: FnMut(Side, &T) -> bool,
    {
        if self.get_root() == NIL {
            return true;
        }

        let mut stack = ProcessingStack::new();
        stack.push(self.get_root(), order.first_step());
        while let Some((&node, step)) = stack.top() {
            stack.set_top_step(order.after(step));
            match step {
                Step::VisitLeft | Step::VisitRight => {
                    let side = if step == Step::VisitLeft {
                        Side::Left
                    } else {
                        Side::Right
                    };
                    let child = self.get_child(node, side);
                    if child != NIL && filter(side, self.read(node)) {
                        stack.push(child, order.first_step());
                    }
                }
                Step::ReturnValue => {
                    if !visit(node) {
                        return false;
                    }
                }
                Step::PopFrame => stack.discard_top(),
            }
        }
        true
    }

    /// Visit nodes parent first, then the left and right subtrees
    pub(crate) fn pre_order<V>(&self, visit: V) -> bool
    where
        V: FnMut(u32) -> bool,
    {
        self.traverse(TraversalOrder::PreOrder, visit, |_, _| true)
    }

    /// Visit every value in ascending order until `visitor` returns false
    /// Returns true if every value was visited
    pub fn in_order<V>(&self, mut visitor: V) -> bool
    where
        V: FnMut(&T) -> bool,
    {
        self.traverse(
            TraversalOrder::InOrder,
            |node| visitor(self.read(node)),
            |_, _| true,
        )
    }

    fn in_order_filtered<V, F>(&self, mut visitor: V, filter: F) -> bool
    where
        V: FnMut(&T) -> bool,
        F: FnMut(Side, &T) -> bool,
    {
        self.traverse(
            TraversalOrder::InOrder,
            |node| visitor(self.read(node)),
            filter,
        )
    }

    /// Visit, in ascending order, the values which are not smaller than `start`
    ///
    /// Left subtrees of nodes smaller than `start` are never entered.
    pub fn in_order_from<V>(&self, start: &T, mut visitor: V) -> bool
    where
        V: FnMut(&T) -> bool,
    {
        self.in_order_filtered(
            |value| self.is_smaller(value, start) || visitor(value),
            |side, value| side == Side::Right || !self.is_smaller(value, start),
        )
    }

    /// Visit every value in descending order until `visitor` returns false
    /// Returns true if every value was visited
    pub fn reverse_order<V>(&self, mut visitor: V) -> bool
    where
        V: FnMut(&T) -> bool,
    {
        self.traverse(
            TraversalOrder::Reverse,
            |node| visitor(self.read(node)),
            |_, _| true,
        )
    }

    /// Visit every value after both of its subtrees, until `visitor` returns false
    /// Returns true if every value was visited
    pub fn post_order<V>(&self, mut visitor: V) -> bool
    where
        V: FnMut(&T) -> bool,
    {
        self.traverse(
            TraversalOrder::PostOrder,
            |node| visitor(self.read(node)),
            |_, _| true,
        )
    }
}
