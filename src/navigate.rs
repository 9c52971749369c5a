//! Tree navigator: document-order walks bounded by the root surface, boundary
//! point comparison and the overlapped-elements walk.

use std::cmp::Ordering;

use crate::traits::DocumentTree;
use crate::types::{Boundary, Range};
use crate::view::TreeView;

/// What counts as a sibling during a document-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Only element siblings; text nodes are stepped over.
    Element,
    /// Every node, text included.
    Node,
}

impl<'a, T: DocumentTree> TreeView<'a, T> {
    /// The next sibling of `node`, or of its nearest ancestor that has one.
    /// Returns `None` at the root surface or on a detached chain.
    pub fn next_in_document_order(&self, node: T::Node, granularity: Granularity) -> Option<T::Node> {
        self.walk(node, true, granularity)
    }

    /// Mirror of [`next_in_document_order`](Self::next_in_document_order).
    pub fn previous_in_document_order(
        &self,
        node: T::Node,
        granularity: Granularity,
    ) -> Option<T::Node> {
        self.walk(node, false, granularity)
    }

    fn walk(&self, node: T::Node, forward: bool, granularity: Granularity) -> Option<T::Node> {
        let mut current = node;
        loop {
            if self.is_root(current) {
                return None;
            }
            if let Some(sibling) = self.sibling(current, forward, granularity) {
                return Some(sibling);
            }
            current = self.tree().parent(current)?;
        }
    }

    fn sibling(&self, node: T::Node, forward: bool, granularity: Granularity) -> Option<T::Node> {
        let tree = self.tree();
        let step = |n: T::Node| {
            if forward {
                tree.next_sibling(n)
            } else {
                tree.previous_sibling(n)
            }
        };

        let mut current = step(node);
        while let Some(n) = current {
            if granularity == Granularity::Node || self.is_element(n) {
                return Some(n);
            }
            current = step(n);
        }
        None
    }

    /// The first non-blank node before a boundary point.
    pub fn node_before(&self, at: &Boundary<T::Node>) -> Option<T::Node> {
        let tree = self.tree();
        let mut candidate = if self.is_element(at.container) && at.offset > 0 {
            let index = at.offset.min(tree.child_count(at.container));
            index.checked_sub(1).and_then(|i| tree.child_at(at.container, i))
        } else {
            self.previous_in_document_order(at.container, Granularity::Node)
        };

        while let Some(n) = candidate {
            if !(self.is_text(n) && self.is_blank(n)) {
                return Some(n);
            }
            candidate = self.previous_in_document_order(n, Granularity::Node);
        }
        None
    }

    /// The first non-blank node after a boundary point.
    pub fn node_after(&self, at: &Boundary<T::Node>) -> Option<T::Node> {
        let tree = self.tree();
        let mut candidate = if self.is_element(at.container) {
            tree.child_at(at.container, at.offset)
                .or_else(|| self.next_in_document_order(at.container, Granularity::Node))
        } else {
            self.next_in_document_order(at.container, Granularity::Node)
        };

        while let Some(n) = candidate {
            if !(self.is_text(n) && self.is_blank(n)) {
                return Some(n);
            }
            candidate = self.next_in_document_order(n, Granularity::Node);
        }
        None
    }

    /// Ancestor chain from the topmost reachable node down to `node`.
    fn path_from_top(&self, node: T::Node) -> Vec<T::Node> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.tree().parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Deepest node that is an inclusive ancestor of both `a` and `b`.
    pub fn common_ancestor(&self, a: T::Node, b: T::Node) -> Option<T::Node> {
        let pa = self.path_from_top(a);
        let pb = self.path_from_top(b);
        pa.iter()
            .zip(&pb)
            .take_while(|(x, y)| x == y)
            .last()
            .map(|(x, _)| *x)
    }

    /// Order two boundary points. `None` when they live in disconnected trees.
    pub fn compare_points(
        &self,
        a: &Boundary<T::Node>,
        b: &Boundary<T::Node>,
    ) -> Option<Ordering> {
        if a.container == b.container {
            return Some(a.offset.cmp(&b.offset));
        }

        let tree = self.tree();
        let pa = self.path_from_top(a.container);
        let pb = self.path_from_top(b.container);
        if pa.first() != pb.first() {
            return None;
        }

        let shared = pa.iter().zip(&pb).take_while(|(x, y)| x == y).count();
        if shared == pa.len() {
            // a's container is an ancestor of b's
            let child = pb[shared];
            return Some(if tree.index_in_parent(child) < a.offset {
                Ordering::Greater
            } else {
                Ordering::Less
            });
        }
        if shared == pb.len() {
            let child = pa[shared];
            return Some(if tree.index_in_parent(child) < b.offset {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }

        Some(
            tree.index_in_parent(pa[shared])
                .cmp(&tree.index_in_parent(pb[shared])),
        )
    }

    /// True if any part of `node` lies strictly inside `range`.
    pub fn intersects(&self, node: T::Node, range: &Range<T::Node>) -> bool {
        let tree = self.tree();
        let Some(parent) = tree.parent(node) else {
            return true;
        };
        let index = tree.index_in_parent(node);
        let before = Boundary::new(parent, index);
        let after = Boundary::new(parent, index + 1);

        self.compare_points(&before, &range.end) == Some(Ordering::Less)
            && self.compare_points(&after, &range.start) == Some(Ordering::Greater)
    }

    /// Elements overlapped by `range`, in document order, below the range's
    /// lowest common ancestor element.
    pub fn overlapped_elements(&self, range: &Range<T::Node>) -> OverlappedElements<'a, T> {
        let walk_root = self
            .common_ancestor(range.start.container, range.end.container)
            .and_then(|n| self.element_of(n));

        let mut stack = Vec::new();
        if let Some(root) = walk_root {
            let children: Vec<_> = self.tree().children(root).collect();
            stack.extend(children.into_iter().rev());
        }

        OverlappedElements {
            view: *self,
            range: *range,
            stack,
        }
    }
}

/// Lazy walk produced by [`TreeView::overlapped_elements`]. Consumed once.
pub struct OverlappedElements<'a, T: DocumentTree> {
    view: TreeView<'a, T>,
    range: Range<T::Node>,
    stack: Vec<T::Node>,
}

impl<T: DocumentTree> Iterator for OverlappedElements<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        while let Some(node) = self.stack.pop() {
            // descendants of a node outside the range are outside too
            if !self.view.intersects(node, &self.range) {
                continue;
            }
            let children: Vec<_> = self.view.tree().children(node).collect();
            self.stack.extend(children.into_iter().rev());
            if self.view.is_element(node) {
                return Some(node);
            }
        }
        None
    }
}
