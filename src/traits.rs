use std::fmt::Debug;

use crate::types::{Boundary, NodeKind, Range};

/// Read access to the host's document tree.
///
/// Nodes are small copyable handles (arena indices, pointers wrapped in a
/// newtype, ...). The engine never stores them across calls.
pub trait DocumentTree {
    type Node: Copy + Eq + Debug;

    // Structure
    fn kind(&self, node: Self::Node) -> NodeKind;
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn last_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    // Element attributes; both return false/None for non-elements
    fn has_class(&self, node: Self::Node, class: &str) -> bool;
    fn element_id(&self, node: Self::Node) -> Option<&str>;

    // Content of a text node; None for anything else
    fn text(&self, node: Self::Node) -> Option<&str>;

    fn children(&self, node: Self::Node) -> Children<'_, Self>
    where
        Self: Sized,
    {
        Children {
            tree: self,
            next: self.first_child(node),
        }
    }

    fn child_count(&self, node: Self::Node) -> usize
    where
        Self: Sized,
    {
        self.children(node).count()
    }

    fn child_at(&self, node: Self::Node, index: usize) -> Option<Self::Node>
    where
        Self: Sized,
    {
        self.children(node).nth(index)
    }

    fn index_in_parent(&self, node: Self::Node) -> usize {
        let mut index = 0;
        let mut current = self.previous_sibling(node);
        while let Some(sibling) = current {
            index += 1;
            current = self.previous_sibling(sibling);
        }
        index
    }
}

/// Iterator over the children of a node, in order.
pub struct Children<'a, T: DocumentTree> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: DocumentTree> Iterator for Children<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

/// The editor surface the engine is attached to.
pub trait EditorHost: DocumentTree {
    fn selection_range(&self) -> Option<Range<Self::Node>>;
    /// The host's notion of the focused/selected element, distinct from the range.
    fn selected_node(&self) -> Option<Self::Node>;

    /// Prevent the default action of the current event and stop its propagation.
    fn suppress(&mut self);
    /// Report a new collapsed cursor position.
    fn move_cursor(&mut self, at: Boundary<Self::Node>);
}
