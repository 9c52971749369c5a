//! Cursor repair: move a cursor that landed on protected content to the
//! nearest editable position after it.

use crate::classify::grapheme_len;
use crate::navigate::Granularity;
use crate::traits::DocumentTree;
use crate::types::Boundary;
use crate::view::TreeView;

impl<T: DocumentTree> TreeView<'_, T> {
    /// True if `node` is protected or sits inside a protected region.
    ///
    /// A node that merely contains protection is editable around it.
    pub fn needs_repair(&self, node: T::Node) -> bool {
        !self.is_root(node) && self.is_inside_protected(Some(node))
    }

    /// The collapsed position to move to, or `None` when `landing` is fine
    /// or nothing editable follows it before the root.
    pub fn repair_cursor(&self, landing: T::Node) -> Option<Boundary<T::Node>> {
        if !self.needs_repair(landing) {
            return None;
        }

        let mut current = self.outermost_protected(Some(landing)).unwrap_or(landing);
        loop {
            current = self.next_in_document_order(current, Granularity::Node)?;
            if !self.is_or_contains_protected(Some(current)) {
                return Some(Boundary::new(current, 0));
            }
        }
    }

    /// The node a collapsed cursor effectively sits on.
    ///
    /// A cursor at the very end of a text node lands on what follows it when
    /// that is protected. An element offset past the last child lands on the
    /// container.
    pub fn landing_node(&self, at: &Boundary<T::Node>) -> Option<T::Node> {
        let tree = self.tree();
        if self.is_element(at.container) {
            return tree.child_at(at.container, at.offset).or(Some(at.container));
        }

        if let Some(text) = tree.text(at.container)
            && at.offset.saturating_add(self.trailing_markers(text)) >= grapheme_len(text)
            && let Some(next) = self.node_after(at)
            && self.needs_repair(next)
        {
            return Some(next);
        }
        Some(at.container)
    }
}
