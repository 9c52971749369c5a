use crate::config::GuardConfig;
use crate::traits::DocumentTree;
use crate::types::NodeKind;

/// Read-only lens over a host tree and the engine configuration.
///
/// The node classifier (`classify`) and tree navigator (`navigate`) are
/// implemented on this type. A view lives for one decision only.
pub struct TreeView<'a, T: DocumentTree> {
    tree: &'a T,
    config: &'a GuardConfig,
}

impl<T: DocumentTree> Clone for TreeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DocumentTree> Copy for TreeView<'_, T> {}

impl<'a, T: DocumentTree> TreeView<'a, T> {
    pub fn new(tree: &'a T, config: &'a GuardConfig) -> Self {
        Self { tree, config }
    }

    pub fn tree(&self) -> &'a T {
        self.tree
    }

    pub fn config(&self) -> &'a GuardConfig {
        self.config
    }

    /// True for the document node and for the element carrying the root id.
    pub fn is_root(&self, node: T::Node) -> bool {
        match self.tree.kind(node) {
            NodeKind::Document => true,
            NodeKind::Element => self.tree.element_id(node) == Some(self.config.root_id.as_str()),
            NodeKind::Text => false,
        }
    }

    pub fn is_element(&self, node: T::Node) -> bool {
        self.tree.kind(node) == NodeKind::Element
    }

    pub fn is_text(&self, node: T::Node) -> bool {
        self.tree.kind(node) == NodeKind::Text
    }

    /// The node itself when it is an element, otherwise its parent element.
    pub fn element_of(&self, node: T::Node) -> Option<T::Node> {
        match self.tree.kind(node) {
            NodeKind::Element => Some(node),
            NodeKind::Text => self.tree.parent(node).filter(|p| self.is_element(*p)),
            NodeKind::Document => None,
        }
    }
}
