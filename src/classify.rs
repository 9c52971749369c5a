//! Node classifier: protection predicates and text helpers.
//!
//! Two predicates must stay apart. "Contains protection" looks down the
//! subtree, "inside protection" looks up the ancestor chain. The root surface
//! is a boundary and answers false to both.

use unicode_segmentation::UnicodeSegmentation;

use crate::traits::DocumentTree;
use crate::view::TreeView;

impl<T: DocumentTree> TreeView<'_, T> {
    /// True if `node` itself carries the protection marker.
    pub fn is_protected(&self, node: Option<T::Node>) -> bool {
        let Some(node) = node else {
            return false;
        };
        self.is_element(node)
            && !self.is_root(node)
            && self.tree().has_class(node, &self.config().marker)
    }

    /// True if any node in the subtree rooted at `node` is protected.
    pub fn contains_protected_descendant(&self, node: Option<T::Node>) -> bool {
        let Some(node) = node else {
            return false;
        };
        if self.is_root(node) {
            return false;
        }

        let tree = self.tree();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if self.is_protected(Some(current)) {
                return true;
            }
            stack.extend(tree.children(current));
        }
        false
    }

    pub fn is_or_contains_protected(&self, node: Option<T::Node>) -> bool {
        self.is_protected(node) || self.contains_protected_descendant(node)
    }

    /// True if `node` or one of its ancestors below the root is protected.
    pub fn is_inside_protected(&self, node: Option<T::Node>) -> bool {
        self.outermost_protected(node).is_some()
    }

    /// The highest protected node on the chain from `node` up to the root.
    pub fn outermost_protected(&self, node: Option<T::Node>) -> Option<T::Node> {
        let mut found = None;
        let mut current = node;
        while let Some(n) = current {
            if self.is_root(n) {
                break;
            }
            if self.is_protected(Some(n)) {
                found = Some(n);
            }
            current = self.tree().parent(n);
        }
        found
    }

    /// Concatenated text of every text node in the subtree, in document order.
    pub fn text_content(&self, node: T::Node) -> String {
        let tree = self.tree();
        if let Some(text) = tree.text(node) {
            return text.to_string();
        }

        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(text) = tree.text(current) {
                out.push_str(text);
                continue;
            }
            let children: Vec<_> = tree.children(current).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// True if the node holds nothing but whitespace and zero-width markers.
    ///
    /// Stops at the first visible character.
    pub fn is_blank(&self, node: T::Node) -> bool {
        let tree = self.tree();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(text) = tree.text(current) {
                if !text.chars().all(|c| self.is_blank_char(c)) {
                    return false;
                }
                continue;
            }
            stack.extend(tree.children(current));
        }
        true
    }

    pub(crate) fn is_blank_char(&self, c: char) -> bool {
        c.is_whitespace() || self.config().is_zero_width(c)
    }

    fn is_marker_grapheme(&self, g: &str) -> bool {
        g.chars().all(|c| self.config().is_zero_width(c))
    }

    fn is_blank_grapheme(&self, g: &str) -> bool {
        g.chars().all(|c| self.is_blank_char(c))
    }

    /// Number of leading graphemes made only of zero-width markers.
    pub fn leading_markers(&self, text: &str) -> usize {
        text.graphemes(true)
            .take_while(|g| self.is_marker_grapheme(g))
            .count()
    }

    /// Number of trailing graphemes made only of zero-width markers.
    pub fn trailing_markers(&self, text: &str) -> usize {
        text.graphemes(true)
            .rev()
            .take_while(|g| self.is_marker_grapheme(g))
            .count()
    }

    /// True if a visible grapheme precedes `offset`.
    pub fn has_text_before(&self, text: &str, offset: usize) -> bool {
        text.graphemes(true)
            .take(offset)
            .any(|g| !self.is_blank_grapheme(g))
    }

    /// True if a visible grapheme follows `offset`.
    pub fn has_text_after(&self, text: &str, offset: usize) -> bool {
        text.graphemes(true)
            .skip(offset)
            .any(|g| !self.is_blank_grapheme(g))
    }
}

pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
