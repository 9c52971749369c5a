use std::cell::Cell;

use edit_guard::{Boundary, DocumentTree, EditorHost, NodeKind, Range};

pub const MARKER: &str = "mceNonEditable";
pub const ROOT_ID: &str = "tinymce";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document with a document node, an editable root element and
/// the host-side selection state.
pub struct MockTree {
    nodes: Vec<NodeData>,
    document: NodeId,
    root: NodeId,
    pub selection: Option<Range<NodeId>>,
    pub selected: Option<NodeId>,
    pub suppressed: usize,
    pub cursor_moves: Vec<Boundary<NodeId>>,
    pub selection_reads: Cell<usize>,
}

impl MockTree {
    pub fn new() -> Self {
        Self::with_root_id(ROOT_ID)
    }

    pub fn with_root_id(root_id: &str) -> Self {
        let mut tree = MockTree {
            nodes: Vec::new(),
            document: NodeId(0),
            root: NodeId(0),
            selection: None,
            selected: None,
            suppressed: 0,
            cursor_moves: Vec::new(),
            selection_reads: Cell::new(0),
        };
        let document = tree.push(NodeKind::Document, None, &[], "");
        let root = tree.push(NodeKind::Element, Some(root_id), &[], "");
        tree.attach(document, root);
        tree.document = document;
        tree.root = root;
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn all_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn element(&mut self, parent: NodeId, classes: &[&str]) -> NodeId {
        let node = self.push(NodeKind::Element, None, classes, "");
        self.attach(parent, node);
        node
    }

    pub fn protected(&mut self, parent: NodeId) -> NodeId {
        self.element(parent, &[MARKER])
    }

    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.push(NodeKind::Text, None, &[], text);
        self.attach(parent, node);
        node
    }

    /// An element with no parent, as left behind by a host removal.
    pub fn detached(&mut self, classes: &[&str]) -> NodeId {
        self.push(NodeKind::Element, None, classes, "")
    }

    pub fn mark_root_protected(&mut self) {
        let root = self.root;
        self.nodes[root.0].classes.push(MARKER.to_string());
    }

    pub fn set_cursor(&mut self, container: NodeId, offset: usize) {
        self.selection = Some(Range::collapsed(Boundary::new(container, offset)));
    }

    pub fn select(&mut self, start: (NodeId, usize), end: (NodeId, usize)) {
        self.selection = Some(Range::new(
            Boundary::new(start.0, start.1),
            Boundary::new(end.0, end.1),
        ));
    }

    fn push(&mut self, kind: NodeKind, id: Option<&str>, classes: &[&str], text: &str) -> NodeId {
        self.nodes.push(NodeData {
            kind,
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.to_string(),
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn sibling(&self, node: NodeId, delta: isize) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let index = siblings.iter().position(|n| *n == node)?;
        let target = index.checked_add_signed(delta)?;
        siblings.get(target).copied()
    }
}

impl DocumentTree for MockTree {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.0].kind
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.first().copied()
    }

    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.last().copied()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling(node, 1)
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling(node, -1)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        let data = &self.nodes[node.0];
        data.kind == NodeKind::Element && data.classes.iter().any(|c| c == class)
    }

    fn element_id(&self, node: NodeId) -> Option<&str> {
        let data = &self.nodes[node.0];
        if data.kind != NodeKind::Element {
            return None;
        }
        data.id.as_deref()
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        let data = &self.nodes[node.0];
        (data.kind == NodeKind::Text).then_some(data.text.as_str())
    }
}

impl EditorHost for MockTree {
    fn selection_range(&self) -> Option<Range<NodeId>> {
        self.selection_reads.set(self.selection_reads.get() + 1);
        self.selection
    }

    fn selected_node(&self) -> Option<NodeId> {
        self.selected
    }

    fn suppress(&mut self) {
        self.suppressed += 1;
    }

    fn move_cursor(&mut self, at: Boundary<NodeId>) {
        self.cursor_moves.push(at);
        self.selection = Some(Range::collapsed(at));
    }
}
