/// The kind of a node in the host document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element node. Elements carry classes and may have children.
    Element,
    /// A text node. Text nodes carry content and have no children.
    Text,
    /// The document node above the editable surface. Walks never go past it.
    Document,
}

/// One end of a range.
///
/// The offset is counted in grapheme clusters when the container is a text
/// node, and in child indices when the container is an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<N> {
    /// The node the offset is relative to.
    pub container: N,
    /// Grapheme or child offset within `container`.
    pub offset: usize,
}

impl<N> Boundary<N> {
    pub fn new(container: N, offset: usize) -> Self {
        Self { container, offset }
    }
}

/// A selection range defined by start and end boundaries.
///
/// The host guarantees that `start` precedes or equals `end` in document
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<N> {
    /// The start boundary (inclusive).
    pub start: Boundary<N>,
    /// The end boundary (exclusive).
    pub end: Boundary<N>,
}

impl<N: Copy + Eq> Range<N> {
    pub fn new(start: Boundary<N>, end: Boundary<N>) -> Self {
        Self { start, end }
    }

    /// A pure cursor at `at`.
    pub fn collapsed(at: Boundary<N>) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Which guard blocked a mutation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The range ends flush at offset 0 of a protected container.
    EndBoundary,
    /// The range overlaps, or sits inside, protected content.
    RangeOverlap,
    /// The host's selected node is or contains protected content.
    SelectedNode,
    /// A collapsed cursor would delete into a neighbouring protected node.
    Adjacency,
}

impl BlockReason {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockReason::EndBoundary => "end_boundary",
            BlockReason::RangeOverlap => "range_overlap",
            BlockReason::SelectedNode => "selected_node",
            BlockReason::Adjacency => "adjacency",
        }
    }
}

/// The outcome of a decision.
///
/// A blocked verdict obliges the host to prevent the default mutation and
/// stop further propagation of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block(BlockReason),
}

impl Verdict {
    pub fn is_allow(self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn is_block(self) -> bool {
        matches!(self, Verdict::Block(_))
    }
}
