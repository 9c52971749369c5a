//! The guards of the decision engine, in evaluation order.
//!
//! Each guard answers "would this block?" on its own so it can be exercised
//! in isolation. [`evaluate`] runs them in order and stops at the first hit.

use crate::intent::{Classification, Direction, Reach};
use crate::navigate::Granularity;
use crate::traits::DocumentTree;
use crate::types::{BlockReason, Boundary, Range, Verdict};
use crate::view::TreeView;

/// Run every guard against a destructive intent.
pub fn evaluate<T: DocumentTree>(
    view: &TreeView<'_, T>,
    range: &Range<T::Node>,
    class: &Classification,
    selected: Option<T::Node>,
) -> Verdict {
    if end_boundary(view, range) {
        return Verdict::Block(BlockReason::EndBoundary);
    }
    if range_overlap(view, range) {
        return Verdict::Block(BlockReason::RangeOverlap);
    }
    if selected_node(view, selected) {
        return Verdict::Block(BlockReason::SelectedNode);
    }
    if adjacency(view, range, class) {
        return Verdict::Block(BlockReason::Adjacency);
    }
    Verdict::Allow
}

/// A range ending at offset 0 of a protected container would merge into it.
pub fn end_boundary<T: DocumentTree>(view: &TreeView<'_, T>, range: &Range<T::Node>) -> bool {
    range.end.offset == 0 && view.is_or_contains_protected(Some(range.end.container))
}

/// The range overlaps protected content, or one of its ends sits inside it.
pub fn range_overlap<T: DocumentTree>(view: &TreeView<'_, T>, range: &Range<T::Node>) -> bool {
    if view
        .overlapped_elements(range)
        .any(|n| view.is_or_contains_protected(Some(n)))
    {
        return true;
    }

    [range.start.container, range.end.container]
        .into_iter()
        .any(|container| {
            let nearest = view.element_of(container);
            view.is_or_contains_protected(nearest) || view.is_inside_protected(nearest)
        })
}

pub fn selected_node<T: DocumentTree>(view: &TreeView<'_, T>, selected: Option<T::Node>) -> bool {
    view.is_or_contains_protected(selected)
}

/// Collapsed-cursor check: would a backward or forward deletion reach into
/// a protected neighbour?
pub fn adjacency<T: DocumentTree>(
    view: &TreeView<'_, T>,
    range: &Range<T::Node>,
    class: &Classification,
) -> bool {
    let collapsed =
        range.start.offset == range.end.offset || view.is_blank(range.start.container);
    if !collapsed {
        return false;
    }

    match class.direction {
        Direction::Backward => backward_adjacency(view, &range.start, class.reach),
        Direction::Forward => forward_adjacency(view, &range.start, class.reach),
        Direction::Replace | Direction::None => false,
    }
}

pub fn backward_adjacency<T: DocumentTree>(
    view: &TreeView<'_, T>,
    at: &Boundary<T::Node>,
    reach: Reach,
) -> bool {
    if !at_start(view, at, reach) {
        return false;
    }
    if view.is_or_contains_protected(view.node_before(at)) {
        return true;
    }
    reach == Reach::Line
        && view.is_or_contains_protected(
            view.previous_in_document_order(at.container, Granularity::Element),
        )
}

/// A missing neighbour at the document boundary also blocks.
pub fn forward_adjacency<T: DocumentTree>(
    view: &TreeView<'_, T>,
    at: &Boundary<T::Node>,
    reach: Reach,
) -> bool {
    if !at_end(view, at, reach) {
        return false;
    }
    let Some(next) = view.node_after(at) else {
        return true;
    };
    if view.is_or_contains_protected(Some(next)) {
        return true;
    }
    reach == Reach::Line
        && view.is_or_contains_protected(
            view.next_in_document_order(at.container, Granularity::Element),
        )
}

// Element containers always sit between two children, so the neighbour
// decides on its own.
fn at_start<T: DocumentTree>(view: &TreeView<'_, T>, at: &Boundary<T::Node>, reach: Reach) -> bool {
    let Some(text) = view.tree().text(at.container) else {
        return true;
    };
    match reach {
        Reach::Line => true,
        Reach::Word => !view.has_text_before(text, at.offset),
        Reach::Char => at.offset <= view.leading_markers(text) || view.is_blank(at.container),
    }
}

fn at_end<T: DocumentTree>(view: &TreeView<'_, T>, at: &Boundary<T::Node>, reach: Reach) -> bool {
    let Some(text) = view.tree().text(at.container) else {
        return true;
    };
    match reach {
        Reach::Line => true,
        Reach::Word => !view.has_text_after(text, at.offset),
        Reach::Char => {
            at.offset.saturating_add(view.trailing_markers(text))
                >= crate::classify::grapheme_len(text)
                || view.is_blank(at.container)
        }
    }
}
