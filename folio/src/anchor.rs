use crate::{Document, ScrollBehavior};

/// Resolves the in-page target of an anchor `node` (`href="#id"`).
///
/// Returns `None` for external links, a bare `#`, or an id with no element.
pub fn anchor_target<D: Document>(doc: &D, node: D::Node) -> Option<D::Node> {
    let href = doc.attribute(node, "href")?;
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    doc.element_by_id(id)
}

/// Smoothly scrolls the target of an in-page anchor into view.
///
/// Returns `true` when the click was handled; the host should then suppress the default
/// navigation.
pub fn follow_anchor<D: Document>(doc: &mut D, node: D::Node) -> bool {
    let Some(target) = anchor_target(doc, node) else {
        return false;
    };
    ftrace!(?target, "follow_anchor");
    doc.scroll_into_view(target, ScrollBehavior::Smooth);
    true
}
