use crate::{Document, PageOptions, ScrollBehavior};

/// Shows the back-to-top control once the window is scrolled past the threshold.
///
/// Returns the new visibility, or `None` when the page has no such control.
pub fn update_back_to_top<D: Document>(doc: &mut D, options: &PageOptions) -> Option<bool> {
    let button = doc.element_by_id(&options.back_to_top_id)?;
    let visible = doc.viewport().scroll_y > options.back_to_top_threshold;
    if visible {
        doc.add_class(button, &options.visible_class);
    } else {
        doc.remove_class(button, &options.visible_class);
    }
    Some(visible)
}

/// Smoothly scrolls the window back to the top.
pub fn scroll_to_top<D: Document>(doc: &mut D) {
    doc.scroll_window_to(0.0, ScrollBehavior::Smooth);
}
