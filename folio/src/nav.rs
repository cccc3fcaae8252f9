use alloc::format;
use alloc::string::String;

use crate::{Document, PageOptions};

/// Finds the page section the window is currently in.
///
/// Every `<section>` with an id is considered; a section counts from `nav_offset` above its top
/// to its bottom. When ranges overlap the last section in document order wins.
pub fn current_section<D: Document>(doc: &D, options: &PageOptions) -> Option<String> {
    let scroll_y = doc.viewport().scroll_y;
    let mut current = None;
    for section in doc.elements_by_tag("section") {
        let Some(id) = doc.attribute(section, "id") else {
            continue;
        };
        let layout = doc.layout_box(section);
        let top = layout.top - options.nav_offset;
        if scroll_y >= top && scroll_y < top + layout.height {
            current = Some(id);
        }
    }
    current
}

/// Marks the nav link pointing at the current section as active and clears every other one.
///
/// Returns the current section id.
pub fn highlight_nav<D: Document>(doc: &mut D, options: &PageOptions) -> Option<String> {
    let current = current_section(doc, options);
    let target = current.as_deref().map(|id| format!("#{id}"));
    for link in doc.elements_by_class(&options.nav_link_class) {
        doc.remove_class(link, &options.carousel.selectors.active_class);
        if target.is_some() && doc.attribute(link, "href") == target {
            doc.add_class(link, &options.carousel.selectors.active_class);
        }
    }
    current
}
