use alloc::string::ToString;

use crate::{Document, PageOptions};

/// Writes `year` into the footer's year element, if the page has one.
pub fn stamp_year<D: Document>(doc: &mut D, options: &PageOptions, year: i32) -> bool {
    let Some(node) = doc.element_by_id(&options.year_id) else {
        return false;
    };
    doc.set_text(node, &year.to_string());
    true
}
