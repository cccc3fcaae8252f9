use crate::{Document, PageOptions, Scheduler, Task};

/// Fades the preloader out once the page has loaded.
///
/// The element is removed from the layout by [`hide_preloader`] after the fade delay.
pub fn fade_preloader<D: Document>(
    doc: &mut D,
    scheduler: &mut impl Scheduler,
    options: &PageOptions,
) -> bool {
    let Some(node) = doc
        .elements_by_class(&options.preloader_class)
        .first()
        .copied()
    else {
        return false;
    };
    doc.set_style(node, "opacity", "0");
    scheduler.defer(options.preloader_delay_ms, Task::HidePreloader);
    true
}

pub fn hide_preloader<D: Document>(doc: &mut D, options: &PageOptions) {
    if let Some(&node) = doc.elements_by_class(&options.preloader_class).first() {
        doc.set_style(node, "display", "none");
    }
}
