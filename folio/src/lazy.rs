use alloc::vec::Vec;

use crate::{Document, PageOptions};

/// Defers image loading until an image first intersects the viewport.
///
/// Images carry their real source in a data attribute; once visible the source is copied to
/// `src`, the placeholder class is dropped and the image is no longer tracked.
#[derive(Clone, Debug)]
pub struct LazyImages<N> {
    pending: Vec<N>,
}

impl<N> Default for LazyImages<N> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<N: Copy + Eq + core::fmt::Debug> LazyImages<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[N] {
        &self.pending
    }

    /// Starts tracking every element with the lazy source attribute.
    pub fn observe<D: Document<Node = N>>(&mut self, doc: &D, options: &PageOptions) {
        for node in doc.elements_with_attribute(&options.lazy_attr) {
            if !self.pending.contains(&node) {
                self.pending.push(node);
            }
        }
        ftrace!(count = self.pending.len(), "LazyImages::observe");
    }

    /// Loads every tracked image that now intersects the viewport.
    ///
    /// Returns how many images were loaded by this call.
    pub fn check<D: Document<Node = N>>(&mut self, doc: &mut D, options: &PageOptions) -> usize {
        let viewport = doc.viewport();
        let before = self.pending.len();
        self.pending.retain(|&node| {
            if viewport.intersection_ratio(doc.layout_box(node), 0.0) <= 0.0 {
                return true;
            }
            if let Some(src) = doc.attribute(node, &options.lazy_attr) {
                doc.set_attribute(node, "src", &src);
            }
            doc.remove_class(node, &options.lazy_class);
            false
        });
        before - self.pending.len()
    }
}
