use alloc::vec::Vec;

use crate::{Document, RevealOptions};

/// Fades elements in the first time they scroll into view.
///
/// Elements are primed (hidden and shifted down) by `observe`; every `check` reveals the ones
/// that now intersect the viewport enough. Revealed elements stay revealed.
#[derive(Clone, Debug)]
pub struct Reveal<N> {
    options: RevealOptions,
    pending: Vec<N>,
}

impl<N: Copy + Eq + core::fmt::Debug> Reveal<N> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            pending: Vec::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Elements still waiting to be revealed.
    pub fn pending(&self) -> &[N] {
        &self.pending
    }

    /// Primes every element carrying one of the reveal classes.
    pub fn observe<D: Document<Node = N>>(&mut self, doc: &mut D) {
        let hidden = self.options.hidden_transform();
        let transition = self.options.transition();
        for class in &self.options.classes {
            for node in doc.elements_by_class(class) {
                if self.pending.contains(&node) {
                    continue;
                }
                doc.set_style(node, "opacity", "0");
                doc.set_style(node, "transform", &hidden);
                doc.set_style(node, "transition", &transition);
                self.pending.push(node);
            }
        }
        ftrace!(count = self.pending.len(), "Reveal::observe");
    }

    /// Reveals every pending element that intersects the viewport past the threshold.
    ///
    /// Returns how many elements were revealed by this call.
    pub fn check<D: Document<Node = N>>(&mut self, doc: &mut D) -> usize {
        let viewport = doc.viewport();
        let before = self.pending.len();
        let (threshold, margin) = (self.options.threshold, self.options.bottom_margin);
        self.pending.retain(|&node| {
            let ratio = viewport.intersection_ratio(doc.layout_box(node), margin);
            if ratio < threshold {
                return true;
            }
            doc.set_style(node, "opacity", "1");
            doc.set_style(node, "transform", "translateY(0)");
            false
        });
        before - self.pending.len()
    }
}
