use alloc::string::String;
use alloc::vec::Vec;

use crate::{Document, PageOptions, Scheduler, Task};

/// Re-types an element's text one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter<N> {
    node: N,
    chars: Vec<char>,
    typed: usize,
    speed_ms: u64,
}

impl<N: Copy + Eq + core::fmt::Debug> Typewriter<N> {
    /// Captures the text of the first element with the typewriter class, clears it and types the
    /// first character. The rest follow as [`Task::Type`] steps.
    pub fn start<D: Document<Node = N>>(
        doc: &mut D,
        scheduler: &mut impl Scheduler,
        options: &PageOptions,
    ) -> Option<Self> {
        let node = doc
            .elements_by_class(&options.typewriter_class)
            .first()
            .copied()?;
        let text = doc.text(node);
        doc.set_text(node, "");

        let mut tw = Self {
            node,
            chars: text.chars().collect(),
            typed: 0,
            speed_ms: options.typewriter_speed_ms,
        };
        ftrace!(len = tw.chars.len(), "Typewriter::start");
        tw.step(doc, scheduler);
        Some(tw)
    }

    pub fn node(&self) -> N {
        self.node
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// The full text being typed.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Types the next character and schedules the following step.
    ///
    /// Returns `false` once everything has been typed.
    pub fn step<D: Document<Node = N>>(
        &mut self,
        doc: &mut D,
        scheduler: &mut impl Scheduler,
    ) -> bool {
        if self.is_done() {
            return false;
        }
        self.typed += 1;
        let typed: String = self.chars[..self.typed].iter().collect();
        doc.set_text(self.node, &typed);
        if !self.is_done() {
            scheduler.defer(self.speed_ms, Task::Type);
        }
        true
    }
}
