use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Category, LayoutBox, ScrollBehavior, ScrollMetrics, Viewport};

/// The minimal document-tree capability set the behaviors need.
///
/// Hosts implement this over a real DOM binding or an in-memory tree. Every lookup returns
/// `Option`/empty collections for absent elements; behaviors treat absence as a no-op.
pub trait Document {
    /// A cheap handle to an element.
    type Node: Copy + Eq + fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
    /// All elements with tag `tag`, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node>;
    /// All elements that have attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Node>;
    /// Descendants of `root` carrying `class`, in document order.
    fn descendants_by_class(&self, root: Self::Node, class: &str) -> Vec<Self::Node>;
    /// Descendants of `root` that have attribute `name`, in document order.
    fn descendants_with_attribute(&self, root: Self::Node, name: &str) -> Vec<Self::Node>;
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn tag_name(&self, node: Self::Node) -> String;
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    fn has_class(&self, node: Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: Self::Node, class: &str);
    fn remove_class(&mut self, node: Self::Node, class: &str);

    fn style(&self, node: Self::Node, property: &str) -> Option<String>;
    fn set_style(&mut self, node: Self::Node, property: &str, value: &str);

    fn is_disabled(&self, node: Self::Node) -> bool;
    fn set_disabled(&mut self, node: Self::Node, disabled: bool);

    fn text(&self, node: Self::Node) -> String;
    fn set_text(&mut self, node: Self::Node, text: &str);
    /// Current value of a form field. Empty for non-fields.
    fn value(&self, node: Self::Node) -> String;

    /// Rendered width of an element (`offsetWidth`).
    fn offset_width(&self, node: Self::Node) -> f64;
    fn layout_box(&self, node: Self::Node) -> LayoutBox;
    fn scroll_metrics(&self, node: Self::Node) -> ScrollMetrics;
    /// Sets the horizontal offset of a scroll container. The platform clamps it.
    fn set_scroll_left(&mut self, node: Self::Node, offset: f64);
    /// Scrolls a container horizontally by a relative amount. The platform clamps the target.
    fn scroll_by(&mut self, node: Self::Node, delta: f64, behavior: ScrollBehavior);

    fn viewport(&self) -> Viewport;
    fn scroll_window_to(&mut self, top: f64, behavior: ScrollBehavior);
    fn scroll_into_view(&mut self, node: Self::Node, behavior: ScrollBehavior);
}

/// Work deferred onto the host's event loop.
///
/// Tasks are plain data so the host can run them later with mutable access to both the
/// behaviors and the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Post-transition work of a section switch. Stale generations are skipped.
    Settle { category: Category, generation: u64 },
    /// Recompute a category's navigation affordance.
    Refresh(Category),
    /// Type the next character of the typewriter effect.
    Type,
    /// Remove the faded-out preloader from the layout.
    HidePreloader,
}

/// Defers [`Task`]s on the host's event loop.
///
/// Implementations must not run the task synchronously; tasks with equal due times run in
/// scheduling order.
pub trait Scheduler {
    fn defer(&mut self, delay_ms: u64, task: Task);
}
