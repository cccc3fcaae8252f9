use std::collections::{BTreeMap, HashMap};

use folio::{Document, LayoutBox, ScrollBehavior, ScrollMetrics, Viewport};

use crate::{Easing, Tween};

/// A host document that can advance its own animations and report scroll events.
///
/// [`crate::Page`] drives any `Platform`: it advances time, then routes the scroll events the
/// platform produced (user scrolling, programmatic offsets, smooth-scroll frames).
pub trait Platform: Document {
    /// Advances platform-driven smooth scrolling to `now_ms`.
    fn advance(&mut self, now_ms: u64);

    /// Drains the scroll events emitted since the last call, oldest first.
    fn take_scroll_events(&mut self) -> Vec<ScrollTarget<Self::Node>>;
}

/// What scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollTarget<N> {
    Window,
    Element(N),
}

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("duplicate element id `{0}`")]
    DuplicateId(String),
    #[error("unknown parent element {0:?}")]
    UnknownParent(NodeId),
}

/// Description of an element to insert into a [`MemoryDocument`].
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    layout: LayoutBox,
    width: f64,
    scroll: Option<(f64, f64)>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Vertical placement in document coordinates.
    pub fn layout(mut self, top: f64, height: f64) -> Self {
        self.layout = LayoutBox::new(top, height);
        self
    }

    /// Rendered width (`offsetWidth`).
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Makes the element a horizontal scroll container.
    pub fn scrollable(mut self, scroll_width: f64, client_width: f64) -> Self {
        self.scroll = Some((scroll_width, client_width));
        self
    }
}

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: LayoutBox,
    width: f64,
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
    tween: Option<Tween>,
}

impl Element {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_left, self.scroll_width, self.client_width)
    }
}

/// An in-memory document tree.
///
/// It behaves like a browser where the behaviors can observe it: scroll offsets are clamped by
/// the platform, smooth scrolls animate over `smooth_scroll_ms` as time is advanced, and every
/// offset change is reported as a scroll event.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    roots: Vec<NodeId>,
    ids: HashMap<String, NodeId>,

    viewport_height: f64,
    document_height: f64,
    scroll_y: f64,
    window_tween: Option<Tween>,

    now_ms: u64,
    smooth_scroll_ms: u64,
    easing: Easing,
    events: Vec<ScrollTarget<NodeId>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl MemoryDocument {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            roots: Vec::new(),
            ids: HashMap::new(),
            viewport_height,
            document_height: viewport_height,
            scroll_y: 0.0,
            window_tween: None,
            now_ms: 0,
            smooth_scroll_ms: 240,
            easing: Easing::default(),
            events: Vec::new(),
        }
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_scroll_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Inserts an element as the last child of `parent` (or as a new root).
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        spec: ElementSpec,
    ) -> Result<NodeId, DocumentError> {
        if let Some(p) = parent {
            if p.0 >= self.elements.len() {
                return Err(DocumentError::UnknownParent(p));
            }
        }
        let node = NodeId(self.elements.len());
        let mut attributes = spec.attributes;
        if let Some(id) = spec.id {
            if self.ids.contains_key(&id) {
                return Err(DocumentError::DuplicateId(id));
            }
            self.ids.insert(id.clone(), node);
            attributes.insert("id".into(), id);
        }

        let (scroll_width, client_width) = spec.scroll.unwrap_or((spec.width, spec.width));
        self.elements.push(Element {
            tag: spec.tag.to_ascii_lowercase(),
            classes: spec.classes,
            attributes,
            styles: BTreeMap::new(),
            text: spec.text,
            value: spec.value,
            disabled: spec.disabled,
            parent,
            children: Vec::new(),
            layout: spec.layout,
            width: spec.width,
            scroll_left: 0.0,
            scroll_width,
            client_width,
            tween: None,
        });
        match parent {
            Some(p) => self.elements[p.0].children.push(node),
            None => self.roots.push(node),
        }

        let bottom = spec.layout.bottom();
        if bottom > self.document_height {
            self.document_height = bottom;
        }
        Ok(node)
    }

    /// Sets a form field's value, as a user typing would.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.value = value.into();
        }
    }

    /// Scrolls the window as the user would (wheel/drag): immediately, cancelling any animation.
    pub fn set_window_scroll(&mut self, scroll_y: f64) {
        self.window_tween = None;
        self.apply_window_scroll(scroll_y);
    }

    /// The pending smooth-scroll target of a container, if one is animating.
    pub fn scroll_target(&self, node: NodeId) -> Option<f64> {
        self.elements.get(node.0)?.tween.map(|t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.window_tween.is_some() || self.elements.iter().any(|el| el.tween.is_some())
    }

    fn max_window_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    fn apply_window_scroll(&mut self, scroll_y: f64) {
        let y = scroll_y.clamp(0.0, self.max_window_scroll());
        if y != self.scroll_y {
            self.scroll_y = y;
            self.events.push(ScrollTarget::Window);
        }
    }

    fn apply_scroll_left(&mut self, node: NodeId, offset: f64) {
        let Some(el) = self.elements.get_mut(node.0) else {
            return;
        };
        let offset = el.metrics().clamp(offset);
        if offset != el.scroll_left {
            el.scroll_left = offset;
            self.events.push(ScrollTarget::Element(node));
        }
    }

    /// Elements in document (pre-)order.
    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.elements[node.0].children.iter().rev().copied());
        }
        out
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(el) = self.elements.get(root.0) else {
            return out;
        };
        let mut stack: Vec<NodeId> = el.children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.elements[node.0].children.iter().rev().copied());
        }
        out
    }

    fn el(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    fn el_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&n| self.elements[n.0].tag.eq_ignore_ascii_case(tag))
            .collect()
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&n| self.elements[n.0].attributes.contains_key(name))
            .collect()
    }

    fn descendants_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    fn descendants_with_attribute(&self, root: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.elements[n.0].attributes.contains_key(name))
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.el(node)?.parent
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.el(node).map(|el| el.tag.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.el(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if name == "id" {
            let old = self.attribute(node, "id");
            if let Some(old) = old {
                self.ids.remove(&old);
            }
            self.ids.insert(value.into(), node);
        }
        if let Some(el) = self.el_mut(node) {
            el.attributes.insert(name.into(), value.into());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let removed = self.el_mut(node).and_then(|el| el.attributes.remove(name));
        if let (Some(old), "id") = (removed, name) {
            self.ids.remove(&old);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.el(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.el_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.into());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.el_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.el(node)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.el_mut(node) {
            el.styles.insert(property.into(), value.into());
        }
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        self.el(node).is_some_and(|el| el.disabled)
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(el) = self.el_mut(node) {
            el.disabled = disabled;
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.el(node).map(|el| el.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.el_mut(node) {
            el.text = text.into();
        }
    }

    fn value(&self, node: NodeId) -> String {
        self.el(node).map(|el| el.value.clone()).unwrap_or_default()
    }

    fn offset_width(&self, node: NodeId) -> f64 {
        self.el(node).map_or(0.0, |el| el.width)
    }

    fn layout_box(&self, node: NodeId) -> LayoutBox {
        self.el(node).map(|el| el.layout).unwrap_or_default()
    }

    fn scroll_metrics(&self, node: NodeId) -> ScrollMetrics {
        self.el(node).map(Element::metrics).unwrap_or_default()
    }

    fn set_scroll_left(&mut self, node: NodeId, offset: f64) {
        if let Some(el) = self.el_mut(node) {
            el.tween = None;
        }
        self.apply_scroll_left(node, offset);
    }

    fn scroll_by(&mut self, node: NodeId, delta: f64, behavior: ScrollBehavior) {
        let (now, duration, easing) = (self.now_ms, self.smooth_scroll_ms, self.easing);
        let Some(el) = self.el_mut(node) else {
            return;
        };
        match behavior {
            ScrollBehavior::Instant => {
                let target = el.scroll_left + delta;
                self.set_scroll_left(node, target);
            }
            ScrollBehavior::Smooth => {
                let metrics = el.metrics();
                match el.tween.as_mut() {
                    Some(tween) => {
                        let target = metrics.clamp(tween.to + delta);
                        tween.retarget(now, target, duration);
                    }
                    None => {
                        let target = metrics.clamp(el.scroll_left + delta);
                        if target != el.scroll_left {
                            el.tween =
                                Some(Tween::new(el.scroll_left, target, now, duration, easing));
                        }
                    }
                }
                atrace!(?node, delta, to = ?el.tween.map(|t| t.to), "scroll_by");
            }
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y, self.viewport_height)
    }

    fn scroll_window_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let target = top.clamp(0.0, self.max_window_scroll());
        match behavior {
            ScrollBehavior::Instant => self.set_window_scroll(target),
            ScrollBehavior::Smooth => {
                if target == self.scroll_y {
                    self.window_tween = None;
                    return;
                }
                self.window_tween = Some(Tween::new(
                    self.scroll_y,
                    target,
                    self.now_ms,
                    self.smooth_scroll_ms,
                    self.easing,
                ));
            }
        }
    }

    fn scroll_into_view(&mut self, node: NodeId, behavior: ScrollBehavior) {
        let Some(top) = self.el(node).map(|el| el.layout.top) else {
            return;
        };
        self.scroll_window_to(top, behavior);
    }
}

impl Platform for MemoryDocument {
    fn advance(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            return;
        }
        self.now_ms = now_ms;

        for i in 0..self.elements.len() {
            let Some(tween) = self.elements[i].tween else {
                continue;
            };
            self.apply_scroll_left(NodeId(i), tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.elements[i].tween = None;
            }
        }

        if let Some(tween) = self.window_tween {
            self.apply_window_scroll(tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.window_tween = None;
            }
        }
    }

    fn take_scroll_events(&mut self) -> Vec<ScrollTarget<NodeId>> {
        let events = std::mem::take(&mut self.events);
        if !events.is_empty() {
            adebug!(count = events.len(), "take_scroll_events");
        }
        events
    }
}
