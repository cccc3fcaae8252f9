use crate::{
    Affordance, Category, CarouselOptions, Direction, Document, ScrollBehavior, Scheduler, Task,
};

/// The section switcher and per-category carousel controller.
///
/// This type does not hold any UI objects. The host drives it by calling:
/// - `init` once the document is ready
/// - `on_click` / `on_scroll` when UI events occur
/// - `run` for every [`Task`] its scheduler reports as due
///
/// Scroll positions stay owned by the document. The controller only reads them, issues relative
/// `scroll_by` commands and resets a list to its start when its section becomes active.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    active: Option<Category>,
    generation: u64,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            options,
            active: None,
            generation: 0,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The category whose section is currently shown, once a switch has succeeded.
    pub fn active(&self) -> Option<Category> {
        self.active
    }

    /// Establishes the starting affordance of every carousel, then shows the default category.
    pub fn init<D: Document>(&mut self, doc: &mut D, scheduler: &mut impl Scheduler) {
        for category in Category::ALL {
            let Some(list) = self.list(doc, category) else {
                ftrace!(%category, "Carousel::init: no list");
                continue;
            };
            self.refresh_affordance(doc, category);
            doc.set_style(list, "scroll-behavior", "smooth");
        }
        let category = self.options.default_category;
        if !self.switch_section(doc, scheduler, category) {
            fwarn!(%category, "Carousel::init: default category has no section");
        }
    }

    /// Shows `category`'s section and hides every other one.
    ///
    /// Returns `false` (and changes nothing) when the category has no section element. After
    /// the settle delay the category's list is scrolled back to its start and its affordance is
    /// refreshed.
    pub fn switch_section<D: Document>(
        &mut self,
        doc: &mut D,
        scheduler: &mut impl Scheduler,
        category: Category,
    ) -> bool {
        let sel = &self.options.selectors;
        let Some(section) = doc.element_by_id(&sel.section_id(category)) else {
            fdebug!(%category, "Carousel::switch_section: section not found");
            return false;
        };

        for indicator in doc.elements_by_class(&sel.indicator_class) {
            doc.remove_class(indicator, &sel.active_class);
        }
        if let Some(indicator) = self.indicator(doc, category) {
            doc.add_class(indicator, &sel.active_class);
        }

        for other in doc.elements_by_class(&sel.section_class) {
            doc.remove_class(other, &sel.active_class);
        }
        doc.add_class(section, &sel.active_class);

        self.active = Some(category);
        self.generation = self.generation.wrapping_add(1);
        ftrace!(%category, generation = self.generation, "Carousel::switch_section");

        scheduler.defer(
            self.options.settle_delay_ms,
            Task::Settle {
                category,
                generation: self.generation,
            },
        );
        true
    }

    /// Scrolls `category`'s list by one item in `direction`.
    ///
    /// One step is the first item's width plus the configured gap. The step is relative, so the
    /// platform's clamping is what keeps repeated calls inside the content. Returns `false` when
    /// the list is missing or empty.
    pub fn navigate<D: Document>(
        &mut self,
        doc: &mut D,
        scheduler: &mut impl Scheduler,
        category: Category,
        direction: Direction,
    ) -> bool {
        let Some(list) = self.list(doc, category) else {
            return false;
        };
        let items = doc.descendants_by_class(list, &self.options.selectors.item_class);
        let Some(&first) = items.first() else {
            ftrace!(%category, "Carousel::navigate: empty list");
            return false;
        };

        let step = (doc.offset_width(first) + self.options.item_gap) * direction.sign();
        ftrace!(%category, step, "Carousel::navigate");
        doc.scroll_by(list, step, ScrollBehavior::Smooth);

        scheduler.defer(self.options.settle_delay_ms, Task::Refresh(category));
        true
    }

    /// Computes the current affordance of `category`'s list without touching the controls.
    pub fn affordance<D: Document>(&self, doc: &D, category: Category) -> Option<Affordance> {
        let list = self.list(doc, category)?;
        Some(Affordance::compute(
            doc.scroll_metrics(list),
            self.options.epsilon,
        ))
    }

    /// Recomputes `category`'s affordance and applies it to its previous / next controls.
    ///
    /// Returns `None` when the list or either control is missing.
    pub fn refresh_affordance<D: Document>(
        &self,
        doc: &mut D,
        category: Category,
    ) -> Option<Affordance> {
        let list = self.list(doc, category)?;
        let (prev, next) = self.controls(doc, list)?;

        let affordance = Affordance::compute(doc.scroll_metrics(list), self.options.epsilon);
        self.apply_control(doc, prev, affordance.can_go_prev);
        self.apply_control(doc, next, affordance.can_go_next);
        ftrace!(%category, ?affordance, "Carousel::refresh_affordance");
        Some(affordance)
    }

    /// Runs a deferred carousel task.
    ///
    /// Returns `false` for tasks that belong to other behaviors.
    pub fn run<D: Document>(&mut self, doc: &mut D, task: Task) -> bool {
        match task {
            Task::Settle {
                category,
                generation,
            } => {
                if generation != self.generation {
                    ftrace!(%category, generation, "Carousel: skipping stale settle");
                    return true;
                }
                if let Some(list) = self.list(doc, category) {
                    doc.set_scroll_left(list, 0.0);
                    self.refresh_affordance(doc, category);
                }
                true
            }
            Task::Refresh(category) => {
                self.refresh_affordance(doc, category);
                true
            }
            Task::Type | Task::HidePreloader => false,
        }
    }

    /// Handles a raw scroll event on `node`, refreshing immediately if it is a carousel list.
    pub fn on_scroll<D: Document>(&self, doc: &mut D, node: D::Node) -> Option<Affordance> {
        let category = self.category_of_list(doc, node)?;
        self.refresh_affordance(doc, category)
    }

    /// Handles a click on an indicator or a previous / next control.
    ///
    /// Disabled controls are ignored. Returns whether the click was consumed.
    pub fn on_click<D: Document>(
        &mut self,
        doc: &mut D,
        scheduler: &mut impl Scheduler,
        node: D::Node,
    ) -> bool {
        let sel = &self.options.selectors;
        if doc.has_class(node, &sel.indicator_class) {
            let Some(name) = doc.attribute(node, &sel.indicator_attr) else {
                return false;
            };
            return match name.parse::<Category>() {
                Ok(category) => {
                    self.switch_section(doc, scheduler, category);
                    true
                }
                Err(_err) => {
                    fdebug!(err = %_err, "Carousel::on_click: bad indicator");
                    false
                }
            };
        }

        let direction = if doc.has_class(node, &sel.prev_class) {
            Direction::Prev
        } else if doc.has_class(node, &sel.next_class) {
            Direction::Next
        } else {
            return false;
        };
        let Some(category) = self.category_of_control(doc, node) else {
            return false;
        };
        if doc.is_disabled(node) {
            return true;
        }
        self.navigate(doc, scheduler, category, direction);
        true
    }

    pub fn list<D: Document>(&self, doc: &D, category: Category) -> Option<D::Node> {
        doc.element_by_id(&self.options.selectors.list_id(category))
    }

    pub fn section<D: Document>(&self, doc: &D, category: Category) -> Option<D::Node> {
        doc.element_by_id(&self.options.selectors.section_id(category))
    }

    pub fn indicator<D: Document>(&self, doc: &D, category: Category) -> Option<D::Node> {
        let sel = &self.options.selectors;
        doc.elements_by_class(&sel.indicator_class)
            .into_iter()
            .find(|&n| doc.attribute(n, &sel.indicator_attr).as_deref() == Some(category.name()))
    }

    /// The previous / next controls of a list: descendants of the list's parent.
    pub fn controls<D: Document>(&self, doc: &D, list: D::Node) -> Option<(D::Node, D::Node)> {
        let sel = &self.options.selectors;
        let carousel = doc.parent(list)?;
        let prev = doc.descendants_by_class(carousel, &sel.prev_class).first().copied()?;
        let next = doc.descendants_by_class(carousel, &sel.next_class).first().copied()?;
        Some((prev, next))
    }

    pub fn category_of_list<D: Document>(&self, doc: &D, node: D::Node) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&c| self.list(doc, c) == Some(node))
    }

    pub fn category_of_control<D: Document>(&self, doc: &D, node: D::Node) -> Option<Category> {
        Category::ALL.into_iter().find(|&c| {
            self.list(doc, c)
                .and_then(|list| self.controls(doc, list))
                .is_some_and(|(prev, next)| prev == node || next == node)
        })
    }

    fn apply_control<D: Document>(&self, doc: &mut D, control: D::Node, enabled: bool) {
        let opacity = if enabled {
            &self.options.enabled_opacity
        } else {
            &self.options.disabled_opacity
        };
        doc.set_style(control, "opacity", opacity);
        doc.set_disabled(control, !enabled);
    }
}
