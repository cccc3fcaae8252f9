use chrono::Datelike;

use folio::{
    Carousel, Category, Direction, Document, LazyImages, PageOptions, Reveal, Task, Typewriter,
    Validation, fade_preloader, follow_anchor, hide_preloader, highlight_nav, scroll_to_top,
    stamp_year, update_back_to_top, validate_form,
};

use crate::{Debounce, Platform, ScrollTarget, TimerQueue};

/// Wires every page behavior to host events.
///
/// The host owns a `Page` and forwards:
/// - `init` when the document is ready, `on_load` when the window has loaded
/// - `click` for activations
/// - `tick(now_ms)` every frame/timer tick; it advances smooth scrolling, runs due
///   [`Task`]s and routes the scroll events the platform reported
pub struct Page<D: Platform> {
    doc: D,
    timers: TimerQueue,
    options: PageOptions,
    carousel: Carousel,
    reveal: Reveal<D::Node>,
    lazy: LazyImages<D::Node>,
    typewriter: Option<Typewriter<D::Node>>,
    nav_debounce: Debounce,
}

impl<D: Platform> Page<D> {
    pub fn new(doc: D, options: PageOptions) -> Self {
        Self {
            doc,
            timers: TimerQueue::new(),
            carousel: Carousel::new(options.carousel.clone()),
            reveal: Reveal::new(options.reveal.clone()),
            lazy: LazyImages::new(),
            typewriter: None,
            nav_debounce: Debounce::new(options.nav_debounce_ms),
            options,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(self) -> D {
        self.doc
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn reveal(&self) -> &Reveal<D::Node> {
        &self.reveal
    }

    pub fn lazy_images(&self) -> &LazyImages<D::Node> {
        &self.lazy
    }

    pub fn typewriter(&self) -> Option<&Typewriter<D::Node>> {
        self.typewriter.as_ref()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Document-ready setup, stamping the footer with the local calendar year.
    pub fn init(&mut self) {
        self.init_with_year(chrono::Local::now().year());
    }

    /// Document-ready setup with an explicit footer year.
    pub fn init_with_year(&mut self, year: i32) {
        adebug!(now_ms = self.now_ms(), "Page::init");
        self.carousel.init(&mut self.doc, &mut self.timers);

        self.reveal.observe(&mut self.doc);
        self.lazy.observe(&self.doc, &self.options);
        self.reveal.check(&mut self.doc);
        self.lazy.check(&mut self.doc, &self.options);

        self.typewriter = Typewriter::start(&mut self.doc, &mut self.timers, &self.options);
        stamp_year(&mut self.doc, &self.options, year);

        self.dispatch_scroll_events();
    }

    /// Window `load`: fades the preloader out.
    pub fn on_load(&mut self) {
        fade_preloader(&mut self.doc, &mut self.timers, &self.options);
    }

    /// Routes an activation of `node`. Returns whether a behavior consumed it.
    pub fn click(&mut self, node: D::Node) -> bool {
        let handled = if self.is_back_to_top(node) {
            scroll_to_top(&mut self.doc);
            true
        } else if self.carousel.on_click(&mut self.doc, &mut self.timers, node) {
            true
        } else {
            follow_anchor(&mut self.doc, node)
        };
        atrace!(?node, handled, "Page::click");
        handled
    }

    /// Programmatic category switch, as an indicator click would do.
    pub fn switch_section(&mut self, category: Category) -> bool {
        self.carousel
            .switch_section(&mut self.doc, &mut self.timers, category)
    }

    /// Programmatic carousel step, as a previous / next click would do (ignoring disabled state).
    pub fn navigate(&mut self, category: Category, direction: Direction) -> bool {
        self.carousel
            .navigate(&mut self.doc, &mut self.timers, category, direction)
    }

    pub fn validate(&mut self, form: D::Node) -> Validation<D::Node> {
        validate_form(&mut self.doc, form, &self.options.error_class)
    }

    /// Advances the page to `now_ms`.
    ///
    /// Due tasks run at their own due time, with smooth scrolling advanced to that time first, so
    /// a refresh scheduled after a navigation observes the scroll position of that moment.
    /// Returns the number of tasks run.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.dispatch_scroll_events();

        let mut ran = 0;
        while let Some(due) = self.timers.next_due().filter(|&due| due <= now_ms) {
            self.timers.advance_to(due);
            self.doc.advance(due);
            self.dispatch_scroll_events();
            self.poll_nav_debounce(due);

            while let Some(task) = self.timers.pop_due() {
                self.run_task(task);
                ran += 1;
            }
            self.dispatch_scroll_events();
        }

        self.timers.advance_to(now_ms);
        self.doc.advance(now_ms);
        self.dispatch_scroll_events();
        self.poll_nav_debounce(now_ms);
        ran
    }

    /// Window scroll: back-to-top visibility, nav highlight, reveal and lazy checks.
    pub fn on_window_scroll(&mut self) {
        update_back_to_top(&mut self.doc, &self.options);
        highlight_nav(&mut self.doc, &self.options);
        self.nav_debounce.trigger(self.timers.now_ms());
        self.reveal.check(&mut self.doc);
        self.lazy.check(&mut self.doc, &self.options);
    }

    /// Scroll on an element: carousel lists refresh their controls immediately.
    pub fn on_element_scroll(&mut self, node: D::Node) {
        self.carousel.on_scroll(&mut self.doc, node);
    }

    fn run_task(&mut self, task: Task) {
        atrace!(?task, now_ms = self.timers.now_ms(), "Page::run_task");
        match task {
            Task::Settle { .. } | Task::Refresh(_) => {
                self.carousel.run(&mut self.doc, task);
            }
            Task::Type => {
                if let Some(tw) = self.typewriter.as_mut() {
                    tw.step(&mut self.doc, &mut self.timers);
                }
            }
            Task::HidePreloader => hide_preloader(&mut self.doc, &self.options),
        }
    }

    fn dispatch_scroll_events(&mut self) {
        // Handlers may scroll again; keep draining until the platform is quiet.
        loop {
            let events = self.doc.take_scroll_events();
            if events.is_empty() {
                return;
            }
            for event in events {
                match event {
                    ScrollTarget::Window => self.on_window_scroll(),
                    ScrollTarget::Element(node) => self.on_element_scroll(node),
                }
            }
        }
    }

    fn poll_nav_debounce(&mut self, now_ms: u64) {
        if self.nav_debounce.poll(now_ms) {
            highlight_nav(&mut self.doc, &self.options);
        }
    }

    fn is_back_to_top(&self, node: D::Node) -> bool {
        self.doc.element_by_id(&self.options.back_to_top_id) == Some(node)
    }
}

impl<D: Platform + core::fmt::Debug> core::fmt::Debug for Page<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("doc", &self.doc)
            .field("timers", &self.timers)
            .field("active", &self.carousel.active())
            .finish_non_exhaustive()
    }
}
