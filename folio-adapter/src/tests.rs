use crate::*;

use chrono::Datelike;
use folio::{Affordance, Category, Direction, Document, PageOptions, Scheduler, Task};

const CARD: f64 = 300.0;
const GAP: f64 = 32.0;
const VIEW: f64 = 632.0;

struct Fixture {
    page: Page<MemoryDocument>,
    sections: [NodeId; 3],
    indicators: [NodeId; 3],
    lists: [NodeId; 3],
    prev: [NodeId; 3],
    next: [NodeId; 3],
    nav_links: [NodeId; 3],
    title: NodeId,
    tool: NodeId,
    image: NodeId,
    form: NodeId,
    fields: [NodeId; 3],
    back_to_top: NodeId,
    year: NodeId,
    preloader: NodeId,
}

fn idx(category: Category) -> usize {
    Category::ALL.iter().position(|&c| c == category).unwrap()
}

/// A full portfolio page with `items[i]` cards in `Category::ALL[i]`'s carousel.
fn portfolio(items: [usize; 3]) -> Fixture {
    let mut doc = MemoryDocument::new(800.0);
    let body = doc
        .insert(None, ElementSpec::new("body").layout(0.0, 3000.0))
        .unwrap();
    let preloader = doc
        .insert(Some(body), ElementSpec::new("div").class("preloader"))
        .unwrap();

    let nav = doc.insert(Some(body), ElementSpec::new("nav")).unwrap();
    let nav_links = ["about", "projects", "contact"].map(|id| {
        let spec = ElementSpec::new("a")
            .class("nav-link")
            .attr("href", format!("#{id}"));
        doc.insert(Some(nav), spec).unwrap()
    });

    let about = doc
        .insert(
            Some(body),
            ElementSpec::new("section").id("about").layout(0.0, 600.0),
        )
        .unwrap();
    let title = doc
        .insert(
            Some(about),
            ElementSpec::new("h1").class("pixel-title").text("Hello"),
        )
        .unwrap();

    let projects = doc
        .insert(
            Some(body),
            ElementSpec::new("section")
                .id("projects")
                .layout(600.0, 1200.0),
        )
        .unwrap();
    let indicators = Category::ALL.map(|c| {
        let spec = ElementSpec::new("button")
            .class("project-nav-btn")
            .attr("data-category", c.name());
        doc.insert(Some(projects), spec).unwrap()
    });

    let mut sections = Vec::new();
    let mut lists = Vec::new();
    let mut prev = Vec::new();
    let mut next = Vec::new();
    for (c, &n) in Category::ALL.iter().zip(items.iter()) {
        let section = doc
            .insert(
                Some(projects),
                ElementSpec::new("div")
                    .id(format!("{c}-section"))
                    .class("project-section"),
            )
            .unwrap();
        let carousel = doc
            .insert(Some(section), ElementSpec::new("div").class("carousel"))
            .unwrap();
        prev.push(
            doc.insert(Some(carousel), ElementSpec::new("button").class("prev"))
                .unwrap(),
        );
        let list = doc
            .insert(
                Some(carousel),
                ElementSpec::new("div")
                    .id(format!("{c}-projects"))
                    .width(VIEW)
                    .scrollable(n as f64 * (CARD + GAP), VIEW),
            )
            .unwrap();
        for _ in 0..n {
            doc.insert(
                Some(list),
                ElementSpec::new("div")
                    .class("project-card")
                    .width(CARD)
                    .layout(700.0, 300.0),
            )
            .unwrap();
        }
        next.push(
            doc.insert(Some(carousel), ElementSpec::new("button").class("next"))
                .unwrap(),
        );
        sections.push(section);
        lists.push(list);
    }

    let tool = doc
        .insert(
            Some(body),
            ElementSpec::new("div").class("tool-item").layout(2200.0, 100.0),
        )
        .unwrap();

    let contact = doc
        .insert(
            Some(body),
            ElementSpec::new("section")
                .id("contact")
                .layout(1800.0, 800.0),
        )
        .unwrap();
    let form = doc
        .insert(Some(contact), ElementSpec::new("form").id("contact-form"))
        .unwrap();
    let fields = [
        ElementSpec::new("input").attr("required", ""),
        ElementSpec::new("textarea").attr("required", "").value("   "),
        ElementSpec::new("input").attr("name", "phone"),
    ]
    .map(|spec| doc.insert(Some(form), spec).unwrap());

    let image = doc
        .insert(
            Some(body),
            ElementSpec::new("img")
                .class("lazy")
                .attr("data-src", "img/dashboard.png")
                .layout(2600.0, 200.0),
        )
        .unwrap();
    let back_to_top = doc
        .insert(Some(body), ElementSpec::new("button").id("back-to-top"))
        .unwrap();
    let year = doc
        .insert(Some(body), ElementSpec::new("span").id("current-year"))
        .unwrap();

    Fixture {
        page: Page::new(doc, PageOptions::default()),
        sections: sections.try_into().unwrap(),
        indicators,
        lists: lists.try_into().unwrap(),
        prev: prev.try_into().unwrap(),
        next: next.try_into().unwrap(),
        nav_links,
        title,
        tool,
        image,
        form,
        fields,
        back_to_top,
        year,
        preloader,
    }
}

fn ready(items: [usize; 3]) -> Fixture {
    let mut f = portfolio(items);
    f.page.init_with_year(2026);
    f
}

impl Fixture {
    fn doc(&self) -> &MemoryDocument {
        self.page.document()
    }

    fn scroll_left(&self, category: Category) -> f64 {
        self.doc()
            .scroll_metrics(self.lists[idx(category)])
            .scroll_left
    }

    /// The affordance as rendered on the controls.
    fn controls(&self, category: Category) -> Affordance {
        let i = idx(category);
        Affordance::new(
            !self.doc().is_disabled(self.prev[i]),
            !self.doc().is_disabled(self.next[i]),
        )
    }

    fn active_sections(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.doc().has_class(self.sections[idx(c)], "active"))
            .collect()
    }

    fn active_indicators(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.doc().has_class(self.indicators[idx(c)], "active"))
            .collect()
    }

    fn snapshot(&self) -> String {
        let mut out = format!(
            "{:?} {:?} {:?}",
            self.page.carousel().active(),
            self.active_sections(),
            self.active_indicators()
        );
        for c in Category::ALL {
            out.push_str(&format!(" {}:{}:{:?}", c, self.scroll_left(c), self.controls(c)));
        }
        out
    }
}

#[test]
fn init_shows_default_section_and_starting_affordance() {
    let f = ready([1, 0, 4]);

    assert_eq!(f.page.carousel().active(), Some(Category::Frontend));
    assert_eq!(f.active_sections(), vec![Category::Frontend]);
    assert_eq!(f.active_indicators(), vec![Category::Frontend]);

    // One card fits the viewport: nothing to scroll.
    assert_eq!(f.controls(Category::Frontend), Affordance::new(false, false));
    // An empty list fits too.
    assert_eq!(f.controls(Category::Backend), Affordance::new(false, false));
    // Four cards overflow: only "next" is possible.
    assert_eq!(f.controls(Category::Data), Affordance::new(false, true));

    let data = idx(Category::Data);
    assert_eq!(f.doc().style(f.prev[data], "opacity").as_deref(), Some("0.5"));
    assert_eq!(f.doc().style(f.next[data], "opacity").as_deref(), Some("1"));
    assert_eq!(
        f.doc().style(f.lists[data], "scroll-behavior").as_deref(),
        Some("smooth")
    );
}

#[test]
fn switching_leaves_exactly_one_section_active() {
    let mut f = ready([4, 4, 4]);
    for c in [Category::Data, Category::Backend, Category::Frontend, Category::Data] {
        assert!(f.page.switch_section(c));
        assert_eq!(f.active_sections(), vec![c]);
        assert_eq!(f.active_indicators(), vec![c]);
        assert_eq!(f.page.carousel().active(), Some(c));
    }
}

#[test]
fn indicator_clicks_switch_sections() {
    let mut f = ready([4, 4, 4]);
    let backend = f.indicators[idx(Category::Backend)];
    assert!(f.page.click(backend));
    assert_eq!(f.active_sections(), vec![Category::Backend]);
    assert_eq!(f.active_indicators(), vec![Category::Backend]);
}

#[test]
fn switching_twice_matches_switching_once() {
    let mut once = ready([4, 4, 4]);
    let mut twice = ready([4, 4, 4]);

    once.page.switch_section(Category::Data);
    twice.page.switch_section(Category::Data);
    twice.page.switch_section(Category::Data);
    assert_eq!(once.snapshot(), twice.snapshot());

    once.page.tick(1000);
    twice.page.tick(1000);
    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn navigating_walks_the_worked_scenario() {
    let mut f = ready([1, 1, 4]);
    let data = Category::Data;
    f.page.switch_section(data);
    f.page.tick(300);
    assert_eq!(f.controls(data), Affordance::new(false, true));

    let next = f.next[idx(data)];

    assert!(f.page.click(next));
    f.page.tick(600);
    assert_eq!(f.scroll_left(data), 332.0);
    assert_eq!(f.controls(data), Affordance::new(true, true));

    assert!(f.page.click(next));
    f.page.tick(900);
    assert_eq!(f.scroll_left(data), 664.0);
    assert_eq!(f.controls(data), Affordance::new(true, true));

    assert!(f.page.click(next));
    f.page.tick(1200);
    assert_eq!(f.scroll_left(data), 696.0);
    assert_eq!(f.controls(data), Affordance::new(true, false));
    assert_eq!(
        f.page.carousel().affordance(f.doc(), data),
        Some(Affordance::new(true, false))
    );
    assert_eq!(
        f.doc().style(next, "opacity").as_deref(),
        Some("0.5")
    );

    // A disabled control is consumed but does nothing.
    assert!(f.page.timers().is_empty());
    assert!(f.page.click(next));
    assert!(f.page.timers().is_empty());
    assert!(!f.doc().is_animating());
}

#[test]
fn previous_steps_back_by_one_item() {
    let mut f = ready([1, 1, 4]);
    f.page.switch_section(Category::Data);
    f.page.tick(300);
    f.page.navigate(Category::Data, Direction::Next);
    f.page.navigate(Category::Data, Direction::Next);
    f.page.tick(600);
    assert_eq!(f.scroll_left(Category::Data), 664.0);

    assert!(f.page.click(f.prev[idx(Category::Data)]));
    f.page.tick(900);
    assert_eq!(f.scroll_left(Category::Data), 332.0);
    assert_eq!(f.controls(Category::Data), Affordance::new(true, true));
}

#[test]
fn rapid_steps_accumulate_and_clamp_at_the_end() {
    let mut f = ready([1, 1, 4]);
    f.page.switch_section(Category::Data);
    f.page.tick(300);

    for _ in 0..3 {
        assert!(f.page.navigate(Category::Data, Direction::Next));
    }
    assert_eq!(
        f.doc().scroll_target(f.lists[idx(Category::Data)]),
        Some(696.0)
    );

    f.page.tick(600);
    assert_eq!(f.scroll_left(Category::Data), 696.0);
    assert_eq!(f.controls(Category::Data), Affordance::new(true, false));
}

#[test]
fn navigating_an_empty_list_is_a_no_op() {
    let mut f = ready([1, 0, 4]);
    f.page.tick(300);
    let before = f.snapshot();
    let pending = f.page.timers().len();

    assert!(!f.page.navigate(Category::Backend, Direction::Next));
    assert!(!f.page.navigate(Category::Backend, Direction::Prev));

    assert_eq!(f.page.timers().len(), pending);
    assert_eq!(f.snapshot(), before);
    assert!(!f.doc().is_animating());
}

#[test]
fn raw_scroll_events_refresh_immediately() {
    let mut f = ready([1, 1, 4]);
    f.page.switch_section(Category::Data);
    f.page.tick(300);

    let list = f.lists[idx(Category::Data)];
    f.page.document_mut().set_scroll_left(list, 690.0);
    f.page.tick(300);
    assert_eq!(f.controls(Category::Data), Affordance::new(true, false));

    // Dragging past the end is clamped by the platform.
    f.page.document_mut().set_scroll_left(list, 5000.0);
    f.page.tick(300);
    assert_eq!(f.scroll_left(Category::Data), 696.0);

    f.page.document_mut().set_scroll_left(list, 4.0);
    f.page.tick(300);
    assert_eq!(f.controls(Category::Data), Affordance::new(false, true));
}

#[test]
fn becoming_active_resets_the_list_to_its_start() {
    let mut f = ready([1, 1, 4]);
    f.page.switch_section(Category::Data);
    f.page.tick(300);
    f.page.navigate(Category::Data, Direction::Next);
    f.page.tick(600);
    assert_eq!(f.scroll_left(Category::Data), 332.0);

    f.page.switch_section(Category::Frontend);
    f.page.tick(900);
    assert_eq!(f.scroll_left(Category::Data), 332.0);

    f.page.switch_section(Category::Data);
    // The reset waits for the settle delay.
    f.page.tick(1199);
    assert_eq!(f.scroll_left(Category::Data), 332.0);
    f.page.tick(1200);
    assert_eq!(f.scroll_left(Category::Data), 0.0);
    assert_eq!(f.controls(Category::Data), Affordance::new(false, true));
}

#[test]
fn superseded_settles_are_skipped() {
    let mut f = ready([1, 1, 4]);
    f.page.tick(300);

    f.page.switch_section(Category::Data);
    let list = f.lists[idx(Category::Data)];
    f.page.document_mut().set_scroll_left(list, 500.0);
    f.page.tick(400);
    f.page.switch_section(Category::Frontend);

    // The data settle (due at 600) is stale: data keeps its offset.
    f.page.tick(700);
    assert_eq!(f.scroll_left(Category::Data), 500.0);
    assert_eq!(f.active_sections(), vec![Category::Frontend]);
}

#[test]
fn missing_elements_degrade_to_no_ops() {
    let mut doc = MemoryDocument::new(800.0);
    let section = doc
        .insert(
            None,
            ElementSpec::new("div")
                .id("frontend-section")
                .class("project-section"),
        )
        .unwrap();
    // A list without controls or cards.
    doc.insert(
        Some(section),
        ElementSpec::new("div")
            .id("frontend-projects")
            .scrollable(1000.0, 500.0),
    )
    .unwrap();
    let stray = doc
        .insert(
            None,
            ElementSpec::new("button")
                .class("project-nav-btn")
                .attr("data-category", "design"),
        )
        .unwrap();

    let mut page = Page::new(doc, PageOptions::default());
    page.init_with_year(2026);
    page.on_load();
    assert_eq!(page.carousel().active(), Some(Category::Frontend));
    assert!(page.typewriter().is_none());

    assert!(!page.switch_section(Category::Backend));
    assert_eq!(page.carousel().active(), Some(Category::Frontend));

    assert!(!page.navigate(Category::Frontend, Direction::Next));
    assert!(!page.navigate(Category::Data, Direction::Next));
    assert!(!page.click(stray));

    assert_eq!(
        page.carousel().affordance(page.document(), Category::Frontend),
        Some(Affordance::new(false, true))
    );
    assert_eq!(page.carousel().affordance(page.document(), Category::Data), None);

    page.document_mut().set_window_scroll(400.0);
    page.tick(1000);
    assert!(page.timers().is_empty());
}

#[test]
fn back_to_top_appears_past_the_threshold() {
    let mut f = ready([1, 1, 1]);
    f.page.document_mut().set_window_scroll(300.0);
    f.page.tick(0);
    assert!(!f.doc().has_class(f.back_to_top, "visible"));

    f.page.document_mut().set_window_scroll(301.0);
    f.page.tick(0);
    assert!(f.doc().has_class(f.back_to_top, "visible"));

    assert!(f.page.click(f.back_to_top));
    f.page.tick(240);
    assert_eq!(f.doc().viewport().scroll_y, 0.0);
    assert!(!f.doc().has_class(f.back_to_top, "visible"));
}

#[test]
fn nav_link_follows_the_current_section() {
    let mut f = ready([1, 1, 1]);
    let active = |f: &Fixture| {
        f.nav_links
            .iter()
            .map(|&l| f.doc().has_class(l, "active"))
            .collect::<Vec<_>>()
    };

    f.page.document_mut().set_window_scroll(120.0);
    f.page.tick(0);
    assert_eq!(active(&f), vec![true, false, false]);

    // 100 above a section's top already counts as inside it.
    f.page.document_mut().set_window_scroll(550.0);
    f.page.tick(5);
    assert_eq!(active(&f), vec![false, true, false]);

    f.page.tick(20);
    assert_eq!(active(&f), vec![false, true, false]);
}

#[test]
fn anchor_clicks_scroll_their_target_into_view() {
    let mut f = ready([1, 1, 1]);
    let contact = f.nav_links[2];
    assert!(f.page.click(contact));
    f.page.tick(240);
    assert_eq!(f.doc().viewport().scroll_y, 1800.0);
    assert!(f.doc().has_class(contact, "active"));

    let bare = f
        .page
        .document_mut()
        .insert(None, ElementSpec::new("a").attr("href", "#"))
        .unwrap();
    let external = f
        .page
        .document_mut()
        .insert(None, ElementSpec::new("a").attr("href", "https://example.com"))
        .unwrap();
    let dangling = f
        .page
        .document_mut()
        .insert(None, ElementSpec::new("a").attr("href", "#nowhere"))
        .unwrap();
    assert!(!f.page.click(bare));
    assert!(!f.page.click(external));
    assert!(!f.page.click(dangling));
}

#[test]
fn reveal_fades_elements_in_once_visible() {
    let mut f = ready([1, 1, 1]);
    assert_eq!(f.doc().style(f.tool, "opacity").as_deref(), Some("0"));
    assert_eq!(
        f.doc().style(f.tool, "transform").as_deref(),
        Some("translateY(30px)")
    );
    assert!(f.page.reveal().pending().contains(&f.tool));

    f.page.document_mut().set_window_scroll(1600.0);
    f.page.tick(0);
    assert_eq!(f.doc().style(f.tool, "opacity").as_deref(), Some("1"));
    assert_eq!(
        f.doc().style(f.tool, "transform").as_deref(),
        Some("translateY(0)")
    );

    // Scrolling away does not hide it again.
    f.page.document_mut().set_window_scroll(0.0);
    f.page.tick(0);
    assert_eq!(f.doc().style(f.tool, "opacity").as_deref(), Some("1"));
    assert!(!f.page.reveal().pending().contains(&f.tool));
}

#[test]
fn reveal_needs_ten_percent_above_the_margin() {
    let mut f = ready([1, 1, 1]);
    // Root bottom is 2250 (-50 margin): 50 of 100 visible.
    f.page.document_mut().set_window_scroll(1500.0);
    f.page.tick(0);
    assert_eq!(f.doc().style(f.tool, "opacity").as_deref(), Some("1"));

    let mut g = ready([1, 1, 1]);
    // Root bottom is 2205: 5 of 100 visible.
    g.page.document_mut().set_window_scroll(1455.0);
    g.page.tick(0);
    assert_eq!(g.doc().style(g.tool, "opacity").as_deref(), Some("0"));
}

#[test]
fn lazy_images_load_once_visible() {
    let mut f = ready([1, 1, 1]);
    assert_eq!(f.doc().attribute(f.image, "src"), None);
    assert_eq!(f.page.lazy_images().pending(), &[f.image]);

    f.page.document_mut().set_window_scroll(2200.0);
    f.page.tick(0);
    assert_eq!(
        f.doc().attribute(f.image, "src").as_deref(),
        Some("img/dashboard.png")
    );
    assert!(!f.doc().has_class(f.image, "lazy"));
    assert!(f.page.lazy_images().pending().is_empty());
}

#[test]
fn typewriter_retypes_the_title() {
    let mut f = portfolio([1, 1, 1]);
    f.page.init_with_year(2026);
    assert_eq!(f.doc().text(f.title), "H");

    f.page.tick(50);
    assert_eq!(f.doc().text(f.title), "He");

    f.page.tick(200);
    assert_eq!(f.doc().text(f.title), "Hello");
    let tw = f.page.typewriter().unwrap();
    assert!(tw.is_done());
    assert_eq!(tw.text(), "Hello");
    assert!(f.page.timers().pending().all(|(_, t)| t != Task::Type));
}

#[test]
fn preloader_fades_then_leaves_the_layout() {
    let mut f = ready([1, 1, 1]);
    f.page.on_load();
    assert_eq!(f.doc().style(f.preloader, "opacity").as_deref(), Some("0"));

    f.page.tick(299);
    assert_eq!(f.doc().style(f.preloader, "display"), None);
    f.page.tick(300);
    assert_eq!(
        f.doc().style(f.preloader, "display").as_deref(),
        Some("none")
    );
}

#[test]
fn form_validation_visits_every_required_field() {
    let mut f = ready([1, 1, 1]);
    let [name, message, phone] = f.fields;

    let report = f.page.validate(f.form);
    assert!(!report.is_valid());
    assert_eq!(report.checked, 2);
    assert_eq!(report.invalid, vec![name, message]);
    assert!(f.doc().has_class(name, "error"));
    assert!(f.doc().has_class(message, "error"));
    assert!(!f.doc().has_class(phone, "error"));

    f.page.document_mut().set_value(name, "Ana");
    f.page.document_mut().set_value(message, "Hi there");
    let report = f.page.validate(f.form);
    assert!(report.is_valid());
    assert!(!f.doc().has_class(name, "error"));
    assert!(!f.doc().has_class(message, "error"));
}

#[test]
fn footer_shows_the_year() {
    let f = ready([1, 1, 1]);
    assert_eq!(f.doc().text(f.year), "2026");

    let mut g = portfolio([1, 1, 1]);
    g.page.init();
    assert_eq!(
        g.doc().text(g.year),
        chrono::Local::now().year().to_string()
    );
}

#[test]
fn timer_queue_runs_in_due_then_fifo_order() {
    let mut q = TimerQueue::new();
    q.defer(100, Task::Refresh(Category::Data));
    q.defer(50, Task::Type);
    q.defer(100, Task::HidePreloader);
    assert_eq!(q.len(), 3);
    assert_eq!(q.next_due(), Some(50));

    q.advance_to(49);
    assert_eq!(q.pop_due(), None);

    q.advance_to(100);
    assert_eq!(q.pop_due(), Some(Task::Type));
    assert_eq!(q.pop_due(), Some(Task::Refresh(Category::Data)));
    assert_eq!(q.pop_due(), Some(Task::HidePreloader));
    assert_eq!(q.pop_due(), None);

    // Time never moves backwards; delays count from the current time.
    q.advance_to(10);
    assert_eq!(q.now_ms(), 100);
    q.defer(0, Task::Type);
    assert_eq!(q.next_due(), Some(100));
}

#[test]
fn debounce_fires_once_per_quiet_period() {
    let mut d = Debounce::new(10);
    assert!(!d.poll(100));

    d.trigger(0);
    assert!(!d.poll(5));
    d.trigger(8);
    assert!(!d.poll(10));
    assert!(d.poll(18));
    assert!(!d.poll(30));

    d.trigger(40);
    d.cancel();
    assert!(!d.is_pending());
    assert!(!d.poll(100));
}

#[test]
fn tween_lands_exactly_on_target() {
    let t = Tween::new(0.0, 332.0, 100, 240, Easing::Linear);
    assert_eq!(t.sample(100), 0.0);
    assert_eq!(t.sample(220), 166.0);
    assert_eq!(t.sample(340), 332.0);
    assert!(t.is_done(340));

    let mut eased = Tween::new(332.0, 664.0, 0, 240, Easing::EaseInOutCubic);
    assert!(eased.sample(60) < 332.0 + 83.0);
    eased.retarget(120, 696.0, 240);
    assert_eq!(eased.from, 498.0);
    assert_eq!(eased.sample(360), 696.0);

    assert_eq!(Tween::new(0.0, 1.0, 0, 0, Easing::SmoothStep).duration_ms, 1);
}

#[test]
fn document_rejects_duplicate_ids_and_unknown_parents() {
    let mut doc = MemoryDocument::default();
    doc.insert(None, ElementSpec::new("div").id("a")).unwrap();
    assert_eq!(
        doc.insert(None, ElementSpec::new("div").id("a")),
        Err(DocumentError::DuplicateId("a".into()))
    );
    assert_eq!(
        doc.insert(Some(NodeId(42)), ElementSpec::new("div")),
        Err(DocumentError::UnknownParent(NodeId(42)))
    );
    assert_eq!(
        DocumentError::DuplicateId("a".into()).to_string(),
        "duplicate element id `a`"
    );
}

#[test]
fn document_queries_follow_tree_order() {
    let mut doc = MemoryDocument::default();
    let a = doc.insert(None, ElementSpec::new("div").class("x")).unwrap();
    let b = doc.insert(None, ElementSpec::new("div").class("x")).unwrap();
    // Inserted last, but sits inside `a`, before `b`.
    let a1 = doc
        .insert(Some(a), ElementSpec::new("span").class("x"))
        .unwrap();

    assert_eq!(doc.elements_by_class("x"), vec![a, a1, b]);
    assert_eq!(doc.descendants_by_class(a, "x"), vec![a1]);
    assert_eq!(doc.parent(a1), Some(a));
    assert_eq!(doc.tag_name(a1), "span");

    doc.set_attribute(b, "id", "bee");
    assert_eq!(doc.element_by_id("bee"), Some(b));
    doc.remove_attribute(b, "id");
    assert_eq!(doc.element_by_id("bee"), None);
}

#[test]
fn smooth_scroll_reports_every_frame_as_a_scroll_event() {
    let mut doc = MemoryDocument::new(800.0).with_smooth_scroll(100, Easing::Linear);
    let list = doc
        .insert(
            None,
            ElementSpec::new("div")
                .id("list")
                .scrollable(1000.0, 500.0),
        )
        .unwrap();

    doc.scroll_by(list, 200.0, folio::ScrollBehavior::Smooth);
    assert!(doc.take_scroll_events().is_empty());

    doc.advance(50);
    assert_eq!(doc.scroll_metrics(list).scroll_left, 100.0);
    doc.advance(100);
    assert_eq!(doc.scroll_metrics(list).scroll_left, 200.0);
    assert_eq!(
        doc.take_scroll_events(),
        vec![ScrollTarget::Element(list), ScrollTarget::Element(list)]
    );
    assert!(!doc.is_animating());

    // Setting the same offset is not a scroll.
    doc.set_scroll_left(list, 200.0);
    assert!(doc.take_scroll_events().is_empty());

    doc.scroll_by(list, -1000.0, folio::ScrollBehavior::Instant);
    assert_eq!(doc.scroll_metrics(list).scroll_left, 0.0);
    assert_eq!(doc.take_scroll_events(), vec![ScrollTarget::Element(list)]);
}
