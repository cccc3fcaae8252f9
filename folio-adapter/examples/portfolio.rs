use folio::{Category, Document, PageOptions};
use folio_adapter::{ElementSpec, MemoryDocument, Page};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with `RUST_LOG=folio=trace,folio_adapter=debug` and `--features tracing` to see the
    // behaviors at work.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=debug")),
        )
        .init();

    // A page with one carousel of four 300px cards in a 632px viewport.
    let mut doc = MemoryDocument::new(800.0);
    let body = doc.insert(None, ElementSpec::new("body").layout(0.0, 2000.0))?;
    let projects = doc.insert(
        Some(body),
        ElementSpec::new("section").id("projects").layout(0.0, 1200.0),
    )?;
    for c in Category::ALL {
        doc.insert(
            Some(projects),
            ElementSpec::new("button")
                .class("project-nav-btn")
                .attr("data-category", c.name()),
        )?;
    }
    let section = doc.insert(
        Some(projects),
        ElementSpec::new("div")
            .id("data-section")
            .class("project-section"),
    )?;
    let carousel = doc.insert(Some(section), ElementSpec::new("div"))?;
    doc.insert(Some(carousel), ElementSpec::new("button").class("prev"))?;
    let list = doc.insert(
        Some(carousel),
        ElementSpec::new("div")
            .id("data-projects")
            .scrollable(4.0 * 332.0, 632.0),
    )?;
    for _ in 0..4 {
        doc.insert(
            Some(list),
            ElementSpec::new("div").class("project-card").width(300.0),
        )?;
    }
    let next = doc.insert(Some(carousel), ElementSpec::new("button").class("next"))?;

    let options = PageOptions::default()
        .with_carousel(folio::CarouselOptions::default().with_default_category(Category::Data));
    let mut page = Page::new(doc, options);
    page.init();

    let mut now_ms = 0;
    page.tick(now_ms);
    for _ in 0..4 {
        now_ms += 300;
        page.tick(now_ms);
        let consumed = page.click(next);
        now_ms += 300;
        page.tick(now_ms);

        let doc = page.document();
        let affordance = page.carousel().affordance(doc, Category::Data);
        println!(
            "t={now_ms} consumed={consumed} scroll_left={} next_disabled={} state={:?}",
            doc.scroll_metrics(list).scroll_left,
            doc.is_disabled(next),
            affordance.map(|a| a.state()),
        );
    }
    Ok(())
}
