use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::Category;

/// Element naming contract between the page markup and the behaviors.
///
/// Ids are derived from a category name through `{name}` placeholders so the markup can use
/// any naming scheme with a deterministic per-category id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    /// Id pattern of a category's container section.
    pub section_id: String,
    /// Id pattern of a category's horizontally scrollable list.
    pub list_id: String,
    /// Class shared by every category section.
    pub section_class: String,
    /// Class of the category-switch indicator controls.
    pub indicator_class: String,
    /// Attribute on an indicator naming its category.
    pub indicator_attr: String,
    /// Class of an item inside a list.
    pub item_class: String,
    pub prev_class: String,
    pub next_class: String,
    /// Class toggled on the active section and indicator.
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            section_id: "{name}-section".into(),
            list_id: "{name}-projects".into(),
            section_class: "project-section".into(),
            indicator_class: "project-nav-btn".into(),
            indicator_attr: "data-category".into(),
            item_class: "project-card".into(),
            prev_class: "prev".into(),
            next_class: "next".into(),
            active_class: "active".into(),
        }
    }
}

impl Selectors {
    pub fn section_id(&self, category: Category) -> String {
        self.section_id.replace("{name}", category.name())
    }

    pub fn list_id(&self, category: Category) -> String {
        self.list_id.replace("{name}", category.name())
    }
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub selectors: Selectors,
    /// Category shown after initialization.
    pub default_category: Category,
    /// Delay before post-transition work (scroll reset, affordance refresh) runs.
    pub settle_delay_ms: u64,
    /// Space between two list items, added to an item's width to form one navigation step.
    pub item_gap: f64,
    /// Tolerance applied at both scroll bounds when deriving the affordance.
    pub epsilon: f64,
    /// Opacity of a disabled navigation control.
    pub disabled_opacity: String,
    /// Opacity of an enabled navigation control.
    pub enabled_opacity: String,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            default_category: Category::Frontend,
            settle_delay_ms: 300,
            item_gap: 32.0,
            epsilon: 10.0,
            disabled_opacity: "0.5".into(),
            enabled_opacity: "1".into(),
        }
    }
}

impl CarouselOptions {
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_item_gap(mut self, gap: f64) -> Self {
        self.item_gap = gap;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Configuration of the scroll-reveal animation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealOptions {
    /// Elements carrying any of these classes are animated.
    pub classes: Vec<String>,
    /// Minimum visible fraction before an element is revealed.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink it.
    pub bottom_margin: f64,
    /// Initial downward offset, in pixels.
    pub offset_y: f64,
    /// Transition duration, in seconds.
    pub duration_s: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            classes: vec!["project-card".into(), "tool-item".into()],
            threshold: 0.1,
            bottom_margin: -50.0,
            offset_y: 30.0,
            duration_s: 0.6,
        }
    }
}

impl RevealOptions {
    pub(crate) fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_y)
    }

    pub(crate) fn transition(&self) -> String {
        format!(
            "opacity {d}s ease, transform {d}s ease",
            d = self.duration_s
        )
    }
}

/// Configuration of the whole page: the carousel plus every presentation behavior.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageOptions {
    pub carousel: CarouselOptions,
    pub reveal: RevealOptions,

    pub back_to_top_id: String,
    /// Window scroll offset past which the back-to-top control becomes visible.
    pub back_to_top_threshold: f64,
    pub visible_class: String,

    pub nav_link_class: String,
    /// Distance above a section's top at which it already counts as current.
    pub nav_offset: f64,
    /// Quiet period of the debounced nav-link refresh.
    pub nav_debounce_ms: u64,

    pub typewriter_class: String,
    pub typewriter_speed_ms: u64,

    pub lazy_attr: String,
    pub lazy_class: String,

    pub preloader_class: String,
    pub preloader_delay_ms: u64,

    pub error_class: String,
    pub year_id: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            carousel: CarouselOptions::default(),
            reveal: RevealOptions::default(),
            back_to_top_id: "back-to-top".into(),
            back_to_top_threshold: 300.0,
            visible_class: "visible".into(),
            nav_link_class: "nav-link".into(),
            nav_offset: 100.0,
            nav_debounce_ms: 10,
            typewriter_class: "pixel-title".into(),
            typewriter_speed_ms: 50,
            lazy_attr: "data-src".into(),
            lazy_class: "lazy".into(),
            preloader_class: "preloader".into(),
            preloader_delay_ms: 300,
            error_class: "error".into(),
            year_id: "current-year".into(),
        }
    }
}

impl PageOptions {
    pub fn with_carousel(mut self, carousel: CarouselOptions) -> Self {
        self.carousel = carousel;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealOptions) -> Self {
        self.reveal = reveal;
        self
    }
}
