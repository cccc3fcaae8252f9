//! A headless behavior engine for single-page portfolio sites.
//!
//! For a ready-made in-memory host (document tree, timer queue, page runtime), see the
//! `folio-adapter` crate.
//!
//! The centerpiece is [`Carousel`]: it keeps exactly one project category's section visible and
//! derives, for each category's horizontally scrolling list, whether the previous / next
//! controls should be enabled. Around it sit small presentation behaviors (anchor scrolling,
//! back-to-top, active nav links, scroll reveal, lazy images, a typewriter title, preloader,
//! form validation, footer year).
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a [`Document`] implementation (element lookup, classes, styles, scroll geometry)
//! - a [`Scheduler`] that runs deferred [`Task`]s on its event loop
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod back_to_top;
mod carousel;
mod category;
mod dom;
mod footer;
mod form;
mod lazy;
mod nav;
mod options;
mod preloader;
mod reveal;
mod types;
mod typewriter;


pub use anchor::{anchor_target, follow_anchor};
pub use back_to_top::{scroll_to_top, update_back_to_top};
pub use carousel::Carousel;
pub use category::{Category, ParseCategoryError};
pub use dom::{Document, Scheduler, Task};
pub use footer::stamp_year;
pub use form::{Validation, validate_form};
pub use lazy::LazyImages;
pub use nav::{current_section, highlight_nav};
pub use options::{CarouselOptions, PageOptions, RevealOptions, Selectors};
pub use preloader::{fade_preloader, hide_preloader};
pub use reveal::Reveal;
pub use types::{
    Affordance, CarouselState, Direction, LayoutBox, ScrollBehavior, ScrollMetrics, Viewport,
};
pub use typewriter::Typewriter;
