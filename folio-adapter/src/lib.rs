//! Host utilities for the `folio` crate.
//!
//! `folio` is UI-agnostic: it talks to a document through the `Document` trait and defers work
//! through the `Scheduler` trait. This crate provides a framework-neutral host for it:
//!
//! - [`MemoryDocument`]: an in-memory document tree with platform-side scroll clamping and
//!   tween-driven smooth scrolling
//! - [`TimerQueue`]: a FIFO timer queue implementing `Scheduler`
//! - [`Debounce`]: a trailing-edge debounce
//! - [`Page`]: the runtime that wires every behavior to host events
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod debounce;
mod document;
mod page;
mod timer;
mod tween;

#[cfg(test)]
mod tests;

pub use debounce::Debounce;
pub use document::{DocumentError, ElementSpec, MemoryDocument, NodeId, Platform, ScrollTarget};
pub use page::Page;
pub use timer::TimerQueue;
pub use tween::{Easing, Tween};
