//! Smooth scrolling system for the portfolio page
//!
//! Implements nvim-like smooth scrolling with configurable easing, plus
//! section anchors so the page can be navigated by named section
//! (hero, about, projects, ...) as well as by line.
//!
//! All time-dependent entry points take an explicit `now: Instant` so the
//! animation math is deterministic under test.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use folio_tui::scroll::{ScrollNavigator, SectionAnchor};
//!
//! let mut nav = ScrollNavigator::with_defaults();
//! nav.set_bounds(120);
//! nav.set_anchors(vec![SectionAnchor::new("about", 24)]);
//!
//! nav.scroll_to_section("about");
//!
//! // In the main loop, update each frame and get the current offset
//! let offset = nav.update(Instant::now());
//! ```

pub mod config;
pub mod easing;
pub mod navigator;
pub mod timing;

pub use config::{EasingType, ScrollConfig, ScrollConfigExt};
pub use easing::EasingTypeExt;
pub use navigator::{ScrollNavigator, SectionAnchor};
