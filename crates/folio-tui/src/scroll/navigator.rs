//! Scroll navigation controller
//!
//! Combines easing and timing utilities into the page's single scrolling
//! authority: it owns the current offset, animates toward targets, and
//! resolves section ids to line offsets via anchors.
//!
//! Scroll requests only record intent (a pending target or delta); the
//! animation itself is started and advanced by `update()`, which takes an
//! explicit `now` and must be called every frame.

use std::time::{Duration, Instant};

use tracing::debug;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

/// A named section's starting line offset within the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: String,
    pub offset: u16,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, offset: u16) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll navigation controller for the portfolio page
///
/// Call the `scroll_*` methods to request movement, then `update()` each
/// frame to advance the animation and get the interpolated offset.
#[derive(Debug, Clone)]
pub struct ScrollNavigator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll offset (always up-to-date)
    offset: u16,
    /// Pending absolute target, set by scroll_to and section jumps
    pending_target: Option<u16>,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
    /// Largest valid offset (total page height minus viewport height)
    max_scroll: u16,
    /// Section anchors in page order
    anchors: Vec<SectionAnchor>,
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollNavigator {
    /// Create a new navigator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0,
            pending_target: None,
            pending_delta: 0,
            max_scroll: 0,
            anchors: Vec::new(),
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the scrollable range. Called whenever the page is (re)laid out.
    pub fn set_bounds(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        if self.offset > max_scroll {
            self.offset = max_scroll;
        }
    }

    /// Replace the section anchors. Called whenever the page is (re)laid out.
    pub fn set_anchors(&mut self, anchors: Vec<SectionAnchor>) {
        self.anchors = anchors;
    }

    pub fn anchors(&self) -> &[SectionAnchor] {
        &self.anchors
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or unresolved request)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0 || self.pending_target.is_some()
    }

    /// Get the current interpolated scroll offset
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// The offset the page will settle at once pending requests and the
    /// active animation have run out
    pub fn target_offset(&self) -> u16 {
        if let Some(target) = self.pending_target {
            return target;
        }
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.offset)
    }

    /// Set scroll offset immediately (no animation)
    pub fn set_offset(&mut self, offset: u16) {
        self.animation = None;
        self.offset = offset.min(self.max_scroll);
        self.pending_target = None;
        self.pending_delta = 0;
    }

    /// Request a scroll to an absolute offset
    ///
    /// If smooth scrolling is disabled, jumps immediately. Otherwise the
    /// animation starts on the next `update()` call. A later scroll_to
    /// replaces an earlier one that hasn't been resolved yet.
    pub fn scroll_to(&mut self, target: u16) {
        let target = target.min(self.max_scroll);

        if !self.config.is_smooth() {
            self.offset = target;
            self.animation = None;
            return;
        }

        self.pending_target = Some(target);
        self.pending_delta = 0;
    }

    /// Request a scroll by a delta (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same animation frame are batched
    /// together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: i32) {
        if !self.config.is_smooth() {
            self.offset = (self.offset as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by configured line count
    pub fn scroll_down(&mut self) {
        self.scroll_by(self.line_step());
    }

    /// Scroll up by configured line count
    pub fn scroll_up(&mut self) {
        self.scroll_by(-self.line_step());
    }

    fn line_step(&self) -> i32 {
        if self.config.is_smooth() {
            1 // Smooth scroll moves 1 line at a time for fine control
        } else {
            self.config.scroll_lines as i32
        }
    }

    /// Scroll down by half a viewport
    pub fn scroll_half_page_down(&mut self, viewport_height: u16) {
        self.scroll_by((viewport_height / 2).max(1) as i32);
    }

    /// Scroll up by half a viewport
    pub fn scroll_half_page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-((viewport_height / 2).max(1) as i32));
    }

    /// Scroll down by a full viewport
    pub fn scroll_full_page_down(&mut self, viewport_height: u16) {
        self.scroll_by(viewport_height.max(1) as i32);
    }

    /// Scroll up by a full viewport
    pub fn scroll_full_page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-(viewport_height.max(1) as i32));
    }

    /// Scroll to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Scroll to the bottom of the page
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll);
    }

    /// Request a smooth scroll to the section with the given id
    ///
    /// Returns true if the section exists and a scroll was requested.
    /// An unknown id is a quiet no-op.
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        match self.anchors.iter().find(|a| a.id == id) {
            Some(anchor) => {
                let target = anchor.offset.min(self.max_scroll);
                self.scroll_to(target);
                true
            }
            None => {
                debug!("No section anchor for id '{}'", id);
                false
            }
        }
    }

    /// The section the viewport top currently sits in
    pub fn current_section(&self) -> Option<&str> {
        self.anchors
            .iter()
            .rev()
            .find(|a| a.offset <= self.offset)
            .or_else(|| self.anchors.first())
            .map(|a| a.id.as_str())
    }

    /// Scroll to the next section after the current target
    pub fn next_section(&mut self) {
        let target = self.target_offset();
        if let Some(anchor) = self.anchors.iter().find(|a| a.offset > target) {
            let to = anchor.offset.min(self.max_scroll);
            self.scroll_to(to);
        }
    }

    /// Scroll to the previous section before the current target
    pub fn prev_section(&mut self) {
        let target = self.target_offset();
        if let Some(anchor) = self.anchors.iter().rev().find(|a| a.offset < target) {
            self.scroll_to(anchor.offset);
        }
    }

    /// Advance the animation to `now` and return the current offset
    ///
    /// Resolves pending requests into an animation, then interpolates.
    /// Call this every frame.
    pub fn update(&mut self, now: Instant) -> u16 {
        // Resolve pending requests into a target
        if self.pending_target.is_some() || self.pending_delta != 0 {
            let base = match self.pending_target.take() {
                Some(target) => target,
                None => self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset),
            };
            let new_target =
                (base as i32 + self.pending_delta).clamp(0, self.max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.offset {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.offset,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        // Advance the active animation
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.offset = anim.to.min(self.max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, now, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.offset = lerp_u16(anim.from, anim.to, eased_t).min(self.max_scroll);
            }
        }

        self.offset
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_target = None;
        self.pending_delta = 0;
    }
}
