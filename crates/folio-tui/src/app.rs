use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_core::{AppConfig, Profile, Result, Typewriter};

use crate::page::Section;
use crate::scroll::ScrollNavigator;
use crate::theme::Theme;

/// How long a status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Cursor blink half-period for the hero tagline
const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub profile: Profile,
    pub theme: Theme,
    /// Hero tagline animation
    pub typewriter: Typewriter,
    /// Page scrolling and section navigation
    pub navigator: ScrollNavigator,
    pub mode: Mode,
    pub should_quit: bool,
    /// First key of a multi-key sequence ("gg")
    pub pending_key: Option<char>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
    /// Content viewport height, updated on every draw
    pub viewport_height: u16,
    /// Rows the hero section occupies, updated on every draw
    pub hero_height: u16,
    started: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, profile: Profile, theme: Theme) -> Result<Self> {
        let typewriter = Typewriter::new(profile.hero.taglines.clone(), config.ui.typewriter)?;
        let navigator = ScrollNavigator::new(config.ui.scroll.clone());

        Ok(Self {
            config,
            profile,
            theme,
            typewriter,
            navigator,
            mode: Mode::Normal,
            should_quit: false,
            pending_key: None,
            status_message: None,
            status_set_at: None,
            viewport_height: 0,
            hero_height: 0,
            started: Instant::now(),
        })
    }

    /// Advance the typewriter and scroll animations to `now`.
    /// Called once per frame before drawing.
    pub fn update_animations(&mut self, now: Instant) {
        self.typewriter.update(now);
        self.navigator.update(now);

        if let Some(set_at) = self.status_set_at {
            if now.saturating_duration_since(set_at) >= STATUS_TTL {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }

    /// Whether the next frame should be polled at the animation rate.
    /// True while a scroll animation runs or the typewriter is on screen.
    pub fn needs_fast_update(&self) -> bool {
        self.navigator.needs_update() || self.hero_visible()
    }

    /// The hero (and its animated tagline) is visible when the viewport
    /// top is still inside the hero rows
    pub fn hero_visible(&self) -> bool {
        self.navigator.offset() < self.hero_height.max(1)
    }

    /// Blinking cursor state for the hero tagline
    pub fn cursor_visible(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// The section the viewport currently shows, for the status bar
    pub fn current_section(&self) -> Option<Section> {
        self.navigator.current_section().and_then(Section::from_id)
    }

    /// Scroll position as a percentage for the status bar
    pub fn scroll_percent(&self) -> u16 {
        let max = self.navigator.max_scroll();
        if max == 0 {
            return 100;
        }
        ((self.navigator.offset() as u32 * 100) / max as u32) as u16
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::profile::sample_profile;

    fn test_app() -> App {
        let config = Arc::new(AppConfig::default());
        App::new(config, sample_profile(), Theme::default()).unwrap()
    }

    #[test]
    fn test_new_app_state() {
        let app = test_app();
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
        assert_eq!(app.typewriter.text(), "");
        assert_eq!(app.navigator.offset(), 0);
    }

    #[test]
    fn test_hero_visible_drives_fast_updates() {
        let mut app = test_app();
        app.hero_height = 10;
        app.navigator.set_bounds(100);

        assert!(app.hero_visible());
        assert!(app.needs_fast_update());

        app.navigator.set_offset(50);
        assert!(!app.hero_visible());
        assert!(!app.needs_fast_update());

        // A pending scroll brings the fast rate back
        app.navigator.scroll_by(3);
        assert!(app.needs_fast_update());
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = test_app();
        app.set_status("Opening link");
        assert!(app.status_message.is_some());

        app.update_animations(Instant::now() + STATUS_TTL);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_scroll_percent() {
        let mut app = test_app();
        app.navigator.set_bounds(0);
        assert_eq!(app.scroll_percent(), 100);

        app.navigator.set_bounds(200);
        app.navigator.set_offset(50);
        assert_eq!(app.scroll_percent(), 25);
    }

    #[test]
    fn test_cursor_blinks() {
        let app = test_app();
        let t0 = app.started;
        assert!(app.cursor_visible(t0));
        assert!(!app.cursor_visible(t0 + Duration::from_millis(600)));
        assert!(app.cursor_visible(t0 + Duration::from_millis(1100)));
    }
}
