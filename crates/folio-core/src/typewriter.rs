//! Typewriter animation engine for the hero tagline.
//!
//! Cycles through a fixed phrase list character-by-character: type the phrase
//! out, hold it, delete it, move to the next phrase, forever. The engine is a
//! plain owned value driven by `update()` from the render loop; dropping it
//! stops the animation with nothing left pending.
//!
//! Scheduling is deadline-based rather than fixed-period: each transition
//! advances the deadline by the interval of the *next* phase, so cadence is
//! self-correcting and at most one deadline is outstanding at a time. A slow
//! frame catches up by stepping multiple times in one `update()` call.

use std::time::{Duration, Instant};

use crate::config::TypewriterConfig;
use crate::error::{Error, Result};

/// Current phase of the typewriter cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick
    Typing,
    /// Holding the fully typed phrase (single deferred transition, no ticks)
    Pausing,
    /// Removing one character per tick
    Deleting,
}

/// Typewriter animation state machine
///
/// Construct with a non-empty phrase list, then call `update(now)` each frame.
/// The first call arms the initial deadline; later calls perform every
/// transition whose deadline has passed. Read the current text with `text()`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Phrase list, immutable for the engine's lifetime
    phrases: Vec<String>,
    /// Index of the phrase currently being typed or deleted
    phrase_index: usize,
    /// Number of characters of the current phrase on display
    shown: usize,
    /// Current phase
    phase: Phase,
    /// Next transition deadline; None until the first update arms it
    deadline: Option<Instant>,
    /// Timing configuration
    config: TypewriterConfig,
}

impl Typewriter {
    /// Create a new typewriter over `phrases`.
    ///
    /// An empty phrase list is a configuration error: it would cycle forever
    /// producing nothing, so it is rejected here instead. Zero intervals are
    /// rejected too: the catch-up loop in `update()` advances the deadline by
    /// one interval per step, so a zero interval could never catch up.
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Result<Self> {
        if phrases.is_empty() {
            return Err(Error::Config(
                "typewriter phrase list must not be empty".to_string(),
            ));
        }
        if config.type_interval_ms == 0 || config.delete_interval_ms == 0 || config.hold_ms == 0 {
            return Err(Error::Config(
                "typewriter intervals must be at least 1ms".to_string(),
            ));
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            shown: 0,
            phase: Phase::Typing,
            deadline: None,
            config,
        })
    }

    /// The currently displayed prefix of the active phrase
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        match phrase.char_indices().nth(self.shown) {
            Some((byte_idx, _)) => &phrase[..byte_idx],
            None => phrase,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the active phrase
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Next transition deadline, if armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Advance the state machine up to `now`.
    ///
    /// Returns true if the displayed text or phase changed. The first call
    /// arms the initial typing deadline without changing text, so the first
    /// character appears one typing interval after the engine starts running.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(mut deadline) = self.deadline else {
            self.deadline = Some(now + self.interval(self.phase));
            return false;
        };

        let mut changed = false;
        while now >= deadline {
            deadline += self.step();
            changed = true;
        }
        self.deadline = Some(deadline);
        changed
    }

    /// Perform exactly one transition and return the interval until the next.
    fn step(&mut self) -> Duration {
        let phrase_len = self.phrases[self.phrase_index].chars().count();

        match self.phase {
            Phase::Typing => {
                if self.shown < phrase_len {
                    self.shown += 1;
                }
                if self.shown == phrase_len {
                    self.phase = Phase::Pausing;
                    self.interval(Phase::Pausing)
                } else {
                    self.interval(Phase::Typing)
                }
            }
            Phase::Pausing => {
                // Hold elapsed; start deleting with no text change
                self.phase = Phase::Deleting;
                self.interval(Phase::Deleting)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.interval(Phase::Typing)
                } else {
                    self.interval(Phase::Deleting)
                }
            }
        }
    }

    fn interval(&self, phase: Phase) -> Duration {
        let ms = match phase {
            Phase::Typing => self.config.type_interval_ms,
            Phase::Pausing => self.config.hold_ms,
            Phase::Deleting => self.config.delete_interval_ms,
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn engine(phrases: &[&str]) -> (Typewriter, Instant) {
        let mut tw = Typewriter::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            TypewriterConfig::default(),
        )
        .unwrap();
        let t0 = Instant::now();
        // Arm the initial deadline
        assert!(!tw.update(t0));
        (tw, t0)
    }

    /// Step the engine to its next deadline, returning the new now
    fn tick(tw: &mut Typewriter) -> Instant {
        let deadline = tw.next_deadline().expect("deadline armed");
        assert!(tw.update(deadline));
        deadline
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let result = Typewriter::new(Vec::new(), TypewriterConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_intervals_rejected() {
        // A zero interval would make the update catch-up loop spin forever
        for config in [
            TypewriterConfig {
                type_interval_ms: 0,
                ..Default::default()
            },
            TypewriterConfig {
                delete_interval_ms: 0,
                ..Default::default()
            },
            TypewriterConfig {
                hold_ms: 0,
                ..Default::default()
            },
        ] {
            let result = Typewriter::new(vec!["Hi".to_string()], config);
            assert!(matches!(result, Err(Error::Config(_))));
        }
    }

    #[test]
    fn test_initial_state() {
        let (tw, _) = engine(&["Hello"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_typing_builds_prefix() {
        let (mut tw, _) = engine(&["Developer"]);
        for n in 1..=9 {
            tick(&mut tw);
            assert_eq!(tw.text(), &"Developer"[..n]);
        }
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_update_before_deadline_is_inert() {
        let (mut tw, t0) = engine(&["Hi"]);
        assert!(!tw.update(t0 + ms(99)));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_pause_is_idempotent_on_text() {
        let (mut tw, _) = engine(&["Hi"]);
        tick(&mut tw);
        let paused_at = tick(&mut tw);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), Phase::Pausing);

        // No ticks occur inside the hold window
        assert!(!tw.update(paused_at + ms(1999)));
        assert_eq!(tw.text(), "Hi");

        // Hold elapses: deleting begins with no text change
        assert!(tw.update(paused_at + ms(2000)));
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), Phase::Deleting);
    }

    #[test]
    fn test_spec_timeline_hi_yo() {
        let (mut tw, t0) = engine(&["Hi", "Yo"]);

        tw.update(t0 + ms(100));
        assert_eq!(tw.text(), "H");
        tw.update(t0 + ms(200));
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), Phase::Pausing);

        // 2000ms hold: deleting starts at t0+2200
        tw.update(t0 + ms(2200));
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "Hi");

        tw.update(t0 + ms(2250));
        assert_eq!(tw.text(), "H");
        tw.update(t0 + ms(2300));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);

        tw.update(t0 + ms(2400));
        assert_eq!(tw.text(), "Y");
        tw.update(t0 + ms(2500));
        assert_eq!(tw.text(), "Yo");
    }

    #[test]
    fn test_deleting_strips_suffix() {
        let (mut tw, _) = engine(&["abcd"]);
        // Type out, then hold
        for _ in 0..4 {
            tick(&mut tw);
        }
        tick(&mut tw); // Pausing -> Deleting
        assert_eq!(tw.phase(), Phase::Deleting);
        tick(&mut tw);
        assert_eq!(tw.text(), "abc");
        tick(&mut tw);
        assert_eq!(tw.text(), "ab");
        tick(&mut tw);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_full_cycle_returns_to_initial_state() {
        let (mut tw, _) = engine(&["A", "BB"]);

        // Cycle 1: type "A", hold, delete "A"
        // Cycle 2: type "BB", hold, delete "BB"
        // Each tick() lands exactly on one transition.
        let mut wraps = 0;
        while wraps < 2 {
            let before = tw.phrase_index();
            tick(&mut tw);
            if tw.phrase_index() != before {
                wraps += 1;
            }
        }

        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_phrase_index_wraps_modulo_length() {
        let (mut tw, _) = engine(&["a", "b", "c"]);
        // 7 completed phrases: index should be 7 mod 3 == 1
        let mut completed = 0;
        while completed < 7 {
            let before = tw.phrase_index();
            tick(&mut tw);
            if tw.phrase_index() != before {
                completed += 1;
            }
        }
        assert_eq!(tw.phrase_index(), 7 % 3);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_catch_up_after_slow_frame() {
        let (mut tw, t0) = engine(&["Hey"]);
        // One late update covers three typing ticks
        tw.update(t0 + ms(300));
        assert_eq!(tw.text(), "Hey");
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_multibyte_phrases() {
        let (mut tw, _) = engine(&["héllo"]);
        tick(&mut tw);
        assert_eq!(tw.text(), "h");
        tick(&mut tw);
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_instances_are_independent() {
        let (mut a, _) = engine(&["one"]);
        let (b, _) = engine(&["two"]);
        tick(&mut a);
        assert_eq!(a.text(), "o");
        assert_eq!(b.text(), "");
    }
}
