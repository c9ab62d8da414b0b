//! Typing/deleting text animation.
//!
//! [`TypingAnimator`] is a plain state machine: every call to
//! [`TypingAnimator::tick`] performs one transition and returns how long the
//! caller should wait before the next one. Scheduling lives in the adapters
//! (`app::typing` in the browser, [`driver`] on tokio).

#[cfg(not(target_arch = "wasm32"))]
pub mod driver;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TYPING_DELAY_MS: u64 = 100;
pub const DEFAULT_DELETING_DELAY_MS: u64 = 50;
pub const DEFAULT_HOLD_DELAY_MS: u64 = 2000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("typing animation needs at least one phrase")]
    NoPhrases,
}

fn saturating_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub typing_delay_ms: u64,
    pub deleting_delay_ms: u64,
    pub hold_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            deleting_delay_ms: DEFAULT_DELETING_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
        }
    }
}

impl TypingConfig {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay_ms = saturating_millis(delay);
        self
    }

    pub fn with_deleting_delay(mut self, delay: Duration) -> Self {
        self.deleting_delay_ms = saturating_millis(delay);
        self
    }

    pub fn with_hold_delay(mut self, delay: Duration) -> Self {
        self.hold_delay_ms = saturating_millis(delay);
        self
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn deleting_delay(&self) -> Duration {
        Duration::from_millis(self.deleting_delay_ms)
    }

    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Which of the configured delays a [`Tick`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayKind {
    Typing,
    Deleting,
    Hold,
}

/// Result of one transition: wait `delay` before ticking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub delay: Duration,
    pub kind: DelayKind,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    config: TypingConfig,
    phrase_index: usize,
    char_index: usize,
    mode: Mode,
}

impl TypingAnimator {
    pub fn new(config: TypingConfig) -> Result<Self, TypingError> {
        if config.phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        Ok(Self {
            config,
            phrase_index: 0,
            char_index: 0,
            mode: Mode::Typing,
        })
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Delay before the very first tick after (re)starting.
    pub fn initial_delay(&self) -> Duration {
        self.config.typing_delay()
    }

    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.char_index = 0;
        self.mode = Mode::Typing;
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_typing(&self) -> bool {
        self.mode == Mode::Typing
    }

    pub fn current_phrase(&self) -> &str {
        &self.config.phrases[self.phrase_index]
    }

    /// The first `char_index` characters of the current phrase.
    pub fn display_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_index)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn tick(&mut self) -> Tick {
        let len = self.current_phrase().chars().count();
        match self.mode {
            Mode::Typing => {
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index == len {
                    // fully typed: hold once, then start deleting
                    self.mode = Mode::Deleting;
                    Tick {
                        delay: self.config.hold_delay(),
                        kind: DelayKind::Hold,
                    }
                } else {
                    Tick {
                        delay: self.config.typing_delay(),
                        kind: DelayKind::Typing,
                    }
                }
            }
            Mode::Deleting => {
                if self.char_index > 0 {
                    self.char_index -= 1;
                }
                if self.char_index == 0 {
                    self.mode = Mode::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.config.phrases.len();
                    log::trace!("typing phrase {}", self.phrase_index);
                    Tick {
                        delay: self.config.typing_delay(),
                        kind: DelayKind::Typing,
                    }
                } else {
                    Tick {
                        delay: self.config.deleting_delay(),
                        kind: DelayKind::Deleting,
                    }
                }
            }
        }
    }
}

/// Shared "still running" flag checked by every scheduled tick.
///
/// Once cancelled it stays cancelled; clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        let config = TypingConfig::new(phrases.iter().copied())
            .with_typing_delay(Duration::from_millis(10))
            .with_deleting_delay(Duration::from_millis(5))
            .with_hold_delay(Duration::from_millis(20));
        TypingAnimator::new(config).expect("phrases are not empty")
    }

    #[test]
    fn test_defaults() {
        let config = TypingConfig::new(["a"]);
        assert_eq!(config.typing_delay(), Duration::from_millis(100));
        assert_eq!(config.deleting_delay(), Duration::from_millis(50));
        assert_eq!(config.hold_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_builder_delays_saturate() {
        let config = TypingConfig::new(["a"])
            .with_typing_delay(Duration::MAX)
            .with_deleting_delay(Duration::from_secs(u64::MAX / 1000 + 1))
            .with_hold_delay(Duration::from_micros(2500));
        assert_eq!(config.typing_delay_ms, u64::MAX);
        assert_eq!(config.deleting_delay_ms, u64::MAX);
        assert_eq!(config.hold_delay_ms, 2);
    }

    #[test]
    fn test_rejects_empty_phrase_list() {
        let res = TypingAnimator::new(TypingConfig::default());
        assert_eq!(res.unwrap_err(), TypingError::NoPhrases);
    }

    #[test]
    fn test_starts_typing_first_phrase() {
        let anim = animator(&["Hi", "Yo"]);
        assert_eq!(anim.phrase_index(), 0);
        assert_eq!(anim.char_index(), 0);
        assert_eq!(anim.mode(), Mode::Typing);
        assert_eq!(anim.display_text(), "");
        assert_eq!(anim.initial_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_hi_yo_trace() {
        let mut anim = animator(&["Hi", "Yo"]);
        let expected = [
            ("H", 10),
            ("Hi", 20),
            ("H", 5),
            ("", 10),
            ("Y", 10),
            ("Yo", 20),
            ("Y", 5),
            ("", 10),
            ("H", 10),
            ("Hi", 20),
        ];
        for (text, delay) in expected {
            let tick = anim.tick();
            assert_eq!(anim.display_text(), text);
            assert_eq!(tick.delay, Duration::from_millis(delay), "after {text:?}");
        }
    }

    #[rstest]
    #[case(&["one"])]
    #[case(&["one", "two"])]
    #[case(&["a", "bb", "ccc", "dddd"])]
    fn test_visits_every_phrase_in_order(#[case] phrases: &[&str]) {
        let mut anim = animator(phrases);
        let mut visited = vec![anim.phrase_index()];
        for _ in 0..500 {
            let was_deleting = anim.mode() == Mode::Deleting;
            anim.tick();
            if was_deleting && anim.is_typing() {
                visited.push(anim.phrase_index());
            }
        }
        assert!(visited.len() > phrases.len() * 2);
        for (i, idx) in visited.iter().enumerate() {
            assert_eq!(*idx, i % phrases.len());
        }
    }

    #[test]
    fn test_typing_and_deleting_move_one_char_per_tick() {
        let mut anim = animator(&["hello", "rust"]);
        for _ in 0..200 {
            let before = anim.display_text().chars().count();
            let mode = anim.mode();
            let phrase = anim.current_phrase().to_string();
            anim.tick();
            let after = anim.display_text().chars().count();
            match mode {
                Mode::Typing => {
                    assert_eq!(after, before + 1);
                    assert!(phrase.starts_with(anim.display_text()));
                }
                Mode::Deleting => {
                    assert_eq!(after + 1, before);
                    assert!(phrase.starts_with(anim.display_text()));
                }
            }
            assert!(anim.char_index() <= anim.current_phrase().chars().count());
        }
    }

    #[test]
    fn test_single_char_holds_once() {
        let mut anim = animator(&["A"]);
        let kinds = (0..6).map(|_| anim.tick().kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                DelayKind::Hold,
                DelayKind::Typing,
                DelayKind::Hold,
                DelayKind::Typing,
                DelayKind::Hold,
                DelayKind::Typing,
            ]
        );
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut anim = animator(&["ab"]);
        let texts = (0..8)
            .map(|_| {
                anim.tick();
                anim.display_text().to_string()
            })
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["a", "ab", "a", "", "a", "ab", "a", ""]);
        assert_eq!(anim.phrase_index(), 0);
    }

    #[test]
    fn test_empty_phrase_renders_nothing() {
        let mut anim = animator(&[""]);
        for _ in 0..50 {
            anim.tick();
            assert_eq!(anim.display_text(), "");
            assert_eq!(anim.phrase_index(), 0);
            assert_eq!(anim.char_index(), 0);
        }
    }

    #[test]
    fn test_empty_phrase_is_skipped_between_others() {
        let mut anim = animator(&["x", "", "y"]);
        let mut texts = Vec::new();
        for _ in 0..8 {
            anim.tick();
            texts.push(anim.display_text().to_string());
        }
        // "x" typed and deleted, "" holds and advances without output, then "y"
        assert_eq!(texts, vec!["x", "", "", "", "y", "", "x", ""]);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut anim = animator(&["héllo ✓"]);
        let mut texts = Vec::new();
        for _ in 0..7 {
            anim.tick();
            texts.push(anim.display_text().to_string());
        }
        assert_eq!(texts.last().map(String::as_str), Some("héllo ✓"));
        assert_eq!(texts[1], "hé");
        anim.tick();
        assert_eq!(anim.display_text(), "héllo ");
    }

    #[test]
    fn test_reset() {
        let mut anim = animator(&["Hi", "Yo"]);
        for _ in 0..5 {
            anim.tick();
        }
        anim.reset();
        assert_eq!(anim.phrase_index(), 0);
        assert_eq!(anim.display_text(), "");
        assert!(anim.is_typing());
    }

    #[test]
    fn test_cancel_flag_is_idempotent() {
        let flag = CancelFlag::new();
        let other = flag.clone();
        assert!(!other.is_cancelled());
        assert!(flag.cancel());
        assert!(!flag.cancel());
        assert!(!other.cancel());
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: TypingConfig =
            serde_json::from_str(r#"{"phrases":["a","b"],"holdDelayMs":500}"#)
                .expect("valid config");
        assert_eq!(config.phrases, vec!["a", "b"]);
        assert_eq!(config.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
        assert_eq!(config.hold_delay_ms, 500);
    }
}
