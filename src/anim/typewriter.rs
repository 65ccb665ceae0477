//! Typewriter header scripts
//!
//! A header effect is a flat list of timed steps built up front, then played
//! against the frame clock. Cancelling drops every pending step at once, so
//! leaving a page can't leave stray timers typing into a dead header.

use std::collections::VecDeque;

/// What the header shows after a step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub text: String,
    /// Header is clickable and opens this URL while set
    pub link: Option<String>,
}

/// One timed step: wait `delay_ms` after the previous step, then show `frame`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStep {
    pub delay_ms: f64,
    pub frame: Frame,
}

/// Builder for a sequence of header frames
#[derive(Debug, Clone, Default)]
pub struct HeaderScript {
    steps: Vec<TypeStep>,
    current: Frame,
}

impl HeaderScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `text` already on screen without emitting a step
    pub fn starting_from(text: impl Into<String>) -> Self {
        Self {
            steps: Vec::new(),
            current: Frame {
                text: text.into(),
                link: None,
            },
        }
    }

    fn push(&mut self, delay_ms: f64, text: String, link: Option<String>) {
        self.current = Frame { text, link };
        self.steps.push(TypeStep {
            delay_ms,
            frame: self.current.clone(),
        });
    }

    /// Show `text` immediately
    pub fn show(mut self, text: impl Into<String>) -> Self {
        self.push(0.0, text.into(), None);
        self
    }

    /// Type `text` after `prefix`, one character per step. The first
    /// character appears immediately.
    pub fn type_in(mut self, prefix: &str, text: &str, per_char_ms: f64) -> Self {
        for (i, _) in text.chars().enumerate() {
            let typed: String = text.chars().take(i + 1).collect();
            let delay = if i == 0 { 0.0 } else { per_char_ms };
            self.push(delay, format!("{prefix}{typed}"), None);
        }
        self
    }

    /// Delete characters from the end until the header reads `keep`
    pub fn backspace_to(mut self, keep: &str, per_char_ms: f64) -> Self {
        let keep_len = keep.chars().count();
        let mut len = self.current.text.chars().count();
        let mut first = true;
        while len > keep_len {
            len -= 1;
            let text: String = self.current.text.chars().take(len).collect();
            let delay = if first { 0.0 } else { per_char_ms };
            first = false;
            self.push(delay, text, None);
        }
        if self.current.text != keep {
            let delay = if first { 0.0 } else { per_char_ms };
            self.push(delay, keep.to_string(), None);
        }
        self
    }

    /// Make the current text a link
    pub fn link(mut self, url: impl Into<String>) -> Self {
        let text = self.current.text.clone();
        self.push(0.0, text, Some(url.into()));
        self
    }

    /// Keep the current text for `ms`, then drop any link
    pub fn hold(mut self, ms: f64) -> Self {
        let text = self.current.text.clone();
        self.push(ms, text, None);
        self
    }

    pub fn steps(&self) -> &[TypeStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time from the first step to the last
    pub fn duration_ms(&self) -> f64 {
        self.steps.iter().map(|s| s.delay_ms).sum()
    }

    /// Text shown once the script has finished
    pub fn final_frame(&self) -> &Frame {
        &self.current
    }
}

/// Plays header scripts against a millisecond clock
#[derive(Debug, Clone, Default)]
pub struct ScriptPlayer {
    pending: VecDeque<TypeStep>,
    /// Due time of the last step shown
    cursor_ms: Option<f64>,
}

impl ScriptPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is playing with `script`, starting at `now_ms`
    pub fn play(&mut self, script: HeaderScript, now_ms: f64) {
        self.cancel();
        self.queue(script, now_ms);
    }

    /// Append `script` after the pending steps (or start it now if idle)
    pub fn queue(&mut self, script: HeaderScript, now_ms: f64) {
        if self.pending.is_empty() {
            self.cursor_ms = Some(now_ms);
        }
        self.pending.extend(script.steps);
    }

    /// Run every step due by `now_ms` and return the newest frame, if any
    pub fn advance(&mut self, now_ms: f64) -> Option<Frame> {
        let mut cursor = self.cursor_ms?;
        let mut latest = None;

        while let Some(step) = self.pending.front() {
            let due = cursor + step.delay_ms;
            if due > now_ms {
                break;
            }
            cursor = due;
            latest = self.pending.pop_front().map(|s| s.frame);
        }

        self.cursor_ms = Some(cursor);
        latest
    }

    /// Drop every pending step
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.cursor_ms = None;
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_steps(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(script: &HeaderScript) -> Vec<&str> {
        script.steps().iter().map(|s| s.frame.text.as_str()).collect()
    }

    #[test]
    fn test_type_in_every_prefix() {
        let script = HeaderScript::new().type_in("", "Hi!", 50.0);
        assert_eq!(texts(&script), vec!["H", "Hi", "Hi!"]);
        assert_eq!(script.duration_ms(), 100.0);
    }

    #[test]
    fn test_type_in_multibyte() {
        let script = HeaderScript::new().type_in("> ", "é✉", 50.0);
        assert_eq!(texts(&script), vec!["> é", "> é✉"]);
    }

    #[test]
    fn test_backspace_to_base() {
        let script = HeaderScript::starting_from("Hi! I am").backspace_to("Hi!", 30.0);
        assert_eq!(
            texts(&script),
            vec!["Hi! I a", "Hi! I ", "Hi! I", "Hi! ", "Hi!"]
        );
        assert_eq!(script.final_frame().text, "Hi!");
    }

    #[test]
    fn test_backspace_fixes_diverged_text() {
        let script = HeaderScript::starting_from("abc").backspace_to("xy", 30.0);
        assert_eq!(texts(&script), vec!["ab", "xy"]);
    }

    #[test]
    fn test_link_cleared_by_hold() {
        let script = HeaderScript::starting_from("Follow")
            .link("https://example.com")
            .hold(3000.0);
        let steps = script.steps();
        assert_eq!(steps[0].frame.link.as_deref(), Some("https://example.com"));
        assert_eq!(steps[1].frame.link, None);
        assert_eq!(steps[1].delay_ms, 3000.0);
    }

    #[test]
    fn test_player_follows_clock() {
        let script = HeaderScript::new().type_in("", "abc", 50.0);
        let mut player = ScriptPlayer::new();
        player.play(script, 1000.0);

        assert_eq!(player.advance(1000.0).unwrap().text, "a");
        assert!(player.advance(1049.0).is_none());
        assert_eq!(player.advance(1050.0).unwrap().text, "ab");
        // A long frame skips straight to the newest text
        player.queue(HeaderScript::starting_from("abc").backspace_to("", 30.0), 1050.0);
        assert_eq!(player.advance(2000.0).unwrap().text, "");
        assert!(player.is_idle());
    }

    #[test]
    fn test_cancel_drops_everything() {
        let mut player = ScriptPlayer::new();
        player.play(HeaderScript::new().type_in("", "hello", 50.0), 0.0);
        player.advance(0.0);
        assert_eq!(player.pending_steps(), 4);
        player.cancel();
        assert!(player.is_idle());
        assert!(player.advance(10_000.0).is_none());
    }
}
