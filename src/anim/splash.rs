//! Home page splash messages
//!
//! The home header types a greeting, trims it back to the name, then keeps
//! appending a rotating message after it. Messages come out of a shuffled
//! bag so none repeats until every other one has been shown.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::typewriter::HeaderScript;
use crate::consts::{BACKSPACE_CHAR_MS, TYPE_CHAR_MS};

/// Time a finished message stays on screen (ms)
pub const SPLASH_HOLD_MS: f64 = 3000.0;
/// Gap between one message disappearing and the next starting (ms)
pub const SPLASH_GAP_MS: f64 = 500.0;

pub const BASE_TEXT: &str = "Hi! I am Vatsal.";
pub const INTRO_TEXT: &str = "Hi! I am Vatsal. See what I'm working on.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashMessage {
    pub text: String,
    pub link: Option<String>,
}

impl SplashMessage {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            link: None,
        }
    }

    pub fn linked(text: &str, link: &str) -> Self {
        Self {
            text: text.to_string(),
            link: Some(link.to_string()),
        }
    }
}

/// The site's splash messages
pub fn default_messages() -> Vec<SplashMessage> {
    vec![
        SplashMessage::plain("Check my Resume."),
        SplashMessage::linked(
            "Follow me on Instagram",
            "https://www.instagram.com/vatsalgoyall/",
        ),
        SplashMessage::linked(
            "Check out what I'm listening to on Spotify",
            "https://open.spotify.com/user/31twba3l57mkztt7u25zmmczfpva",
        ),
        SplashMessage::plain("Do you play minecraft?"),
        SplashMessage::plain("As seen on TV"),
        SplashMessage::plain("This is a website"),
        SplashMessage::plain("Random Splash!"),
        SplashMessage::plain("It's 2025!?!"),
        SplashMessage::plain("Help! ChatGPT!"),
        SplashMessage::plain("Linus made git in 10 days!"),
        SplashMessage::plain("Computers are still magic."),
        SplashMessage::plain("Harder, Better, Faster, Stronger"),
    ]
}

#[derive(Debug, Clone)]
pub struct SplashCycle {
    base: String,
    intro: String,
    messages: Vec<SplashMessage>,
    /// Indices not yet shown this round; popped from the back
    bag: Vec<usize>,
    last_shown: Option<usize>,
    rng: Pcg32,
}

impl SplashCycle {
    pub fn new(
        base: impl Into<String>,
        intro: impl Into<String>,
        messages: Vec<SplashMessage>,
        seed: u64,
    ) -> Self {
        Self {
            base: base.into(),
            intro: intro.into(),
            messages,
            bag: Vec::new(),
            last_shown: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Cycle with the site's greeting and messages
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(BASE_TEXT, INTRO_TEXT, default_messages(), seed)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Type the full greeting, pause, trim back to the base text
    pub fn intro_script(&self) -> HeaderScript {
        HeaderScript::new()
            .type_in("", &self.intro, TYPE_CHAR_MS)
            .hold(SPLASH_HOLD_MS)
            .backspace_to(&self.base, BACKSPACE_CHAR_MS)
            .hold(SPLASH_GAP_MS)
    }

    /// Draw the next message from the bag, refilling it when empty
    pub fn next_message(&mut self) -> Option<&SplashMessage> {
        if self.messages.is_empty() {
            return None;
        }

        if self.bag.is_empty() {
            self.bag = (0..self.messages.len()).collect();
            self.bag.shuffle(&mut self.rng);
            // Don't open a new round with the message that closed the last
            let n = self.bag.len();
            if n > 1 && self.bag.last().copied() == self.last_shown {
                self.bag.swap(0, n - 1);
            }
        }

        let index = self.bag.pop()?;
        self.last_shown = Some(index);
        self.messages.get(index)
    }

    /// Script for the next message: type it after the base text, hold
    /// (clickable if linked), delete it, pause
    pub fn next_script(&mut self) -> HeaderScript {
        let base = self.base.clone();
        let Some(message) = self.next_message().cloned() else {
            return HeaderScript::starting_from(base.as_str()).hold(SPLASH_HOLD_MS);
        };

        let prefix = format!("{} ", base);
        let mut script = HeaderScript::starting_from(base.as_str())
            .type_in(&prefix, &message.text, TYPE_CHAR_MS);
        if let Some(link) = &message.link {
            script = script.link(link.as_str());
        }
        script
            .hold(SPLASH_HOLD_MS)
            .backspace_to(&base, BACKSPACE_CHAR_MS)
            .hold(SPLASH_GAP_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_intro_ends_on_base() {
        let cycle = SplashCycle::with_defaults(7);
        let script = cycle.intro_script();
        assert_eq!(script.steps()[0].frame.text, "H");
        assert!(script.steps().iter().any(|s| s.frame.text == INTRO_TEXT));
        assert_eq!(script.final_frame().text, BASE_TEXT);
    }

    #[test]
    fn test_bag_has_no_repeats_within_round() {
        let mut cycle = SplashCycle::with_defaults(42);
        let n = default_messages().len();
        let mut seen = HashSet::new();
        for _ in 0..n {
            let text = cycle.next_message().unwrap().text.clone();
            assert!(seen.insert(text), "message repeated within a round");
        }
        assert_eq!(seen.len(), n);
    }

    #[test]
    fn test_no_repeat_across_round_boundary() {
        let messages = vec![SplashMessage::plain("a"), SplashMessage::plain("b")];
        for seed in 0..50 {
            let mut cycle = SplashCycle::new("base", "intro", messages.clone(), seed);
            let mut previous = cycle.next_message().unwrap().text.clone();
            for _ in 0..9 {
                let next = cycle.next_message().unwrap().text.clone();
                assert_ne!(previous, next);
                previous = next;
            }
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = SplashCycle::with_defaults(99);
        let mut b = SplashCycle::with_defaults(99);
        for _ in 0..20 {
            assert_eq!(a.next_message().cloned(), b.next_message().cloned());
        }
    }

    #[test]
    fn test_linked_message_script() {
        let messages = vec![SplashMessage::linked("Follow", "https://example.com")];
        let mut cycle = SplashCycle::new("Hi.", "Hi. There.", messages, 1);
        let script = cycle.next_script();
        let texts: Vec<_> = script.steps().iter().map(|s| s.frame.text.as_str()).collect();
        assert_eq!(texts[0], "Hi. F");
        assert!(
            script
                .steps()
                .iter()
                .any(|s| s.frame.text == "Hi. Follow" && s.frame.link.is_some())
        );
        assert_eq!(script.final_frame().text, "Hi.");
        assert!(script.final_frame().link.is_none());
    }

    #[test]
    fn test_empty_messages_hold_base() {
        let mut cycle = SplashCycle::new("Hi.", "Hi. There.", Vec::new(), 1);
        assert!(cycle.next_message().is_none());
        let script = cycle.next_script();
        assert_eq!(script.len(), 1);
        assert_eq!(script.final_frame().text, "Hi.");
    }
}
