//! Resize debouncing
//!
//! Deadlines are polled from the frame loop rather than held as browser
//! timers, so cancelling is just overwriting the deadline.

use crate::consts::RESIZE_DEBOUNCE_MS;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Record an event at `now_ms`, replacing any pending deadline
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// Returns true exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_after_last_event() {
        let mut debounce = Debouncer::default();
        for t in [0.0, 40.0, 90.0, 130.0] {
            debounce.trigger(t);
            assert!(!debounce.poll(t + 1.0));
        }
        assert!(!debounce.poll(279.0));
        assert!(debounce.poll(280.0));
        assert!(!debounce.poll(400.0));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut debounce = Debouncer::new(150.0);
        debounce.trigger(0.0);
        assert!(debounce.is_pending());
        debounce.cancel();
        assert!(!debounce.poll(1000.0));
    }
}
