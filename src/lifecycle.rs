//! Page lifecycle
//!
//! Browsers may freeze a page into the back/forward cache on `pagehide` and
//! thaw it later with `pageshow`. A frozen page must come back running; a
//! page that is really being unloaded stops for good.

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    /// Frozen in the back/forward cache; resumes on `pageshow`
    Paused,
    /// Unloaded; never resumes
    Stopped,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        *self == LoopState::Running
    }

    /// `pagehide`: pause if the page is being cached, otherwise stop.
    /// Returns true if the loop was running.
    pub fn page_hide(&mut self, persisted: bool) -> bool {
        let was_running = self.is_running();
        *self = match (*self, persisted) {
            (LoopState::Stopped, _) => LoopState::Stopped,
            (_, true) => LoopState::Paused,
            (_, false) => LoopState::Stopped,
        };
        was_running
    }

    /// `pageshow`: returns true when a paused loop should be restarted
    pub fn page_show(&mut self, persisted: bool) -> bool {
        if persisted && *self == LoopState::Paused {
            *self = LoopState::Running;
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        *self = LoopState::Stopped;
    }
}
