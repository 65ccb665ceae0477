//! Visitor preferences
//!
//! Persisted in LocalStorage so a visitor's motion preferences survive
//! navigation between pages.

use serde::{Deserialize, Serialize};

/// Site settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Multiplier on every carousel's base speed
    pub carousel_speed_scale: f32,
    /// Type header text character by character
    pub header_animation: bool,
    /// Staggered fade-in of tiles on load
    pub entrance_animation: bool,

    // === Accessibility ===
    /// Reduced motion (no scrolling, no typing, no zoom)
    pub reduced_motion: bool,

    // === Notices ===
    /// Show the desktop-recommended banner on narrow screens
    pub mobile_notice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel_speed_scale: 1.0,
            header_animation: true,
            entrance_animation: true,
            reduced_motion: false,
            mobile_notice: true,
        }
    }
}

impl Settings {
    /// Effective carousel speed for a page's base speed
    pub fn carousel_speed(&self, base: f32) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            base * self.carousel_speed_scale.clamp(0.0, 4.0)
        }
    }

    /// Effective header typing (respects reduced_motion)
    pub fn effective_header_animation(&self) -> bool {
        self.header_animation && !self.reduced_motion
    }

    /// Effective entrance animation (respects reduced_motion)
    pub fn effective_entrance_animation(&self) -> bool {
        self.entrance_animation && !self.reduced_motion
    }

    /// Hover zoom scale after motion preferences
    pub fn effective_zoom(&self, scale: f32) -> f32 {
        if self.reduced_motion { 1.0 } else { scale }
    }

    /// Visitor closed the mobile banner; remember it across pages
    pub fn dismiss_mobile_notice(&mut self) {
        if self.mobile_notice {
            self.mobile_notice = false;
            self.save();
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "honeycomb_folio_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
