//! Honeycomb Folio - a portfolio site laid out as hexagonal tiles
//!
//! Core modules:
//! - `honeycomb`: Deterministic layout engine (hex geometry, grid, carousel, hover, debounce)
//! - `anim`: Header typewriter and splash-message scripts
//! - `content`: Tile content records and the per-page lookup tables
//! - `pages`: Per-page layout presets
//! - `shape`: Rounded hexagon shape descriptor shared by every tile
//! - `settings`: User preferences persisted in LocalStorage
//! - `lifecycle`: Frame loop pause/resume across the back/forward cache

pub mod anim;
pub mod content;
pub mod error;
pub mod honeycomb;
pub mod lifecycle;
pub mod pages;
pub mod settings;
pub mod shape;

pub use error::LayoutError;
pub use pages::{PageConfig, PageKind};
pub use settings::Settings;

/// Layout and animation constants
pub mod consts {
    /// Pointy-top regular hexagon height/width ratio (2 / sqrt(3))
    pub const HEX_ASPECT: f32 = 1.1547;
    /// Vertical overlap factor between adjacent hex rows
    pub const ROW_OVERLAP: f32 = 0.75;

    /// Resize debounce delay (ms)
    pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;

    /// Number of contiguous strip copies rendered by a carousel
    pub const CAROUSEL_REPLICAS: u32 = 3;
    /// Upper bound on strip copies a page config may ask for
    pub const MAX_CAROUSEL_REPLICAS: u32 = 8;

    /// Largest grid a page config may ask for
    pub const MAX_GRID_ROWS: u32 = 8;
    pub const MAX_GRID_COLS: u32 = 32;
    /// Fraction of the remaining distance covered per frame while navigating
    pub const NAVIGATE_EASE: f32 = 0.1;
    /// Navigation snaps to its target once this close (px)
    pub const NAVIGATE_SNAP_PX: f32 = 1.0;

    /// Carousel speeds are expressed per frame at this rate
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum carousel frames caught up in one animation callback
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Hover zoom elevation and brightness
    pub const ZOOM_Z_INDEX: i32 = 10;
    pub const ZOOM_BRIGHTNESS: f32 = 1.2;

    /// Viewports at or below this width get the mobile notice
    pub const MOBILE_BREAKPOINT: f32 = 768.0;

    /// Typewriter pacing (ms per character)
    pub const TYPE_CHAR_MS: f64 = 50.0;
    pub const BACKSPACE_CHAR_MS: f64 = 30.0;
}

/// Wrap `value` into `[0, period)` using a true (Euclidean) modulo.
///
/// Returns 0 for a non-positive or non-finite period.
#[inline]
pub fn wrap(value: f32, period: f32) -> f32 {
    if !(period.is_finite() && period > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative inputs
    if wrapped >= period { 0.0 } else { wrapped }
}

/// Whether a viewport this wide should be treated as a mobile device
#[inline]
pub fn is_mobile(viewport_width: f32) -> bool {
    viewport_width <= consts::MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_positive_and_negative() {
        assert_eq!(wrap(4300.0, 4200.0), 100.0);
        assert_eq!(wrap(-100.0, 4200.0), 4100.0);
        assert_eq!(wrap(0.0, 4200.0), 0.0);
        assert_eq!(wrap(4200.0, 4200.0), 0.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let w = wrap(-1e-9, 4200.0);
        assert!((0.0..4200.0).contains(&w));
    }

    #[test]
    fn test_wrap_degenerate_period() {
        assert_eq!(wrap(10.0, 0.0), 0.0);
        assert_eq!(wrap(10.0, -5.0), 0.0);
        assert_eq!(wrap(f32::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_is_mobile() {
        assert!(is_mobile(375.0));
        assert!(is_mobile(768.0));
        assert!(!is_mobile(769.0));
    }
}
