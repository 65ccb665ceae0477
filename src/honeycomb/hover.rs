//! Hover zoom bookkeeping
//!
//! The front end listens for pointer enter/leave once on the grid container
//! and forwards the tile under the pointer here. Fast pointer movement across
//! tile edges fires redundant events, so the zoomed flag per tile is the
//! source of truth: a second enter on a zoomed tile changes nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::grid::TileKey;
use crate::consts::{ZOOM_BRIGHTNESS, ZOOM_Z_INDEX};

/// Visual state applied to a tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStyle {
    pub scale: f32,
    pub z_index: i32,
    pub brightness: f32,
}

impl ZoomStyle {
    pub const REST: ZoomStyle = ZoomStyle {
        scale: 1.0,
        z_index: 1,
        brightness: 1.0,
    };

    pub fn zoomed(scale: f32) -> Self {
        Self {
            scale,
            z_index: ZOOM_Z_INDEX,
            brightness: ZOOM_BRIGHTNESS,
        }
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// CSS `filter` value
    pub fn filter(&self) -> String {
        format!("brightness({})", self.brightness)
    }
}

#[derive(Debug, Clone)]
pub struct HoverTracker {
    zoom_scale: f32,
    zoomed: HashSet<TileKey>,
}

impl HoverTracker {
    pub fn new(zoom_scale: f32) -> Self {
        Self {
            zoom_scale,
            zoomed: HashSet::new(),
        }
    }

    /// Pointer entered a tile. Returns the style to apply, or `None` if the
    /// tile was already zoomed.
    pub fn enter(&mut self, key: TileKey) -> Option<ZoomStyle> {
        self.zoomed
            .insert(key)
            .then(|| ZoomStyle::zoomed(self.zoom_scale))
    }

    /// Pointer left a tile. Returns the rest style if it was zoomed.
    pub fn leave(&mut self, key: TileKey) -> Option<ZoomStyle> {
        self.zoomed.remove(&key).then_some(ZoomStyle::REST)
    }

    pub fn is_zoomed(&self, key: &TileKey) -> bool {
        self.zoomed.contains(key)
    }

    pub fn zoomed_count(&self) -> usize {
        self.zoomed.len()
    }

    /// Forget every flag; the grid was rebuilt with fresh nodes
    pub fn clear(&mut self) {
        self.zoomed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honeycomb::grid::Cell;

    fn key(row: u32, col: u32) -> TileKey {
        TileKey {
            cell: Cell::new(row, col),
            replica: 0,
        }
    }

    #[test]
    fn test_double_enter_zooms_once() {
        let mut hover = HoverTracker::new(1.05);
        let style = hover.enter(key(1, 2)).unwrap();
        assert_eq!(style.scale, 1.05);
        assert_eq!(style.z_index, 10);
        assert_eq!(style.brightness, 1.2);

        assert!(hover.enter(key(1, 2)).is_none());
        assert_eq!(hover.zoomed_count(), 1);
    }

    #[test]
    fn test_leave_restores_only_zoomed() {
        let mut hover = HoverTracker::new(1.035);
        assert!(hover.leave(key(0, 0)).is_none());
        hover.enter(key(0, 0));
        assert_eq!(hover.leave(key(0, 0)), Some(ZoomStyle::REST));
        assert!(!hover.is_zoomed(&key(0, 0)));
        assert!(hover.leave(key(0, 0)).is_none());
    }

    #[test]
    fn test_replicas_tracked_separately() {
        let mut hover = HoverTracker::new(1.05);
        let a = key(1, 3);
        let b = TileKey { replica: 1, ..a };
        assert!(hover.enter(a).is_some());
        assert!(hover.enter(b).is_some());
        hover.clear();
        assert_eq!(hover.zoomed_count(), 0);
    }

    #[test]
    fn test_css_values() {
        let style = ZoomStyle::zoomed(1.05);
        assert_eq!(style.transform(), "scale(1.05)");
        assert_eq!(style.filter(), "brightness(1.2)");
        assert_eq!(ZoomStyle::REST.transform(), "scale(1)");
    }
}
