//! Layout state for one layout pass
//!
//! A `LayoutState` is computed from scratch for every pass (initial load and
//! each debounced resize) and handed explicitly to whatever needs geometry.
//! Nothing mutates it in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{HexGeometry, Viewport, compute_geometry};
use crate::error::LayoutError;
use crate::pages::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub viewport: Viewport,
    pub geometry: HexGeometry,
    /// Top-left of the grid box
    pub origin: Vec2,
}

impl LayoutState {
    pub fn new(viewport: Viewport, geometry: HexGeometry, origin: Vec2) -> Self {
        Self {
            viewport,
            geometry,
            origin,
        }
    }

    /// Run a full layout pass for a page at the given viewport size
    pub fn compute(viewport: Viewport, config: &PageConfig) -> Result<Self, LayoutError> {
        let geometry = compute_geometry(
            viewport.width,
            viewport.height,
            config.divisor,
            config.gap_px,
        )?;
        let origin = config.grid.origin(&geometry, &viewport);
        Ok(Self::new(viewport, geometry, origin))
    }
}

/// The layout currently drawn, plus the last one that succeeded.
///
/// An empty-viewport pass clears what is drawn but keeps the last good
/// layout, so the carousel can still rescale from it on the next pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutSlot {
    current: Option<LayoutState>,
    last_good: Option<LayoutState>,
}

impl LayoutSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout currently drawn, if any
    pub fn current(&self) -> Option<&LayoutState> {
        self.current.as_ref()
    }

    /// Most recent successful layout, drawn or not
    pub fn last_good(&self) -> Option<&LayoutState> {
        self.last_good.as_ref()
    }

    /// Install a fresh layout. Returns the previous good one.
    pub fn install(&mut self, layout: LayoutState) -> Option<LayoutState> {
        self.current = Some(layout);
        self.last_good.replace(layout)
    }

    /// Nothing is drawn any more
    pub fn clear(&mut self) {
        self.current = None;
    }
}
