//! Seamless carousel driver
//!
//! A carousel scrolls a strip of `total_items` columns horizontally forever.
//! The strip is rendered as several contiguous copies and every tile's x is
//! wrapped modulo the combined width, so a tile leaving on the left re-enters
//! on the right without a visible seam.
//!
//! Two modes:
//! - `AutoScrolling`: offset advances by `speed` pixels per frame
//! - `Navigating`: offset eases toward a target, auto-scroll suspended
//!
//! All geometry comes in through the current [`LayoutState`]; the driver
//! keeps none of it.

use crate::consts::{CAROUSEL_REPLICAS, FRAME_DT, MAX_SUBSTEPS, NAVIGATE_EASE, NAVIGATE_SNAP_PX};
use crate::wrap;

use super::state::LayoutState;

/// Carousel state machine mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMode {
    /// Constant-speed scrolling (initial mode)
    AutoScrolling,
    /// Easing toward `target`; no constant-speed advance
    Navigating { target: f32 },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    total_items: u32,
    replicas: u32,
    /// Pixels per 60 Hz frame
    speed: f32,
    offset: f32,
    mode: CarouselMode,
    running: bool,
    /// Unconsumed real time for fixed-step advance (seconds)
    accumulator: f32,
}

impl Carousel {
    pub fn new(total_items: u32, speed: f32) -> Self {
        Self {
            total_items,
            replicas: CAROUSEL_REPLICAS,
            speed,
            offset: 0.0,
            mode: CarouselMode::AutoScrolling,
            running: true,
            accumulator: 0.0,
        }
    }

    /// Builder: render `replicas` strip copies instead of the default three
    pub fn with_replicas(mut self, replicas: u32) -> Self {
        self.replicas = replicas.max(1);
        self
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn replicas(&self) -> u32 {
        self.replicas
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn is_navigating(&self) -> bool {
        matches!(self.mode, CarouselMode::Navigating { .. })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the driver; further ticks are ignored until `start`
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Width of one copy of the strip
    pub fn replica_width(&self, layout: &LayoutState) -> f32 {
        self.total_items as f32 * layout.geometry.spacing_x
    }

    /// Width of all copies together; the wrap period
    pub fn total_width(&self, layout: &LayoutState) -> f32 {
        self.replicas as f32 * self.replica_width(layout)
    }

    /// Advance one frame
    pub fn tick(&mut self, layout: &LayoutState) {
        if !self.running {
            return;
        }

        match self.mode {
            CarouselMode::AutoScrolling => {
                self.offset += self.speed;
                // Re-base by whole strip widths; wrapped positions are unchanged
                let total = self.total_width(layout);
                if total > 0.0 && !(0.0..total).contains(&self.offset) {
                    self.offset = wrap(self.offset, total);
                }
            }
            CarouselMode::Navigating { target } => {
                self.offset += (target - self.offset) * NAVIGATE_EASE;
                if (target - self.offset).abs() <= NAVIGATE_SNAP_PX {
                    self.offset = target;
                    self.mode = CarouselMode::AutoScrolling;
                }
            }
        }
    }

    /// Advance by real elapsed time using fixed 60 Hz steps, so dropped
    /// frames don't slow the strip down. Returns the number of steps taken.
    pub fn advance(&mut self, dt: f32, layout: &LayoutState) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += dt.clamp(0.0, 0.1);
        let mut steps = 0;
        while self.accumulator >= FRAME_DT && steps < MAX_SUBSTEPS {
            self.tick(layout);
            self.accumulator -= FRAME_DT;
            steps += 1;
        }
        // Drop any backlog the step cap left behind
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        steps
    }

    /// Ease toward the offset that centres item `index` in the viewport.
    ///
    /// The caller keeps `index` in `[0, total_items)`. The target is taken in
    /// whichever strip copy is closest to the current offset.
    pub fn navigate_to(&mut self, index: u32, layout: &LayoutState) {
        let spacing_x = layout.geometry.spacing_x;
        let base = index as f32 * spacing_x - layout.viewport.width / 2.0;
        let replica_width = self.replica_width(layout);
        let target = if replica_width > 0.0 {
            base + ((self.offset - base) / replica_width).round() * replica_width
        } else {
            base
        };
        log::debug!("Carousel navigating to item {} (offset {:.1})", index, target);
        self.mode = CarouselMode::Navigating { target };
    }

    /// Item currently nearest the viewport centre
    pub fn center_index(&self, layout: &LayoutState) -> u32 {
        let spacing_x = layout.geometry.spacing_x;
        if self.total_items == 0 || spacing_x <= 0.0 {
            return 0;
        }
        let raw = ((self.offset + layout.viewport.width / 2.0) / spacing_x).round() as i64;
        let index = raw.rem_euclid(self.total_items as i64) as u32;
        index.min(self.total_items - 1)
    }

    /// Rendered x of a tile whose unscrolled x (replica shift included) is
    /// `base_x`. Always within `[-spacing_x, total_width - spacing_x)`.
    #[inline]
    pub fn wrapped_x(&self, base_x: f32, layout: &LayoutState) -> f32 {
        let total = self.total_width(layout);
        wrap(base_x - self.offset, total) - layout.geometry.spacing_x
    }

    /// Carry the scroll position over to a new layout.
    ///
    /// The offset is converted to a fractional centred-item index under the
    /// old geometry and back under the new one, so the item in the middle of
    /// the screen stays there across a resize.
    pub fn adopt_layout(&mut self, old: &LayoutState, new: &LayoutState) {
        let old_spacing = old.geometry.spacing_x;
        let new_spacing = new.geometry.spacing_x;
        if old_spacing <= 0.0 || new_spacing <= 0.0 {
            return;
        }

        let rescale = |offset: f32| {
            let centred = (offset + old.viewport.width / 2.0) / old_spacing;
            centred * new_spacing - new.viewport.width / 2.0
        };

        self.offset = rescale(self.offset);
        if let CarouselMode::Navigating { target } = self.mode {
            self.mode = CarouselMode::Navigating {
                target: rescale(target),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honeycomb::geometry::{HexGeometry, Viewport};
    use glam::Vec2;

    fn layout(viewport_width: f32, spacing_x: f32) -> LayoutState {
        let geometry = HexGeometry {
            hex_width: spacing_x - 20.0,
            hex_height: ((spacing_x - 20.0) * 1.1547).floor(),
            gap_px: 20.0,
            spacing_x,
            spacing_y: 200.0,
        };
        LayoutState::new(Viewport::new(viewport_width, 800.0), geometry, Vec2::ZERO)
    }

    fn settle(carousel: &mut Carousel, layout: &LayoutState) {
        for _ in 0..1000 {
            if !carousel.is_navigating() {
                return;
            }
            carousel.tick(layout);
        }
        panic!("navigation never settled");
    }

    #[test]
    fn test_auto_scroll_advances_by_speed() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 0.3);
        for _ in 0..10 {
            carousel.tick(&layout);
        }
        assert!((carousel.offset() - 3.0).abs() < 1e-4);
        assert_eq!(carousel.mode(), CarouselMode::AutoScrolling);
    }

    #[test]
    fn test_strip_widths() {
        let layout = layout(1200.0, 300.0);
        let carousel = Carousel::new(14, 0.3);
        assert_eq!(carousel.replica_width(&layout), 4200.0);
        assert_eq!(carousel.total_width(&layout), 12600.0);
        assert_eq!(wrap(4300.0, carousel.replica_width(&layout)), 100.0);
    }

    #[test]
    fn test_navigation_suspends_auto_scroll() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 50.0);
        carousel.navigate_to(5, &layout);
        let CarouselMode::Navigating { target } = carousel.mode() else {
            panic!("expected navigating");
        };

        let before = carousel.offset();
        carousel.tick(&layout);
        // Pure ease step, no +speed
        let expected = before + (target - before) * NAVIGATE_EASE;
        assert!((carousel.offset() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_navigate_then_center_index() {
        let layout = layout(1200.0, 300.0);
        for k in [0, 3, 7, 13] {
            let mut carousel = Carousel::new(14, 0.3);
            for _ in 0..250 {
                carousel.tick(&layout);
            }
            carousel.navigate_to(k, &layout);
            settle(&mut carousel, &layout);
            assert_eq!(carousel.center_index(&layout), k);
            assert_eq!(carousel.mode(), CarouselMode::AutoScrolling);
        }
    }

    #[test]
    fn test_navigate_picks_nearest_copy() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 0.0);
        carousel.offset = 4200.0 * 2.0 + 10.0;
        carousel.navigate_to(1, &layout);
        let CarouselMode::Navigating { target } = carousel.mode() else {
            panic!("expected navigating");
        };
        assert!((target - carousel.offset()).abs() <= 4200.0 / 2.0);
    }

    #[test]
    fn test_wrapped_x_bounds() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 0.0);
        let total = carousel.total_width(&layout);
        for offset in [-50_000.0, -300.0, 0.0, 150.0, 4300.0, 99_999.0] {
            carousel.offset = offset;
            for base in [0.0, 150.0, 4200.0, 8550.0, 12_450.0] {
                let x = carousel.wrapped_x(base, &layout);
                assert!(x >= -300.0 && x < total - 300.0, "x={x} offset={offset}");
            }
        }
    }

    #[test]
    fn test_offset_rebase_keeps_positions() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 7.0);
        carousel.offset = carousel.total_width(&layout) - 3.0;
        let before = carousel.wrapped_x(600.0, &layout);
        carousel.tick(&layout);
        let after = carousel.wrapped_x(600.0, &layout);
        assert!(carousel.offset() < carousel.total_width(&layout));
        assert!((before - 7.0 - after).abs() < 1e-2);
    }

    #[test]
    fn test_stopped_carousel_ignores_ticks() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 1.0);
        carousel.stop();
        carousel.tick(&layout);
        assert_eq!(carousel.advance(0.05, &layout), 0);
        assert_eq!(carousel.offset(), 0.0);
        carousel.start();
        carousel.tick(&layout);
        assert_eq!(carousel.offset(), 1.0);
    }

    #[test]
    fn test_advance_uses_fixed_steps() {
        let layout = layout(1200.0, 300.0);
        let mut carousel = Carousel::new(14, 1.0);
        // Two frames worth of time at once (a dropped frame)
        let steps = carousel.advance(2.0 * FRAME_DT + 0.001, &layout);
        assert_eq!(steps, 2);
        assert!((carousel.offset() - 2.0).abs() < 1e-4);
        // Huge stalls are capped
        let steps = carousel.advance(5.0, &layout);
        assert_eq!(steps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_adopt_layout_preserves_center_item() {
        let old = layout(1200.0, 300.0);
        let new = layout(900.0, 220.0);
        let mut carousel = Carousel::new(14, 0.0);
        carousel.navigate_to(9, &old);
        settle(&mut carousel, &old);
        assert_eq!(carousel.center_index(&old), 9);

        carousel.adopt_layout(&old, &new);
        assert_eq!(carousel.center_index(&new), 9);
    }

    #[test]
    fn test_center_index_empty_strip() {
        let layout = layout(1200.0, 300.0);
        let carousel = Carousel::new(0, 0.3);
        assert_eq!(carousel.center_index(&layout), 0);
    }
}
