//! Hexagon sizing derived from the viewport
//!
//! Tiles are pointy-top hexagons whose width is a page-tuned fraction of the
//! viewport width. Everything here is integer-floored the same way the
//! stylesheet positions are, so layouts are reproducible pixel for pixel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEX_ASPECT, ROW_OVERLAP};
use crate::error::LayoutError;

/// Display surface size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True for hidden or collapsed containers that cannot host a layout
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Per-layout-pass hexagon dimensions and centre-to-centre spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexGeometry {
    pub hex_width: f32,
    pub hex_height: f32,
    pub gap_px: f32,
    /// Horizontal distance between neighbours in a row
    pub spacing_x: f32,
    /// Vertical distance between adjacent rows
    pub spacing_y: f32,
}

impl HexGeometry {
    /// Tile size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.hex_width, self.hex_height)
    }

    /// Height over width; constant for every tile on a page
    pub fn aspect(&self) -> f32 {
        self.hex_height / self.hex_width
    }

    /// Bounding box of a `rows` x `cols` grid (without the odd-row shift)
    pub fn grid_extent(&self, rows: u32, cols: u32) -> Vec2 {
        let cols_span = cols.saturating_sub(1) as f32 * self.spacing_x;
        let rows_span = rows.saturating_sub(1) as f32 * self.spacing_y;
        Vec2::new(cols_span + self.hex_width, rows_span + self.hex_height)
    }

    /// Offset of a cell from the grid origin. Odd rows shift right by half
    /// a column so the rows interlock.
    #[inline]
    pub fn cell_offset(&self, row: u32, col: u32) -> Vec2 {
        let shift = (row % 2) as f32 * (self.spacing_x / 2.0);
        Vec2::new(
            col as f32 * self.spacing_x + shift,
            row as f32 * self.spacing_y,
        )
    }
}

/// Compute hexagon geometry for a viewport.
///
/// `divisor` controls how many tiles fit across the viewport. A
/// non-positive divisor is a configuration error; an empty viewport is
/// reported as [`LayoutError::EmptyViewport`] so callers can skip the pass.
pub fn compute_geometry(
    viewport_width: f32,
    viewport_height: f32,
    divisor: f32,
    gap_px: f32,
) -> Result<HexGeometry, LayoutError> {
    if !(divisor.is_finite() && divisor > 0.0) {
        return Err(LayoutError::InvalidDivisor(divisor));
    }

    let viewport = Viewport::new(viewport_width, viewport_height);
    if viewport.is_empty() {
        return Err(LayoutError::EmptyViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }

    let hex_width = (viewport_width / divisor).floor();
    if hex_width < 1.0 {
        return Err(LayoutError::EmptyViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }
    let hex_height = (hex_width * HEX_ASPECT).floor();

    Ok(HexGeometry {
        hex_width,
        hex_height,
        gap_px,
        spacing_x: hex_width + gap_px,
        spacing_y: hex_height * ROW_OVERLAP + gap_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_at_1200() {
        let g = compute_geometry(1200.0, 800.0, 5.69, 19.0).unwrap();
        assert_eq!(g.hex_width, 210.0);
        assert_eq!(g.hex_height, 242.0);
        assert_eq!(g.spacing_x, 229.0);
        assert_eq!(g.spacing_y, 200.5);
    }

    #[test]
    fn test_invalid_divisor_is_fatal() {
        let err = compute_geometry(1200.0, 800.0, 0.0, 19.0).unwrap_err();
        assert_eq!(err, LayoutError::InvalidDivisor(0.0));
        assert!(err.is_fatal());
        assert!(compute_geometry(1200.0, 800.0, -2.0, 19.0).is_err());
        assert!(compute_geometry(1200.0, 800.0, f32::NAN, 19.0).is_err());
    }

    #[test]
    fn test_empty_viewport_degrades() {
        let err = compute_geometry(0.0, 800.0, 5.69, 19.0).unwrap_err();
        assert!(!err.is_fatal());
        assert!(compute_geometry(1200.0, 0.0, 5.69, 19.0).is_err());
        assert!(compute_geometry(-10.0, 800.0, 5.69, 19.0).is_err());
        // Too narrow to fit a single pixel of hexagon
        assert!(compute_geometry(3.0, 800.0, 5.69, 19.0).is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        for width in [320.0, 768.0, 1024.0, 1440.0, 1920.0, 2560.0] {
            let g = compute_geometry(width, 900.0, 5.69, 19.0).unwrap();
            assert!((g.hex_height - g.hex_width * HEX_ASPECT).abs() < 1.0);
        }
    }

    #[test]
    fn test_grid_extent() {
        let g = compute_geometry(1200.0, 800.0, 5.69, 19.0).unwrap();
        let extent = g.grid_extent(4, 8);
        assert_eq!(extent.x, 7.0 * 229.0 + 210.0);
        assert_eq!(extent.y, 3.0 * 200.5 + 242.0);
    }

    #[test]
    fn test_cell_offset_odd_rows_shift() {
        let g = compute_geometry(1200.0, 800.0, 5.69, 19.0).unwrap();
        assert_eq!(g.cell_offset(0, 2), Vec2::new(458.0, 0.0));
        assert_eq!(g.cell_offset(1, 2), Vec2::new(458.0 + 114.5, 200.5));
    }
}
