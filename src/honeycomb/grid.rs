//! Honeycomb grid placement
//!
//! Turns a [`GridSpec`] and the current [`LayoutState`] into an ordered list
//! of tile placements. Placement order is row-major (replica-major for
//! carousel strips) and fully determined by the inputs.

use std::collections::BTreeSet;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{HexGeometry, Viewport};
use super::state::LayoutState;
use crate::content::{ContentLookup, ContentRecord};

/// Horizontal anchoring of the grid box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Anchor {
    /// Centre the grid box in the viewport (may go negative on overflow)
    #[default]
    Center,
    /// Pin the first column to the left edge; used by carousel strips
    Left,
}

/// Grid dimensions and excluded cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    /// Cells left out to round off the rectangle's silhouette
    #[serde(default)]
    pub skip: BTreeSet<(u32, u32)>,
    #[serde(default)]
    pub anchor: Anchor,
}

impl GridSpec {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            skip: BTreeSet::new(),
            anchor: Anchor::Center,
        }
    }

    /// Builder: exclude the given cells
    pub fn with_skip(mut self, cells: impl IntoIterator<Item = (u32, u32)>) -> Self {
        self.skip.extend(cells);
        self
    }

    /// Builder: set the horizontal anchor
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn is_skipped(&self, row: u32, col: u32) -> bool {
        self.skip.contains(&(row, col))
    }

    /// Number of cells that will actually be placed
    pub fn visible_cells(&self) -> usize {
        let in_bounds = self
            .skip
            .iter()
            .filter(|(r, c)| *r < self.rows && *c < self.cols)
            .count();
        (self.rows as usize)
            .saturating_mul(self.cols as usize)
            .saturating_sub(in_bounds)
    }

    /// Top-left of the grid box so that it is centred in the viewport.
    ///
    /// Oversized grids get a negative origin and overflow evenly on both
    /// sides; they are never scaled down.
    pub fn origin(&self, geometry: &HexGeometry, viewport: &Viewport) -> Vec2 {
        let extent = geometry.grid_extent(self.rows, self.cols);
        let y = (viewport.height - extent.y) / 2.0;
        let x = match self.anchor {
            Anchor::Center => (viewport.width - extent.x) / 2.0,
            Anchor::Left => 0.0,
        };
        Vec2::new(x, y)
    }
}

/// A grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse the `row-col` form used in `data-hex-id` attributes
    pub fn parse(id: &str) -> Option<Self> {
        let (row, col) = id.split_once('-')?;
        Some(Self::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Identifies one rendered tile; carousel replicas share a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKey {
    pub cell: Cell,
    pub replica: u32,
}

/// One tile ready for the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub cell: Cell,
    /// Strip copy index (always 0 on static grids)
    pub replica: u32,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    pub size: Vec2,
    /// `None` for decorative filler tiles
    pub content: Option<ContentRecord>,
}

impl Placement {
    pub fn key(&self) -> TileKey {
        TileKey {
            cell: self.cell,
            replica: self.replica,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }
}

/// Place every non-skipped cell of a static grid, row-major.
pub fn layout_grid(
    state: &LayoutState,
    spec: &GridSpec,
    lookup: &dyn ContentLookup,
) -> Vec<Placement> {
    let geometry = &state.geometry;
    let mut placements = Vec::with_capacity(spec.visible_cells());

    for row in 0..spec.rows {
        for col in 0..spec.cols {
            if spec.is_skipped(row, col) {
                continue;
            }
            placements.push(Placement {
                cell: Cell::new(row, col),
                replica: 0,
                position: state.origin + geometry.cell_offset(row, col),
                size: geometry.size(),
                content: lookup.lookup(row, col),
            });
        }
    }

    placements
}

/// Place `replicas` contiguous copies of a grid side by side for a
/// carousel. Copy `n` sits `n` strip widths (`cols * spacing_x`) to the
/// right of copy 0; the carousel driver moves them from there.
pub fn layout_strip(
    state: &LayoutState,
    spec: &GridSpec,
    lookup: &dyn ContentLookup,
    replicas: u32,
) -> Vec<Placement> {
    let geometry = &state.geometry;
    let replica_width = spec.cols as f32 * geometry.spacing_x;
    let mut placements = Vec::with_capacity(spec.visible_cells() * replicas as usize);

    for replica in 0..replicas {
        let shift = Vec2::new(replica as f32 * replica_width, 0.0);
        for row in 0..spec.rows {
            for col in 0..spec.cols {
                if spec.is_skipped(row, col) {
                    continue;
                }
                placements.push(Placement {
                    cell: Cell::new(row, col),
                    replica,
                    position: state.origin + geometry.cell_offset(row, col) + shift,
                    size: geometry.size(),
                    content: lookup.lookup(row, col),
                });
            }
        }
    }

    placements
}
