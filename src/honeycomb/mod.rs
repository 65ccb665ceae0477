//! Deterministic honeycomb layout engine
//!
//! Pure presentation math with no DOM dependency:
//! - Geometry is recomputed wholesale per layout pass
//! - Placement order is stable (row-major)
//! - Carousel state is advanced in fixed frame steps

pub mod carousel;
pub mod debounce;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod state;

pub use carousel::{Carousel, CarouselMode};
pub use debounce::Debouncer;
pub use geometry::{HexGeometry, Viewport, compute_geometry};
pub use grid::{Anchor, Cell, GridSpec, Placement, TileKey, layout_grid, layout_strip};
pub use hover::{HoverTracker, ZoomStyle};
pub use state::{LayoutSlot, LayoutState};
