//! Per-page layout presets
//!
//! Every page is a honeycomb; they differ in tile size, gap, grid shape,
//! which cells are dropped, and whether the grid scrolls as a carousel.

use serde::{Deserialize, Serialize};

use crate::consts::{CAROUSEL_REPLICAS, MAX_CAROUSEL_REPLICAS, MAX_GRID_COLS, MAX_GRID_ROWS};
use crate::error::LayoutError;
use crate::honeycomb::{Anchor, GridSpec};

/// Site pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageKind {
    #[default]
    Home,
    Projects,
    Skills,
    Resume,
    Dsa,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Projects,
        PageKind::Skills,
        PageKind::Resume,
        PageKind::Dsa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Projects => "projects",
            PageKind::Skills => "skills",
            PageKind::Resume => "resume",
            PageKind::Dsa => "dsa",
        }
    }

    /// Resolve a page from a `data-page` attribute or a file name
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase();
        let name = name.trim_end_matches(".html");
        match name {
            "" | "home" | "index" => Some(PageKind::Home),
            "projects" | "project" => Some(PageKind::Projects),
            "skills" | "skill" => Some(PageKind::Skills),
            "resume" | "resumes" => Some(PageKind::Resume),
            "dsa" => Some(PageKind::Dsa),
            _ => None,
        }
    }

    /// Page header text, typed in on load (home uses the splash cycle)
    pub fn header(&self) -> Option<&'static str> {
        match self {
            PageKind::Resume => Some("Different Domains, Different Resumes"),
            _ => None,
        }
    }
}

/// Carousel parameters for scrolling pages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Pixels per frame
    pub speed: f32,
    #[serde(default = "default_replicas")]
    pub replicas: u32,
}

fn default_replicas() -> u32 {
    CAROUSEL_REPLICAS
}

/// Full layout tuning for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page: PageKind,
    /// Viewport width / divisor = hex width
    pub divisor: f32,
    pub gap_px: f32,
    pub grid: GridSpec,
    #[serde(default)]
    pub carousel: Option<CarouselConfig>,
    /// Hover zoom scale
    pub zoom_scale: f32,
}

/// Corners and right edge dropped from the 4x8 home/resume grid
const ROUNDED_4X8: [(u32, u32); 6] = [(0, 0), (2, 0), (0, 7), (2, 7), (1, 7), (3, 7)];

impl PageConfig {
    /// Built-in configuration for a page
    pub fn preset(page: PageKind) -> Self {
        match page {
            PageKind::Home | PageKind::Resume => Self {
                page,
                divisor: 5.69,
                gap_px: 19.0,
                grid: GridSpec::new(4, 8).with_skip(ROUNDED_4X8),
                carousel: None,
                zoom_scale: 1.035,
            },
            PageKind::Projects => Self {
                page,
                divisor: 4.27,
                gap_px: 20.0,
                grid: GridSpec::new(3, 14).with_anchor(Anchor::Left),
                carousel: Some(CarouselConfig {
                    speed: 0.3,
                    replicas: CAROUSEL_REPLICAS,
                }),
                zoom_scale: 1.05,
            },
            PageKind::Skills => Self {
                page,
                divisor: 6.5,
                gap_px: 15.0,
                grid: GridSpec::new(3, 18).with_anchor(Anchor::Left),
                carousel: Some(CarouselConfig {
                    speed: 0.2,
                    replicas: CAROUSEL_REPLICAS,
                }),
                zoom_scale: 1.05,
            },
            PageKind::Dsa => Self {
                page,
                divisor: 5.69,
                gap_px: 19.0,
                grid: GridSpec::new(4, 6),
                carousel: None,
                zoom_scale: 1.05,
            },
        }
    }

    pub fn is_carousel(&self) -> bool {
        self.carousel.is_some()
    }

    /// Reject configurations the layout engine can't use
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Err(LayoutError::InvalidDivisor(self.divisor));
        }
        if !(self.gap_px.is_finite() && self.gap_px >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "gap must be non-negative, got {}",
                self.gap_px
            )));
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.rows > MAX_GRID_ROWS || self.grid.cols > MAX_GRID_COLS {
            return Err(LayoutError::InvalidConfig(format!(
                "grid {}x{} exceeds the {}x{} maximum",
                self.grid.rows, self.grid.cols, MAX_GRID_ROWS, MAX_GRID_COLS
            )));
        }
        if let Some(carousel) = &self.carousel {
            if carousel.replicas < 2 {
                return Err(LayoutError::InvalidConfig(
                    "carousel needs at least two strip copies to wrap seamlessly".into(),
                ));
            }
            if carousel.replicas > MAX_CAROUSEL_REPLICAS {
                return Err(LayoutError::InvalidConfig(format!(
                    "carousel asks for {} strip copies, at most {} allowed",
                    carousel.replicas, MAX_CAROUSEL_REPLICAS
                )));
            }
            if !carousel.speed.is_finite() {
                return Err(LayoutError::InvalidConfig("carousel speed is not finite".into()));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON page config
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_valid() {
        for page in PageKind::ALL {
            let config = PageConfig::preset(page);
            assert_eq!(config.page, page);
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!(PageKind::from_str("index.html"), Some(PageKind::Home));
        assert_eq!(PageKind::from_str("Resumes"), Some(PageKind::Resume));
        assert_eq!(PageKind::from_str("dsa.html"), Some(PageKind::Dsa));
        assert_eq!(PageKind::from_str("blog"), None);
        for page in PageKind::ALL {
            assert_eq!(PageKind::from_str(page.as_str()), Some(page));
        }
    }

    #[test]
    fn test_carousel_pages() {
        assert!(PageConfig::preset(PageKind::Projects).is_carousel());
        assert!(PageConfig::preset(PageKind::Skills).is_carousel());
        assert!(!PageConfig::preset(PageKind::Home).is_carousel());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PageConfig::preset(PageKind::Dsa);
        config.divisor = 0.0;
        assert!(config.validate().unwrap_err().is_fatal());

        let mut config = PageConfig::preset(PageKind::Dsa);
        config.grid.rows = 0;
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));

        let mut config = PageConfig::preset(PageKind::Skills);
        if let Some(c) = config.carousel.as_mut() {
            c.replicas = 1;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_config() {
        let json = serde_json::to_string(&PageConfig::preset(PageKind::Home)).unwrap();
        let config = PageConfig::from_json(&json).unwrap();
        assert_eq!(config.grid.skip.len(), 6);

        let bad = concat!(
            r#"{"page":"Dsa","divisor":-1.0,"gap_px":19.0,"#,
            r#""grid":{"rows":4,"cols":6},"zoom_scale":1.05}"#
        );
        assert_eq!(
            PageConfig::from_json(bad).unwrap_err(),
            LayoutError::InvalidDivisor(-1.0)
        );
        assert!(PageConfig::from_json("{").is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let huge = concat!(
            r#"{"page":"Dsa","divisor":5.69,"gap_px":19.0,"#,
            r#""grid":{"rows":70000,"cols":70000},"zoom_scale":1.05}"#
        );
        assert!(matches!(
            PageConfig::from_json(huge),
            Err(LayoutError::InvalidConfig(_))
        ));

        let mut config = PageConfig::preset(PageKind::Projects);
        config.grid.cols = MAX_GRID_COLS + 1;
        assert!(config.validate().is_err());

        let mut config = PageConfig::preset(PageKind::Projects);
        if let Some(c) = config.carousel.as_mut() {
            c.replicas = MAX_CAROUSEL_REPLICAS + 1;
        }
        assert!(config.validate().is_err());
    }
}
