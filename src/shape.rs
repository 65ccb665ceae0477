//! Hexagon shape descriptor
//!
//! Every tile draws the same rounded pointy-top hexagon, stretched to the
//! tile box. The descriptor is immutable; the rendering layer instantiates
//! it once per tile.

use glam::Vec2;
use std::f32::consts::PI;
use std::fmt::Write;

use crate::honeycomb::{Placement, Viewport};

/// SVG shape shared by all tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexShape {
    pub view_box: &'static str,
    pub path: &'static str,
    /// Tiles are not regular on every viewport, so the path stretches
    pub preserve_aspect_ratio: &'static str,
}

/// Rounded pointy-top hexagon in a 190x212 box
pub const HEX_SHAPE: HexShape = HexShape {
    view_box: "0 0 190 212",
    path: "M85.5 3.63965C91.3786 0.245625 98.6214 0.245625 104.5 3.63965L178.896 46.5928C184.775 49.9868 188.396 56.2589 188.396 63.0469V148.953C188.396 155.741 184.775 162.013 178.896 165.407L104.5 208.36C98.805 211.648 91.8296 211.751 86.0547 208.669L85.5 208.36L11.1035 165.407C5.22494 162.013 1.60356 155.741 1.60352 148.953V63.0469C1.60356 56.2589 5.22493 49.9868 11.1035 46.5928L85.5 3.63965Z",
    preserve_aspect_ratio: "none",
};

impl HexShape {
    /// Standalone SVG markup for the shape
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg viewBox="{}" preserveAspectRatio="{}" xmlns="http://www.w3.org/2000/svg"><path d="{}"/></svg>"#,
            self.view_box, self.preserve_aspect_ratio, self.path
        )
    }
}

/// Corner points of a sharp pointy-top hexagon inscribed in a `width` x
/// `height` box centred on `center`, clockwise from the top vertex.
pub fn hex_outline(center: Vec2, width: f32, height: f32) -> [Vec2; 6] {
    let half = Vec2::new(width / 2.0, height / 2.0);
    std::array::from_fn(|i| {
        // Screen space: y grows downward, top vertex first
        let theta = -PI / 2.0 + i as f32 * PI / 3.0;
        center + Vec2::new(theta.cos() * half.x, theta.sin() * half.y)
    })
}

/// Render placements as a standalone SVG document using sharp hexagons.
/// Filler tiles are drawn grey; content tiles in their accent colour.
pub fn preview_svg(placements: &[Placement], viewport: Viewport) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height
    );
    for placement in placements {
        let points = hex_outline(placement.center(), placement.size.x, placement.size.y)
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let fill = placement
            .content
            .as_ref()
            .map_or("#2a2a2a", |content| content.color.as_str());
        let _ = write!(
            svg,
            r#"<polygon data-hex-id="{}" points="{}" fill="{}"/>"#,
            placement.cell, points, fill
        );
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_vertices() {
        let pts = hex_outline(Vec2::new(100.0, 100.0), 200.0, 230.0);
        assert!((pts[0] - Vec2::new(100.0, -15.0)).length() < 1e-3);
        assert!((pts[3] - Vec2::new(100.0, 215.0)).length() < 1e-3);
        // Side vertices sit at half height offsets
        assert!((pts[1].y - (100.0 - 57.5)).abs() < 1e-3);
        // Symmetric about the vertical axis
        assert!((pts[1].x - 100.0 + (pts[5].x - 100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_svg_markup() {
        let svg = HEX_SHAPE.to_svg();
        assert!(svg.starts_with("<svg viewBox=\"0 0 190 212\""));
        assert!(svg.contains("preserveAspectRatio=\"none\""));
    }

    #[test]
    fn test_preview_svg() {
        use crate::content::ContentRecord;
        use crate::honeycomb::Cell;

        let placements = vec![
            Placement {
                cell: Cell::new(0, 0),
                replica: 0,
                position: Vec2::new(10.0, 10.0),
                size: Vec2::new(100.0, 115.0),
                content: None,
            },
            Placement {
                cell: Cell::new(0, 1),
                replica: 0,
                position: Vec2::new(120.0, 10.0),
                size: Vec2::new(100.0, 115.0),
                content: Some(ContentRecord::new("Git", "*", "#f05032")),
            },
        ];
        let svg = preview_svg(&placements, Viewport::new(400.0, 300.0));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains(r##"data-hex-id="0-1""##));
        assert!(svg.contains("#f05032"));
        assert!(svg.ends_with("</svg>"));
    }
}
