//! Picture geometry for a given canvas size.
//!
//! All offsets come from a 1024 px design and are never scaled. The box and
//! tag are positioned relative to the canvas centre, so a different canvas
//! size moves the illustration but keeps its pixel dimensions.

use crate::error::IconError;
use crate::style::IconStyle;

/// A point in canvas pixel coordinates.
pub type Point = (f32, f32);

const BOX_SIZE: i64 = 400;
const BOX_LIFT: i64 = 50;
const TAG_WIDTH: i64 = 200;
const TAG_HEIGHT: i64 = 120;
const TAG_NOTCH: i64 = 30;
const HOLE_RADIUS: f32 = 15.0;
const GLYPH_EM: f32 = 80.0;

/// Axis-aligned rectangle, edges inclusive of `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True if the rectangle lies within `[0, width] x [0, height]`.
    pub fn fits_within(&self, width: f32, height: f32) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

/// Resolved geometry of every shape in the icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub background: Bounds,
    pub corner_radius: f32,
    pub box_front: [Point; 4],
    pub box_top: [Point; 3],
    pub box_right: [Point; 4],
    pub tag: [Point; 5],
    pub hole: Circle,
    /// Middle of the `$` glyph
    pub glyph_anchor: Point,
    pub glyph_em: f32,
}

impl IconLayout {
    /// Lay out the picture on a `size` x `size` canvas.
    ///
    /// Fails if the canvas is empty or narrower than both margins together.
    pub fn new(size: u32, style: &IconStyle) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::InvalidCanvas {
                size,
                reason: "canvas must not be empty".to_string(),
            });
        }
        if u64::from(size) < 2 * u64::from(style.margin) {
            return Err(IconError::InvalidCanvas {
                size,
                reason: format!("smaller than twice the margin ({})", style.margin),
            });
        }

        let s = i64::from(size);
        let margin = style.margin as f32;
        let background = Bounds {
            left: margin,
            top: margin,
            right: size as f32 - margin,
            bottom: size as f32 - margin,
        };
        let corner_radius = (style.corner_radius as f32)
            .min(background.width().min(background.height()) / 2.0);

        let bx = (s - BOX_SIZE).div_euclid(2);
        let by = (s - BOX_SIZE).div_euclid(2) - BOX_LIFT;
        let p = |x: i64, y: i64| -> Point { (x as f32, y as f32) };

        let near = bx + 50;
        let far = bx + BOX_SIZE - 50;
        let mid = bx + BOX_SIZE / 2;
        let shoulder = by + 150;
        let apex = by + 50;
        let base = by + BOX_SIZE + 50;

        let box_front = [p(near, shoulder), p(far, shoulder), p(far, base), p(near, base)];
        let box_top = [p(near, shoulder), p(mid, apex), p(far, shoulder)];
        let box_right = [
            p(far, shoulder),
            p(mid, apex),
            p(mid, by + BOX_SIZE - 50),
            p(far, base),
        ];

        let tx = bx + BOX_SIZE - 80;
        let ty = by + 80;
        let tag = [
            p(tx, ty + TAG_NOTCH),
            p(tx + TAG_WIDTH, ty + TAG_NOTCH),
            p(tx + TAG_WIDTH, ty + TAG_HEIGHT),
            p(tx + TAG_WIDTH - TAG_NOTCH, ty + TAG_HEIGHT + TAG_NOTCH),
            p(tx, ty + TAG_HEIGHT + TAG_NOTCH),
        ];

        Ok(IconLayout {
            size,
            background,
            corner_radius,
            box_front,
            box_top,
            box_right,
            tag,
            hole: Circle {
                center: p(tx + 30, ty + 60),
                radius: HOLE_RADIUS,
            },
            glyph_anchor: p(tx + TAG_WIDTH / 2, ty + 70),
            glyph_em: GLYPH_EM,
        })
    }

    pub fn background_bounds(&self) -> Bounds {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_design_coordinates() {
        let layout = IconLayout::new(1024, &IconStyle::default()).unwrap();

        assert_eq!(layout.size, 1024);
        assert_eq!(
            layout.background,
            Bounds { left: 100.0, top: 100.0, right: 924.0, bottom: 924.0 }
        );
        assert_eq!(layout.corner_radius, 180.0);
        assert_eq!(
            layout.box_front,
            [(362.0, 412.0), (662.0, 412.0), (662.0, 712.0), (362.0, 712.0)]
        );
        assert_eq!(layout.box_top, [(362.0, 412.0), (512.0, 312.0), (662.0, 412.0)]);
        assert_eq!(
            layout.box_right,
            [(662.0, 412.0), (512.0, 312.0), (512.0, 612.0), (662.0, 712.0)]
        );
        assert_eq!(
            layout.tag,
            [(632.0, 372.0), (832.0, 372.0), (832.0, 462.0), (802.0, 492.0), (632.0, 492.0)]
        );
        assert_eq!(layout.hole.center, (662.0, 402.0));
        assert_eq!(layout.hole.radius, 15.0);
        assert_eq!(layout.glyph_anchor, (732.0, 412.0));
    }

    #[test]
    fn background_fits_for_any_size_at_least_twice_margin() {
        let style = IconStyle::default();
        for size in [200, 201, 256, 333, 512, 1000, 1024, 2048, 4096] {
            let layout = IconLayout::new(size, &style).unwrap();
            assert!(
                layout.background_bounds().fits_within(size as f32, size as f32),
                "background escapes a {size} px canvas"
            );
        }
    }

    #[test]
    fn background_fits_with_custom_margin() {
        let style = IconStyle { margin: 7, ..IconStyle::default() };
        for size in 14..64 {
            let layout = IconLayout::new(size, &style).unwrap();
            assert!(layout.background_bounds().fits_within(size as f32, size as f32));
            assert!(layout.corner_radius * 2.0 <= layout.background.width());
        }
    }

    #[test]
    fn rejects_canvas_smaller_than_margins() {
        let result = IconLayout::new(199, &IconStyle::default());
        assert!(matches!(result, Err(IconError::InvalidCanvas { size: 199, .. })));
    }

    #[test]
    fn rejects_empty_canvas() {
        let style = IconStyle { margin: 0, ..IconStyle::default() };
        assert!(matches!(
            IconLayout::new(0, &style),
            Err(IconError::InvalidCanvas { size: 0, .. })
        ));
    }

    #[test]
    fn corner_radius_is_clamped_to_half_the_background() {
        let layout = IconLayout::new(300, &IconStyle::default()).unwrap();
        assert_eq!(layout.background.width(), 100.0);
        assert_eq!(layout.corner_radius, 50.0);
    }

    #[test]
    fn box_stays_centered_on_other_sizes() {
        let layout = IconLayout::new(2048, &IconStyle::default()).unwrap();
        let (left, _) = layout.box_front[0];
        let (right, _) = layout.box_front[1];
        assert_eq!((left + right) / 2.0, 1024.0);
        assert_eq!(right - left, 300.0);
    }
}
