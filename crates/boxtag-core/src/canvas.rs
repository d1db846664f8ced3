//! Anti-aliased RGBA drawing surface.

use image::{Rgba, RgbaImage};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::error::IconError;
use crate::layout::{Bounds, Point};
use crate::style::Rgb;

/// Cubic Bézier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// A transparent canvas that shapes are painted onto.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, IconError> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| IconError::InvalidCanvas {
            size: width.max(height),
            reason: format!("cannot allocate a {}x{} canvas", width, height),
        })?;
        Ok(Canvas { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn fill_rounded_rect(&mut self, rect: Bounds, radius: f32, color: Rgb) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.fill_path(&path, color);
        }
    }

    /// Fill a closed polygon through `points`. Fewer than three points paint nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill_path(&path, color);
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.0, center.1, radius) {
            self.fill_path(&path, color);
        }
    }

    /// Stroke an open or closed path with butt caps.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: Rgb) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }

    fn fill_path(&mut self, path: &Path, color: Rgb) {
        self.pixmap.fill_path(
            path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Convert to a straight-alpha RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        let width = self.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}

fn paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = true;
    paint
}

/// Rectangle with quarter-circle corners. Returns `None` for empty rectangles.
fn rounded_rect_path(rect: Bounds, radius: f32) -> Option<Path> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let r = radius.max(0.0).min(rect.width() / 2.0).min(rect.height() / 2.0);
    let Bounds { left, top, right, bottom } = rect;

    if r == 0.0 {
        let rect = tiny_skia::Rect::from_ltrb(left, top, right, bottom)?;
        return Some(PathBuilder::from_rect(rect));
    }

    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
        canvas.to_image().get_pixel(x, y).0
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8, 8).unwrap();
        assert!(canvas.to_image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn image_matches_canvas_dimensions() {
        let canvas = Canvas::new(12, 7).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (12, 7));
        assert_eq!(canvas.to_image().dimensions(), (12, 7));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 16), Err(IconError::InvalidCanvas { .. })));
    }

    #[test]
    fn polygon_fills_interior_only() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.fill_polygon(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)], RED);

        assert_eq!(pixel(&canvas, 10, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 2, 2), [0, 0, 0, 0]);
        assert_eq!(pixel(&canvas, 17, 17), [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_polygon_paints_nothing() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_polygon(&[(1.0, 1.0), (8.0, 8.0)], RED);
        assert!(canvas.to_image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn rounded_rect_leaves_corners_clear() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        let rect = Bounds { left: 10.0, top: 10.0, right: 90.0, bottom: 90.0 };
        canvas.fill_rounded_rect(rect, 30.0, RED);

        assert_eq!(pixel(&canvas, 50, 50), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 50, 11), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 11, 11)[3], 0);
        assert_eq!(pixel(&canvas, 88, 88)[3], 0);
    }

    #[test]
    fn empty_rounded_rect_paints_nothing() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let rect = Bounds { left: 5.0, top: 0.0, right: 5.0, bottom: 10.0 };
        canvas.fill_rounded_rect(rect, 2.0, RED);
        assert!(canvas.to_image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn circle_covers_center_not_bounding_corner() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.fill_circle((20.0, 20.0), 10.0, RED);

        assert_eq!(pixel(&canvas, 20, 20), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 11, 11)[3], 0);
    }
}
