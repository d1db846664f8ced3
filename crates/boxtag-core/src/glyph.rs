//! Vector `$` glyph.
//!
//! Outlines are given in em units around the glyph's middle, y pointing down.

use tiny_skia::{Path, PathBuilder};

use crate::canvas::Canvas;
use crate::layout::Point;
use crate::style::Rgb;

/// Stroke width relative to the em size.
const STROKE_EM: f32 = 0.085;

/// The S curve, as a start point followed by cubic segments.
const S_START: Point = (0.21, -0.22);
const S_CURVES: [[Point; 3]; 6] = [
    [(0.17, -0.31), (0.09, -0.34), (0.0, -0.34)],
    [(-0.12, -0.34), (-0.21, -0.27), (-0.21, -0.17)],
    [(-0.21, -0.06), (-0.11, -0.03), (0.0, 0.0)],
    [(0.11, 0.03), (0.21, 0.06), (0.21, 0.17)],
    [(0.21, 0.27), (0.12, 0.34), (0.0, 0.34)],
    [(-0.09, 0.34), (-0.17, 0.31), (-0.21, 0.22)],
];
const BAR_TOP: f32 = -0.44;
const BAR_BOTTOM: f32 = 0.44;

/// Build the dollar sign outline centred on `anchor` at `em` pixels.
pub fn dollar_path(anchor: Point, em: f32) -> Option<Path> {
    let at = |(x, y): Point| (anchor.0 + x * em, anchor.1 + y * em);

    let mut pb = PathBuilder::new();
    let (sx, sy) = at(S_START);
    pb.move_to(sx, sy);
    for [c1, c2, end] in S_CURVES {
        let (x1, y1) = at(c1);
        let (x2, y2) = at(c2);
        let (x, y) = at(end);
        pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    let (bx, top) = at((0.0, BAR_TOP));
    let (_, bottom) = at((0.0, BAR_BOTTOM));
    pb.move_to(bx, top);
    pb.line_to(bx, bottom);

    pb.finish()
}

/// Paint a `$` centred on `anchor`.
pub fn draw_dollar(canvas: &mut Canvas, anchor: Point, em: f32, color: Rgb) {
    if em <= 0.0 {
        return;
    }
    if let Some(path) = dollar_path(anchor, em) {
        canvas.stroke_path(&path, em * STROKE_EM, color);
    }
}
