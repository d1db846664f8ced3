use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::IconError;
use crate::glyph::draw_dollar;
use crate::layout::IconLayout;
use crate::style::IconStyle;

/// Render the application icon on a `size` x `size` canvas.
///
/// Paint order: background, box front, box top, box right face, price tag,
/// tag hole, `$` glyph.
pub fn render_icon(size: u32, style: &IconStyle) -> Result<RgbaImage, IconError> {
    let layout = IconLayout::new(size, style)?;
    let palette = &style.palette;
    let mut canvas = Canvas::new(layout.size, layout.size)?;

    canvas.fill_rounded_rect(layout.background, layout.corner_radius, palette.background);

    canvas.fill_polygon(&layout.box_front, palette.accent);
    canvas.fill_polygon(&layout.box_top, palette.box_top);
    canvas.fill_polygon(&layout.box_right, palette.box_side);

    canvas.fill_polygon(&layout.tag, palette.tag);
    canvas.fill_circle(layout.hole.center, layout.hole.radius, palette.background);
    draw_dollar(&mut canvas, layout.glyph_anchor, layout.glyph_em, palette.accent);

    Ok(canvas.to_image())
}
