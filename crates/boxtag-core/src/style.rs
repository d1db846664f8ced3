//! Colours and tunables for the icon picture.

/// Opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Blue 500
pub const BLUE_500: Rgb = Rgb(59, 130, 246);
/// Blue 600
pub const BLUE_600: Rgb = Rgb(37, 99, 235);
/// Blue 400
pub const BLUE_400: Rgb = Rgb(96, 165, 250);
/// Blue 700
pub const BLUE_700: Rgb = Rgb(29, 78, 216);
/// Amber 400
pub const AMBER_400: Rgb = Rgb(251, 191, 36);

/// Fill colours for each part of the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rounded background, also used to punch the tag hole
    pub background: Rgb,
    /// Box front face and the `$` glyph
    pub accent: Rgb,
    pub box_top: Rgb,
    pub box_side: Rgb,
    pub tag: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: BLUE_500,
            accent: BLUE_600,
            box_top: BLUE_400,
            box_side: BLUE_700,
            tag: AMBER_400,
        }
    }
}

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
pub const DEFAULT_MARGIN: u32 = 100;
pub const DEFAULT_CORNER_RADIUS: u32 = 180;

/// Background inset and rounding plus the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub margin: u32,
    pub corner_radius: u32,
    pub palette: Palette,
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle {
            margin: DEFAULT_MARGIN,
            corner_radius: DEFAULT_CORNER_RADIUS,
            palette: Palette::default(),
        }
    }
}
