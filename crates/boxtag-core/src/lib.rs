//! Procedural application icon: rendering, PNG export and ICO packing.

pub mod canvas;
pub mod container;
mod error;
pub mod export;
pub mod glyph;
pub mod layout;
pub mod render;
pub mod style;

pub use container::{ICO_SIZES, IcoEntryInfo, pack_ico, read_ico_entries, read_ico_sizes};
pub use error::IconError;
pub use export::{PNG_SIZES, write_icon_set};
pub use render::render_icon;
pub use style::IconStyle;
