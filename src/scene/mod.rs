//! Drawing collaborators: deterministic, index-driven scenes rasterized through SVG.

pub mod glyph_field;
pub mod raster;
pub mod svg;
pub mod torchlight;

pub use glyph_field::GlyphFieldImage;
pub use raster::{FrameRenderer, RasterFrame};
pub use svg::{FontDb, load_fonts, no_fonts};
pub use torchlight::TorchlightScene;
