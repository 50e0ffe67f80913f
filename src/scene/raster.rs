use std::io::Cursor;

use image::ImageEncoder as _;

use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{StudioError, StudioResult};

/// A rendered frame as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// Wrap a pixel buffer, checking it matches `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> StudioResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(StudioError::validation(format!(
                "raster buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> StudioResult<Vec<u8>> {
        let mut buf = Vec::new();
        image::codecs::png::PngEncoder::new(Cursor::new(&mut buf))
            .write_image(
                &self.data,
                self.width,
                self.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| StudioError::Other(anyhow::Error::new(e).context("encode png")))?;
        Ok(buf)
    }
}

/// Drawing collaborator: produces one raster frame per index.
///
/// Implementations must be deterministic for a given `(idx, prompt)` and must return frames of
/// exactly [`FrameRenderer::canvas`] size.
pub trait FrameRenderer {
    /// Size of every frame this renderer produces.
    fn canvas(&self) -> Canvas;

    /// Render frame `idx` for `prompt`.
    fn render(&mut self, idx: FrameIndex, prompt: &str) -> StudioResult<RasterFrame>;
}

#[cfg(test)]
#[path = "../../tests/unit/scene/raster.rs"]
mod tests;
