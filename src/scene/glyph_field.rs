use kurbo::{Circle, Shape as _};

use crate::foundation::core::Canvas;
use crate::foundation::error::StudioResult;
use crate::scene::raster::RasterFrame;
use crate::scene::svg::{Anchor, FontDb, Paint, SvgDoc, TextStyle};

const SIZE: f64 = 1024.0;
const CIRCLES: u32 = 150;

/// A generative still: translucent circles scattered by a hash of the prompt's words.
pub struct GlyphFieldImage {
    canvas: Canvas,
    fonts: FontDb,
}

impl GlyphFieldImage {
    /// Native output size.
    pub const CANVAS: Canvas = Canvas {
        width: 1024,
        height: 1024,
    };

    pub fn new(fonts: FontDb) -> Self {
        Self {
            canvas: Self::CANVAS,
            fonts,
        }
    }

    pub fn compose(&self, prompt: &str) -> SvgDoc {
        let hash = f64::from(prompt_hash(prompt));
        let mut doc = SvgDoc::new(SIZE, SIZE);
        doc.fill_rect(0.0, 0.0, SIZE, SIZE, Paint::rgb(0x1a, 0x1a, 0x1a));

        for i in 0..CIRCLES {
            let fi = f64::from(i);
            let x = (fi * hash * 0.02).sin() * 400.0 + SIZE / 2.0;
            let y = (fi * hash * 0.03).cos() * 400.0 + SIZE / 2.0;
            let r = (fi * 0.1).sin().abs() * 80.0 + 10.0;
            let alpha = 0.5 - fi / 300.0;
            let hue = (fi * 2.0 + hash) % 360.0;
            doc.fill_path(
                &Circle::new((x, y), r).to_path(0.1),
                Paint::hsla(hue, 80.0, 60.0, alpha),
            );
        }

        doc.text(
            SIZE / 2.0,
            100.0,
            TextStyle {
                size_px: 48.0,
                bold: true,
                anchor: Anchor::Middle,
                paint: Paint::rgba(255, 255, 255, 0.8),
            },
            prompt,
        );
        doc
    }

    pub fn render(&self, prompt: &str) -> StudioResult<RasterFrame> {
        self.compose(prompt).rasterize(self.canvas, &self.fonts)
    }
}

/// Sum of the lengths of the space-separated words in `prompt`.
pub(crate) fn prompt_hash(prompt: &str) -> u32 {
    prompt
        .split(' ')
        .map(|w| w.chars().count() as u32)
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/glyph_field.rs"]
mod tests;
