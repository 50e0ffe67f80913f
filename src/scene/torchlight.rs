use kurbo::{BezPath, Circle, Line, Rect, Shape as _};

use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::StudioResult;
use crate::scene::raster::{FrameRenderer, RasterFrame};
use crate::scene::svg::{Anchor, FontDb, Paint, SvgDoc, TextStyle};

// Authoring space; output is stretched to the configured canvas.
const W: f64 = 1920.0;
const H: f64 = 1080.0;

const BACKGROUND: Paint = Paint::rgb(0x1a, 0x1a, 0x1a);
const WALL: Paint = Paint::rgb(0x65, 0x43, 0x21);
const FIGURE: Paint = Paint::rgb(0x8b, 0x45, 0x13);
const GLYPH: Paint = Paint::rgb(0xda, 0xa5, 0x20);
const TEXT: Paint = Paint::rgb(0xff, 0xff, 0xff);

const GLYPH_SIZE: f64 = 40.0;
/// Frames over which all wall glyphs become visible.
const GLYPH_REVEAL_FRAMES: f64 = 20.0;
const FIRST_LINE_AFTER: u32 = 20;
const SECOND_LINE_AFTER: u32 = 40;

const FIRST_LINE: &str = "\"This must be it. That's the secret code.\"";
const SECOND_LINE: &str = "\"What did you find?\"";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Circle,
    Triangle,
    Square,
    Line,
}

const GLYPHS: [(f64, f64, Glyph); 7] = [
    (300.0, 300.0, Glyph::Circle),
    (500.0, 250.0, Glyph::Triangle),
    (700.0, 320.0, Glyph::Square),
    (900.0, 280.0, Glyph::Line),
    (1100.0, 300.0, Glyph::Circle),
    (1300.0, 260.0, Glyph::Triangle),
    (1500.0, 310.0, Glyph::Square),
];

/// Two figures by torchlight in front of a wall of progressively revealed glyphs.
///
/// Every drawing parameter is a pure function of the frame index, so the same index always
/// yields the same pixels.
pub struct TorchlightScene {
    canvas: Canvas,
    total_frames: u32,
    fonts: FontDb,
}

impl TorchlightScene {
    pub fn new(canvas: Canvas, total_frames: u32, fonts: FontDb) -> Self {
        Self {
            canvas,
            total_frames,
            fonts,
        }
    }

    /// Build the SVG document for frame `idx`.
    pub fn compose(&self, idx: FrameIndex) -> SvgDoc {
        let i = f64::from(idx.0);
        let mut doc = SvgDoc::new(W, H);

        doc.fill_rect(0.0, 0.0, W, H, BACKGROUND);
        doc.stroke_rect(200.0, 150.0, 1520.0, 800.0, WALL, 5.0);

        let radius = 200.0 + (i * 0.3).sin() * 50.0;
        doc.fill_radial(
            W / 2.0,
            H / 2.0,
            radius,
            &[
                (0.0, Paint::rgba(255, 165, 0, 0.8 - i * 0.01)),
                (0.5, Paint::rgba(255, 140, 0, 0.4 - i * 0.005)),
                (1.0, Paint::rgba(255, 165, 0, 0.0)),
            ],
        );

        let left = Rect::from_origin_size((400.0 + (i * 0.1).sin() * 10.0, 600.0), (120.0, 300.0));
        let right = Rect::from_origin_size((1400.0 + (i * 0.15).cos() * 8.0, 580.0), (100.0, 320.0));
        doc.fill_path(&left.to_path(0.1), FIGURE);
        doc.fill_path(&right.to_path(0.1), FIGURE);

        let visible = visible_glyphs(idx);
        for &(x, y, glyph) in &GLYPHS[..visible] {
            doc.stroke_path(&glyph_path(glyph, x, y, GLYPH_SIZE), GLYPH, 4.0);
        }

        let dialogue = TextStyle {
            size_px: 36.0,
            bold: true,
            anchor: Anchor::Middle,
            paint: TEXT,
        };
        if idx.0 > FIRST_LINE_AFTER {
            doc.text(W / 2.0, 1000.0, dialogue, FIRST_LINE);
        }
        if idx.0 > SECOND_LINE_AFTER {
            doc.text(W / 2.0, 1050.0, dialogue, SECOND_LINE);
        }

        let counter = TextStyle {
            size_px: 24.0,
            bold: false,
            anchor: Anchor::Start,
            paint: TEXT,
        };
        doc.text(
            50.0,
            50.0,
            counter,
            &format!("Frame: {}/{}", idx.ordinal(), self.total_frames),
        );

        doc
    }
}

impl FrameRenderer for TorchlightScene {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn render(&mut self, idx: FrameIndex, _prompt: &str) -> StudioResult<RasterFrame> {
        self.compose(idx).rasterize(self.canvas, &self.fonts)
    }
}

/// Number of wall glyphs drawn on frame `idx`.
pub(crate) fn visible_glyphs(idx: FrameIndex) -> usize {
    let progress = (f64::from(idx.0) / GLYPH_REVEAL_FRAMES).min(1.0);
    (GLYPHS.len() as f64 * progress).floor() as usize
}

fn glyph_path(glyph: Glyph, x: f64, y: f64, size: f64) -> BezPath {
    let half = size / 2.0;
    match glyph {
        Glyph::Circle => Circle::new((x, y), half).to_path(0.1),
        Glyph::Triangle => {
            let mut p = BezPath::new();
            p.move_to((x, y - half));
            p.line_to((x - half, y + half));
            p.line_to((x + half, y + half));
            p.close_path();
            p
        }
        Glyph::Square => Rect::from_center_size((x, y), (size, size)).to_path(0.1),
        Glyph::Line => Line::new((x - half, y), (x + half, y)).to_path(0.1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/torchlight.rs"]
mod tests;
