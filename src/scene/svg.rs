//! Scenes are authored as small SVG documents and rasterized with `resvg`.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use kurbo::BezPath;

use crate::foundation::core::Canvas;
use crate::foundation::error::{StudioError, StudioResult};
use crate::scene::raster::RasterFrame;

const FONT_STACK: &str = "Arial, Helvetica, 'DejaVu Sans', sans-serif";

/// Font database shared by every frame of a scene.
pub type FontDb = Arc<usvg::fontdb::Database>;

/// Load the system fonts plus any fonts found in `extra_dir`.
pub fn load_fonts(extra_dir: Option<&Path>) -> FontDb {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = extra_dir {
        db.load_fonts_dir(dir);
    }
    tracing::debug!(faces = db.len(), "loaded font database");
    Arc::new(db)
}

/// A font database with no faces. Text elements render as nothing.
pub fn no_fonts() -> FontDb {
    Arc::new(usvg::fontdb::Database::new())
}

/// Straight-alpha color used by scene authoring helpers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Paint {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// HSL (degrees, percent, percent) to RGB with the given opacity.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgba(to_u8(r1), to_u8(g1), to_u8(b1), a)
    }

    fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn opacity(self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

/// Text styling for [`SvgDoc::text`].
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub size_px: f64,
    pub bold: bool,
    pub anchor: Anchor,
    pub paint: Paint,
}

/// Incrementally built SVG document in a fixed logical coordinate space.
///
/// The logical space is stretched onto the output canvas at rasterization time.
#[derive(Clone, Debug)]
pub struct SvgDoc {
    logical_w: f64,
    logical_h: f64,
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgDoc {
    pub fn new(logical_w: f64, logical_h: f64) -> Self {
        Self {
            logical_w,
            logical_h,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{}" fill-opacity="{}"/>"#,
            paint.hex(),
            paint.opacity()
        );
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
            paint.hex(),
            paint.opacity()
        );
    }

    pub fn fill_path(&mut self, path: &BezPath, paint: Paint) {
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="{}" fill-opacity="{}"/>"#,
            path.to_svg(),
            paint.hex(),
            paint.opacity()
        );
    }

    pub fn stroke_path(&mut self, path: &BezPath, paint: Paint, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}" stroke-linejoin="miter"/>"#,
            path.to_svg(),
            paint.hex(),
            paint.opacity()
        );
    }

    /// Fill a circle with a radial gradient. `stops` are `(offset, paint)` pairs.
    pub fn fill_radial(&mut self, cx: f64, cy: f64, r: f64, stops: &[(f64, Paint)]) {
        let id = format!("g{}", self.next_id);
        self.next_id += 1;

        let _ = writeln!(
            self.defs,
            r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{r}">"#
        );
        for (offset, paint) in stops {
            let _ = writeln!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                offset.clamp(0.0, 1.0),
                paint.hex(),
                paint.opacity()
            );
        }
        self.defs.push_str("</radialGradient>\n");

        let _ = writeln!(
            self.body,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="url(#{id})"/>"#
        );
    }

    pub fn text(&mut self, x: f64, y: f64, style: TextStyle, content: &str) {
        let anchor = match style.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        };
        let weight = if style.bold { "bold" } else { "normal" };
        let _ = writeln!(
            self.body,
            r#"<text x="{x}" y="{y}" font-family="{FONT_STACK}" font-size="{}" font-weight="{weight}" text-anchor="{anchor}" fill="{}" fill-opacity="{}">{}</text>"#,
            style.size_px,
            style.paint.hex(),
            style.paint.opacity(),
            escape_xml(content)
        );
    }

    /// Serialize for a `canvas`-sized output.
    pub fn finish(&self, canvas: Canvas) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">
<defs>
{}</defs>
{}</svg>
"#,
            canvas.width, canvas.height, self.logical_w, self.logical_h, self.defs, self.body
        )
    }

    /// Rasterize onto a `canvas`-sized pixmap.
    pub fn rasterize(&self, canvas: Canvas, fonts: &FontDb) -> StudioResult<RasterFrame> {
        rasterize_svg(&self.finish(canvas), canvas, fonts)
    }
}

/// Rasterize SVG text into a straight-alpha RGBA8 frame of exactly `canvas` size.
pub fn rasterize_svg(svg: &str, canvas: Canvas, fonts: &FontDb) -> StudioResult<RasterFrame> {
    let opts = usvg::Options {
        fontdb: fonts.clone(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| StudioError::validation(format!("scene svg did not parse: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| StudioError::validation("failed to allocate frame pixmap"))?;

    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(canvas.rgba_len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RasterFrame::new(canvas.width, canvas.height, data)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\t' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
