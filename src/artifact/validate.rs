use std::fmt;
use std::io::Cursor;

use crate::artifact::model::{ARTIFACT_FORMAT, ARTIFACT_VERSION, Artifact, decode_frame_data};

const ROOT: &str = "$";

fn field(parent: &str, name: &str) -> String {
    format!("{parent}.{name}")
}

fn item(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// One rule an artifact breaks, located by a JSONPath-style pointer such as `$.frames[3]`.
#[derive(Debug)]
pub(crate) struct Violation {
    pub(crate) at: String,
    pub(crate) message: String,
}

/// Every violation found in one pass.
#[derive(Debug, Default)]
pub(crate) struct Violations(pub(crate) Vec<Violation>);

impl Violations {
    fn push(&mut self, at: impl Into<String>, message: impl Into<String>) {
        self.0.push(Violation {
            at: at.into(),
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.at, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Structural checks on the raw JSON, before typed deserialization.
///
/// These produce clearer messages than serde for the common "wrong container" cases.
pub(crate) fn check_shape(value: &serde_json::Value) -> Result<(), Violations> {
    let mut found = Violations::default();
    let Some(obj) = value.as_object() else {
        found.push(ROOT, "artifact must be a JSON object");
        return found.into_result();
    };

    let frames_at = field(ROOT, "frames");
    match obj.get("frames").map(|f| f.as_array()) {
        None => found.push(frames_at, "missing"),
        Some(None) => found.push(frames_at, "must be an array"),
        Some(Some(frames)) => {
            for (i, _) in frames.iter().enumerate().filter(|(_, f)| !f.is_string()) {
                found.push(item(&frames_at, i), "must be a base64 string");
            }
        }
    }

    let metadata_at = field(ROOT, "metadata");
    match obj.get("metadata") {
        None => found.push(metadata_at, "missing"),
        Some(m) if !m.is_object() => found.push(metadata_at, "must be an object"),
        Some(_) => {}
    }
    found.into_result()
}

/// Semantic checks on a deserialized artifact.
pub(crate) fn validate_artifact(artifact: &Artifact) -> Result<(), Violations> {
    let mut found = Violations::default();

    if artifact.format != ARTIFACT_FORMAT {
        found.push(
            field(ROOT, "format"),
            format!("expected '{ARTIFACT_FORMAT}', got '{}'", artifact.format),
        );
    }
    if artifact.version != ARTIFACT_VERSION {
        found.push(
            field(ROOT, "version"),
            format!("unsupported version '{}'", artifact.version),
        );
    }

    let md = &artifact.metadata;
    let md_at = field(ROOT, "metadata");
    if md.width == 0 {
        found.push(field(&md_at, "width"), "must be > 0");
    }
    if md.height == 0 {
        found.push(field(&md_at, "height"), "must be > 0");
    }
    if !md.duration.is_finite() || md.duration < 0.0 {
        found.push(
            field(&md_at, "duration"),
            "must be a finite, non-negative number of seconds",
        );
    }

    // fps == 0 is left to the projector, which reports it as a degenerate frame rate.
    if let Some(fps) = md.fps.filter(|&f| f > 0) {
        let expected = artifact.frames.len() as f64 / f64::from(fps);
        if (md.duration - expected).abs() > 1e-9 {
            found.push(
                field(&md_at, "duration"),
                format!(
                    "{} does not match {} frames at {fps} fps ({expected})",
                    md.duration,
                    artifact.frames.len()
                ),
            );
        }
    }

    let frames_at = field(ROOT, "frames");
    for (i, frame) in artifact.frames.iter().enumerate() {
        let at = item(&frames_at, i);
        let dims = decode_frame_data(frame).and_then(|bytes| png_dimensions(&bytes));
        match dims {
            Err(msg) => found.push(at, msg),
            Ok((w, h)) if md.width > 0 && md.height > 0 && (w, h) != (md.width, md.height) => {
                found.push(
                    at,
                    format!("image is {w}x{h}, expected {}x{}", md.width, md.height),
                );
            }
            Ok(_) => {}
        }
    }

    found.into_result()
}

/// Read image dimensions from the header without decoding pixels.
pub(crate) fn png_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("unreadable image: {e}"))?
        .into_dimensions()
        .map_err(|e| format!("not a decodable image: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/artifact/validate.rs"]
mod tests;
