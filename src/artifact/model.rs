use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::artifact::validate;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{StudioError, StudioResult};

/// Discriminator stored in every artifact. The container is JSON, not a real MP4.
pub const ARTIFACT_FORMAT: &str = "MP4_COMPATIBLE";
/// The only artifact schema version this crate reads and writes.
pub const ARTIFACT_VERSION: &str = "1.0";
/// Frame rate assumed when an artifact's metadata omits `fps`.
pub const DEFAULT_FPS: u32 = 10;

/// The persisted frame-sequence container.
///
/// `frames` holds base64-encoded PNG images in playback order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Artifact {
    pub format: String,
    pub version: String,
    pub metadata: ArtifactMetadata,
    pub frames: Vec<String>,
}

/// Descriptive metadata stored alongside the frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArtifactMetadata {
    #[serde(default)]
    pub title: String,
    /// Free text, normally the prompt the frames were rendered from.
    #[serde(default)]
    pub description: String,
    /// Seconds; always `frames.len() / fps` for artifacts written by this crate.
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    pub width: u32,
    pub height: u32,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created: String,
}

impl ArtifactMetadata {
    /// Metadata for a freshly rendered sequence of `frame_count` frames.
    pub fn for_render(
        title: impl Into<String>,
        prompt: impl Into<String>,
        fps: Fps,
        canvas: Canvas,
        frame_count: usize,
    ) -> Self {
        Self {
            title: title.into(),
            description: prompt.into(),
            duration: fps.frames_to_secs(frame_count),
            fps: Some(fps.get()),
            width: canvas.width,
            height: canvas.height,
            created: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    /// Frame rate with the default applied. May still be zero.
    pub fn effective_fps(&self) -> u32 {
        self.fps.unwrap_or(DEFAULT_FPS)
    }
}

impl Artifact {
    /// Build an artifact with the current format tag and version.
    pub fn new(metadata: ArtifactMetadata, frames: Vec<String>) -> Self {
        Self {
            format: ARTIFACT_FORMAT.to_string(),
            version: ARTIFACT_VERSION.to_string(),
            metadata,
            frames,
        }
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Decode the PNG bytes of frame `index`.
    pub fn decode_frame(&self, index: usize) -> StudioResult<Vec<u8>> {
        let encoded = self
            .frames
            .get(index)
            .ok_or_else(|| StudioError::schema(format!("frame {index} out of range")))?;
        decode_frame_data(encoded)
            .map_err(|e| StudioError::schema(format!("$.frames[{index}]: {e}")))
    }

    /// Parse and validate an artifact from JSON text.
    pub fn from_json_str(s: &str) -> StudioResult<Self> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Parse and validate an artifact from raw file bytes.
    ///
    /// Bytes that are not JSON (including invalid UTF-8) yield
    /// [`StudioError::ArtifactParseFailed`]; JSON of the wrong shape yields
    /// [`StudioError::ArtifactSchemaInvalid`].
    pub fn from_json_slice(bytes: &[u8]) -> StudioResult<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| StudioError::parse(e.to_string()))?;
        validate::check_shape(&value).map_err(|e| StudioError::schema(e.to_string()))?;
        let artifact: Self =
            serde_json::from_value(value).map_err(|e| StudioError::schema(e.to_string()))?;
        validate::validate_artifact(&artifact).map_err(|e| StudioError::schema(e.to_string()))?;
        Ok(artifact)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StudioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StudioError::Other(anyhow::Error::new(e).context("serialize artifact")))
    }
}

/// Base64-encode one PNG frame.
pub fn encode_frame_data(png: &[u8]) -> String {
    BASE64.encode(png)
}

/// Decode one base64 frame, rejecting empty payloads.
pub fn decode_frame_data(encoded: &str) -> Result<Vec<u8>, String> {
    if encoded.is_empty() {
        return Err("frame is empty".to_string());
    }
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| format!("invalid base64: {e}"))?;
    if bytes.is_empty() {
        return Err("frame decodes to zero bytes".to_string());
    }
    Ok(bytes)
}
