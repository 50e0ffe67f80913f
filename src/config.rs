//! Explicit studio configuration: storage layout plus render parameters.
//!
//! Nothing in the crate reads process-wide state; every entry point takes a [`StudioConfig`].

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{StudioError, StudioResult};

/// Fixed parameters for one frame-sequence render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Number of frames rendered into each artifact.
    pub total_frames: u32,
    /// Playback rate stored in the artifact metadata.
    pub fps: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            total_frames: 60,
            fps: 10,
            width: 1920,
            height: 1080,
        }
    }
}

impl RenderParams {
    /// Validated frame rate.
    pub fn fps(&self) -> StudioResult<Fps> {
        Fps::new(self.fps)
    }

    /// Validated canvas.
    pub fn canvas(&self) -> StudioResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

/// Where generated files live and how artifacts are rendered.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Root directory for every generated file.
    pub storage_dir: PathBuf,
    /// Artifact file name inside `storage_dir`.
    pub artifact_file: String,
    /// Frame-sequence descriptor file name inside `storage_dir`.
    pub descriptor_file: String,
    /// Playlist file name inside `storage_dir`.
    pub playlist_file: String,
    /// Simulation notes written next to the artifact.
    pub info_file: String,
    /// Still image file name inside `storage_dir`.
    pub image_file: String,
    /// Sub-directory (relative to `storage_dir`) holding exported frame PNGs.
    pub frames_dir: String,
    /// Title stored in artifact metadata.
    pub title: String,
    /// Render parameters for artifacts.
    pub render: RenderParams,
    /// Extra font directory loaded on top of the system fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("generated_videos"),
            artifact_file: "dialogue_example.mp4".to_string(),
            descriptor_file: "dialogue_example_frames.txt".to_string(),
            playlist_file: "playlist.m3u8".to_string(),
            info_file: "video_info.txt".to_string(),
            image_file: "generated_image.png".to_string(),
            frames_dir: "frames".to_string(),
            title: "AI Generated Video".to_string(),
            render: RenderParams::default(),
            fonts_dir: None,
        }
    }
}

impl StudioConfig {
    /// Load a JSON config file. Missing fields take their default values.
    pub fn from_path(path: &Path) -> StudioResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Default config rooted at `storage_dir`.
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> StudioResult<()> {
        self.render.fps()?;
        self.render.canvas()?;
        for (field, name) in [
            ("artifact_file", &self.artifact_file),
            ("descriptor_file", &self.descriptor_file),
            ("playlist_file", &self.playlist_file),
            ("info_file", &self.info_file),
            ("image_file", &self.image_file),
        ] {
            if name.trim().is_empty() {
                return Err(StudioError::validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.storage_dir.join(&self.artifact_file)
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.storage_dir.join(&self.descriptor_file)
    }

    pub fn playlist_path(&self) -> PathBuf {
        self.storage_dir.join(&self.playlist_file)
    }

    pub fn info_path(&self) -> PathBuf {
        self.storage_dir.join(&self.info_file)
    }

    pub fn image_path(&self) -> PathBuf {
        self.storage_dir.join(&self.image_file)
    }

    pub fn frames_path(&self) -> PathBuf {
        self.storage_dir.join(&self.frames_dir)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
