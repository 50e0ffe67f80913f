use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::config::StudioConfig;
use crate::container::playlist::PLAYLIST_MAX_ENTRIES;
use crate::container::reader::{ConvertTargets, Projection, convert, convert_with_frames};
use crate::container::writer::ContainerWriter;
use crate::content::{CopyKind, MarketingCopy};
use crate::foundation::error::StudioResult;
use crate::foundation::fs::{ensure_dir, write_whole};
use crate::pacing::{NoPacing, Pacer};
use crate::scene::{FontDb, GlyphFieldImage, TorchlightScene, load_fonts};

/// Entry point tying configuration, scenes and the frame container together.
///
/// Shared by the CLI and the HTTP server. Fonts are loaded lazily on first render.
pub struct Studio {
    config: StudioConfig,
    pacer: Arc<dyn Pacer>,
    fonts: OnceLock<FontDb>,
}

impl Studio {
    pub fn new(config: StudioConfig) -> StudioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pacer: Arc::new(NoPacing),
            fonts: OnceLock::new(),
        })
    }

    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Use `fonts` instead of scanning the system font directories and `fonts_dir`.
    pub fn with_fonts(self, fonts: FontDb) -> Self {
        let _ = self.fonts.set(fonts);
        self
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    fn fonts(&self) -> FontDb {
        self.fonts
            .get_or_init(|| load_fonts(self.config.fonts_dir.as_deref()))
            .clone()
    }

    /// Render the torchlight scene for `prompt` into the configured artifact and write the
    /// simulation notes next to it.
    pub fn generate_video(&self, prompt: &str) -> StudioResult<PathBuf> {
        self.generate_video_at(prompt, &self.config.artifact_path())
    }

    /// Like [`Studio::generate_video`] but writes the artifact to `out`. The notes file goes
    /// next to it.
    pub fn generate_video_at(&self, prompt: &str, out: &Path) -> StudioResult<PathBuf> {
        tracing::info!(prompt, "frame sequence generation started");
        let writer = ContainerWriter::new(&self.config)?.with_pacer(self.pacer.clone());
        let mut scene = TorchlightScene::new(writer.canvas(), writer.total_frames(), self.fonts());

        let path = writer.write(prompt, &mut scene, out)?;
        let notes = path.with_file_name(&self.config.info_file);
        if let Err(e) = write_whole(&notes, self.info_notes(prompt, &path)) {
            tracing::warn!(path = %notes.display(), error = %e, "could not write simulation notes");
        }
        tracing::info!(path = %path.display(), "frame sequence ready");
        Ok(path)
    }

    /// Render the generative still for `prompt` as a PNG in the storage directory.
    pub fn generate_image(&self, prompt: &str) -> StudioResult<PathBuf> {
        ensure_dir(&self.config.storage_dir)?;
        let frame = GlyphFieldImage::new(self.fonts()).render(prompt)?;
        let path = self.config.image_path();
        write_whole(&path, frame.encode_png()?)?;
        tracing::info!(path = %path.display(), "image saved");
        Ok(path)
    }

    pub fn marketing_copy(&self, kind: CopyKind, prompt: &str) -> MarketingCopy {
        MarketingCopy::generate(kind, prompt)
    }

    /// Project the configured artifact into descriptor and playlist files.
    ///
    /// With `with_frames`, the frames the playlist references are exported as PNGs too.
    pub fn convert(&self, with_frames: bool) -> StudioResult<Projection> {
        self.convert_with(
            &self.config.artifact_path(),
            &ConvertTargets::from_config(&self.config),
            with_frames,
        )
    }

    /// Project `artifact_path` into explicit `targets`.
    ///
    /// Exported frames land next to the playlist, under the directory its entries reference.
    pub fn convert_with(
        &self,
        artifact_path: &Path,
        targets: &ConvertTargets,
        with_frames: bool,
    ) -> StudioResult<Projection> {
        if !with_frames {
            return convert(artifact_path, targets);
        }
        let frames_out = targets
            .playlist
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&targets.frames_dir);
        convert_with_frames(artifact_path, targets, &frames_out, PLAYLIST_MAX_ENTRIES)
    }

    fn info_notes(&self, prompt: &str, artifact: &Path) -> String {
        let r = &self.config.render;
        let secs = f64::from(r.total_frames) / f64::from(r.fps);
        format!(
            "# Frame Sequence Generation Complete

Generated on: {}
Prompt: {prompt}
Artifact: {}
Specs: {}x{}, {} fps, {} frames ({secs} seconds)

This is a simulation. The artifact is a JSON container of base64 PNG frames,
not an encoded video. Run `promptreel convert` to derive a frame descriptor and playlist.
",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            artifact.display(),
            r.width,
            r.height,
            r.fps,
            r.total_frames,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/studio.rs"]
mod tests;
