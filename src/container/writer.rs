use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::artifact::{Artifact, ArtifactMetadata, encode_frame_data};
use crate::config::StudioConfig;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{StudioError, StudioResult};
use crate::foundation::fs::{ensure_parent_dir, write_whole};
use crate::pacing::{NoPacing, Pacer};
use crate::scene::raster::FrameRenderer;

const PROGRESS_EVERY: u32 = 10;

/// Renders a fixed number of frames and persists them as one artifact.
///
/// The artifact is assembled entirely in memory and written once, so a failed render never
/// leaves a file behind. Two writers targeting the same path are last-writer-wins.
pub struct ContainerWriter {
    title: String,
    total_frames: u32,
    fps: Fps,
    canvas: Canvas,
    pacer: Arc<dyn Pacer>,
}

impl ContainerWriter {
    /// Create a writer from the render parameters in `cfg`.
    pub fn new(cfg: &StudioConfig) -> StudioResult<Self> {
        Ok(Self {
            title: cfg.title.clone(),
            total_frames: cfg.render.total_frames,
            fps: cfg.render.fps()?,
            canvas: cfg.render.canvas()?,
            pacer: Arc::new(NoPacing),
        })
    }

    /// Consult `pacer` after every rendered frame.
    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Render every frame of `prompt` and write the artifact to `out_path`.
    ///
    /// The parent directory is created before any rendering starts.
    #[tracing::instrument(skip(self, prompt, renderer), fields(out = %out_path.display(), frames = self.total_frames))]
    pub fn write(
        &self,
        prompt: &str,
        renderer: &mut dyn FrameRenderer,
        out_path: &Path,
    ) -> StudioResult<PathBuf> {
        ensure_parent_dir(out_path)?;

        let artifact = self.render_artifact(prompt, renderer)?;
        let json = artifact.to_json_pretty()?;

        tracing::debug!(bytes = json.len(), "saving artifact");
        write_whole(out_path, json)?;
        tracing::info!(
            frames = artifact.frame_count(),
            duration = artifact.metadata.duration,
            "artifact written"
        );
        Ok(out_path.to_path_buf())
    }

    /// Render every frame into an in-memory [`Artifact`] without touching the filesystem.
    ///
    /// A renderer whose declared canvas differs from the writer's is rejected before the first
    /// frame is drawn.
    pub fn render_artifact(
        &self,
        prompt: &str,
        renderer: &mut dyn FrameRenderer,
    ) -> StudioResult<Artifact> {
        let declared = renderer.canvas();
        if declared != self.canvas {
            return Err(StudioError::validation(format!(
                "renderer draws {}x{}, writer is configured for {}x{}",
                declared.width, declared.height, self.canvas.width, self.canvas.height
            )));
        }

        let mut frames = Vec::with_capacity(self.total_frames as usize);

        for i in 0..self.total_frames {
            let idx = FrameIndex(i);
            let frame = renderer
                .render(idx, prompt)
                .map_err(|e| StudioError::frame_render(i, e.to_string()))?;
            if frame.canvas() != self.canvas {
                return Err(StudioError::frame_render(
                    i,
                    format!(
                        "renderer produced {}x{}, expected {}x{}",
                        frame.width, frame.height, self.canvas.width, self.canvas.height
                    ),
                ));
            }
            let png = frame
                .encode_png()
                .map_err(|e| StudioError::frame_render(i, e.to_string()))?;
            frames.push(encode_frame_data(&png));

            if idx.ordinal() % PROGRESS_EVERY == 0 {
                tracing::info!("generated {}/{} frames", idx.ordinal(), self.total_frames);
            }
            self.pacer.after_frame(idx);
        }

        let metadata = ArtifactMetadata::for_render(
            self.title.clone(),
            prompt,
            self.fps,
            self.canvas,
            frames.len(),
        );
        Ok(Artifact::new(metadata, frames))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/writer.rs"]
mod tests;
