use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::artifact::Artifact;
use crate::config::StudioConfig;
use crate::container::descriptor::FrameSequenceDescriptor;
use crate::container::playlist::{Playlist, frame_file_name};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StudioError, StudioResult};
use crate::foundation::fs::{ensure_dir, ensure_parent_dir, read_whole, write_whole};

/// Read and validate the artifact at `path`.
///
/// Distinguishes unparseable files ([`StudioError::ArtifactParseFailed`]) from well-formed JSON
/// with the wrong shape ([`StudioError::ArtifactSchemaInvalid`]).
pub fn load_artifact(path: &Path) -> StudioResult<Artifact> {
    let bytes = read_whole(path)?;
    let artifact = Artifact::from_json_slice(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        frames = artifact.frame_count(),
        "artifact loaded"
    );
    Ok(artifact)
}

/// Both derived playback representations of one artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub descriptor: FrameSequenceDescriptor,
    pub playlist: Playlist,
}

impl Projection {
    /// Project `artifact`. Playlist URIs are prefixed with `frames_dir`.
    ///
    /// A missing `fps` falls back to the default; an fps of zero is rejected before any
    /// segment duration is computed.
    pub fn build(artifact: &Artifact, frames_dir: &str) -> StudioResult<Self> {
        let fps = artifact.metadata.effective_fps();
        if fps == 0 {
            return Err(StudioError::DegenerateFrameRate);
        }
        Ok(Self {
            descriptor: FrameSequenceDescriptor::from_artifact(artifact, fps),
            playlist: Playlist::from_frames(artifact.frame_count(), fps, frames_dir)?,
        })
    }
}

/// Output locations for [`convert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertTargets {
    pub descriptor: PathBuf,
    pub playlist: PathBuf,
    /// Prefix used for frame references inside the playlist.
    pub frames_dir: String,
}

impl ConvertTargets {
    pub fn from_config(cfg: &StudioConfig) -> Self {
        Self {
            descriptor: cfg.descriptor_path(),
            playlist: cfg.playlist_path(),
            frames_dir: cfg.frames_dir.clone(),
        }
    }
}

/// Load `artifact_path`, project it and write the descriptor and playlist.
///
/// Both outputs are computed in memory first; nothing is written if loading or projection fails.
#[tracing::instrument(skip(targets), fields(artifact = %artifact_path.display()))]
pub fn convert(artifact_path: &Path, targets: &ConvertTargets) -> StudioResult<Projection> {
    let artifact = load_artifact(artifact_path)?;
    let pending = PendingConvert::prepare(&artifact, targets)?;
    pending.commit(targets)
}

/// Like [`convert`], and also export the first `limit` frames into `frames_out`.
///
/// Frames are decoded and every output directory is created before the first file is written,
/// so a failure at any of those steps leaves no descriptor or playlist behind.
#[tracing::instrument(skip(targets), fields(artifact = %artifact_path.display()))]
pub fn convert_with_frames(
    artifact_path: &Path,
    targets: &ConvertTargets,
    frames_out: &Path,
    limit: usize,
) -> StudioResult<Projection> {
    let artifact = load_artifact(artifact_path)?;
    let pending = PendingConvert::prepare(&artifact, targets)?;
    let pngs = decode_frames(&artifact, limit)?;
    ensure_dir(frames_out)?;

    let projection = pending.commit(targets)?;
    write_frames(frames_out, pngs)?;
    Ok(projection)
}

/// Serialized outputs of one conversion, not yet on disk.
struct PendingConvert {
    projection: Projection,
    descriptor_json: String,
    playlist_text: String,
}

impl PendingConvert {
    fn prepare(artifact: &Artifact, targets: &ConvertTargets) -> StudioResult<Self> {
        tracing::info!("processing {} frames", artifact.frame_count());
        let projection = Projection::build(artifact, &targets.frames_dir)?;
        let descriptor_json = serde_json::to_string_pretty(&projection.descriptor)
            .context("serialize frame descriptor")?;
        let playlist_text = projection.playlist.to_m3u8();

        ensure_parent_dir(&targets.descriptor)?;
        ensure_parent_dir(&targets.playlist)?;
        Ok(Self {
            projection,
            descriptor_json,
            playlist_text,
        })
    }

    fn commit(self, targets: &ConvertTargets) -> StudioResult<Projection> {
        write_whole(&targets.descriptor, self.descriptor_json)?;
        tracing::info!(path = %targets.descriptor.display(), "frame descriptor saved");
        write_whole(&targets.playlist, self.playlist_text)?;
        tracing::info!(
            path = %targets.playlist.display(),
            entries = self.projection.playlist.entries.len(),
            "playlist saved"
        );
        Ok(self.projection)
    }
}

/// Decode the first `limit` frames of `artifact` into `dir` as `frame_NNN.png`.
///
/// These are the files the playlist refers to.
pub fn export_frames(artifact: &Artifact, dir: &Path, limit: usize) -> StudioResult<Vec<PathBuf>> {
    let pngs = decode_frames(artifact, limit)?;
    ensure_dir(dir)?;
    write_frames(dir, pngs)
}

fn decode_frames(artifact: &Artifact, limit: usize) -> StudioResult<Vec<Vec<u8>>> {
    (0..artifact.frame_count().min(limit))
        .map(|i| artifact.decode_frame(i))
        .collect()
}

fn write_frames(dir: &Path, pngs: Vec<Vec<u8>>) -> StudioResult<Vec<PathBuf>> {
    let count = pngs.len();
    let mut written = Vec::with_capacity(count);
    for (i, png) in pngs.into_iter().enumerate() {
        let path = dir.join(frame_file_name(FrameIndex(i as u32)));
        write_whole(&path, png)?;
        written.push(path);
    }
    tracing::info!(dir = %dir.display(), count, "frame images exported");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/container/reader.rs"]
mod tests;
