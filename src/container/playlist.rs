use std::fmt::Write as _;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StudioError, StudioResult};

/// Most entries a playlist ever lists, regardless of how many frames the artifact holds.
///
/// Longer artifacts are truncated; the descriptor still reports the full frame count.
pub const PLAYLIST_MAX_ENTRIES: usize = 10;

/// One playlist segment: a duration and a relative reference to a frame image.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistEntry {
    pub duration_secs: f64,
    pub uri: String,
}

/// Pseudo-streaming playlist over exported frame images.
#[derive(Clone, Debug, PartialEq)]
pub struct Playlist {
    pub target_duration_secs: f64,
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Build a playlist over the first `frame_count` frames at `fps`.
    ///
    /// `frames_dir` is the directory prefix used in each entry's URI.
    pub fn from_frames(frame_count: usize, fps: u32, frames_dir: &str) -> StudioResult<Self> {
        if fps == 0 {
            return Err(StudioError::DegenerateFrameRate);
        }
        let segment = 1.0 / f64::from(fps);
        let prefix = frames_dir.trim_end_matches('/');

        let entries = (0..frame_count.min(PLAYLIST_MAX_ENTRIES))
            .map(|i| PlaylistEntry {
                duration_secs: segment,
                uri: if prefix.is_empty() {
                    frame_file_name(FrameIndex(i as u32))
                } else {
                    format!("{prefix}/{}", frame_file_name(FrameIndex(i as u32)))
                },
            })
            .collect();

        Ok(Self {
            target_duration_secs: segment,
            entries,
        })
    }

    /// Render as line-oriented M3U8 text.
    pub fn to_m3u8(&self) -> String {
        let mut out = String::new();
        out.push_str("#EXTM3U\n");
        out.push_str("#EXT-X-VERSION:3\n");
        let _ = writeln!(out, "#EXT-X-TARGETDURATION:{}", self.target_duration_secs);
        out.push_str("#EXT-X-PLAYLIST-TYPE:VOD\n");
        for e in &self.entries {
            let _ = writeln!(out, "#EXTINF:{},", e.duration_secs);
            out.push_str(&e.uri);
            out.push('\n');
        }
        out.push_str("#EXT-X-ENDLIST\n");
        out
    }
}

/// `frame_NNN.png`, 3-digit zero-padded and 1-based.
pub fn frame_file_name(idx: FrameIndex) -> String {
    format!("frame_{:03}.png", idx.ordinal())
}

#[cfg(test)]
#[path = "../../tests/unit/container/playlist.rs"]
mod tests;
