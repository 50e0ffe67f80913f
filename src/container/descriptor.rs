use crate::artifact::{Artifact, ArtifactMetadata};

pub const FRAME_SEQUENCE_TYPE: &str = "FRAME_SEQUENCE";

const INSTRUCTIONS: [&str; 4] = [
    "1. Each frame is a base64-encoded PNG image",
    "2. Display frames at the specified frame rate (FPS)",
    "3. Use the video_player.html for best playback experience",
    "4. Individual frame PNGs are available in the frames/ directory",
];

/// Human-readable playback hints, one per channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackInstructions {
    pub web: String,
    pub manual: String,
    pub programming: String,
}

impl Default for PlaybackInstructions {
    fn default() -> Self {
        Self {
            web: "Open video_player.html in a web browser".to_string(),
            manual: "Extract frames and use video editing software".to_string(),
            programming: "Use the JSON data to create your own player".to_string(),
        }
    }
}

/// Descriptive summary of an artifact's frame sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSequenceDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub metadata: ArtifactMetadata,
    pub total_frames: usize,
    pub frame_rate: u32,
    pub instructions: Vec<String>,
    pub playback_instructions: PlaybackInstructions,
}

impl FrameSequenceDescriptor {
    /// Copy `artifact`'s metadata and frame count. `frame_rate` is the already-defaulted fps.
    pub fn from_artifact(artifact: &Artifact, frame_rate: u32) -> Self {
        Self {
            kind: FRAME_SEQUENCE_TYPE.to_string(),
            metadata: artifact.metadata.clone(),
            total_frames: artifact.frame_count(),
            frame_rate,
            instructions: INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
            playback_instructions: PlaybackInstructions::default(),
        }
    }
}
