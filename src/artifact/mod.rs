//! Artifact schema shared by the container writer and reader.
//!
//! An artifact is a JSON document holding descriptive metadata and an ordered list of
//! base64-encoded PNG frames. It is built fully in memory and written once.

pub mod model;
pub(crate) mod validate;

pub use model::{
    ARTIFACT_FORMAT, ARTIFACT_VERSION, Artifact, ArtifactMetadata, DEFAULT_FPS,
    decode_frame_data, encode_frame_data,
};

#[cfg(test)]
#[path = "../../tests/unit/artifact/model.rs"]
mod tests;
