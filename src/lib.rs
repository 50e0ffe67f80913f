//! promptreel turns text prompts into frame-sequence artifacts, still images and marketing copy.
//!
//! The core is the frame container:
//!
//! - A [`ContainerWriter`] drives a [`FrameRenderer`] frame by frame and writes one
//!   self-describing JSON [`Artifact`] of base64 PNG frames.
//! - The reader ([`load_artifact`], [`convert`]) validates an artifact and projects it into a
//!   [`FrameSequenceDescriptor`] and an M3U8 [`Playlist`].
//!
//! [`Studio`] wires both to configuration and the bundled scenes. It is shared by the CLI and
//! the HTTP [`server`].
#![forbid(unsafe_code)]

mod foundation;

pub mod artifact;
pub mod config;
pub mod container;
pub mod content;
pub mod pacing;
pub mod scene;
pub mod server;
pub mod studio;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex};
pub use crate::foundation::error::{ErrorKind, StudioError, StudioResult};

pub use crate::artifact::{Artifact, ArtifactMetadata};
pub use crate::config::{RenderParams, StudioConfig};
pub use crate::container::{
    ContainerWriter, ConvertTargets, FrameSequenceDescriptor, Playlist, Projection, convert,
    convert_with_frames, export_frames, load_artifact,
};
pub use crate::content::{CopyKind, MarketingCopy};
pub use crate::pacing::{FixedDelay, NoPacing, Pacer};
pub use crate::scene::{
    FontDb, FrameRenderer, GlyphFieldImage, RasterFrame, TorchlightScene, load_fonts, no_fonts,
};
pub use crate::studio::Studio;
