use std::path::PathBuf;

/// Result alias used across the crate.
pub type StudioResult<T> = Result<T, StudioError>;

/// Errors produced while writing, reading or projecting frame-sequence artifacts.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// The output directory could not be created. Raised before any frame is rendered.
    #[error("directory creation failed: '{}': {source}", path.display())]
    DirectoryCreationFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The drawing collaborator failed for one frame. No artifact is written.
    #[error("frame render failed at index {index}: {reason}")]
    FrameRenderFailed {
        /// 0-based index of the failing frame.
        index: u32,
        /// Human-readable cause.
        reason: String,
    },

    /// The artifact file is not parseable JSON.
    #[error("artifact parse failed: {0}")]
    ArtifactParseFailed(String),

    /// The artifact parsed but does not have the expected shape.
    #[error("artifact schema invalid: {0}")]
    ArtifactSchemaInvalid(String),

    /// The frame rate resolved to zero, so a segment duration cannot be computed.
    #[error("degenerate frame rate: fps must be > 0")]
    DegenerateFrameRate,

    /// Invalid configuration or render parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O and other failures, carrying `anyhow` context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Payload-free discriminant of [`StudioError`], for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`StudioError::DirectoryCreationFailed`].
    DirectoryCreationFailed,
    /// See [`StudioError::FrameRenderFailed`].
    FrameRenderFailed,
    /// See [`StudioError::ArtifactParseFailed`].
    ArtifactParseFailed,
    /// See [`StudioError::ArtifactSchemaInvalid`].
    ArtifactSchemaInvalid,
    /// See [`StudioError::DegenerateFrameRate`].
    DegenerateFrameRate,
    /// See [`StudioError::Validation`].
    Validation,
    /// See [`StudioError::Other`].
    Other,
}

impl StudioError {
    pub fn frame_render(index: u32, reason: impl Into<String>) -> Self {
        Self::FrameRenderFailed {
            index,
            reason: reason.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ArtifactParseFailed(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::ArtifactSchemaInvalid(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return the error kind without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryCreationFailed { .. } => ErrorKind::DirectoryCreationFailed,
            Self::FrameRenderFailed { .. } => ErrorKind::FrameRenderFailed,
            Self::ArtifactParseFailed(_) => ErrorKind::ArtifactParseFailed,
            Self::ArtifactSchemaInvalid(_) => ErrorKind::ArtifactSchemaInvalid,
            Self::DegenerateFrameRate => ErrorKind::DegenerateFrameRate,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
