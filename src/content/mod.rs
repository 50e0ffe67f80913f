//! Template-filled marketing copy.
//!
//! Each content kind has its own struct; [`MarketingCopy`] tags which one was produced.

mod website;
mod youtube;

pub use website::WebsiteCopy;
pub use youtube::YouTubeCopy;

use crate::foundation::error::{StudioError, StudioResult};

/// Which kind of copy to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyKind {
    #[serde(rename = "youtube")]
    YouTube,
    Website,
}

impl std::str::FromStr for CopyKind {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        match s {
            "youtube" => Ok(Self::YouTube),
            "website" => Ok(Self::Website),
            other => Err(StudioError::validation(format!(
                "unknown copy kind '{other}'"
            ))),
        }
    }
}

/// Generated copy, tagged by kind. Serializes as the flat field map of the inner struct.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum MarketingCopy {
    YouTube(YouTubeCopy),
    Website(WebsiteCopy),
}

impl MarketingCopy {
    pub fn generate(kind: CopyKind, prompt: &str) -> Self {
        let copy = match kind {
            CopyKind::YouTube => Self::YouTube(YouTubeCopy::for_prompt(prompt)),
            CopyKind::Website => Self::Website(WebsiteCopy::for_prompt(prompt)),
        };
        tracing::info!(kind = ?kind, "copy generated");
        copy
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/mod.rs"]
mod tests;
