use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::prompts::GENERATION_FALLBACK;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Summary,
    Quiz,
}

/// Display text for one output region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub content: String,
    pub is_fallback: bool,
}

impl GeneratedArtifact {
    pub fn generated(kind: ArtifactKind, content: impl Into<String>) -> Self {
        GeneratedArtifact {
            kind,
            content: content.into(),
            is_fallback: false,
        }
    }

    /// The fixed message shown when the model reply could not be used.
    pub fn fallback(kind: ArtifactKind) -> Self {
        GeneratedArtifact {
            kind,
            content: GENERATION_FALLBACK.to_string(),
            is_fallback: true,
        }
    }

    /// Carries a non-generated message, such as an extraction sentinel.
    pub fn notice(kind: ArtifactKind, message: impl Into<String>) -> Self {
        GeneratedArtifact {
            kind,
            content: message.into(),
            is_fallback: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StudyMaterials {
    pub summary: GeneratedArtifact,
    pub quiz: GeneratedArtifact,
    pub generated_at: DateTime<Utc>,
}

impl StudyMaterials {
    pub fn new(summary: GeneratedArtifact, quiz: GeneratedArtifact) -> Self {
        StudyMaterials {
            summary,
            quiz,
            generated_at: Utc::now(),
        }
    }
}
