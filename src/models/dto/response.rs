use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Extraction, GeneratedArtifact, InputMode, StudyMaterials};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractStatus {
    Ready,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponseDto {
    pub mode: InputMode,
    pub status: ExtractStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub char_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExtractResponseDto {
    pub fn new(mode: InputMode, extraction: Extraction) -> Self {
        match extraction {
            Extraction::Text(text) => ExtractResponseDto {
                mode,
                status: ExtractStatus::Ready,
                char_count: text.chars().count(),
                text: Some(text),
                message: None,
            },
            Extraction::Failed(reason) => ExtractResponseDto {
                mode,
                status: ExtractStatus::Failed,
                text: None,
                char_count: 0,
                message: Some(reason.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponseDto {
    pub summary: GeneratedArtifact,
    pub quiz: GeneratedArtifact,
    pub generated_at: DateTime<Utc>,
}

impl From<StudyMaterials> for GenerateResponseDto {
    fn from(materials: StudyMaterials) -> Self {
        GenerateResponseDto {
            summary: materials.summary,
            quiz: materials.quiz,
            generated_at: materials.generated_at,
        }
    }
}

/// Body of `POST /api/process`: the extraction outcome and the materials
/// generated from it.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponseDto {
    pub extraction: ExtractResponseDto,
    #[serde(flatten)]
    pub materials: GenerateResponseDto,
}

impl ProcessResponseDto {
    pub fn new(mode: InputMode, extraction: Extraction, materials: StudyMaterials) -> Self {
        ProcessResponseDto {
            extraction: ExtractResponseDto::new(mode, extraction),
            materials: GenerateResponseDto::from(materials),
        }
    }
}
