use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{InputMode, RawInput};

pub const MAX_REQUEST_TEXT_CHARS: u64 = 100_000;

/// Body of `POST /api/extract`. PDF uploads use their own endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_extract_request"))]
pub struct ExtractRequestDto {
    pub mode: InputMode,

    #[validate(length(max = MAX_REQUEST_TEXT_CHARS))]
    pub value: String,
}

fn validate_extract_request(request: &ExtractRequestDto) -> Result<(), ValidationError> {
    match request.mode {
        InputMode::Pdf => {
            let mut err = ValidationError::new("unsupported_mode");
            err.message = Some("PDF uploads go to /api/extract/pdf".into());
            Err(err)
        }
        InputMode::Url if request.value.trim().is_empty() => {
            let mut err = ValidationError::new("missing_url");
            err.message = Some("A URL is required".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl From<ExtractRequestDto> for RawInput {
    fn from(request: ExtractRequestDto) -> Self {
        match request.mode {
            InputMode::Url => RawInput::Url(request.value.trim().to_string()),
            InputMode::Text | InputMode::Pdf => RawInput::Text(request.value),
        }
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequestDto {
    #[validate(length(min = 1, max = MAX_REQUEST_TEXT_CHARS))]
    pub text: String,
}
