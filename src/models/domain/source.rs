use serde::{Deserialize, Serialize};

/// The three mutually exclusive ways content reaches the tutor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Pdf,
    Text,
    Url,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Pdf => write!(f, "pdf"),
            InputMode::Text => write!(f, "text"),
            InputMode::Url => write!(f, "url"),
        }
    }
}

/// One user-supplied input, before any extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawInput {
    Pdf(Vec<u8>),
    Text(String),
    Url(String),
}

impl RawInput {
    pub fn mode(&self) -> InputMode {
        match self {
            RawInput::Pdf(_) => InputMode::Pdf,
            RawInput::Text(_) => InputMode::Text,
            RawInput::Url(_) => InputMode::Url,
        }
    }
}
