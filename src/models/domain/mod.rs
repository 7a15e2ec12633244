pub mod artifact;
pub mod extraction;
pub mod source;
pub use artifact::{ArtifactKind, GeneratedArtifact, StudyMaterials};
pub use extraction::{Extraction, ExtractionFailure};
pub use source::{InputMode, RawInput};
