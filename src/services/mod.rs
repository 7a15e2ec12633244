pub mod model_service;
pub mod normalizer;
pub mod pdf_extractor;
pub mod response_unwrapper;
pub mod tutor_service;
pub mod web_extractor;
