pub mod health_handler;
pub mod page_handler;
pub mod tutor_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use page_handler::index;
pub use tutor_handler::{extract, extract_pdf, generate, process};

const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// JSON extractor settings shared by the API: a body limit large enough for
/// pasted documents, and malformed bodies reported as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Registers every route on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .service(health_check_ready)
        .service(extract)
        .service(extract_pdf)
        .service(generate)
        .service(process);
}
