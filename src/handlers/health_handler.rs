use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports the active inference and extraction settings. The credential is
/// never included.
#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.hf_model,
        "text_char_limit": state.config.text_char_limit,
        "fetch_timeout_secs": state.config.fetch_timeout_secs,
        "inference_timeout_secs": state.config.inference_timeout_secs,
    }))
}
