use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{Extraction, InputMode, RawInput},
        dto::{
            request::{ExtractRequestDto, GenerateRequestDto},
            response::{ExtractResponseDto, GenerateResponseDto, ProcessResponseDto},
        },
    },
};

fn request_tag(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}

#[post("/api/extract")]
pub async fn extract(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ExtractRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let input = RawInput::from(request);
    let mode = input.mode();
    log::info!("[{}] Extracting {} input", request_tag(&req), mode);
    let extraction = state.tutor_service.extract(input).await;

    Ok(HttpResponse::Ok().json(ExtractResponseDto::new(mode, extraction)))
}

#[post("/api/extract/pdf")]
pub async fn extract_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if body.is_empty() {
        return Err(AppError::ValidationError(
            "Upload a PDF file".to_string(),
        ));
    }

    let max_upload_bytes = state.config.max_upload_bytes;
    if body.len() > max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "PDF is {} bytes, the limit is {} bytes",
            body.len(),
            max_upload_bytes
        )));
    }

    log::info!("[{}] Extracting {} byte PDF", request_tag(&req), body.len());
    let extraction = state
        .tutor_service
        .extract(RawInput::Pdf(body.to_vec()))
        .await;

    Ok(HttpResponse::Ok().json(ExtractResponseDto::new(InputMode::Pdf, extraction)))
}

/// Generates the summary and quiz for text previously returned by an
/// extract endpoint. Dropping the request cancels both inference calls.
#[post("/api/generate")]
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!("[{}] Generating study materials", request_tag(&req));
    let extraction = Extraction::Text(request.text);
    let materials = state.tutor_service.generate(&extraction).await;

    Ok(HttpResponse::Ok().json(GenerateResponseDto::from(materials)))
}

/// Extracts a text or URL input and generates from it in one request.
#[post("/api/process")]
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ExtractRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let input = RawInput::from(request);
    let mode = input.mode();
    log::info!("[{}] Processing {} input", request_tag(&req), mode);
    let (extraction, materials) = state.tutor_service.process(input).await;

    Ok(HttpResponse::Ok().json(ProcessResponseDto::new(mode, extraction, materials)))
}
