use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use tutor_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Startup aborted: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_upload_bytes = config.max_upload_bytes;
    let cors_origin = config.cors_allowed_origin.clone();

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Startup aborted: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                .expose_headers(vec![header::HeaderName::from_static(
                    tutor_server::middleware::REQUEST_ID_HEADER,
                )])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %T [%{x-request-id}o]"#))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
