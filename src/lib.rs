use actix_web::{error, http, web, App, HttpResponse, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;
use serde_json::json;

pub mod auth;
pub mod config;
pub mod db;
mod handlers;
pub mod models;
mod routes;
pub mod stats;
pub mod telemetry;
pub mod utils;
pub mod validation;
pub mod views;

use crate::config::session::SessionSettings;
use crate::config::settings::CorsSettings;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    session_settings: SessionSettings,
    cors_settings: CorsSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let session_settings = web::Data::new(session_settings);

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);
        for origin in &cors_settings.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config())
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(session_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Malformed or incomplete JSON bodies answer `400 {"error": ...}`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::info!("Rejected JSON payload: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}
