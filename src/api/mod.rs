// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// OpenAPI document served by Swagger UI and Redoc
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::system::service_info,

        // Generator endpoints
        crate::api::handlers::generator::generate_quick,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::check_strength,
        crate::api::handlers::generator::generate_bulk
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::BulkGenerationRequest,
            crate::api::types::BulkGenerationResponse,
            crate::api::types::GeneratedPassword,
            crate::api::types::StrengthCheckRequest,
            crate::api::types::StrengthCheckResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::ServiceInfoResponse,

            crate::models::PasswordGenerationOptions,
            crate::models::StrengthReport,
            crate::models::StrengthLevel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "System", description = "Service information")
    ),
    info(
        title = "Password Generator API",
        version = "0.1.0",
        description = "Random password generation and strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// CORS policy: any origin, JSON bodies only.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["Content-Type"])
        .max_age(3600)
}

pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    // Add Swagger UI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
    );
    // Add Redoc
    cfg.service(Redoc::with_url("/redoc", ApiDoc::openapi()));
}

pub async fn start_server(address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting password generator API on {}:{}", address, port);

    HttpServer::new(|| {
        App::new()
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configure_docs)
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;
