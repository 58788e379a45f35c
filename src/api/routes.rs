// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Service information
    cfg.route("/", web::get().to(handlers::system::service_info));

    // Password generator and strength checker
    cfg.service(
        web::scope("/api")
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/generate/quick", web::get().to(handlers::generator::generate_quick))
            .route("/generate/bulk", web::post().to(handlers::generator::generate_bulk))
            .route("/check-strength", web::post().to(handlers::generator::check_strength))
    );
}
