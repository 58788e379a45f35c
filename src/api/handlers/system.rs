// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use std::collections::BTreeMap;
use crate::api::types::ServiceInfoResponse;

/// Service information
///
/// Name, version and the list of available endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service information", body = ServiceInfoResponse)
    )
)]
pub async fn service_info() -> impl Responder {
    let endpoints: BTreeMap<String, String> = [
        ("POST /api/generate", "Generate a password from a custom policy"),
        ("POST /api/check-strength", "Check the strength of a password"),
        ("GET /api/generate/quick", "Generate a password with the default policy"),
        ("POST /api/generate/bulk", "Generate 1 to 20 passwords sharing one policy"),
    ]
    .into_iter()
    .map(|(route, description)| (route.to_string(), description.to_string()))
    .collect();

    HttpResponse::Ok().json(ServiceInfoResponse {
        message: "Password Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
