// src/api/utils.rs

use actix_web::HttpResponse;
use crate::api::types::{ErrorResponse, ValidationError};
use log::warn;
use serde::de::DeserializeOwned;

/// Render a validation failure as a 400 with the structured error body.
pub fn bad_request(err: &ValidationError) -> HttpResponse {
    warn!("❌ Rejected request: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse::new(err))
}

/// Parse an optional JSON body: an empty (or whitespace-only) body means
/// "use every default". Malformed bodies get the same `{ success, error }`
/// shape as every other failure.
pub fn parse_optional_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ValidationError::InvalidBody(e.to_string()))
}
